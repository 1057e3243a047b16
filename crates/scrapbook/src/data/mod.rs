//! Journal data: loading, ordering and lookups
//!
//! [`JournalData`] is created once at boot and shared read-only. Collections
//! are sorted on the way in:
//! - entries and gallery by date, newest first
//! - timeline by date, oldest first
//!
//! A collection whose file is missing or malformed is replaced by an empty
//! one (logged); only a missing data directory fails the load.

pub mod models;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{info, warn};

pub use models::{BackstoryItem, ContentBlock, Entry, Finding, GalleryItem, Milestone, Video};

use crate::dates::parse_date;
use crate::error::DataError;
use models::TimelineFile;

pub const ENTRIES_FILE: &str = "entries.json";
pub const GALLERY_FILE: &str = "gallery.json";
pub const BACKSTORY_FILE: &str = "backstory.json";
pub const FINDINGS_FILE: &str = "findings.json";
pub const VIDEOS_FILE: &str = "videos.json";
pub const TIMELINE_FILE: &str = "timeline.json";

/// Every collection the journal renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalData {
    entries: Vec<Entry>,
    gallery: Vec<GalleryItem>,
    backstory: Vec<BackstoryItem>,
    findings: Vec<Finding>,
    videos: Vec<Video>,
    timeline: Vec<Milestone>,
}

async fn read_json<T: DeserializeOwned>(path: PathBuf) -> Result<T, DataError> {
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| DataError::Read {
            path: path.clone(),
            source,
        })?;
    serde_json::from_str(&content).map_err(|source| DataError::Parse { path, source })
}

/// Unwraps a collection result, logging and substituting empty on failure
fn or_empty<T>(name: &str, result: Result<Vec<T>, DataError>) -> Vec<T> {
    result.unwrap_or_else(|err| {
        warn!(collection = name, error = %err, "Failed to load collection, using empty");
        Vec::new()
    })
}

impl JournalData {
    /// Loads the six JSON collections from `dir` concurrently
    pub async fn load(dir: impl AsRef<Path>) -> Result<Self, DataError> {
        let dir = dir.as_ref();
        if !tokio::fs::metadata(dir)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
        {
            return Err(DataError::MissingDirectory(dir.to_path_buf()));
        }

        let (entries, gallery, backstory, findings, videos, timeline) = tokio::join!(
            read_json::<Vec<Entry>>(dir.join(ENTRIES_FILE)),
            read_json::<Vec<GalleryItem>>(dir.join(GALLERY_FILE)),
            read_json::<Vec<BackstoryItem>>(dir.join(BACKSTORY_FILE)),
            read_json::<Vec<Finding>>(dir.join(FINDINGS_FILE)),
            read_json::<Vec<Video>>(dir.join(VIDEOS_FILE)),
            read_json::<TimelineFile>(dir.join(TIMELINE_FILE)),
        );

        let data = Self::default()
            .with_entries(or_empty("entries", entries))
            .with_gallery(or_empty("gallery", gallery))
            .with_backstory(or_empty("backstory", backstory))
            .with_findings(or_empty("findings", findings))
            .with_videos(or_empty("videos", videos))
            .with_timeline(or_empty("timeline", timeline.map(Vec::<Milestone>::from)));

        info!(
            dir = %dir.display(),
            entries = data.entries.len(),
            gallery = data.gallery.len(),
            findings = data.findings.len(),
            videos = data.videos.len(),
            timeline = data.timeline.len(),
            "Journal data loaded"
        );

        Ok(data)
    }

    // ------------------------------------------------------------------------
    // Builders (each sorts its collection)
    // ------------------------------------------------------------------------

    pub fn with_entries(mut self, mut entries: Vec<Entry>) -> Self {
        entries.sort_by(|a, b| parse_date(&b.date).cmp(&parse_date(&a.date)));
        self.entries = entries;
        self
    }

    pub fn with_gallery(mut self, mut gallery: Vec<GalleryItem>) -> Self {
        gallery.sort_by(|a, b| parse_date(&b.date).cmp(&parse_date(&a.date)));
        self.gallery = gallery;
        self
    }

    pub fn with_backstory(mut self, backstory: Vec<BackstoryItem>) -> Self {
        self.backstory = backstory;
        self
    }

    pub fn with_findings(mut self, findings: Vec<Finding>) -> Self {
        self.findings = findings;
        self
    }

    pub fn with_videos(mut self, videos: Vec<Video>) -> Self {
        self.videos = videos;
        self
    }

    pub fn with_timeline(mut self, mut timeline: Vec<Milestone>) -> Self {
        timeline.sort_by_key(|m| parse_date(&m.date));
        self.timeline = timeline;
        self
    }

    // ------------------------------------------------------------------------
    // Getters
    // ------------------------------------------------------------------------

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entry_index(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Neighbours of an entry as (older, newer)
    pub fn entry_neighbors(&self, id: &str) -> (Option<&Entry>, Option<&Entry>) {
        match self.entry_index(id) {
            Some(index) => (
                self.entries.get(index + 1),
                index.checked_sub(1).and_then(|i| self.entries.get(i)),
            ),
            None => (None, None),
        }
    }

    pub fn gallery(&self) -> &[GalleryItem] {
        &self.gallery
    }

    pub fn backstory(&self) -> &[BackstoryItem] {
        &self.backstory
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn timeline(&self) -> &[Milestone] {
        &self.timeline
    }

    /// Unique entry tags, sorted
    pub fn entry_tags(&self) -> Vec<String> {
        unique_sorted(self.entries.iter().flat_map(|e| &e.tags))
    }

    /// Unique gallery tags, sorted
    pub fn gallery_tags(&self) -> Vec<String> {
        unique_sorted(self.gallery.iter().flat_map(|g| &g.tags))
    }

    /// Finding categories in first-seen order
    pub fn finding_categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for finding in &self.findings {
            if !seen.contains(&finding.category.as_str()) {
                seen.push(finding.category.as_str());
            }
        }
        seen
    }
}

fn unique_sorted<'a>(tags: impl Iterator<Item = &'a String>) -> Vec<String> {
    tags.collect::<BTreeSet<_>>().into_iter().cloned().collect()
}
