//! Serde models for the journal's JSON collections
//!
//! Field names follow the JSON files (camelCase). Optional collections such
//! as tags or content default to empty so sparse records still load.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use scrapbook_filter::{FieldValue, Filterable};

/// A journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub key_takeaways: Vec<String>,
}

/// One block of an entry body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text {
        value: String,
    },
    Image {
        src: String,
        #[serde(default)]
        alt: Option<String>,
        #[serde(default)]
        caption: Option<String>,
    },
    /// Block types this version does not render
    #[serde(other)]
    Unknown,
}

impl Entry {
    /// Images embedded in the entry body, in order
    pub fn content_images(&self) -> impl Iterator<Item = (&str, Option<&str>, Option<&str>)> {
        self.content.iter().filter_map(|block| match block {
            ContentBlock::Image { src, alt, caption } => {
                Some((src.as_str(), alt.as_deref(), caption.as_deref()))
            }
            _ => None,
        })
    }
}

/// A gallery photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub src: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub orientation: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl GalleryItem {
    /// Thumbnail when present, full image otherwise
    pub fn thumbnail_src(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or(&self.src)
    }

    pub fn is_landscape(&self) -> bool {
        self.orientation.as_deref() == Some("landscape")
    }

    /// Caption, or a generic label for alt text
    pub fn label(&self) -> &str {
        self.caption.as_deref().unwrap_or("Gallery photo")
    }
}

/// An insight card on the findings page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub pinned: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub src: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub duration: String,
}

/// A dated point on the learning timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub entry_id: Option<String>,
}

/// Free-form backstory record, kept as raw JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackstoryItem(pub Map<String, Value>);

impl BackstoryItem {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of a field, if it is one
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

/// Timeline file shape: a bare list or `{ "milestones": [...] }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TimelineFile {
    List(Vec<Milestone>),
    Wrapped { milestones: Vec<Milestone> },
}

impl From<TimelineFile> for Vec<Milestone> {
    fn from(file: TimelineFile) -> Self {
        match file {
            TimelineFile::List(items) | TimelineFile::Wrapped { milestones: items } => items,
        }
    }
}

// ============================================================================
// Filter integration
// ============================================================================

impl Filterable for Entry {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(&self.id)),
            "title" => Some(FieldValue::Text(&self.title)),
            "summary" => Some(FieldValue::Text(&self.summary)),
            "date" => Some(FieldValue::Text(&self.date)),
            "tags" => Some(FieldValue::List(&self.tags)),
            "keyTakeaways" => Some(FieldValue::List(&self.key_takeaways)),
            _ => None,
        }
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Filterable for GalleryItem {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "caption" => self.caption.as_deref().map(FieldValue::Text),
            "tags" => Some(FieldValue::List(&self.tags)),
            _ => None,
        }
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }
}
