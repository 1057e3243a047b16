//! JSON-file preference store

use crate::storage::PreferenceStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

/// Stores all preferences as one JSON object on disk
///
/// A missing file reads as empty; the parent directory is created on the
/// first write.
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read preferences: {:?}", self.path))?;

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse preferences: {:?}", self.path))
    }

    async fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .context("Failed to create preferences directory")?;
        }

        let json = serde_json::to_string_pretty(values).context("Failed to serialize preferences")?;

        fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write preferences: {:?}", self.path))
    }
}

#[async_trait]
impl PreferenceStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut values = self.read_all().await?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut values = self.read_all().await?;
        if values.remove(key).is_some() {
            self.write_all(&values).await?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}
