//! In-memory preference store

use crate::storage::PreferenceStore;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory preference store
///
/// Values live for the lifetime of the process. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().await;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.write().await;
        values.remove(key);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
