//! Key/value stores for user preferences

use anyhow::Result;
use async_trait::async_trait;

pub mod filesystem;
pub mod memory;

pub use filesystem::FileStore;
pub use memory::MemoryStore;

/// Trait for preference storage backends
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Get a stored value by key
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<()>;

    /// Get storage backend name
    fn name(&self) -> &'static str;
}
