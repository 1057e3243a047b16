//! Scrapbook vs clean layout preference

use anyhow::Result;
use tracing::warn;

use crate::storage::PreferenceStore;

/// Storage key of the layout flag
pub const SCRAPBOOK_MODE_KEY: &str = "natures-journal-scrapbook-mode";

/// Body class present while scrapbook mode is on
pub const SCRAPBOOK_CLASS: &str = "scrapbook-mode";

/// Whether the decorated scrapbook layout is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPreference {
    scrapbook: bool,
}

impl LayoutPreference {
    pub fn new(scrapbook: bool) -> Self {
        Self { scrapbook }
    }

    /// Scrapbook mode unless the stored value is literally `false`
    pub fn from_stored(value: Option<&str>) -> Self {
        Self::new(value != Some("false"))
    }

    /// Reads the preference; an unreadable store yields the default
    pub async fn load(store: &dyn PreferenceStore) -> Self {
        match store.get(SCRAPBOOK_MODE_KEY).await {
            Ok(value) => Self::from_stored(value.as_deref()),
            Err(err) => {
                warn!(store = store.name(), error = %err, "Failed to read layout preference");
                Self::default()
            }
        }
    }

    /// Flips the mode, returning the new mode
    pub fn toggle(&mut self) -> bool {
        self.scrapbook = !self.scrapbook;
        self.scrapbook
    }

    /// Persists the current mode
    pub async fn save(&self, store: &dyn PreferenceStore) -> Result<()> {
        store
            .set(SCRAPBOOK_MODE_KEY, if self.scrapbook { "true" } else { "false" })
            .await
    }

    pub fn is_scrapbook(&self) -> bool {
        self.scrapbook
    }

    /// Tooltip of the toggle button
    pub fn toggle_title(&self) -> &'static str {
        if self.scrapbook {
            "Switch to clean view"
        } else {
            "Switch to scrapbook view"
        }
    }
}

impl Default for LayoutPreference {
    fn default() -> Self {
        Self::new(true)
    }
}
