// File: src/config.rs
// Purpose: Configuration parsing from scrapbook.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding `[data] dir`
pub const ENV_DATA_DIR: &str = "SCRAPBOOK_DATA_DIR";

/// Environment variable overriding `[filter] debounce_ms`
pub const ENV_DEBOUNCE_MS: &str = "SCRAPBOOK_DEBOUNCE_MS";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub decor: DecorConfig,
}

/// Text and imagery shown on the home page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    #[serde(default = "default_hero_image")]
    pub hero_image: String,

    #[serde(default = "default_quote")]
    pub quote: String,

    #[serde(default = "default_quote_author")]
    pub quote_author: String,
}

/// Location of the JSON collections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataConfig {
    /// Directory holding entries.json, gallery.json, ... (default: "data")
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

/// Filter bar behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterConfig {
    /// Quiet period before filter results are recomputed
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Entry fields searched on the journal page
    #[serde(default = "default_journal_fields")]
    pub journal_fields: Vec<String>,
}

/// Where the layout preference is persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_preferences_path")]
    pub preferences: PathBuf,
}

/// Scrapbook decorations
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DecorConfig {
    /// Fixed RNG seed; decorations are random per run when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

// Default values
fn default_title() -> String {
    "BugBoom x ET5131".to_string()
}

fn default_subtitle() -> String {
    "This journal follows our visit to BugBoom, a student startup turning food waste into \
     fertiliser using black soldier fly larvae. Here, we share what we learned, what surprised \
     us, and how it changed the way we think about entrepreneurship and sustainability."
        .to_string()
}

fn default_hero_image() -> String {
    "/assets/photos/20260207_vidacity_wefie.jpg".to_string()
}

fn default_quote() -> String {
    "In every walk with nature, one receives far more than he seeks.".to_string()
}

fn default_quote_author() -> String {
    "John Muir".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_debounce_ms() -> u64 {
    200
}

fn default_journal_fields() -> Vec<String> {
    vec!["title".to_string(), "summary".to_string(), "tags".to_string()]
}

fn default_preferences_path() -> PathBuf {
    PathBuf::from(".scrapbook/preferences.json")
}

// Default implementations
impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            hero_image: default_hero_image(),
            quote: default_quote(),
            quote_author: default_quote_author(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            journal_fields: default_journal_fields(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            preferences: default_preferences_path(),
        }
    }
}

impl FilterConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Config {
    /// Load configuration from scrapbook.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./scrapbook.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("scrapbook.toml")
    }

    /// Applies `SCRAPBOOK_*` environment overrides
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary lookup (env-style keys)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            self.data.dir = PathBuf::from(dir);
        }

        if let Some(ms) = lookup(ENV_DEBOUNCE_MS) {
            self.filter.debounce_ms = ms
                .trim()
                .parse()
                .with_context(|| format!("{ENV_DEBOUNCE_MS} must be milliseconds, got {ms:?}"))?;
        }

        Ok(self)
    }

    /// Journal search fields as borrowed names
    pub fn journal_fields(&self) -> Vec<&str> {
        self.filter.journal_fields.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data.dir, PathBuf::from("data"));
        assert_eq!(config.filter.debounce(), Duration::from_millis(200));
        assert_eq!(config.journal_fields(), vec!["title", "summary", "tags"]);
        assert_eq!(config.site.quote_author, "John Muir");
        assert_eq!(config.decor.seed, None);
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_sections() {
        let toml = r#"
            [site]
            title = "Pond Notes"

            [filter]
            debounce_ms = 50

            [decor]
            seed = 7
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.title, "Pond Notes");
        assert_eq!(config.site.quote_author, "John Muir");
        assert_eq!(config.filter.debounce_ms, 50);
        assert_eq!(config.filter.journal_fields.len(), 3);
        assert_eq!(config.decor.seed, Some(7));
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load("does/not/exist/scrapbook.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> =
            [(ENV_DATA_DIR, "/srv/journal"), (ENV_DEBOUNCE_MS, " 75 ")].into();
        let config = Config::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.data.dir, PathBuf::from("/srv/journal"));
        assert_eq!(config.filter.debounce_ms, 75);
    }

    #[test]
    fn test_bad_debounce_override() {
        let result = Config::default().with_overrides(|key| {
            (key == ENV_DEBOUNCE_MS).then(|| "soon".to_string())
        });
        assert!(result.is_err());
    }
}
