pub mod browse;
pub mod render;
pub mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use scrapbook::{Config, FileStore, Shell};
use tracing::info;

/// Boots and starts a shell with the file-backed preference store
pub async fn start_shell(config: Config) -> Result<Shell> {
    info!(
        data_dir = %config.data.dir.display(),
        preferences = %config.storage.preferences.display(),
        "Booting journal"
    );
    let store = Arc::new(FileStore::new(&config.storage.preferences));
    let mut shell = Shell::boot(config, store)
        .await
        .context("Failed to create the journal shell")?;
    shell.start().await.context("Failed to start the journal shell")?;
    Ok(shell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_start_shell_boots_from_config() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("entries.json"),
            r#"[{ "id": "one", "title": "From disk", "date": "2025-09-01" }]"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.data.dir = dir.path().to_path_buf();
        config.storage.preferences = dir.path().join("prefs.json");

        let shell = start_shell(config).await.unwrap();
        assert!(shell.is_started());
        assert_eq!(shell.location().hash(), "#/");
        assert!(shell.content_html().contains("From disk"));
    }
}
