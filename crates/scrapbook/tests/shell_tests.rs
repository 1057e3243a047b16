//! End-to-end tests of the shell: routing, rendering, input and preferences
//!
//! Tests are organized by feature area and cover:
//! - Start, navigation and redirect to root
//! - Render failures keeping the previous view
//! - Debounced filter input on the journal and gallery pages
//! - Layout preference persistence
//! - Boot failure

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use scrapbook::data::{Entry, GalleryItem};
use scrapbook::pages::BOOT_FAILURE;
use scrapbook::preferences::{SCRAPBOOK_CLASS, SCRAPBOOK_MODE_KEY};
use scrapbook::{
    page_fn, Config, JournalData, MemoryStore, PageError, PreferenceStore, Shell, ShellError,
    ShellEvent, ViewInput,
};

fn entry(id: &str, date: &str, title: &str, tags: &[&str]) -> Entry {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "date": date,
        "tags": tags,
        "heroImage": format!("/img/{id}.jpg"),
        "content": [{ "type": "text", "value": format!("Body of {id}") }],
    }))
    .unwrap()
}

fn photo(id: &str, date: &str, caption: &str, tags: &[&str]) -> GalleryItem {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "src": format!("/img/{id}.jpg"),
        "caption": caption,
        "date": date,
        "tags": tags,
    }))
    .unwrap()
}

fn journal() -> JournalData {
    JournalData::default()
        .with_entries(vec![
            entry("abc-123", "2025-09-10", "Soldier fly basics", &["lab"]),
            entry("compost-walk", "2025-09-05", "Compost walk", &["tour"]),
            entry("harvest", "2025-09-01", "Harvest day", &["lab"]),
        ])
        .with_gallery(vec![
            photo("trays", "2025-09-03", "Larvae trays", &["larvae-trays", "lab-demo"]),
            photo("garden", "2025-09-01", "Roof garden", &["plants", "tour"]),
        ])
}

/// Store that can be read but never written
struct ReadOnlyStore;

#[async_trait]
impl PreferenceStore for ReadOnlyStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        bail!("store is read-only")
    }

    async fn remove(&self, _key: &str) -> Result<()> {
        bail!("store is read-only")
    }

    fn name(&self) -> &'static str {
        "read-only"
    }
}

fn config() -> Config {
    let mut config = Config::default();
    config.decor.seed = Some(7);
    config
}

fn shell_with(store: Arc<dyn PreferenceStore>) -> Shell {
    Shell::new(Arc::new(journal()), Arc::new(config()), store).unwrap()
}

async fn started() -> Shell {
    let mut shell = shell_with(Arc::new(MemoryStore::new()));
    shell.start().await.unwrap();
    shell
}

// ============================================================================
// Start and navigation
// ============================================================================

#[tokio::test]
async fn test_start_renders_home() {
    let shell = started().await;
    assert_eq!(shell.location().hash(), "#/");
    assert_eq!(shell.nav().active(), Some("home"));
    assert!(shell.content_html().contains("Latest from the Field"));
    assert!(shell.document().has_body_class(SCRAPBOOK_CLASS));
}

#[tokio::test]
async fn test_start_twice_is_rejected() {
    let mut shell = started().await;
    assert!(matches!(shell.start().await, Err(ShellError::AlreadyStarted)));
}

#[tokio::test]
async fn test_entry_route_receives_id() {
    let mut shell = started().await;
    assert!(shell.navigate("#/journal/abc-123"));
    assert_eq!(shell.process_pending().await, 1);

    let html = shell.content_html();
    assert!(html.contains("Soldier fly basics"));
    assert!(html.contains("Body of abc-123"));
    assert_eq!(shell.nav().active(), Some("journal"));
}

#[tokio::test]
async fn test_unknown_entry_shows_not_found() {
    let mut shell = started().await;
    shell.navigate("#/journal/nope");
    shell.process_pending().await;
    assert!(shell.content_html().contains("Entry not found."));
}

#[tokio::test]
async fn test_unregistered_path_redirects_to_root() {
    let mut shell = started().await;
    shell.navigate("#/gallery");
    shell.process_pending().await;

    shell.navigate("#/nowhere");
    // the miss and the redirect it queues
    assert_eq!(shell.process_pending().await, 2);
    assert_eq!(shell.location().hash(), "#/");
    assert_eq!(shell.nav().active(), Some("home"));
    assert!(shell.content_html().contains("Latest from the Field"));
}

#[tokio::test]
async fn test_same_hash_does_not_rerender() {
    let mut shell = started().await;
    assert!(!shell.navigate("#/"));
    assert!(!shell.navigate("/"));
    assert_eq!(shell.process_pending().await, 0);
}

#[tokio::test]
async fn test_navigations_handled_in_order() {
    let mut shell = started().await;
    shell.navigate("#/gallery");
    shell.navigate("#/timeline");
    assert_eq!(shell.process_pending().await, 2);
    assert!(shell.content_html().contains("Learning Timeline"));
    assert_eq!(shell.nav().active(), Some("timeline"));
}

#[tokio::test]
async fn test_route_resets_scroll() {
    let mut shell = started().await;
    shell.scroll_to(640);
    shell.navigate("#/findings");
    shell.process_pending().await;
    assert_eq!(shell.document().scroll_top(), 0);
}

#[tokio::test]
async fn test_page_html_wraps_content_root() {
    let mut shell = started().await;
    shell.navigate("#/videos");
    shell.process_pending().await;

    let page = shell.page_html();
    assert!(page.contains(r#"<main id="app""#));
    assert!(page.contains(r#"data-page="videos" aria-current="page""#));
    assert!(page.contains(r#"class="scrapbook-mode""#));
}

#[tokio::test]
async fn test_routes_listed_in_registration_order() {
    let shell = started().await;
    assert_eq!(
        shell.routes(),
        vec!["/", "/journal", "/journal/:id", "/findings", "/gallery", "/videos", "/timeline"]
    );
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_failing_page_keeps_previous_view() {
    let mut shell = shell_with(Arc::new(MemoryStore::new()));
    shell
        .router_mut()
        .register("/broken", page_fn(|_| Err(PageError::Render("boom".to_string()))))
        .unwrap();
    shell.start().await.unwrap();

    shell.navigate("#/findings");
    shell.process_pending().await;
    let before = shell.content_html();

    shell.navigate("#/broken");
    shell.process_pending().await;
    assert_eq!(shell.location().hash(), "#/broken");
    assert_eq!(shell.content_html(), before);
}

#[tokio::test]
async fn test_boot_failure_is_shown_on_every_route() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut config = config();
    config.data.dir = PathBuf::from(dir.path()).join("missing");

    let mut shell = Shell::boot(config, Arc::new(MemoryStore::new())).await.unwrap();
    shell.start().await.unwrap();
    assert!(shell.content_html().contains(BOOT_FAILURE));

    shell.navigate("#/journal");
    shell.process_pending().await;
    assert!(shell.content_html().contains(BOOT_FAILURE));
}

#[tokio::test]
async fn test_boot_loads_data_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("entries.json"),
        r#"[{ "id": "one", "title": "From disk", "date": "2025-09-01" }]"#,
    )
    .unwrap();
    let mut config = config();
    config.data.dir = dir.path().to_path_buf();

    let mut shell = Shell::boot(config, Arc::new(MemoryStore::new())).await.unwrap();
    shell.start().await.unwrap();
    assert_eq!(shell.data().entries().len(), 1);
    assert!(shell.content_html().contains("From disk"));
}

// ============================================================================
// Filter input
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_journal_search_is_debounced() {
    let mut shell = started().await;
    shell.navigate("#/journal");
    shell.process_pending().await;

    shell.dispatch(ShellEvent::Input(ViewInput::Search("Fly".to_string())));
    shell.process_pending().await;
    let html = shell.content_html();
    assert!(html.contains(r#"value="fly""#));
    assert!(!html.contains("Showing"));

    shell.settle().await;
    let html = shell.content_html();
    assert!(html.contains("Showing 1 of 3 items"));
    assert!(html.contains("Soldier fly basics"));
    assert!(!html.contains("Harvest day"));
}

#[tokio::test(start_paused = true)]
async fn test_journal_clear_restores_everything() {
    let mut shell = started().await;
    shell.navigate("#/journal");
    shell.process_pending().await;

    shell.dispatch(ShellEvent::Input(ViewInput::ToggleTag("tour".to_string())));
    shell.settle().await;
    assert!(shell.content_html().contains("Showing 1 of 3 items"));

    shell.dispatch(ShellEvent::Input(ViewInput::Clear));
    shell.settle().await;
    let html = shell.content_html();
    assert!(!html.contains("Showing"));
    assert!(html.contains("Harvest day"));
}

#[tokio::test]
async fn test_tag_query_preselects() {
    let mut shell = started().await;
    shell.navigate("#/journal?tag=tour");
    shell.process_pending().await;

    let html = shell.content_html();
    assert!(html.contains("Showing 1 of 3 items"));
    assert!(html.contains("Compost walk"));
    assert_eq!(shell.nav().active(), Some("journal"));
}

#[tokio::test]
async fn test_unknown_tag_query_ignored() {
    let mut shell = started().await;
    shell.navigate("#/journal?tag=hiking");
    shell.process_pending().await;
    assert!(!shell.content_html().contains("Showing"));
}

#[tokio::test(start_paused = true)]
async fn test_gallery_options_and_panel() {
    let mut shell = started().await;
    shell.navigate("#/gallery");
    shell.process_pending().await;

    shell.dispatch(ShellEvent::Input(ViewInput::OpenCategory("subject".to_string())));
    shell.dispatch(ShellEvent::Input(ViewInput::ToggleOption {
        category: "subject".to_string(),
        option: "plants".to_string(),
    }));
    shell.settle().await;

    let html = shell.content_html();
    assert!(html.contains("Showing 1 of 2 photos"));
    assert!(html.contains("Roof garden"));
    assert!(!html.contains("Larvae trays"));
    assert!(html.contains("#larvae-trays"));
}

#[tokio::test]
async fn test_gallery_lightbox_through_shell() {
    let mut shell = started().await;
    shell.navigate("#/gallery");
    shell.process_pending().await;

    shell.dispatch(ShellEvent::Input(ViewInput::OpenImage(1)));
    shell.process_pending().await;
    assert!(shell.content_html().contains("2 / 2"));

    shell.dispatch(ShellEvent::Input(ViewInput::NextImage));
    shell.process_pending().await;
    assert!(shell.content_html().contains("1 / 2"));
}

#[tokio::test]
async fn test_input_ignored_by_static_page() {
    let mut shell = started().await;
    let before = shell.content_html();
    shell.dispatch(ShellEvent::Input(ViewInput::Search("fly".to_string())));
    shell.process_pending().await;
    assert_eq!(shell.content_html(), before);
}

// ============================================================================
// Layout preference
// ============================================================================

#[tokio::test]
async fn test_layout_toggle_persists() {
    let store = Arc::new(MemoryStore::new());
    let mut shell = shell_with(store.clone());
    shell.start().await.unwrap();

    shell.dispatch(ShellEvent::ToggleLayout);
    shell.process_pending().await;
    assert!(!shell.document().has_body_class(SCRAPBOOK_CLASS));
    assert_eq!(
        store.get(SCRAPBOOK_MODE_KEY).await.unwrap().as_deref(),
        Some("false")
    );

    let mut next = shell_with(store);
    next.start().await.unwrap();
    assert!(!next.layout().is_scrapbook());
    assert!(!next.document().has_body_class(SCRAPBOOK_CLASS));
}

#[tokio::test]
async fn test_menu_toggle_and_close_on_route() {
    let mut shell = started().await;
    shell.dispatch(ShellEvent::ToggleMenu);
    shell.process_pending().await;
    assert!(shell.nav().is_open());

    shell.navigate("#/journal");
    shell.process_pending().await;
    assert!(!shell.nav().is_open());
}

#[tokio::test]
async fn test_layout_toggle_survives_failed_save() {
    let mut shell = shell_with(Arc::new(ReadOnlyStore));
    shell.start().await.unwrap();

    shell.dispatch(ShellEvent::ToggleLayout);
    shell.process_pending().await;
    assert!(!shell.layout().is_scrapbook());
    assert_eq!(shell.document().has_body_class(SCRAPBOOK_CLASS), shell.layout().is_scrapbook());
    assert!(shell.page_html().contains("Switch to scrapbook view"));

    shell.dispatch(ShellEvent::ToggleLayout);
    shell.process_pending().await;
    assert!(shell.layout().is_scrapbook());
    assert!(shell.document().has_body_class(SCRAPBOOK_CLASS));
}
