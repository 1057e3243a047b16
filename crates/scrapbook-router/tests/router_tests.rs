//! Integration tests for scrapbook-router
//!
//! Tests are organized by feature area and cover:
//! - Static and parameterized resolution
//! - Matching order and duplicate registration
//! - Query suffixes and hash handling
//! - Pattern validation

use pretty_assertions::assert_eq;
use rstest::rstest;
use scrapbook_router::*;

fn journal_router() -> Router<&'static str> {
    let mut router = Router::new();
    router.register("/", "home").unwrap();
    router.register("/journal", "journal").unwrap();
    router.register("/journal/:id", "entry").unwrap();
    router.register("/findings", "findings").unwrap();
    router.register("/gallery", "gallery").unwrap();
    router.register("/videos", "videos").unwrap();
    router.register("/timeline", "timeline").unwrap();
    router
}

// ============================================================================
// Basic routing
// ============================================================================

#[rstest]
#[case("/", "home")]
#[case("/journal", "journal")]
#[case("/findings", "findings")]
#[case("/gallery", "gallery")]
#[case("/videos", "videos")]
#[case("/timeline", "timeline")]
fn test_static_patterns_resolve_exactly(#[case] path: &str, #[case] expected: &str) {
    let router = journal_router();
    let m = router.resolve(path).unwrap();
    assert_eq!(*m.handler, expected);
    assert_eq!(m.pattern, path);
    assert!(m.params.is_empty());
}

#[test]
fn test_dynamic_route_extracts_id() {
    let router = journal_router();
    let m = router.resolve("/journal/abc-123").unwrap();
    assert_eq!(*m.handler, "entry");
    assert_eq!(m.pattern, "/journal/:id");
    assert_eq!(m.params.get("id"), Some("abc-123"));
    assert_eq!(m.params.len(), 1);
}

#[rstest]
#[case("/nowhere")]
#[case("/journal/abc/comments")]
#[case("/journal/")]
#[case("/Gallery")]
#[case("gallery")]
#[case("")]
fn test_unregistered_paths_are_not_found(#[case] path: &str) {
    let router = journal_router();
    assert!(router.resolve(path).is_none());
}

// ============================================================================
// Matching order
// ============================================================================

#[test]
fn test_static_match_beats_earlier_parameterized_route() {
    let mut router = Router::new();
    router.register("/journal/:id", "entry").unwrap();
    router.register("/journal/latest", "latest").unwrap();

    assert_eq!(*router.resolve("/journal/latest").unwrap().handler, "latest");
    assert_eq!(*router.resolve("/journal/other").unwrap().handler, "entry");
}

#[test]
fn test_first_registered_parameterized_route_wins() {
    let mut router = Router::new();
    router.register("/:section/:id", "generic").unwrap();
    router.register("/journal/:id", "entry").unwrap();

    let m = router.resolve("/journal/abc").unwrap();
    assert_eq!(*m.handler, "generic");
    assert_eq!(m.params.get("section"), Some("journal"));
}

#[test]
fn test_params_keep_pattern_order() {
    let mut router = Router::new();
    router.register("/archive/:year/:month", ()).unwrap();

    let m = router.resolve("/archive/2025/09").unwrap();
    let pairs: Vec<(&str, &str)> = m.params.iter().collect();
    assert_eq!(pairs, vec![("year", "2025"), ("month", "09")]);
}

#[test]
fn test_pattern_text_matches_itself_exactly() {
    let router = journal_router();
    let m = router.resolve("/journal/:id").unwrap();
    assert_eq!(*m.handler, "entry");
    assert!(m.params.is_empty());
}

// ============================================================================
// Duplicate registration
// ============================================================================

#[test]
fn test_duplicate_registration_last_wins() {
    let mut router = Router::new();
    router.register("/gallery", "old").unwrap();
    router.register("/videos", "videos").unwrap();
    router.register("/gallery", "new").unwrap();

    assert_eq!(router.len(), 2);
    assert_eq!(*router.resolve("/gallery").unwrap().handler, "new");
    assert_eq!(router.patterns().collect::<Vec<_>>(), vec!["/gallery", "/videos"]);
}

// ============================================================================
// Query strings and hashes
// ============================================================================

#[test]
fn test_query_suffix_is_ignored() {
    let router = journal_router();
    let m = router.resolve("/journal?tag=hiking").unwrap();
    assert_eq!(*m.handler, "journal");

    let m = router.resolve("/journal/abc?from=timeline").unwrap();
    assert_eq!(m.params.get("id"), Some("abc"));
}

#[test]
fn test_resolve_hash() {
    let router = journal_router();
    assert_eq!(*router.resolve_hash("#/videos").unwrap().handler, "videos");
    assert_eq!(*router.resolve_hash("").unwrap().handler, "home");
    assert_eq!(*router.resolve_hash("#").unwrap().handler, "home");
}

#[test]
fn test_params_are_percent_decoded() {
    let router = journal_router();
    let m = router.resolve("/journal/caf%C3%A9-visit").unwrap();
    assert_eq!(m.params.get("id"), Some("café-visit"));
}

#[test]
fn test_invalid_escape_is_kept_raw() {
    let router = journal_router();
    let m = router.resolve("/journal/%FF").unwrap();
    assert_eq!(m.params.get("id"), Some("%FF"));
}

// ============================================================================
// Pattern validation
// ============================================================================

#[test]
fn test_register_rejects_relative_pattern() {
    let mut router: Router<()> = Router::new();
    let err = router.register("journal", ()).unwrap_err();
    assert_eq!(err, PatternError::MissingLeadingSlash("journal".to_string()));
    assert!(router.is_empty());
}

#[test]
fn test_builder_api() {
    let router = Router::new()
        .with_route("/", 0)
        .and_then(|r| r.with_route("/journal/:id", 1))
        .unwrap();

    assert_eq!(router.routes().len(), 2);
    assert!(!router.routes()[1].pattern.is_static());
}

#[test]
fn test_section_tracking() {
    assert_eq!(section_of("/"), "home");
    assert_eq!(section_of("/journal/abc-123"), "journal");
    assert_eq!(section_of("/gallery?x=1"), "gallery");
}
