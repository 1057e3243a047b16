// File: src/layout.rs
// Purpose: Full-document HTML shell around the content root
use maud::{html, Markup, DOCTYPE};

/// Id of the element whose children each route replaces
pub const CONTENT_ROOT_ID: &str = "app";

/// Renders a full HTML page: navbar, then the content root.
///
/// ```rust
/// use scrapbook::layout::page;
/// use maud::html;
///
/// let markup = page("Journal", "scrapbook-mode", html! { nav {} }, html! {
///     h1 { "Hello" }
/// });
/// assert!(markup.into_string().contains(r#"<main id="app""#));
/// ```
pub fn page(title: &str, body_class: &str, navbar: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href="css/styles.css";
            }
            body class=(body_class) {
                a.skip-link href="#app" { "Skip to content" }
                (navbar)
                main id=(CONTENT_ROOT_ID) tabindex="-1" {
                    (content)
                }
            }
        }
    }
}
