//! Home page: hero, quick tiles, latest entries and a quote

use maud::{html, Markup, PreEscaped};

use crate::components::card::featured_card;
use crate::config::SiteConfig;
use crate::data::JournalData;
use crate::decor::Decor;
use crate::error::PageError;
use crate::view::{PageRequest, StaticView, View};

/// Reveal delays cycled through by tiles and featured cards
pub const REVEAL_DELAYS: [&str; 5] = ["100", "200", "300", "400", "500"];

/// Number of entries featured on the home page
pub const FEATURED_COUNT: usize = 3;

const QUICK_TILES: [(&str, &str, &str); 5] = [
    ("reflections", "Reflections", "#/journal"),
    ("gallery", "Gallery", "#/gallery"),
    ("videos", "Videos", "#/videos"),
    ("findings", "Findings", "#/findings"),
    ("timeline", "Timeline", "#/timeline"),
];

fn tile_icon(id: &str) -> &'static str {
    match id {
        "gallery" => r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round"><rect x="3" y="4" width="18" height="16" rx="2"/><circle cx="8.5" cy="9" r="1.5"/><path d="M21 16l-5.5-5.5L7 19"/></svg>"#,
        "videos" => r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round"><rect x="3" y="4" width="18" height="16" rx="2"/><path d="M10 9l5 3-5 3z"/></svg>"#,
        "findings" => r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round"><circle cx="11" cy="11" r="7"/><path d="m20 20-3.5-3.5"/></svg>"#,
        "timeline" => r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round"><rect x="3" y="4" width="18" height="17" rx="2"/><path d="M8 2v4M16 2v4M3 9h18"/><path d="M8 13h3M13 13h3M8 17h3"/></svg>"#,
        _ => r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round"><path d="M4 5.5A2.5 2.5 0 0 1 6.5 3H11v18H6.5A2.5 2.5 0 0 0 4 23z"/><path d="M20 5.5A2.5 2.5 0 0 0 17.5 3H13v18h4.5A2.5 2.5 0 0 1 20 23z"/></svg>"#,
    }
}

pub fn render(data: &JournalData, site: &SiteConfig, decor: &mut Decor) -> Markup {
    let featured = data.entries().iter().take(FEATURED_COUNT);

    html! {
        div.page-home.page-transition {
            section.hero aria-label="Welcome" {
                div.hero-bg style=(format!("background-image: url({})", site.hero_image)) {}
                div.hero-content {
                    h1.hero-title { (site.title) }
                    p.hero-subtitle { (site.subtitle) }
                    div.hero-cta {
                        a.btn.btn-primary.btn-lg href="#/journal" { "Start Reading →" }
                    }
                }
            }

            section.container aria-label="Quick navigation" {
                div.quick-tiles {
                    @for (i, (id, label, href)) in QUICK_TILES.iter().enumerate() {
                        a.quick-tile href=(href) data-reveal=""
                            data-reveal-delay=(REVEAL_DELAYS[i % REVEAL_DELAYS.len()]) {
                            span.quick-tile-icon aria-hidden="true" { (PreEscaped(tile_icon(id))) }
                            span.quick-tile-label { (label) }
                        }
                    }
                }
            }

            section.container.featured-section aria-label="Featured entries" {
                div.section-header data-reveal="" {
                    h2.section-title { "Latest from the Field" }
                    p.section-subtitle { "Recent reflections and discoveries" }
                }
                div.featured-grid {
                    @for (i, entry) in featured.enumerate() {
                        (featured_card(entry, REVEAL_DELAYS[i % REVEAL_DELAYS.len()], decor))
                    }
                }
            }

            section.container.home-quote data-reveal="" {
                blockquote { "\u{201c}" (site.quote) "\u{201d}" }
                cite { "— " (site.quote_author) }
            }
        }
    }
}

pub fn handle(mut request: PageRequest) -> Result<Box<dyn View>, PageError> {
    Ok(StaticView::boxed(render(
        &request.data,
        &request.config.site,
        &mut request.decor,
    )))
}
