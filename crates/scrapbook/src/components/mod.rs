//! Reusable markup pieces and the widgets that own transient UI state

pub mod card;
pub mod filter_bar;
pub mod lightbox;
pub mod nav;

use maud::{html, Markup, PreEscaped};

pub use lightbox::{Lightbox, LightboxImage};
pub use nav::{NavMenu, NAV_LINKS};

pub(crate) const SEARCH_ICON: &str = r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><circle cx="11" cy="11" r="8"/><path d="m21 21-4.35-4.35"/></svg>"#;

/// Centered icon plus message, used for empty results and error states
pub fn empty_state(icon: &str, text: &str) -> Markup {
    html! {
        div.empty-state {
            div.empty-state-icon { (icon) }
            p.empty-state-text { (text) }
        }
    }
}

/// Title block at the top of every page
pub fn section_header(title: &str, subtitle: &str) -> Markup {
    html! {
        div.section-header {
            h1.section-title { (title) }
            p.section-subtitle { (subtitle) }
        }
    }
}

/// ARIA state attributes spell booleans out
pub(crate) fn aria_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn search_box(placeholder: &str, value: &str) -> Markup {
    html! {
        div.search-container {
            span.search-icon aria-hidden="true" { (PreEscaped(SEARCH_ICON)) }
            input.search-input type="search" placeholder=(placeholder)
                aria-label=(placeholder) value=(value);
        }
    }
}
