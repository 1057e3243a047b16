//! Navigation bar and its mobile menu

use maud::{html, Markup};

use super::aria_bool;
use crate::preferences::LayoutPreference;

/// (section, label, href) for every navbar link
pub const NAV_LINKS: [(&str, &str, &str); 6] = [
    ("home", "Home", "#/"),
    ("journal", "Journal", "#/journal"),
    ("gallery", "Gallery", "#/gallery"),
    ("videos", "Videos", "#/videos"),
    ("findings", "Findings", "#/findings"),
    ("timeline", "Timeline", "#/timeline"),
];

/// Hamburger menu state and the highlighted section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
    active: Option<String>,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the menu; returns whether it is now open
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Marks the link of `section` as the current page
    pub fn set_active(&mut self, section: &str) {
        self.active = Some(section.to_string());
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn render(&self, title: &str, layout: &LayoutPreference) -> Markup {
        html! {
            nav.navbar aria-label="Main navigation" {
                div.navbar-inner {
                    a.navbar-brand href="#/" { (title) }
                    button #navbar-toggle.navbar-toggle aria-label="Toggle navigation"
                        aria-expanded=(aria_bool(self.open)) aria-controls="navbar-menu" {
                        span.hamburger {}
                    }
                    ul #navbar-menu.navbar-menu {
                        @for (section, label, href) in NAV_LINKS {
                            li {
                                @if self.active() == Some(section) {
                                    a.nav-link href=(href) data-page=(section) aria-current="page" { (label) }
                                } @else {
                                    a.nav-link href=(href) data-page=(section) { (label) }
                                }
                            }
                        }
                    }
                    button #layout-toggle.layout-toggle.active[layout.is_scrapbook()]
                        type="button" title=(layout.toggle_title()) {
                        "✂"
                    }
                }
            }
        }
    }
}
