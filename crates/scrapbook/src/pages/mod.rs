//! Page handlers, one module per route

pub mod entry;
pub mod findings;
pub mod gallery;
pub mod home;
pub mod journal;
pub mod timeline;
pub mod videos;

use std::sync::Arc;

use maud::{html, Markup};
use scrapbook_router::{PatternError, Router};

use crate::components::empty_state;
use crate::view::{page_fn, PageHandler};

pub const BOOT_FAILURE: &str =
    "Something went wrong loading the journal. Please try refreshing the page.";

/// Route table of the journal
pub const ROUTES: [&str; 7] = [
    "/",
    "/journal",
    "/journal/:id",
    "/findings",
    "/gallery",
    "/videos",
    "/timeline",
];

/// Registers every page of the journal
pub fn register_routes(router: &mut Router<Arc<dyn PageHandler>>) -> Result<(), PatternError> {
    router.register("/", page_fn(home::handle))?;
    router.register("/journal", page_fn(journal::handle))?;
    router.register("/journal/:id", page_fn(entry::handle))?;
    router.register("/findings", page_fn(findings::handle))?;
    router.register("/gallery", page_fn(gallery::handle))?;
    router.register("/videos", page_fn(videos::handle))?;
    router.register("/timeline", page_fn(timeline::handle))?;
    Ok(())
}

/// Shown in place of any page when the journal data could not be loaded
pub fn boot_failure() -> Markup {
    html! {
        div.container {
            (empty_state("🌿", BOOT_FAILURE))
        }
    }
}
