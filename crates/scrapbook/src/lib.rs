// Scrapbook - learning journal rendered from static JSON
// Hash-routed pages, filter bars and widgets over one read-only data set

pub mod components;
pub mod config;
pub mod data;
pub mod dates;
pub mod decor;
pub mod error;
pub mod layout;
pub mod pages;
pub mod preferences;
pub mod shell;
pub mod storage;
pub mod view;

// Re-export Maud for page functions
pub use maud::{html, Markup};

// Re-export core types
pub use config::Config;
pub use data::JournalData;
pub use decor::Decor;
pub use error::{DataError, PageError, ShellError};
pub use preferences::LayoutPreference;
pub use shell::{Document, Location, Shell, ShellEvent};
pub use storage::{FileStore, MemoryStore, PreferenceStore};
pub use view::{page_fn, InputOutcome, PageHandler, PageRequest, StaticView, View, ViewInput};

// Re-export the workspace crates the shell is built on
pub use scrapbook_filter;
pub use scrapbook_router;
