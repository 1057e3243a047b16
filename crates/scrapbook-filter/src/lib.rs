//! # Scrapbook Filter
//!
//! Pure, side-effect-free selection of records by free-text search and tags.
//!
//! Two variants share one record abstraction ([`Filterable`]):
//! - **Flat**: search term AND (any selected tag), see [`filter_flat`]
//! - **Categorized**: search term AND, for each category with a selection,
//!   any of that category's options, see [`filter_categorized`]
//!
//! With an empty search term and no selection both variants are the identity.
//! The state types in [`state`] hold what a filter bar has selected and the
//! [`Debouncer`] coalesces rapid input into one trailing recompute.

pub mod categories;
pub mod categorized;
pub mod debounce;
pub mod flat;
pub mod record;
pub mod state;

pub use categories::{gallery_categories, FilterCategory};
pub use categorized::{filter_categorized, has_active_filters, matches_categories, TagsByCategory};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use flat::{filter_flat, matches_any_tag, matches_search, DEFAULT_SEARCH_FIELDS};
pub use record::{FieldValue, Filterable};
pub use state::{normalize_search, results_summary, CategorizedFilterState, FlatFilterState};
