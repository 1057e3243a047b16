//! Filter state driven by user input
//!
//! Each filter bar owns one of these. Inputs mutate the state immediately;
//! recomputing the visible subset is left to the owner (usually after a
//! debounce).

use serde::Serialize;

use crate::categories::FilterCategory;
use crate::categorized::{filter_categorized, has_active_filters, TagsByCategory};
use crate::flat::filter_flat;
use crate::record::Filterable;

/// Normalizes raw search input: trimmed and lowercased
pub fn normalize_search(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// "Showing X of Y <noun>" while any filter is active, nothing otherwise
pub fn results_summary(active: bool, count: usize, total: usize, noun: &str) -> Option<String> {
    active.then(|| format!("Showing {count} of {total} {noun}"))
}

// ============================================================================
// Flat filter
// ============================================================================

/// Search term plus an any-of tag selection over a fixed tag vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlatFilterState {
    available: Vec<String>,
    active: Vec<String>,
    search_term: String,
}

impl FlatFilterState {
    pub fn new(available: Vec<String>) -> Self {
        Self {
            available,
            ..Self::default()
        }
    }

    /// Tags that can be selected, in display order
    pub fn available_tags(&self) -> &[String] {
        &self.available
    }

    /// Selected tags in selection order
    pub fn active_tags(&self) -> &[String] {
        &self.active
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.active.iter().any(|t| t == tag)
    }

    pub fn set_search(&mut self, raw: &str) {
        self.search_term = normalize_search(raw);
    }

    /// Flips a tag; returns whether it is now active
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        match self.active.iter().position(|t| t == tag) {
            Some(index) => {
                self.active.remove(index);
                false
            }
            None => {
                self.active.push(tag.to_string());
                true
            }
        }
    }

    /// Activates a tag by name if it is one of the available tags
    ///
    /// Returns false for unknown tags, which leave the state untouched.
    pub fn activate_tag(&mut self, tag: &str) -> bool {
        if !self.available.iter().any(|t| t == tag) {
            return false;
        }
        if !self.is_tag_active(tag) {
            self.active.push(tag.to_string());
        }
        true
    }

    /// Resets the selection and the search term together
    pub fn clear(&mut self) {
        self.active.clear();
        self.search_term.clear();
    }

    /// True when a search term or any tag is set
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || !self.active.is_empty()
    }

    pub fn apply<'a, T: Filterable>(&self, items: &'a [T], fields: &[&str]) -> Vec<&'a T> {
        filter_flat(items, &self.search_term, self.active.as_slice(), fields)
    }

    pub fn results_summary(&self, count: usize, total: usize) -> Option<String> {
        results_summary(self.is_active(), count, total, "items")
    }
}

// ============================================================================
// Categorized filter
// ============================================================================

/// Search term plus per-category option selections and the open accordion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorizedFilterState {
    categories: Vec<FilterCategory>,
    selected: Vec<Vec<String>>,
    search_term: String,
    open_category: Option<String>,
}

impl CategorizedFilterState {
    pub fn new(categories: Vec<FilterCategory>) -> Self {
        let selected = vec![Vec::new(); categories.len()];
        Self {
            categories,
            selected,
            search_term: String::new(),
            open_category: None,
        }
    }

    pub fn categories(&self) -> &[FilterCategory] {
        &self.categories
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn open_category(&self) -> Option<&str> {
        self.open_category.as_deref()
    }

    fn position(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == category)
    }

    pub fn set_search(&mut self, raw: &str) {
        self.search_term = normalize_search(raw);
    }

    /// Flips one option of one category
    ///
    /// Returns `Some(now_active)`, or `None` when the category or option is
    /// not part of this filter.
    pub fn toggle_option(&mut self, category: &str, option: &str) -> Option<bool> {
        let index = self.position(category)?;
        if !self.categories[index].has_option(option) {
            return None;
        }

        let selected = &mut self.selected[index];
        match selected.iter().position(|o| o == option) {
            Some(at) => {
                selected.remove(at);
                Some(false)
            }
            None => {
                selected.push(option.to_string());
                Some(true)
            }
        }
    }

    pub fn is_option_selected(&self, category: &str, option: &str) -> bool {
        self.position(category)
            .map(|index| self.selected[index].iter().any(|o| o == option))
            .unwrap_or(false)
    }

    /// Opens a category panel, or closes it when it is already open
    pub fn toggle_open(&mut self, category: &str) {
        if self.open_category.as_deref() == Some(category) {
            self.open_category = None;
        } else if self.position(category).is_some() {
            self.open_category = Some(category.to_string());
        }
    }

    pub fn selected_count(&self, category: &str) -> usize {
        self.position(category)
            .map(|index| self.selected[index].len())
            .unwrap_or(0)
    }

    /// Resets every selection, the search term and the open panel together
    pub fn clear(&mut self) {
        self.selected.iter_mut().for_each(Vec::clear);
        self.search_term.clear();
        self.open_category = None;
    }

    /// Current selections keyed by category id (every category present)
    pub fn snapshot(&self) -> TagsByCategory {
        self.categories
            .iter()
            .zip(&self.selected)
            .map(|(category, options)| (category.id.clone(), options.clone()))
            .collect()
    }

    pub fn has_active_tags(&self) -> bool {
        has_active_filters(&self.snapshot())
    }

    /// True when a search term or any option is set; drives "Clear all"
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || self.selected.iter().any(|s| !s.is_empty())
    }

    pub fn apply<'a, T: Filterable>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter_categorized(items, &self.search_term, &self.snapshot())
    }

    pub fn results_summary(&self, count: usize, total: usize) -> Option<String> {
        results_summary(self.is_active(), count, total, "photos")
    }
}
