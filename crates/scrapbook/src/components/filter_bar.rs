//! Filter bar markup for the journal list and the gallery
//!
//! Both bars are pure views over the filter state from `scrapbook_filter`;
//! the owning page feeds user input into that state.

use maud::{html, Markup};
use scrapbook_filter::{CategorizedFilterState, FlatFilterState};

use super::{aria_bool, search_box};

/// Search box, one chip per tag and the results line
pub fn flat_filter_bar(state: &FlatFilterState, placeholder: &str, summary: Option<&str>) -> Markup {
    html! {
        div.filter-bar role="search" {
            (search_box(placeholder, state.search_term()))
            div.filter-tags {
                span.filter-label { "Filter:" }
                @for tag in state.available_tags() {
                    @let active = state.is_tag_active(tag);
                    button.tag.active[active] type="button" aria-pressed=(aria_bool(active)) data-tag=(tag) {
                        "#" (tag)
                    }
                }
            }
            (results_count(summary))
        }
    }
}

/// Search box, category pills, the open category's chips and "Clear all"
pub fn gallery_filter_bar(
    state: &CategorizedFilterState,
    placeholder: &str,
    summary: Option<&str>,
) -> Markup {
    let open = state.open_category();

    html! {
        div.gallery-filter-bar role="search" {
            (search_box(placeholder, state.search_term()))
            div.filter-controls {
                div.filter-category-pills {
                    @for category in state.categories() {
                        @let count = state.selected_count(&category.id);
                        @let is_open = open == Some(category.id.as_str());
                        button.filter-category-pill.open[is_open].has-selections[count > 0]
                            type="button" aria-expanded=(aria_bool(is_open))
                            aria-controls="gallery-filter-options" data-category=(category.id) {
                            span.filter-category-label { (category.label) }
                            @if count > 0 {
                                span.filter-category-count { (count) }
                            }
                        }
                    }
                }
                @if state.is_active() {
                    button.filter-clear-btn type="button" { "Clear all" }
                }
            }
            div.filter-options-panel.open[open.is_some()] id="gallery-filter-options" {
                div.filter-options-panel-inner {
                    @if let Some(category) = state.categories().iter().find(|c| Some(c.id.as_str()) == open) {
                        div.filter-option-group role="group" aria-label=(category.label) {
                            @for option in &category.options {
                                @let selected = state.is_option_selected(&category.id, option);
                                button.tag.filter-option-chip.active[selected] type="button"
                                    aria-pressed=(aria_bool(selected)) data-option=(option) {
                                    "#" (option)
                                }
                            }
                        }
                    }
                }
            }
            (results_count(summary))
        }
    }
}

fn results_count(summary: Option<&str>) -> Markup {
    html! {
        div.results-count aria-live="polite" role="status" {
            @if let Some(text) = summary {
                (text)
            }
        }
    }
}
