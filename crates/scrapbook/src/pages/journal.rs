//! Journal list: filter bar over entry cards
//!
//! The filter bar reflects input immediately. The card grid and the results
//! line follow the state as of the last refresh, which the shell schedules
//! through its debouncer.

use std::sync::Arc;

use maud::{html, Markup};
use scrapbook_filter::FlatFilterState;
use tracing::debug;

use crate::components::card::journal_card;
use crate::components::filter_bar::flat_filter_bar;
use crate::components::{empty_state, section_header};
use crate::data::JournalData;
use crate::decor::Decor;
use crate::error::PageError;
use crate::view::{InputOutcome, PageRequest, View, ViewInput};

pub const SEARCH_PLACEHOLDER: &str = "Search journal entries...";
pub const NO_MATCHES: &str = "No entries match your search. Try different keywords or tags.";

pub struct JournalListView {
    data: Arc<JournalData>,
    fields: Vec<String>,
    filter: FlatFilterState,
    applied: FlatFilterState,
    decor: Decor,
}

impl JournalListView {
    pub fn new(data: Arc<JournalData>, fields: Vec<String>, decor: Decor) -> Self {
        let filter = FlatFilterState::new(data.entry_tags());
        Self {
            applied: filter.clone(),
            data,
            fields,
            filter,
            decor,
        }
    }

    /// Activates a known tag before the first render
    pub fn preselect(&mut self, tag: &str) -> bool {
        let known = self.filter.activate_tag(tag);
        if known {
            self.applied = self.filter.clone();
        } else {
            debug!(tag, "Ignoring unknown journal tag");
        }
        known
    }

    pub fn filter(&self) -> &FlatFilterState {
        &self.filter
    }

    /// Entry ids currently shown in the grid
    pub fn visible_ids(&self) -> Vec<&str> {
        let fields: Vec<&str> = self.fields.iter().map(String::as_str).collect();
        self.applied
            .apply(self.data.entries(), &fields)
            .into_iter()
            .map(|entry| entry.id.as_str())
            .collect()
    }
}

impl View for JournalListView {
    fn render(&mut self) -> Markup {
        let fields: Vec<&str> = self.fields.iter().map(String::as_str).collect();
        let total = self.data.entries().len();
        let results = self.applied.apply(self.data.entries(), &fields);
        let summary = self.applied.results_summary(results.len(), total);
        let cards: Vec<Markup> = results
            .iter()
            .map(|entry| journal_card(entry, &mut self.decor))
            .collect();

        html! {
            div.page-journal.page-transition.container {
                (section_header("Field Journal", "Reflections and observations from the field"))
                (flat_filter_bar(&self.filter, SEARCH_PLACEHOLDER, summary.as_deref()))
                div.journal-grid aria-label="Journal entries" {
                    @if cards.is_empty() {
                        (empty_state("🌿", NO_MATCHES))
                    }
                    @for card in &cards {
                        (card)
                    }
                }
            }
        }
    }

    fn handle_input(&mut self, input: ViewInput) -> InputOutcome {
        match input {
            ViewInput::Search(raw) => self.filter.set_search(&raw),
            ViewInput::ToggleTag(tag) => {
                if !self.filter.available_tags().contains(&tag) {
                    return InputOutcome::Ignored;
                }
                self.filter.toggle_tag(&tag);
            }
            ViewInput::Clear => self.filter.clear(),
            _ => return InputOutcome::Ignored,
        }
        InputOutcome::Debounce
    }

    fn refresh(&mut self) {
        self.applied = self.filter.clone();
    }
}

pub fn handle(request: PageRequest) -> Result<Box<dyn View>, PageError> {
    let tag = request.query_value("tag");
    let mut view = JournalListView::new(
        Arc::clone(&request.data),
        request.config.filter.journal_fields.clone(),
        request.decor,
    );
    if let Some(tag) = tag {
        view.preselect(&tag);
    }
    Ok(Box::new(view))
}
