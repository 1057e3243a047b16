//! Gallery page: categorized filter bar, polaroid grid and lightbox
//!
//! Like the journal list, the bar follows input immediately while the grid
//! follows the state captured at the last refresh.

use std::sync::Arc;

use maud::{html, Markup};
use scrapbook_filter::{filter_categorized, gallery_categories, CategorizedFilterState, TagsByCategory};

use crate::components::card::gallery_card;
use crate::components::filter_bar::gallery_filter_bar;
use crate::components::{empty_state, section_header, Lightbox, LightboxImage};
use crate::data::{GalleryItem, JournalData};
use crate::decor::Decor;
use crate::error::PageError;
use crate::view::{InputOutcome, PageRequest, View, ViewInput};

pub const SEARCH_PLACEHOLDER: &str = "Search photos...";
pub const NO_MATCHES: &str = "No photos match your filter.";

/// Photos matching `applied`
///
/// Untagged galleries cannot satisfy a category selection, so only the
/// search applies to them.
fn visible_items<'a>(
    data: &'a JournalData,
    applied: &CategorizedFilterState,
    any_tagged: bool,
) -> Vec<&'a GalleryItem> {
    if !any_tagged && applied.has_active_tags() {
        return filter_categorized(data.gallery(), applied.search_term(), &TagsByCategory::new());
    }
    applied.apply(data.gallery())
}

pub struct GalleryView {
    data: Arc<JournalData>,
    filter: CategorizedFilterState,
    applied: CategorizedFilterState,
    any_tagged: bool,
    lightbox: Lightbox,
    decor: Decor,
}

impl GalleryView {
    pub fn new(data: Arc<JournalData>, decor: Decor) -> Self {
        let filter = CategorizedFilterState::new(gallery_categories());
        let any_tagged = data.gallery().iter().any(|item| !item.tags.is_empty());
        Self {
            applied: filter.clone(),
            data,
            filter,
            any_tagged,
            lightbox: Lightbox::new(),
            decor,
        }
    }

    pub fn filter(&self) -> &CategorizedFilterState {
        &self.filter
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    fn visible(&self) -> Vec<&GalleryItem> {
        visible_items(&self.data, &self.applied, self.any_tagged)
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible().into_iter().map(|item| item.id.as_str()).collect()
    }

    fn open_lightbox(&mut self, index: usize) {
        let images = self
            .visible()
            .into_iter()
            .map(|item| LightboxImage::new(&item.src, item.label(), item.caption.clone()))
            .collect();
        self.lightbox.open(images, index);
    }
}

impl View for GalleryView {
    fn render(&mut self) -> Markup {
        let total = self.data.gallery().len();
        let visible = visible_items(&self.data, &self.applied, self.any_tagged);
        let summary = self.applied.results_summary(visible.len(), total);
        let tiles: Vec<Markup> = visible
            .iter()
            .enumerate()
            .map(|(index, item)| gallery_card(item, index, &mut self.decor))
            .collect();

        html! {
            div.page-gallery.page-transition.container {
                (section_header("Field Gallery", "Captured moments from the wild"))
                (gallery_filter_bar(&self.filter, SEARCH_PLACEHOLDER, summary.as_deref()))
                div.gallery-masonry aria-label="Photo gallery" {
                    @if tiles.is_empty() {
                        (empty_state("📷", NO_MATCHES))
                    }
                    @for tile in &tiles {
                        (tile)
                    }
                }
                (self.lightbox.render())
            }
        }
    }

    fn handle_input(&mut self, input: ViewInput) -> InputOutcome {
        match input {
            ViewInput::Search(raw) => {
                self.filter.set_search(&raw);
                InputOutcome::Debounce
            }
            ViewInput::ToggleOption { category, option } => {
                match self.filter.toggle_option(&category, &option) {
                    Some(_) => InputOutcome::Debounce,
                    None => InputOutcome::Ignored,
                }
            }
            ViewInput::OpenCategory(category) => {
                self.filter.toggle_open(&category);
                InputOutcome::Render
            }
            ViewInput::Clear => {
                self.filter.clear();
                InputOutcome::Debounce
            }
            ViewInput::OpenImage(index) => {
                self.open_lightbox(index);
                InputOutcome::Render
            }
            ViewInput::NextImage => {
                self.lightbox.next();
                InputOutcome::Render
            }
            ViewInput::PrevImage => {
                self.lightbox.prev();
                InputOutcome::Render
            }
            ViewInput::CloseLightbox => {
                self.lightbox.close();
                InputOutcome::Render
            }
            ViewInput::ToggleTag(_) => InputOutcome::Ignored,
        }
    }

    fn refresh(&mut self) {
        self.applied = self.filter.clone();
    }
}

pub fn handle(request: PageRequest) -> Result<Box<dyn View>, PageError> {
    Ok(Box::new(GalleryView::new(Arc::clone(&request.data), request.decor)))
}
