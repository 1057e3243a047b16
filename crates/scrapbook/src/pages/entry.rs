//! Entry detail page

use std::sync::Arc;

use maud::{html, Markup};

use crate::components::card::entry_href;
use crate::components::{Lightbox, LightboxImage};
use crate::data::{ContentBlock, Entry, JournalData};
use crate::dates::display_date;
use crate::decor::Decor;
use crate::error::PageError;
use crate::view::{InputOutcome, PageRequest, StaticView, View, ViewInput};

pub const NOT_FOUND: &str = "Entry not found.";

/// Rotation class and tilt of one inline photo
#[derive(Debug, Clone)]
struct PhotoDecor {
    rotation: String,
    tilt: String,
}

/// One entry with its lightbox
///
/// Lightbox index 0 is the hero image; body images follow in order.
pub struct EntryView {
    data: Arc<JournalData>,
    id: String,
    photos: Vec<PhotoDecor>,
    lightbox: Lightbox,
}

impl EntryView {
    /// `None` when no entry has this id
    pub fn new(data: Arc<JournalData>, id: &str, mut decor: Decor) -> Option<Self> {
        let photos = data
            .entry(id)?
            .content_images()
            .map(|_| PhotoDecor {
                rotation: decor.rotation(),
                tilt: decor.tilt(),
            })
            .collect();

        Some(Self {
            id: id.to_string(),
            data,
            photos,
            lightbox: Lightbox::new(),
        })
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    fn entry(&self) -> Option<&Entry> {
        self.data.entry(&self.id)
    }

    fn images(&self) -> Vec<LightboxImage> {
        let Some(entry) = self.entry() else {
            return Vec::new();
        };

        std::iter::once(LightboxImage::new(
            &entry.hero_image,
            &entry.title,
            Some(entry.title.clone()),
        ))
        .chain(entry.content_images().map(|(src, alt, caption)| {
            LightboxImage::new(src, alt.unwrap_or(""), caption.map(str::to_string))
        }))
        .collect()
    }
}

fn content(entry: &Entry, photos: &[PhotoDecor]) -> Markup {
    let mut blocks = Vec::with_capacity(entry.content.len());
    let mut photo = 0;

    for block in &entry.content {
        match block {
            ContentBlock::Text { value } => blocks.push(html! { p { (value) } }),
            ContentBlock::Image { src, alt, caption } => {
                let decor = photos.get(photo);
                photo += 1;
                let class = format!(
                    "content-photo-wrapper {}",
                    decor.map(|d| d.rotation.as_str()).unwrap_or("")
                );
                let style = format!(
                    "--rotate: {}",
                    decor.map(|d| d.tilt.as_str()).unwrap_or("0deg")
                );
                blocks.push(html! {
                    figure class=(class) style=(style) {
                        img.content-image src=(src) alt=(alt.as_deref().unwrap_or(""))
                            loading="lazy" data-lightbox-index=(photo);
                        @if let Some(caption) = caption {
                            figcaption.image-caption { (caption) }
                        }
                    }
                });
            }
            ContentBlock::Unknown => {}
        }
    }

    html! {
        div.entry-content {
            @for block in &blocks {
                (block)
            }
        }
    }
}

fn nav_link(entry: Option<&Entry>, class: &str, label: &str) -> Markup {
    html! {
        @if let Some(entry) = entry {
            a class=(format!("entry-nav-link {class}")) href=(entry_href(&entry.id)) {
                span.entry-nav-label { (label) }
                span.entry-nav-title { (entry.title) }
            }
        } @else {
            span {}
        }
    }
}

impl View for EntryView {
    fn render(&mut self) -> Markup {
        let Some(entry) = self.entry() else {
            return not_found();
        };
        let (older, newer) = self.data.entry_neighbors(&self.id);

        html! {
            div.page-entry-detail.page-transition.container {
                div.entry-detail {
                    a.entry-back href="#/journal" { "Back to Journal" }
                    header.entry-header {
                        time.entry-date datetime=(entry.date) { (display_date(&entry.date)) }
                        h1.entry-title { (entry.title) }
                        div.tag-group {
                            @for tag in &entry.tags {
                                a.tag href=(format!("#/journal?tag={tag}")) { "#" (tag) }
                            }
                        }
                    }
                    img.entry-hero-image src=(entry.hero_image) alt=(entry.title) data-lightbox-index="0";
                    (content(entry, &self.photos))
                    @if !entry.key_takeaways.is_empty() {
                        div.entry-takeaways.sticky-note {
                            h3.sticky-note-title { "🌿 Key Takeaways" }
                            ul.takeaway-list {
                                @for takeaway in &entry.key_takeaways {
                                    li { (takeaway) }
                                }
                            }
                        }
                    }
                    nav.entry-nav aria-label="Entry navigation" {
                        (nav_link(older, "entry-nav-prev", "← Previous"))
                        (nav_link(newer, "entry-nav-next", "Next →"))
                    }
                }
                (self.lightbox.render())
            }
        }
    }

    fn handle_input(&mut self, input: ViewInput) -> InputOutcome {
        match input {
            ViewInput::OpenImage(index) => {
                let images = self.images();
                self.lightbox.open(images, index);
            }
            ViewInput::NextImage => self.lightbox.next(),
            ViewInput::PrevImage => self.lightbox.prev(),
            ViewInput::CloseLightbox => self.lightbox.close(),
            _ => return InputOutcome::Ignored,
        }
        InputOutcome::Render
    }
}

pub fn not_found() -> Markup {
    html! {
        div.page-transition.container {
            div.empty-state {
                div.empty-state-icon { "🔍" }
                p.empty-state-text { (NOT_FOUND) }
                a.btn.btn-secondary href="#/journal" { "← Back to Journal" }
            }
        }
    }
}

pub fn handle(request: PageRequest) -> Result<Box<dyn View>, PageError> {
    let id = request.param("id")?.to_string();
    match EntryView::new(Arc::clone(&request.data), &id, request.decor) {
        Some(view) => Ok(Box::new(view)),
        None => Ok(StaticView::boxed(not_found())),
    }
}
