//! Fullscreen image viewer

use maud::{html, Markup};

/// One image shown in the lightbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxImage {
    pub src: String,
    pub alt: String,
    pub caption: Option<String>,
}

impl LightboxImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>, caption: Option<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            caption,
        }
    }
}

/// Owned image list plus the current position
///
/// Navigation wraps around in both directions. Opening with an empty list
/// leaves the lightbox closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    images: Vec<LightboxImage>,
    index: usize,
    open: bool,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `images` starting at `start` (clamped to the last image)
    pub fn open(&mut self, images: Vec<LightboxImage>, start: usize) {
        self.open = !images.is_empty();
        self.index = start.min(images.len().saturating_sub(1));
        self.images = images;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.open {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    pub fn prev(&mut self) {
        if self.open {
            self.index = (self.index + self.images.len() - 1) % self.images.len();
        }
    }

    pub fn current(&self) -> Option<&LightboxImage> {
        self.open.then(|| self.images.get(self.index)).flatten()
    }

    /// "n / total", one-based
    pub fn counter(&self) -> Option<String> {
        self.current()
            .map(|_| format!("{} / {}", self.index + 1, self.images.len()))
    }

    /// Neighbouring indices worth preloading (no wrap-around)
    pub fn preload_indices(&self) -> Vec<usize> {
        if !self.open {
            return Vec::new();
        }
        [self.index.checked_sub(1), Some(self.index + 1)]
            .into_iter()
            .flatten()
            .filter(|&i| i < self.images.len())
            .collect()
    }

    pub fn render(&self) -> Markup {
        let Some(image) = self.current() else {
            return html! {
                div #lightbox.lightbox hidden {}
            };
        };
        let alt = if image.alt.is_empty() {
            image.caption.as_deref().unwrap_or("")
        } else {
            image.alt.as_str()
        };

        html! {
            div #lightbox.lightbox.active role="dialog" aria-modal="true" aria-label="Image viewer" {
                div.lightbox-backdrop {}
                button.lightbox-close aria-label="Close" { "×" }
                button.lightbox-prev aria-label="Previous image" { "‹" }
                figure.lightbox-figure {
                    img.lightbox-image src=(image.src) alt=(alt);
                    figcaption.lightbox-caption { (image.caption.as_deref().unwrap_or("")) }
                }
                button.lightbox-next aria-label="Next image" { "›" }
                @if let Some(counter) = self.counter() {
                    span.lightbox-counter { (counter) }
                }
                @for index in self.preload_indices() {
                    img.lightbox-preload src=(self.images[index].src) alt="" hidden;
                }
            }
        }
    }
}
