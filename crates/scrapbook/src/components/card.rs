//! Card markup for entries, photos, videos and findings

use maud::{html, Markup, PreEscaped};

use crate::data::{Entry, Finding, GalleryItem, Video};
use crate::dates::display_date_short;
use crate::decor::Decor;

const PLAY_ICON: &str =
    r#"<svg viewBox="0 0 24 24" fill="currentColor"><polygon points="5,3 19,12 5,21"/></svg>"#;

/// Tags shown on a journal card
const CARD_TAG_LIMIT: usize = 3;

/// Journal list card with tilt, tape and up to three tags
pub fn journal_card(entry: &Entry, decor: &mut Decor) -> Markup {
    let class = format!("card {}", decor.rotation());
    let tape = format!("tape {}", decor.tape());
    let delay = decor.reveal_delay();

    html! {
        article class=(class) data-reveal="" data-reveal-delay=(delay) tabindex="0"
            role="article" aria-label=(entry.title) data-href=(entry_href(&entry.id)) {
            div class=(tape) {}
            img.card-image src=(entry.hero_image) alt=(entry.title) loading="lazy";
            div.card-body {
                time.card-date datetime=(entry.date) { (display_date_short(&entry.date)) }
                h3.card-title { (entry.title) }
                p.card-excerpt { (entry.summary) }
                div.tag-group {
                    @for tag in entry.tags.iter().take(CARD_TAG_LIMIT) {
                        span.tag { "#" (tag) }
                    }
                }
            }
            div.card-footer {
                a.card-link href=(entry_href(&entry.id)) aria-label=(format!("Read {}", entry.title)) {
                    "Read more"
                }
            }
        }
    }
}

/// Home page card for one of the latest entries
pub fn featured_card(entry: &Entry, delay: &str, decor: &mut Decor) -> Markup {
    let class = format!("card {}", decor.rotation());
    let tape = format!("tape {}", decor.tape());

    html! {
        article class=(class) data-reveal="" data-reveal-delay=(delay)
            data-href=(entry_href(&entry.id)) {
            div class=(tape) {}
            img.card-image src=(entry.hero_image) alt=(entry.title) loading="lazy";
            div.card-body {
                time.card-date datetime=(entry.date) { (display_date_short(&entry.date)) }
                h3.card-title { (entry.title) }
                p.card-excerpt { (entry.summary) }
            }
            div.card-footer {
                a.card-link href=(entry_href(&entry.id)) { "Read more" }
            }
        }
    }
}

/// Polaroid-style gallery tile; `index` is its position in the grid
pub fn gallery_card(item: &GalleryItem, index: usize, decor: &mut Decor) -> Markup {
    let orientation = if item.is_landscape() {
        "gallery-landscape"
    } else {
        "gallery-portrait"
    };
    let class = format!("gallery-item {} {}", orientation, decor.rotation());
    let tape = format!("tape {}", decor.tape());

    html! {
        div class=(class) data-reveal="" data-reveal-delay=((index % 4) * 100)
            data-gallery-index=(index) tabindex="0" role="button"
            aria-label=(format!("View photo: {}", item.label())) {
            div.polaroid {
                div class=(tape) {}
                img.polaroid-image src=(item.thumbnail_src()) alt=(item.label()) loading="lazy";
                @if let Some(caption) = &item.caption {
                    p.polaroid-caption { (caption) }
                }
            }
        }
    }
}

pub fn video_card(video: &Video) -> Markup {
    html! {
        div.video-card data-reveal="" {
            div.video-thumbnail {
                video.video-player src=(video.src) preload="metadata" playsinline {}
                button.video-play-btn aria-label=(format!("Play {}", video.title)) {
                    (PreEscaped(PLAY_ICON))
                }
            }
            div.video-info {
                h3.video-title { (video.title) }
                p.video-description { (video.description) }
                div.video-meta {
                    span { "📅 " (display_date_short(&video.date)) }
                    span { "⏱ " (video.duration) }
                }
            }
        }
    }
}

/// Color class for a finding category; unknown categories get none
pub fn category_class(category: &str) -> Option<&'static str> {
    match category {
        "Methods" => Some("tag-methods"),
        "Results" => Some("tag-results"),
        "Lessons" => Some("tag-lessons"),
        "Mistakes" => Some("tag-mistakes"),
        "Next Steps" => Some("tag-next"),
        _ => None,
    }
}

pub fn finding_card(finding: &Finding) -> Markup {
    let category = match category_class(&finding.category) {
        Some(color) => format!("insight-category {color}"),
        None => "insight-category".to_string(),
    };

    html! {
        div.insight-card.pinned[finding.pinned] data-reveal="" {
            @if finding.pinned {
                div.pin-badge aria-label="Pinned insight" { "📌" }
            }
            div.insight-icon { (finding.icon) }
            span class=(category) { (finding.category) }
            h3.insight-title { (finding.title) }
            p.insight-content { (finding.content) }
        }
    }
}

pub fn entry_href(id: &str) -> String {
    format!("#/journal/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Entry {
        Entry {
            id: "day-1".to_string(),
            title: "First visit".to_string(),
            date: "2025-09-15".to_string(),
            summary: "Larvae".to_string(),
            tags: vec!["a", "b", "c", "d"].into_iter().map(String::from).collect(),
            hero_image: "/hero.jpg".to_string(),
            content: Vec::new(),
            key_takeaways: Vec::new(),
        }
    }

    #[test]
    fn test_journal_card_limits_tags() {
        let html = journal_card(&entry(), &mut Decor::new(Some(1))).into_string();
        assert!(html.contains("#c"));
        assert!(!html.contains("#d"));
        assert!(html.contains("Sep 15, 2025"));
        assert!(html.contains(r##"href="#/journal/day-1""##));
    }

    #[test]
    fn test_category_classes() {
        assert_eq!(category_class("Next Steps"), Some("tag-next"));
        assert_eq!(category_class("Trivia"), None);
    }

    #[test]
    fn test_pinned_finding_has_badge() {
        let finding = Finding {
            id: "f".to_string(),
            title: "Heat matters".to_string(),
            category: "Results".to_string(),
            icon: "🔥".to_string(),
            content: String::new(),
            pinned: true,
        };
        let html = finding_card(&finding).into_string();
        assert!(html.contains("insight-card pinned"));
        assert!(html.contains("pin-badge"));
        assert!(html.contains("insight-category tag-results"));
    }
}
