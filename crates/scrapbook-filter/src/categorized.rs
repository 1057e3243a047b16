//! Faceted filtering: AND across categories, OR within a category

use std::collections::BTreeMap;

use crate::flat::matches_any_tag;
use crate::record::Filterable;

/// Selected options per category id
pub type TagsByCategory = BTreeMap<String, Vec<String>>;

/// Searches caption and tags; `term` must be lowercase
fn matches_caption_or_tags<T: Filterable + ?Sized>(item: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let in_caption = item
        .caption()
        .map(|caption| caption.to_lowercase().contains(term))
        .unwrap_or(false);

    in_caption || item.tags().iter().any(|tag| tag.to_lowercase().contains(term))
}

/// Returns true when every category with a selection has a tag in common
/// with the item
pub fn matches_categories<T: Filterable + ?Sized>(item: &T, active: &TagsByCategory) -> bool {
    active
        .values()
        .filter(|options| !options.is_empty())
        .all(|options| matches_any_tag(item, options.as_slice()))
}

/// Selects items by search term and per-category option selections
///
/// Search covers the caption and tags. For every category whose selection is
/// non-empty the item must carry one of the selected options; empty
/// selections impose nothing. Input order is preserved.
pub fn filter_categorized<'a, T: Filterable>(
    items: &'a [T],
    search_term: &str,
    active: &TagsByCategory,
) -> Vec<&'a T> {
    let term = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| matches_caption_or_tags(*item, &term) && matches_categories(*item, active))
        .collect()
}

/// True iff any category has at least one selected option
///
/// # Examples
///
/// ```
/// use scrapbook_filter::{has_active_filters, TagsByCategory};
///
/// let mut active = TagsByCategory::new();
/// active.insert("theme".into(), vec![]);
/// assert!(!has_active_filters(&active));
///
/// active.insert("subject".into(), vec!["lab".into()]);
/// assert!(has_active_filters(&active));
/// ```
pub fn has_active_filters(active: &TagsByCategory) -> bool {
    active.values().any(|options| !options.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FieldValue;

    struct Photo {
        caption: Option<String>,
        tags: Vec<String>,
    }

    impl Filterable for Photo {
        fn field(&self, _name: &str) -> Option<FieldValue<'_>> {
            None
        }

        fn tags(&self) -> &[String] {
            &self.tags
        }

        fn caption(&self) -> Option<&str> {
            self.caption.as_deref()
        }
    }

    #[test]
    fn test_search_falls_back_to_tags_without_caption() {
        let photo = Photo {
            caption: None,
            tags: vec!["Greenhouse".to_string()],
        };
        assert!(matches_caption_or_tags(&photo, "green"));
        assert!(!matches_caption_or_tags(&photo, "lab"));
    }

    #[test]
    fn test_empty_selection_map_is_no_constraint() {
        let photo = Photo {
            caption: None,
            tags: vec![],
        };
        assert!(matches_categories(&photo, &TagsByCategory::new()));
    }
}
