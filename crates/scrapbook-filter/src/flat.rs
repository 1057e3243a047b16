//! Flat filtering: free-text search AND any-of tag selection

use crate::record::Filterable;

/// Fields searched by the journal list
pub const DEFAULT_SEARCH_FIELDS: &[&str] = &["title", "summary", "tags"];

/// Returns true when `item` contains `term` in any of `fields`
///
/// `term` must be lowercase. An empty term matches everything; a field the
/// record does not have never matches.
pub fn matches_search<T: Filterable + ?Sized>(item: &T, term: &str, fields: &[&str]) -> bool {
    term.is_empty()
        || fields
            .iter()
            .filter_map(|name| item.field(name))
            .any(|value| value.contains(term))
}

/// Returns true when the item carries at least one of `active_tags`
///
/// No active tags means no constraint.
pub fn matches_any_tag<T, S>(item: &T, active_tags: &[S]) -> bool
where
    T: Filterable + ?Sized,
    S: AsRef<str>,
{
    active_tags.is_empty() || {
        let tags = item.tags();
        active_tags
            .iter()
            .any(|wanted| tags.iter().any(|tag| tag == wanted.as_ref()))
    }
}

/// Selects the items matching a search term and an OR-ed tag selection
///
/// The result keeps input order and borrows from `items`; nothing is
/// mutated. The term is compared case-insensitively, tags exactly.
///
/// # Examples
///
/// ```
/// use scrapbook_filter::{filter_flat, FieldValue, Filterable};
///
/// struct Note { title: String, tags: Vec<String> }
///
/// impl Filterable for Note {
///     fn field(&self, name: &str) -> Option<FieldValue<'_>> {
///         match name {
///             "title" => Some(FieldValue::Text(&self.title)),
///             "tags" => Some(FieldValue::List(&self.tags)),
///             _ => None,
///         }
///     }
///     fn tags(&self) -> &[String] { &self.tags }
/// }
///
/// let notes = vec![
///     Note { title: "Larvae trays".into(), tags: vec!["lab".into()] },
///     Note { title: "Soldier fly".into(), tags: vec!["field".into()] },
/// ];
///
/// let found = filter_flat(&notes, "FLY", &[] as &[&str], &["title"]);
/// assert_eq!(found.len(), 1);
///
/// let found = filter_flat(&notes, "", &["lab", "field"], &["title"]);
/// assert_eq!(found.len(), 2);
/// ```
pub fn filter_flat<'a, T, S>(
    items: &'a [T],
    search_term: &str,
    active_tags: &[S],
    fields: &[&str],
) -> Vec<&'a T>
where
    T: Filterable,
    S: AsRef<str>,
{
    let term = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| matches_search(*item, &term, fields) && matches_any_tag(*item, active_tags))
        .collect()
}
