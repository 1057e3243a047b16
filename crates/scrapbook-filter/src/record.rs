//! Read-only view of a record for filtering

/// Content of one searchable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
}

impl FieldValue<'_> {
    /// Case-insensitive substring test; `needle` must already be lowercase
    ///
    /// A list matches when any of its elements does.
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(text) => text.to_lowercase().contains(needle),
            FieldValue::List(values) => values.iter().any(|v| v.to_lowercase().contains(needle)),
        }
    }
}

/// A record the filter engine can select from
///
/// Implementors expose their searchable fields by name and their tag list.
/// The engine never mutates a record.
pub trait Filterable {
    /// Returns the named field, or `None` when the record has no such field
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Tag list; records without tags return an empty slice
    fn tags(&self) -> &[String];

    /// Caption searched by the categorized filter
    fn caption(&self) -> Option<&str> {
        None
    }
}

impl<T: Filterable + ?Sized> Filterable for &T {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }

    fn tags(&self) -> &[String] {
        (**self).tags()
    }

    fn caption(&self) -> Option<&str> {
        (**self).caption()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_contains_ignores_case() {
        assert!(FieldValue::Text("Black Soldier FLY").contains("fly"));
        assert!(!FieldValue::Text("compost").contains("fly"));
    }

    #[test]
    fn test_list_contains_any_element() {
        let tags = vec!["larvae".to_string(), "Butterfly".to_string()];
        assert!(FieldValue::List(&tags).contains("fly"));
        assert!(!FieldValue::List(&[]).contains("fly"));
    }
}
