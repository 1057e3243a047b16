/// Segment classification for route patterns
///
/// Pure functional parsing of a single pattern segment into a typed token.
/// All functions are **pure**: same input → same output, no side effects.

/// A single segment of a registered route pattern
///
/// # Examples
///
/// ```
/// use scrapbook_router::route::pattern::{classify_segment, PatternSegment};
///
/// // Literal segment
/// let seg = classify_segment("journal");
/// assert!(matches!(seg, PatternSegment::Literal(_)));
///
/// // Named capture
/// let seg = classify_segment(":id");
/// assert!(matches!(seg, PatternSegment::Param { .. }));
///
/// // Capture with a literal prefix
/// let seg = classify_segment("entry-:id");
/// assert_eq!(
///     seg,
///     PatternSegment::Param { prefix: "entry-".to_string(), name: "id".to_string() }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Text that must equal the path segment exactly
    Literal(String),
    /// Captures the rest of one path segment after `prefix`
    Param { prefix: String, name: String },
}

impl PatternSegment {
    /// Matches one path segment, returning the raw captured text for params
    ///
    /// Literal segments yield `Some(None)` on a match. A param never captures
    /// an empty string.
    pub fn match_segment<'p>(&self, segment: &'p str) -> Option<Option<&'p str>> {
        match self {
            PatternSegment::Literal(text) => (text == segment).then_some(None),
            PatternSegment::Param { prefix, .. } => segment
                .strip_prefix(prefix.as_str())
                .filter(|rest| !rest.is_empty())
                .map(Some),
        }
    }

    /// Returns the capture name for param segments
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PatternSegment::Param { name, .. } => Some(name),
            PatternSegment::Literal(_) => None,
        }
    }
}

/// Classifies a segment into a pattern token (pure function)
///
/// # Parsing Rules
///
/// 1. **Param**: the segment contains `:`; text before it is a literal prefix,
///    text after it is the capture name
/// 2. **Literal**: any other text
///
/// Validation (empty names, repeated tokens) happens in the parser, so this
/// function never fails.
pub fn classify_segment(segment: &str) -> PatternSegment {
    match segment.split_once(':') {
        Some((prefix, name)) => PatternSegment::Param {
            prefix: prefix.to_string(),
            name: name.to_string(),
        },
        None => PatternSegment::Literal(segment.to_string()),
    }
}
