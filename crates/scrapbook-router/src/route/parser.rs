/// Pattern compilation for registered routes
///
/// Turns a pattern string like `/journal/:id` into a sequence of typed
/// segments once, at registration time. Matching afterwards is a segment-count
/// check plus literal equality, no regular expressions involved.

use thiserror::Error;

use super::pattern::{classify_segment, PatternSegment};
use crate::Params;

/// Reasons a pattern cannot be registered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("route pattern must start with '/': {0:?}")]
    MissingLeadingSlash(String),

    #[error("route pattern {pattern:?} has a ':' with no parameter name")]
    EmptyParamName { pattern: String },

    #[error("route pattern {pattern:?} has more than one parameter in segment {segment:?}")]
    MultipleParamsInSegment { pattern: String, segment: String },

    #[error("route pattern {pattern:?} declares parameter {name:?} twice")]
    DuplicateParam { pattern: String, name: String },
}

/// A compiled route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    /// The pattern exactly as registered
    pub source: String,
    /// Tokenized segments (empty for the root pattern `/`)
    pub segments: Vec<PatternSegment>,
    /// Parameter names in order of appearance
    pub params: Vec<String>,
}

/// Fold accumulator for segment-by-segment compilation
#[derive(Default)]
struct ParseState {
    segments: Vec<PatternSegment>,
    params: Vec<String>,
}

impl ParseState {
    fn with_segment(mut self, source: &str, raw: &str) -> Result<Self, PatternError> {
        let segment = classify_segment(raw);

        if let PatternSegment::Param { name, .. } = &segment {
            if name.is_empty() {
                return Err(PatternError::EmptyParamName {
                    pattern: source.to_string(),
                });
            }
            if name.contains(':') {
                return Err(PatternError::MultipleParamsInSegment {
                    pattern: source.to_string(),
                    segment: raw.to_string(),
                });
            }
            if self.params.iter().any(|p| p == name) {
                return Err(PatternError::DuplicateParam {
                    pattern: source.to_string(),
                    name: name.clone(),
                });
            }
            self.params.push(name.clone());
        }

        self.segments.push(segment);
        Ok(self)
    }

    fn finish(self, source: &str) -> RoutePattern {
        RoutePattern {
            source: source.to_string(),
            segments: self.segments,
            params: self.params,
        }
    }
}

/// Splits a path (or pattern) body into raw segments.
///
/// `/` has no segments; every other `/`-separated piece is kept, empty ones
/// included, so `/a//b` and `/a/` never line up with `/a/b` or `/a`.
pub(crate) fn raw_segments(path: &str) -> Vec<&str> {
    match path.strip_prefix('/') {
        Some("") | None => Vec::new(),
        Some(body) => body.split('/').collect(),
    }
}

/// Compiles a pattern string into a [`RoutePattern`]
///
/// # Examples
///
/// ```
/// use scrapbook_router::route::parser::parse_pattern;
///
/// let pattern = parse_pattern("/journal/:id").unwrap();
/// assert_eq!(pattern.params, vec!["id".to_string()]);
/// assert!(!pattern.is_static());
///
/// assert!(parse_pattern("journal").is_err());
/// ```
pub fn parse_pattern(pattern: &str) -> Result<RoutePattern, PatternError> {
    if !pattern.starts_with('/') {
        return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
    }

    raw_segments(pattern)
        .into_iter()
        .try_fold(ParseState::default(), |state, raw| {
            state.with_segment(pattern, raw)
        })
        .map(|state| state.finish(pattern))
}

impl RoutePattern {
    /// True when the pattern has no parameters
    pub fn is_static(&self) -> bool {
        self.params.is_empty()
    }

    /// Matches a query-free path against this pattern
    ///
    /// Captured values are percent-decoded; a value that does not decode to
    /// UTF-8 is kept as written.
    pub fn matches(&self, path: &str) -> Option<Params> {
        if !path.starts_with('/') {
            return None;
        }

        let path_segments = raw_segments(path);
        if path_segments.len() != self.segments.len() {
            return None;
        }

        self.segments
            .iter()
            .zip(path_segments)
            .try_fold(Params::default(), |mut params, (token, segment)| {
                let captured = token.match_segment(segment)?;
                if let (Some(name), Some(raw)) = (token.param_name(), captured) {
                    params.push(name, decode_segment(raw));
                }
                Some(params)
            })
    }
}

fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        let pattern = parse_pattern("/").unwrap();
        assert!(pattern.segments.is_empty());
        assert!(pattern.is_static());
    }

    #[test]
    fn test_parse_static() {
        let pattern = parse_pattern("/timeline").unwrap();
        assert_eq!(
            pattern.segments,
            vec![PatternSegment::Literal("timeline".to_string())]
        );
        assert!(pattern.params.is_empty());
    }

    #[test]
    fn test_parse_dynamic() {
        let pattern = parse_pattern("/journal/:id").unwrap();
        assert_eq!(pattern.params, vec!["id".to_string()]);
        assert_eq!(pattern.segments.len(), 2);
    }

    #[test]
    fn test_parse_params_in_order() {
        let pattern = parse_pattern("/archive/:year/:month").unwrap();
        assert_eq!(pattern.params, vec!["year".to_string(), "month".to_string()]);
    }

    #[test]
    fn test_parse_rejects_missing_slash() {
        assert_eq!(
            parse_pattern("journal"),
            Err(PatternError::MissingLeadingSlash("journal".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        assert!(matches!(
            parse_pattern("/journal/:"),
            Err(PatternError::EmptyParamName { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_two_params_in_segment() {
        assert!(matches!(
            parse_pattern("/:a:b"),
            Err(PatternError::MultipleParamsInSegment { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_duplicate_name() {
        assert!(matches!(
            parse_pattern("/:id/x/:id"),
            Err(PatternError::DuplicateParam { .. })
        ));
    }

    #[test]
    fn test_matches_requires_same_segment_count() {
        let pattern = parse_pattern("/journal/:id").unwrap();
        assert!(pattern.matches("/journal").is_none());
        assert!(pattern.matches("/journal/a/b").is_none());
        assert!(pattern.matches("/journal/").is_none());
    }

    #[test]
    fn test_matches_decodes_values() {
        let pattern = parse_pattern("/journal/:id").unwrap();
        let params = pattern.matches("/journal/first%20visit").unwrap();
        assert_eq!(params.get("id"), Some("first visit"));
    }

    #[test]
    fn test_raw_segments() {
        assert!(raw_segments("/").is_empty());
        assert_eq!(raw_segments("/a/b"), vec!["a", "b"]);
        assert_eq!(raw_segments("/a/"), vec!["a", ""]);
    }
}
