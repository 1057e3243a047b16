/// Route module for hash-fragment routing
///
/// Contains pure functional components for pattern tokenizing and matching:
/// - `pattern`: classifies one segment into a literal or a named capture
/// - `parser`: compiles a whole pattern once, at registration time

pub mod parser;
pub mod pattern;

// Re-export commonly used types
pub use parser::{parse_pattern, PatternError, RoutePattern};
pub use pattern::{classify_segment, PatternSegment};
