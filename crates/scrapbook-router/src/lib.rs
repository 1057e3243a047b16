//! # Scrapbook Router
//!
//! A small hash-fragment router with support for:
//! - Static routes (`/gallery`)
//! - Single-segment parameters (`/journal/:id`)
//! - Query suffixes that are ignored for matching (`/journal?tag=hiking`)
//!
//! ## Matching Order
//!
//! 1. Exact literal match against every registered pattern
//! 2. Parameterized patterns, in registration order, first match wins
//!
//! Patterns are tokenized once at registration into literal and capture
//! segments, so matching is a segment-count check plus string equality.
//!
//! ## Example
//!
//! ```
//! use scrapbook_router::Router;
//!
//! let mut router = Router::new();
//! router.register("/journal", "list").unwrap();
//! router.register("/journal/:id", "detail").unwrap();
//!
//! let route_match = router.resolve("/journal/abc-123").unwrap();
//! assert_eq!(*route_match.handler, "detail");
//! assert_eq!(route_match.params.get("id"), Some("abc-123"));
//! ```

use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod path;
pub mod route;

pub use path::{hash_to_path, parse_query, query_value, section_of, split_query};
pub use route::{classify_segment, parse_pattern, PatternError, PatternSegment, RoutePattern};

// ============================================================================
// Core Types
// ============================================================================

/// Parameters captured from a path, in order of appearance in the pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: Vec<(String, String)>,
}

impl Params {
    /// Creates an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: &str, value: String) {
        self.values.push((name.to_string(), value));
    }

    /// Looks up a parameter by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates `(name, value)` pairs in pattern order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// A registered route: compiled pattern plus its handler
#[derive(Debug, Clone)]
pub struct Route<H> {
    pub pattern: RoutePattern,
    pub handler: H,
}

/// Result of resolving a path
#[derive(Debug)]
pub struct RouteMatch<'r, H> {
    /// Pattern the path resolved to, as registered
    pub pattern: &'r str,
    /// Handler registered under that pattern
    pub handler: &'r H,
    /// Captured parameters (empty for exact matches)
    pub params: Params,
}

// ============================================================================
// Router Implementation
// ============================================================================

/// Maps path patterns to handlers
///
/// Routes keep their first registration position; registering the same
/// pattern again replaces the handler in place.
#[derive(Clone)]
pub struct Router<H> {
    routes: Vec<Route<H>>,
    index: HashMap<String, usize>,
}

impl<H> Router<H> {
    /// Creates an empty router
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registers `handler` under `pattern`
    ///
    /// The pattern must start with `/` and may hold at most one `:name`
    /// token per segment. Re-registering an identical pattern silently
    /// replaces the earlier handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use scrapbook_router::Router;
    ///
    /// let mut router = Router::new();
    /// router.register("/", 1).unwrap();
    /// router.register("/", 2).unwrap();
    ///
    /// assert_eq!(router.len(), 1);
    /// assert_eq!(*router.resolve("/").unwrap().handler, 2);
    /// ```
    pub fn register(&mut self, pattern: &str, handler: H) -> Result<(), PatternError> {
        let compiled = parse_pattern(pattern)?;

        match self.index.get(pattern) {
            Some(&position) => {
                tracing::debug!(pattern, "route re-registered, replacing handler");
                self.routes[position] = Route {
                    pattern: compiled,
                    handler,
                };
            }
            None => {
                self.index.insert(pattern.to_string(), self.routes.len());
                self.routes.push(Route {
                    pattern: compiled,
                    handler,
                });
            }
        }

        Ok(())
    }

    /// Registers a route (functional builder)
    ///
    /// # Examples
    ///
    /// ```
    /// use scrapbook_router::Router;
    ///
    /// let router = Router::new()
    ///     .with_route("/gallery", "gallery").unwrap()
    ///     .with_route("/videos", "videos").unwrap();
    ///
    /// assert_eq!(router.len(), 2);
    /// ```
    pub fn with_route(mut self, pattern: &str, handler: H) -> Result<Self, PatternError> {
        self.register(pattern, handler)?;
        Ok(self)
    }

    /// Resolves a path to its handler and parameters
    ///
    /// Anything after `?` is ignored. An exact literal match wins over every
    /// parameterized pattern; otherwise parameterized patterns are tried in
    /// registration order. `None` means "not found".
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_, H>> {
        let (path, _) = split_query(path);

        if let Some(&position) = self.index.get(path) {
            let route = &self.routes[position];
            return Some(RouteMatch {
                pattern: &route.pattern.source,
                handler: &route.handler,
                params: Params::new(),
            });
        }

        self.routes
            .iter()
            .filter(|route| !route.pattern.is_static())
            .find_map(|route| {
                route.pattern.matches(path).map(|params| RouteMatch {
                    pattern: &route.pattern.source,
                    handler: &route.handler,
                    params,
                })
            })
    }

    /// Resolves a location hash such as `#/journal/abc`
    pub fn resolve_hash(&self, hash: &str) -> Option<RouteMatch<'_, H>> {
        self.resolve(hash_to_path(hash))
    }

    /// Registered patterns in registration order
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.pattern.source.as_str())
    }

    /// All registered routes in registration order
    pub fn routes(&self) -> &[Route<H>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for Router<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("patterns", &self.patterns().collect::<Vec<_>>())
            .finish()
    }
}
