/// Path utilities for hash-fragment addresses
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

/// Extracts the route path from a location hash
///
/// **Pure function**: strips the leading `#`; an empty hash is the root path.
///
/// # Examples
///
/// ```
/// use scrapbook_router::path::hash_to_path;
///
/// assert_eq!(hash_to_path("#/journal"), "/journal");
/// assert_eq!(hash_to_path("#"), "/");
/// assert_eq!(hash_to_path(""), "/");
/// assert_eq!(hash_to_path("/gallery"), "/gallery");
/// ```
pub fn hash_to_path(hash: &str) -> &str {
    let path = hash.strip_prefix('#').unwrap_or(hash);
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

/// Splits a hash path at the first `?`
///
/// # Examples
///
/// ```
/// use scrapbook_router::path::split_query;
///
/// assert_eq!(split_query("/journal?tag=hiking"), ("/journal", Some("tag=hiking")));
/// assert_eq!(split_query("/journal"), ("/journal", None));
/// ```
pub fn split_query(path: &str) -> (&str, Option<&str>) {
    match path.split_once('?') {
        Some((route, query)) => (route, Some(query)),
        None => (path, None),
    }
}

/// Returns the top-level navigation section for a path
///
/// The root path maps to `home`; any query suffix is ignored.
///
/// # Examples
///
/// ```
/// use scrapbook_router::path::section_of;
///
/// assert_eq!(section_of("/"), "home");
/// assert_eq!(section_of("/journal/abc-123"), "journal");
/// assert_eq!(section_of("/journal?tag=hiking"), "journal");
/// ```
pub fn section_of(path: &str) -> &str {
    let (route, _) = split_query(path);
    route
        .split('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("home")
}

/// Parses a `key=value&...` query string
///
/// Keys and values are percent-decoded and `+` is read as a space, the way
/// browsers parse form-encoded queries. Pairs without `=` get an empty value.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

/// Returns the first value for `key` in a query string
///
/// # Examples
///
/// ```
/// use scrapbook_router::path::query_value;
///
/// assert_eq!(query_value("tag=food%20waste", "tag"), Some("food waste".to_string()));
/// assert_eq!(query_value("tag=a&tag=b", "tag"), Some("a".to_string()));
/// assert_eq!(query_value("sort=asc", "tag"), None);
/// ```
pub fn query_value(query: &str, key: &str) -> Option<String> {
    parse_query(query)
        .into_iter()
        .find_map(|(k, v)| (k == key).then_some(v))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(spaced)
}
