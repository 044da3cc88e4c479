use lambda_http::{Request, RequestExt};
use crate::utilities::config::get_stage_prefixes;

/// Returns the request path with any API Gateway stage prefix removed.
pub fn extract_path(event: &Request) -> String {
    let raw_path = event.raw_http_path();
    let path: &str = if raw_path.is_empty() { event.uri().path() } else { &raw_path };
    strip_stage_prefix(path, get_stage_prefixes()).to_string()
}

/// Strips the first matching prefix, only on a segment boundary.
pub fn strip_stage_prefix<'a>(path: &'a str, prefixes: &[String]) -> &'a str {
    for prefix in prefixes {
        if let Some(rest) = path.strip_prefix(prefix.as_str()) {
            if rest.is_empty() {
                return "/";
            }
            if rest.starts_with('/') {
                return rest;
            }
        }
    }
    path
}

/// Reads a query parameter. Repeated keys resolve to the last value.
pub fn query_param(event: &Request, key: &str) -> Option<String> {
    let query = event.query_string_parameters();
    query
        .all(key)
        .and_then(|values| values.last().map(|value| value.to_string()))
}
