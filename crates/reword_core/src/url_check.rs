use std::sync::LazyLock;

use regex::Regex;

/// Optional http(s) scheme, a host with at least one dot and a 2+ letter
/// final label, then an optional path of non-whitespace segments.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://)?([\w.-]+\.[a-z]{2,})(/[^/\s]*)*/?$")
        .expect("url pattern is valid")
});

/// Checks whether the user-supplied address looks like a webpage URL.
/// Absent or empty input is always invalid.
pub fn validate_url(url: Option<&str>) -> bool {
    match url {
        Some(candidate) if !candidate.is_empty() => URL_PATTERN.is_match(candidate),
        _ => false,
    }
}
