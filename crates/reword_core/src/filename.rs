use chrono::{DateTime, SecondsFormat, Utc};

/// File extension used for every delivered artifact.
pub const ARTIFACT_EXTENSION: &str = "mhtml";

/// Reduces a URL to its bare domain: scheme, path, port and a leading
/// `www.` label are all stripped.
pub fn extract_domain(url: &str) -> &str {
    let rest = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url.strip_prefix("//").unwrap_or(url),
    };
    let rest = rest.split('/').next().unwrap_or(rest);
    let rest = rest.split(':').next().unwrap_or(rest);
    rest.strip_prefix("www.").unwrap_or(rest)
}

/// Deterministic artifact filename: `{domain}-{ISO8601 millis}.mhtml`.
/// Same URL and timestamp always yield the same name; distinct timestamps
/// keep repeated jobs for one URL apart.
pub fn derive_file_name(url: &str, at: DateTime<Utc>) -> String {
    format!(
        "{}-{}.{ARTIFACT_EXTENSION}",
        extract_domain(url),
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}
