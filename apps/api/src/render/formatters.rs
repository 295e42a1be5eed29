//! Field formatters that normalize the free-text conventions of a profile into
//! renderable fragments. All functions are total over their inputs.

/// Placeholder link target used when a project has no URL.
pub const PLACEHOLDER_HREF: &str = "#";

/// Splits a comma-separated field (`skills`, `technologies`) into trimmed labels.
///
/// Order is preserved. Empty segments from stray commas are kept as empty
/// labels, and the empty string yields a single empty label.
pub fn split_labels(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).collect()
}

/// Returns the project URL, or `#` when it is absent or empty.
pub fn link_target(url: Option<&str>) -> &str {
    match url {
        Some(url) if !url.is_empty() => url,
        _ => PLACEHOLDER_HREF,
    }
}

/// Splits a full name into its first token and the remaining tokens joined by
/// a single space. A single-token name yields an empty remainder.
pub fn split_name(full_name: &str) -> (&str, String) {
    let mut tokens = full_name.split_whitespace();
    let first = tokens.next().unwrap_or("");
    let rest = tokens.collect::<Vec<_>>().join(" ");
    (first, rest)
}

/// First character of each whitespace-separated name token.
pub fn initials(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}
