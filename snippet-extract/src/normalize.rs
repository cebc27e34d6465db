//! Per-entry transforms: trigger selection, key normalization and body
//! flattening.

use crate::model::{Body, Prefix, SnippetEntry};

/// Rewrite a raw trigger into the `\<name>` key form.
///
/// A single leading backslash is dropped before wrapping; any further
/// backslashes are kept. Input that already looks bracketed is wrapped again.
pub fn normalize_key(raw: &str) -> String {
    let name = raw.strip_prefix('\\').unwrap_or(raw);
    format!("\\<{name}>")
}

/// Pick the raw trigger of an entry, or `None` when the entry has no usable
/// prefix and must be skipped.
pub fn select_prefix(entry: &SnippetEntry) -> Option<&str> {
    match entry.prefix.as_ref()? {
        Prefix::Single(raw) if raw.is_empty() => None,
        Prefix::Single(raw) => Some(raw.as_str()),
        Prefix::Sequence(values) => values.first()?.as_str(),
        Prefix::Other(_) => None,
    }
}

/// Collapse an entry's body into a single string.
///
/// Line sequences are joined with `\n`. Shapes other than a string or a list
/// of strings are rendered as compact JSON.
pub fn flatten_body(entry: &SnippetEntry) -> String {
    match &entry.body {
        None => String::new(),
        Some(Body::Text(text)) => text.clone(),
        Some(Body::Lines(lines)) => lines.join("\n"),
        Some(Body::Other(value)) => value.to_string(),
    }
}
