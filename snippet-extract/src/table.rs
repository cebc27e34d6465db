//! Building the flattened output table.

use crate::model::SnippetTable;
use crate::normalize::{flatten_body, normalize_key, select_prefix};
use crate::summary::Summary;
use indexmap::IndexMap;
use serde::Serialize;

/// Normalized key to body text, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutputTable {
    entries: IndexMap<String, String>,
}

impl OutputTable {
    /// Insert or overwrite a body. Returns `true` if the key was already
    /// present; the key keeps its original position.
    pub fn insert(&mut self, key: String, body: String) -> bool {
        self.entries.insert(key, body).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How many times each key was overwritten, ordered by first collision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateCounts {
    counts: IndexMap<String, usize>,
}

impl DuplicateCounts {
    pub fn record(&mut self, key: &str) {
        *self.counts.entry(key.to_string()).or_insert(0) += 1;
    }

    /// Overwrite count for `key`; zero if it never collided.
    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Number of distinct colliding keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Result of a build pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub table: OutputTable,
    pub duplicates: DuplicateCounts,
}

impl Extraction {
    pub fn summary(&self, example_limit: usize) -> Summary {
        Summary::new(self, example_limit)
    }
}

/// Flatten every usable entry of `snippets` into an output table.
///
/// Later entries overwrite earlier ones that normalize to the same key, and
/// every overwrite is counted.
pub fn build(snippets: &SnippetTable) -> Extraction {
    let mut extraction = Extraction::default();

    for (_name, entry) in snippets.iter() {
        let Some(raw) = select_prefix(entry) else {
            continue;
        };
        let key = normalize_key(raw);
        let body = flatten_body(entry);

        if extraction.table.insert(key.clone(), body) {
            extraction.duplicates.record(&key);
        }
    }

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(source: &str) -> SnippetTable {
        SnippetTable::parse(source).expect("fixture to parse")
    }

    #[test]
    fn builds_single_entry() {
        let extraction = build(&table(r#"{"zero": {"prefix": "\\zero", "body": ["0"]}}"#));
        assert_eq!(extraction.table.len(), 1);
        assert_eq!(extraction.table.get("\\<zero>"), Some("0"));
        assert!(extraction.duplicates.is_empty());
    }

    #[test]
    fn skipped_entries_leave_no_key() {
        let extraction = build(&table(
            r#"{
                "empty": {"prefix": "", "body": "a"},
                "none": {"prefix": [], "body": "b"},
                "absent": {"body": "c"},
                "kept": {"prefix": "k", "body": "d"}
            }"#,
        ));
        let keys: Vec<&str> = extraction.table.keys().collect();
        assert_eq!(keys, vec!["\\<k>"]);
    }

    #[test]
    fn last_write_wins_and_collisions_are_counted() {
        let extraction = build(&table(
            r#"{
                "one": {"prefix": "\\dup", "body": "first"},
                "two": {"prefix": "dup", "body": "second"}
            }"#,
        ));
        assert_eq!(extraction.table.get("\\<dup>"), Some("second"));
        assert_eq!(extraction.duplicates.get("\\<dup>"), 1);
        assert_eq!(extraction.duplicates.len(), 1);
    }

    #[test]
    fn repeated_collisions_keep_counting() {
        let extraction = build(&table(
            r#"{
                "a": {"prefix": "x", "body": "1"},
                "b": {"prefix": "y", "body": "2"},
                "c": {"prefix": ["\\x"], "body": "3"},
                "d": {"prefix": "\\x", "body": "4"}
            }"#,
        ));
        assert_eq!(extraction.duplicates.get("\\<x>"), 2);
        assert_eq!(extraction.duplicates.get("\\<y>"), 0);
        assert_eq!(extraction.table.get("\\<x>"), Some("4"));

        // The overwritten key stays where it was first inserted.
        let keys: Vec<&str> = extraction.table.keys().collect();
        assert_eq!(keys, vec!["\\<x>", "\\<y>"]);
    }

    #[test]
    fn output_serializes_as_a_plain_object() {
        let extraction = build(&table(r#"{"s": {"prefix": "\\sum", "body": "∑"}}"#));
        let json = serde_json::to_string(&extraction.table).unwrap();
        assert_eq!(json, r#"{"\\<sum>":"∑"}"#);
    }
}
