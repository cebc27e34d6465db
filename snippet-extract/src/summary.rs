//! Human-readable report of a finished run.

use crate::table::Extraction;
use std::path::Path;

/// Counts gathered from an [`Extraction`], ready to be printed by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub extracted: usize,
    pub duplicate_keys: usize,
    /// Colliding keys in first-collision order, capped at the example limit.
    pub examples: Vec<String>,
}

impl Summary {
    pub fn new(extraction: &Extraction, example_limit: usize) -> Self {
        Self {
            extracted: extraction.table.len(),
            duplicate_keys: extraction.duplicates.len(),
            examples: extraction
                .duplicates
                .keys()
                .take(example_limit)
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn success_line(&self, output: &Path) -> String {
        format!(
            "Successfully extracted {} snippets to '{}'.",
            self.extracted,
            output.display()
        )
    }

    /// `None` when no key collided.
    pub fn warning_line(&self) -> Option<String> {
        if self.duplicate_keys == 0 {
            return None;
        }
        Some(format!(
            "Warning: {} duplicate keys encountered (last write wins). Examples: {}",
            self.duplicate_keys,
            self.examples.join(", ")
        ))
    }
}
