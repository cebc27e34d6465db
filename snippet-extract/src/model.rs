//! Snippet definitions as they appear in the input file.
//!
//! Both fields of an entry are modelled as untagged variants with a
//! [`Value`] catch-all, so any JSON object deserializes into a
//! [`SnippetEntry`] and shape problems surface later as skipped entries rather
//! than as parse failures.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

/// The trigger(s) of a snippet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Prefix {
    Single(String),
    /// Only the first element is ever used.
    Sequence(Vec<Value>),
    Other(Value),
}

/// The template text of a snippet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Body {
    Text(String),
    Lines(Vec<String>),
    Other(Value),
}

/// A single snippet definition. Fields other than `prefix` and `body` are
/// ignored; `null` is treated the same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SnippetEntry {
    #[serde(default)]
    pub prefix: Option<Prefix>,
    #[serde(default)]
    pub body: Option<Body>,
}

impl SnippetEntry {
    /// Interpret a raw JSON value as an entry. Anything that is not an object
    /// yields `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }
}

/// Snippet definitions keyed by snippet name, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnippetTable {
    entries: IndexMap<String, SnippetEntry>,
}

impl SnippetTable {
    /// Parse the text of a snippet file.
    ///
    /// The top level must be a JSON object. Members whose value is not an
    /// object are dropped.
    pub fn parse(source: &str) -> Result<Self, String> {
        let value: Value = serde_json::from_str(source).map_err(|e| e.to_string())?;
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(format!(
                "expected an object of snippet definitions, found {}",
                json_kind(&other)
            )),
        }
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        map.into_iter()
            .filter_map(|(name, value)| SnippetEntry::from_value(value).map(|entry| (name, entry)))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&SnippetEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SnippetEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, SnippetEntry)> for SnippetTable {
    fn from_iter<I: IntoIterator<Item = (String, SnippetEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
