//! Reading snippet files and writing output tables.

use crate::error::ExtractError;
use crate::model::SnippetTable;
use crate::table::OutputTable;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io;
use std::path::Path;

/// Indentation used by [`save`].
pub const DEFAULT_INDENT: &str = "  ";

/// Read and parse a snippet file.
pub fn load(path: impl AsRef<Path>) -> Result<SnippetTable, ExtractError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ExtractError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ExtractError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    SnippetTable::parse(&source).map_err(|message| ExtractError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Write `table` as pretty-printed JSON with two-space indentation.
pub fn save(path: impl AsRef<Path>, table: &OutputTable) -> Result<(), ExtractError> {
    save_with_indent(path, table, DEFAULT_INDENT)
}

/// Write `table` as pretty-printed JSON using `indent` for each level.
///
/// Keys keep their insertion order and non-ASCII text is written as is.
pub fn save_with_indent(
    path: impl AsRef<Path>,
    table: &OutputTable,
    indent: &str,
) -> Result<(), ExtractError> {
    let path = path.as_ref();
    let write_error = |source: io::Error| ExtractError::Write {
        path: path.to_path_buf(),
        source,
    };

    let text = render(table, indent).map_err(|e| write_error(e.into()))?;
    fs::write(path, text).map_err(write_error)
}

fn render(table: &OutputTable, indent: &str) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    table.serialize(&mut serializer)?;
    Ok(buf)
}
