//! Flattening of editor snippet definitions
//!
//!     A snippet file maps snippet names to objects carrying a `prefix` (the trigger a user types)
//!     and a `body` (the text inserted). This crate turns such a file into a flat lookup table from
//!     a normalized trigger key to a single body string, in the `\<name>` escape style:
//!
//!         {"zero": {"prefix": "\\zero", "body": ["0"]}}   ->   {"\\<zero>": "0"}
//!
//!     This is a pure lib: it powers the extract-snippets binary but never prints, and never reads
//!     the environment. Reporting is left to the caller through [`Summary`].
//!
//! Pipeline
//!
//!     The run is strictly linear, and any error ends it:
//!
//!         load  -> SnippetTable                (io.rs, model.rs)
//!         build -> OutputTable + DuplicateCounts (table.rs, normalize.rs)
//!         save  -> pretty JSON on disk         (io.rs)
//!
//!     Malformed entries are not errors. Entries without a usable prefix are skipped, and bodies
//!     of unexpected shape are rendered as JSON text.
//!
//! Collisions
//!
//!     Two entries may normalize to the same key. The later one wins, the key keeps its first
//!     position, and the overwrite is counted in [`DuplicateCounts`].

pub mod error;
pub mod io;
pub mod model;
pub mod normalize;
pub mod summary;
pub mod table;

pub use error::ExtractError;
pub use io::{load, save, save_with_indent, DEFAULT_INDENT};
pub use model::{Body, Prefix, SnippetEntry, SnippetTable};
pub use normalize::{flatten_body, normalize_key, select_prefix};
pub use summary::Summary;
pub use table::{build, DuplicateCounts, Extraction, OutputTable};

use std::path::Path;

/// Run the whole pipeline: load `input`, build the table and write it to `output`.
///
/// Nothing is written when loading fails.
pub fn extract_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    indent: &str,
) -> Result<Extraction, ExtractError> {
    let snippets = load(input)?;
    let extraction = build(&snippets);
    save_with_indent(output, &extraction.table, indent)?;
    Ok(extraction)
}
