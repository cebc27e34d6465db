// Command-line interface for the snippet extractor
//
// Reads a snippet-definition file and writes the flattened `\<trigger>` -> body table next to it.
// All of the work is done by the snippet-extract library; this binary only resolves paths, prints
// the outcome and sets the exit status.
//
// Usage:
//  extract-snippets                       - snippets.json -> snippets_extracted.json
//  extract-snippets <input>               - <input> -> snippets_extracted.json
//  extract-snippets <input> <output>      - <input> -> <output>
//
// Any failure (missing input, invalid JSON, unwritable output) prints one line to stderr and exits
// with status 1.

use clap::{Arg, Command, ValueHint};
use snippet_config::{ExtractConfig, Loader};
use snippet_extract::{extract_file, Extraction};

fn build_cli() -> Command {
    Command::new("extract-snippets")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Flatten editor snippet definitions into a trigger-keyed table")
        .long_about(
            "extract-snippets reads a JSON file mapping snippet names to objects with a\n\
            \"prefix\" and a \"body\", and writes a JSON object mapping each normalized\n\
            trigger to its body text.\n\n\
            Triggers are rewritten as \\<name>: \"\\zero\" becomes \"\\<zero>\" and \"foo\"\n\
            becomes \"\\<foo>\". Only the first prefix of an entry is used, and list\n\
            bodies are joined with newlines. When two entries end up with the same\n\
            key the later one wins and a warning is printed.\n\n\
            Examples:\n  \
            extract-snippets                          # snippets.json -> snippets_extracted.json\n  \
            extract-snippets vscode.json              # Read a different input\n  \
            extract-snippets vscode.json table.json   # Choose both paths",
        )
        .arg(
            Arg::new("input")
                .help("Snippet definitions to read (default: snippets.json)")
                .required(false)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("Where to write the flattened table (default: snippets_extracted.json)")
                .required(false)
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(
        matches.get_one::<String>("input").map(|s| s.as_str()),
        matches.get_one::<String>("output").map(|s| s.as_str()),
    );

    handle_extract_command(&config);
}

/// Handle the one and only command: load, build, save, report.
fn handle_extract_command(config: &ExtractConfig) {
    let extraction = extract_file(
        &config.paths.input,
        &config.paths.output,
        &config.output.indent,
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    for line in report_lines(&extraction, config) {
        println!("{line}");
    }
}

fn report_lines(extraction: &Extraction, config: &ExtractConfig) -> Vec<String> {
    let summary = extraction.summary(config.report.duplicate_examples);
    let mut lines = vec![summary.success_line(&config.paths.output)];
    lines.extend(summary.warning_line());
    lines
}

fn load_cli_config(input: Option<&str>, output: Option<&str>) -> ExtractConfig {
    Loader::new()
        .set_override_option("paths.input", input)
        .and_then(|loader| loader.set_override_option("paths.output", output))
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}
