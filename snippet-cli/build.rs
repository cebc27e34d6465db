use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() from src/main.rs
// Build scripts can't access src/ modules, so the argument list is repeated here
fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=build.rs");

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("extract-snippets")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Flatten editor snippet definitions into a trigger-keyed table")
        .arg(
            Arg::new("input")
                .help("Snippet definitions to read (default: snippets.json)")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("Where to write the flattened table (default: snippets_extracted.json)")
                .index(2)
                .value_hint(ValueHint::FilePath),
        );

    generate_to(Bash, &mut cmd, "extract-snippets", &outdir)?;
    generate_to(Zsh, &mut cmd, "extract-snippets", &outdir)?;
    generate_to(Fish, &mut cmd, "extract-snippets", &outdir)?;

    Ok(())
}
