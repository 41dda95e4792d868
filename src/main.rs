//! fmdoc — build a markdown overview of FileMaker custom function files.
//!
//! Scans a directory for `*.fmfn` files, pulls the prototype line and the
//! `/** ... */` header out of each, and writes an index plus one section per
//! function to `README.md` in the same directory.
//!
//! With no arguments it reads `Custom Functions/` and writes
//! `Custom Functions/README.md`.

mod anchor;
mod discover;
mod error;
mod extract;
mod logging;
mod model;
mod render;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

const DEFAULT_DIR: &str = "Custom Functions";
const DEFAULT_EXTENSION: &str = "fmfn";
const DEFAULT_OUTPUT: &str = "README.md";
const DEFAULT_TITLE: &str = "Custom Function Overview";

#[derive(Parser)]
#[command(
    name = "fmdoc",
    about = "Generate a markdown overview from FileMaker custom function files"
)]
struct Cli {
    /// Directory containing the custom function files
    #[arg(default_value = DEFAULT_DIR)]
    dir: PathBuf,

    /// File extension to collect, without the leading dot
    #[arg(short = 'e', long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Output file name, written inside DIR
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    output: String,

    /// Title of the generated document
    #[arg(short = 't', long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Print the overview to stdout instead of writing the output file
    #[arg(long)]
    stdout: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    run(&cli)
}

/// List, extract, assemble, then write (or print) the overview.
fn run(cli: &Cli) -> Result<()> {
    let names = discover::list_function_files(&cli.dir, &cli.extension)?;
    info!(dir = %cli.dir.display(), files = ?names, "matched function files");

    let mut files = Vec::with_capacity(names.len());
    for name in &names {
        let file = model::FunctionFile::load(&cli.dir, name)?;
        debug!(file = %name, bytes = file.content.len(), "loaded");
        if file.prototype.is_none() {
            warn!(file = %name, "no function prototype found");
        }
        if file.header.is_none() {
            debug!(file = %name, "no documentation header found");
        }
        files.push(file);
    }

    let markdown = render::render(&cli.title, &files);

    if cli.stdout {
        return emit(&mut io::stdout().lock(), &markdown);
    }

    let out_path = cli.dir.join(&cli.output);
    render::write_document(&out_path, &markdown)
        .with_context(|| format!("failed to save overview of {}", cli.dir.display()))?;
    info!(path = %out_path.display(), entries = files.len(), "wrote overview");
    Ok(())
}

/// Write the overview to `out`. A closed pipe is an error, not a panic.
fn emit(out: &mut impl Write, markdown: &str) -> Result<()> {
    out.write_all(markdown.as_bytes())
        .and_then(|()| out.flush())
        .context("failed to write overview to stdout")
}
