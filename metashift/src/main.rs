//! Seed-driven metadata reordering CLI.
//!
//! Rotates a metadata list so that position `i` holds the entry previously at
//! `(i + seed) mod len`, then prints the result as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use metashift::exit_codes;
use metashift::io::config::OutputFormat;
use metashift::io::init::{InitOptions, init_shift};
use metashift::io::metadata_store::render_metadata;
use metashift::metadata::reference_metadata;
use metashift::offset::{OffsetRequest, offset_metadata};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "metashift",
    version,
    about = "Deterministically reorder a metadata list by a numeric seed"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create `.metashift/config.toml` and `.metashift/metadata.json`.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the metadata list rotated by a seed.
    Offset {
        /// Rotation seed (any sign). Defaults to the configured seed.
        #[arg(short, long, allow_negative_numbers = true)]
        seed: Option<i64>,
        /// Metadata JSON file. Defaults to the configured input or the reference list.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Print indented JSON.
        #[arg(long)]
        pretty: bool,
    },
    /// Print the built-in reference list.
    Reference {
        /// Print indented JSON.
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    metashift::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::for_error(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(force),
        Command::Offset {
            seed,
            input,
            pretty,
        } => cmd_offset(OffsetRequest {
            seed,
            input,
            format: pretty_flag(pretty),
        }),
        Command::Reference { pretty } => cmd_reference(pretty),
    }
}

fn cmd_init(force: bool) -> Result<()> {
    let root = std::env::current_dir().context("resolve current directory")?;
    let paths = init_shift(&root, &InitOptions { force })?;
    info!(dir = %paths.shift_dir.display(), "initialized");
    Ok(())
}

fn cmd_offset(request: OffsetRequest) -> Result<()> {
    let root = std::env::current_dir().context("resolve current directory")?;
    let outcome = offset_metadata(&root, &request)?;
    println!("{}", outcome.render()?);
    Ok(())
}

fn cmd_reference(pretty: bool) -> Result<()> {
    let format = pretty_flag(pretty).unwrap_or_default();
    println!("{}", render_metadata(&reference_metadata(), format)?);
    Ok(())
}

fn pretty_flag(pretty: bool) -> Option<OutputFormat> {
    pretty.then_some(OutputFormat::Pretty)
}
