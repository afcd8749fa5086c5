pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

pub use error::{GenError, Result};

use std::io::{self, IsTerminal, Read, Write};

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    init_logging(args.verbose);

    let stdin = io::stdin();
    if stdin.is_terminal() {
        cli::Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "API metadata must be piped on standard input",
            )
            .exit();
    }

    // 1. ── Read ───────────────────────────────────────────────────────
    let mut bytes = Vec::new();
    stdin
        .lock()
        .read_to_end(&mut bytes)
        .context("Reading metadata from stdin")?;

    // 2. ── Decode ─────────────────────────────────────────────────────
    let table = parser::load(&bytes).context("Parsing API metadata")?;

    // 3. ── Write outputs ──────────────────────────────────────────────
    let mut out = io::stdout().lock();
    match args.output {
        Some(dir) => {
            let count = writer::generate(&table, &dir)
                .with_context(|| format!("Generating bindings into {}", dir.display()))?;
            writeln!(out, "Generated Qt bindings for {count} functions")?;
        }
        None => {
            writeln!(out, "API info")?;
            for f in &table {
                writeln!(out, "  {}", f.signature())?;
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "neovimqt_gen=warn",
        1 => "neovimqt_gen=debug",
        _ => "neovimqt_gen=trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(io::stderr),
        )
        .init();
}
