// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! dfp - build recipe parser CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod env;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{canonical, parse};
use dfp_parser::{ParserConfig, DEFAULT_MAX_LINE_BYTES};

#[derive(Parser, Debug)]
#[command(
    name = "dfp",
    version,
    about = "Parse container build recipes into a syntax tree"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Maximum size of a single physical line, in bytes
    #[arg(
        long,
        env = "DFP_MAX_LINE_BYTES",
        default_value_t = DEFAULT_MAX_LINE_BYTES,
        global = true
    )]
    max_line_bytes: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a recipe and print its syntax tree
    Parse(parse::ParseArgs),
    /// Print a recipe in canonical form
    Canonical(canonical::CanonicalArgs),
}

fn cli_command() -> clap::Command {
    Cli::command()
}

fn main() {
    setup_logging();

    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// When the top-level message already contains every source message the
/// chain is dropped; otherwise it is rendered like anyhow's Debug output.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

/// Log to stderr, filtered by `DFP_LOG` (default: errors only).
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;
    let config = ParserConfig::default().with_max_line_bytes(cli.max_line_bytes);

    let Some(command) = cli.command else {
        // No subcommand provided: print help and exit 0
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Parse(args) => parse::handle(args, &config, format),
        Commands::Canonical(args) => canonical::handle(args, &config),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
