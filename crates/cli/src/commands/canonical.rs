// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dfp canonical` - re-emit a recipe with continuations joined and comments removed.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use dfp_parser::ParserConfig;

#[derive(Args, Debug)]
pub struct CanonicalArgs {
    /// Recipe file (`-` or omitted reads stdin)
    pub file: Option<PathBuf>,
}

pub fn handle(args: CanonicalArgs, config: &ParserConfig) -> Result<()> {
    let result = super::parse_source(args.file.as_deref(), config)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(result.canonical_source().as_bytes())?;
    stdout.flush()?;
    Ok(())
}
