// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dfp parse` - print the syntax tree of a recipe.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use dfp_parser::ParserConfig;

use crate::output::{self, OutputFormat};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Recipe file (`-` or omitted reads stdin)
    pub file: Option<PathBuf>,
}

pub fn handle(args: ParseArgs, config: &ParserConfig, format: OutputFormat) -> Result<()> {
    let result = super::parse_source(args.file.as_deref(), config)?;
    output::write_result(&mut std::io::stdout().lock(), &result, format)
}
