// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod canonical;
pub mod parse;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Result;
use dfp_parser::{ParseResult, ParserConfig};

/// Open the recipe named on the command line. `None` and `-` mean stdin.
fn open_source(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        None => Ok(Box::new(std::io::stdin().lock())),
        Some(p) if p == Path::new("-") => Ok(Box::new(std::io::stdin().lock())),
        Some(p) => {
            let file = File::open(p)
                .map_err(|e| anyhow::anyhow!("failed to read '{}': {}", p.display(), e))?;
            Ok(Box::new(file))
        }
    }
}

/// Parse the recipe at `path` and report its warnings on stderr.
fn parse_source(path: Option<&Path>, config: &ParserConfig) -> Result<ParseResult> {
    let source = open_source(path)?;
    tracing::debug!(
        path = %path.map_or("-".into(), |p| p.display().to_string()),
        max_line_bytes = config.max_line_bytes,
        "parsing recipe"
    );
    let result = dfp_parser::parse_with_config(source, config)?;
    result.print_warnings(&mut std::io::stderr().lock())?;
    Ok(result)
}
