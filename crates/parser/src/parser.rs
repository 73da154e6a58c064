// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level driver: physical lines in, parse tree out.

use crate::config::ParserConfig;
use crate::continuation::{self, LineState};
use crate::directive::{Directive, DEFAULT_ESCAPE_TOKEN};
use crate::dispatch;
use crate::error::ParseError;
use crate::line;
use crate::node::Node;
use crate::reader::LineReader;
use serde::Serialize;
use std::io::{BufRead, BufReader, Read, Write};

const EMPTY_CONTINUATION_DEPRECATION: &str =
    "[WARNING]: Empty continuation lines will become errors in a future release.";

/// A successfully parsed recipe.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult {
    /// Root node; its children are the instructions in file order.
    pub ast: Node,
    /// Escape character in effect for the whole file.
    pub escape_token: char,
    /// Non-fatal diagnostics, in the order they were found.
    pub warnings: Vec<String>,
}

impl ParseResult {
    /// Write the warnings, one per line. Writes nothing when there are none.
    pub fn print_warnings(&self, out: &mut impl Write) -> std::io::Result<()> {
        if self.warnings.is_empty() {
            return Ok(());
        }
        writeln!(out, "{}", self.warnings.join("\n"))
    }

    /// Render the result back to recipe text.
    ///
    /// Continuations are already joined, comments and blank lines are gone,
    /// and the escape directive is emitted only when it differs from the
    /// default. A trailing escape left on an unfinished final statement is
    /// doubled. Parsing the output yields the same tree shape.
    pub fn canonical_source(&self) -> String {
        let mut out = String::new();
        if self.escape_token != DEFAULT_ESCAPE_TOKEN {
            out.push_str(&format!("# escape={}\n", self.escape_token));
        }
        for instruction in &self.ast.children {
            out.push_str(&instruction.original);
            // Only an unfinished final statement can still end with the escape.
            if self.ends_with_escape(&instruction.original) {
                out.push(self.escape_token);
            }
            out.push('\n');
        }
        out
    }

    fn ends_with_escape(&self, text: &str) -> bool {
        text.trim_end_matches([' ', '\t']).ends_with(self.escape_token)
    }
}

/// Parse a recipe from `input` with the default configuration.
///
/// # Example
///
/// ```ignore
/// let result = dfp_parser::parse("FROM alpine\nRUN make \\\n    install\n".as_bytes())?;
/// assert_eq!(result.ast.dump(), "(from \"alpine\")\n(run \"make     install\")");
/// # Ok::<(), dfp_parser::ParseError>(())
/// ```
pub fn parse<R: Read>(input: R) -> Result<ParseResult, ParseError> {
    parse_with_config(input, &ParserConfig::default())
}

/// Parse a recipe held in memory.
pub fn parse_str(input: &str) -> Result<ParseResult, ParseError> {
    parse(input.as_bytes())
}

/// Parse with custom configuration.
pub fn parse_with_config<R: Read>(
    input: R,
    config: &ParserConfig,
) -> Result<ParseResult, ParseError> {
    TreeAssembler::new(BufReader::new(input), config).run()
}

/// Per-parse state: directive, line source, and the tree being built.
struct TreeAssembler<R> {
    lines: LineReader<R>,
    directive: Directive,
    root: Node,
    warnings: Vec<String>,
}

impl<R: BufRead> TreeAssembler<R> {
    fn new(input: R, config: &ParserConfig) -> Self {
        Self {
            lines: LineReader::new(input, config.max_line_bytes),
            directive: Directive::new(),
            root: Node::default(),
            warnings: Vec::new(),
        }
    }

    fn run(mut self) -> Result<ParseResult, ParseError> {
        while let Some(physical) = self.lines.next_line()? {
            let mut physical = physical.as_str();
            if self.lines.line_number() == 1 {
                physical = line::strip_bom(physical);
            }

            let first = line::process_line(&mut self.directive, physical, true)?;
            let start_line = self.lines.line_number();
            let state = continuation::resolve(first.to_string(), &self.directive);
            if state.is_complete() && state.text().is_empty() {
                continue;
            }

            let (text, has_empty_continuation) = self.read_continuation(state)?;
            let end_line = self.lines.line_number();

            if has_empty_continuation {
                tracing::warn!(
                    start_line,
                    end_line,
                    "empty continuation line in instruction"
                );
                self.warnings.push(format!(
                    "[WARNING]: Empty continuation line found in:\n    {text}"
                ));
            }

            let child = dispatch::new_node_from_line(&text, &self.directive)?;
            tracing::trace!(
                instruction = %child.value,
                start_line,
                end_line,
                "parsed instruction"
            );
            self.root.add_child(child, start_line, end_line);
        }

        if !self.warnings.is_empty() {
            self.warnings
                .push(EMPTY_CONTINUATION_DEPRECATION.to_string());
        }

        if self.root.children.is_empty() {
            return Err(ParseError::NoInstructionsFound);
        }

        tracing::debug!(
            instructions = self.root.children.len(),
            escape = %self.directive.escape_token(),
            "parse complete"
        );

        Ok(ParseResult {
            ast: self.root,
            escape_token: self.directive.escape_token(),
            warnings: self.warnings,
        })
    }

    /// Absorb physical lines until the statement is complete or input ends.
    ///
    /// Comment lines are skipped. Whitespace-only lines are skipped too but
    /// flag the statement for a warning. Returns the joined text.
    fn read_continuation(&mut self, mut state: LineState) -> Result<(String, bool), ParseError> {
        let mut has_empty_continuation = false;

        while let LineState::Incomplete(text) = state {
            let Some(physical) = self.lines.next_line()? else {
                return Ok((text, has_empty_continuation));
            };
            let processed = line::process_line(&mut self.directive, &physical, false)?;

            if line::is_comment(&physical) {
                state = LineState::Incomplete(text);
                continue;
            }
            if line::is_empty_continuation_line(processed) {
                has_empty_continuation = true;
                state = LineState::Incomplete(text);
                continue;
            }

            state = continuation::resolve(text + processed, &self.directive);
        }

        Ok((state.into_text(), has_empty_continuation))
    }
}

#[cfg(test)]
#[path = "parser_tests/mod.rs"]
mod tests;
