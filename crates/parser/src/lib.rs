// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Build-recipe parser.
//!
//! Turns a line-oriented build recipe (a Dockerfile) into a parse tree. The
//! parser joins continued lines, drops comments, honours the
//! `# escape=<char>` directive, and hands each complete instruction to a
//! keyword-specific argument parser.
//!
//! # Quick Start
//!
//! ```ignore
//! use dfp_parser::parse_str;
//!
//! let result = parse_str("FROM alpine\nCOPY [\"a\",\n  \"b\"]\n")?;
//! assert_eq!(result.ast.children.len(), 2);
//! println!("{}", result.ast.dump());
//! # Ok::<(), dfp_parser::ParseError>(())
//! ```
//!
//! # Tree Structure
//!
//! ```text
//! root
//! └── children[]            one per instruction, in file order
//!     ├── value             lower-cased keyword
//!     ├── flags             leading --flag words
//!     ├── attributes        e.g. json = true
//!     └── next → next → …   argument chain
//! ```
//!
//! # Continuations
//!
//! A statement continues onto the next physical line when it ends with the
//! escape character, or when it has opened a `[` list that is not closed yet.
//! Comment lines inside a continued statement are skipped; whitespace-only
//! lines are skipped and produce a warning.

pub mod command;
mod config;
mod continuation;
mod directive;
mod dispatch;
mod error;
mod line;
mod line_parsers;
mod node;
mod parser;
mod reader;
mod split;

pub use config::{ParserConfig, DEFAULT_MAX_LINE_BYTES};
pub use continuation::{ends_with_escape, has_open_list, resolve, LineState};
pub use directive::{Directive, DEFAULT_ESCAPE_TOKEN};
pub use dispatch::{lookup, new_node_from_line};
pub use error::{ArgumentError, ParseError};
pub use line_parsers::{parse_words, Arguments, LineParser};
pub use node::{Args, Node, JSON_ATTRIBUTE};
pub use parser::{parse, parse_str, parse_with_config, ParseResult};
pub use split::{extract_builder_flags, split_command, CommandLine};
