// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for recipe parsing.

use thiserror::Error;

/// Errors that abort a parse.
///
/// Every variant is terminal: no partial tree is returned alongside it.
/// Non-fatal problems are reported through [`crate::ParseResult::warnings`]
/// instead.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The escape directive named a character other than `` ` `` or `\`.
    #[error("invalid escape token '{token}' does not validate: must be ` or \\")]
    InvalidEscapeToken {
        /// The rejected token, as written in the directive.
        token: String,
    },

    /// A second `# escape=` directive appeared in the directive window.
    #[error("only one escape parser directive can be used")]
    DuplicateEscapeDirective,

    /// A physical line exceeded the configured maximum size.
    #[error("line {line} greater than max allowed size of {max} bytes")]
    LineTooLong {
        /// 1-based number of the offending physical line.
        line: usize,
        /// The configured maximum, in bytes.
        max: usize,
    },

    /// The input held only comments, directives, or blank lines.
    #[error("file with no instructions")]
    NoInstructionsFound,

    /// An instruction's argument parser rejected its arguments.
    #[error(transparent)]
    ArgumentSyntax(#[from] ArgumentError),

    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised by per-instruction argument parsers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("when using JSON array syntax, arrays must be comprised of strings only")]
    NotStringArray,

    #[error("{instruction} must have two arguments")]
    MissingValue { instruction: String },

    #[error("syntax error - can't find = in {word:?}. Must be of the form: name=value")]
    MissingEquals { word: String },
}
