// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deciding whether a logical line needs more physical lines.
//!
//! Two independent rules apply, in order:
//! 1. the text ends with the active escape character (plus trailing blanks),
//!    which is stripped;
//! 2. the text opens a `[` list that is not yet closed, which is kept as-is.

use crate::directive::Directive;
use regex::Regex;
use std::sync::LazyLock;

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static OPEN_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[^"]*\[[^\]]*$"#).expect("constant regex pattern is valid"));

/// Completeness of the text accumulated for one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineState {
    /// The statement is finished.
    Complete(String),
    /// The statement continues on the next physical line.
    Incomplete(String),
}

impl LineState {
    pub fn is_complete(&self) -> bool {
        matches!(self, LineState::Complete(_))
    }

    pub fn text(&self) -> &str {
        match self {
            LineState::Complete(text) | LineState::Incomplete(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            LineState::Complete(text) | LineState::Incomplete(text) => text,
        }
    }
}

/// True when `line` ends with the active escape character.
pub fn ends_with_escape(line: &str, directive: &Directive) -> bool {
    directive.line_escape().is_match(line)
}

/// True when `line` has an unclosed `[` list.
pub fn has_open_list(line: &str) -> bool {
    OPEN_LIST.is_match(line)
}

/// Apply both continuation rules to `line`.
pub fn resolve(line: String, directive: &Directive) -> LineState {
    if ends_with_escape(&line, directive) {
        let stripped = directive.line_escape().replace(&line, "").into_owned();
        return LineState::Incomplete(stripped);
    }
    if has_open_list(&line) {
        return LineState::Incomplete(line);
    }
    LineState::Complete(line)
}

#[cfg(test)]
#[path = "continuation_tests.rs"]
mod tests;
