// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser directives.
//!
//! Directives are comment lines of the form `# escape=<char>` that must form
//! an unbroken prefix of the file. The first line that is not a directive
//! (an instruction, an ordinary comment, or a blank line) closes the window
//! for good.

use crate::error::ParseError;
use regex::Regex;
use std::sync::LazyLock;

/// Escape character used when the file declares none.
pub const DEFAULT_ESCAPE_TOKEN: char = '\\';

// Allow expect here as the regexes are compile-time verified to be valid
#[allow(clippy::expect_used)]
static ESCAPE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[ \t]*escape[ \t]*=[ \t]*(?P<escapechar>.).*$")
        .expect("constant regex pattern is valid")
});

#[allow(clippy::expect_used)]
static BACKSLASH_LINE_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[ \t]*$").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static BACKTICK_LINE_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[ \t]*$").expect("constant regex pattern is valid"));

/// Directive state for a single parse.
///
/// Mutated only while the directive window is open; read-only afterwards.
#[derive(Debug, Clone)]
pub struct Directive {
    escape_token: char,
    line_escape: &'static Regex,
    processing_complete: bool,
    escape_seen: bool,
}

impl Default for Directive {
    fn default() -> Self {
        Self {
            escape_token: DEFAULT_ESCAPE_TOKEN,
            line_escape: &BACKSLASH_LINE_ESCAPE,
            processing_complete: false,
            escape_seen: false,
        }
    }
}

impl Directive {
    /// Fresh state with the default escape token.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active escape character.
    pub fn escape_token(&self) -> char {
        self.escape_token
    }

    /// Whether directives are still being recognized.
    pub fn is_window_open(&self) -> bool {
        !self.processing_complete
    }

    /// Matcher for "escape character followed by trailing blanks at end of line".
    pub(crate) fn line_escape(&self) -> &Regex {
        self.line_escape
    }

    /// Replace the active escape character.
    ///
    /// Only `` ` `` and `\` are accepted.
    pub fn set_escape(&mut self, token: &str) -> Result<(), ParseError> {
        let (escape_token, line_escape) = match token {
            "\\" => ('\\', &*BACKSLASH_LINE_ESCAPE),
            "`" => ('`', &*BACKTICK_LINE_ESCAPE),
            _ => {
                return Err(ParseError::InvalidEscapeToken {
                    token: token.to_string(),
                })
            }
        };
        self.escape_token = escape_token;
        self.line_escape = line_escape;
        Ok(())
    }

    /// Inspect a physical line for a parser directive.
    ///
    /// A no-op once the window has closed. A non-directive line closes it.
    pub fn consider_directive(&mut self, line: &str) -> Result<(), ParseError> {
        if !self.is_window_open() {
            return Ok(());
        }

        let lowered = line.to_lowercase();
        if let Some(token) = ESCAPE_DIRECTIVE
            .captures(&lowered)
            .and_then(|caps| caps.name("escapechar"))
        {
            if self.escape_seen {
                return Err(ParseError::DuplicateEscapeDirective);
            }
            self.escape_seen = true;
            self.set_escape(token.as_str())?;
            tracing::debug!(escape = %self.escape_token, "escape directive applied");
            return Ok(());
        }

        self.processing_complete = true;
        tracing::debug!(escape = %self.escape_token, "directive window closed");
        Ok(())
    }
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;
