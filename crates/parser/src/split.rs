// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting a logical line into keyword, flags, and argument text.

use regex::Regex;
use std::sync::LazyLock;

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
pub(crate) static TOKEN_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\v\f\r ]+").expect("constant regex pattern is valid"));

/// A logical line broken into its dispatch parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Lower-cased instruction keyword.
    pub cmd: String,
    /// Leading `--flag` words, quotes removed.
    pub flags: Vec<String>,
    /// Remaining argument text, trimmed.
    pub args: String,
}

/// Split `line` on its first whitespace run and pull leading flags off the rest.
pub fn split_command(line: &str) -> CommandLine {
    let mut parts = TOKEN_WHITESPACE.splitn(line.trim(), 2);
    let cmd = parts.next().unwrap_or_default().to_lowercase();
    let (args, flags) = match parts.next() {
        Some(rest) => extract_builder_flags(rest),
        None => ("", Vec::new()),
    };

    CommandLine {
        cmd,
        flags,
        args: args.trim().to_string(),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Spaces,
    Word,
    Quote(char),
}

/// Collect leading `--flag` words, returning the unconsumed text and the flags.
///
/// Scanning stops at the first word that does not begin with `--`, or right
/// after a bare `--`. Quotes group text and are dropped; `\` escapes the next
/// character.
pub fn extract_builder_flags(line: &str) -> (&str, Vec<String>) {
    let mut flags = Vec::new();
    let mut word = String::new();
    let mut blank_ok = false;
    let mut phase = Phase::Spaces;
    let mut chars = line.char_indices();

    while let Some((pos, ch)) = chars.next() {
        match phase {
            Phase::Spaces => {
                if ch.is_whitespace() {
                    continue;
                }
                if !line[pos..].starts_with("--") {
                    return (&line[pos..], flags);
                }
                phase = Phase::Word;
                word.push(ch);
            }
            Phase::Word => {
                if ch.is_whitespace() {
                    phase = Phase::Spaces;
                    if word == "--" {
                        return (&line[pos..], flags);
                    }
                    if blank_ok || !word.is_empty() {
                        flags.push(std::mem::take(&mut word));
                    }
                    blank_ok = false;
                    continue;
                }
                match ch {
                    '\'' | '"' => {
                        phase = Phase::Quote(ch);
                        blank_ok = true;
                    }
                    '\\' => {
                        if let Some((_, escaped)) = chars.next() {
                            word.push(escaped);
                        }
                    }
                    _ => word.push(ch),
                }
            }
            Phase::Quote(quote) => {
                if ch == quote {
                    phase = Phase::Word;
                } else if ch == '\\' {
                    match chars.next() {
                        Some((_, escaped)) => word.push(escaped),
                        None => phase = Phase::Word,
                    }
                } else {
                    word.push(ch);
                }
            }
        }
    }

    if phase != Phase::Spaces && word != "--" && (blank_ok || !word.is_empty()) {
        flags.push(word);
    }
    ("", flags)
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
