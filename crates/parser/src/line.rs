// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-physical-line normalization.

use crate::directive::Directive;
use crate::error::ParseError;

const UTF8_BOM: char = '\u{feff}';

/// Strip a leading UTF-8 byte-order mark.
pub fn strip_bom(line: &str) -> &str {
    line.strip_prefix(UTF8_BOM).unwrap_or(line)
}

/// Remove a whole-line `#` comment. Text after `#` mid-line is left alone.
pub fn trim_comment(line: &str) -> &str {
    if line.starts_with('#') {
        ""
    } else {
        line
    }
}

/// True when the line is a comment once leading whitespace is ignored.
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// True when a continuation line carries no content.
pub fn is_empty_continuation_line(line: &str) -> bool {
    line.trim_start().is_empty()
}

/// Normalize one physical line and offer it to the directive scanner.
///
/// Lines that start a statement are left-trimmed. Continuation lines keep
/// their indentation, which then becomes part of the joined argument text.
pub fn process_line<'a>(
    directive: &mut Directive,
    line: &'a str,
    strip_leading_whitespace: bool,
) -> Result<&'a str, ParseError> {
    let line = if strip_leading_whitespace {
        line.trim_start()
    } else {
        line
    };
    directive.consider_directive(line)?;
    Ok(trim_comment(line))
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
