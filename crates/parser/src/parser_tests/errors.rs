// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parse errors: empty input, oversized lines, argument syntax.

use super::assert_err_contains;
use crate::{parse_str, parse_with_config, ArgumentError, ParseError, ParserConfig};

#[yare::parameterized(
    empty          = { "" },
    blank_lines    = { "\n\n   \n" },
    comments_only  = { "# one\n  # two\n" },
    directive_only = { "# escape=`\n" },
    bom_only       = { "\u{feff}\n" },
)]
fn no_instructions(input: &str) {
    let err = parse_str(input).unwrap_err();
    assert!(matches!(err, ParseError::NoInstructionsFound));
    assert_err_contains(&err, &["no instructions"]);
}

#[test]
fn line_too_long_names_limit() {
    let config = ParserConfig::default().with_max_line_bytes(16);
    let input = "FROM alpine\nRUN this line is far too long\n";
    let err = parse_with_config(input.as_bytes(), &config).unwrap_err();
    assert!(matches!(err, ParseError::LineTooLong { line: 2, max: 16 }));
    assert_err_contains(&err, &["16"]);
}

#[test]
fn default_limit_accepts_long_lines() {
    let input = format!("RUN {}\n", "x".repeat(60_000));
    assert!(parse_str(&input).is_ok());
}

#[test]
fn default_limit_rejects_huge_lines() {
    let input = format!("RUN {}\n", "x".repeat(70_000));
    let err = parse_str(&input).unwrap_err();
    assert!(matches!(err, ParseError::LineTooLong { max: 65535, .. }));
}

#[test]
fn argument_errors_are_surfaced_unchanged() {
    let err = parse_str("FROM a\nENV ONLYKEY\n").unwrap_err();
    match err {
        ParseError::ArgumentSyntax(inner) => assert_eq!(
            inner,
            ArgumentError::MissingValue {
                instruction: "ENV".to_string()
            }
        ),
        other => panic!("expected argument error, got {other:?}"),
    }
}

#[test]
fn argument_error_display_is_transparent() {
    let err = parse_str("CMD [\"a\", 1]\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "when using JSON array syntax, arrays must be comprised of strings only"
    );
}

#[test]
fn invalid_utf8_is_a_read_error() {
    let err = crate::parse(&b"FROM a\n\xff\n"[..]).unwrap_err();
    assert!(matches!(err, ParseError::Io(_)));
}
