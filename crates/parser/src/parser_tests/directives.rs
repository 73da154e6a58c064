// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `# escape=` parser directive.

use super::{assert_err_contains, dump, parse_ok};
use crate::{parse_str, ParseError};

#[test]
fn backtick_directive_changes_escape() {
    let result = parse_ok("# escape=`\nRUN dir c:\\\nRUN a `\n  b\n");
    assert_eq!(result.escape_token, '`');
    assert_eq!(result.ast.children.len(), 2);
    assert_eq!(result.ast.children[0].arg_values(), vec!["dir c:\\"]);
    assert_eq!(result.ast.children[1].arg_values(), vec!["a   b"]);
}

#[test]
fn backslash_directive_is_accepted() {
    assert_eq!(parse_ok("# escape=\\\nFROM x\n").escape_token, '\\');
}

#[test]
fn directive_is_case_insensitive() {
    assert_eq!(parse_ok("# ESCAPE=`\nFROM x\n").escape_token, '`');
}

#[test]
fn indented_directive_is_recognized() {
    assert_eq!(parse_ok("   # escape=`\nFROM x\n").escape_token, '`');
}

#[test]
fn directive_after_comment_is_ordinary_comment() {
    let result = parse_ok("# hello\n# escape=`\nRUN a \\\nb\n");
    assert_eq!(result.escape_token, '\\');
    assert_eq!(result.ast.children[0].arg_values(), vec!["a b"]);
}

#[test]
fn directive_after_blank_line_is_ordinary_comment() {
    assert_eq!(parse_ok("\n# escape=`\nFROM x\n").escape_token, '\\');
}

#[test]
fn directive_after_instruction_is_ordinary_comment() {
    let result = parse_ok("FROM x\n# escape=`\nRUN a `\n");
    assert_eq!(result.escape_token, '\\');
    assert_eq!(result.ast.children[1].arg_values(), vec!["a `"]);
}

#[test]
fn backtick_escape_in_words() {
    assert_eq!(
        dump("# escape=`\nENV A=x` y B=c:\\dir\n"),
        "(env \"A\" \"x` y\" \"B\" \"c:\\\\dir\")"
    );
}

#[test]
fn duplicate_directive_fails() {
    let err = parse_str("# escape=`\n# escape=\\\nFROM x\n").unwrap_err();
    assert!(matches!(err, ParseError::DuplicateEscapeDirective));
    assert_err_contains(&err, &["only one escape parser directive"]);
}

#[test]
fn duplicate_directive_with_same_token_fails() {
    let err = parse_str("# escape=`\n# escape=`\nFROM x\n").unwrap_err();
    assert!(matches!(err, ParseError::DuplicateEscapeDirective));
}

#[yare::parameterized(
    letter = { "# escape=x\nFROM a\n", "x" },
    slash  = { "# escape=/\nFROM a\n", "/" },
)]
fn invalid_directive_fails(input: &str, token: &str) {
    let err = parse_str(input).unwrap_err();
    assert!(matches!(err, ParseError::InvalidEscapeToken { .. }));
    assert_err_contains(&err, &[token, "must be ` or \\"]);
}
