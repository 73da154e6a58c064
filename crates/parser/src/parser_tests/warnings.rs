// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Empty continuation line warnings.

use super::{dump, parse_ok};

const DEPRECATION: &str =
    "[WARNING]: Empty continuation lines will become errors in a future release.";

#[test]
fn empty_continuation_line_warns() {
    let result = parse_ok("FROM a\nRUN make \\\n\n  install\n");
    assert_eq!(
        result.warnings,
        vec![
            "[WARNING]: Empty continuation line found in:\n    RUN make   install".to_string(),
            DEPRECATION.to_string(),
        ]
    );
    assert_eq!(result.ast.children[1].arg_values(), vec!["make   install"]);
}

#[test]
fn whitespace_only_line_counts_as_empty() {
    let result = parse_ok("RUN a \\\n \t \nb\n");
    assert_eq!(result.warnings.len(), 2);
    assert_eq!(dump("RUN a \\\n \t \nb\n"), "(run \"a b\")");
}

#[test]
fn one_warning_per_statement_and_one_notice() {
    let result = parse_ok("RUN a \\\n\n\nb\nRUN c \\\n\nd\nRUN e\n");
    assert_eq!(result.warnings.len(), 3);
    assert!(result.warnings[0].ends_with("RUN a b"));
    assert!(result.warnings[1].ends_with("RUN c d"));
    assert_eq!(result.warnings[2], DEPRECATION);
}

#[test]
fn comment_lines_do_not_warn() {
    let result = parse_ok("RUN a \\\n# note\nb\n");
    assert!(result.warnings.is_empty());
}

#[test]
fn blank_lines_between_statements_do_not_warn() {
    let result = parse_ok("FROM a\n\n\nRUN b\n");
    assert!(result.warnings.is_empty());
}

#[test]
fn open_list_with_blank_line_warns() {
    let result = parse_ok("CMD [\"a\",\n\n\"b\"]\n");
    assert_eq!(result.warnings.len(), 2);
    assert!(result.ast.children[0].is_json());
}

#[test]
fn print_warnings_writes_lines() {
    let result = parse_ok("RUN a \\\n\nb\n");
    let mut out = Vec::new();
    result.print_warnings(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("[WARNING]: Empty continuation line found in:\n    RUN a b\n{DEPRECATION}\n")
    );
}

#[test]
fn print_warnings_is_silent_without_warnings() {
    let result = parse_ok("FROM a\n");
    let mut out = Vec::new();
    result.print_warnings(&mut out).unwrap();
    assert!(out.is_empty());
}
