// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line continuation: escape-based, bracket-based, and their interplay with
//! comments.

use super::{dump, parse_ok};

// ============================================================================
// Escape continuation
// ============================================================================

#[test]
fn backslash_joins_lines() {
    let result = parse_ok("RUN a \\\nb\n");
    assert_eq!(result.ast.children.len(), 1);
    let node = &result.ast.children[0];
    assert_eq!(node.arg_values(), vec!["a b"]);
    assert_eq!(node.original, "RUN a b");
}

#[test]
fn escape_with_trailing_blanks() {
    assert_eq!(dump("RUN a \\  \t\nb\n"), "(run \"a b\")");
}

#[test]
fn continuation_keeps_indentation() {
    assert_eq!(
        dump("RUN apt-get update \\\n    && apt-get install -y git\n"),
        "(run \"apt-get update     && apt-get install -y git\")"
    );
}

#[test]
fn many_continuations() {
    let result = parse_ok("RUN a \\\nb \\\nc \\\nd\nUSER x\n");
    assert_eq!(result.ast.children.len(), 2);
    assert_eq!(result.ast.children[0].arg_values(), vec!["a b c d"]);
}

#[test]
fn escape_mid_line_is_literal() {
    assert_eq!(dump("RUN echo a\\b\n"), "(run \"echo a\\\\b\")");
}

#[test]
fn continuation_at_end_of_input() {
    let result = parse_ok("FROM alpine\nRUN make \\\n");
    assert_eq!(result.ast.children.len(), 2);
    assert_eq!(result.ast.children[1].arg_values(), vec!["make"]);
}

#[test]
fn continued_keyword() {
    assert_eq!(dump("RU\\\nN make\n"), "(run \"make\")");
}

// ============================================================================
// Bracket continuation
// ============================================================================

#[test]
fn open_list_joins_lines() {
    let result = parse_ok("COPY [\"a\",\n\"b\"]\n");
    assert_eq!(result.ast.children.len(), 1);
    assert!(result.warnings.is_empty());
    let node = &result.ast.children[0];
    assert!(node.is_json());
    assert_eq!(node.arg_values(), vec!["a", "b"]);
}

#[test]
fn open_list_keeps_continuation_whitespace() {
    let result = parse_ok("CMD [\"a\",\n    \"b\",\n    \"c\"]\n");
    assert_eq!(result.ast.children[0].original, "CMD [\"a\",    \"b\",    \"c\"]");
    assert_eq!(result.ast.children[0].arg_values(), vec!["a", "b", "c"]);
}

#[test]
fn open_list_and_escape_together() {
    assert_eq!(
        dump("ENTRYPOINT [\"a\", \\\n  \"b\"]\n"),
        "(entrypoint \"a\" \"b\")"
    );
}

#[test]
fn unclosed_list_runs_to_end_of_input() {
    let result = parse_ok("FROM alpine\nCMD [\"a\",\nUSER x\n");
    assert_eq!(result.ast.children.len(), 2);
    assert_eq!(result.ast.children[1].original, "CMD [\"a\",USER x");
}

// ============================================================================
// Comments inside continuations
// ============================================================================

#[test]
fn comment_inside_continuation_is_skipped() {
    let result = parse_ok("RUN a \\\n# note\nb\n");
    assert_eq!(result.ast.children.len(), 1);
    assert_eq!(result.ast.children[0].arg_values(), vec!["a b"]);
    assert!(result.warnings.is_empty());
}

#[test]
fn indented_comment_inside_continuation_is_skipped() {
    assert_eq!(dump("RUN a \\\n    # note\n  b\n"), "(run \"a   b\")");
}

#[test]
fn comment_inside_open_list_is_skipped() {
    assert_eq!(
        dump("COPY [\"a\",\n# skip me\n\"b\"]\n"),
        "(copy \"a\" \"b\")"
    );
}

#[test]
fn comment_does_not_end_continuation() {
    let result = parse_ok("RUN a \\\n# one\n# two\nb\nUSER x\n");
    assert_eq!(result.ast.children.len(), 2);
    assert_eq!(result.ast.children[0].end_line, 4);
}
