// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Physical line spans on instruction and root nodes.

use super::parse_ok;
use proptest::prelude::*;

#[test]
fn single_line_span() {
    let result = parse_ok("\n\nFROM alpine\n");
    let node = &result.ast.children[0];
    assert_eq!((node.start_line, node.end_line), (3, 3));
}

#[test]
fn continued_span_covers_all_lines() {
    let result = parse_ok("FROM alpine\nRUN a \\\n\n# c\nb\nUSER x\n");
    let spans: Vec<_> = result
        .ast
        .children
        .iter()
        .map(|n| (n.start_line, n.end_line))
        .collect();
    assert_eq!(spans, vec![(1, 1), (2, 5), (6, 6)]);
}

#[test]
fn root_span_covers_children() {
    let result = parse_ok("# comment\n\nFROM alpine\nRUN a \\\nb\n\n");
    assert_eq!(result.ast.start_line, 3);
    assert_eq!(result.ast.end_line, 5);
}

#[test]
fn sub_command_nodes_have_no_span() {
    let result = parse_ok("ONBUILD RUN make\n");
    let wrapper = result.ast.children[0].next.as_deref().unwrap();
    assert_eq!(wrapper.children[0].start_line, 0);
    assert_eq!(wrapper.children[0].end_line, 0);
}

fn instruction_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "(FROM|RUN|USER|WORKDIR|EXPOSE) [a-z0-9]{1,8}",
        "RUN [a-z]{1,5} \\\\",
        "CMD \\[\"[a-z]{1,4}\",",
        "[a-z]{1,6}\"\\]",
        "# [a-z ]{0,10}",
        "[ \t]{0,3}",
    ]
}

proptest! {
    #[test]
    fn spans_are_ordered_and_within_input(lines in prop::collection::vec(instruction_line(), 1..20)) {
        let input = lines.join("\n");
        if let Ok(result) = crate::parse_str(&input) {
            let mut previous_end = 0;
            for node in &result.ast.children {
                prop_assert!(node.start_line >= 1);
                prop_assert!(node.start_line <= node.end_line);
                prop_assert!(node.start_line > previous_end);
                prop_assert!(node.end_line <= lines.len());
                previous_end = node.end_line;
            }
            let first = &result.ast.children[0];
            prop_assert_eq!(result.ast.start_line, first.start_line);
            prop_assert_eq!(result.ast.end_line, previous_end);
        }
    }

    #[test]
    fn single_line_instructions_map_one_to_one(words in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let input: String = words.iter().map(|w| format!("USER {w}\n")).collect();
        let result = crate::parse_str(&input).unwrap();
        prop_assert_eq!(result.ast.children.len(), words.len());
        for (i, node) in result.ast.children.iter().enumerate() {
            prop_assert_eq!(node.start_line, i + 1);
            prop_assert_eq!(node.end_line, i + 1);
            prop_assert_eq!(node.arg_values(), vec![words[i].as_str()]);
        }
    }

    #[test]
    fn parse_never_panics(input in "[ -~\t\n]{0,200}") {
        let _ = crate::parse_str(&input);
    }
}
