// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical source rendering.

use super::parse_ok;
use crate::parse_str;
use proptest::prelude::*;

#[test]
fn joins_continuations_and_drops_comments() {
    let input = "# header\nFROM alpine\n\n  RUN make \\\n    # inner\n    install\nCMD [\"a\",\n \"b\"]\n";
    assert_eq!(
        parse_ok(input).canonical_source(),
        "FROM alpine\nRUN make     install\nCMD [\"a\", \"b\"]\n"
    );
}

#[test]
fn default_escape_is_not_emitted() {
    let source = parse_ok("# escape=\\\nFROM alpine\n").canonical_source();
    assert_eq!(source, "FROM alpine\n");
}

#[test]
fn backtick_escape_is_emitted() {
    let result = parse_ok("# escape=`\nFROM windows\nRUN dir `\n  c:\\\n");
    assert_eq!(
        result.canonical_source(),
        "# escape=`\nFROM windows\nRUN dir   c:\\\n"
    );
}

#[test]
fn reparse_gives_same_tree() {
    let input = "\u{feff}# escape=`\nFROM a\nENV A=1 `\n  B=2\nONBUILD RUN make\nHEALTHCHECK CMD [\"true\"]\n";
    let first = parse_ok(input);
    let second = parse_ok(&first.canonical_source());
    assert_eq!(first.ast.dump(), second.ast.dump());
    assert_eq!(first.escape_token, second.escape_token);
    assert_eq!(second.canonical_source(), first.canonical_source());
}

#[yare::parameterized(
    doubled_backslash = { "FROM x\nRUN echo \\\\\n", "FROM x\nRUN echo \\\\\n" },
    spaced_escapes    = { "RUN a \\ \\\n# trailing\n\n", "RUN a \\ \\\n" },
    doubled_backtick  = { "# escape=`\nRUN a ``\n", "# escape=`\nRUN a ``\n" },
)]
fn unfinished_statement_keeps_trailing_escape(input: &str, expected: &str) {
    let first = parse_ok(input);
    let canonical = first.canonical_source();
    assert_eq!(canonical, expected);

    let second = parse_ok(&canonical);
    assert_eq!(first.ast.dump(), second.ast.dump());
    assert_eq!(second.canonical_source(), canonical);
}

fn recipe_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "(FROM|RUN|USER|WORKDIR|EXPOSE|STOPSIGNAL) [a-z0-9 ]{1,10}",
        "(RUN|CMD|ENTRYPOINT) \\[\"[a-z]{1,4}\"(, \"[a-z ]{0,4}\"){0,2}\\]",
        "COPY (--from=[a-z]{1,4} )?[a-z]{1,4} /[a-z]{1,4}",
        "ENV [A-Z]{1,4}=[a-z]{1,4}( [A-Z]{1,4}=[a-z]{0,4}){0,2}",
        "LABEL [a-z]{1,4}=\"[a-z ]{0,6}\"",
        "RUN [a-z]{1,5} \\\\",
        "RUN [a-z]{1,5} \\\\\\\\",
        "RUN [a-z]{1,5} \\\\ \\\\",
        "RUN [a-z]{1,5} ``",
        "CMD \\[\"[a-z]{1,4}\",",
        "  [a-z]{1,6}\"?\\]?",
        "[ \t]*# [a-z ]{0,10}",
        "[ \t]{0,3}",
    ]
}

proptest! {
    #[test]
    fn canonical_source_is_stable(
        backtick in any::<bool>(),
        lines in prop::collection::vec(recipe_line(), 1..16),
    ) {
        let mut input = String::new();
        if backtick {
            input.push_str("# escape=`\n");
        }
        input.push_str(&lines.join("\n"));

        let Ok(first) = parse_str(&input) else {
            return Ok(());
        };
        let canonical = first.canonical_source();
        let second = parse_str(&canonical).unwrap();

        prop_assert_eq!(first.ast.dump(), second.ast.dump());
        prop_assert_eq!(first.escape_token, second.escape_token);
        prop_assert!(second.warnings.is_empty());
        prop_assert_eq!(second.canonical_source(), canonical);
    }
}
