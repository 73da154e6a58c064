// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

mod canonical;
mod continuation;
mod directives;
mod errors;
mod spans;
mod warnings;

// ---------------------------------------------------------------------------
// Shared test helpers
// ---------------------------------------------------------------------------

/// Parse a recipe, panicking on error.
fn parse_ok(input: &str) -> ParseResult {
    parse_str(input).unwrap()
}

/// Parse a recipe and return its tree dump.
fn dump(input: &str) -> String {
    parse_ok(input).ast.dump()
}

/// Assert that a parse error's display message contains all given fragments.
fn assert_err_contains(err: &ParseError, fragments: &[&str]) {
    let msg = err.to_string();
    for frag in fragments {
        assert!(msg.contains(frag), "error should contain '{frag}': {msg}");
    }
}

#[test]
fn single_instruction() {
    let result = parse_ok("FROM alpine:3.19\n");
    assert_eq!(result.ast.children.len(), 1);
    assert_eq!(result.ast.children[0].value, "from");
    assert_eq!(result.ast.children[0].arg_values(), vec!["alpine:3.19"]);
    assert_eq!(result.escape_token, '\\');
    assert!(result.warnings.is_empty());
}

#[test]
fn instructions_in_file_order() {
    let input = "FROM alpine\nWORKDIR /src\nCOPY . .\nRUN make\nCMD [\"./app\"]\n";
    let values: Vec<_> = parse_ok(input)
        .ast
        .children
        .iter()
        .map(|n| n.value.clone())
        .collect();
    assert_eq!(values, vec!["from", "workdir", "copy", "run", "cmd"]);
}

#[test]
fn unknown_instruction_is_kept() {
    let result = parse_ok("FROBNICATE x y\n");
    let node = &result.ast.children[0];
    assert_eq!(node.value, "frobnicate");
    assert!(node.children.is_empty());
    assert!(node.next.is_none());
    assert_eq!(node.original, "FROBNICATE x y");
}

#[test]
fn leading_byte_order_mark_is_ignored() {
    assert_eq!(dump("\u{feff}FROM alpine\n"), "(from \"alpine\")");
}

#[test]
fn byte_order_mark_only_stripped_on_first_line() {
    let result = parse_ok("FROM alpine\n\u{feff}RUN x\n");
    assert_eq!(result.ast.children[1].value, "\u{feff}run");
}

#[test]
fn windows_line_endings() {
    assert_eq!(
        dump("FROM alpine\r\nRUN make \\\r\n  all\r\n"),
        "(from \"alpine\")\n(run \"make   all\")"
    );
}

#[test]
fn hash_inside_instruction_is_not_a_comment() {
    assert_eq!(dump("RUN echo # hi\n"), "(run \"echo # hi\")");
}

#[test]
fn flags_are_attached_to_instruction() {
    let result = parse_ok("FROM --platform=linux/amd64 alpine AS build\n");
    let node = &result.ast.children[0];
    assert_eq!(node.flags, vec!["--platform=linux/amd64".to_string()]);
    assert_eq!(node.arg_values(), vec!["alpine", "AS", "build"]);
}

#[test]
fn full_recipe_dump() {
    let input = r#"# syntax comment
FROM golang:1.22 AS build
ARG VERSION=dev
ENV CGO_ENABLED=0 GOOS=linux
LABEL maintainer="ops@example.com"
COPY --chown=app:app go.mod go.sum ./
RUN go mod download && \
    go build -o /out/app .
EXPOSE 8080/tcp
HEALTHCHECK --interval=30s CMD ["curl", "-f", "http://localhost:8080/"]
ONBUILD RUN echo rebuilt
USER app
ENTRYPOINT ["/out/app"]
"#;
    let expected = [
        r#"(from "golang:1.22" "AS" "build")"#,
        r#"(arg "VERSION=dev")"#,
        r#"(env "CGO_ENABLED" "0" "GOOS" "linux")"#,
        r#"(label "maintainer" "\"ops@example.com\"")"#,
        r#"(copy ["--chown=app:app"] "go.mod" "go.sum" "./")"#,
        r#"(run "go mod download &&     go build -o /out/app .")"#,
        r#"(expose "8080/tcp")"#,
        r#"(healthcheck ["--interval=30s"] "CMD" "curl" "-f" "http://localhost:8080/")"#,
        r#"(onbuild (run "echo rebuilt"))"#,
        r#"(user "app")"#,
        r#"(entrypoint "/out/app")"#,
    ]
    .join("\n");
    assert_eq!(dump(input), expected);
}

#[test]
fn json_attribute_is_recorded() {
    let result = parse_ok("CMD [\"a\", \"b\"]\nCMD a b\n");
    assert!(result.ast.children[0].is_json());
    assert!(!result.ast.children[1].is_json());
}

#[test]
fn parse_from_reader() {
    let input = std::io::Cursor::new(b"FROM alpine\n".to_vec());
    assert_eq!(parse(input).unwrap().ast.children.len(), 1);
}

#[test]
fn custom_config_is_honored() {
    let config = ParserConfig::default().with_max_line_bytes(8);
    assert!(parse_with_config("FROM a\n".as_bytes(), &config).is_ok());
    assert!(parse_with_config("FROM alpine\n".as_bytes(), &config).is_err());
}

#[test]
fn result_serializes_to_json() {
    let result = parse_ok("FROM alpine\n");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["escape_token"], "\\");
    assert_eq!(json["ast"]["children"][0]["value"], "from");
    assert_eq!(json["ast"]["children"][0]["next"]["value"], "alpine");
    assert_eq!(json["warnings"], serde_json::json!([]));
}
