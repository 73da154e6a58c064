//! CLI error specs
//!
//! Verify error messages and exit codes.

use crate::prelude::*;

#[test]
fn empty_file_fails() {
    let project = Project::empty();
    project.file("Dockerfile", "# nothing here\n\n");

    project
        .dfp()
        .args(&["parse", "Dockerfile"])
        .fails()
        .code(1)
        .stdout_empty()
        .stderr_eq("Error: file with no instructions\n");
}

#[test]
fn missing_file_fails() {
    let project = Project::empty();

    project
        .dfp()
        .args(&["parse", "nope"])
        .fails()
        .code(1)
        .stderr_has("Error: failed to read 'nope'");
}

#[test]
fn duplicate_directive_fails() {
    cli()
        .args(&["parse"])
        .stdin("# escape=`\n# escape=`\nFROM a\n")
        .fails()
        .code(1)
        .stderr_eq("Error: only one escape parser directive can be used\n");
}

#[test]
fn invalid_escape_token_fails() {
    cli()
        .args(&["parse"])
        .stdin("# escape=x\nFROM a\n")
        .fails()
        .stderr_has("invalid escape token 'x'");
}

#[test]
fn argument_syntax_error_fails() {
    cli()
        .args(&["parse"])
        .stdin("FROM a\nLABEL a=1 b\n")
        .fails()
        .code(1)
        .stderr_has("can't find = in \"b\"");
}

#[test]
fn line_too_long_respects_flag() {
    cli()
        .args(&["parse", "--max-line-bytes", "8"])
        .stdin("FROM alpine:latest\n")
        .fails()
        .stderr_eq("Error: line 1 greater than max allowed size of 8 bytes\n");
}

#[test]
fn line_too_long_respects_env() {
    cli()
        .args(&["parse"])
        .env("DFP_MAX_LINE_BYTES", "8")
        .stdin("FROM alpine:latest\n")
        .fails()
        .stderr_has("max allowed size of 8 bytes");
}

#[test]
fn invalid_utf8_fails() {
    let project = Project::empty();
    project.file_bytes("Dockerfile", b"FROM a\nRUN \xff\n");

    project
        .dfp()
        .args(&["parse", "Dockerfile"])
        .fails()
        .code(1)
        .stderr_has("Error:");
}
