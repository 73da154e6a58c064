//! CLI help output specs
//!
//! Verify help and version output.

use crate::prelude::*;

#[test]
fn dfp_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn dfp_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("parse")
        .stdout_has("canonical")
        .stdout_has("--max-line-bytes");
}

#[test]
fn dfp_parse_help_shows_usage() {
    cli()
        .args(&["parse", "--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--output");
}

#[test]
fn dfp_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
