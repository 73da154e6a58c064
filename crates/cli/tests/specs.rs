//! Behavioral specifications for the dfp CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/errors.rs"]
mod cli_errors;
#[path = "specs/cli/help.rs"]
mod cli_help;

// parse/
#[path = "specs/parse/dump.rs"]
mod parse_dump;
#[path = "specs/parse/json.rs"]
mod parse_json;
#[path = "specs/parse/warnings.rs"]
mod parse_warnings;

// canonical/
#[path = "specs/canonical/output.rs"]
mod canonical_output;
