//! `dfp parse -o json` specs

use crate::prelude::*;

fn parse_json(input: &str) -> serde_json::Value {
    let stdout = cli()
        .args(&["parse", "-o", "json"])
        .stdin(input)
        .passes()
        .stdout();
    serde_json::from_str(&stdout).unwrap()
}

#[test]
fn json_output_has_tree_and_metadata() {
    let value = parse_json("FROM alpine\nRUN make \\\n    install\n");

    assert_eq!(value["escape_token"], "\\");
    assert_eq!(value["warnings"], serde_json::json!([]));
    assert_eq!(value["ast"]["start_line"], 1);
    assert_eq!(value["ast"]["end_line"], 3);

    let run = &value["ast"]["children"][1];
    assert_eq!(run["value"], "run");
    assert_eq!(run["original"], "RUN make     install");
    assert_eq!(run["next"]["value"], "make     install");
    assert_eq!(run["start_line"], 2);
    assert_eq!(run["end_line"], 3);
}

#[test]
fn json_output_marks_json_form() {
    let value = parse_json("CMD [\"serve\", \"--port\", \"80\"]\n");
    let cmd = &value["ast"]["children"][0];
    assert_eq!(cmd["attributes"]["json"], true);
    assert_eq!(cmd["next"]["next"]["next"]["value"], "80");
}

#[test]
fn json_output_reports_escape_and_warnings() {
    let value = parse_json("# escape=`\nRUN a `\n\nb\n");
    assert_eq!(value["escape_token"], "`");
    assert_eq!(value["warnings"].as_array().map(Vec::len), Some(2));
}

#[test]
fn output_flag_before_subcommand() {
    cli()
        .args(&["--output", "json", "parse"])
        .stdin("USER app\n")
        .passes()
        .stdout_has("\"escape_token\": \"\\\\\"");
}
