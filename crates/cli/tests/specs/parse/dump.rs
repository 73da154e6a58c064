//! `dfp parse` tree dump specs

use crate::prelude::*;

const SAMPLE_DUMP: &str = r#"(from "golang:1.22" "AS" "build")
(workdir "/src")
(copy ["--chown=app:app"] "go.mod" "go.sum" "./")
(run "go mod download &&     go build       -o /out/app ./cmd/app")
(from "alpine:3.19")
(env "APP_HOME" "/app" "MODE" "\"release build\"")
(copy ["--from=build"] "/out/app" "/usr/local/bin/app")
(healthcheck ["--interval=30s"] "CMD" "app" "health")
(entrypoint "app" "serve")
"#;

#[test]
fn parse_file_prints_tree() {
    let project = Project::empty();
    project.file("Dockerfile", SAMPLE_RECIPE);

    project
        .dfp()
        .args(&["parse", "Dockerfile"])
        .passes()
        .stdout_eq(SAMPLE_DUMP)
        .stderr_eq("");
}

#[test]
fn parse_reads_stdin_when_no_file() {
    cli()
        .args(&["parse"])
        .stdin(SAMPLE_RECIPE)
        .passes()
        .stdout_eq(SAMPLE_DUMP);
}

#[test]
fn parse_reads_stdin_for_dash() {
    cli()
        .args(&["parse", "-"])
        .stdin("from scratch\n")
        .passes()
        .stdout_eq("(from \"scratch\")\n");
}

#[test]
fn parse_honours_backtick_directive() {
    cli()
        .args(&["parse"])
        .stdin("# escape=`\nFROM windows\nRUN dir c:\\ `\n    /s\n")
        .passes()
        .stdout_eq("(from \"windows\")\n(run \"dir c:\\\\     /s\")\n");
}

#[test]
fn parse_handles_crlf_and_bom() {
    cli()
        .args(&["parse"])
        .stdin("\u{feff}FROM a\r\nUSER app\r\n")
        .passes()
        .stdout_eq("(from \"a\")\n(user \"app\")\n");
}

#[test]
fn parse_nests_onbuild() {
    cli()
        .args(&["parse"])
        .stdin("ONBUILD COPY . /src\n")
        .passes()
        .stdout_eq("(onbuild (copy \".\" \"/src\"))\n");
}

#[test]
fn parse_keeps_unknown_instructions() {
    cli()
        .args(&["parse"])
        .stdin("FROM a\nFROBNICATE widgets\n")
        .passes()
        .stdout_eq("(from \"a\")\n(frobnicate)\n");
}
