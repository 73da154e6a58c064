//! `dfp canonical` specs

use crate::prelude::*;

const SAMPLE_CANONICAL: &str = r#"FROM golang:1.22 AS build
WORKDIR /src
COPY --chown=app:app go.mod go.sum ./
RUN go mod download &&     go build       -o /out/app ./cmd/app
FROM alpine:3.19
ENV APP_HOME=/app MODE="release build"
COPY --from=build /out/app /usr/local/bin/app
HEALTHCHECK --interval=30s CMD ["app", "health"]
ENTRYPOINT ["app",    "serve"]
"#;

#[test]
fn canonical_joins_lines_and_drops_comments() {
    let project = Project::empty();
    project.file("Dockerfile", SAMPLE_RECIPE);

    project
        .dfp()
        .args(&["canonical", "Dockerfile"])
        .passes()
        .stdout_eq(SAMPLE_CANONICAL);
}

#[test]
fn canonical_output_parses_to_same_tree() {
    let project = Project::empty();
    project.file("Dockerfile", SAMPLE_RECIPE);
    project.file("Dockerfile.canonical", SAMPLE_CANONICAL);

    let original = project.dfp().args(&["parse", "Dockerfile"]).passes().stdout();
    project
        .dfp()
        .args(&["parse", "Dockerfile.canonical"])
        .passes()
        .stdout_eq(&original);
}

#[test]
fn canonical_keeps_backtick_directive() {
    cli()
        .args(&["canonical"])
        .stdin("# escape=`\n\nFROM windows\nRUN a `\n  b\n")
        .passes()
        .stdout_eq("# escape=`\nFROM windows\nRUN a   b\n");
}

#[test]
fn canonical_is_stable() {
    let first = cli()
        .args(&["canonical"])
        .stdin(SAMPLE_RECIPE)
        .passes()
        .stdout();
    cli()
        .args(&["canonical"])
        .stdin(&first)
        .passes()
        .stdout_eq(&first);
}
