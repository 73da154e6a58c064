// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword to argument-parser dispatch.
//!
//! The registry is built once and never mutated. Keywords are matched
//! case-insensitively; unknown keywords are routed to
//! [`line_parsers::parse_ignore`] so that new or custom instructions still
//! appear in the tree.

use crate::command;
use crate::directive::Directive;
use crate::error::ArgumentError;
use crate::line_parsers::{self, Arguments, LineParser};
use crate::node::Node;
use crate::split::{split_command, CommandLine};
use std::collections::HashMap;
use std::sync::LazyLock;

static DISPATCH: LazyLock<HashMap<&'static str, LineParser>> = LazyLock::new(|| {
    let parsers: [(&'static str, LineParser); 18] = [
        (command::ADD, line_parsers::parse_maybe_json_to_list),
        (command::ARG, line_parsers::parse_name_or_name_val),
        (command::CMD, line_parsers::parse_maybe_json),
        (command::COPY, line_parsers::parse_maybe_json_to_list),
        (command::ENTRYPOINT, line_parsers::parse_maybe_json),
        (command::ENV, line_parsers::parse_env),
        (command::EXPOSE, line_parsers::parse_strings_whitespace_delimited),
        (command::FROM, line_parsers::parse_strings_whitespace_delimited),
        (command::HEALTHCHECK, line_parsers::parse_health_config),
        (command::LABEL, line_parsers::parse_label),
        (command::MAINTAINER, line_parsers::parse_string),
        (command::ONBUILD, line_parsers::parse_sub_command),
        (command::RUN, line_parsers::parse_maybe_json),
        (command::SHELL, line_parsers::parse_maybe_json),
        (command::STOPSIGNAL, line_parsers::parse_string),
        (command::USER, line_parsers::parse_string),
        (command::VOLUME, line_parsers::parse_maybe_json_to_list),
        (command::WORKDIR, line_parsers::parse_string),
    ];
    HashMap::from(parsers)
});

/// Find the argument parser registered for `keyword`.
pub fn lookup(keyword: &str) -> Option<LineParser> {
    DISPATCH.get(keyword.to_lowercase().as_str()).copied()
}

/// Build an instruction node from one complete logical line.
pub fn new_node_from_line(line: &str, directive: &Directive) -> Result<Node, ArgumentError> {
    let CommandLine { cmd, flags, args } = split_command(line);
    let parser = lookup(&cmd).unwrap_or_else(|| {
        tracing::debug!(instruction = %cmd, "unknown instruction, arguments ignored");
        line_parsers::parse_ignore as LineParser
    });
    let Arguments { next, attributes } = parser(&args, directive)?;

    Ok(Node {
        value: cmd,
        next,
        attributes,
        original: line.to_string(),
        flags,
        ..Node::default()
    })
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
