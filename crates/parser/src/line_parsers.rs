// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-instruction argument parsers.
//!
//! Each parser receives an instruction's argument text (keyword and flags
//! already removed) and returns the argument chain plus any attributes. The
//! chain is attached as the instruction node's `next`.

use crate::directive::Directive;
use crate::dispatch;
use crate::error::ArgumentError;
use crate::node::{Node, JSON_ATTRIBUTE};
use crate::split::TOKEN_WHITESPACE;
use indexmap::IndexMap;
use serde_json::Value;

/// Output of an argument parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    /// Head of the argument chain.
    pub next: Option<Box<Node>>,
    pub attributes: IndexMap<String, bool>,
}

impl Arguments {
    fn chain<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
        I::IntoIter: DoubleEndedIterator,
    {
        Self {
            next: Node::chain(nodes),
            attributes: IndexMap::new(),
        }
    }

    fn single(value: &str) -> Self {
        Self::chain([Node::new(value)])
    }

    fn json(nodes: Vec<Node>) -> Self {
        Self {
            next: Node::chain(nodes),
            attributes: IndexMap::from([(JSON_ATTRIBUTE.to_string(), true)]),
        }
    }
}

/// Signature shared by all argument parsers.
pub type LineParser = fn(&str, &Directive) -> Result<Arguments, ArgumentError>;

/// Accept any arguments and keep none of them.
pub fn parse_ignore(_rest: &str, _directive: &Directive) -> Result<Arguments, ArgumentError> {
    Ok(Arguments::default())
}

/// Parse the arguments as a complete instruction of their own.
///
/// `ONBUILD RUN make` becomes `(onbuild (run "make"))`.
pub fn parse_sub_command(rest: &str, directive: &Directive) -> Result<Arguments, ArgumentError> {
    if rest.is_empty() {
        return Ok(Arguments::default());
    }

    let child = dispatch::new_node_from_line(rest, directive)?;
    let wrapper = Node {
        children: vec![child],
        ..Node::default()
    };
    Ok(Arguments {
        next: Some(Box::new(wrapper)),
        attributes: IndexMap::new(),
    })
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Spaces,
    Word,
    Quote(char),
}

/// Split on whitespace, honouring quotes and the escape character.
///
/// Quotes and escapes are kept in the words; only a dangling escape at the
/// very end is dropped. Inside single quotes the escape character is literal.
pub fn parse_words(rest: &str, directive: &Directive) -> Vec<String> {
    let escape = directive.escape_token();
    let mut words = Vec::new();
    let mut word = String::new();
    let mut blank_ok = false;
    let mut phase = Phase::Spaces;
    let mut chars = rest.chars();

    while let Some(mut ch) = chars.next() {
        if phase == Phase::Spaces {
            if ch.is_whitespace() {
                continue;
            }
            phase = Phase::Word;
        }

        match phase {
            Phase::Spaces | Phase::Word => {
                if ch.is_whitespace() {
                    phase = Phase::Spaces;
                    if blank_ok || !word.is_empty() {
                        words.push(std::mem::take(&mut word));
                    }
                    blank_ok = false;
                    continue;
                }
                if ch == '\'' || ch == '"' {
                    phase = Phase::Quote(ch);
                    blank_ok = true;
                }
                if ch == escape {
                    let Some(escaped) = chars.next() else {
                        continue;
                    };
                    word.push(ch);
                    ch = escaped;
                }
                word.push(ch);
            }
            Phase::Quote(quote) => {
                if ch == quote {
                    phase = Phase::Word;
                }
                if ch == escape && quote != '\'' {
                    let Some(escaped) = chars.next() else {
                        phase = Phase::Word;
                        continue;
                    };
                    word.push(ch);
                    ch = escaped;
                }
                word.push(ch);
            }
        }
    }

    if phase != Phase::Spaces && (blank_ok || !word.is_empty()) {
        words.push(word);
    }
    words
}

/// `KEY name value` or `KEY name=value ...`, as used by ENV and LABEL.
///
/// The first word decides the form: without `=` it is the legacy
/// single-pair form, otherwise every word must be an assignment. The chain
/// alternates key and value nodes.
fn parse_name_val(
    rest: &str,
    instruction: &str,
    directive: &Directive,
) -> Result<Arguments, ArgumentError> {
    let words = parse_words(rest, directive);
    let Some(first) = words.first() else {
        return Ok(Arguments::default());
    };

    if !first.contains('=') {
        let mut parts = TOKEN_WHITESPACE.splitn(rest, 2);
        let (Some(name), Some(value)) = (parts.next(), parts.next()) else {
            return Err(ArgumentError::MissingValue {
                instruction: instruction.to_string(),
            });
        };
        return Ok(Arguments::chain([Node::new(name), Node::new(value)]));
    }

    let mut nodes = Vec::with_capacity(words.len() * 2);
    for word in words {
        let Some((name, value)) = word.split_once('=') else {
            return Err(ArgumentError::MissingEquals { word });
        };
        nodes.push(Node::new(name));
        nodes.push(Node::new(value));
    }
    Ok(Arguments::chain(nodes))
}

pub fn parse_env(rest: &str, directive: &Directive) -> Result<Arguments, ArgumentError> {
    parse_name_val(rest, "ENV", directive)
}

pub fn parse_label(rest: &str, directive: &Directive) -> Result<Arguments, ArgumentError> {
    parse_name_val(rest, "LABEL", directive)
}

/// One node per word: `ARG name`, `ARG name=default`.
pub fn parse_name_or_name_val(
    rest: &str,
    directive: &Directive,
) -> Result<Arguments, ArgumentError> {
    let words = parse_words(rest, directive);
    Ok(Arguments::chain(words.into_iter().map(Node::new).collect::<Vec<_>>()))
}

/// One node per whitespace-separated token.
pub fn parse_strings_whitespace_delimited(
    rest: &str,
    _directive: &Directive,
) -> Result<Arguments, ArgumentError> {
    if rest.is_empty() {
        return Ok(Arguments::default());
    }
    Ok(Arguments::chain(
        TOKEN_WHITESPACE.split(rest).map(Node::new).collect::<Vec<_>>(),
    ))
}

/// The whole argument text as a single node.
pub fn parse_string(rest: &str, _directive: &Directive) -> Result<Arguments, ArgumentError> {
    if rest.is_empty() {
        return Ok(Arguments::default());
    }
    Ok(Arguments::single(rest))
}

/// Decode `rest` as a JSON array of strings.
///
/// `Ok(None)` means the text is not a JSON array and the caller should fall
/// back to its plain form. Only the first JSON value is decoded.
fn parse_json(rest: &str) -> Result<Option<Vec<Node>>, ArgumentError> {
    let rest = rest.trim_start();
    if !rest.starts_with('[') {
        return Ok(None);
    }

    let mut stream = serde_json::Deserializer::from_str(rest).into_iter::<Vec<Value>>();
    let Some(Ok(values)) = stream.next() else {
        return Ok(None);
    };

    values
        .into_iter()
        .map(|value| match value {
            Value::String(s) => Ok(Node::new(s)),
            _ => Err(ArgumentError::NotStringArray),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// JSON array form when it parses, otherwise the raw text as one node.
pub fn parse_maybe_json(rest: &str, _directive: &Directive) -> Result<Arguments, ArgumentError> {
    if rest.is_empty() {
        return Ok(Arguments::default());
    }
    match parse_json(rest)? {
        Some(nodes) => Ok(Arguments::json(nodes)),
        None => Ok(Arguments::single(rest)),
    }
}

/// JSON array form when it parses, otherwise a whitespace-delimited list.
pub fn parse_maybe_json_to_list(
    rest: &str,
    directive: &Directive,
) -> Result<Arguments, ArgumentError> {
    match parse_json(rest)? {
        Some(nodes) => Ok(Arguments::json(nodes)),
        None => parse_strings_whitespace_delimited(rest, directive),
    }
}

/// `HEALTHCHECK <type> <command>`: the type node followed by the command.
pub fn parse_health_config(
    rest: &str,
    directive: &Directive,
) -> Result<Arguments, ArgumentError> {
    let sep = rest.find(char::is_whitespace).unwrap_or(rest.len());
    if sep == 0 {
        return Ok(Arguments::default());
    }

    let (typ, command) = rest.split_at(sep);
    let Arguments { next, attributes } = parse_maybe_json(command.trim_start(), directive)?;
    let head = Node {
        value: typ.to_string(),
        next,
        ..Node::default()
    };
    Ok(Arguments {
        next: Some(Box::new(head)),
        attributes,
    })
}

#[cfg(test)]
#[path = "line_parsers_tests.rs"]
mod tests;
