// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parse tree nodes.
//!
//! A node carries three relations: its own `value`, a `next` sibling that
//! continues the current statement, and `children` holding nested statements.
//! In s-expression form:
//!
//! ```text
//! (value next (child child-next child-next-next) next-next)
//! ```
//!
//! The root node's children are the top-level instructions. Each instruction
//! node holds the lower-cased keyword as its value and its arguments as the
//! `next` chain.

use indexmap::IndexMap;
use serde::Serialize;

/// Attribute set by the argument parsers when an instruction used JSON-array
/// syntax.
pub const JSON_ATTRIBUTE: &str = "json";

/// A node in the parse tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Instruction keyword or argument token.
    pub value: String,
    /// The next argument in the same statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Box<Node>>,
    /// Nested statements owned by this node.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    /// Parser-specific flags, e.g. [`JSON_ATTRIBUTE`].
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, bool>,
    /// The logical line this node was built from.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub original: String,
    /// Leading `--flag` words. Only set on instruction nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,
    /// First physical line (1-based) of the statement; 0 when unset.
    pub start_line: usize,
    /// Last physical line (1-based, inclusive) of the statement; 0 when unset.
    pub end_line: usize,
}

impl Node {
    /// Create a leaf node holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Link `nodes` into a `next` chain, returning its head.
    ///
    /// Any `next` already set on the given nodes is replaced.
    pub fn chain<I>(nodes: I) -> Option<Box<Node>>
    where
        I: IntoIterator<Item = Node>,
        I::IntoIter: DoubleEndedIterator,
    {
        nodes.into_iter().rev().fold(None, |next, mut node| {
            node.next = next;
            Some(Box::new(node))
        })
    }

    /// Iterate over the `next` chain following this node.
    pub fn args(&self) -> Args<'_> {
        Args {
            cursor: self.next.as_deref(),
        }
    }

    /// Values of the `next` chain, in order.
    pub fn arg_values(&self) -> Vec<&str> {
        self.args().map(|n| n.value.as_str()).collect()
    }

    /// True when the argument parser saw JSON-array syntax.
    pub fn is_json(&self) -> bool {
        self.attributes
            .get(JSON_ATTRIBUTE)
            .copied()
            .unwrap_or(false)
    }

    /// Append `child`, recording its physical line span and widening ours.
    pub fn add_child(&mut self, mut child: Node, start_line: usize, end_line: usize) {
        child.start_line = start_line;
        child.end_line = end_line;
        if self.children.is_empty() {
            self.start_line = start_line;
        }
        self.end_line = end_line;
        self.children.push(child);
    }

    /// Render the tree as a list of s-expressions.
    ///
    /// ```text
    /// (from "alpine")
    /// (copy ["--chown=app"] "src" "/app")
    /// (run "make build")
    /// ```
    pub fn dump(&self) -> String {
        let mut out = self.value.clone();

        if !self.flags.is_empty() {
            out.push(' ');
            out.push_str(&quote_list(&self.flags));
        }

        for child in &self.children {
            out.push('(');
            out.push_str(&child.dump());
            out.push_str(")\n");
        }

        for arg in self.args() {
            out.push(' ');
            if arg.children.is_empty() {
                out.push_str(&quote(&arg.value));
            } else {
                out.push_str(&arg.dump());
            }
        }

        out.trim().to_string()
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.dump())
    }
}

/// Iterator over a node's `next` chain.
pub struct Args<'a> {
    cursor: Option<&'a Node>,
}

impl<'a> Iterator for Args<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some(node)
    }
}

/// Double-quote `s` with Go-style escapes: `\a \b \f \n \r \t \v`, then
/// `\xNN`, `\uNNNN` or `\UNNNNNNNN` for remaining control characters.
fn quote(s: &str) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0b}' => out.push_str("\\v"),
            c if c.is_control() => {
                let cp = u32::from(c);
                let _ = if cp < 0x80 {
                    write!(out, "\\x{cp:02x}")
                } else if cp <= 0xffff {
                    write!(out, "\\u{cp:04x}")
                } else {
                    write!(out, "\\U{cp:08x}")
                };
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn quote_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| quote(s)).collect();
    format!("[{}]", quoted.join(" "))
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
