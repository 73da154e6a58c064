// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser configuration.

/// Largest physical line accepted by default, in bytes (64 KiB minus one).
pub const DEFAULT_MAX_LINE_BYTES: usize = 64 * 1024 - 1;

/// Configuration for a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum size of one physical line, excluding its terminator.
    pub max_line_bytes: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_line_bytes: DEFAULT_MAX_LINE_BYTES,
        }
    }
}

impl ParserConfig {
    /// Override the maximum physical line size.
    pub fn with_max_line_bytes(mut self, max_line_bytes: usize) -> Self {
        self.max_line_bytes = max_line_bytes;
        self
    }
}
