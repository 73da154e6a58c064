// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.
//!
//! `DFP_MAX_LINE_BYTES` is read by clap directly (see `Cli`).

/// Tracing filter directives from `DFP_LOG`, if set and non-empty.
pub fn log_filter() -> Option<String> {
    std::env::var("DFP_LOG").ok().filter(|s| !s.trim().is_empty())
}
