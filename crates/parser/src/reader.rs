// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded physical-line reader.

use crate::error::ParseError;
use std::io::{self, BufRead};

/// Reads `\n`-terminated lines, dropping a trailing `\r`.
///
/// A line longer than the configured maximum fails with
/// [`ParseError::LineTooLong`] before the rest of it is buffered.
pub(crate) struct LineReader<R> {
    inner: R,
    max_line_bytes: usize,
    line_number: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub(crate) fn new(inner: R, max_line_bytes: usize) -> Self {
        Self {
            inner,
            max_line_bytes,
            line_number: 0,
            buf: Vec::new(),
        }
    }

    /// 1-based number of the line most recently returned.
    pub(crate) fn line_number(&self) -> usize {
        self.line_number
    }

    /// Next physical line, or `None` at end of input.
    pub(crate) fn next_line(&mut self) -> Result<Option<String>, ParseError> {
        self.buf.clear();
        let mut read_any = false;

        loop {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if available.is_empty() {
                break;
            }
            read_any = true;

            let (chunk, consumed, done) = match available.iter().position(|&b| b == b'\n') {
                Some(i) => (&available[..i], i + 1, true),
                None => (available, available.len(), false),
            };
            self.buf.extend_from_slice(chunk);
            self.inner.consume(consumed);

            // One extra byte leaves room for a `\r` before the newline.
            if self.buf.len() > self.max_line_bytes.saturating_add(1) {
                return Err(self.too_long());
            }
            if done {
                break;
            }
        }

        if !read_any {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        if self.buf.len() > self.max_line_bytes {
            return Err(self.too_long());
        }

        self.line_number += 1;
        let line = std::str::from_utf8(&self.buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Some(line.to_string()))
    }

    fn too_long(&self) -> ParseError {
        ParseError::LineTooLong {
            line: self.line_number + 1,
            max: self.max_line_bytes,
        }
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
