// SPDX-License-Identifier: Apache-2.0

/// A read-only, forward-only position over the input text.
///
/// The text ends at the end of the slice or at the first NUL byte, whichever
/// comes first. Bytes after a NUL are never looked at.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
        Self {
            data: data.get(..end).unwrap_or(data),
            pos: 0,
        }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// The byte under the cursor, or `None` at end of text.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Returns the byte under the cursor and steps past it.
    pub fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos = self.pos.saturating_add(1);
        Some(byte)
    }

    /// Steps past `n` bytes, stopping at end of text.
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.data.len());
    }

    /// Everything from the cursor to the end of text.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or_default()
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Moves the cursor back to the start of the input.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// Skips spaces, tabs, newlines and carriage returns.
    pub fn skip_whitespace(&mut self) {
        let skipped = self
            .remaining()
            .iter()
            .take_while(|&&b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
            .count();
        self.pos = self.pos.saturating_add(skipped);
    }
}
