// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;

/// Pure functions for decoding JSON string escapes and classifying string bytes.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Process a simple escape sequence character and return the unescaped byte.
    ///
    /// # Arguments
    /// * `escape_char` - The character following the backslash in an escape sequence
    ///
    /// # Returns
    /// The unescaped byte value, or `InvalidStringEscape` for anything that is
    /// not one of the eight simple escapes.
    ///
    /// # Examples
    /// ```ignore
    /// // Internal API - see unit tests for usage examples
    /// assert_eq!(EscapeProcessor::process_simple_escape(b'n').unwrap(), b'\n');
    /// ```
    pub fn process_simple_escape(escape_char: u8) -> Result<u8, ParseError> {
        match escape_char {
            b'"' => Ok(b'"'),
            b'\\' => Ok(b'\\'),
            b'/' => Ok(b'/'),
            b'b' => Ok(0x08), // Backspace
            b'f' => Ok(0x0C), // Form feed
            b'n' => Ok(b'\n'),
            b'r' => Ok(b'\r'),
            b't' => Ok(b'\t'),
            _ => Err(ParseError::InvalidStringEscape),
        }
    }

    /// Control characters must be escaped inside a string.
    pub fn is_unescaped_control(byte: u8) -> bool {
        byte < 0x20
    }
}
