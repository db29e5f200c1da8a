// SPDX-License-Identifier: Apache-2.0

use crate::config::{DefaultConfig, ScratchConfig};
use crate::cursor::Cursor;
use crate::escape_processor::EscapeProcessor;
use crate::number_parser;
use crate::parse_error::ParseError;
use crate::scratch_buffer::ScratchBuffer;
use crate::value::Value;

/// A recursive-descent parser for a single JSON value held in a slice.
///
/// Generic over [`ScratchConfig`] for the initial size of the buffer that
/// decoded string content is staged in.
// Lifetime 'a is the input buffer lifetime
pub struct SliceParser<'a, C: ScratchConfig = DefaultConfig> {
    cursor: Cursor<'a>,
    scratch: ScratchBuffer<C>,
}

impl<'a> SliceParser<'a, DefaultConfig> {
    /// Creates a new parser for the given JSON input.
    ///
    /// # Example
    /// ```
    /// use leafjson::SliceParser;
    /// let value = SliceParser::new(" true ").parse().unwrap();
    /// assert_eq!(value.boolean(), Some(true));
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice.
    ///
    /// Input ends at the end of the slice or at the first NUL byte.
    ///
    /// # Example
    /// ```
    /// # use leafjson::SliceParser;
    /// let value = SliceParser::new_from_slice(b"-1.5e3").parse().unwrap();
    /// assert_eq!(value.number(), Some(-1500.0));
    /// ```
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        Self::with_config_from_slice(input)
    }
}

/// Generic constructor for SliceParser with custom configurations
impl<'a, C: ScratchConfig> SliceParser<'a, C> {
    /// Creates a new parser with a custom `ScratchConfig`.
    pub fn with_config(input: &'a str) -> Self {
        Self::with_config_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice with a custom `ScratchConfig`.
    /// This is the core constructor that all other constructors delegate to.
    pub fn with_config_from_slice(input: &'a [u8]) -> Self {
        SliceParser {
            cursor: Cursor::new(input),
            scratch: ScratchBuffer::new(),
        }
    }

    /// Parses the input as exactly one JSON value surrounded by optional
    /// whitespace.
    pub fn parse(self) -> Result<Value, ParseError> {
        let mut value = Value::Null;
        self.parse_into(&mut value)?;
        Ok(value)
    }

    /// Parses into an existing value slot.
    ///
    /// The slot is reset to `Null` first, releasing whatever it held. On
    /// error it is left as `Null`.
    pub fn parse_into(mut self, value: &mut Value) -> Result<(), ParseError> {
        self.parse_root(value)
    }

    fn parse_root(&mut self, value: &mut Value) -> Result<(), ParseError> {
        value.reset();
        self.cursor.skip_whitespace();
        let result = self
            .parse_value(value)
            .and_then(|()| self.expect_end_of_root(value));
        debug_assert!(
            self.scratch.is_empty(),
            "scratch buffer holds {} bytes after parse",
            self.scratch.top()
        );
        match result {
            Ok(()) => log::debug!("SliceParser: parsed {:?}", value.value_type()),
            Err(e) => {
                log::debug!(
                    "SliceParser: failed with {:?} at byte {}",
                    e,
                    self.cursor.current_pos()
                );
                self.cursor.rewind();
            }
        }
        result
    }

    fn expect_end_of_root(&mut self, value: &mut Value) -> Result<(), ParseError> {
        self.cursor.skip_whitespace();
        if self.cursor.is_exhausted() {
            Ok(())
        } else {
            value.reset();
            Err(ParseError::RootNotSingular)
        }
    }

    /// Dispatches on the first byte of the value. Anything that does not
    /// start a literal or a string is handed to the number recognizer,
    /// which rejects it with `InvalidValue`.
    fn parse_value(&mut self, value: &mut Value) -> Result<(), ParseError> {
        let first = self.cursor.peek().ok_or(ParseError::ExpectValue)?;
        log::trace!("SliceParser: dispatching on {:?}", first as char);
        match first {
            b't' => self.parse_literal(value, b"true", Value::True),
            b'f' => self.parse_literal(value, b"false", Value::False),
            b'n' => self.parse_literal(value, b"null", Value::Null),
            b'"' => self.parse_string(value),
            _ => self.parse_number(value),
        }
    }

    /// The first byte of `literal` has already been matched by the dispatcher.
    fn parse_literal(
        &mut self,
        value: &mut Value,
        literal: &'static [u8],
        produces: Value,
    ) -> Result<(), ParseError> {
        self.cursor.advance(1);
        let rest = literal.get(1..).unwrap_or_default();
        if !self.cursor.remaining().starts_with(rest) {
            return Err(ParseError::InvalidValue);
        }
        self.cursor.advance(rest.len());
        log::trace!("SliceParser: literal {:?}", produces.value_type());
        *value = produces;
        Ok(())
    }

    fn parse_number(&mut self, value: &mut Value) -> Result<(), ParseError> {
        let start = self.cursor.current_pos();
        let (n, len) = number_parser::parse_number(self.cursor.remaining())?;
        log::trace!("SliceParser: number {} at {}..{}", n, start, start + len);
        self.cursor.advance(len);
        value.set_number(n);
        Ok(())
    }

    /// The cursor is on the opening quote.
    fn parse_string(&mut self, value: &mut Value) -> Result<(), ParseError> {
        let head = self.scratch.top();
        self.cursor.advance(1);
        if let Err(e) = self.decode_string_content() {
            self.scratch.truncate(head);
            return Err(e);
        }
        let len = self.scratch.top() - head;
        log::trace!("SliceParser: string of {} bytes", len);
        value.set_string(self.scratch.pop(len));
        Ok(())
    }

    /// Stages string content into the scratch buffer up to and including the
    /// closing quote.
    fn decode_string_content(&mut self) -> Result<(), ParseError> {
        loop {
            // Copy the run of bytes that need no processing in one go
            let rest = self.cursor.remaining();
            let span = rest
                .iter()
                .position(|&b| {
                    b == b'"' || b == b'\\' || EscapeProcessor::is_unescaped_control(b)
                })
                .unwrap_or(rest.len());
            self.scratch
                .extend_from_slice(rest.get(..span).unwrap_or_default());
            self.cursor.advance(span);

            match self.cursor.next_byte() {
                Some(b'"') => return Ok(()),
                Some(b'\\') => {
                    let escape = self
                        .cursor
                        .next_byte()
                        .ok_or(ParseError::InvalidStringEscape)?;
                    let unescaped = EscapeProcessor::process_simple_escape(escape)?;
                    self.scratch.put(unescaped);
                }
                Some(_) => return Err(ParseError::InvalidStringChar),
                None => return Err(ParseError::MissingQuotationMark),
            }
        }
    }
}
