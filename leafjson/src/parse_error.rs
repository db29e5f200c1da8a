// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur during JSON parsing.
///
/// Every variant is permanent for the input that produced it: parsing is
/// deterministic, so retrying the same text yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ParseError {
    /// The input is empty or contains only whitespace.
    ExpectValue = 1,
    /// A literal or number is malformed.
    InvalidValue = 2,
    /// A valid value was followed by something other than whitespace.
    RootNotSingular = 3,
    /// A structurally valid number is too large to represent as `f64`.
    NumberTooBig = 4,
    /// A string was not closed before the end of input.
    MissingQuotationMark = 5,
    /// A backslash was followed by a character that is not a known escape.
    InvalidStringEscape = 6,
    /// An unescaped control character (below 0x20) appeared in a string.
    InvalidStringChar = 7,
}

impl ParseError {
    /// Stable ordinal of this error. `0` is reserved for success and is
    /// never returned.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`code`](Self::code).
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(ParseError::ExpectValue),
            2 => Some(ParseError::InvalidValue),
            3 => Some(ParseError::RootNotSingular),
            4 => Some(ParseError::NumberTooBig),
            5 => Some(ParseError::MissingQuotationMark),
            6 => Some(ParseError::InvalidStringEscape),
            7 => Some(ParseError::InvalidStringChar),
            _ => None,
        }
    }

    /// True for errors raised while decoding string content.
    pub const fn is_string_error(self) -> bool {
        matches!(
            self,
            ParseError::MissingQuotationMark
                | ParseError::InvalidStringEscape
                | ParseError::InvalidStringChar
        )
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "root value is followed by extra data",
            ParseError::NumberTooBig => "number is too big",
            ParseError::MissingQuotationMark => "missing closing quotation mark",
            ParseError::InvalidStringEscape => "invalid string escape",
            ParseError::InvalidStringChar => "invalid character in string",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ParseError {}
