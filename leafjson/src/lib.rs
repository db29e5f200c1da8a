// SPDX-License-Identifier: Apache-2.0

//! A small recursive-descent parser for JSON leaf values: `null`, `true`,
//! `false`, numbers and strings.
//!
//! ```
//! use leafjson::{parse, ParseError, ValueType};
//!
//! let value = parse(r#" "tab\there" "#).unwrap();
//! assert_eq!(value.value_type(), ValueType::String);
//! assert_eq!(value.as_str(), Some("tab\there"));
//!
//! assert_eq!(parse("1e400"), Err(ParseError::NumberTooBig));
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod config;
pub use config::{DefaultConfig, ScratchCapacity, ScratchConfig};

mod cursor;

mod escape_processor;

mod number_parser;

mod parse_error;
pub use parse_error::ParseError;

mod scratch_buffer;

mod slice_parser;
pub use slice_parser::SliceParser;

mod value;
pub use value::{Value, ValueType};

/// Parses `input` as a single JSON value.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    SliceParser::new(input).parse()
}

/// Parses a byte slice as a single JSON value. Input ends at the first NUL
/// byte, if any.
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    SliceParser::new_from_slice(input).parse()
}

/// Parses `input` into an existing value slot, resetting it first.
///
/// On error the slot is left as [`Value::Null`].
pub fn parse_into(value: &mut Value, input: &[u8]) -> Result<(), ParseError> {
    SliceParser::new_from_slice(input).parse_into(value)
}
