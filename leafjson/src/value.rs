// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

/// Discriminant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
    String,
}

/// A parsed JSON leaf value.
///
/// Payloads only exist on the variants that carry them, so a number can
/// never be read out of a `Null`. String content is kept as raw bytes: the
/// parser copies input bytes through verbatim, and [`as_str`](Self::as_str)
/// checks UTF-8 on demand.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    False,
    True,
    Number(f64),
    String(Vec<u8>),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::False => ValueType::False,
            Value::True => ValueType::True,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// `Some` for `True`/`False`, `None` otherwise.
    pub fn boolean(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The decoded string bytes, without surrounding quotes.
    pub fn string(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn string_len(&self) -> Option<usize> {
        self.string().map(<[u8]>::len)
    }

    /// The decoded string as `&str`, if it is a string holding valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.string().and_then(|s| core::str::from_utf8(s).ok())
    }

    /// Releases any owned payload and becomes `Null`. Calling this on a
    /// `Null` value does nothing.
    pub fn reset(&mut self) {
        *self = Value::Null;
    }

    pub fn set_boolean(&mut self, b: bool) {
        *self = if b { Value::True } else { Value::False };
    }

    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// Replaces the value with a copy of `bytes`. Any string previously held
    /// is dropped first.
    pub fn set_string(&mut self, bytes: &[u8]) {
        *self = Value::String(bytes.to_vec());
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::String(bytes)
    }
}
