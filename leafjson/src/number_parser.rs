// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::parse_error::ParseError;

/// Outcome of converting a validated number token to `f64`.
#[derive(Debug, PartialEq)]
pub enum NumberResult {
    /// The value is representable (underflow to zero counts as representable).
    Finite(f64),
    /// The magnitude is too large and would round to infinity.
    Overflow,
}

/// Structural scan of a JSON number at the start of `bytes`.
///
/// ```text
/// number := '-'? int frac? exp?
/// int    := '0' | [1-9] digit*
/// frac   := '.' digit+
/// exp    := ('e'|'E') ('+'|'-')? digit+
/// ```
///
/// Nothing is converted here. Returns the length of the token, or
/// `InvalidValue` at the first rule violation. A `0` directly followed by
/// another digit is rejected rather than treated as the end of the token.
pub fn scan_number(bytes: &[u8]) -> Result<usize, ParseError> {
    let at = |i: usize| bytes.get(i).copied();
    let is_digit = |i: usize| at(i).is_some_and(|b| b.is_ascii_digit());
    let skip_digits = |mut i: usize| {
        while is_digit(i) {
            i += 1;
        }
        i
    };

    let mut p = 0;
    if at(p) == Some(b'-') {
        p += 1;
    }
    match at(p) {
        Some(b'0') => {
            p += 1;
            if is_digit(p) {
                return Err(ParseError::InvalidValue);
            }
        }
        Some(b'1'..=b'9') => p = skip_digits(p + 1),
        _ => return Err(ParseError::InvalidValue),
    }
    if at(p) == Some(b'.') {
        p += 1;
        if !is_digit(p) {
            return Err(ParseError::InvalidValue);
        }
        p = skip_digits(p);
    }
    if matches!(at(p), Some(b'e' | b'E')) {
        p += 1;
        if matches!(at(p), Some(b'+' | b'-')) {
            p += 1;
        }
        if !is_digit(p) {
            return Err(ParseError::InvalidValue);
        }
        p = skip_digits(p);
    }
    Ok(p)
}

/// Converts a token already accepted by [`scan_number`] to `f64`.
///
/// JSON numbers are pure ASCII, so a UTF-8 failure here means the caller
/// passed an unvalidated token.
pub fn convert_number(token: &[u8]) -> Result<NumberResult, ParseError> {
    let s = core::str::from_utf8(token).map_err(|_| ParseError::InvalidValue)?;
    let value = f64::from_str(s).map_err(|_| ParseError::InvalidValue)?;
    if value.is_infinite() {
        Ok(NumberResult::Overflow)
    } else {
        Ok(NumberResult::Finite(value))
    }
}

/// Scans and converts the number at the start of `bytes`.
///
/// Returns the value together with the number of bytes it occupies.
pub fn parse_number(bytes: &[u8]) -> Result<(f64, usize), ParseError> {
    let len = scan_number(bytes)?;
    let token = bytes.get(..len).ok_or(ParseError::InvalidValue)?;
    match convert_number(token)? {
        NumberResult::Finite(value) => Ok((value, len)),
        NumberResult::Overflow => Err(ParseError::NumberTooBig),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_valid_tokens() {
        assert_eq!(scan_number(b"0"), Ok(1));
        assert_eq!(scan_number(b"-0"), Ok(2));
        assert_eq!(scan_number(b"123"), Ok(3));
        assert_eq!(scan_number(b"-1.5"), Ok(4));
        assert_eq!(scan_number(b"3.1416"), Ok(6));
        assert_eq!(scan_number(b"1E10"), Ok(4));
        assert_eq!(scan_number(b"1e+10"), Ok(5));
        assert_eq!(scan_number(b"-1.25e-10"), Ok(9));
        assert_eq!(scan_number(b"0.0e0"), Ok(5));
    }

    #[test]
    fn test_scan_stops_at_token_end() {
        assert_eq!(scan_number(b"1.2.3"), Ok(3));
        assert_eq!(scan_number(b"12 "), Ok(2));
        assert_eq!(scan_number(b"0x0"), Ok(1));
        assert_eq!(scan_number(b"7}"), Ok(1));
    }

    #[test]
    fn test_scan_rejects_malformed() {
        let cases: &[&[u8]] = &[
            b"", b"-", b"+1", b".123", b"1.", b"1.e5", b"1e", b"1e+", b"1E-", b"INF", b"inf",
            b"NAN", b"nan", b"x", b"-a", b"0123", b"-01", b"00",
        ];
        for case in cases {
            assert_eq!(
                scan_number(case),
                Err(ParseError::InvalidValue),
                "{:?} should be rejected",
                core::str::from_utf8(case)
            );
        }
    }

    #[test]
    fn test_convert() {
        assert_eq!(convert_number(b"1.5"), Ok(NumberResult::Finite(1.5)));
        assert_eq!(convert_number(b"-0"), Ok(NumberResult::Finite(-0.0)));
        assert_eq!(convert_number(b"1e400"), Ok(NumberResult::Overflow));
        assert_eq!(convert_number(b"-1e309"), Ok(NumberResult::Overflow));
        // Underflow is not overflow
        assert_eq!(convert_number(b"1e-10000"), Ok(NumberResult::Finite(0.0)));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(b"1.2.3"), Ok((1.2, 3)));
        assert_eq!(parse_number(b"-1.5E3 "), Ok((-1500.0, 6)));
        assert_eq!(parse_number(b"1e400"), Err(ParseError::NumberTooBig));
        assert_eq!(parse_number(b"1e"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_boundary_values() {
        assert_eq!(
            parse_number(b"1.7976931348623157e308"),
            Ok((f64::MAX, 22))
        );
        assert_eq!(
            parse_number(b"-1.7976931348623157e308"),
            Ok((-f64::MAX, 23))
        );
        assert_eq!(
            parse_number(b"4.9406564584124654e-324"),
            Ok((f64::from_bits(1), 23))
        );
        assert_eq!(
            parse_number(b"2.2250738585072014e-308"),
            Ok((f64::MIN_POSITIVE, 23))
        );
    }
}
