// Error handling tests for the API

use leafjson::{parse, parse_into, parse_slice, ParseError, Value};

use test_log::test;

fn expect_error(input: &str, expected: ParseError) {
    match parse(input) {
        Err(e) => assert_eq!(e, expected, "input {input:?}"),
        Ok(v) => panic!("Expected {expected:?} for {input:?}, got {v:?}"),
    }
}

#[test]
fn test_expect_value() {
    expect_error("", ParseError::ExpectValue);
    expect_error(" ", ParseError::ExpectValue);
    expect_error("\t\r\n ", ParseError::ExpectValue);
}

#[test]
fn test_invalid_literals() {
    expect_error("nul", ParseError::InvalidValue);
    expect_error("tru", ParseError::InvalidValue);
    expect_error("fals", ParseError::InvalidValue);
    expect_error("?", ParseError::InvalidValue);
}

#[test]
fn test_invalid_numbers() {
    for input in [
        "+0", "+1", ".123", "1.", "INF", "inf", "NAN", "nan", "0123", "-", "-.5", "1e", "1e+",
        "--1",
    ] {
        expect_error(input, ParseError::InvalidValue);
    }
}

#[test]
fn test_root_not_singular() {
    expect_error("null x", ParseError::RootNotSingular);
    expect_error("0x0", ParseError::RootNotSingular);
    expect_error("0x123", ParseError::RootNotSingular);
    expect_error("1.2.3", ParseError::RootNotSingular);
    expect_error("\"a\"b", ParseError::RootNotSingular);
}

#[test]
fn test_number_too_big() {
    expect_error("1e309", ParseError::NumberTooBig);
    expect_error("-1e309", ParseError::NumberTooBig);
    expect_error("1e400", ParseError::NumberTooBig);
}

#[test]
fn test_missing_quotation_mark() {
    expect_error("\"", ParseError::MissingQuotationMark);
    expect_error("\"abc", ParseError::MissingQuotationMark);
}

#[test]
fn test_invalid_string_escape() {
    expect_error(r#""\v""#, ParseError::InvalidStringEscape);
    expect_error(r#""\'""#, ParseError::InvalidStringEscape);
    expect_error(r#""\0""#, ParseError::InvalidStringEscape);
    expect_error(r#""\x12""#, ParseError::InvalidStringEscape);
}

#[test]
fn test_invalid_string_char() {
    expect_error("\"\x01\"", ParseError::InvalidStringChar);
    expect_error("\"\x1F\"", ParseError::InvalidStringChar);
}

#[test]
fn test_failed_parse_leaves_null() {
    let mut value = Value::from("held");
    let inputs: [&[u8]; 4] = [b"\"abc", b"\"\\x\"", b"1e400", b"true 1"];
    for input in inputs {
        value.set_string(b"held");
        assert!(parse_into(&mut value, input).is_err());
        assert_eq!(value, Value::Null, "input {input:?}");
    }
}

#[test]
fn test_nul_ends_input_early() {
    // Everything after the NUL is ignored
    assert_eq!(parse_slice(b"  \0 true"), Err(ParseError::ExpectValue));
    assert_eq!(parse_slice(b"\"a\0\""), Err(ParseError::MissingQuotationMark));
}

#[test]
fn test_error_display_and_codes() {
    let error = parse("1e400").unwrap_err();
    assert_eq!(error.code(), 4);
    assert_eq!(error.to_string(), "number is too big");
    assert_eq!(ParseError::from_code(error.code()), Some(error));

    let boxed: Box<dyn std::error::Error> = Box::new(ParseError::InvalidStringChar);
    assert_eq!(boxed.to_string(), "invalid character in string");
}
