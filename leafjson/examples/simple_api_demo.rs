// Example demonstrating the simple parse API

use leafjson::{parse, ParseError, SliceParser, Value};

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::True => "true".to_string(),
        Value::False => "false".to_string(),
        Value::Number(n) => format!("number {n}"),
        Value::String(bytes) => match core::str::from_utf8(bytes) {
            Ok(s) => format!("string {s:?} ({} bytes)", bytes.len()),
            Err(_) => format!("non-UTF-8 string ({} bytes)", bytes.len()),
        },
    }
}

fn main() -> Result<(), ParseError> {
    let documents = [
        "null",
        " true ",
        "-12.5e3",
        r#""Hello\nWorld""#,
        "1e400",
        "0123",
        r#""unterminated"#,
        r#""bad \x escape""#,
        "1 2",
    ];

    println!("Using leafjson::parse():");
    for json in documents {
        match parse(json) {
            Ok(value) => println!("  {json:<20} -> {}", describe(&value)),
            Err(e) => println!("  {json:<20} -> error {} ({e})", e.code()),
        }
    }

    println!();
    println!("Using SliceParser::new_from_slice():");
    let value = SliceParser::new_from_slice(br#""tab\tseparated""#).parse()?;
    println!("  {}", describe(&value));

    println!();
    println!("✅ Done");
    Ok(())
}
