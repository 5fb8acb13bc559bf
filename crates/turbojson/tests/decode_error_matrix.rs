use turbojson::{Error, ErrorKind, JsonDecoder, JsonValue, MAX_DEPTH};

fn decode(text: &str) -> Result<JsonValue, Error> {
    JsonDecoder::new().decode_str(text)
}

#[test]
fn malformed_input_matrix() {
    let broken: &[&str] = &[
        "fdsa sda v9sa fdsa",
        "!!!",
        "[",
        "[31337",
        "[[[true",
        "[}",
        "{]",
        "{{1337:\"\"}}",
        "{\"key\":\"}",
        "\"TESTING",
        "\"TESTING\\\"",
        "\"TES\\xTING\"",
        "{31337: 1}",
        "{\"age\", 44}",
        "{\"key\":}",
        "[,]",
        "{,}",
        "[31337,]",
        "[,31337]",
        ":",
        ",",
        "",
        "   ",
    ];
    for input in broken {
        let err = decode(input).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::Syntax,
            "wrong kind for {input:?}: {err:?}"
        );
    }
}

#[test]
fn comma_errors_carry_distinct_variants() {
    assert!(matches!(decode("[,31337]"), Err(Error::LeadingComma(1))));
    assert!(matches!(decode("[31337,]"), Err(Error::TrailingComma(6))));
    assert!(matches!(decode("[, ]"), Err(Error::OnlyComma(1))));
    assert!(matches!(decode("{,}"), Err(Error::OnlyComma(1))));
    assert!(matches!(
        decode("[1, 2, ,3]"),
        Err(Error::ExpectedValue(_))
    ));
}

#[test]
fn unmatched_brackets_report_the_close() {
    assert_eq!(
        decode("]"),
        Err(Error::UnmatchedBracket { close: ']', at: 0 })
    );
    assert_eq!(
        decode("}"),
        Err(Error::UnmatchedBracket { close: '}', at: 0 })
    );
    assert!(matches!(decode("[31337]]"), Err(Error::TrailingContent(_))));
}

// A close bracket where an object pair's value should be is a missing
// value, not a bracket mismatch.
#[test]
fn valueless_object_pair_reports_the_missing_value() {
    assert_eq!(decode("{\"key\":}"), Err(Error::ExpectedValue(7)));
    assert_eq!(
        decode("{\"a\": 1, \"b\":}"),
        Err(Error::ExpectedValue(13))
    );
    assert_eq!(decode("{\"key\":]}"), Err(Error::ExpectedValue(7)));
}

#[test]
fn surrogate_escape_matrix() {
    // Valid pairs decode; unpaired halves do not.
    assert_eq!(
        decode("\"\\uD83D\\uDCA9\"").unwrap(),
        JsonValue::Str("\u{1f4a9}".into())
    );
    assert_eq!(decode("\"\\u00e5\"").unwrap(), JsonValue::Str("å".into()));
    for input in ["\"\\udc00\"", "\"\\ud800\"", "\"\\ud800\\ud800\"", "\"\\ud800x\""] {
        assert!(
            matches!(decode(input), Err(Error::LoneSurrogate(_))),
            "expected lone-surrogate error for {input:?}"
        );
    }
}

// A failing decode leaves no state behind: repeating it yields the
// identical error every time.
#[test]
fn failure_is_idempotent() {
    let inputs = ["{{1337:\"\"}}", "{\"key\":\"}", "[[[true"];
    let mut decoder = JsonDecoder::new();
    for input in inputs {
        let first = decoder.decode_str(input).unwrap_err();
        for _ in 0..1000 {
            assert_eq!(decoder.decode_str(input).unwrap_err(), first);
        }
    }
}

#[test]
fn depth_guard_stops_pathological_nesting() {
    let arrays = "[".repeat(1024 * 1024);
    assert_eq!(decode(&arrays), Err(Error::DepthLimitExceeded));

    let objects = "{\"a\":".repeat(1024 * 1024);
    assert_eq!(decode(&objects), Err(Error::DepthLimitExceeded));

    // Exactly MAX_DEPTH levels is still legal.
    let legal = format!("{}{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
    assert!(decode(&legal).is_ok());
    let too_deep = format!("{}{}", "[".repeat(MAX_DEPTH + 1), "]".repeat(MAX_DEPTH + 1));
    assert_eq!(decode(&too_deep), Err(Error::DepthLimitExceeded));
}

#[test]
fn whitespace_handling() {
    assert_eq!(
        decode(" \t\r\n [ 1 , 2 ] \n ").unwrap(),
        JsonValue::Array(vec![JsonValue::Int(1), JsonValue::Int(2)])
    );
    assert!(matches!(decode("[1, 2] x"), Err(Error::TrailingContent(_))));
}
