use turbojson::{
    decode, encode, DecodeOptions, EncodeOptions, JsonDecoder, JsonEncoder, JsonValue, Native,
};

fn obj(fields: &[(&str, JsonValue)]) -> JsonValue {
    JsonValue::Object(
        fields
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect(),
    )
}

#[test]
fn value_roundtrip_matrix() {
    let values = vec![
        JsonValue::Null,
        JsonValue::Bool(true),
        JsonValue::Bool(false),
        JsonValue::Int(0),
        JsonValue::Int(-123),
        JsonValue::Int(i64::MAX),
        JsonValue::Int(i64::MIN),
        JsonValue::Str("".into()),
        JsonValue::Str("abc123".into()),
        JsonValue::Str("A string \\ / \u{8} \u{c} \n \r \t".into()),
        JsonValue::Str("Räksmörgås اسامة بن محمد بن عوض بن لادن".into()),
        JsonValue::Str("...................🎉.....................".into()),
        JsonValue::Str("31337 \u{0} 1337".into()),
        JsonValue::Array(vec![
            JsonValue::Int(1),
            JsonValue::Str("str".into()),
            JsonValue::Bool(true),
            JsonValue::Null,
            JsonValue::Array(vec![JsonValue::Array(vec![JsonValue::Array(Vec::new())])]),
        ]),
        obj(&[]),
        obj(&[("foo", JsonValue::Str("bar".into()))]),
        obj(&[
            ("", JsonValue::Null),
            ("null", JsonValue::Bool(false)),
            ("num", JsonValue::Int(123)),
            ("obj", obj(&[("k1", JsonValue::Int(1)), ("k2", JsonValue::Int(2))])),
        ]),
    ];

    for ensure_ascii in [true, false] {
        let mut encoder =
            JsonEncoder::with_options(EncodeOptions::new().ensure_ascii(ensure_ascii));
        let mut decoder = JsonDecoder::new();
        for value in &values {
            let encoded = encoder.encode_value(value).unwrap();
            let decoded = decoder
                .decode(&encoded)
                .unwrap_or_else(|e| panic!("decode failed for {value:?}: {e}"));
            assert_eq!(&decoded, value);

            // Cross-check against the baseline general-purpose library.
            let baseline: serde_json::Value = serde_json::from_slice(&encoded)
                .unwrap_or_else(|e| panic!("serde_json rejected {value:?}: {e}"));
            assert_eq!(baseline, serde_json::Value::try_from(value).unwrap());
        }
    }
}

#[test]
fn float_roundtrip_through_precise_decode() {
    let options = EncodeOptions::new().double_precision(15);
    let decode_options = DecodeOptions::new().precise_float(true);
    for value in [
        std::f64::consts::PI,
        -std::f64::consts::PI,
        31337.31337,
        -4342969734183514.0,
        -12345678901234.568,
        -528656961.4399388,
        1.1,
        -0.5,
        0.0,
    ] {
        let text = encode(&Native::Float(value), &options).unwrap();
        assert_eq!(
            decode(&text, &decode_options).unwrap(),
            JsonValue::Float(value),
            "lost fidelity for {value} via {text}"
        );
    }
}

#[test]
fn fast_float_decode_is_approximate() {
    // The default float path trades exactness for speed; the precise path
    // must reproduce the literal exactly.
    let text = encode(&Native::Float(4.56), &EncodeOptions::default()).unwrap();
    assert_eq!(text, "4.56");
    let fast = decode(&text, &DecodeOptions::default()).unwrap();
    let precise = decode(&text, &DecodeOptions::new().precise_float(true)).unwrap();
    assert_eq!(precise, JsonValue::Float(4.56));
    let fast = fast.as_f64().unwrap();
    assert!((fast - 4.56).abs() < 1e-12);
}

#[test]
fn double_precision_matrix() {
    let input = 30.012345678901234;
    let at = |p: i64| encode(&Native::Float(input), &EncodeOptions::new().double_precision(p));
    assert_eq!(at(15).unwrap(), "30.012345678901234");
    assert_eq!(at(9).unwrap(), "30.012345679");
    assert_eq!(at(3).unwrap(), "30.012");
    // Out-of-range requests snap to the maximum in both directions.
    assert_eq!(at(20).unwrap(), at(15).unwrap());
    assert_eq!(at(-1).unwrap(), at(15).unwrap());
}

#[test]
fn integer_valued_doubles_keep_their_point() {
    assert_eq!(
        encode(&Native::Float(1.0), &EncodeOptions::default()).unwrap(),
        "1.0"
    );
    assert_eq!(decode("1.0", &DecodeOptions::default()).unwrap(), JsonValue::Float(1.0));
    assert_eq!(decode("1", &DecodeOptions::default()).unwrap(), JsonValue::Int(1));
}

#[test]
fn string_escaping_matrix() {
    let input = "A string \\ / \u{8} \u{c} \n \r \t </script> &";
    let not_html = r#""A string \\ \/ \b \f \n \r \t <\/script> &""#;
    let html = r#""A string \\ \/ \b \f \n \r \t \u003c\/script\u003e \u0026""#;

    for ensure_ascii in [true, false] {
        let plain = EncodeOptions::new().ensure_ascii(ensure_ascii);
        assert_eq!(encode(&Native::from(input), &plain).unwrap(), not_html);
        assert_eq!(
            encode(&Native::from(input), &plain.clone().encode_html_chars(false)).unwrap(),
            not_html
        );
        assert_eq!(
            encode(&Native::from(input), &plain.encode_html_chars(true)).unwrap(),
            html
        );
    }

    assert_eq!(
        encode(
            &Native::from("<img src='&amp;'/>"),
            &EncodeOptions::new().encode_html_chars(true)
        )
        .unwrap(),
        "\"\\u003cimg src='\\u0026amp;'\\/\\u003e\""
    );

    assert_eq!(
        encode(&Native::from("  \u{0}\r\n "), &EncodeOptions::default()).unwrap(),
        "\"  \\u0000\\r\\n \""
    );
}

#[test]
fn astral_code_points_become_surrogate_pairs() {
    let cows = "\u{1f42e}\u{1f42d}\u{1f435}\u{1f41a}";
    let escaped = encode(&Native::from(cows), &EncodeOptions::default()).unwrap();
    // Each astral code point is a twelve-character escape sequence.
    assert_eq!(escaped.len(), 4 * 12 + 2);
    assert_eq!(
        decode(&escaped, &DecodeOptions::default()).unwrap(),
        JsonValue::Str(cows.into())
    );

    let raw = encode(&Native::from(cows), &EncodeOptions::new().ensure_ascii(false)).unwrap();
    assert_eq!(raw.len(), cows.len() + 2);
    assert_eq!(
        decode(&raw, &DecodeOptions::default()).unwrap(),
        JsonValue::Str(cows.into())
    );
}

#[test]
fn bmp_symbols_become_single_escapes() {
    let symbols = "\u{273f}\u{2661}\u{273f}";
    let escaped = encode(&Native::from(symbols), &EncodeOptions::default()).unwrap();
    assert_eq!(escaped.len(), 3 * 6 + 2);
    assert_eq!(
        decode(&escaped, &DecodeOptions::default()).unwrap(),
        JsonValue::Str(symbols.into())
    );
}

#[test]
fn raw_utf8_bytes_encode_like_text() {
    let text = "مرحبا العالم Salam dünya Прывітанне свет Здравей, свят";
    for ensure_ascii in [true, false] {
        let options = EncodeOptions::new().ensure_ascii(ensure_ascii);
        let from_str = encode(&Native::from(text), &options).unwrap();
        let from_bytes = encode(&Native::Bytes(text.as_bytes().to_vec()), &options).unwrap();
        assert_eq!(from_str, from_bytes);
    }
}

#[test]
fn multi_megabyte_string_roundtrip() {
    let base = "å".repeat(1024 * 1024);
    let encoded = encode(&Native::from(base.as_str()), &EncodeOptions::default()).unwrap();
    assert_eq!(
        decode(&encoded, &DecodeOptions::default()).unwrap(),
        JsonValue::Str(base.clone())
    );
    let raw = encode(
        &Native::from(base.as_str()),
        &EncodeOptions::new().ensure_ascii(false),
    )
    .unwrap();
    assert_eq!(raw.len(), base.len() + 2);
}

#[test]
fn serde_json_value_interop() {
    let json: serde_json::Value = serde_json::from_str(
        r#"{"k1": 1, "k2": [true, null, "x"], "k3": {"nested": -9223372036854775808}}"#,
    )
    .unwrap();
    let mut encoder = JsonEncoder::new();
    let encoded = encoder.encode_json(&json).unwrap();
    let reparsed: serde_json::Value = serde_json::from_slice(&encoded).unwrap();
    assert_eq!(reparsed, json);
}
