use ordered_json::{decode, DecodeError};

#[test]
fn malformed_inputs_are_rejected() {
    let cases: &[(&str, DecodeError)] = &[
        ("", DecodeError::UnexpectedEnd(0)),
        ("[]", DecodeError::ExpectedObjectOpen(0)),
        ("[", DecodeError::ExpectedObjectOpen(0)),
        (
            "{]",
            DecodeError::MismatchedClose {
                expected: '}',
                found: ']',
                pos: 1,
            },
        ),
        ("{3", DecodeError::ExpectedKey(1)),
        ("{}3", DecodeError::TrailingData(2)),
        ("{3:", DecodeError::ExpectedKey(1)),
        (
            r#"{"key": }"#,
            DecodeError::UnexpectedDelimiter { delim: '}', pos: 8 },
        ),
        (
            r#"{"key": }""#,
            DecodeError::UnexpectedDelimiter { delim: '}', pos: 8 },
        ),
        (r#"{"key": 3, "b": [{"#, DecodeError::UnexpectedEnd(18)),
        (
            r#"{"key": 3, "b": [}"#,
            DecodeError::MismatchedClose {
                expected: ']',
                found: '}',
                pos: 17,
            },
        ),
    ];

    for (input, expected) in cases {
        let got = decode(input.as_bytes());
        assert_eq!(got.as_ref().err(), Some(expected), "input {input:?}");
        assert_eq!(expected.position(), got.unwrap_err().position());
    }
}

#[test]
fn scalars_at_top_level_are_rejected() {
    for input in ["1", "\"s\"", "true", "null", "  -3.5 "] {
        assert!(
            matches!(
                decode(input.as_bytes()),
                Err(DecodeError::ExpectedObjectOpen(_))
            ),
            "input {input:?}"
        );
    }
}

#[test]
fn whitespace_only_is_premature_end() {
    assert_eq!(decode(b" \n\t"), Err(DecodeError::UnexpectedEnd(3)));
}

#[test]
fn truncated_documents_are_premature_end() {
    let full = r#"{"a":[1,{"b":"c"}],"d":true}"#;
    for cut in 1..full.len() {
        let err = decode(&full.as_bytes()[..cut]).unwrap_err();
        assert!(
            matches!(
                err,
                DecodeError::UnexpectedEnd(_) | DecodeError::InvalidToken(_)
            ),
            "prefix {:?} gave {err:?}",
            &full[..cut]
        );
    }
    assert!(decode(full.as_bytes()).is_ok());
}

#[test]
fn invalid_utf8_in_string_is_rejected() {
    let input = [b'{', b'"', b'a', 0xc3, b'"', b':', b'1', b'}'];
    assert_eq!(decode(&input), Err(DecodeError::InvalidUtf8(3)));
}
