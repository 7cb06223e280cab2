use ordered_json::{
    decode, decode_with_options, encode, encode_to_string, DecodeError, DecodeOptions,
    EncodeError, Number, OrderedMap, Value,
};

#[test]
fn set_get_delete_encode_decode() {
    let mut m = OrderedMap::new();
    m.set("a", 1);
    m.set("b", 2);
    m.set("c", 3);
    assert_eq!(m.keys().collect::<Vec<_>>(), ["a", "b", "c"]);

    let value = m.get("a");
    assert_eq!(value, Some(&Value::from(1)));

    m.delete("c");
    let bytes = encode(&m).expect("encode");
    assert_eq!(bytes, br#"{"a":1,"b":2}"#);

    let m2 = decode(&bytes).expect("decode");
    assert_eq!(m2.keys().collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(m2, m);
}

#[test]
fn numbers_reencode_without_precision_loss() {
    let input = r#"{"pi":3.14,"one":1,"neg":-0.0,"big":12345678901234567890.123456789012345678901,"exp":6.02e23,"tiny":5E-324,"huge":1e400}"#;
    let m = decode(input.as_bytes()).unwrap();
    assert_eq!(encode_to_string(&m).unwrap(), input);

    let one = m.get("one").and_then(Value::as_number).unwrap();
    assert!(one.is_integer());
    assert_eq!(one.as_i64(), Some(1));
    assert_eq!(m.get("pi").and_then(Value::as_f64), Some(3.14));
}

#[test]
fn source_formatting_is_normalized_but_order_kept() {
    let input = "{\n  \"z\" : [ 1 , 2 ] ,\n  \"a\" : { \"y\" : null , \"b\" : \"\\u0041\" }\n}\n";
    let m = decode(input.as_bytes()).unwrap();
    assert_eq!(
        encode_to_string(&m).unwrap(),
        r#"{"z":[1,2],"a":{"y":null,"b":"A"}}"#
    );
}

#[test]
fn mutating_a_decoded_map() {
    let mut m: OrderedMap = r#"{"first":1,"second":2,"third":3}"#.parse().unwrap();
    m.set("second", "two");
    m.delete("first");
    m.set("fourth", vec![4]);
    m.set("first", true);
    assert_eq!(
        m.to_json_string().unwrap(),
        r#"{"second":"two","third":3,"fourth":[4],"first":true}"#
    );
}

#[test]
fn nan_fails_to_encode() {
    let mut m = OrderedMap::new();
    m.set("m", f64::NAN);
    let err = encode(&m).unwrap_err();
    assert!(matches!(err, EncodeError::NonFiniteNumber { ref pointer, .. } if pointer == "/m"));
    assert!(m.to_json_vec().is_err());
}

#[test]
fn infinity_deep_inside_fails_to_encode() {
    let mut m = OrderedMap::new();
    m.set("ok", 1);
    m.set("list", vec![Value::from(OrderedMap::from_iter([("x", f64::INFINITY)]))]);
    assert_eq!(
        encode_to_string(&m),
        Err(EncodeError::NonFiniteNumber {
            pointer: "/list/0/x".to_string(),
            value: f64::INFINITY,
        })
    );
}

#[test]
fn numbers_from_text_are_validated() {
    let n: Number = "2.50".parse().unwrap();
    let mut m = OrderedMap::new();
    m.set("price", n);
    assert_eq!(m.to_json_string().unwrap(), r#"{"price":2.50}"#);
    assert!("2.".parse::<Number>().is_err());
}

#[test]
fn depth_limit_is_configurable() {
    let input = br#"{"a":{"b":{"c":{}}}}"#;
    assert!(decode(input).is_ok());
    assert!(matches!(
        decode_with_options(input, DecodeOptions::default().with_max_depth(3)),
        Err(DecodeError::DepthLimitExceeded { limit: 3, .. })
    ));
    assert!(decode_with_options(input, DecodeOptions::default().with_max_depth(4)).is_ok());

    let deep = format!("{{\"a\":{}{}}}", "[".repeat(500), "]".repeat(500));
    assert!(decode(deep.as_bytes()).is_err());
    assert!(decode_with_options(deep.as_bytes(), DecodeOptions::unlimited()).is_ok());
}

#[test]
fn independent_decodes_run_in_parallel() {
    let inputs: Vec<String> = (0..8)
        .map(|i| format!(r#"{{"id":{i},"k{i}":[{i}]}}"#))
        .collect();
    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| std::thread::spawn(move || decode(input.as_bytes())))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let m = handle.join().unwrap().unwrap();
        assert_eq!(m.keys().collect::<Vec<_>>(), ["id".to_string(), format!("k{i}")]);
    }
}
