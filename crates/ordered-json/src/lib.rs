//! Insertion-ordered JSON objects.
//!
//! [`OrderedMap`] is a string-keyed map that remembers the order in which keys
//! were first inserted, and this crate's codec reads and writes it as JSON text
//! in that order. Decoding keeps every number as its exact source literal, so
//! values such as `3.14`, `1` or `12345678901234567890.5` re-encode unchanged.
//!
//! # Example
//!
//! ```
//! use ordered_json::{decode, encode_to_string, OrderedMap, Value};
//!
//! let mut m = OrderedMap::new();
//! m.set("a", 1);
//! m.set("b", 2);
//! m.set("c", 3);
//! assert_eq!(m.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
//! assert_eq!(m.get("a"), Some(&Value::from(1)));
//!
//! m.delete("c");
//! let text = encode_to_string(&m).unwrap();
//! assert_eq!(text, r#"{"a":1,"b":2}"#);
//!
//! let back = decode(text.as_bytes()).unwrap();
//! assert_eq!(back.keys().collect::<Vec<_>>(), ["a", "b"]);
//! ```

pub mod error;
pub mod json;
pub mod map;
pub mod number;
pub mod options;
mod serde_impls;
pub mod value;

pub use error::{DecodeError, EncodeError, ParseNumberError};
pub use json::{JsonDecoder, JsonEncoder};
pub use map::OrderedMap;
pub use number::Number;
pub use options::DecodeOptions;
pub use value::Value;

/// Decode JSON text whose top-level value is an object.
///
/// Uses [`DecodeOptions::default`].
pub fn decode(input: &[u8]) -> Result<OrderedMap, DecodeError> {
    decode_with_options(input, DecodeOptions::default())
}

/// Decode JSON text whose top-level value is an object.
pub fn decode_with_options(
    input: &[u8],
    options: DecodeOptions,
) -> Result<OrderedMap, DecodeError> {
    match JsonDecoder::with_options(input, options).decode() {
        Ok(map) => {
            tracing::trace!(bytes = input.len(), keys = map.len(), "decoded ordered map");
            Ok(map)
        }
        Err(err) => {
            tracing::debug!(
                bytes = input.len(),
                position = err.position(),
                error = %err,
                "decode failed"
            );
            Err(err)
        }
    }
}

/// Encode `map` as compact JSON, keys in insertion order.
///
/// Nothing is returned on failure; the output is all-or-nothing.
pub fn encode(map: &OrderedMap) -> Result<Vec<u8>, EncodeError> {
    match JsonEncoder::new().encode(map) {
        Ok(bytes) => {
            tracing::trace!(bytes = bytes.len(), keys = map.len(), "encoded ordered map");
            Ok(bytes)
        }
        Err(err) => {
            tracing::debug!(error = %err, "encode failed");
            Err(err)
        }
    }
}

/// Like [`encode`], returning a `String`.
pub fn encode_to_string(map: &OrderedMap) -> Result<String, EncodeError> {
    let bytes = encode(map)?;
    // The encoder only writes valid UTF-8: ASCII punctuation plus the UTF-8
    // of `str` keys and values.
    Ok(String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}
