//! `JsonEncoder`: writes an [`OrderedMap`] as compact JSON, keys in order.
//!
//! Output is buffered in full. If any value cannot be written (a NaN or
//! infinite number) the buffer is discarded and only the error is returned.

use crate::error::EncodeError;
use crate::map::OrderedMap;
use crate::number::Number;
use crate::value::Value;

#[derive(Debug, Default)]
pub struct JsonEncoder {
    out: Vec<u8>,
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self { out: Vec::new() }
    }

    pub fn encode(&mut self, map: &OrderedMap) -> Result<Vec<u8>, EncodeError> {
        self.out.clear();
        let res = self.write_obj(map);
        self.finish(res)
    }

    pub fn encode_value(&mut self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        self.out.clear();
        let res = self.write_any(value);
        self.finish(res)
    }

    fn finish(&mut self, res: Result<(), EncodeError>) -> Result<Vec<u8>, EncodeError> {
        match res {
            Ok(()) => Ok(std::mem::take(&mut self.out)),
            Err(err) => {
                self.out.clear();
                Err(err)
            }
        }
    }

    pub fn write_any(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Null => self.write_null(),
            Value::Bool(b) => self.write_boolean(*b),
            Value::Number(n) => return self.write_number(n),
            Value::String(s) => self.write_str(s),
            Value::Array(arr) => return self.write_arr(arr),
            Value::Object(map) => return self.write_obj(map),
        }
        Ok(())
    }

    pub fn write_null(&mut self) {
        self.out.extend_from_slice(b"null");
    }

    pub fn write_boolean(&mut self, b: bool) {
        let lit: &[u8] = if b { b"true" } else { b"false" };
        self.out.extend_from_slice(lit);
    }

    pub fn write_number(&mut self, n: &Number) -> Result<(), EncodeError> {
        match n.as_literal() {
            Some(lit) => {
                self.out.extend_from_slice(lit.as_bytes());
                Ok(())
            }
            None => Err(EncodeError::NonFiniteNumber {
                pointer: String::new(),
                value: n.non_finite_value().unwrap_or(f64::NAN),
            }),
        }
    }

    /// Write a JSON string literal, escaping as needed.
    pub fn write_str(&mut self, s: &str) {
        let bytes = s.as_bytes();
        let plain = bytes
            .iter()
            .all(|&b| (32..=126).contains(&b) && b != b'"' && b != b'\\');
        if plain {
            self.out.reserve(bytes.len() + 2);
            self.out.push(b'"');
            self.out.extend_from_slice(bytes);
            self.out.push(b'"');
            return;
        }
        self.out.reserve(bytes.len() + 8);
        self.out.push(b'"');
        for ch in s.chars() {
            match ch {
                '"' => self.out.extend_from_slice(b"\\\""),
                '\\' => self.out.extend_from_slice(b"\\\\"),
                '\n' => self.out.extend_from_slice(b"\\n"),
                '\r' => self.out.extend_from_slice(b"\\r"),
                '\t' => self.out.extend_from_slice(b"\\t"),
                '\u{08}' => self.out.extend_from_slice(b"\\b"),
                '\u{0C}' => self.out.extend_from_slice(b"\\f"),
                c if (c as u32) < 0x20 => {
                    self.out
                        .extend_from_slice(format!("\\u{:04x}", c as u32).as_bytes());
                }
                c => {
                    let mut buf = [0u8; 4];
                    self.out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                }
            }
        }
        self.out.push(b'"');
    }

    pub fn write_arr(&mut self, arr: &[Value]) -> Result<(), EncodeError> {
        self.out.push(b'[');
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                self.out.push(b',');
            }
            self.write_any(item)
                .map_err(|e| e.within(&i.to_string()))?;
        }
        self.out.push(b']');
        Ok(())
    }

    pub fn write_obj(&mut self, map: &OrderedMap) -> Result<(), EncodeError> {
        self.out.push(b'{');
        for (i, (key, val)) in map.iter().enumerate() {
            if i > 0 {
                self.out.push(b',');
            }
            self.write_str(key);
            self.out.push(b':');
            self.write_any(val).map_err(|e| e.within(key))?;
        }
        self.out.push(b'}');
        Ok(())
    }
}
