//! `JsonDecoder`: recursive-descent decoder producing an [`OrderedMap`].
//!
//! The decoder walks the input with a byte cursor. Objects become
//! [`OrderedMap`]s in source key order, arrays become `Vec<Value>`, and number
//! literals are kept as their exact text. Only an object is accepted at the
//! top level, and nothing but whitespace may follow it.

use crate::error::DecodeError;
use crate::map::OrderedMap;
use crate::number::Number;
use crate::options::DecodeOptions;
use crate::value::Value;

use super::util::{decode_json_string, find_ending_quote, scan_number};

pub struct JsonDecoder<'a> {
    data: &'a [u8],
    x: usize,
    options: DecodeOptions,
}

impl<'a> JsonDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, DecodeOptions::default())
    }

    pub fn with_options(data: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            data,
            x: 0,
            options,
        }
    }

    /// Decode the whole input as a single top-level object.
    pub fn decode(mut self) -> Result<OrderedMap, DecodeError> {
        self.skip_whitespace();
        match self.peek() {
            Some(b'{') => {}
            Some(_) => return Err(DecodeError::ExpectedObjectOpen(self.x)),
            None => return Err(DecodeError::UnexpectedEnd(self.x)),
        }
        let map = self.read_obj(1)?;
        self.skip_whitespace();
        if self.x < self.data.len() {
            return Err(DecodeError::TrailingData(self.x));
        }
        Ok(map)
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.x
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.x).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.x += 1;
        }
    }

    fn enter(&self, depth: usize) -> Result<(), DecodeError> {
        if depth > self.options.max_depth {
            return Err(DecodeError::DepthLimitExceeded {
                limit: self.options.max_depth,
                pos: self.x,
            });
        }
        Ok(())
    }

    /// Dispatch on the lead byte of a value.
    fn read_value(&mut self, depth: usize) -> Result<Value, DecodeError> {
        self.skip_whitespace();
        let x = self.x;
        match self.peek() {
            None => Err(DecodeError::UnexpectedEnd(x)),
            Some(b'{') => Ok(Value::Object(self.read_obj(depth + 1)?)),
            Some(b'[') => Ok(Value::Array(self.read_arr(depth + 1)?)),
            Some(b'"') => Ok(Value::String(self.read_str()?)),
            Some(b't') => self.read_word(b"true", Value::Bool(true)),
            Some(b'f') => self.read_word(b"false", Value::Bool(false)),
            Some(b'n') => self.read_word(b"null", Value::Null),
            Some(b'-' | b'0'..=b'9') => Ok(Value::Number(self.read_num()?)),
            Some(delim @ (b'}' | b']')) => Err(DecodeError::UnexpectedDelimiter {
                delim: char::from(delim),
                pos: x,
            }),
            Some(_) => Err(DecodeError::InvalidToken(x)),
        }
    }

    fn read_obj(&mut self, depth: usize) -> Result<OrderedMap, DecodeError> {
        self.enter(depth)?;
        self.x += 1; // '{'
        let mut map = OrderedMap::new();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.x += 1;
            return Ok(map);
        }
        loop {
            self.skip_whitespace();
            let key = match self.peek() {
                Some(b'"') => self.read_str()?,
                Some(b']') => return Err(self.mismatched_close(b'}', b']')),
                Some(_) => return Err(DecodeError::ExpectedKey(self.x)),
                None => return Err(DecodeError::UnexpectedEnd(self.x)),
            };
            self.skip_whitespace();
            match self.peek() {
                Some(b':') => self.x += 1,
                Some(_) => return Err(DecodeError::ExpectedColon(self.x)),
                None => return Err(DecodeError::UnexpectedEnd(self.x)),
            }
            let value = self.read_value(depth)?;
            // A repeated key keeps its first position; the last value wins.
            map.set(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.x += 1,
                Some(b'}') => {
                    self.x += 1;
                    return Ok(map);
                }
                Some(b']') => return Err(self.mismatched_close(b'}', b']')),
                Some(_) => {
                    return Err(DecodeError::ExpectedCommaOrClose {
                        close: '}',
                        pos: self.x,
                    })
                }
                None => return Err(DecodeError::UnexpectedEnd(self.x)),
            }
        }
    }

    fn read_arr(&mut self, depth: usize) -> Result<Vec<Value>, DecodeError> {
        self.enter(depth)?;
        self.x += 1; // '['
        let mut arr = Vec::new();
        self.skip_whitespace();
        match self.peek() {
            Some(b']') => {
                self.x += 1;
                return Ok(arr);
            }
            Some(b'}') => return Err(self.mismatched_close(b']', b'}')),
            _ => {}
        }
        loop {
            arr.push(self.read_value(depth)?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.x += 1,
                Some(b']') => {
                    self.x += 1;
                    return Ok(arr);
                }
                Some(b'}') => return Err(self.mismatched_close(b']', b'}')),
                Some(_) => {
                    return Err(DecodeError::ExpectedCommaOrClose {
                        close: ']',
                        pos: self.x,
                    })
                }
                None => return Err(DecodeError::UnexpectedEnd(self.x)),
            }
        }
    }

    fn read_str(&mut self) -> Result<String, DecodeError> {
        self.x += 1; // opening quote
        let x0 = self.x;
        let x1 = find_ending_quote(self.data, x0)?;
        let s = decode_json_string(&self.data[x0..x1], x0)?;
        self.x = x1 + 1;
        Ok(s)
    }

    fn read_num(&mut self) -> Result<Number, DecodeError> {
        let start = self.x;
        let end = scan_number(self.data, start).map_err(DecodeError::InvalidNumber)?;
        let literal = std::str::from_utf8(&self.data[start..end])
            .map_err(|_| DecodeError::InvalidNumber(start))?;
        self.x = end;
        Ok(Number::from_literal_unchecked(literal))
    }

    fn read_word(&mut self, word: &[u8], value: Value) -> Result<Value, DecodeError> {
        if !self.data[self.x..].starts_with(word) {
            return Err(DecodeError::InvalidToken(self.x));
        }
        self.x += word.len();
        Ok(value)
    }

    fn mismatched_close(&self, expected: u8, found: u8) -> DecodeError {
        DecodeError::MismatchedClose {
            expected: char::from(expected),
            found: char::from(found),
            pos: self.x,
        }
    }
}
