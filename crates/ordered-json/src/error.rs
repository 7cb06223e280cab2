//! Error types for decoding and encoding ordered JSON.

use thiserror::Error;

/// Errors that can occur while decoding JSON text into an [`OrderedMap`].
///
/// Every variant carries the byte offset at which the problem was detected.
///
/// [`OrderedMap`]: crate::OrderedMap
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected end of input at position {0}")]
    UnexpectedEnd(usize),
    #[error("expected '{{' at position {0}")]
    ExpectedObjectOpen(usize),
    #[error("expected string key at position {0}")]
    ExpectedKey(usize),
    #[error("expected ':' at position {0}")]
    ExpectedColon(usize),
    #[error("expected ',' or '{close}' at position {pos}")]
    ExpectedCommaOrClose { close: char, pos: usize },
    #[error("expected '{expected}' but found '{found}' at position {pos}")]
    MismatchedClose {
        expected: char,
        found: char,
        pos: usize,
    },
    /// A closing delimiter where a value was expected.
    #[error("unexpected delimiter '{delim}' at position {pos}")]
    UnexpectedDelimiter { delim: char, pos: usize },
    #[error("invalid token at position {0}")]
    InvalidToken(usize),
    #[error("invalid number literal at position {0}")]
    InvalidNumber(usize),
    #[error("invalid string at position {0}")]
    InvalidString(usize),
    #[error("invalid UTF-8 in string at position {0}")]
    InvalidUtf8(usize),
    #[error("trailing data at position {0}")]
    TrailingData(usize),
    #[error("nesting depth exceeds limit of {limit} at position {pos}")]
    DepthLimitExceeded { limit: usize, pos: usize },
}

impl DecodeError {
    /// Byte offset in the input where the error was detected.
    pub fn position(&self) -> usize {
        match *self {
            DecodeError::UnexpectedEnd(pos)
            | DecodeError::ExpectedObjectOpen(pos)
            | DecodeError::ExpectedKey(pos)
            | DecodeError::ExpectedColon(pos)
            | DecodeError::InvalidToken(pos)
            | DecodeError::InvalidNumber(pos)
            | DecodeError::InvalidString(pos)
            | DecodeError::InvalidUtf8(pos)
            | DecodeError::TrailingData(pos)
            | DecodeError::ExpectedCommaOrClose { pos, .. }
            | DecodeError::MismatchedClose { pos, .. }
            | DecodeError::UnexpectedDelimiter { pos, .. }
            | DecodeError::DepthLimitExceeded { pos, .. } => pos,
        }
    }
}

/// Errors that can occur while encoding a value to JSON text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodeError {
    /// NaN and the infinities have no JSON literal form.
    ///
    /// `pointer` is the RFC 6901 JSON Pointer of the offending value.
    #[error("non-finite number {value} at \"{pointer}\" has no JSON representation")]
    NonFiniteNumber { pointer: String, value: f64 },
}

impl EncodeError {
    /// Prefix the error location with one more path step, as the error
    /// travels out of a nested container.
    pub(crate) fn within(self, step: &str) -> Self {
        match self {
            EncodeError::NonFiniteNumber { pointer, value } => {
                let mut prefixed = String::with_capacity(pointer.len() + step.len() + 1);
                prefixed.push('/');
                prefixed.push_str(&escape_component(step));
                prefixed.push_str(&pointer);
                EncodeError::NonFiniteNumber {
                    pointer: prefixed,
                    value,
                }
            }
        }
    }
}

/// Error returned when a string is not a valid JSON number literal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid JSON number literal: {0:?}")]
pub struct ParseNumberError(pub(crate) String);

fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // `~` first, otherwise the `~1` produced for `/` would be escaped again.
    component.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_reported_for_every_shape() {
        assert_eq!(DecodeError::TrailingData(7).position(), 7);
        assert_eq!(
            DecodeError::MismatchedClose {
                expected: ']',
                found: '}',
                pos: 3
            }
            .position(),
            3
        );
        assert_eq!(
            DecodeError::DepthLimitExceeded { limit: 2, pos: 9 }.position(),
            9
        );
    }

    #[test]
    fn within_builds_pointer_from_the_leaf_out() {
        let err = EncodeError::NonFiniteNumber {
            pointer: String::new(),
            value: f64::INFINITY,
        };
        let err = err.within("0").within("a/b").within("x~y");
        match err {
            EncodeError::NonFiniteNumber { pointer, value } => {
                assert_eq!(pointer, "/x~0y/a~1b/0");
                assert!(value.is_infinite());
            }
        }
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            DecodeError::ExpectedObjectOpen(0).to_string(),
            "expected '{' at position 0"
        );
        assert_eq!(
            DecodeError::ExpectedCommaOrClose { close: '}', pos: 4 }.to_string(),
            "expected ',' or '}' at position 4"
        );
    }
}
