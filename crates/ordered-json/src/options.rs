//! Decoder configuration.

/// Default maximum nesting depth of objects and arrays.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options controlling [`decode_with_options`](crate::decode_with_options).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum nesting depth. The top-level object counts as depth 1 and each
    /// nested object or array adds one level.
    pub max_depth: usize,
}

impl DecodeOptions {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// No depth limit. Deeply nested input can then exhaust the stack.
    pub const fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}
