//! Character and word counting for input text.

/// Character and word counts for a piece of input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCount {
    /// Unicode scalar values in the literal input, spaces included.
    pub chars: usize,
    /// Whitespace-delimited non-empty segments.
    pub words: usize,
}

/// Count characters and words the way the input counter displays them.
pub fn count_text(input: &str) -> TextCount {
    TextCount {
        chars: input.chars().count(),
        words: input.split_whitespace().count(),
    }
}
