//! Line values and input splitting.

use std::fmt;

/// A line borrowed from a caller-owned sequence, with its 1-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line<'a> {
    /// 1-based position in the source sequence
    pub number: usize,
    /// Raw line text, without the line terminator
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// Create a line at a 1-based position.
    #[inline]
    pub const fn new(number: usize, text: &'a str) -> Self {
        Self { number, text }
    }

    /// Zero-based index into the source sequence.
    ///
    /// A line built with number 0 maps to index 0.
    #[inline]
    pub const fn index(&self) -> usize {
        self.number.saturating_sub(1)
    }
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Split text into lines on `\r\n`, `\n` or `\r`.
///
/// Empty entries at the end of the text are discarded; interior blank lines
/// are kept. `"a\n\nb\n\n"` yields `["a", "", "b"]`.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&text[start..]);

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Attach 1-based positions to a sequence of raw lines.
pub fn number_lines<'a, S: AsRef<str>>(raw: &'a [S]) -> Vec<Line<'a>> {
    raw.iter()
        .enumerate()
        .map(|(i, s)| Line::new(i + 1, s.as_ref()))
        .collect()
}
