//! Position-tracking cursor over gradient source text.

use regex::{Captures, Regex};

/// Saved scanner position, restored with [`Scanner::rewind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Checkpoint(usize);

/// A cursor over an immutable input string.
///
/// The scanner never copies the input: it keeps a byte offset and matches
/// anchored patterns against the borrowed suffix starting at that offset.
/// Each parse owns its own scanner, so nothing is shared between calls.
#[derive(Debug, Clone)]
pub(crate) struct Scanner<'i> {
    input: &'i str,
    pos: usize,
}

impl<'i> Scanner<'i> {
    /// Create a scanner positioned at the start of `input`.
    pub fn new(input: &'i str) -> Self {
        Self { input, pos: 0 }
    }

    /// Skip whitespace, then try to match `pattern` at the current position.
    ///
    /// On a match the cursor moves past the matched text. On no match the
    /// cursor stays after the skipped whitespace.
    pub fn scan(&mut self, pattern: &Regex) -> Option<Captures<'i>> {
        self.skip_whitespace();

        let captures = pattern.captures(self.remaining())?;
        let matched = captures.get(0).map_or(0, |m| m.end());
        self.pos += matched;
        Some(captures)
    }

    /// Like [`scan`](Self::scan), returning only the given capture group.
    pub fn scan_group(&mut self, pattern: &Regex, group: usize) -> Option<&'i str> {
        let captures = self.scan(pattern)?;
        Some(captures.get(group).map_or("", |m| m.as_str()))
    }

    /// Move the cursor forward by `len` bytes.
    pub fn advance(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.input.len());
    }

    /// Skip a leading run of whitespace.
    pub fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Whether only whitespace remains.
    pub fn is_exhausted(&mut self) -> bool {
        self.skip_whitespace();
        self.pos >= self.input.len()
    }

    /// The unconsumed input.
    pub fn remaining(&self) -> &'i str {
        let input = self.input;
        &input[self.pos..]
    }

    /// Current byte offset into the input.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Save the current position.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    /// Restore a position saved by [`checkpoint`](Self::checkpoint).
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokens;

    #[test]
    fn scan_skips_leading_whitespace() {
        let mut scanner = Scanner::new(" \n\t, red");
        assert!(scanner.scan(&tokens::COMMA).is_some());
        assert_eq!(scanner.remaining(), " red");
    }

    #[test]
    fn failed_scan_keeps_skipped_whitespace() {
        let mut scanner = Scanner::new("   red");
        assert!(scanner.scan(&tokens::COMMA).is_none());
        assert_eq!(scanner.offset(), 3);
        assert_eq!(scanner.remaining(), "red");
    }

    #[test]
    fn scan_group_returns_capture() {
        let mut scanner = Scanner::new("87.23px -58.3px");
        assert_eq!(scanner.scan_group(&tokens::PIXEL_VALUE, 1), Some("87.23"));
        assert_eq!(scanner.scan_group(&tokens::PIXEL_VALUE, 1), Some("-58.3"));
        assert!(scanner.is_exhausted());
    }

    #[test]
    fn checkpoint_and_rewind() {
        let mut scanner = Scanner::new("circle, red");
        scanner.scan(&tokens::CIRCLE);
        let checkpoint = scanner.checkpoint();

        assert!(scanner.scan(&tokens::COMMA).is_some());
        assert_eq!(scanner.remaining(), " red");

        scanner.rewind(checkpoint);
        assert_eq!(scanner.remaining(), ", red");
    }

    #[test]
    fn advance_is_clamped() {
        let mut scanner = Scanner::new("abc");
        scanner.advance(10);
        assert_eq!(scanner.offset(), 3);
        assert_eq!(scanner.remaining(), "");
    }
}
