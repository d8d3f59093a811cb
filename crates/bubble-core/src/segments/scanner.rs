//! Forward scanning shared by every pass
//!
//! Each pass implements [`Scanner`]: given the text and a cursor, find the
//! next construct at or after the cursor. [`Pieces`] drives a scanner across
//! the whole input, yielding the gaps between matches as well as the matches,
//! and owns the only cursor. Matches are never empty, so the cursor strictly
//! advances and every byte of the input lands in exactly one piece.

use std::ops::Range;

/// A construct found by a scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Found<T> {
    /// Whole matched region, delimiters included
    pub range: Range<usize>,
    pub token: T,
}

pub(crate) trait Scanner {
    type Token;

    /// Find the first construct starting at or after `from`.
    ///
    /// Returned ranges must start at or after `from`, be non-empty, and lie
    /// on char boundaries.
    fn scan(&self, text: &str, from: usize) -> Option<Found<Self::Token>>;
}

/// One piece of scanned input: either unmatched text or a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Piece<T> {
    Gap(Range<usize>),
    Match(Found<T>),
}

/// Lazy left-to-right split of `text` into gaps and matches
pub(crate) struct Pieces<'a, S: Scanner> {
    text: &'a str,
    scanner: S,
    cursor: usize,
    /// Match found while emitting the gap in front of it
    pending: Option<Found<S::Token>>,
}

impl<'a, S: Scanner> Pieces<'a, S> {
    pub fn new(text: &'a str, scanner: S) -> Self {
        Self {
            text,
            scanner,
            cursor: 0,
            pending: None,
        }
    }
}

impl<S: Scanner> Iterator for Pieces<'_, S> {
    type Item = Piece<S::Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(found) = self.pending.take() {
            self.cursor = found.range.end;
            return Some(Piece::Match(found));
        }

        if self.cursor >= self.text.len() {
            return None;
        }

        match self.scanner.scan(self.text, self.cursor) {
            Some(found) => {
                debug_assert!(found.range.start >= self.cursor);
                debug_assert!(found.range.end > found.range.start);

                if found.range.start > self.cursor {
                    let gap = self.cursor..found.range.start;
                    self.cursor = found.range.start;
                    self.pending = Some(found);
                    Some(Piece::Gap(gap))
                } else {
                    self.cursor = found.range.end;
                    Some(Piece::Match(found))
                }
            }
            None => {
                let rest = self.cursor..self.text.len();
                self.cursor = self.text.len();
                Some(Piece::Gap(rest))
            }
        }
    }
}

/// Position of `needle` in `text` at or after `from`
pub(crate) fn find_from(text: &str, from: usize, needle: &str) -> Option<usize> {
    text.get(from..)?.find(needle).map(|pos| from + pos)
}

/// Position of byte `needle` in `text` at or after `from`
pub(crate) fn find_byte_from(text: &str, from: usize, needle: u8) -> Option<usize> {
    text.as_bytes()
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|pos| from + pos)
}
