//! Inline style tokenizing: `**bold**`, `*italic*`, `~~strike~~`, `` `code` ``
//!
//! At every delimiter position the styles are tried in [`SpanStyle::PRIORITY`]
//! order. A span body is one or more characters that excludes the style's own
//! delimiter character, which is what separates `**bold**` from `*italic*`
//! without backtracking. Span bodies are never scanned again, so styles do
//! not nest. Delimiters that do not pair up stay in the text.

use std::ops::Range;

use super::elements::{Segment, SpanStyle, Spanned};
use super::scanner::{find_byte_from, Found, Piece, Pieces, Scanner};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StyleMatch {
    pub style: SpanStyle,
    pub body: Range<usize>,
}

pub(crate) struct StyleScanner;

impl Scanner for StyleScanner {
    type Token = StyleMatch;

    fn scan(&self, text: &str, from: usize) -> Option<Found<StyleMatch>> {
        let bytes = text.as_bytes();
        let mut pos = from;

        while pos < bytes.len() {
            let at = pos
                + bytes[pos..]
                    .iter()
                    .position(|b| matches!(b, b'*' | b'~' | b'`'))?;

            let found = SpanStyle::PRIORITY
                .iter()
                .find_map(|&style| match_style(text, at, style));
            if found.is_some() {
                return found;
            }

            pos = at + 1;
        }

        None
    }
}

/// Try to match a complete `style` span starting exactly at `at`
fn match_style(text: &str, at: usize, style: SpanStyle) -> Option<Found<StyleMatch>> {
    let bytes = text.as_bytes();
    let delimiter = style.delimiter().as_bytes();

    if !bytes[at..].starts_with(delimiter) {
        return None;
    }

    let body_start = at + delimiter.len();
    let body_end = find_byte_from(text, body_start, style.excluded())?;
    if body_end == body_start || !bytes[body_end..].starts_with(delimiter) {
        return None;
    }

    Some(Found {
        range: at..body_end + delimiter.len(),
        token: StyleMatch {
            style,
            body: body_start..body_end,
        },
    })
}

/// Split an image-free text run into plain runs and styled spans
pub fn tokenize_inline(text: &str) -> Vec<Spanned<Segment>> {
    Pieces::new(text, StyleScanner)
        .map(|piece| match piece {
            Piece::Gap(range) => Spanned::new(Segment::text(&text[range.clone()]), range),
            Piece::Match(Found { range, token }) => {
                Spanned::new(Segment::styled(token.style, &text[token.body]), range)
            }
        })
        .collect()
}
