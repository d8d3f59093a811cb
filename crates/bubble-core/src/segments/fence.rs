//! Code-fence splitting
//!
//! A fence is three backticks, an optional language token, anything else on
//! that line, a newline, a body, and the next three backticks. The body is
//! the shortest run that reaches a closing fence. A fence with no closing
//! backticks is not a fence at all and stays in the surrounding text.

use std::ops::Range;

use super::elements::{Block, Spanned, DEFAULT_CODE_LANGUAGE};
use super::scanner::{find_byte_from, find_from, Found, Piece, Pieces, Scanner};

const FENCE: &str = "```";

/// Byte ranges of a matched fence's parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fence {
    pub language: Range<usize>,
    pub body: Range<usize>,
}

pub(crate) struct FenceScanner;

impl Scanner for FenceScanner {
    type Token = Fence;

    fn scan(&self, text: &str, from: usize) -> Option<Found<Fence>> {
        // If the first opening fence has no newline or no closing fence after
        // it, no later opening can have one either.
        let open = find_from(text, from, FENCE)?;
        let info_start = open + FENCE.len();
        let newline = find_byte_from(text, info_start, b'\n')?;
        let close = find_from(text, newline + 1, FENCE)?;

        let language_len = text.as_bytes()[info_start..newline]
            .iter()
            .take_while(|b| is_word_byte(**b))
            .count();

        Some(Found {
            range: open..close + FENCE.len(),
            token: Fence {
                language: info_start..info_start + language_len,
                body: newline + 1..close,
            },
        })
    }
}

/// ASCII word characters, the only ones allowed in a language token
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Split `content` into prose and fenced code blocks, in source order
pub fn split_code_fences(content: &str) -> Vec<Spanned<Block<'_>>> {
    Pieces::new(content, FenceScanner)
        .map(|piece| match piece {
            Piece::Gap(range) => Spanned::new(Block::Text(&content[range.clone()]), range),
            Piece::Match(Found { range, token }) => {
                let language = match &content[token.language] {
                    "" => DEFAULT_CODE_LANGUAGE,
                    language => language,
                };
                let code = content[token.body].trim();
                Spanned::new(Block::Code { language, code }, range)
            }
        })
        .collect()
}
