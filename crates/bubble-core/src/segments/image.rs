//! Inline image extraction: `![alt](url)`
//!
//! Alt text runs to the first `]` and may be empty. The URL runs to the first
//! `)` and may not be empty. Both may span lines.

use std::ops::Range;

use super::elements::{ImagePiece, Spanned};
use super::scanner::{find_byte_from, Found, Piece, Pieces, Scanner};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImageRef {
    pub alt_text: Range<usize>,
    pub url: Range<usize>,
}

pub(crate) struct ImageScanner;

impl Scanner for ImageScanner {
    type Token = ImageRef;

    fn scan(&self, text: &str, from: usize) -> Option<Found<ImageRef>> {
        let bytes = text.as_bytes();
        let mut search = from;

        loop {
            let bang = find_byte_from(text, search, b'!')?;
            search = bang + 1;

            if bytes.get(bang + 1) != Some(&b'[') {
                continue;
            }

            // Later candidates would close at the same `]` or further on,
            // so a missing `]` or `)` ends the scan.
            let alt_start = bang + 2;
            let alt_end = find_byte_from(text, alt_start, b']')?;
            if bytes.get(alt_end + 1) != Some(&b'(') {
                continue;
            }

            let url_start = alt_end + 2;
            let url_end = find_byte_from(text, url_start, b')')?;
            if url_end == url_start {
                continue;
            }

            return Some(Found {
                range: bang..url_end + 1,
                token: ImageRef {
                    alt_text: alt_start..alt_end,
                    url: url_start..url_end,
                },
            });
        }
    }
}

/// Split `text` into prose and inline images, in source order
pub fn split_images(text: &str) -> Vec<Spanned<ImagePiece<'_>>> {
    Pieces::new(text, ImageScanner)
        .map(|piece| match piece {
            Piece::Gap(range) => Spanned::new(ImagePiece::Text(&text[range.clone()]), range),
            Piece::Match(Found { range, token }) => Spanned::new(
                ImagePiece::Image {
                    alt_text: &text[token.alt_text],
                    url: &text[token.url],
                },
                range,
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(text: &str) -> Vec<ImagePiece<'_>> {
        split_images(text)
            .into_iter()
            .map(Spanned::into_value)
            .collect()
    }

    #[test]
    fn test_image_between_text() {
        assert_eq!(
            pieces("Look ![cat](http://x/c.png) now"),
            vec![
                ImagePiece::Text("Look "),
                ImagePiece::Image {
                    alt_text: "cat",
                    url: "http://x/c.png"
                },
                ImagePiece::Text(" now"),
            ]
        );
    }

    #[test]
    fn test_empty_alt_text_is_kept_as_empty_string() {
        assert_eq!(
            pieces("![](a.png)"),
            vec![ImagePiece::Image {
                alt_text: "",
                url: "a.png"
            }]
        );
    }

    #[test]
    fn test_empty_url_is_not_an_image() {
        assert_eq!(pieces("![alt]()"), vec![ImagePiece::Text("![alt]()")]);
    }

    #[test]
    fn test_link_without_bang_is_text() {
        assert_eq!(
            pieces("[site](http://x)"),
            vec![ImagePiece::Text("[site](http://x)")]
        );
    }

    #[test]
    fn test_space_between_brackets_and_parens_is_text() {
        assert_eq!(pieces("![a] (b)"), vec![ImagePiece::Text("![a] (b)")]);
    }

    #[test]
    fn test_failed_candidate_resumes_at_next_bang() {
        assert_eq!(
            pieces("wow! ![x](y.png)"),
            vec![
                ImagePiece::Text("wow! "),
                ImagePiece::Image {
                    alt_text: "x",
                    url: "y.png"
                },
            ]
        );
        assert_eq!(
            pieces("![no] then ![yes](u)"),
            vec![
                ImagePiece::Text("![no] then "),
                ImagePiece::Image {
                    alt_text: "yes",
                    url: "u"
                },
            ]
        );
    }

    #[test]
    fn test_alt_text_runs_to_first_closing_bracket() {
        assert_eq!(
            pieces("![a![b](u)"),
            vec![ImagePiece::Image {
                alt_text: "a![b",
                url: "u"
            }]
        );
    }

    #[test]
    fn test_consecutive_images() {
        assert_eq!(
            pieces("![a](1)![b](2)"),
            vec![
                ImagePiece::Image {
                    alt_text: "a",
                    url: "1"
                },
                ImagePiece::Image {
                    alt_text: "b",
                    url: "2"
                },
            ]
        );
    }

    #[test]
    fn test_markup_inside_image_is_kept_verbatim() {
        assert_eq!(
            pieces("![**bold**](http://x/a*b~~c.png)"),
            vec![ImagePiece::Image {
                alt_text: "**bold**",
                url: "http://x/a*b~~c.png"
            }]
        );
    }

    #[test]
    fn test_unterminated_image_is_text() {
        assert_eq!(
            pieces("![alt](http://x"),
            vec![ImagePiece::Text("![alt](http://x")]
        );
    }
}
