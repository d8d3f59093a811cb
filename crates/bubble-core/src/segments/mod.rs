//! Message content segmentation
//!
//! Three passes, each feeding the next:
//! 1. [`split_code_fences`] separates fenced code from prose.
//! 2. [`split_images`] pulls `![alt](url)` images out of each prose block.
//! 3. [`tokenize_inline`] splits the remaining runs into plain text and
//!    styled spans.
//!
//! Code bodies never reach pass 2 and image alt text or URLs never reach
//! pass 3. The output is flat and in source order.

mod elements;
mod fence;
mod image;
mod inline;
mod scanner;

pub use elements::{Block, ImagePiece, Segment, SpanStyle, Spanned, DEFAULT_CODE_LANGUAGE};
pub use fence::split_code_fences;
pub use image::split_images;
pub use inline::tokenize_inline;

/// Parse message content into render segments
pub fn parse(content: &str) -> Vec<Segment> {
    parse_spanned(content)
        .into_iter()
        .map(Spanned::into_value)
        .collect()
}

/// Parse message content, keeping the source byte range of every segment
pub fn parse_spanned(content: &str) -> Vec<Spanned<Segment>> {
    let mut segments = Vec::new();

    for block in split_code_fences(content) {
        let offset = block.span.start;
        match block.value {
            Block::Code { language, code } => {
                segments.push(Spanned::new(Segment::code_block(language, code), block.span));
            }
            Block::Text(text) => {
                segments.extend(
                    text_segments(text)
                        .into_iter()
                        .map(|segment| segment.offset(offset)),
                );
            }
        }
    }

    tracing::debug!(
        bytes = content.len(),
        segments = segments.len(),
        "parsed message content"
    );
    segments
}

/// Segment a prose block: images first, then inline styles between them
pub fn text_segments(text: &str) -> Vec<Spanned<Segment>> {
    let mut segments = Vec::new();

    for piece in split_images(text) {
        let offset = piece.span.start;
        match piece.value {
            ImagePiece::Image { alt_text, url } => {
                segments.push(Spanned::new(Segment::image(alt_text, url), piece.span));
            }
            ImagePiece::Text(run) => {
                segments.extend(
                    tokenize_inline(run)
                        .into_iter()
                        .map(|segment| segment.offset(offset)),
                );
            }
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inputs that exercise the precedence rules between passes
    const TRICKY: &[&str] = &[
        "",
        "plain",
        "a * b",
        "**bold** and *italic* and ~~gone~~ and `code`",
        "Look ![cat](http://x/c.png) **now**",
        "```js\nconst x = **2**;\n```",
        "```\nno language\n```",
        "before ```py\nprint(1)\n``` middle ![i](u) ~~s~~ after",
        "unclosed ```rust\nfn main() {",
        "![a*b](u~~v) *c*",
        "*![x](y)*",
        "***a***",
        "``````",
        "![](x)![y](z)",
        "emoji 🎉 **ünïcödé** `✓`",
        "line one\n\nline *two*\n```\n\n```\n",
    ];

    /// Rebuild the source slice a segment was parsed from
    fn assert_segment_matches_source(segment: &Segment, source: &str) {
        match segment {
            Segment::TextRun { value } => assert_eq!(value, source),
            Segment::StyledSpan { style, value } => {
                let delimiter = style.delimiter();
                assert_eq!(format!("{delimiter}{value}{delimiter}"), source);
            }
            Segment::Image { alt_text, url } => {
                assert_eq!(format!("![{alt_text}]({url})"), source);
            }
            Segment::CodeBlock { language, code } => {
                assert!(source.starts_with("```"), "fence source: {source:?}");
                assert!(source.ends_with("```"), "fence source: {source:?}");
                assert!(source.contains(code.as_str()));
                if language != DEFAULT_CODE_LANGUAGE {
                    assert!(source[3..].starts_with(language.as_str()));
                }
            }
        }
    }

    fn assert_covers_input(content: &str) {
        let segments = parse_spanned(content);
        let mut cursor = 0;

        for spanned in &segments {
            assert_eq!(
                spanned.span.start, cursor,
                "gap or overlap in {content:?}: {segments:?}"
            );
            assert!(spanned.span.end > spanned.span.start);
            let source = content
                .get(spanned.span.clone())
                .unwrap_or_else(|| panic!("span off char boundary in {content:?}"));
            assert_segment_matches_source(&spanned.value, source);
            cursor = spanned.span.end;
        }

        assert_eq!(cursor, content.len(), "trailing input dropped: {content:?}");
    }

    /// Small deterministic generator over markup-heavy characters
    fn generated_inputs(count: usize) -> Vec<String> {
        const ALPHABET: &[&str] = &[
            "*", "**", "~", "~~", "`", "```", "!", "[", "]", "(", ")", "\n", "a", "b", " ", "é",
            "js",
        ];
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        };

        (0..count)
            .map(|_| {
                let len = (next() % 24) as usize;
                (0..len)
                    .map(|_| ALPHABET[(next() % ALPHABET.len() as u64) as usize])
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_fence_priority_over_styles() {
        assert_eq!(
            parse("```js\nconst x = **2**;\n```"),
            vec![Segment::code_block("js", "const x = **2**;")]
        );
    }

    #[test]
    fn test_image_then_style_ordering() {
        assert_eq!(
            parse("Look ![cat](http://x/c.png) **now**"),
            vec![
                Segment::text("Look "),
                Segment::image("cat", "http://x/c.png"),
                Segment::text(" "),
                Segment::styled(SpanStyle::Bold, "now"),
            ]
        );
    }

    #[test]
    fn test_unmatched_delimiter() {
        assert_eq!(parse("a * b"), vec![Segment::text("a * b")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_default_language() {
        assert_eq!(
            parse("```\nplain\n```"),
            vec![Segment::code_block("text", "plain")]
        );
    }

    #[test]
    fn test_image_is_a_hard_boundary_for_styles() {
        // The asterisks around the image do not pair across it.
        assert_eq!(
            parse("*![x](y)*"),
            vec![
                Segment::text("*"),
                Segment::image("x", "y"),
                Segment::text("*"),
            ]
        );
        assert_eq!(
            parse("![a*b](u~~v) *c*"),
            vec![
                Segment::image("a*b", "u~~v"),
                Segment::text(" "),
                Segment::styled(SpanStyle::Italic, "c"),
            ]
        );
    }

    #[test]
    fn test_code_block_is_a_hard_boundary_for_styles() {
        assert_eq!(
            parse("*a\n```\nb\n```\nc*"),
            vec![
                Segment::text("*a\n"),
                Segment::code_block("text", "b"),
                Segment::text("\nc*"),
            ]
        );
    }

    #[test]
    fn test_image_inside_code_block_is_code() {
        assert_eq!(
            parse("```md\n![x](y)\n```"),
            vec![Segment::code_block("md", "![x](y)")]
        );
    }

    #[test]
    fn test_mixed_document_order() {
        assert_eq!(
            parse("before ```py\nprint(1)\n``` middle ![i](u) ~~s~~ after"),
            vec![
                Segment::text("before "),
                Segment::code_block("py", "print(1)"),
                Segment::text(" middle "),
                Segment::image("i", "u"),
                Segment::text(" "),
                Segment::styled(SpanStyle::Strike, "s"),
                Segment::text(" after"),
            ]
        );
    }

    #[test]
    fn test_streaming_unclosed_fence_degrades_to_text() {
        assert_eq!(
            parse("unclosed ```rust\nfn *main*() {"),
            vec![
                Segment::text("unclosed ```rust\nfn "),
                Segment::styled(SpanStyle::Italic, "main"),
                Segment::text("() {"),
            ]
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        for content in TRICKY {
            assert_eq!(parse(content), parse(content));
        }
    }

    #[test]
    fn test_spans_cover_tricky_inputs() {
        for content in TRICKY {
            assert_covers_input(content);
        }
    }

    #[test]
    fn test_spans_cover_generated_inputs() {
        for content in generated_inputs(2000) {
            assert_covers_input(&content);
            assert_eq!(parse(&content), parse(&content));
        }
    }

    #[test]
    fn test_styled_values_exclude_own_delimiter() {
        for content in TRICKY
            .iter()
            .map(|s| s.to_string())
            .chain(generated_inputs(500))
        {
            for segment in parse(&content) {
                if let Segment::StyledSpan { style, value } = segment {
                    assert!(!value.is_empty());
                    assert!(!value.as_bytes().contains(&style.excluded()));
                }
            }
        }
    }

    #[test]
    fn test_no_empty_text_runs() {
        for content in generated_inputs(500) {
            for segment in parse(&content) {
                if let Segment::TextRun { value } = segment {
                    assert!(!value.is_empty(), "empty run for {content:?}");
                }
            }
        }
    }

    #[test]
    fn test_text_without_code_or_images_loses_only_delimiters() {
        let content = "x **b** y *i* z ~~s~~ w `c` v * u";
        let rebuilt: String = parse(content)
            .into_iter()
            .map(|segment| match segment {
                Segment::TextRun { value } | Segment::StyledSpan { value, .. } => value,
                other => panic!("unexpected segment {other:?}"),
            })
            .collect();
        assert_eq!(rebuilt, "x b y i z s w c v * u");
    }
}
