//! Segment element types

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Language reported for a fence that carries no language annotation
pub const DEFAULT_CODE_LANGUAGE: &str = "text";

/// Leaf-level parsed message content
///
/// The model is flat: a styled span holds exactly one style and plain text,
/// so bold-inside-italic is not representable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Literal text with no styling
    TextRun { value: String },
    /// Text carrying a single inline style
    StyledSpan { style: SpanStyle, value: String },
    /// Inline `![alt](url)` image
    Image { alt_text: String, url: String },
    /// Fenced code block
    CodeBlock { language: String, code: String },
}

impl Segment {
    pub fn text(value: impl Into<String>) -> Self {
        Self::TextRun {
            value: value.into(),
        }
    }

    pub fn styled(style: SpanStyle, value: impl Into<String>) -> Self {
        Self::StyledSpan {
            style,
            value: value.into(),
        }
    }

    pub fn image(alt_text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Image {
            alt_text: alt_text.into(),
            url: url.into(),
        }
    }

    pub fn code_block(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self::CodeBlock {
            language: language.into(),
            code: code.into(),
        }
    }
}

/// Inline styles recognised by the tokenizer, in match priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanStyle {
    Bold,
    Italic,
    Strike,
    InlineCode,
}

impl SpanStyle {
    /// All styles, in the order the tokenizer tries them at a position
    pub const PRIORITY: [SpanStyle; 4] = [
        SpanStyle::Bold,
        SpanStyle::Italic,
        SpanStyle::Strike,
        SpanStyle::InlineCode,
    ];

    /// Delimiter placed on both sides of the span body
    pub fn delimiter(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "*",
            Self::Strike => "~~",
            Self::InlineCode => "`",
        }
    }

    /// Character the span body may not contain
    pub fn excluded(self) -> u8 {
        match self {
            Self::Bold | Self::Italic => b'*',
            Self::Strike => b'~',
            Self::InlineCode => b'`',
        }
    }
}

/// Output of the code-fence pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// Prose still to be scanned for images and inline styles
    Text(&'a str),
    /// Fenced code, body already trimmed
    Code { language: &'a str, code: &'a str },
}

/// Output of the image pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePiece<'a> {
    Text(&'a str),
    Image { alt_text: &'a str, url: &'a str },
}

/// A value paired with the byte range of the source it was derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Range<usize>,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Range<usize>) -> Self {
        Self { value, span }
    }

    /// Shift the span by `offset`, for results computed on a sub-slice
    pub(crate) fn offset(mut self, offset: usize) -> Self {
        self.span = self.span.start + offset..self.span.end + offset;
        self
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
