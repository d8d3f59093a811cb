//! Terminal rendering of parsed messages
//!
//! Each segment maps onto styled spans with no further text analysis:
//! inline segments flow into the current line, images and code blocks take
//! lines of their own.

mod syntax;
mod terminal;
mod theme;

use bubble_core::{Message, RenderedMessage, Role, Segment, SpanStyle};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub use terminal::write_lines;
pub use theme::Theme;

/// Rendering switches taken from the config file
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub highlight_code: bool,
    pub show_attachments: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            highlight_code: true,
            show_attachments: true,
        }
    }
}

/// Accumulates spans into lines, breaking on embedded newlines
struct LineBuilder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl LineBuilder {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            current: Vec::new(),
        }
    }

    /// Append inline text; every `\n` ends the current line
    fn push_text(&mut self, text: &str, style: Style) {
        let mut parts = text.split('\n');
        if let Some(first) = parts.next() {
            self.push_span(first, style);
        }
        for part in parts {
            self.break_line();
            self.push_span(part, style);
        }
    }

    fn push_span(&mut self, text: &str, style: Style) {
        if !text.is_empty() {
            self.current.push(Span::styled(text.to_string(), style));
        }
    }

    fn break_line(&mut self) {
        self.lines
            .push(Line::from(std::mem::take(&mut self.current)));
    }

    /// Close the current line only if something is on it
    fn finish_inline(&mut self) {
        if !self.current.is_empty() {
            self.break_line();
        }
    }

    /// Add a standalone line after any pending inline content
    fn push_block_line(&mut self, line: Line<'static>) {
        self.finish_inline();
        self.lines.push(line);
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.finish_inline();
        self.lines
    }
}

/// Render one message: attachments, then its body segments
pub fn render_message(
    message: &RenderedMessage,
    theme: &Theme,
    options: &RenderOptions,
) -> Vec<Line<'static>> {
    let base_style = Style::default().fg(match message.role {
        Role::User => theme.user_msg_color,
        Role::Assistant => theme.assistant_msg_color,
    });
    let mut builder = LineBuilder::new();

    if options.show_attachments {
        for url in &message.attachments {
            builder.push_block_line(labelled_url("[attachment]", url, theme));
        }
    }

    for segment in &message.body {
        match segment {
            Segment::TextRun { value } => builder.push_text(value, base_style),
            Segment::StyledSpan { style, value } => {
                let (text, span_style) = styled_span(*style, value, base_style, theme);
                builder.push_text(&text, span_style);
            }
            Segment::Image { alt_text, url } => {
                let label = if alt_text.is_empty() {
                    "[image]".to_string()
                } else {
                    format!("[image: {alt_text}]")
                };
                builder.push_block_line(labelled_url(&label, url, theme));
            }
            Segment::CodeBlock { language, code } => {
                builder.finish_inline();
                render_code_block(&mut builder, language, code, theme, options);
            }
        }
    }

    builder.finish()
}

/// Render a whole conversation with a header line per message
pub fn render_transcript(
    messages: &[Message],
    theme: &Theme,
    options: &RenderOptions,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, message) in messages.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }

        let (label, color) = match message.role {
            Role::User => ("You", theme.user_msg_color),
            Role::Assistant => ("Assistant", theme.accent_color),
        };
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));

        let rendered = message.render();
        if rendered.is_empty() {
            lines.push(Line::from(Span::styled(
                "(empty message)",
                Style::default()
                    .fg(theme.dim_color)
                    .add_modifier(Modifier::ITALIC),
            )));
        } else {
            lines.extend(render_message(&rendered, theme, options));
        }
    }

    lines
}

fn styled_span(style: SpanStyle, value: &str, base: Style, theme: &Theme) -> (String, Style) {
    match style {
        SpanStyle::Bold => (value.to_string(), base.add_modifier(Modifier::BOLD)),
        SpanStyle::Italic => (value.to_string(), base.add_modifier(Modifier::ITALIC)),
        SpanStyle::Strike => (
            value.to_string(),
            base.fg(theme.dim_color).add_modifier(Modifier::CROSSED_OUT),
        ),
        SpanStyle::InlineCode => (
            format!(" {value} "),
            Style::default()
                .fg(theme.accent_color)
                .bg(theme.code_bg_color),
        ),
    }
}

fn labelled_url(label: &str, url: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label} "), Style::default().fg(theme.dim_color)),
        Span::styled(
            url.to_string(),
            Style::default()
                .fg(theme.link_color)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ])
}

fn render_code_block(
    builder: &mut LineBuilder,
    language: &str,
    code: &str,
    theme: &Theme,
    options: &RenderOptions,
) {
    let frame = Style::default().fg(theme.dim_color);

    builder.push_block_line(Line::from(vec![
        Span::styled("┌─ ", frame),
        Span::styled(
            language.to_string(),
            Style::default()
                .fg(theme.dim_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let code_lines = if options.highlight_code {
        syntax::highlight_code(code, language, theme)
    } else {
        syntax::plain_code(code, theme)
    };
    for spans in code_lines {
        let mut line = vec![Span::styled("│ ", frame)];
        line.extend(spans);
        builder.push_block_line(Line::from(line));
    }

    builder.push_block_line(Line::from(Span::styled("└─", frame)));
}
