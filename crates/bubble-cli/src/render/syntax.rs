//! Code block highlighting using syntect

use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::theme::Theme;

/// Loaded on first highlight and shared afterwards
static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// syntect theme used only to classify scopes; colors are remapped below
const SCOPE_THEME: &str = "base16-ocean.dark";

/// Highlight `code` as `language`, one span list per source line
///
/// Unknown languages, including the `text` default, fall back to plain text.
pub fn highlight_code(code: &str, language: &str, theme: &Theme) -> Vec<Vec<Span<'static>>> {
    let syntax = SYNTAX_SET
        .find_syntax_by_token(language)
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let Some(scope_theme) = THEME_SET.themes.get(SCOPE_THEME) else {
        tracing::warn!("syntect theme {SCOPE_THEME} missing, highlighting disabled");
        return plain_code(code, theme);
    };
    let mut highlighter = HighlightLines::new(syntax, scope_theme);

    let mut lines = Vec::new();
    for line in LinesWithEndings::from(code) {
        let ranges = match highlighter.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => ranges,
            Err(err) => {
                tracing::debug!("highlighting {language} failed: {err}");
                return plain_code(code, theme);
            }
        };

        lines.push(
            ranges
                .into_iter()
                .map(|(style, text)| {
                    let mut span_style = Style::default()
                        .fg(map_scope_color(style.foreground, theme))
                        .bg(theme.code_bg_color);
                    if style.font_style.contains(FontStyle::BOLD) {
                        span_style = span_style.add_modifier(Modifier::BOLD);
                    }
                    if style.font_style.contains(FontStyle::ITALIC) {
                        span_style = span_style.add_modifier(Modifier::ITALIC);
                    }
                    Span::styled(text.trim_end_matches('\n').to_string(), span_style)
                })
                .collect(),
        );
    }

    if lines.is_empty() {
        lines.push(Vec::new());
    }
    lines
}

/// Code lines in the theme's code colors, without highlighting
pub fn plain_code(code: &str, theme: &Theme) -> Vec<Vec<Span<'static>>> {
    let style = Style::default()
        .fg(theme.text_color)
        .bg(theme.code_bg_color);
    let mut lines: Vec<_> = code
        .lines()
        .map(|line| vec![Span::styled(line.to_string(), style)])
        .collect();
    if lines.is_empty() {
        lines.push(Vec::new());
    }
    lines
}

/// Map base16-ocean.dark palette colors onto the theme's syntax colors
fn map_scope_color(color: syntect::highlighting::Color, theme: &Theme) -> Color {
    match (color.r, color.g, color.b) {
        (101, 115, 126) => theme.syntax_comment_color,
        (163, 190, 140) => theme.syntax_string_color,
        (208, 135, 112) => theme.syntax_number_color,
        (180, 142, 173) => theme.syntax_keyword_color,
        (143, 161, 179) => theme.syntax_function_color,
        (235, 203, 139) | (150, 181, 180) => theme.syntax_type_color,
        (191, 97, 106) => theme.syntax_variable_color,
        (192, 197, 206) | (167, 173, 186) => theme.syntax_punctuation_color,
        _ => theme.text_color,
    }
}
