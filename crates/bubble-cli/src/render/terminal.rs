//! Writing rendered lines to a terminal with crossterm

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use ratatui::style::{Color, Modifier};
use ratatui::text::{Line, Span};

const MODIFIER_ATTRIBUTES: [(Modifier, Attribute); 5] = [
    (Modifier::BOLD, Attribute::Bold),
    (Modifier::DIM, Attribute::Dim),
    (Modifier::ITALIC, Attribute::Italic),
    (Modifier::UNDERLINED, Attribute::Underlined),
    (Modifier::CROSSED_OUT, Attribute::CrossedOut),
];

/// Write `lines` to `out`, with ANSI styling when `styled` is set
pub fn write_lines<W: Write>(out: &mut W, lines: &[Line<'_>], styled: bool) -> io::Result<()> {
    for line in lines {
        for span in &line.spans {
            if styled {
                write_styled_span(out, span)?;
            } else {
                out.write_all(span.content.as_bytes())?;
            }
        }
        writeln!(out)?;
    }
    out.flush()
}

fn write_styled_span<W: Write>(out: &mut W, span: &Span<'_>) -> io::Result<()> {
    if let Some(fg) = span.style.fg {
        queue!(out, SetForegroundColor(to_term_color(fg)))?;
    }
    if let Some(bg) = span.style.bg {
        queue!(out, SetBackgroundColor(to_term_color(bg)))?;
    }
    for (modifier, attribute) in MODIFIER_ATTRIBUTES {
        if span.style.add_modifier.contains(modifier) {
            queue!(out, SetAttribute(attribute))?;
        }
    }

    queue!(
        out,
        Print(span.content.as_ref()),
        SetAttribute(Attribute::Reset),
        ResetColor
    )
}

fn to_term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(index) => TermColor::AnsiValue(index),
    }
}
