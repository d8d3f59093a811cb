//! Terminal color themes

use ratatui::style::Color;

/// Colors used when drawing message bubbles
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // Core colors
    pub text_color: Color,
    pub dim_color: Color,
    pub accent_color: Color,
    pub link_color: Color,
    pub code_bg_color: Color,

    // Message role colors
    pub user_msg_color: Color,
    pub assistant_msg_color: Color,

    // Syntax highlighting
    pub syntax_keyword_color: Color,
    pub syntax_function_color: Color,
    pub syntax_string_color: Color,
    pub syntax_number_color: Color,
    pub syntax_comment_color: Color,
    pub syntax_type_color: Color,
    pub syntax_variable_color: Color,
    pub syntax_punctuation_color: Color,
}

impl Theme {
    pub const NAMES: [&'static str; 2] = ["dark", "light"];

    pub fn dark() -> Self {
        Self {
            name: "dark",
            text_color: Color::Rgb(229, 231, 235),
            dim_color: Color::Rgb(107, 114, 128),
            accent_color: Color::Rgb(244, 114, 182),
            link_color: Color::Rgb(96, 165, 250),
            code_bg_color: Color::Rgb(38, 38, 38),
            user_msg_color: Color::Rgb(255, 255, 255),
            assistant_msg_color: Color::Rgb(243, 244, 246),
            syntax_keyword_color: Color::Rgb(198, 120, 221),
            syntax_function_color: Color::Rgb(97, 175, 239),
            syntax_string_color: Color::Rgb(152, 195, 121),
            syntax_number_color: Color::Rgb(209, 154, 102),
            syntax_comment_color: Color::Rgb(92, 99, 112),
            syntax_type_color: Color::Rgb(229, 192, 123),
            syntax_variable_color: Color::Rgb(224, 108, 117),
            syntax_punctuation_color: Color::Rgb(171, 178, 191),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            text_color: Color::Rgb(31, 41, 55),
            dim_color: Color::Rgb(156, 163, 175),
            accent_color: Color::Rgb(190, 24, 93),
            link_color: Color::Rgb(37, 99, 235),
            code_bg_color: Color::Rgb(243, 244, 246),
            user_msg_color: Color::Rgb(17, 24, 39),
            assistant_msg_color: Color::Rgb(31, 41, 55),
            syntax_keyword_color: Color::Rgb(166, 38, 164),
            syntax_function_color: Color::Rgb(64, 120, 242),
            syntax_string_color: Color::Rgb(80, 161, 79),
            syntax_number_color: Color::Rgb(152, 104, 1),
            syntax_comment_color: Color::Rgb(160, 161, 167),
            syntax_type_color: Color::Rgb(193, 132, 1),
            syntax_variable_color: Color::Rgb(228, 86, 73),
            syntax_punctuation_color: Color::Rgb(56, 58, 66),
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
