use crossterm::style::{Color, Stylize};

/// Design tokens for the Libris console.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const BOOK: &str = "📚";
    pub const RULE: &str = "─";
    pub const HEAVY_RULE: &str = "═";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
    pub const BOOK: &str = "[LIB]";
    pub const RULE: &str = "-";
    pub const HEAVY_RULE: &str = "=";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Book,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => icons::SUCCESS,
            (true, Icon::Error) => icons::ERROR,
            (true, Icon::Warning) => icons::WARNING,
            (true, Icon::Arrow) => icons::ARROW,
            (true, Icon::Book) => icons::BOOK,
            (false, Icon::Success) => icons_ascii::SUCCESS,
            (false, Icon::Error) => icons_ascii::ERROR,
            (false, Icon::Warning) => icons_ascii::WARNING,
            (false, Icon::Arrow) => icons_ascii::ARROW,
            (false, Icon::Book) => icons_ascii::BOOK,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning => colors::WARNING,
            Icon::Arrow => colors::DIM,
            Icon::Book => colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

/// Horizontal rule of `width` cells
pub fn rule(width: usize, heavy: bool, supports_unicode: bool) -> String {
    let glyph = match (heavy, supports_unicode) {
        (true, true) => icons::HEAVY_RULE,
        (false, true) => icons::RULE,
        (true, false) => icons_ascii::HEAVY_RULE,
        (false, false) => icons_ascii::RULE,
    };
    glyph.repeat(width)
}
