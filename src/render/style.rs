//! Style types and the kind-to-style theme
//!
//! Colors stay within the ANSI 16-color palette for terminal
//! compatibility. A [`Theme`] maps each token kind to a style, with the
//! default (unstyled) for anything unmapped.

use crate::syntax::TokenKind;

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Parse a color from a theme file word ("red", "bright-blue")
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "default" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright-black" | "grey" | "gray" => Color::BrightBlack,
            "bright-red" => Color::BrightRed,
            "bright-green" => Color::BrightGreen,
            "bright-yellow" => Color::BrightYellow,
            "bright-blue" => Color::BrightBlue,
            "bright-magenta" => Color::BrightMagenta,
            "bright-cyan" => Color::BrightCyan,
            "bright-white" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }

    /// CSS class suffix for the HTML renderer
    pub fn css_name(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::BrightBlack => "bright-black",
            Color::BrightRed => "bright-red",
            Color::BrightGreen => "bright-green",
            Color::BrightYellow => "bright-yellow",
            Color::BrightBlue => "bright-blue",
            Color::BrightMagenta => "bright-magenta",
            Color::BrightCyan => "bright-cyan",
            Color::BrightWhite => "bright-white",
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just a foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Parse a style from a theme file value ("magenta bold italic")
    ///
    /// Unknown words are ignored rather than rejected, so themes written
    /// for a newer version still load.
    pub fn parse(value: &str) -> Self {
        let mut style = Style::default();
        for word in value.split_whitespace() {
            match word.to_ascii_lowercase().as_str() {
                "bold" => style.bold = true,
                "italic" => style.italic = true,
                "underline" => style.underline = true,
                other => {
                    if let Some(color) = Color::from_name(other) {
                        style.fg = color;
                    }
                }
            }
        }
        style
    }
}

/// Mapping from token kinds to presentation styles
///
/// A fixed lookup with a default style for unmapped kinds; renderers never
/// need to handle a missing entry.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    keyword: Style,
    type_name: Style,
    string: Style,
    comment: Style,
    number: Style,
    operator: Style,
    punctuation: Style,
    identifier: Style,
    preprocessor: Style,
    text: Style,
}

impl Theme {
    /// Style for a token kind
    pub fn style(&self, kind: TokenKind) -> Style {
        match kind {
            TokenKind::Text => self.text,
            TokenKind::Keyword => self.keyword,
            TokenKind::Type => self.type_name,
            TokenKind::String => self.string,
            TokenKind::Comment => self.comment,
            TokenKind::Number => self.number,
            TokenKind::Operator => self.operator,
            TokenKind::Punctuation => self.punctuation,
            TokenKind::Identifier => self.identifier,
            TokenKind::Preprocessor => self.preprocessor,
        }
    }

    /// Replace the style for one kind
    pub fn set_style(&mut self, kind: TokenKind, style: Style) {
        match kind {
            TokenKind::Text => self.text = style,
            TokenKind::Keyword => self.keyword = style,
            TokenKind::Type => self.type_name = style,
            TokenKind::String => self.string = style,
            TokenKind::Comment => self.comment = style,
            TokenKind::Number => self.number = style,
            TokenKind::Operator => self.operator = style,
            TokenKind::Punctuation => self.punctuation = style,
            TokenKind::Identifier => self.identifier = style,
            TokenKind::Preprocessor => self.preprocessor = style,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            keyword: Style::fg(Color::Magenta).with_bold(),
            type_name: Style::fg(Color::Yellow),
            string: Style::fg(Color::Green),
            comment: Style::fg(Color::BrightBlack).with_italic(),
            number: Style::fg(Color::Cyan),
            operator: Style::fg(Color::BrightWhite),
            punctuation: Style::default(),
            identifier: Style::default(),
            preprocessor: Style::fg(Color::BrightMagenta),
            text: Style::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parse() {
        let style = Style::parse("magenta bold");
        assert_eq!(style.fg, Color::Magenta);
        assert!(style.bold);
        assert!(!style.italic);
    }

    #[test]
    fn test_style_parse_ignores_unknown_words() {
        let style = Style::parse("sparkly green");
        assert_eq!(style.fg, Color::Green);
    }

    #[test]
    fn test_default_theme_styles() {
        let theme = Theme::default();
        assert!(!theme.style(TokenKind::Keyword).is_default());
        assert!(!theme.style(TokenKind::Comment).is_default());
        // Plain kinds stay unstyled
        assert!(theme.style(TokenKind::Text).is_default());
        assert!(theme.style(TokenKind::Punctuation).is_default());
    }

    #[test]
    fn test_set_style() {
        let mut theme = Theme::default();
        theme.set_style(TokenKind::Number, Style::fg(Color::Red));
        assert_eq!(theme.style(TokenKind::Number).fg, Color::Red);
    }

    #[test]
    fn test_color_from_name() {
        assert_eq!(Color::from_name("red"), Some(Color::Red));
        assert_eq!(Color::from_name("Bright-Blue"), Some(Color::BrightBlue));
        assert_eq!(Color::from_name("gray"), Some(Color::BrightBlack));
        assert_eq!(Color::from_name("mauve"), None);
    }
}
