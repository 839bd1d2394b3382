//! ANSI terminal renderer
//!
//! Writes styled token text to any `io::Write` using crossterm's styling
//! commands. Token text passes through a control-byte filter first so that
//! source files cannot smuggle their own escape sequences into the output
//! stream; newlines, tabs and carriage returns are the only control bytes
//! kept.

use std::io::Write;

use crossterm::style::{Attribute, Color as CtColor, SetAttribute, SetForegroundColor};
use crossterm::QueueableCommand;

use super::style::{Color, Style, Theme};
use super::Render;
use crate::syntax::Token;

fn to_crossterm(color: Color) -> CtColor {
    match color {
        Color::Default => CtColor::Reset,
        Color::Black => CtColor::Black,
        Color::Red => CtColor::DarkRed,
        Color::Green => CtColor::DarkGreen,
        Color::Yellow => CtColor::DarkYellow,
        Color::Blue => CtColor::DarkBlue,
        Color::Magenta => CtColor::DarkMagenta,
        Color::Cyan => CtColor::DarkCyan,
        Color::White => CtColor::Grey,
        Color::BrightBlack => CtColor::DarkGrey,
        Color::BrightRed => CtColor::Red,
        Color::BrightGreen => CtColor::Green,
        Color::BrightYellow => CtColor::Yellow,
        Color::BrightBlue => CtColor::Blue,
        Color::BrightMagenta => CtColor::Magenta,
        Color::BrightCyan => CtColor::Cyan,
        Color::BrightWhite => CtColor::White,
    }
}

/// Remove control bytes that could alter terminal state
fn sanitize(text: &str) -> std::borrow::Cow<'_, str> {
    if text
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\n' | '\t' | '\r'))
    {
        std::borrow::Cow::Owned(
            text.chars()
                .filter(|c| !c.is_control() || matches!(c, '\n' | '\t' | '\r'))
                .collect(),
        )
    } else {
        std::borrow::Cow::Borrowed(text)
    }
}

/// Renderer producing ANSI-styled output
///
/// Write errors are remembered rather than propagated: the render protocol
/// is infallible by contract, so the first error is kept and exposed via
/// [`TerminalRenderer::finish`] after the pass.
pub struct TerminalRenderer<W: Write> {
    out: W,
    theme: Theme,
    color: bool,
    error: Option<std::io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self {
            out,
            theme,
            color: true,
            error: None,
        }
    }

    /// Disable color output (plain text passthrough, still sanitized)
    pub fn monochrome(mut self) -> Self {
        self.color = false;
        self
    }

    /// Finish rendering, returning the first write error if any occurred
    pub fn finish(mut self) -> std::io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => self.out.flush(),
        }
    }

    fn apply(&mut self, style: Style) -> std::io::Result<()> {
        self.out
            .queue(SetForegroundColor(to_crossterm(style.fg)))?;
        if style.bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            self.out.queue(SetAttribute(Attribute::Italic))?;
        }
        if style.underline {
            self.out.queue(SetAttribute(Attribute::Underlined))?;
        }
        Ok(())
    }

    fn write_token(&mut self, token: &Token) -> std::io::Result<()> {
        let style = self.theme.style(token.kind);
        let text = sanitize(token.text);
        if self.color && !style.is_default() {
            self.apply(style)?;
            self.out.write_all(text.as_bytes())?;
            self.out.queue(SetAttribute(Attribute::Reset))?;
        } else {
            self.out.write_all(text.as_bytes())?;
        }
        Ok(())
    }
}

impl<W: Write> Render for TerminalRenderer<W> {
    fn begin_render(&mut self) {}

    fn render_token(&mut self, token: &Token) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_token(token) {
            self.error = Some(err);
        }
    }

    fn end_render(&mut self) {
        if self.error.is_none() {
            if let Err(err) = self.out.flush() {
                self.error = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_monochrome_passthrough() {
        let mut buf = Vec::new();
        {
            let mut r = TerminalRenderer::new(&mut buf, Theme::default()).monochrome();
            r.begin_render();
            r.render_token(&Token::new(TokenKind::Keyword, "let"));
            r.render_token(&Token::new(TokenKind::Text, " x\n"));
            r.end_render();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "let x\n");
    }

    #[test]
    fn test_color_output_contains_text() {
        let mut buf = Vec::new();
        {
            let mut r = TerminalRenderer::new(&mut buf, Theme::default());
            r.begin_render();
            r.render_token(&Token::new(TokenKind::Keyword, "fn"));
            r.end_render();
        }
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("fn"));
        assert!(out.contains('\u{1b}'));
    }

    #[test]
    fn test_sanitize_strips_escape_bytes() {
        assert_eq!(sanitize("a\u{1b}[31mb"), "a[31mb");
        assert_eq!(sanitize("keep\ttabs\nand newlines"), "keep\ttabs\nand newlines");
    }
}
