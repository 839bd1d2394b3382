//! HTML renderer
//!
//! Emits a `<pre>` block with one `<span>` per styled token. Token text is
//! escaped against HTML's special characters before embedding; unstyled
//! kinds are written without a span wrapper to keep output small.

use std::fmt::Write as _;

use super::style::Theme;
use super::Render;
use crate::syntax::Token;

/// Escape `&`, `<`, `>`, `"` and `'` for embedding in HTML
fn escape(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

/// Renderer producing an HTML fragment
pub struct HtmlRenderer {
    theme: Theme,
    out: String,
}

impl HtmlRenderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            out: String::new(),
        }
    }

    /// The rendered fragment accumulated so far
    pub fn into_html(self) -> String {
        self.out
    }
}

impl Render for HtmlRenderer {
    fn begin_render(&mut self) {
        self.out.push_str("<pre class=\"tint\">");
    }

    fn render_token(&mut self, token: &Token) {
        let style = self.theme.style(token.kind);
        if style.is_default() {
            escape(token.text, &mut self.out);
        } else {
            let mut class = format!("tint-{}", style.fg.css_name());
            if style.bold {
                class.push_str(" tint-bold");
            }
            if style.italic {
                class.push_str(" tint-italic");
            }
            if style.underline {
                class.push_str(" tint-underline");
            }
            let _ = write!(self.out, "<span class=\"{class}\">");
            escape(token.text, &mut self.out);
            self.out.push_str("</span>");
        }
    }

    fn end_render(&mut self) {
        self.out.push_str("</pre>\n");
    }
}
