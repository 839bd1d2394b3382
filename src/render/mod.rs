//! Token stream renderers
//!
//! The engine drives renderers through a begin/emit/end protocol:
//! `begin_render` once before the first token, `render_token` once per
//! token in source order, `end_render` once after the last. Renderers map
//! each token kind to a style through a [`Theme`] lookup and must escape
//! token text against their output format's special characters before
//! embedding it.

mod html;
mod style;
mod terminal;

use crate::syntax::Token;

pub use html::HtmlRenderer;
pub use style::{Color, Style, Theme};
pub use terminal::TerminalRenderer;

/// Consumer of a token stream
pub trait Render {
    /// Called once before the first token of a highlight pass
    fn begin_render(&mut self);

    /// Called once per token, in source order
    fn render_token(&mut self, token: &Token);

    /// Called once after the last token
    fn end_render(&mut self);
}
