//! tint - syntax highlighting for the terminal
//!
//! The core of the crate is the tokenization engine in [`syntax`]: a set of
//! stateless per-language scanners behind one contract, a registry that
//! resolves a language identifier to a scanner, and a renderer protocol that
//! consumes the resulting token stream. Rendering backends live in
//! [`render`]; language detection from file paths in [`detect`].

pub mod config;
pub mod detect;
pub mod error;
pub mod render;
pub mod syntax;

pub use error::{Result, TintError};
pub use render::{Render, Style, Theme};
pub use syntax::{Registry, Scanner, Token, TokenKind};
