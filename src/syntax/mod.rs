//! Tokenization engine
//!
//! This module provides the core of the highlighter:
//! - The token model ([`Token`], [`TokenKind`])
//! - Stateless per-language scanners behind one contract ([`Scanner`])
//! - The registry that resolves a language identifier and drives the
//!   render protocol ([`Registry`])
//!
//! Every scanner upholds the same invariants on every input: token texts
//! concatenate back to the exact source (coverage), each scan step consumes
//! at least one character (progress), and malformed input degrades to
//! tokens rather than errors (non-throwing).

mod cursor;
mod grammar;
pub mod languages;
mod registry;
mod scanner;
mod token;

pub use grammar::{Grammar, StringRule};
pub use registry::Registry;
pub use scanner::{Engine, Scanner};
pub use token::{Token, TokenKind};
