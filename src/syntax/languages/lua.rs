//! Lua language definition
//!
//! The engine tries block comment openers before line openers, so the
//! `--[[ ]]` long form wins over the `--` line comment it starts with.
//! Level-annotated long brackets (`[==[`) are not modeled.

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "and", "break", "do", "else", "elseif", "end", "for", "function", "goto", "if", "in",
        "local", "not", "or", "repeat", "return", "then", "until", "while",
    ],
    types: &[],
    literals: &["nil", "true", "false", "self"],
    line_comments: &["--"],
    block_comments: &[("--[[", "]]")],
    strings: &[
        StringRule::raw("[[", "]]"),
        StringRule::quoted("\""),
        StringRule::quoted("'"),
    ],
    operators: &["...", "..", "==", "~=", "<=", ">=", "//", "<<", ">>"],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Lua", &[], Engine::Table(&GRAMMAR))
}
