//! JSON language definition
//!
//! JSON has no comments or keywords beyond its three literals. The comment
//! forms are still listed so JSONC-style input degrades gracefully.

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[],
    types: &[],
    literals: &["null", "true", "false"],
    line_comments: &["//"],
    block_comments: &[("/*", "*/")],
    strings: &[StringRule::quoted("\"")],
    operators: &[],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("JSON", &["jsonc", "json5"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_object() {
        let toks = scanner().tokenize("{\"a\": 1, \"b\": null}");
        assert_eq!(toks[1].kind, TokenKind::String);
        assert!(toks.iter().any(|t| t.kind == TokenKind::Number && t.text == "1"));
        assert!(toks.iter().any(|t| t.kind == TokenKind::Keyword && t.text == "null"));
    }
}
