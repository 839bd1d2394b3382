//! Go language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
        "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
        "return", "select", "struct", "switch", "type", "var",
    ],
    types: &[
        "bool", "byte", "complex64", "complex128", "error", "float32", "float64", "int", "int8",
        "int16", "int32", "int64", "rune", "string", "uint", "uint8", "uint16", "uint32",
        "uint64", "uintptr", "any",
    ],
    literals: &["nil", "true", "false", "iota"],
    line_comments: &["//"],
    block_comments: &[("/*", "*/")],
    strings: &[
        StringRule::raw("`", "`"),
        StringRule::quoted("\""),
        StringRule::quoted("'"),
    ],
    operators: &[
        "<<=", ">>=", "&^=", ":=", "<-", "==", "!=", "<=", ">=", "&&", "||", "<<", ">>", "&^",
        "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "...",
    ],
    number_suffixes: &["i"],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Go", &["golang"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_short_declaration() {
        let toks = scanner().tokenize("x := <-ch");
        assert!(toks.iter().any(|t| t.kind == TokenKind::Operator && t.text == ":="));
        assert!(toks.iter().any(|t| t.kind == TokenKind::Operator && t.text == "<-"));
    }

    #[test]
    fn test_raw_string_keeps_backslashes() {
        let toks = scanner().tokenize(r"`a\n` x");
        assert_eq!(toks[0].kind, TokenKind::String);
        assert_eq!(toks[0].text, r"`a\n`");
    }
}
