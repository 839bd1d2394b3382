//! Nim language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "addr", "and", "as", "asm", "bind", "block", "break", "case", "cast", "concept", "const",
        "continue", "converter", "defer", "discard", "distinct", "div", "do", "echo", "elif",
        "else", "end", "enum", "except", "export", "finally", "for", "from", "func", "if",
        "import", "in", "include", "interface", "is", "isnot", "iterator", "let", "macro",
        "method", "mixin", "mod", "not", "notin", "object", "of", "or", "out", "proc", "ptr",
        "raise", "ref", "return", "shl", "shr", "static", "template", "try", "tuple", "type",
        "using", "var", "when", "while", "xor", "yield",
    ],
    types: &[
        "array", "bool", "byte", "char", "cstring", "float", "float32", "float64", "int",
        "int16", "int32", "int64", "int8", "openArray", "seq", "set", "string", "uint",
        "uint16", "uint32", "uint64", "uint8",
    ],
    literals: &["nil", "true", "false"],
    line_comments: &["#"],
    block_comments: &[("#[", "]#")],
    nested_comments: true,
    strings: &[
        StringRule::quoted("\"\"\""),
        StringRule::raw("r\"", "\""),
        StringRule::quoted("\""),
        StringRule::quoted("'"),
    ],
    operators: &["..<", "..", "==", "!=", "<=", ">=", "->", "=>", "::", "&=", "+=", "-=", "*=", "/="],
    number_suffixes: &[
        "'i8", "'i16", "'i32", "'i64", "'u8", "'u16", "'u32", "'u64", "'f32", "'f64", "'f", "'d",
        "u8", "u16", "u32", "u64", "i8", "i16", "i32", "i64", "f32", "f64", "u", "f", "d",
    ],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Nim", &["nimble"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_block_comment_over_line() {
        let toks = scanner().tokenize("#[ multi\nline ]# x");
        assert_eq!(toks[0].kind, TokenKind::Comment);
        assert_eq!(toks[0].text, "#[ multi\nline ]#");
    }

    #[test]
    fn test_typed_literal() {
        let toks = scanner().tokenize("let n = 42'i32");
        assert_eq!(toks.last().unwrap().text, "42'i32");
        assert_eq!(toks.last().unwrap().kind, TokenKind::Number);
    }
}
