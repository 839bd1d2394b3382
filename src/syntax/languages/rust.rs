//! Rust language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
        "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "type",
        "union", "unsafe", "use", "where", "while",
    ],
    types: &[
        "bool", "char", "str", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32",
        "i64", "i128", "isize", "f32", "f64", "String", "Vec", "Box", "Rc", "Arc", "Option",
        "Result", "Some", "None", "Ok", "Err",
    ],
    literals: &["true", "false"],
    line_comments: &["//"],
    block_comments: &[("/*", "*/")],
    nested_comments: true,
    strings: &[
        StringRule::raw("br#\"", "\"#"),
        StringRule::raw("r#\"", "\"#"),
        StringRule {
            open: "b\"",
            close: "\"",
            escape: true,
            interpolation: None,
        },
        StringRule::raw("r\"", "\""),
        StringRule::quoted("\""),
    ],
    // `'a'` is a char literal; `'a` in `&'a str` is a lifetime, which the
    // quote-as-sigil identifier rule picks up when no literal closes
    char_delim: Some(b'\''),
    ident_start_extra: &[b'\''],
    operators: &[
        "..=", "<<=", ">>=", "->", "=>", "::", "==", "!=", "<=", ">=", "&&", "||", "<<", ">>",
        "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "..",
    ],
    number_suffixes: &[
        "usize", "isize", "u128", "i128", "u64", "i64", "u32", "i32", "u16", "i16", "u8", "i8",
        "f64", "f32",
    ],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Rust", &["rs"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_keywords_and_types() {
        let toks = scanner().tokenize("let x: u32 = 5u32;");
        assert_eq!(toks[0].kind, TokenKind::Keyword);
        assert_eq!(toks[0].text, "let");
        assert!(toks.iter().any(|t| t.kind == TokenKind::Type && t.text == "u32"));
        assert!(toks.iter().any(|t| t.kind == TokenKind::Number && t.text == "5u32"));
    }

    #[test]
    fn test_raw_string_ignores_escapes() {
        let toks = scanner().tokenize(r###"r#"a \ " b"# x"###);
        assert_eq!(toks[0].kind, TokenKind::String);
        assert_eq!(toks[0].text, r##"r#"a \ " b"#"##);
    }

    #[test]
    fn test_nested_block_comment() {
        let toks = scanner().tokenize("/* a /* b */ c */ fn");
        assert_eq!(toks[0].kind, TokenKind::Comment);
        assert_eq!(toks[0].text, "/* a /* b */ c */");
    }

    #[test]
    fn test_path_separator_is_operator() {
        let toks = scanner().tokenize("std::mem");
        assert_eq!(toks[1].kind, TokenKind::Operator);
        assert_eq!(toks[1].text, "::");
    }

    #[test]
    fn test_char_literals() {
        let toks = scanner().tokenize("'x' '\\n' '\\''");
        let strings: Vec<_> = toks
            .iter()
            .filter(|t| t.kind == TokenKind::String)
            .map(|t| t.text)
            .collect();
        assert_eq!(strings, vec!["'x'", "'\\n'", "'\\''"]);
    }

    #[test]
    fn test_lifetime_is_identifier_not_string() {
        let toks = scanner().tokenize("fn f<'a>(s: &'a str) -> &'static str");
        assert!(toks.iter().any(|t| t.kind == TokenKind::Identifier && t.text == "'a"));
        assert!(toks.iter().any(|t| t.kind == TokenKind::Identifier && t.text == "'static"));
        assert!(toks.iter().all(|t| t.kind != TokenKind::String));
    }
}
