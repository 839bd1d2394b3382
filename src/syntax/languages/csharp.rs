//! C# language definition
//!
//! Interpolated strings (`$"..{expr}.."`) treat the hole as part of the
//! string span, with balanced-brace tracking so nested object initializers
//! do not end the literal early.

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "abstract", "as", "async", "await", "base", "break", "case", "catch", "checked", "class",
        "const", "continue", "default", "delegate", "do", "else", "enum", "event", "explicit",
        "extern", "finally", "fixed", "for", "foreach", "get", "goto", "if", "implicit", "in",
        "interface", "internal", "is", "lock", "nameof", "namespace", "new", "operator", "out",
        "override", "params", "partial", "private", "protected", "public", "readonly", "record",
        "ref", "return", "sealed", "set", "sizeof", "stackalloc", "static", "struct", "switch",
        "this", "throw", "try", "typeof", "unchecked", "unsafe", "using", "value", "var",
        "virtual", "void", "volatile", "when", "where", "while", "yield",
    ],
    types: &[
        "bool", "byte", "sbyte", "char", "decimal", "double", "float", "int", "uint", "long",
        "ulong", "nint", "nuint", "object", "short", "ushort", "string", "dynamic", "List",
        "Dictionary", "Task", "Func", "Action", "IEnumerable",
    ],
    literals: &["null", "true", "false"],
    line_comments: &["//"],
    block_comments: &[("/*", "*/")],
    strings: &[
        StringRule {
            open: "$\"",
            close: "\"",
            escape: true,
            interpolation: Some("{"),
        },
        StringRule::raw("@\"", "\""),
        StringRule::quoted("\""),
        StringRule::quoted("'"),
    ],
    operators: &[
        "??=", "<<=", ">>=", "=>", "??", "?.", "==", "!=", "<=", ">=", "&&", "||", "<<", ">>",
        "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "::",
    ],
    number_suffixes: &["ul", "UL", "u", "U", "l", "L", "f", "F", "d", "D", "m", "M"],
    preprocessor: Some("#"),
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("C#", &["csharp", "cs"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_interpolated_string_is_one_token() {
        let toks = scanner().tokenize("$\"x = {x + 1}!\" ;");
        assert_eq!(toks[0].kind, TokenKind::String);
        assert_eq!(toks[0].text, "$\"x = {x + 1}!\"");
    }

    #[test]
    fn test_region_directive() {
        let toks = scanner().tokenize("#region Setup\nint x;");
        assert_eq!(toks[0].kind, TokenKind::Preprocessor);
        assert_eq!(toks[0].text, "#region Setup");
    }
}
