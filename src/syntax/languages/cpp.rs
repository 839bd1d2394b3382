//! C++ language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "alignas", "alignof", "auto", "break", "case", "catch", "class", "const", "consteval",
        "constexpr", "const_cast", "continue", "decltype", "default", "delete", "do", "dynamic_cast",
        "else", "enum", "explicit", "export", "extern", "final", "for", "friend", "goto", "if",
        "inline", "mutable", "namespace", "new", "noexcept", "operator", "override", "private",
        "protected", "public", "register", "reinterpret_cast", "return", "sizeof", "static",
        "static_assert", "static_cast", "struct", "switch", "template", "this", "throw", "try",
        "typedef", "typeid", "typename", "union", "using", "virtual", "volatile", "while",
    ],
    types: &[
        "void", "char", "char8_t", "char16_t", "char32_t", "wchar_t", "short", "int", "long",
        "float", "double", "signed", "unsigned", "bool", "size_t", "string", "wstring", "vector",
        "map", "set", "pair", "unique_ptr", "shared_ptr", "weak_ptr", "optional", "variant",
    ],
    literals: &["nullptr", "NULL", "true", "false"],
    line_comments: &["//"],
    block_comments: &[("/*", "*/")],
    strings: &[
        StringRule::raw("R\"(", ")\""),
        StringRule::quoted("\""),
        StringRule::quoted("'"),
    ],
    operators: &[
        "<=>", "<<=", ">>=", "->*", "::", "->", "==", "!=", "<=", ">=", "&&", "||", "<<", ">>",
        "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", ".*",
    ],
    number_suffixes: &[
        "ull", "ULL", "ll", "LL", "ul", "UL", "lu", "LU", "u", "U", "l", "L", "f", "F",
    ],
    preprocessor: Some("#"),
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("C++", &["cpp", "cxx", "cc", "hpp"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_scope_operator() {
        let toks = scanner().tokenize("std::cout");
        assert_eq!(toks[1].kind, TokenKind::Operator);
        assert_eq!(toks[1].text, "::");
    }

    #[test]
    fn test_spaceship() {
        let toks = scanner().tokenize("a <=> b");
        assert_eq!(toks[2].text, "<=>");
    }
}
