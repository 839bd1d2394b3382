//! C language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "auto", "break", "case", "const", "continue", "default", "do", "else", "enum", "extern",
        "for", "goto", "if", "inline", "register", "restrict", "return", "sizeof", "static",
        "struct", "switch", "typedef", "union", "volatile", "while",
    ],
    types: &[
        "void", "char", "short", "int", "long", "float", "double", "signed", "unsigned", "size_t",
        "ssize_t", "ptrdiff_t", "int8_t", "int16_t", "int32_t", "int64_t", "uint8_t", "uint16_t",
        "uint32_t", "uint64_t", "bool", "FILE",
    ],
    literals: &["NULL", "true", "false"],
    line_comments: &["//"],
    block_comments: &[("/*", "*/")],
    strings: &[StringRule::quoted("\""), StringRule::quoted("'")],
    operators: &[
        "<<=", ">>=", "->", "==", "!=", "<=", ">=", "&&", "||", "<<", ">>", "++", "--", "+=",
        "-=", "*=", "/=", "%=", "&=", "|=", "^=",
    ],
    number_suffixes: &[
        "ull", "ULL", "llu", "LLU", "ll", "LL", "ul", "UL", "lu", "LU", "u", "U", "l", "L", "f",
        "F",
    ],
    preprocessor: Some("#"),
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("C", &[], Engine::Table(&GRAMMAR))
}
