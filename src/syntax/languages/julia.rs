//! Julia language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "abstract", "baremodule", "begin", "break", "catch", "const", "continue", "do", "else",
        "elseif", "end", "export", "finally", "for", "function", "global", "if", "import", "in",
        "let", "local", "macro", "module", "mutable", "primitive", "quote", "return", "struct",
        "try", "type", "using", "where", "while",
    ],
    types: &[
        "AbstractString", "Any", "Array", "Bool", "Char", "Complex", "Dict", "Float32",
        "Float64", "Int", "Int128", "Int16", "Int32", "Int64", "Int8", "Integer", "Matrix",
        "Nothing", "Number", "Rational", "Real", "Set", "String", "Symbol", "Tuple", "UInt",
        "UInt8", "Union", "Vector",
    ],
    literals: &["nothing", "missing", "true", "false", "Inf", "NaN"],
    caps_are_types: true,
    line_comments: &["#"],
    block_comments: &[("#=", "=#")],
    nested_comments: true,
    strings: &[
        StringRule::quoted("\"\"\""),
        StringRule::interpolated("\"", "$("),
        StringRule::quoted("'"),
        StringRule::raw("`", "`"),
    ],
    ident_start_extra: &[b'@'],
    ident_continue_extra: &[b'!'],
    operators: &[
        "===", "!==", "==", "!=", "<=", ">=", "&&", "||", "->", "=>", "::", "<:", ">:", ".+",
        ".-", ".*", "./", ".^", "//", "^",
    ],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Julia", &["jl"], Engine::Table(&GRAMMAR))
}
