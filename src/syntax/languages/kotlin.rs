//! Kotlin language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "abstract", "actual", "annotation", "as", "break", "by", "catch", "class", "companion",
        "const", "constructor", "continue", "crossinline", "data", "do", "else", "enum", "expect",
        "external", "final", "finally", "for", "fun", "get", "if", "import", "in", "infix",
        "init", "inline", "inner", "interface", "internal", "is", "lateinit", "noinline",
        "object", "open", "operator", "out", "override", "package", "private", "protected",
        "public", "reified", "return", "sealed", "set", "super", "suspend", "tailrec", "this",
        "throw", "try", "typealias", "val", "var", "vararg", "when", "where", "while",
    ],
    types: &[
        "Any", "Array", "Boolean", "Byte", "Char", "Double", "Float", "Int", "List", "Long",
        "Map", "MutableList", "MutableMap", "MutableSet", "Nothing", "Set", "Short", "String",
        "Unit",
    ],
    literals: &["null", "true", "false"],
    line_comments: &["//"],
    block_comments: &[("/*", "*/")],
    nested_comments: true,
    strings: &[
        StringRule::quoted("\"\"\""),
        StringRule::interpolated("\"", "${"),
        StringRule::quoted("'"),
    ],
    ident_start_extra: &[b'@'],
    operators: &[
        "===", "!==", "?:", "?.", "!!", "->", "==", "!=", "<=", ">=", "&&", "||", "++", "--",
        "+=", "-=", "*=", "/=", "%=", "..",
    ],
    number_suffixes: &["uL", "UL", "u", "U", "L", "f", "F"],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Kotlin", &["kt", "kts"], Engine::Table(&GRAMMAR))
}
