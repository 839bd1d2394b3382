//! Dart language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "abstract", "as", "assert", "async", "await", "base", "break", "case", "catch", "class",
        "const", "continue", "covariant", "default", "deferred", "do", "dynamic", "else", "enum",
        "export", "extends", "extension", "external", "factory", "final", "finally", "for", "get",
        "hide", "if", "implements", "import", "in", "interface", "is", "late", "library", "mixin",
        "new", "on", "operator", "part", "required", "rethrow", "return", "sealed", "set", "show",
        "static", "super", "switch", "sync", "this", "throw", "try", "typedef", "var", "void",
        "when", "while", "with", "yield",
    ],
    types: &[
        "bool", "double", "int", "num", "Duration", "Function", "Future", "Iterable", "List",
        "Map", "Never", "Object", "Set", "Stream", "String", "Symbol",
    ],
    literals: &["null", "true", "false"],
    line_comments: &["///", "//"],
    block_comments: &[("/*", "*/")],
    nested_comments: true,
    strings: &[
        StringRule::quoted("\"\"\""),
        StringRule::quoted("'''"),
        StringRule::raw("r\"", "\""),
        StringRule::raw("r'", "'"),
        StringRule::interpolated("\"", "${"),
        StringRule::interpolated("'", "${"),
    ],
    operators: &[
        "??=", "??", "?.", "...", "=>", "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=",
        "-=", "*=", "/=", "~/", "<<", ">>",
    ],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Dart", &[], Engine::Table(&GRAMMAR))
}
