//! Scala language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "abstract", "case", "catch", "class", "def", "do", "else", "enum", "extends", "extension",
        "final", "finally", "for", "given", "if", "implicit", "import", "lazy", "match", "new",
        "object", "override", "package", "private", "protected", "return", "sealed", "super",
        "then", "this", "throw", "trait", "try", "type", "using", "val", "var", "while", "with",
        "yield",
    ],
    types: &[
        "Any", "AnyRef", "AnyVal", "Array", "Boolean", "Byte", "Char", "Double", "Either",
        "Float", "Int", "List", "Long", "Map", "Option", "Seq", "Set", "Short", "String",
        "Unit", "Vector",
    ],
    literals: &["null", "true", "false", "None", "Some", "Nil"],
    line_comments: &["//"],
    block_comments: &[("/*", "*/")],
    nested_comments: true,
    strings: &[
        StringRule::quoted("\"\"\""),
        StringRule {
            open: "s\"",
            close: "\"",
            escape: true,
            interpolation: Some("${"),
        },
        StringRule {
            open: "f\"",
            close: "\"",
            escape: true,
            interpolation: Some("${"),
        },
        StringRule::raw("raw\"", "\""),
        StringRule::quoted("\""),
        StringRule::quoted("'"),
    ],
    operators: &[
        "=>", "<-", "->", ":::", "::", "==", "!=", "<=", ">=", "&&", "||", "++", "+=", "-=",
        "<:", ">:", "<<", ">>",
    ],
    number_suffixes: &["L", "l", "f", "F", "d", "D"],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Scala", &["sc", "sbt"], Engine::Table(&GRAMMAR))
}
