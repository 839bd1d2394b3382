//! Python language definition
//!
//! f-string holes are left opaque: a bare `{` is common inside ordinary
//! strings (dict displays in docstrings, `str.format` templates), so brace
//! tracking would misfire more than it helps.

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del",
        "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is",
        "lambda", "match", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
        "with", "yield",
    ],
    types: &[
        "int", "float", "complex", "str", "bytes", "bytearray", "bool", "list", "tuple", "dict",
        "set", "frozenset", "object", "type",
    ],
    literals: &["None", "True", "False", "Ellipsis", "NotImplemented", "self", "cls"],
    line_comments: &["#"],
    strings: &[
        // Triple-quoted forms before their single-quote prefixes
        StringRule {
            open: "f\"\"\"",
            close: "\"\"\"",
            escape: true,
            interpolation: None,
        },
        StringRule {
            open: "f'''",
            close: "'''",
            escape: true,
            interpolation: None,
        },
        StringRule::quoted("\"\"\""),
        StringRule::quoted("'''"),
        StringRule {
            open: "f\"",
            close: "\"",
            escape: true,
            interpolation: None,
        },
        StringRule {
            open: "f'",
            close: "'",
            escape: true,
            interpolation: None,
        },
        StringRule {
            open: "b\"",
            close: "\"",
            escape: true,
            interpolation: None,
        },
        StringRule {
            open: "b'",
            close: "'",
            escape: true,
            interpolation: None,
        },
        StringRule::raw("r\"", "\""),
        StringRule::raw("r'", "'"),
        StringRule::quoted("\""),
        StringRule::quoted("'"),
    ],
    operators: &[
        "//=", "**=", "<<=", ">>=", "->", ":=", "==", "!=", "<=", ">=", "//", "**", "<<", ">>",
        "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "@=",
    ],
    number_suffixes: &["j", "J"],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Python", &["py", "python3"], Engine::Table(&GRAMMAR))
}
