//! Swift language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "as", "associatedtype", "await", "break", "case", "catch", "class", "continue", "default",
        "defer", "deinit", "do", "else", "enum", "extension", "fallthrough", "fileprivate",
        "final", "for", "func", "guard", "if", "import", "in", "indirect", "init", "inout",
        "internal", "is", "lazy", "let", "mutating", "nonmutating", "open", "operator",
        "override", "private", "protocol", "public", "repeat", "required", "rethrows", "return",
        "some", "static", "struct", "subscript", "super", "switch", "throw", "throws", "try",
        "typealias", "var", "weak", "where", "while",
    ],
    types: &[
        "Any", "AnyObject", "Array", "Bool", "Character", "Dictionary", "Double", "Error",
        "Float", "Int", "Int8", "Int16", "Int32", "Int64", "Optional", "Result", "Set", "String",
        "UInt", "UInt8", "UInt16", "UInt32", "UInt64", "Void",
    ],
    literals: &["nil", "true", "false", "self", "Self"],
    line_comments: &["//"],
    block_comments: &[("/*", "*/")],
    nested_comments: true,
    strings: &[
        StringRule::quoted("\"\"\""),
        StringRule::quoted("\""),
    ],
    ident_start_extra: &[b'@', b'$'],
    operators: &[
        "...", "..<", "->", "==", "!=", "<=", ">=", "&&", "||", "??", "+=", "-=", "*=", "/=",
        "%=", "<<", ">>",
    ],
    preprocessor: Some("#"),
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Swift", &[], Engine::Table(&GRAMMAR))
}
