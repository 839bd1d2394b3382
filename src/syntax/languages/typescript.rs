//! TypeScript language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "abstract", "any", "as", "asserts", "async", "await", "break", "case", "catch", "class",
        "const", "continue", "debugger", "declare", "default", "delete", "do", "else", "enum",
        "export", "extends", "finally", "for", "from", "function", "get", "if", "implements",
        "import", "in", "infer", "instanceof", "interface", "is", "keyof", "let", "namespace",
        "new", "of", "override", "private", "protected", "public", "readonly", "return",
        "satisfies", "set", "static", "super", "switch", "this", "throw", "try", "type", "typeof",
        "var", "void", "while", "with", "yield",
    ],
    types: &[
        "string", "number", "boolean", "object", "symbol", "bigint", "unknown", "never",
        "Array", "Promise", "Record", "Partial", "Required", "Readonly", "Pick", "Omit", "Map",
        "Set",
    ],
    literals: &["null", "undefined", "true", "false", "NaN", "Infinity"],
    line_comments: &["//"],
    block_comments: &[("/*", "*/")],
    strings: &[
        StringRule::interpolated("`", "${"),
        StringRule::quoted("\""),
        StringRule::quoted("'"),
    ],
    ident_start_extra: &[b'$'],
    ident_continue_extra: &[b'$'],
    operators: &[
        ">>>=", "===", "!==", "**=", "<<=", ">>=", "&&=", "||=", "??=", "...", ">>>", "=>", "==",
        "!=", "<=", ">=", "&&", "||", "??", "?.", "**", "<<", ">>", "++", "--", "+=", "-=", "*=",
        "/=", "%=", "&=", "|=", "^=",
    ],
    number_suffixes: &["n"],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("TypeScript", &["ts", "tsx"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_type_annotation() {
        let toks = scanner().tokenize("let n: number = 1;");
        assert!(toks.iter().any(|t| t.kind == TokenKind::Type && t.text == "number"));
    }
}
