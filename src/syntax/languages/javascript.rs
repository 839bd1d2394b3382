//! JavaScript language definition
//!
//! Template literal holes (`${...}`) are consumed opaquely as part of the
//! string span. Regex literals are not distinguished from division; that
//! needs parser context a scanner does not have.

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
        "default", "delete", "do", "else", "export", "extends", "finally", "for", "function",
        "get", "if", "import", "in", "instanceof", "let", "new", "of", "return", "set", "static",
        "super", "switch", "this", "throw", "try", "typeof", "var", "void", "while", "with",
        "yield",
    ],
    types: &[
        "Array", "Boolean", "Date", "Error", "Function", "JSON", "Map", "Math", "Number",
        "Object", "Promise", "Proxy", "RegExp", "Set", "String", "Symbol", "WeakMap", "WeakSet",
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
    Scanner::new("JavaScript", &["js", "jsx", "node"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_template_literal_hole_is_opaque() {
        let toks = scanner().tokenize("`a ${b + {c: 1}.c} d` x");
        assert_eq!(toks[0].kind, TokenKind::String);
        assert_eq!(toks[0].text, "`a ${b + {c: 1}.c} d`");
    }

    #[test]
    fn test_bigint_suffix() {
        let toks = scanner().tokenize("10n");
        assert_eq!(toks[0].text, "10n");
        assert_eq!(toks[0].kind, TokenKind::Number);
    }

    #[test]
    fn test_dollar_identifiers() {
        let toks = scanner().tokenize("$el.value");
        assert_eq!(toks[0].kind, TokenKind::Identifier);
        assert_eq!(toks[0].text, "$el");
    }
}
