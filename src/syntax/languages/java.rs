//! Java language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "abstract", "assert", "break", "case", "catch", "class", "const", "continue", "default",
        "do", "else", "enum", "extends", "final", "finally", "for", "goto", "if", "implements",
        "import", "instanceof", "interface", "native", "new", "package", "private", "protected",
        "public", "record", "return", "sealed", "static", "strictfp", "super", "switch",
        "synchronized", "this", "throw", "throws", "transient", "try", "var", "volatile", "while",
        "yield",
    ],
    types: &[
        "boolean", "byte", "char", "double", "float", "int", "long", "short", "void", "String",
        "Object", "Integer", "Long", "Double", "Float", "Boolean", "Character", "List", "Map",
        "Set", "Optional",
    ],
    literals: &["null", "true", "false"],
    line_comments: &["//"],
    block_comments: &[("/*", "*/")],
    strings: &[
        StringRule::quoted("\"\"\""),
        StringRule::quoted("\""),
        StringRule::quoted("'"),
    ],
    operators: &[
        ">>>=", "<<=", ">>=", ">>>", "->", "::", "==", "!=", "<=", ">=", "&&", "||", "<<", ">>",
        "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
    ],
    number_suffixes: &["l", "L", "f", "F", "d", "D"],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Java", &[], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_text_block() {
        let toks = scanner().tokenize("\"\"\"\nhello \"quoted\"\n\"\"\" x");
        assert_eq!(toks[0].kind, TokenKind::String);
        assert_eq!(toks[0].text, "\"\"\"\nhello \"quoted\"\n\"\"\"");
    }

    #[test]
    fn test_method_reference() {
        let toks = scanner().tokenize("List::of");
        assert_eq!(toks[1].text, "::");
        assert_eq!(toks[0].kind, TokenKind::Type);
    }
}
