//! Groovy language definition (also serves Gradle build scripts)

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "abstract", "as", "assert", "break", "case", "catch", "class", "const", "continue",
        "def", "default", "do", "else", "enum", "extends", "final", "finally", "for", "goto",
        "if", "implements", "import", "in", "instanceof", "interface", "it", "native", "new",
        "package", "private", "protected", "public", "return", "static", "super", "switch",
        "synchronized", "this", "throw", "throws", "trait", "transient", "try", "var", "void",
        "volatile", "while",
    ],
    types: &[
        "BigDecimal", "BigInteger", "Boolean", "Closure", "Double", "Integer", "List", "Long",
        "Map", "Object", "String", "boolean", "byte", "char", "double", "float", "int", "long",
        "short",
    ],
    literals: &["null", "true", "false"],
    line_comments: &["//"],
    block_comments: &[("/*", "*/")],
    strings: &[
        StringRule::interpolated("\"\"\"", "${"),
        StringRule::quoted("'''"),
        StringRule::interpolated("\"", "${"),
        StringRule::quoted("'"),
    ],
    operators: &[
        "<=>", "==~", "=~", "?:", "?.", "*.", ".&", "..<", "..", "==", "!=", "<=", ">=", "&&",
        "||", "++", "--", "+=", "-=", "*=", "/=", "**", "<<", ">>",
    ],
    number_suffixes: &["G", "g", "L", "l", "I", "i", "D", "d", "F", "f"],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Groovy", &["gradle"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_gstring() {
        let toks = scanner().tokenize("\"v${version}\"");
        assert_eq!(toks[0].kind, TokenKind::String);
        assert_eq!(toks[0].text, "\"v${version}\"");
    }

    #[test]
    fn test_spaceship() {
        let toks = scanner().tokenize("a <=> b");
        assert_eq!(toks[2].text, "<=>");
    }
}
