//! Ruby language definition
//!
//! `#{...}` interpolation holes are consumed opaquely inside double-quoted
//! strings; single-quoted strings do not interpolate.

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "alias", "and", "begin", "break", "case", "class", "def", "defined?", "do", "else",
        "elsif", "end", "ensure", "for", "if", "in", "module", "next", "not", "or", "redo",
        "require", "require_relative", "rescue", "retry", "return", "super", "then", "undef",
        "unless", "until", "when", "while", "yield",
    ],
    types: &[
        "Array", "Hash", "String", "Symbol", "Integer", "Float", "Numeric", "Range", "Regexp",
        "Proc", "Struct", "Object", "Class", "Module", "Kernel", "Comparable", "Enumerable",
    ],
    literals: &["nil", "true", "false", "self", "__FILE__", "__LINE__"],
    line_comments: &["#"],
    block_comments: &[("=begin", "=end")],
    strings: &[
        StringRule::interpolated("\"", "#{"),
        StringRule::raw("'", "'"),
        StringRule::interpolated("`", "#{"),
    ],
    ident_start_extra: &[b'@', b'$'],
    ident_continue_extra: &[b'@', b'?', b'!'],
    operators: &[
        "<=>", "===", "**=", "<<=", ">>=", "=~", "!~", "==", "!=", "<=", ">=", "&&", "||", "**",
        "<<", ">>", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "::", "..", "=>",
    ],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Ruby", &["rb"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_interpolation_is_part_of_string() {
        let toks = scanner().tokenize("\"sum: #{a + b}\" end");
        assert_eq!(toks[0].kind, TokenKind::String);
        assert_eq!(toks[0].text, "\"sum: #{a + b}\"");
    }

    #[test]
    fn test_instance_variable() {
        let toks = scanner().tokenize("@name = nil");
        assert_eq!(toks[0].kind, TokenKind::Identifier);
        assert_eq!(toks[0].text, "@name");
        assert_eq!(toks.last().unwrap().kind, TokenKind::Keyword);
    }

    #[test]
    fn test_comment_not_interpolation() {
        let toks = scanner().tokenize("x # note");
        assert_eq!(toks.last().unwrap().kind, TokenKind::Comment);
    }
}
