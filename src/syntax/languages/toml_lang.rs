//! TOML language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[],
    types: &[],
    literals: &["true", "false", "inf", "nan"],
    line_comments: &["#"],
    strings: &[
        StringRule::quoted("\"\"\""),
        StringRule::raw("'''", "'''"),
        StringRule::quoted("\""),
        StringRule::raw("'", "'"),
    ],
    ident_continue_extra: &[b'-'],
    operators: &[],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("TOML", &[], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_key_value() {
        let toks = scanner().tokenize("log-level = \"debug\" # note");
        assert_eq!(toks[0].text, "log-level");
        assert_eq!(toks[0].kind, TokenKind::Identifier);
        assert!(toks.iter().any(|t| t.kind == TokenKind::String));
        assert_eq!(toks.last().unwrap().kind, TokenKind::Comment);
    }

    #[test]
    fn test_literal_string() {
        let toks = scanner().tokenize("path = 'C:\\dir'");
        assert_eq!(toks.last().unwrap().text, "'C:\\dir'");
    }
}
