//! Clojure language definition
//!
//! Lisp symbols allow `-`, `?`, `!`, `*` and friends, so those bytes extend
//! identifiers instead of splitting them.

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "case", "catch", "cond", "def", "defmacro", "defmulti", "defmethod", "defn", "defonce",
        "defprotocol", "defrecord", "deftype", "do", "doseq", "dotimes", "finally", "fn", "for",
        "if", "import", "let", "letfn", "loop", "ns", "quote", "recur", "require", "throw",
        "try", "use", "var", "when", "while",
    ],
    types: &[],
    literals: &["nil", "true", "false"],
    line_comments: &[";"],
    strings: &[StringRule::quoted("\"")],
    ident_start_extra: &[b':', b'*'],
    ident_continue_extra: &[b'-', b'?', b'!', b'*', b':', b'.', b'/'],
    operators: &["->>", "->", "#(", "#{"],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Clojure", &["clj", "cljs", "edn"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_keyword_symbol() {
        let toks = scanner().tokenize("(:name user)");
        assert_eq!(toks[1].text, ":name");
        assert_eq!(toks[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_dashed_symbol() {
        let toks = scanner().tokenize("(defn find-user [id])");
        assert_eq!(toks[1].kind, TokenKind::Keyword);
        assert_eq!(toks[2].text, " ");
        assert_eq!(toks[3].text, "find-user");
    }

    #[test]
    fn test_semicolon_comment() {
        let toks = scanner().tokenize(";; header\n(+ 1 2)");
        assert_eq!(toks[0].kind, TokenKind::Comment);
        assert_eq!(toks[0].text, ";; header");
    }
}
