//! OCaml language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "and", "as", "assert", "begin", "class", "constraint", "do", "done", "downto", "else",
        "end", "exception", "external", "for", "fun", "function", "functor", "if", "in",
        "include", "inherit", "lazy", "let", "match", "method", "module", "mutable", "new",
        "object", "of", "open", "private", "rec", "sig", "struct", "then", "to", "try", "type",
        "val", "virtual", "when", "while", "with",
    ],
    types: &[
        "array", "bool", "bytes", "char", "exn", "float", "int", "int32", "int64", "list",
        "option", "ref", "string", "unit",
    ],
    literals: &["true", "false", "None", "Some"],
    caps_are_types: true,
    block_comments: &[("(*", "*)")],
    nested_comments: true,
    strings: &[StringRule::quoted("\""), StringRule::raw("{|", "|}")],
    ident_continue_extra: &[b'\''],
    operators: &[
        "->", "<-", ":=", "::", "@@", "|>", "==", "<>", "<=", ">=", "&&", "||", "+.", "-.", "*.",
        "/.", "^",
    ],
    number_suffixes: &["l", "L", "n"],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("OCaml", &["ml", "mli"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_comment_is_not_operator() {
        let toks = scanner().tokenize("(* note *) let x = 1");
        assert_eq!(toks[0].kind, TokenKind::Comment);
        assert_eq!(toks[0].text, "(* note *)");
    }

    #[test]
    fn test_quoted_string_literal() {
        let toks = scanner().tokenize("{|no \\escapes|}");
        assert_eq!(toks[0].kind, TokenKind::String);
        assert_eq!(toks[0].text, "{|no \\escapes|}");
    }
}
