//! Elixir language definition
//!
//! Module names are capitalised atoms, so `caps_are_types` highlights them.
//! Module attributes keep their `@` via the sigil byte.

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "after", "alias", "and", "case", "catch", "cond", "def", "defdelegate", "defexception",
        "defguard", "defimpl", "defmacro", "defmacrop", "defmodule", "defoverridable", "defp",
        "defprotocol", "defstruct", "do", "else", "end", "fn", "for", "if", "import", "in",
        "not", "or", "quote", "raise", "receive", "require", "rescue", "send", "spawn",
        "super", "then", "throw", "try", "unless", "unquote", "use", "when", "with",
    ],
    types: &[],
    literals: &["nil", "true", "false", "self", "__MODULE__", "__DIR__", "__ENV__"],
    caps_are_types: true,
    line_comments: &["#"],
    strings: &[
        StringRule::quoted("\"\"\""),
        StringRule::interpolated("\"", "#{"),
        StringRule::quoted("'"),
    ],
    ident_start_extra: &[b'@'],
    ident_continue_extra: &[b'?', b'!'],
    operators: &[
        "|>", "->", "<-", "=>", "===", "!==", "==", "!=", "<=", ">=", "&&", "||", "++", "--",
        "<>", "::", "..", "\\\\", "&",
    ],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Elixir", &["ex", "exs"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_module_attribute() {
        let toks = scanner().tokenize("@moduledoc \"docs\"");
        assert_eq!(toks[0].text, "@moduledoc");
        assert_eq!(toks[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_interpolated_string() {
        let toks = scanner().tokenize("\"hi #{name}\" |> IO.puts");
        assert_eq!(toks[0].text, "\"hi #{name}\"");
        assert!(toks.iter().any(|t| t.text == "|>"));
        assert!(toks.iter().any(|t| t.kind == TokenKind::Type && t.text == "IO"));
    }
}
