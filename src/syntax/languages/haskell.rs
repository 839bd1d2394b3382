//! Haskell language definition
//!
//! Comments nest, primes are legal in names, and capitalised words are
//! constructors or types, which `caps_are_types` approximates.

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "case", "class", "data", "default", "deriving", "do", "else", "foreign", "hiding", "if",
        "import", "in", "infix", "infixl", "infixr", "instance", "let", "module", "newtype", "of",
        "qualified", "then", "type", "where",
    ],
    types: &[],
    literals: &["True", "False", "Nothing", "Just", "Left", "Right"],
    caps_are_types: true,
    line_comments: &["--"],
    block_comments: &[("{-", "-}")],
    nested_comments: true,
    strings: &[StringRule::quoted("\""), StringRule::quoted("'")],
    ident_continue_extra: &[b'\''],
    operators: &[
        "::", "->", "<-", "=>", ">>=", ">>", "=<<", "<$>", "<*>", "++", "==", "/=", "<=", ">=",
        "&&", "||", "..", "$", ".",
    ],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Haskell", &["hs"], Engine::Table(&GRAMMAR))
}
