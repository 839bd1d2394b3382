//! R language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "break", "else", "for", "function", "if", "in", "library", "next", "repeat", "require",
        "return", "while",
    ],
    types: &[
        "character", "complex", "data.frame", "double", "factor", "integer", "list", "logical",
        "matrix", "numeric", "vector",
    ],
    literals: &[
        "NULL", "NA", "NA_integer_", "NA_real_", "NA_character_", "TRUE", "FALSE", "Inf", "NaN",
    ],
    line_comments: &["#"],
    strings: &[StringRule::quoted("\""), StringRule::quoted("'")],
    ident_continue_extra: &[b'.'],
    operators: &[
        "%in%", "%%", "%/%", "%*%", "<<-", "->>", "<-", "->", "==", "!=", "<=", ">=", "&&", "||",
        "::", "|>",
    ],
    number_suffixes: &["L", "i"],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("R", &["rlang"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_assignment_arrow() {
        let toks = scanner().tokenize("x <- 1L");
        assert_eq!(toks[2].text, "<-");
        assert_eq!(toks[4].text, "1L");
        assert_eq!(toks[4].kind, TokenKind::Number);
    }
}
