//! Perl language definition
//!
//! Sigils (`$`, `@`, `%`) start variable identifiers. `%` doubles as the
//! modulo operator; it is claimed as a sigil only when an identifier
//! character follows, which the identifier branch checks implicitly since
//! a lone `%` has nothing to continue into.

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "do", "else", "elsif", "eval", "for", "foreach", "goto", "if", "last", "local", "my",
        "next", "no", "our", "package", "redo", "require", "return", "sub", "unless", "until",
        "use", "wantarray", "while",
    ],
    types: &[],
    literals: &["undef", "__PACKAGE__", "__FILE__", "__LINE__"],
    line_comments: &["#"],
    strings: &[
        StringRule::interpolated("\"", "${"),
        StringRule::raw("'", "'"),
        StringRule::interpolated("`", "${"),
    ],
    ident_start_extra: &[b'$', b'@', b'%', b'&'],
    operators: &[
        "<=>", "**=", "||=", "//=", "&&=", "=~", "!~", "->", "=>", "==", "!=", "<=", ">=", "&&",
        "||", "//", "**", "++", "--", "+=", "-=", "*=", "/=", "..", "::",
    ],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Perl", &["pl", "pm"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_sigil_variables() {
        let toks = scanner().tokenize("my $x = @list;");
        assert!(toks.iter().any(|t| t.kind == TokenKind::Identifier && t.text == "$x"));
        assert!(toks.iter().any(|t| t.kind == TokenKind::Identifier && t.text == "@list"));
    }
}
