//! POSIX shell / Bash language definition
//!
//! `$` starts variable references and `${...}` expansions inside double
//! quotes stay part of the string.

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "alias", "break", "case", "cd", "continue", "declare", "do", "done", "echo", "elif",
        "else", "esac", "eval", "exec", "exit", "export", "fi", "for", "function", "if", "in",
        "local", "printf", "read", "readonly", "return", "select", "set", "shift", "source",
        "then", "trap", "unset", "until", "while",
    ],
    types: &[],
    literals: &["true", "false"],
    line_comments: &["#"],
    strings: &[
        StringRule::interpolated("\"", "${"),
        StringRule::raw("'", "'"),
        StringRule::quoted("`"),
    ],
    ident_start_extra: &[b'$'],
    ident_continue_extra: &[b'-'],
    operators: &[
        "&&", "||", ">>", "<<", "|&", "==", "!=", "-eq", "-ne", "-lt", "-gt", "-le", "-ge",
    ],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Shell", &["sh", "bash", "zsh"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_variable_reference() {
        let toks = scanner().tokenize("echo $HOME");
        assert_eq!(toks[0].kind, TokenKind::Keyword);
        assert_eq!(toks[2].text, "$HOME");
        assert_eq!(toks[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_single_quotes_are_raw() {
        let toks = scanner().tokenize(r"'a \' b'");
        assert_eq!(toks[0].kind, TokenKind::String);
        assert_eq!(toks[0].text, r"'a \'");
    }
}
