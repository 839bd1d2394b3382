//! Windows batch file definition
//!
//! `REM` is a command, not a lexical comment, so only the `::` label
//! convention is treated as one; `REM` itself is in the keyword table.

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "call", "cd", "cls", "copy", "del", "do", "echo", "else", "endlocal", "errorlevel",
        "exist", "exit", "for", "goto", "if", "in", "md", "mkdir", "move", "not", "pause", "rd",
        "rem", "ren", "set", "setlocal", "shift", "start", "title", "type",
    ],
    types: &[],
    literals: &["on", "off", "nul"],
    case_insensitive: true,
    line_comments: &["::"],
    strings: &[StringRule::quoted("\"")],
    ident_start_extra: &[b'%'],
    ident_continue_extra: &[b'%'],
    operators: &["==", "&&", "||", ">>"],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Batch", &["bat", "cmd"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_variable_expansion() {
        let toks = scanner().tokenize("echo %PATH%");
        assert_eq!(toks[0].kind, TokenKind::Keyword);
        assert_eq!(toks[2].text, "%PATH%");
    }

    #[test]
    fn test_double_colon_comment() {
        let toks = scanner().tokenize(":: setup\ncls");
        assert_eq!(toks[0].kind, TokenKind::Comment);
        assert_eq!(toks[0].text, ":: setup");
    }
}
