//! PHP scanner
//!
//! PHP embeds in host text: everything outside `<?php ... ?>` passes
//! through untouched, and the code regions use the table engine with a PHP
//! grammar.

use crate::syntax::cursor::Cursor;
use crate::syntax::grammar::{self, Grammar, ScanState};
use crate::syntax::{Engine, Scanner, StringRule, Token, TokenKind};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "abstract", "array", "as", "break", "callable", "case", "catch", "class", "clone",
        "const", "continue", "declare", "default", "do", "echo", "else", "elseif", "empty",
        "enum", "extends", "final", "finally", "fn", "for", "foreach", "function", "global",
        "goto", "if", "implements", "include", "include_once", "instanceof", "insteadof",
        "interface", "isset", "list", "match", "namespace", "new", "print", "private",
        "protected", "public", "readonly", "require", "require_once", "return", "static",
        "switch", "throw", "trait", "try", "unset", "use", "var", "while", "yield",
    ],
    types: &["bool", "float", "int", "iterable", "mixed", "object", "string", "void"],
    literals: &["null", "true", "false", "NULL", "TRUE", "FALSE", "this", "self", "parent"],
    line_comments: &["//", "#"],
    block_comments: &[("/*", "*/")],
    strings: &[
        StringRule::interpolated("\"", "{$"),
        StringRule::raw("'", "'"),
        StringRule::quoted("`"),
    ],
    ident_start_extra: &[b'$'],
    operators: &[
        "===", "!==", "<=>", "??=", "?->", "...", "==", "!=", "<=", ">=", "&&", "||", "??",
        "->", "=>", "::", "++", "--", "+=", "-=", "*=", "/=", ".=", "**", "<<", ">>",
    ],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("PHP", &["php7", "php8", "phtml"], Engine::Custom(scan))
}

fn scan(src: &str) -> Vec<Token<'_>> {
    let mut cur = Cursor::new(src);
    let mut tokens = Vec::new();
    while !cur.is_eof() {
        let start = cur.pos();
        // Host text until an opening tag
        while !cur.is_eof() && !cur.starts_with("<?") {
            cur.advance_char();
        }
        if cur.pos() > start {
            tokens.push(Token::new(TokenKind::Text, cur.slice(start)));
        }
        if cur.is_eof() {
            break;
        }

        let tag_start = cur.pos();
        let tag_len = if cur.starts_with("<?php") {
            5
        } else if cur.starts_with("<?=") {
            3
        } else {
            2
        };
        cur.advance(tag_len);
        tokens.push(Token::new(TokenKind::Preprocessor, cur.slice(tag_start)));

        scan_code(&mut cur, &mut tokens);
    }
    tokens
}

/// Table-scan a code region up to `?>` or end of input
fn scan_code<'a>(cur: &mut Cursor<'a>, tokens: &mut Vec<Token<'a>>) {
    let mut state = ScanState::default();
    while !cur.is_eof() {
        if cur.starts_with("?>") {
            let p = cur.pos();
            cur.advance(2);
            tokens.push(Token::new(TokenKind::Preprocessor, cur.slice(p)));
            return;
        }
        match grammar::next_token(cur, &GRAMMAR, &mut state) {
            Some(token) => tokens.push(token),
            None => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<(TokenKind, &str)> {
        scan(src).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_host_and_code() {
        let toks = kinds("<h1><?php echo $title; ?></h1>");
        assert_eq!(toks[0], (TokenKind::Text, "<h1>"));
        assert_eq!(toks[1], (TokenKind::Preprocessor, "<?php"));
        assert!(toks.contains(&(TokenKind::Keyword, "echo")));
        assert!(toks.contains(&(TokenKind::Identifier, "$title")));
        assert!(toks.contains(&(TokenKind::Preprocessor, "?>")));
        assert_eq!(toks.last(), Some(&(TokenKind::Text, "</h1>")));
    }

    #[test]
    fn test_short_echo_tag() {
        let toks = kinds("<?= $x ?>");
        assert_eq!(toks[0], (TokenKind::Preprocessor, "<?="));
        assert!(toks.contains(&(TokenKind::Identifier, "$x")));
    }

    #[test]
    fn test_unclosed_code_region() {
        let toks = kinds("<?php $a = 1;");
        let joined: String = toks.iter().map(|(_, t)| *t).collect();
        assert_eq!(joined, "<?php $a = 1;");
    }

    #[test]
    fn test_pure_host_text() {
        let toks = kinds("no php here");
        assert_eq!(toks, vec![(TokenKind::Text, "no php here")]);
    }
}
