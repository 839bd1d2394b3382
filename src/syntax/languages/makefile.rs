//! Makefile scanner
//!
//! Position decides everything: a word at column zero ending in `:` is a
//! target, a tab-led line is a recipe, and `$(...)` expands anywhere. None
//! of that fits a word-table grammar.

use crate::syntax::cursor::Cursor;
use crate::syntax::{Engine, Scanner, Token, TokenKind};

pub fn scanner() -> Scanner {
    Scanner::new("Makefile", &["make", "mk", "gnumake"], Engine::Custom(scan))
}

const DIRECTIVES: &[&str] = &[
    "ifeq", "ifneq", "ifdef", "ifndef", "else", "endif", "include", "-include", "define",
    "endef", "export", "unexport", "override", "vpath",
];

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b'.' || b == b'/' || b >= 0x80
}

fn scan(src: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < src.len() {
        let line_end = src[pos..]
            .find('\n')
            .map(|i| pos + i + 1)
            .unwrap_or(src.len());
        scan_line(&src[pos..line_end], &mut tokens);
        pos = line_end;
    }
    tokens
}

fn scan_line<'a>(line: &'a str, tokens: &mut Vec<Token<'a>>) {
    let mut cur = Cursor::new(line);

    // Recipe lines keep their literal text apart from comments and $() refs
    let recipe = cur.peek() == b'\t';

    while !cur.is_eof() {
        let start = cur.pos();
        let b = cur.peek();

        if b == b'#' {
            cur.eat_to_eol();
            tokens.push(Token::new(TokenKind::Comment, cur.slice(start)));
        } else if b == b'$' && matches!(cur.peek2(), b'(' | b'{') {
            let close = if cur.peek2() == b'(' { b')' } else { b'}' };
            cur.advance(2);
            cur.eat_while(|c| c != close && c != b'\n');
            if cur.peek() == close {
                cur.advance(1);
            }
            tokens.push(Token::new(TokenKind::Identifier, cur.slice(start)));
        } else if b == b'$' {
            // Automatic variables: $@, $<, $^, $*
            cur.advance(1);
            cur.advance_char();
            tokens.push(Token::new(TokenKind::Identifier, cur.slice(start)));
        } else if recipe {
            cur.eat_while(|c| c != b'$' && c != b'#' && c != b'\n');
            if cur.pos() == start {
                cur.advance_char();
            }
            tokens.push(Token::new(TokenKind::Text, cur.slice(start)));
        } else if b.is_ascii_whitespace() {
            cur.eat_while(|c| c.is_ascii_whitespace());
            tokens.push(Token::new(TokenKind::Text, cur.slice(start)));
        } else if is_word_byte(b) {
            cur.eat_while(is_word_byte);
            let word = cur.slice(start);
            let kind = if DIRECTIVES.contains(&word) {
                TokenKind::Keyword
            } else if start == 0 && cur.peek() == b':' && cur.peek2() != b'=' {
                TokenKind::Type
            } else {
                TokenKind::Identifier
            };
            tokens.push(Token::new(kind, word));
        } else if matches!(b, b'=' | b':' | b'?' | b'+')
            && (b == b'=' || cur.peek2() == b'=' || b == b':')
        {
            // Assignment operators := ?= += = and the target colon
            if cur.peek2() == b'=' && b != b'=' {
                cur.advance(2);
                tokens.push(Token::new(TokenKind::Operator, cur.slice(start)));
            } else if b == b':' {
                cur.advance(1);
                tokens.push(Token::new(TokenKind::Punctuation, cur.slice(start)));
            } else {
                cur.advance(1);
                tokens.push(Token::new(TokenKind::Operator, cur.slice(start)));
            }
        } else {
            cur.advance_char();
            tokens.push(Token::new(TokenKind::Text, cur.slice(start)));
        }
    }
}
