//! YAML scanner
//!
//! Keys are positional (left of `:`), indentation is structure, and `-`
//! introduces sequence items, so YAML gets a line-oriented scanner.

use crate::syntax::cursor::Cursor;
use crate::syntax::{Engine, Scanner, Token, TokenKind};

pub fn scanner() -> Scanner {
    Scanner::new("YAML", &["yml"], Engine::Custom(scan))
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

    if line.starts_with("---") || line.starts_with("...") {
        tokens.push(Token::new(TokenKind::Preprocessor, line));
        return;
    }

    let start = cur.pos();
    cur.eat_while(|b| b == b' ' || b == b'\t');
    if cur.pos() > start {
        tokens.push(Token::new(TokenKind::Text, cur.slice(start)));
    }

    // Sequence item markers, possibly several for nested inline lists
    while cur.peek() == b'-' && matches!(cur.peek2(), b' ' | b'\n' | 0) {
        let p = cur.pos();
        cur.advance(1);
        cur.eat_while(|b| b == b' ');
        tokens.push(Token::new(TokenKind::Operator, cur.slice(p)));
    }

    // key: value
    let key_start = cur.pos();
    let mut probe = cur;
    probe.eat_while(|b| !matches!(b, b':' | b'#' | b'\n'));
    if probe.peek() == b':' && matches!(probe.peek_at(1), b' ' | b'\n' | 0) {
        cur.eat_while(|b| !matches!(b, b':' | b'#' | b'\n'));
        if cur.pos() > key_start {
            tokens.push(Token::new(TokenKind::Type, cur.slice(key_start)));
        }
        let p = cur.pos();
        cur.advance(1);
        tokens.push(Token::new(TokenKind::Punctuation, cur.slice(p)));
    }

    scan_value(&mut cur, tokens);
}

fn scan_value<'a>(cur: &mut Cursor<'a>, tokens: &mut Vec<Token<'a>>) {
    while !cur.is_eof() {
        let start = cur.pos();
        let b = cur.peek();
        if b == b'#' {
            cur.eat_to_eol();
            tokens.push(Token::new(TokenKind::Comment, cur.slice(start)));
        } else if b == b'"' || b == b'\'' {
            cur.advance(1);
            while !cur.is_eof() && cur.peek() != b {
                if b == b'"' && cur.peek() == b'\\' {
                    cur.advance(1);
                }
                cur.advance_char();
            }
            if !cur.is_eof() {
                cur.advance(1);
            }
            tokens.push(Token::new(TokenKind::String, cur.slice(start)));
        } else if b == b'&' || b == b'*' || b == b'!' {
            // Anchors, aliases, tags
            cur.advance(1);
            cur.eat_while(|c| c.is_ascii_alphanumeric() || c == b'_' || c == b'-' || c == b'!');
            tokens.push(Token::new(TokenKind::Identifier, cur.slice(start)));
        } else if b.is_ascii_digit() || (b == b'-' && cur.peek2().is_ascii_digit()) {
            cur.advance(1);
            cur.eat_while(|c| c.is_ascii_alphanumeric() || c == b'.' || c == b'_' || c == b':');
            tokens.push(Token::new(TokenKind::Number, cur.slice(start)));
        } else if b.is_ascii_alphabetic() {
            cur.eat_while(|c| !matches!(c, b'#' | b'\n'));
            let word = cur.slice(start);
            let kind = match word.trim_end() {
                "true" | "false" | "null" | "yes" | "no" | "on" | "off" | "~" => TokenKind::Keyword,
                _ => TokenKind::Text,
            };
            tokens.push(Token::new(kind, word));
        } else {
            cur.advance_char();
            tokens.push(Token::new(TokenKind::Text, cur.slice(start)));
        }
    }
}
