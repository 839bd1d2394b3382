//! Markdown scanner
//!
//! Markdown is line-oriented: a line's leading characters decide whether it
//! is a heading, a quote, a list item, or a fence, and inline spans never
//! cross a line break. The scanner classifies line by line and hands the
//! remainder to an inline pass.

use crate::syntax::cursor::Cursor;
use crate::syntax::{Engine, Scanner, Token, TokenKind};

pub fn scanner() -> Scanner {
    Scanner::new("Markdown", &["md", "mdown"], Engine::Custom(scan))
}

fn scan(src: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut in_fence = false;
    while pos < src.len() {
        let line_end = src[pos..]
            .find('\n')
            .map(|i| pos + i + 1)
            .unwrap_or(src.len());
        let line = &src[pos..line_end];
        scan_line(line, &mut in_fence, &mut tokens);
        pos = line_end;
    }
    tokens
}

fn scan_line<'a>(line: &'a str, in_fence: &mut bool, tokens: &mut Vec<Token<'a>>) {
    let trimmed = line.trim_start();

    if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
        *in_fence = !*in_fence;
        tokens.push(Token::new(TokenKind::Preprocessor, line));
        return;
    }
    if *in_fence {
        tokens.push(Token::new(TokenKind::Text, line));
        return;
    }
    if trimmed.starts_with('#') {
        tokens.push(Token::new(TokenKind::Keyword, line));
        return;
    }
    if trimmed.starts_with('>') {
        tokens.push(Token::new(TokenKind::Comment, line));
        return;
    }

    // List marker: -, *, + or `1.` followed by a space
    let indent_len = line.len() - trimmed.len();
    let marker_len = list_marker_len(trimmed);
    if marker_len > 0 {
        let split = indent_len + marker_len;
        tokens.push(Token::new(TokenKind::Operator, &line[..split]));
        scan_inline(&line[split..], tokens);
        return;
    }

    scan_inline(line, tokens);
}

/// Length of a leading list marker including its trailing space, or 0
fn list_marker_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b'-' | b'*' | b'+') if bytes.get(1) == Some(&b' ') => 2,
        Some(b'0'..=b'9') => {
            let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
            if bytes.get(digits) == Some(&b'.') && bytes.get(digits + 1) == Some(&b' ') {
                digits + 2
            } else {
                0
            }
        }
        _ => 0,
    }
}

/// Inline spans: code, emphasis, links; everything else is plain text
fn scan_inline<'a>(text: &'a str, tokens: &mut Vec<Token<'a>>) {
    let mut cur = Cursor::new(text);
    while !cur.is_eof() {
        let start = cur.pos();
        match cur.peek() {
            b'`' => {
                cur.advance(1);
                cur.eat_while(|b| b != b'`' && b != b'\n');
                if cur.peek() == b'`' {
                    cur.advance(1);
                }
                tokens.push(Token::new(TokenKind::String, cur.slice(start)));
            }
            b'*' | b'_' => {
                let delim = cur.peek();
                let run = if cur.peek2() == delim { 2 } else { 1 };
                match find_span(&text[cur.pos()..], delim, run) {
                    Some(len) => {
                        cur.advance(len);
                        tokens.push(Token::new(TokenKind::Type, cur.slice(start)));
                    }
                    None => {
                        cur.advance(run);
                        tokens.push(Token::new(TokenKind::Text, cur.slice(start)));
                    }
                }
            }
            b'[' => {
                cur.advance(1);
                cur.eat_while(|b| b != b']' && b != b'\n');
                if cur.peek() == b']' {
                    cur.advance(1);
                }
                tokens.push(Token::new(TokenKind::Keyword, cur.slice(start)));
                if cur.peek() == b'(' {
                    let url_start = cur.pos();
                    cur.advance(1);
                    cur.eat_while(|b| b != b')' && b != b'\n');
                    if cur.peek() == b')' {
                        cur.advance(1);
                    }
                    tokens.push(Token::new(TokenKind::String, cur.slice(url_start)));
                }
            }
            _ => {
                cur.advance_char();
                cur.eat_while(|b| !matches!(b, b'`' | b'*' | b'_' | b'['));
                tokens.push(Token::new(TokenKind::Text, cur.slice(start)));
            }
        }
    }
}

/// Byte length of a `delim`-run emphasis span starting at `rest`, if the
/// closing run exists before end of line
fn find_span(rest: &str, delim: u8, run: usize) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = run;
    while i + run <= bytes.len() {
        if bytes[i] == b'\n' {
            return None;
        }
        if bytes[i..i + run].iter().all(|&b| b == delim) {
            return Some(i + run);
        }
        i += 1;
    }
    None
}
