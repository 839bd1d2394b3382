//! HTML and XML scanner
//!
//! Markup is not token soup: everything outside a tag is plain text, and
//! inside a tag the roles come from position (tag name, attribute name,
//! value), not from word tables. One hand-written scanner serves both HTML
//! and XML; they differ only in name and aliases.

use crate::syntax::cursor::Cursor;
use crate::syntax::{Engine, Scanner, Token, TokenKind};

pub fn html_scanner() -> Scanner {
    Scanner::new("HTML", &["htm", "xhtml"], Engine::Custom(scan))
}

pub fn xml_scanner() -> Scanner {
    Scanner::new("XML", &["svg", "xaml", "xsl", "plist"], Engine::Custom(scan))
}

fn scan(src: &str) -> Vec<Token<'_>> {
    let mut cur = Cursor::new(src);
    let mut tokens = Vec::new();
    while !cur.is_eof() {
        let start = cur.pos();
        if cur.starts_with("<!--") {
            cur.advance(4);
            while !cur.is_eof() && !cur.starts_with("-->") {
                cur.advance_char();
            }
            if cur.starts_with("-->") {
                cur.advance(3);
            }
            tokens.push(Token::new(TokenKind::Comment, cur.slice(start)));
        } else if cur.starts_with("<!") || cur.starts_with("<?") {
            // Doctype, CDATA, processing instructions
            cur.eat_while(|b| b != b'>');
            if cur.peek() == b'>' {
                cur.advance(1);
            }
            tokens.push(Token::new(TokenKind::Preprocessor, cur.slice(start)));
        } else if cur.peek() == b'<' {
            scan_tag(&mut cur, &mut tokens);
        } else {
            cur.eat_while(|b| b != b'<');
            tokens.push(Token::new(TokenKind::Text, cur.slice(start)));
        }
    }
    tokens
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b':' || b == b'_' || b == b'.' || b >= 0x80
}

/// Scan from `<` through the matching `>`, assigning roles by position
fn scan_tag<'a>(cur: &mut Cursor<'a>, tokens: &mut Vec<Token<'a>>) {
    let start = cur.pos();
    cur.advance(1);
    if cur.peek() == b'/' {
        cur.advance(1);
    }
    tokens.push(Token::new(TokenKind::Punctuation, cur.slice(start)));

    let name_start = cur.pos();
    cur.eat_while(is_name_byte);
    if cur.pos() > name_start {
        tokens.push(Token::new(TokenKind::Keyword, cur.slice(name_start)));
    }

    while !cur.is_eof() {
        let p = cur.pos();
        let b = cur.peek();
        if cur.starts_with("/>") {
            cur.advance(2);
            tokens.push(Token::new(TokenKind::Punctuation, cur.slice(p)));
            return;
        }
        match b {
            b'>' => {
                cur.advance(1);
                tokens.push(Token::new(TokenKind::Punctuation, cur.slice(p)));
                return;
            }
            b'=' => {
                cur.advance(1);
                tokens.push(Token::new(TokenKind::Operator, cur.slice(p)));
            }
            b'"' | b'\'' => {
                cur.advance(1);
                cur.eat_while(|c| c != b);
                if !cur.is_eof() {
                    cur.advance(1);
                }
                tokens.push(Token::new(TokenKind::String, cur.slice(p)));
            }
            _ if b.is_ascii_whitespace() => {
                cur.eat_while(|c| c.is_ascii_whitespace());
                tokens.push(Token::new(TokenKind::Text, cur.slice(p)));
            }
            _ if is_name_byte(b) => {
                cur.eat_while(is_name_byte);
                tokens.push(Token::new(TokenKind::Type, cur.slice(p)));
            }
            _ => {
                cur.advance_char();
                tokens.push(Token::new(TokenKind::Text, cur.slice(p)));
            }
        }
    }
}
