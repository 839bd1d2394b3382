//! INI / dosini config scanner
//!
//! Keys only mean "key" left of the separator, so the scanner works a line
//! at a time instead of using a word table.

use crate::syntax::cursor::Cursor;
use crate::syntax::{Engine, Scanner, Token, TokenKind};

pub fn scanner() -> Scanner {
    Scanner::new("INI", &["cfg", "conf", "dosini", "properties"], Engine::Custom(scan))
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
    let start = cur.pos();

    if cur.peek().is_ascii_whitespace() {
        cur.eat_while(|b| b.is_ascii_whitespace());
        tokens.push(Token::new(TokenKind::Text, cur.slice(start)));
    }
    if cur.is_eof() {
        return;
    }

    let start = cur.pos();
    match cur.peek() {
        b';' | b'#' => {
            cur.eat_to_eol();
            tokens.push(Token::new(TokenKind::Comment, cur.slice(start)));
        }
        b'[' => {
            cur.eat_while(|b| b != b']' && b != b'\n');
            if cur.peek() == b']' {
                cur.advance(1);
            }
            tokens.push(Token::new(TokenKind::Keyword, cur.slice(start)));
        }
        _ => {
            // key = value  (or key: value); a line starting at the
            // separator has no key token at all
            cur.eat_while(|b| b != b'=' && b != b':' && b != b'\n');
            if cur.pos() > start {
                tokens.push(Token::new(TokenKind::Type, cur.slice(start)));
            }
            if matches!(cur.peek(), b'=' | b':') {
                let op = cur.pos();
                cur.advance(1);
                tokens.push(Token::new(TokenKind::Operator, cur.slice(op)));
                scan_value(&mut cur, tokens);
            }
        }
    }
    // Trailing newline (and anything a branch above left behind)
    let rest = cur.pos();
    cur.eat_to_eol();
    if cur.peek() == b'\n' {
        cur.advance(1);
    }
    if cur.pos() > rest {
        tokens.push(Token::new(TokenKind::Text, cur.slice(rest)));
    }
}

fn scan_value<'a>(cur: &mut Cursor<'a>, tokens: &mut Vec<Token<'a>>) {
    let start = cur.pos();
    cur.eat_while(|b| b == b' ' || b == b'\t');
    if cur.pos() > start {
        tokens.push(Token::new(TokenKind::Text, cur.slice(start)));
    }

    let start = cur.pos();
    let b = cur.peek();
    if b == b'"' || b == b'\'' {
        cur.advance(1);
        cur.eat_while(|c| c != b && c != b'\n');
        if cur.peek() == b {
            cur.advance(1);
        }
        tokens.push(Token::new(TokenKind::String, cur.slice(start)));
    } else if b.is_ascii_digit() || (b == b'-' && cur.peek2().is_ascii_digit()) {
        cur.advance(1);
        cur.eat_while(|c| c.is_ascii_alphanumeric() || c == b'.' || c == b'_');
        tokens.push(Token::new(TokenKind::Number, cur.slice(start)));
    } else {
        cur.eat_while(|c| c != b'\n' && c != b';' && c != b'#');
        if cur.pos() > start {
            let word = cur.slice(start);
            let kind = match word.trim_end() {
                "true" | "false" | "yes" | "no" | "on" | "off" => TokenKind::Keyword,
                _ => TokenKind::Text,
            };
            tokens.push(Token::new(kind, word));
        }
    }

    // Inline comment after the value
    let start = cur.pos();
    if matches!(cur.peek(), b';' | b'#') {
        cur.eat_to_eol();
        tokens.push(Token::new(TokenKind::Comment, cur.slice(start)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<(TokenKind, &str)> {
        scan(src).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_section_and_keys() {
        let toks = kinds("[server]\nhost = \"example\"\nport = 8080\n");
        assert_eq!(toks[0], (TokenKind::Keyword, "[server]"));
        assert!(toks.contains(&(TokenKind::Type, "host ")));
        assert!(toks.contains(&(TokenKind::String, "\"example\"")));
        assert!(toks.contains(&(TokenKind::Number, "8080")));
    }

    #[test]
    fn test_comments() {
        let toks = kinds("; top\nkey = on # inline\n");
        assert_eq!(toks[0], (TokenKind::Comment, "; top"));
        assert!(toks.contains(&(TokenKind::Comment, "# inline")));
        assert!(toks.contains(&(TokenKind::Keyword, "on ")));
    }

    #[test]
    fn test_coverage() {
        let src = "[a]\nx=1\ny : two words ; c\nbare line\n";
        let joined: String = scan(src).iter().map(|t| t.text).collect();
        assert_eq!(joined, src);
    }

    #[test]
    fn test_line_starting_at_separator_has_no_key_token() {
        let toks = kinds("=1\n");
        assert!(toks.iter().all(|(_, t)| !t.is_empty()));
        assert_eq!(toks[0], (TokenKind::Operator, "="));
        assert_eq!(toks[1], (TokenKind::Number, "1"));
        let joined: String = toks.iter().map(|(_, t)| *t).collect();
        assert_eq!(joined, "=1\n");
    }
}
