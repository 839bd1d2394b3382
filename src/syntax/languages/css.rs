//! CSS scanner
//!
//! CSS is positional: the same word is a selector outside braces and a
//! property name inside them, so a table grammar cannot classify it. The
//! scanner tracks brace depth and whether it is left of the `:` in a
//! declaration.

use crate::syntax::cursor::Cursor;
use crate::syntax::{Engine, Scanner, Token, TokenKind};

pub fn scanner() -> Scanner {
    Scanner::new("CSS", &["scss", "less"], Engine::Custom(scan))
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b >= 0x80
}

fn scan(src: &str) -> Vec<Token<'_>> {
    let mut cur = Cursor::new(src);
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    // Inside a declaration block, before the ':' we are naming a property
    let mut in_value = false;

    while !cur.is_eof() {
        let start = cur.pos();
        let b = cur.peek();

        if b.is_ascii_whitespace() {
            cur.eat_while(|c| c.is_ascii_whitespace());
            tokens.push(Token::new(TokenKind::Text, cur.slice(start)));
        } else if cur.starts_with("/*") {
            cur.advance(2);
            while !cur.is_eof() && !cur.starts_with("*/") {
                cur.advance_char();
            }
            if cur.starts_with("*/") {
                cur.advance(2);
            }
            tokens.push(Token::new(TokenKind::Comment, cur.slice(start)));
        } else if b == b'"' || b == b'\'' {
            cur.advance(1);
            while !cur.is_eof() && cur.peek() != b {
                if cur.peek() == b'\\' {
                    cur.advance(1);
                }
                cur.advance_char();
            }
            if !cur.is_eof() {
                cur.advance(1);
            }
            tokens.push(Token::new(TokenKind::String, cur.slice(start)));
        } else if b == b'@' {
            // At-rule keyword: @media, @import, @keyframes
            cur.advance(1);
            cur.eat_while(is_word_byte);
            tokens.push(Token::new(TokenKind::Preprocessor, cur.slice(start)));
        } else if b == b'#' && depth > 0 && cur.peek2().is_ascii_hexdigit() {
            cur.advance(1);
            cur.eat_while(|c| c.is_ascii_hexdigit());
            tokens.push(Token::new(TokenKind::Number, cur.slice(start)));
        } else if (b == b'.' || b == b'#') && depth == 0 && is_word_byte(cur.peek2()) {
            // Class and id selectors
            cur.advance(1);
            cur.eat_while(is_word_byte);
            tokens.push(Token::new(TokenKind::Type, cur.slice(start)));
        } else if b.is_ascii_digit() || (b == b'.' && cur.peek2().is_ascii_digit()) {
            cur.eat_while(|c| c.is_ascii_digit() || c == b'.');
            // Unit suffix stays part of the number: 10px, 1.5em, 80%
            cur.eat_while(|c| c.is_ascii_alphabetic() || c == b'%');
            tokens.push(Token::new(TokenKind::Number, cur.slice(start)));
        } else if is_word_byte(b) && !b.is_ascii_digit() {
            cur.eat_while(is_word_byte);
            let word = cur.slice(start);
            let kind = if depth == 0 {
                TokenKind::Keyword
            } else if in_value {
                TokenKind::Identifier
            } else {
                TokenKind::Type
            };
            tokens.push(Token::new(kind, word));
        } else {
            match b {
                b'{' => {
                    depth += 1;
                    in_value = false;
                }
                b'}' => {
                    depth = depth.saturating_sub(1);
                    in_value = false;
                }
                b':' if depth > 0 => in_value = true,
                b';' => in_value = false,
                _ => {}
            }
            cur.advance_char();
            let kind = match b {
                b'{' | b'}' | b':' | b';' | b',' | b'(' | b')' | b'[' | b']' => {
                    TokenKind::Punctuation
                }
                b'>' | b'+' | b'~' | b'*' | b'=' | b'!' => TokenKind::Operator,
                _ => TokenKind::Text,
            };
            tokens.push(Token::new(kind, cur.slice(start)));
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<(TokenKind, &str)> {
        scan(src).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_rule() {
        let toks = kinds(".btn { color: #ff0000; width: 10px; }");
        assert!(toks.contains(&(TokenKind::Type, ".btn")));
        assert!(toks.contains(&(TokenKind::Type, "color")));
        assert!(toks.contains(&(TokenKind::Number, "#ff0000")));
        assert!(toks.contains(&(TokenKind::Number, "10px")));
    }

    #[test]
    fn test_property_vs_value_words() {
        let toks = kinds("a { font-weight: bold; }");
        assert!(toks.contains(&(TokenKind::Keyword, "a")));
        assert!(toks.contains(&(TokenKind::Type, "font-weight")));
        assert!(toks.contains(&(TokenKind::Identifier, "bold")));
    }

    #[test]
    fn test_at_rule() {
        let toks = kinds("@media (min-width: 600px) {}");
        assert_eq!(toks[0], (TokenKind::Preprocessor, "@media"));
    }

    #[test]
    fn test_coverage() {
        let src = "/* c */ .a>b { margin: 0 auto; content: \"}\"; }";
        let joined: String = scan(src).iter().map(|t| t.text).collect();
        assert_eq!(joined, src);
    }
}
