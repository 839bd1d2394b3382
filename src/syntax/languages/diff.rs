//! Unified diff scanner
//!
//! Every line is classified whole by its first characters; there is no
//! token structure inside a line worth exposing.

use crate::syntax::{Engine, Scanner, Token, TokenKind};

pub fn scanner() -> Scanner {
    Scanner::new("Diff", &["patch", "udiff", "rej"], Engine::Custom(scan))
}

fn scan(src: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < src.len() {
        let line_end = src[pos..]
            .find('\n')
            .map(|i| pos + i + 1)
            .unwrap_or(src.len());
        let line = &src[pos..line_end];
        tokens.push(Token::new(classify_line(line), line));
        pos = line_end;
    }
    tokens
}

fn classify_line(line: &str) -> TokenKind {
    if line.starts_with("@@") {
        TokenKind::Preprocessor
    } else if line.starts_with("+++")
        || line.starts_with("---")
        || line.starts_with("diff ")
        || line.starts_with("index ")
        || line.starts_with("Index: ")
        || line.starts_with("=====")
    {
        TokenKind::Comment
    } else if line.starts_with('+') {
        TokenKind::String
    } else if line.starts_with('-') {
        TokenKind::Operator
    } else {
        TokenKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hunk() {
        let src = "diff --git a/f b/f\n--- a/f\n+++ b/f\n@@ -1,2 +1,2 @@\n context\n-old\n+new\n";
        let toks = scan(src);
        assert_eq!(toks[0].kind, TokenKind::Comment);
        assert_eq!(toks[1].kind, TokenKind::Comment);
        assert_eq!(toks[3].kind, TokenKind::Preprocessor);
        assert_eq!(toks[4].kind, TokenKind::Text);
        assert_eq!(toks[5].kind, TokenKind::Operator);
        assert_eq!(toks[6].kind, TokenKind::String);
        let joined: String = toks.iter().map(|t| t.text).collect();
        assert_eq!(joined, src);
    }

    #[test]
    fn test_file_headers_beat_removal_marker() {
        assert_eq!(classify_line("--- a/file"), TokenKind::Comment);
        assert_eq!(classify_line("-removed"), TokenKind::Operator);
    }
}
