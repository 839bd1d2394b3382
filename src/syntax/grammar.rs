//! Table-driven scanning core
//!
//! Most languages differ only in data: keyword tables, comment delimiters,
//! string forms, operator sets. One generic engine walks the source left to
//! right, trying recognizers in a fixed priority order (whitespace, comment,
//! string, line-start directive, number, identifier, operator, punctuation)
//! and consuming a maximal run for whichever claims the current character.
//! Anything unclaimed becomes a one-character `Text` token, which guarantees
//! both progress and lossless coverage on arbitrary input.
//!
//! Structurally different languages (markup, line-sensitive formats,
//! host/guest embedding) get custom scan functions in `languages/`, but the
//! host/guest ones still call [`next_token`] for their code regions.

use super::cursor::Cursor;
use super::token::{Token, TokenKind};

/// One string literal form: delimiters plus escape/interpolation policy
///
/// An unterminated literal consumes to end of input; that is policy, not an
/// error. Longer delimiters must be listed before their prefixes (`"""`
/// before `"`) so maximal munch picks the right form.
#[derive(Debug, Clone, Copy)]
pub struct StringRule {
    /// Opening delimiter
    pub open: &'static str,
    /// Closing delimiter (usually the same as `open`)
    pub close: &'static str,
    /// Whether backslash escapes the next character (two-character skip)
    pub escape: bool,
    /// Interpolation hole opener (`${`, `#{`); holes are consumed opaquely
    /// as part of the string span, with balanced-brace counting
    pub interpolation: Option<&'static str>,
}

impl StringRule {
    /// Quoted form with backslash escapes
    pub const fn quoted(delim: &'static str) -> Self {
        Self {
            open: delim,
            close: delim,
            escape: true,
            interpolation: None,
        }
    }

    /// Quoted form without any escape character (verbatim/raw)
    pub const fn raw(open: &'static str, close: &'static str) -> Self {
        Self {
            open,
            close,
            escape: false,
            interpolation: None,
        }
    }

    /// Quoted form with escapes and interpolation holes
    pub const fn interpolated(delim: &'static str, opener: &'static str) -> Self {
        Self {
            open: delim,
            close: delim,
            escape: true,
            interpolation: Some(opener),
        }
    }
}

/// Per-language scan tables for the generic engine
///
/// Languages are defined as statics built with struct update syntax over
/// [`Grammar::DEFAULT`], overriding only what the language needs.
#[derive(Debug, Clone, Copy)]
pub struct Grammar {
    /// Reserved words, classified as `Keyword`
    pub keywords: &'static [&'static str],
    /// Built-in type names, classified as `Type`
    pub types: &'static [&'static str],
    /// Literal words (`true`, `nil`, ...), classified as `Keyword`
    pub literals: &'static [&'static str],
    /// Fold ASCII case when matching the word tables (SQL, Pascal, VB)
    pub case_insensitive: bool,
    /// Classify capitalized identifiers as `Type` by shape (Haskell, OCaml)
    pub caps_are_types: bool,
    /// Line comment openers, consuming to end of line
    pub line_comments: &'static [&'static str],
    /// Block comment delimiter pairs, consuming to the closer or EOF
    pub block_comments: &'static [(&'static str, &'static str)],
    /// Whether block comments nest (Rust, Swift, Haskell)
    pub nested_comments: bool,
    /// String literal forms, tried in order
    pub strings: &'static [StringRule],
    /// Extra bytes allowed to start an identifier (`$`, `@`, ...)
    pub ident_start_extra: &'static [u8],
    /// Extra bytes allowed inside an identifier (`-`, `?`, `!`, ...)
    pub ident_continue_extra: &'static [u8],
    /// Multi-character operators, longest first
    pub operators: &'static [&'static str],
    /// Single characters accepted as operators when no table entry matches
    pub operator_chars: &'static [u8],
    /// Single-character punctuation
    pub punctuation: &'static [u8],
    /// Suffixes glued onto numeric literals (`u32`, `f`, `L`), longest first
    pub number_suffixes: &'static [&'static str],
    /// Directive prefix recognized at line start only, consuming the line
    pub preprocessor: Option<&'static str>,
    /// Character literal delimiter, matched only when a short literal closes
    /// there (so Rust's `'a'` is a string but `'static` falls through to the
    /// identifier rules)
    pub char_delim: Option<u8>,
}

impl Grammar {
    /// Empty tables with the shared operator/punctuation defaults
    pub const DEFAULT: Grammar = Grammar {
        keywords: &[],
        types: &[],
        literals: &[],
        case_insensitive: false,
        caps_are_types: false,
        line_comments: &[],
        block_comments: &[],
        nested_comments: false,
        strings: &[],
        ident_start_extra: &[],
        ident_continue_extra: &[],
        operators: &[],
        operator_chars: b"+-*/%=<>!&|^~?",
        punctuation: b"()[]{},;:.",
        number_suffixes: &[],
        preprocessor: None,
        char_delim: None,
    };
}

/// Scanner-local state threaded through [`next_token`]
///
/// One boolean: are we at the start of a logical line? Reset by any
/// whitespace token containing a newline, cleared by the first token after
/// it. Line-start-only rules (preprocessor directives) key off this.
#[derive(Debug, Clone, Copy)]
pub struct ScanState {
    pub line_start: bool,
}

impl Default for ScanState {
    fn default() -> Self {
        Self { line_start: true }
    }
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

fn word_in(table: &[&str], word: &str, fold_case: bool) -> bool {
    if fold_case {
        table.iter().any(|k| k.eq_ignore_ascii_case(word))
    } else {
        table.iter().any(|k| *k == word)
    }
}

fn classify(word: &str, g: &Grammar) -> TokenKind {
    if word_in(g.keywords, word, g.case_insensitive)
        || word_in(g.literals, word, g.case_insensitive)
    {
        TokenKind::Keyword
    } else if word_in(g.types, word, g.case_insensitive) {
        TokenKind::Type
    } else if g.caps_are_types && word.as_bytes().first().is_some_and(u8::is_ascii_uppercase) {
        TokenKind::Type
    } else {
        TokenKind::Identifier
    }
}

/// Consume a block comment body, including the opener already at the cursor
fn eat_block_comment(cur: &mut Cursor, open: &str, close: &str, nested: bool) {
    cur.advance(open.len());
    let mut depth = 1usize;
    while !cur.is_eof() {
        if cur.starts_with(close) {
            cur.advance(close.len());
            depth -= 1;
            if depth == 0 {
                return;
            }
        } else if nested && cur.starts_with(open) {
            cur.advance(open.len());
            depth += 1;
        } else {
            cur.advance_char();
        }
    }
}

/// Consume a string literal body after the opener, up to the closer or EOF
fn eat_string_body(cur: &mut Cursor, rule: &StringRule) {
    while !cur.is_eof() {
        if rule.escape && cur.peek() == b'\\' {
            // Two-character skip: an escaped delimiter must not terminate
            cur.advance(1);
            cur.advance_char();
            continue;
        }
        if let Some(opener) = rule.interpolation {
            if cur.starts_with(opener) {
                // Paren-shaped holes ($(..)) balance parens, the rest braces
                let (open_b, close_b) = if opener.ends_with('(') {
                    (b'(', b')')
                } else {
                    (b'{', b'}')
                };
                cur.advance(opener.len());
                let mut depth = 1usize;
                while depth > 0 && !cur.is_eof() {
                    let b = cur.peek();
                    if b == open_b {
                        depth += 1;
                    } else if b == close_b {
                        depth -= 1;
                    }
                    cur.advance_char();
                }
                continue;
            }
        }
        if cur.starts_with(rule.close) {
            cur.advance(rule.close.len());
            return;
        }
        cur.advance_char();
    }
}

/// Byte length of a closed character literal at the cursor, or `None`
///
/// The body is one character or one backslash escape; anything longer (or an
/// unclosed quote) is not a character literal and the caller falls through.
fn char_literal_len(cur: &Cursor, delim: u8) -> Option<usize> {
    let mut n = 1;
    if cur.peek_at(n) == b'\\' {
        n += 2;
    } else {
        let b = cur.peek_at(n);
        if b == delim || b == b'\n' || b == 0 {
            return None;
        }
        n += match b {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
    }
    (cur.peek_at(n) == delim).then(|| n + 1)
}

/// Consume a numeric literal: radix prefix, digits with `_` separators,
/// fraction, exponent, then an optional suffix from the grammar's table
fn eat_number(cur: &mut Cursor, g: &Grammar) {
    let mut hex = false;
    if cur.peek() == b'0' && matches!(cur.peek2(), b'x' | b'X') {
        hex = true;
        cur.advance(2);
        cur.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
    } else if cur.peek() == b'0' && matches!(cur.peek2(), b'b' | b'B' | b'o' | b'O') {
        cur.advance(2);
        cur.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        // Radix digits only; any trailing junk stops the token below
    } else {
        cur.eat_while(|b| b.is_ascii_digit() || b == b'_');
    }

    // Fraction: a dot only counts with a digit after it, so `1.max()` keeps
    // its dot as member access
    let frac_digit = |b: u8| {
        if hex {
            b.is_ascii_hexdigit()
        } else {
            b.is_ascii_digit()
        }
    };
    if cur.peek() == b'.' && frac_digit(cur.peek2()) {
        cur.advance(1);
        cur.eat_while(|b| frac_digit(b) || b == b'_');
    }

    // Exponent marker: e/E for decimal, p/P for hex floats
    let exp_marker = if hex { (b'p', b'P') } else { (b'e', b'E') };
    if cur.peek() == exp_marker.0 || cur.peek() == exp_marker.1 {
        let sign = matches!(cur.peek2(), b'+' | b'-');
        let digit_pos = if sign { 2 } else { 1 };
        if cur.peek_at(digit_pos).is_ascii_digit() {
            cur.advance(digit_pos);
            cur.eat_while(|b| b.is_ascii_digit());
        }
    }

    // Type/unit suffix, only when nothing identifier-shaped follows it
    for suffix in g.number_suffixes {
        if cur.starts_with(suffix) {
            let following = cur.peek_at(suffix.len());
            if !is_ident_continue(following) {
                cur.advance(suffix.len());
                return;
            }
        }
    }
}

/// Length of the longest table operator starting at the cursor
fn longest_operator(cur: &Cursor, g: &Grammar) -> Option<usize> {
    g.operators
        .iter()
        .copied()
        .find(|op| cur.starts_with(op))
        .map(str::len)
}

/// Scan one token at the cursor, or `None` at end of input
///
/// This is the single-step form used by host/guest scanners that interleave
/// table scanning with their own delimiter checks.
pub(crate) fn next_token<'a>(
    cur: &mut Cursor<'a>,
    g: &Grammar,
    state: &mut ScanState,
) -> Option<Token<'a>> {
    if cur.is_eof() {
        return None;
    }
    let start = cur.pos();
    let b = cur.peek();

    if b.is_ascii_whitespace() {
        cur.eat_while(|b| b.is_ascii_whitespace());
        let text = cur.slice(start);
        if text.contains('\n') {
            state.line_start = true;
        }
        return Some(Token::new(TokenKind::Text, text));
    }

    let at_line_start = state.line_start;
    state.line_start = false;

    // Block openers first: a line opener may be their prefix (Lua's
    // `--[[` vs `--`)
    for &(open, close) in g.block_comments {
        if cur.starts_with(open) {
            eat_block_comment(cur, open, close, g.nested_comments);
            return Some(Token::new(TokenKind::Comment, cur.slice(start)));
        }
    }
    for prefix in g.line_comments {
        if cur.starts_with(prefix) {
            cur.eat_to_eol();
            return Some(Token::new(TokenKind::Comment, cur.slice(start)));
        }
    }

    for rule in g.strings {
        if cur.starts_with(rule.open) {
            cur.advance(rule.open.len());
            eat_string_body(cur, rule);
            return Some(Token::new(TokenKind::String, cur.slice(start)));
        }
    }

    if let Some(delim) = g.char_delim {
        if b == delim {
            if let Some(len) = char_literal_len(cur, delim) {
                cur.advance(len);
                return Some(Token::new(TokenKind::String, cur.slice(start)));
            }
        }
    }

    if at_line_start {
        if let Some(prefix) = g.preprocessor {
            if cur.starts_with(prefix) {
                cur.eat_to_eol();
                return Some(Token::new(TokenKind::Preprocessor, cur.slice(start)));
            }
        }
    }

    if b.is_ascii_digit() || (b == b'.' && cur.peek2().is_ascii_digit()) {
        eat_number(cur, g);
        return Some(Token::new(TokenKind::Number, cur.slice(start)));
    }

    // A sigil byte starts an identifier only when one continues after it,
    // so `%` stays modulo in `a % b` but claims `%hash`
    let sigil_start = g.ident_start_extra.contains(&b)
        && (is_ident_continue(cur.peek2()) || g.ident_continue_extra.contains(&cur.peek2()));
    if is_ident_start(b) || sigil_start {
        cur.advance_char();
        cur.eat_while(|c| is_ident_continue(c) || g.ident_continue_extra.contains(&c));
        let word = cur.slice(start);
        return Some(Token::new(classify(word, g), word));
    }

    if let Some(len) = longest_operator(cur, g) {
        cur.advance(len);
        return Some(Token::new(TokenKind::Operator, cur.slice(start)));
    }
    if g.punctuation.contains(&b) {
        cur.advance(1);
        return Some(Token::new(TokenKind::Punctuation, cur.slice(start)));
    }
    if g.operator_chars.contains(&b) {
        cur.advance(1);
        return Some(Token::new(TokenKind::Operator, cur.slice(start)));
    }

    // Unclaimed: one full character of plain text keeps the scan moving
    cur.advance_char();
    Some(Token::new(TokenKind::Text, cur.slice(start)))
}

/// Tokenize a whole source string with the given grammar
pub(crate) fn tokenize<'a>(src: &'a str, g: &Grammar) -> Vec<Token<'a>> {
    let mut cur = Cursor::new(src);
    let mut state = ScanState::default();
    let mut tokens = Vec::new();
    while let Some(token) = next_token(&mut cur, g, &mut state) {
        tokens.push(token);
    }
    tokens
}
