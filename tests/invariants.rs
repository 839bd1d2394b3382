//! Cross-language scanning guarantees
//!
//! Every scanner, on every input, must reproduce the source exactly when
//! its token texts are concatenated, must never emit an empty token, and
//! must never panic. These hold for well-formed source, truncated source,
//! and bytes that are not source code at all.

use tint::{Registry, Render, Token, TokenKind};

const SAMPLES: &[&str] = &[
    "",
    "hello world",
    "int x = 42;",
    "fn main() { println!(\"hi\"); }",
    "SELECT * FROM t WHERE a = 'b';",
    "{\"a\": 1, \"b\": [true, null]}",
    "<p class=\"x\">hi</p>",
    "# heading\n- item `code`\n",
    "\"unterminated",
    "'also unterminated",
    "/* open comment",
    "\u{0}\u{1}\u{2}\u{7f}",
    "\u{1F600}\u{00e9}\u{4e2d}\u{6587}",
    "a\nb\r\nc\td",
    "=1\n",
    ": v\n",
    "0x 0b 1e 1e+ .5. ...",
    "\\\\\\",
    "line one\nline two\nline three\n",
];

fn every_scanner_tokens(src: &str) -> Vec<(String, Vec<(TokenKind, String)>)> {
    Registry::new()
        .list()
        .iter()
        .map(|scanner| {
            let toks = scanner
                .tokenize(src)
                .into_iter()
                .map(|t| (t.kind, t.text.to_string()))
                .collect();
            (scanner.name().to_string(), toks)
        })
        .collect()
}

#[test]
fn concatenated_tokens_reproduce_the_source() {
    for src in SAMPLES {
        for (name, toks) in every_scanner_tokens(src) {
            let joined: String = toks.iter().map(|(_, text)| text.as_str()).collect();
            assert_eq!(&joined, src, "{name} lost text on {src:?}");
        }
    }
}

#[test]
fn no_scanner_emits_an_empty_token() {
    for src in SAMPLES {
        for (name, toks) in every_scanner_tokens(src) {
            for (kind, text) in &toks {
                assert!(!text.is_empty(), "{name} emitted empty {kind:?} on {src:?}");
            }
        }
    }
}

#[test]
fn token_count_is_bounded_by_char_count() {
    // Progress: every token is at least one character
    for src in SAMPLES {
        let chars = src.chars().count();
        for (name, toks) in every_scanner_tokens(src) {
            assert!(
                toks.len() <= chars,
                "{name} emitted {} tokens for {} chars",
                toks.len(),
                chars
            );
        }
    }
}

#[test]
fn empty_source_yields_no_tokens() {
    for (name, toks) in every_scanner_tokens("") {
        assert!(toks.is_empty(), "{name} emitted tokens for empty input");
    }
}

#[test]
fn every_scanner_answers_to_its_own_name() {
    let registry = Registry::new();
    for scanner in registry.list() {
        let name = scanner.name();
        assert!(registry.find(name).is_some());
        assert!(scanner.matches(&name.to_uppercase()));
        assert!(scanner.matches(&name.to_lowercase()));
    }
}

/// Renderer that records protocol calls for dispatcher tests
#[derive(Default)]
struct Recording {
    begun: u32,
    ended: u32,
    tokens: Vec<(TokenKind, String)>,
}

impl Render for Recording {
    fn begin_render(&mut self) {
        self.begun += 1;
    }

    fn render_token(&mut self, token: &Token) {
        self.tokens.push((token.kind, token.text.to_string()));
    }

    fn end_render(&mut self) {
        self.ended += 1;
    }
}

#[test]
fn unknown_language_renders_whole_source_as_text() {
    let registry = Registry::new();
    let mut r = Recording::default();
    registry.highlight("some source", "no-such-language", &mut r);
    assert_eq!(r.begun, 1);
    assert_eq!(r.ended, 1);
    assert_eq!(r.tokens, vec![(TokenKind::Text, "some source".to_string())]);
}

#[test]
fn empty_source_makes_no_renderer_calls() {
    let registry = Registry::new();
    let mut r = Recording::default();
    registry.highlight("", "rust", &mut r);
    assert_eq!(r.begun, 0);
    assert_eq!(r.ended, 0);
    assert!(r.tokens.is_empty());
}

#[test]
fn sql_select_statement() {
    let registry = Registry::new();
    let scanner = registry.find("sql").unwrap();
    let toks = scanner.tokenize("SELECT name FROM users;");
    assert_eq!(toks[0].kind, TokenKind::Keyword);
    assert_eq!(toks[0].text, "SELECT");
    assert!(toks.iter().any(|t| t.kind == TokenKind::Keyword && t.text == "FROM"));
    assert!(toks.iter().any(|t| t.kind == TokenKind::Identifier && t.text == "users"));
}

#[test]
fn c_declaration() {
    let registry = Registry::new();
    let scanner = registry.find("c").unwrap();
    let toks = scanner.tokenize("int x = 42;");
    let kinds: Vec<_> = toks.iter().map(|t| (t.kind, t.text)).collect();
    assert_eq!(kinds[0], (TokenKind::Type, "int"));
    assert_eq!(kinds[2], (TokenKind::Identifier, "x"));
    assert_eq!(kinds[4], (TokenKind::Operator, "="));
    assert_eq!(kinds[6], (TokenKind::Number, "42"));
    assert_eq!(kinds[7], (TokenKind::Punctuation, ";"));
}

#[test]
fn json_object() {
    let registry = Registry::new();
    let scanner = registry.find("json").unwrap();
    let toks = scanner.tokenize("{\"a\": 1}");
    assert_eq!(toks[0].kind, TokenKind::Punctuation);
    assert_eq!(toks[1].kind, TokenKind::String);
    assert!(toks.iter().any(|t| t.kind == TokenKind::Number && t.text == "1"));
}

#[test]
fn unterminated_string_reaches_end_of_input() {
    let registry = Registry::new();
    for lang in ["rust", "c", "python", "javascript"] {
        let scanner = registry.find(lang).unwrap();
        let toks = scanner.tokenize("\"abc");
        assert_eq!(toks.len(), 1, "{lang}");
        assert_eq!(toks[0].kind, TokenKind::String);
        assert_eq!(toks[0].text, "\"abc");
    }
}

#[test]
fn markup_element_structure() {
    let registry = Registry::new();
    let scanner = registry.find("html").unwrap();
    let toks: Vec<_> = scanner
        .tokenize("<p>hi</p>")
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect();
    assert_eq!(toks[0], (TokenKind::Punctuation, "<"));
    assert_eq!(toks[1], (TokenKind::Keyword, "p"));
    assert_eq!(toks[2], (TokenKind::Punctuation, ">"));
    assert_eq!(toks[3], (TokenKind::Text, "hi"));
}

#[test]
fn dispatcher_is_case_insensitive() {
    let registry = Registry::new();
    assert!(registry.find("RUST").is_some());
    assert!(registry.find("Rust").is_some());
    assert!(registry.find("rs").is_some());
    assert!(registry.find("").is_none());
}

#[test]
fn splitting_input_at_token_boundary_is_stable() {
    // Tokens already emitted do not depend on what follows them, except
    // for the token that straddles the split
    let registry = Registry::new();
    let scanner = registry.find("rust").unwrap();
    let src = "let x = 1; let y = 2;";
    let full = scanner.tokenize(src);
    let half_len: usize = full[..6].iter().map(|t| t.text.len()).sum();
    let half = scanner.tokenize(&src[..half_len]);
    for (a, b) in half.iter().zip(full.iter()).take(6) {
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.text, b.text);
    }
}
