//! Scanner registry and highlight dispatch
//!
//! The registry holds every scanner in a fixed registration order, built
//! once at startup and read-only afterwards. Resolution walks the list and
//! takes the first scanner whose `matches` accepts the identifier, so a
//! deterministic order makes resolution deterministic.

use super::languages;
use super::scanner::Scanner;
use super::token::{Token, TokenKind};
use crate::render::Render;

/// Registry of language scanners
pub struct Registry {
    scanners: Vec<Scanner>,
}

impl Registry {
    /// Build the registry with all built-in languages
    pub fn new() -> Self {
        Self {
            scanners: languages::all_scanners(),
        }
    }

    /// Resolve a language identifier to a scanner
    ///
    /// First registered match wins; `None` for unknown or empty identifiers.
    pub fn find(&self, identifier: &str) -> Option<&Scanner> {
        self.scanners.iter().find(|s| s.matches(identifier))
    }

    /// All registered scanners, in registration order
    pub fn list(&self) -> &[Scanner] {
        &self.scanners
    }

    /// Highlight `source` as `language`, driving the renderer
    ///
    /// Empty source returns without touching the renderer at all. An
    /// unrecognized language is not an error: the whole source is emitted
    /// as a single `Text` token. Otherwise every token from the resolved
    /// scanner is emitted in source order between `begin_render` and
    /// `end_render`.
    pub fn highlight<R: Render + ?Sized>(&self, source: &str, language: &str, renderer: &mut R) {
        if source.is_empty() {
            return;
        }
        renderer.begin_render();
        match self.find(language) {
            Some(scanner) => {
                for token in scanner.tokenize(source) {
                    renderer.render_token(&token);
                }
            }
            None => renderer.render_token(&Token::new(TokenKind::Text, source)),
        }
        renderer.end_render();
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Renderer that records the call protocol for assertions
    struct RecordingRenderer {
        calls: Vec<String>,
    }

    impl RecordingRenderer {
        fn new() -> Self {
            Self { calls: Vec::new() }
        }
    }

    impl Render for RecordingRenderer {
        fn begin_render(&mut self) {
            self.calls.push("begin".into());
        }

        fn render_token(&mut self, token: &Token) {
            self.calls.push(format!("{}:{}", token.kind.name(), token.text));
        }

        fn end_render(&mut self) {
            self.calls.push("end".into());
        }
    }

    #[test]
    fn test_empty_source_never_calls_renderer() {
        let registry = Registry::new();
        let mut r = RecordingRenderer::new();
        registry.highlight("", "rust", &mut r);
        assert!(r.calls.is_empty());
    }

    #[test]
    fn test_unknown_language_falls_back_to_text() {
        let registry = Registry::new();
        let mut r = RecordingRenderer::new();
        registry.highlight("hello world", "totally-unknown-xyz", &mut r);
        assert_eq!(r.calls, vec!["begin", "Text:hello world", "end"]);
    }

    #[test]
    fn test_empty_identifier_falls_back_to_text() {
        let registry = Registry::new();
        let mut r = RecordingRenderer::new();
        registry.highlight("x", "", &mut r);
        assert_eq!(r.calls, vec!["begin", "Text:x", "end"]);
    }

    #[test]
    fn test_known_language_emits_protocol() {
        let registry = Registry::new();
        let mut r = RecordingRenderer::new();
        registry.highlight("let x", "rust", &mut r);
        assert_eq!(r.calls.first().map(String::as_str), Some("begin"));
        assert_eq!(r.calls.last().map(String::as_str), Some("end"));
        assert!(r.calls.contains(&"Keyword:let".to_string()));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let registry = Registry::new();
        assert!(registry.find("RUST").is_some());
        assert!(registry.find("Json").is_some());
        assert!(registry.find("").is_none());
    }

    #[test]
    fn test_registration_order_is_deterministic() {
        let a: Vec<_> = Registry::new().list().iter().map(|s| s.name()).collect();
        let b: Vec<_> = Registry::new().list().iter().map(|s| s.name()).collect();
        assert_eq!(a, b);
    }
}
