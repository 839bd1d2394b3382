//! Configuration file support
//!
//! Loads settings from ~/.tint.toml (or %USERPROFILE%\.tint.toml on
//! Windows). The file is TOML with a `[styles]` table mapping token kind
//! names to style strings:
//!
//! ```text
//! color = "auto"
//!
//! [styles]
//! keyword = "magenta bold"
//! comment = "gray italic"
//! string = "green"
//! ```
//!
//! Unknown color/attribute words inside a style string are ignored so old
//! configs keep loading; unknown kind names are an error, since a silently
//! dropped style is the harder bug to find.

use std::fs;
use std::path::PathBuf;

use crate::error::{Result, TintError};
use crate::render::{Style, Theme};
use crate::syntax::TokenKind;

/// When to emit color escapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

/// Configuration settings
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Color mode for terminal output
    pub color: ColorMode,
    /// Theme with any user overrides applied
    pub theme: Theme,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        let home = std::env::var("USERPROFILE").ok();

        #[cfg(not(windows))]
        let home = std::env::var("HOME").ok();

        home.map(|home| PathBuf::from(home).join(".tint.toml"))
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.is_file() => {
                let contents = fs::read_to_string(&path)?;
                Self::parse(&contents)
            }
            _ => Ok(Config::default()),
        }
    }

    /// Parse a config file's contents
    pub fn parse(contents: &str) -> Result<Self> {
        let table: toml::Table = contents.parse()?;
        let mut config = Config::default();

        if let Some(value) = table.get("color").and_then(|v| v.as_str()) {
            config.color = match value {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => ColorMode::Auto,
            };
        }

        if let Some(styles) = table.get("styles").and_then(|v| v.as_table()) {
            for (key, value) in styles {
                let kind = TokenKind::from_name(key)
                    .ok_or_else(|| TintError::UnknownKind(key.clone()))?;
                if let Some(spec) = value.as_str() {
                    config.theme.set_style(kind, Style::parse(spec));
                }
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;

    #[test]
    fn test_parse_styles() {
        let config = Config::parse(
            r#"
color = "never"

[styles]
keyword = "red bold"
number = "bright-cyan"
"#,
        )
        .unwrap();

        assert_eq!(config.color, ColorMode::Never);
        let keyword = config.theme.style(TokenKind::Keyword);
        assert_eq!(keyword.fg, Color::Red);
        assert!(keyword.bold);
        assert_eq!(config.theme.style(TokenKind::Number).fg, Color::BrightCyan);
        // Untouched kinds keep the default theme
        assert_eq!(config.theme.style(TokenKind::String).fg, Color::Green);
    }

    #[test]
    fn test_parse_empty_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_unknown_kind_is_an_error() {
        let result = Config::parse("[styles]\nsparkles = \"red\"\n");
        assert!(matches!(result, Err(TintError::UnknownKind(_))));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(matches!(
            Config::parse("color = ["),
            Err(TintError::Config(_))
        ));
    }
}
