//! Language detection from file paths
//!
//! A pure function from a path to a language identifier, based on special
//! filenames first (Makefile, Dockerfile) and the lowercased extension
//! otherwise. The identifier feeds straight into `Registry::highlight`;
//! "unknown" is simply `None`, which the dispatcher turns into plain text.

use std::path::Path;

/// Special filenames that identify a language without any extension
const FILENAMES: &[(&str, &str)] = &[
    ("makefile", "makefile"),
    ("gnumakefile", "makefile"),
    ("dockerfile", "dockerfile"),
    ("rakefile", "ruby"),
    ("gemfile", "ruby"),
];

/// Extension to language identifier, lowercased
const EXTENSIONS: &[(&str, &str)] = &[
    ("rs", "rust"),
    ("c", "c"),
    ("h", "c"),
    ("cpp", "cpp"),
    ("cc", "cpp"),
    ("cxx", "cpp"),
    ("hpp", "cpp"),
    ("cs", "csharp"),
    ("java", "java"),
    ("js", "javascript"),
    ("mjs", "javascript"),
    ("jsx", "javascript"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("py", "python"),
    ("pyw", "python"),
    ("rb", "ruby"),
    ("go", "go"),
    ("swift", "swift"),
    ("kt", "kotlin"),
    ("kts", "kotlin"),
    ("lua", "lua"),
    ("pl", "perl"),
    ("pm", "perl"),
    ("r", "r"),
    ("hs", "haskell"),
    ("ml", "ocaml"),
    ("mli", "ocaml"),
    ("ex", "elixir"),
    ("exs", "elixir"),
    ("dart", "dart"),
    ("scala", "scala"),
    ("sc", "scala"),
    ("zig", "zig"),
    ("groovy", "groovy"),
    ("gradle", "groovy"),
    ("sql", "sql"),
    ("json", "json"),
    ("toml", "toml"),
    ("sh", "shell"),
    ("bash", "shell"),
    ("zsh", "shell"),
    ("ps1", "powershell"),
    ("bat", "batch"),
    ("cmd", "batch"),
    ("vb", "vb"),
    ("pas", "pascal"),
    ("pp", "pascal"),
    ("graphql", "graphql"),
    ("gql", "graphql"),
    ("proto", "protobuf"),
    ("nim", "nim"),
    ("jl", "julia"),
    ("clj", "clojure"),
    ("cljs", "clojure"),
    ("edn", "clojure"),
    ("html", "html"),
    ("htm", "html"),
    ("xml", "xml"),
    ("svg", "xml"),
    ("xsl", "xml"),
    ("css", "css"),
    ("md", "markdown"),
    ("markdown", "markdown"),
    ("mk", "makefile"),
    ("diff", "diff"),
    ("patch", "diff"),
    ("ini", "ini"),
    ("cfg", "ini"),
    ("conf", "ini"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
    ("php", "php"),
    ("phtml", "php"),
];

/// Detect the language identifier for a file path
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        let lowered = name.to_lowercase();
        for (filename, lang) in FILENAMES {
            if lowered == *filename {
                return Some(lang);
            }
        }
    }
    let ext = path.extension()?.to_str()?.to_lowercase();
    EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, lang)| *lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(language_for_path(Path::new("main.rs")), Some("rust"));
        assert_eq!(language_for_path(Path::new("test.PY")), Some("python"));
        assert_eq!(language_for_path(Path::new("a/b/app.tsx")), Some("typescript"));
        assert_eq!(language_for_path(Path::new("style.css")), Some("css"));
    }

    #[test]
    fn test_detect_by_filename() {
        assert_eq!(language_for_path(Path::new("Makefile")), Some("makefile"));
        assert_eq!(language_for_path(Path::new("sub/Dockerfile")), Some("dockerfile"));
        assert_eq!(language_for_path(Path::new("Gemfile")), Some("ruby"));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(language_for_path(Path::new("no_extension")), None);
        assert_eq!(language_for_path(Path::new("data.bin")), None);
    }

    #[test]
    fn test_every_detected_language_is_registered() {
        let registry = crate::syntax::Registry::new();
        for (_, lang) in FILENAMES.iter().chain(EXTENSIONS) {
            assert!(
                registry.find(lang).is_some(),
                "detector maps to unregistered language {lang}"
            );
        }
    }
}
