//! Built-in language scanners
//!
//! One module per language. Most are pure data: a static [`Grammar`] fed
//! to the table-driven engine. The structurally different ones (markup,
//! line-sensitive formats, host/guest embedding) define custom scan
//! functions instead.
//!
//! [`all_scanners`] is the registration order; keep it deterministic, the
//! dispatcher resolves ties by first match.
//!
//! [`Grammar`]: crate::syntax::Grammar

mod batch;
mod c;
mod clojure;
mod cpp;
mod csharp;
mod css;
mod dart;
mod diff;
mod dockerfile;
mod elixir;
mod go;
mod graphql;
mod groovy;
mod haskell;
mod ini;
mod java;
mod javascript;
mod json;
mod julia;
mod kotlin;
mod lua;
mod makefile;
mod markdown;
mod markup;
mod nim;
mod ocaml;
mod pascal;
mod perl;
mod php;
mod powershell;
mod protobuf;
mod python;
mod r_lang;
mod ruby;
mod rust;
mod scala;
mod shell;
mod sql;
mod swift;
mod toml_lang;
mod typescript;
mod vb;
mod yaml;
mod zig;

use super::scanner::Scanner;

/// All built-in scanners, in registration order
pub fn all_scanners() -> Vec<Scanner> {
    vec![
        rust::scanner(),
        c::scanner(),
        cpp::scanner(),
        csharp::scanner(),
        java::scanner(),
        javascript::scanner(),
        typescript::scanner(),
        python::scanner(),
        ruby::scanner(),
        go::scanner(),
        swift::scanner(),
        kotlin::scanner(),
        lua::scanner(),
        perl::scanner(),
        r_lang::scanner(),
        haskell::scanner(),
        ocaml::scanner(),
        elixir::scanner(),
        dart::scanner(),
        scala::scanner(),
        zig::scanner(),
        groovy::scanner(),
        sql::scanner(),
        json::scanner(),
        toml_lang::scanner(),
        shell::scanner(),
        powershell::scanner(),
        batch::scanner(),
        vb::scanner(),
        pascal::scanner(),
        dockerfile::scanner(),
        graphql::scanner(),
        protobuf::scanner(),
        nim::scanner(),
        julia::scanner(),
        clojure::scanner(),
        markup::html_scanner(),
        markup::xml_scanner(),
        css::scanner(),
        markdown::scanner(),
        makefile::scanner(),
        diff::scanner(),
        ini::scanner(),
        yaml::scanner(),
        php::scanner(),
    ]
}
