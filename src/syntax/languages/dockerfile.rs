//! Dockerfile definition
//!
//! Instructions are conventionally upper-case but the parser accepts any
//! casing, so the keyword table matches case-insensitively.

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "ADD", "ARG", "CMD", "COPY", "ENTRYPOINT", "ENV", "EXPOSE", "FROM", "HEALTHCHECK",
        "LABEL", "MAINTAINER", "ONBUILD", "RUN", "SHELL", "STOPSIGNAL", "USER", "VOLUME",
        "WORKDIR", "AS",
    ],
    types: &[],
    literals: &[],
    case_insensitive: true,
    line_comments: &["#"],
    strings: &[StringRule::quoted("\""), StringRule::raw("'", "'")],
    ident_start_extra: &[b'$'],
    ident_continue_extra: &[b'-', b'.'],
    operators: &["&&", "||", ">>"],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Dockerfile", &["docker", "containerfile"], Engine::Table(&GRAMMAR))
}
