//! GraphQL schema and query language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "directive", "enum", "extend", "fragment", "implements", "input", "interface", "mutation",
        "on", "query", "repeatable", "scalar", "schema", "subscription", "type", "union",
    ],
    types: &["Boolean", "Float", "ID", "Int", "String"],
    literals: &["null", "true", "false"],
    caps_are_types: true,
    line_comments: &["#"],
    strings: &[StringRule::quoted("\"\"\""), StringRule::quoted("\"")],
    ident_start_extra: &[b'$', b'@'],
    operators: &["..."],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("GraphQL", &["gql", "graphqls"], Engine::Table(&GRAMMAR))
}
