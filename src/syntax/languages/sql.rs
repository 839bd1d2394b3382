//! SQL language definition
//!
//! Keywords match case-insensitively, and single-quoted strings use the
//! doubled-quote escape rather than backslashes, so they scan as raw text.

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "ADD", "ALL", "ALTER", "AND", "AS", "ASC", "BEGIN", "BETWEEN", "BY", "CASE", "CHECK",
        "COLUMN", "COMMIT", "CONSTRAINT", "CREATE", "CROSS", "DATABASE", "DEFAULT", "DELETE",
        "DESC", "DISTINCT", "DROP", "ELSE", "END", "EXISTS", "FOREIGN", "FROM", "FULL", "GRANT",
        "GROUP", "HAVING", "IN", "INDEX", "INNER", "INSERT", "INTO", "IS", "JOIN", "KEY", "LEFT",
        "LIKE", "LIMIT", "NOT", "OFFSET", "ON", "OR", "ORDER", "OUTER", "PRIMARY", "PROCEDURE",
        "REFERENCES", "RETURNING", "REVOKE", "RIGHT", "ROLLBACK", "SELECT", "SET", "TABLE",
        "THEN", "TRANSACTION", "TRIGGER", "UNION", "UNIQUE", "UPDATE", "VALUES", "VIEW", "WHEN",
        "WHERE", "WITH",
    ],
    types: &[
        "BIGINT", "BLOB", "BOOLEAN", "CHAR", "DATE", "DATETIME", "DECIMAL", "DOUBLE", "FLOAT",
        "INT", "INTEGER", "JSON", "JSONB", "NUMERIC", "REAL", "SERIAL", "SMALLINT", "TEXT",
        "TIME", "TIMESTAMP", "UUID", "VARCHAR",
    ],
    literals: &["NULL", "TRUE", "FALSE"],
    case_insensitive: true,
    line_comments: &["--"],
    block_comments: &[("/*", "*/")],
    strings: &[StringRule::raw("'", "'"), StringRule::quoted("\"")],
    operators: &["<>", "<=", ">=", "!=", "||", "::"],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("SQL", &["mysql", "postgres", "postgresql", "sqlite"], Engine::Table(&GRAMMAR))
}
