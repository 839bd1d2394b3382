//! Protocol Buffers definition (proto2 and proto3 keywords)

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "enum", "extend", "extensions", "import", "map", "message", "oneof", "option", "optional",
        "package", "public", "repeated", "required", "reserved", "returns", "rpc", "service",
        "stream", "syntax", "to", "weak",
    ],
    types: &[
        "bool", "bytes", "double", "fixed32", "fixed64", "float", "int32", "int64", "sfixed32",
        "sfixed64", "sint32", "sint64", "string", "uint32", "uint64",
    ],
    literals: &["true", "false"],
    line_comments: &["//"],
    block_comments: &[("/*", "*/")],
    strings: &[StringRule::quoted("\""), StringRule::quoted("'")],
    operators: &[],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Protobuf", &["proto", "proto3"], Engine::Table(&GRAMMAR))
}
