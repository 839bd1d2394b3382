//! Zig language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "align", "allowzero", "and", "anyframe", "anytype", "asm", "async", "await", "break",
        "callconv", "catch", "comptime", "const", "continue", "defer", "else", "enum", "errdefer",
        "error", "export", "extern", "fn", "for", "if", "inline", "noalias", "noinline",
        "nosuspend", "opaque", "or", "orelse", "packed", "pub", "resume", "return", "struct",
        "suspend", "switch", "test", "threadlocal", "try", "union", "unreachable", "usingnamespace",
        "var", "volatile", "while",
    ],
    types: &[
        "anyerror", "anyopaque", "bool", "c_char", "c_int", "c_long", "c_longlong", "c_short",
        "c_uint", "c_ulong", "comptime_float", "comptime_int", "f128", "f16", "f32", "f64", "f80",
        "i128", "i16", "i32", "i64", "i8", "isize", "noreturn", "type", "u128", "u16", "u32",
        "u64", "u8", "usize", "void",
    ],
    literals: &["null", "true", "false", "undefined"],
    line_comments: &["///", "//"],
    strings: &[
        StringRule::raw("\\\\", "\n"),
        StringRule::quoted("\""),
        StringRule::quoted("'"),
    ],
    ident_start_extra: &[b'@'],
    operators: &[
        "+%=", "-%=", "*%=", "<<=", ">>=", "=>", "->", "==", "!=", "<=", ">=", "+%", "-%", "*%",
        "++", "**", "+=", "-=", "*=", "/=", "%=", "|=", "&=", "^=", "<<", ">>", ".?", ".*", "||",
    ],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Zig", &[], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_builtin_call() {
        let toks = scanner().tokenize("@import(\"std\")");
        assert_eq!(toks[0].text, "@import");
        assert_eq!(toks[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_multiline_string_line() {
        let toks = scanner().tokenize("\\\\line one\nx");
        assert_eq!(toks[0].kind, TokenKind::String);
        assert_eq!(toks[0].text, "\\\\line one\n");
    }
}
