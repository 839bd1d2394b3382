//! Pascal / Delphi language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "and", "array", "as", "begin", "case", "class", "const", "constructor", "destructor",
        "div", "do", "downto", "else", "end", "except", "file", "finally", "for", "function",
        "goto", "if", "implementation", "in", "inherited", "interface", "is", "label", "mod",
        "nil", "not", "object", "of", "or", "packed", "procedure", "program", "property",
        "raise", "record", "repeat", "set", "shl", "shr", "then", "to", "try", "type", "unit",
        "until", "uses", "var", "while", "with", "xor",
    ],
    types: &[
        "AnsiString", "Boolean", "Byte", "Cardinal", "Char", "Comp", "Currency", "Double",
        "Extended", "Int64", "Integer", "LongInt", "LongWord", "Pointer", "Real", "ShortInt",
        "Single", "SmallInt", "String", "TObject", "Variant", "Word",
    ],
    literals: &["True", "False", "nil"],
    case_insensitive: true,
    block_comments: &[("{", "}"), ("(*", "*)")],
    line_comments: &["//"],
    strings: &[StringRule::raw("'", "'")],
    operators: &[":=", "<>", "<=", ">=", ".."],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Pascal", &["pas", "delphi", "pp"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_brace_comment() {
        let toks = scanner().tokenize("{ note } begin");
        assert_eq!(toks[0].kind, TokenKind::Comment);
        assert_eq!(toks[0].text, "{ note }");
        assert_eq!(toks.last().unwrap().kind, TokenKind::Keyword);
    }

    #[test]
    fn test_assignment() {
        let toks = scanner().tokenize("x := 'ok';");
        assert_eq!(toks[2].text, ":=");
        assert_eq!(toks[4].kind, TokenKind::String);
    }
}
