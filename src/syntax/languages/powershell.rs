//! PowerShell language definition
//!
//! Cmdlet names (`Get-Item`) keep their dash via `ident_continue_extra`.

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "begin", "break", "catch", "class", "continue", "do", "dynamicparam", "else", "elseif",
        "end", "enum", "exit", "filter", "finally", "for", "foreach", "function", "hidden", "if",
        "in", "param", "process", "return", "static", "switch", "throw", "trap", "try", "until",
        "using", "while",
    ],
    types: &[
        "bool", "byte", "char", "datetime", "decimal", "double", "hashtable", "int", "long",
        "object", "psobject", "string", "switch", "xml",
    ],
    literals: &["$null", "$true", "$false"],
    case_insensitive: true,
    line_comments: &["#"],
    block_comments: &[("<#", "#>")],
    strings: &[
        StringRule::interpolated("\"", "$("),
        StringRule::raw("'", "'"),
    ],
    ident_start_extra: &[b'$'],
    ident_continue_extra: &[b'-', b':'],
    operators: &[
        "-eq", "-ne", "-lt", "-gt", "-le", "-ge", "-like", "-notlike", "-match", "-notmatch",
        "-and", "-or", "-not", "-contains", "-in", "-replace", "-join", "-split", "++", "--",
        "+=", "-=", "*=", "/=", "|>",
    ],
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("PowerShell", &["ps1", "pwsh", "psm1"], Engine::Table(&GRAMMAR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::TokenKind;

    #[test]
    fn test_variable_and_cmdlet() {
        let toks = scanner().tokenize("$items = Get-ChildItem");
        assert_eq!(toks[0].text, "$items");
        assert_eq!(toks.last().unwrap().text, "Get-ChildItem");
    }

    #[test]
    fn test_block_comment() {
        let toks = scanner().tokenize("<# help #> x");
        assert_eq!(toks[0].kind, TokenKind::Comment);
        assert_eq!(toks[0].text, "<# help #>");
    }
}
