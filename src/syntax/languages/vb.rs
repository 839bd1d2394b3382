//! Visual Basic (.NET) language definition

use crate::syntax::{Engine, Grammar, Scanner, StringRule};

static GRAMMAR: Grammar = Grammar {
    keywords: &[
        "AddHandler", "AndAlso", "As", "ByRef", "ByVal", "Call", "Case", "Catch", "Class",
        "Const", "Continue", "Delegate", "Dim", "Do", "Each", "Else", "ElseIf", "End", "Enum",
        "Erase", "Error", "Event", "Exit", "Finally", "For", "Function", "Get", "GoTo",
        "Handles", "If", "Implements", "Imports", "In", "Inherits", "Interface", "Is", "Let",
        "Loop", "Me", "Mod", "Module", "MustInherit", "MustOverride", "Namespace", "New", "Next",
        "Not", "Nothing", "Of", "On", "Operator", "Optional", "OrElse", "Overloads",
        "Overridable", "Overrides", "ParamArray", "Partial", "Private", "Property", "Protected",
        "Public", "RaiseEvent", "ReadOnly", "ReDim", "RemoveHandler", "Resume", "Return",
        "Select", "Set", "Shadows", "Shared", "Static", "Step", "Stop", "Structure", "Sub",
        "SyncLock", "Then", "Throw", "To", "Try", "TypeOf", "Until", "Using", "When", "While",
        "With", "WriteOnly", "Xor", "And", "Or",
    ],
    types: &[
        "Boolean", "Byte", "Char", "Date", "Decimal", "Double", "Integer", "Long", "Object",
        "SByte", "Short", "Single", "String", "UInteger", "ULong", "UShort",
    ],
    literals: &["True", "False", "Nothing"],
    case_insensitive: true,
    line_comments: &["'"],
    strings: &[StringRule::raw("\"", "\"")],
    operators: &["<>", "<=", ">=", ":=", "&=", "+=", "-=", "*=", "/=", "^=", "<<", ">>"],
    number_suffixes: &["L", "UL", "S", "US", "I", "UI", "D", "F", "R", "C"],
    preprocessor: Some("#"),
    ..Grammar::DEFAULT
};

pub fn scanner() -> Scanner {
    Scanner::new("Visual Basic", &["vb", "vbnet", "vbs"], Engine::Table(&GRAMMAR))
}
