//! file: core/src/cst/kind.rs
//! description: CST node kinds and token types.
//!
//! `CstKind` is the closed set of grammar productions the compilers know
//! how to lower; `TokenType` tags the leaf tokens those productions carry.
//!

/// Grammar productions that appear as inner nodes of the CST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CstKind {
    /// Wrapper around a single value (literal, path or composite).
    Values,
    String,
    Boolean,
    Number,
    List,
    /// Dictionary literal; children are `KeyValue` entries.
    Objects,
    KeyValue,
    Types,
    Path,
    PathFragment,
    /// A single `name: value` call argument.
    Argument,
    ArgumentList,
    /// A single `name: type` signature parameter.
    TypedArgument,
    FunctionArgument,
    FunctionArguments,
    Mutation,
    /// Receiver path followed by a mutation.
    MutationCall,
    Command,
    Expression,
    PathValue,
    Operator,
    Comparison,
}

/// Types of the leaf tokens stored in a CST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Name,
    /// Raw string literal text, quotes included.
    String,
    Int,
    Boolean,
    TypeName,
    Operator,
}

use std::fmt;

impl fmt::Display for CstKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CstKind::Values => "values",
            CstKind::String => "string",
            CstKind::Boolean => "boolean",
            CstKind::Number => "number",
            CstKind::List => "list",
            CstKind::Objects => "objects",
            CstKind::KeyValue => "key_value",
            CstKind::Types => "types",
            CstKind::Path => "path",
            CstKind::PathFragment => "path_fragment",
            CstKind::Argument => "argument",
            CstKind::ArgumentList => "argument_list",
            CstKind::TypedArgument => "typed_argument",
            CstKind::FunctionArgument => "function_argument",
            CstKind::FunctionArguments => "function_arguments",
            CstKind::Mutation => "mutation",
            CstKind::MutationCall => "mutation_call",
            CstKind::Command => "command",
            CstKind::Expression => "expression",
            CstKind::PathValue => "path_value",
            CstKind::Operator => "operator",
            CstKind::Comparison => "comparison",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Name => "NAME",
            TokenType::String => "STRING",
            TokenType::Int => "INT",
            TokenType::Boolean => "BOOLEAN",
            TokenType::TypeName => "TYPE",
            TokenType::Operator => "OPERATOR",
        };
        write!(f, "{}", name)
    }
}
