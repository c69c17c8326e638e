use pest_derive::Parser;

use super::kind::{CstKind, TokenType};

#[derive(Parser)]
#[grammar = "grammar.pest"]

pub struct RulesParser;

/// What a pest rule becomes once it is lifted into the CST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Production {
    Node(CstKind),
    Token(TokenType),
    /// Entry rules, end-of-input and silent rules; never stored in the tree.
    Skip,
}

/// Maps every grammar rule to its CST production. The match has no
/// wildcard arm so a rule added to the grammar fails to compile until it
/// is classified here.
pub(crate) fn production(rule: Rule) -> Production {
    match rule {
        Rule::name => Production::Token(TokenType::Name),
        Rule::string_token => Production::Token(TokenType::String),
        Rule::int => Production::Token(TokenType::Int),
        Rule::boolean_token => Production::Token(TokenType::Boolean),
        Rule::type_name => Production::Token(TokenType::TypeName),
        Rule::operator_token | Rule::comparison_token => Production::Token(TokenType::Operator),

        Rule::string => Production::Node(CstKind::String),
        Rule::boolean => Production::Node(CstKind::Boolean),
        Rule::number => Production::Node(CstKind::Number),
        Rule::types => Production::Node(CstKind::Types),
        Rule::list => Production::Node(CstKind::List),
        Rule::objects => Production::Node(CstKind::Objects),
        Rule::key_value => Production::Node(CstKind::KeyValue),
        Rule::path => Production::Node(CstKind::Path),
        Rule::path_fragment => Production::Node(CstKind::PathFragment),
        Rule::values => Production::Node(CstKind::Values),
        Rule::argument => Production::Node(CstKind::Argument),
        Rule::argument_list => Production::Node(CstKind::ArgumentList),
        Rule::typed_argument => Production::Node(CstKind::TypedArgument),
        Rule::function_argument => Production::Node(CstKind::FunctionArgument),
        Rule::function_arguments => Production::Node(CstKind::FunctionArguments),
        Rule::command => Production::Node(CstKind::Command),
        Rule::mutation => Production::Node(CstKind::Mutation),
        Rule::mutation_call => Production::Node(CstKind::MutationCall),
        Rule::operator => Production::Node(CstKind::Operator),
        Rule::comparison => Production::Node(CstKind::Comparison),
        Rule::path_value => Production::Node(CstKind::PathValue),
        Rule::expression => Production::Node(CstKind::Expression),

        Rule::values_entry
        | Rule::expression_entry
        | Rule::mutation_entry
        | Rule::signature_entry
        | Rule::EOI => Production::Skip,

        // Silent rules never produce pairs.
        Rule::WHITESPACE | Rule::COMMENT | Rule::ident_char => Production::Skip,
    }
}
