//! file: core/src/cst/mod.rs
//! description: concrete syntax tree and the pest front-end producing it.
//!
//! The compilers consume `CstNode` trees only. `generate_cst_from_source`
//! is the bundled way to obtain one from story source text; hosts with
//! their own parser can build `CstNode` values directly.
//!
pub mod err;
pub mod kind;
pub mod node;
pub mod rules;

pub use crate::error::StoryErrorExt;
pub use kind::{CstKind, TokenType};
pub use node::{CstChild, CstNode, Token};
pub use rules::{RulesParser, Rule};

use pest::Parser;

use crate::location::Span;
use crate::script::Script;
use rules::Production;

/// Grammar entry point to parse a script with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRule {
    /// A single value: literal, path, list or dictionary.
    Values,
    Expression,
    /// A receiver path followed by a mutation call.
    Mutation,
    /// The typed parameter list of a function signature.
    Signature,
}

impl EntryRule {
    fn rule(self) -> Rule {
        match self {
            EntryRule::Values => Rule::values_entry,
            EntryRule::Expression => Rule::expression_entry,
            EntryRule::Mutation => Rule::mutation_entry,
            EntryRule::Signature => Rule::signature_entry,
        }
    }
}

impl std::str::FromStr for EntryRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "values" => Ok(EntryRule::Values),
            "expression" => Ok(EntryRule::Expression),
            "mutation" => Ok(EntryRule::Mutation),
            "signature" => Ok(EntryRule::Signature),
            other => Err(format!("unknown entry rule `{}`", other)),
        }
    }
}

/// Parses `script` starting at `entry` and returns the root production.
///
/// # Errors
///
/// `SyntaxError` when the script holds only whitespace or the grammar
/// rejects the source.
pub fn generate_cst_from_source(
    entry: EntryRule,
    script: &Script,
) -> Result<CstNode, Box<dyn StoryErrorExt>> {
    if script.is_empty() {
        return Err(Box::new(err::SyntaxError::empty_script(&script.name)));
    }

    let mut pairs = RulesParser::parse(entry.rule(), &script.content)
        .map_err(|e| -> Box<dyn StoryErrorExt> { Box::new(err::SyntaxError::from_pest(&e, &script.name)) })?;

    let entry_pair = match pairs.next() {
        Some(pair) => pair,
        None => {
            return Err(Box::new(err::SyntaxError::with(
                crate::Level::Error,
                "Parser produced no pairs for the entry rule.".into(),
                "storyscript.cst.generate_cst_from_source".into(),
                None,
                None,
            )));
        }
    };
    let entry_span = Span::from_pest(&script.name, entry_pair.as_span());

    for pair in entry_pair.into_inner() {
        if let Some(CstChild::Node(node)) = build_child(pair, &script.name) {
            log::trace!("parsed {} from {}", node.kind, script.name);
            return Ok(node);
        }
    }

    // Only an empty signature matches without producing a node.
    Ok(CstNode::new(CstKind::FunctionArguments, Vec::new()).with_span(entry_span))
}

fn build_child(pair: pest::iterators::Pair<Rule>, file: &str) -> Option<CstChild> {
    let span = Span::from_pest(file, pair.as_span());
    match rules::production(pair.as_rule()) {
        Production::Token(kind) => Some(CstChild::Token(Token::new(kind, pair.as_str()).with_span(span))),
        Production::Node(kind) => {
            let children = pair
                .into_inner()
                .filter_map(|inner| build_child(inner, file))
                .collect();
            Some(CstChild::Node(CstNode::new(kind, children).with_span(span)))
        }
        Production::Skip => None,
    }
}
