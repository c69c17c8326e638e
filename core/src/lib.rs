pub mod compiler;
pub mod cst;
pub mod diagnostic;
pub mod error;
pub mod ir;
pub mod location;
pub mod script;

pub use cst::{generate_cst_from_source, CstNode, EntryRule, RulesParser};
pub use diagnostic::{ErrorCode, StoryError};
pub use error::{Level, StoryErrorExt};
pub use ir::{CompiledExpression, IrValue};
pub use location::{Location, Span};
pub use script::Script;

use serde::Serialize;

pub fn generate_error_report<E: StoryErrorExt + ?Sized>(error: &E) -> String {
    let level = error.level();
    let location = match error.location() {
        Some(loc) => loc.to_string(),
        None => "unknown location".to_string(),
    };
    let message = error.message();

    format!("STORY | {} | {} | {}", level, location, message)
}

/// IR produced for one entry rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CompiledUnit {
    Value(IrValue),
    Expression(CompiledExpression),
    /// Receiver path and the mutation applied to it.
    MutationCall(ir::Path, ir::Mutation),
    Signature(Vec<ir::Argument>),
}

/// Parses `script` from `entry` and lowers the resulting tree.
pub fn compile_source(entry: EntryRule, script: &Script) -> Result<CompiledUnit, Box<dyn StoryErrorExt>> {
    let cst = generate_cst_from_source(entry, script)?;
    compile_cst(entry, &cst)
}

/// Lowers an already-built tree whose root matches `entry`.
pub fn compile_cst(entry: EntryRule, cst: &CstNode) -> Result<CompiledUnit, Box<dyn StoryErrorExt>> {
    log::debug!("compiling `{}` root as {:?}", cst.kind, entry);
    let unit = match entry {
        EntryRule::Values => CompiledUnit::Value(compiler::literal::compile(cst)?),
        EntryRule::Expression => CompiledUnit::Expression(compiler::expression::compile(cst)?),
        EntryRule::Mutation => {
            let (receiver, mutation) = compiler::mutation::compile_call(cst)?;
            CompiledUnit::MutationCall(receiver, mutation)
        }
        EntryRule::Signature => CompiledUnit::Signature(compiler::argument::function_arguments(cst)?),
    };
    Ok(unit)
}
