//! Mutation calls against a service or object.
use crate::cst::{CstKind, CstNode};
use crate::ir::{Mutation, Path};

use super::{argument, expect_node, expect_token, fail, path, CompileError, CompileResult};

const ISSUER: &str = "storyscript.compiler.mutation.compile";

/// Lowers a `Mutation` node.
///
/// The name is the leading name token unless a `Command` child is present,
/// in which case the command's name wins: `obj.run(...)` is `run`, while
/// `obj run go(...)` is `go`.
pub fn compile(node: &CstNode) -> CompileResult<Mutation> {
    let mut name = expect_token(node, 0, ISSUER)?.value.clone();

    let arguments = match node.arguments() {
        Some(list) => argument::arguments(list)?,
        None => Vec::new(),
    };

    if let Some(command) = node.command() {
        name = expect_token(command, 0, ISSUER)?.value.clone();
    }

    log::trace!("mutation `{}` with {} argument(s)", name, arguments.len());
    Ok(Mutation { name, arguments })
}

/// Lowers a `MutationCall` node into its receiver path and the mutation.
pub fn compile_call(node: &CstNode) -> CompileResult<(Path, Mutation)> {
    let receiver = path::resolve(expect_node(node, 0, ISSUER)?)?;
    let mutation = match node.slot(CstKind::Mutation) {
        Some(mutation) => compile(mutation)?,
        None => {
            return fail(CompileError::at(
                node,
                ISSUER,
                "Mutation call holds no mutation.".into(),
            ));
        }
    };
    Ok((receiver, mutation))
}
