//! Call arguments and typed signature parameters.
use crate::cst::{CstKind, CstNode};
use crate::ir::Argument;

use super::{expect_node, expect_token, fail, literal, CompileError, CompileResult};

const ISSUER: &str = "storyscript.compiler.argument";

/// `name: value` → `Argument { name, value }`.
pub fn argument(node: &CstNode) -> CompileResult<Argument> {
    let name = expect_token(node, 0, ISSUER)?;
    let value = literal::compile(expect_node(node, 1, ISSUER)?)?;
    Ok(Argument::new(name.value.clone(), value))
}

/// Every `Argument` production found in `node`, in source order.
pub fn arguments(node: &CstNode) -> CompileResult<Vec<Argument>> {
    let found = node.find_all(CstKind::Argument);
    log::debug!("compiling {} argument(s)", found.len());
    found.into_iter().map(argument).collect()
}

/// Lowers a signature parameter, given either the `FunctionArgument`
/// wrapper or the `TypedArgument` itself.
///
/// The value child is placed in a synthetic `Values` container so it goes
/// through `literal::compile` like any call argument value.
pub fn typed_argument(node: &CstNode) -> CompileResult<Argument> {
    let typed = match node.kind {
        CstKind::TypedArgument => node,
        _ => match node.find_all(CstKind::TypedArgument).into_iter().next() {
            Some(typed) => typed,
            None => {
                return fail(CompileError::at(
                    node,
                    ISSUER,
                    format!("`{}` node holds no typed argument.", node.kind),
                ));
            }
        },
    };

    let name = expect_token(typed, 0, ISSUER)?;
    let value_child = match typed.child(1) {
        Some(child) => child.clone(),
        None => return fail(CompileError::missing_child(typed, 1, ISSUER)),
    };
    let wrapper = CstNode::synthetic(CstKind::Values, value_child);
    let value = literal::compile(&wrapper)?;
    Ok(Argument::new(name.value.clone(), value))
}

/// Every parameter of a signature, in declaration order.
pub fn function_arguments(node: &CstNode) -> CompileResult<Vec<Argument>> {
    node.find_all(CstKind::FunctionArgument)
        .into_iter()
        .map(typed_argument)
        .collect()
}
