//! file: core/src/compiler/expression.rs
//! description: binary and comparison expressions.
//!
//! Two shapes are accepted:
//!
//! - `values operator values`: always an `Expression`.
//! - `path_value (comparison path_value)?`: a lone value passes through
//!   unwrapped, otherwise an `Expression`.
//!
//! Both are returned as a `CompiledExpression`, which is emitted as a
//! one-element sequence.
//!
use crate::cst::{CstChild, CstKind, CstNode};
use crate::ir::{CompiledExpression, Expression};

use super::{expect_node, expect_token, fail, literal, CompileError, CompileResult};

const ISSUER: &str = "storyscript.compiler.expression.compile";

pub fn compile(node: &CstNode) -> CompileResult<CompiledExpression> {
    if let Some(values) = node.values() {
        let operator = match node.operator() {
            Some(operator) => operator,
            None => {
                return fail(CompileError::at(
                    node,
                    ISSUER,
                    "Binary expression has no operator.".into(),
                ));
            }
        };
        let op = expect_token(operator, 0, ISSUER)?;
        let left = literal::compile(values)?;
        let right = literal::compile(expect_node(node, 2, ISSUER)?)?;
        log::trace!("binary expression `{}`", op.value);
        return Ok(CompiledExpression::Expression(Expression::new(&op.value, left, right)));
    }

    let path_value = match node.path_value() {
        Some(path_value) => path_value,
        None => {
            return fail(CompileError::at(
                node,
                ISSUER,
                "Expression has neither operands nor a path value.".into(),
            ));
        }
    };
    let left = literal::compile(expect_node(path_value, 0, ISSUER)?)?;

    // Only an absent second child means a lone value.
    let comparison = match node.child(1) {
        None => return Ok(CompiledExpression::Plain(left)),
        Some(CstChild::Node(comparison)) if comparison.kind == CstKind::Comparison => comparison,
        Some(CstChild::Node(other)) => return fail(CompileError::unexpected_kind(node, other.kind, ISSUER)),
        Some(CstChild::Token(token)) => {
            return fail(CompileError::at(
                node,
                ISSUER,
                format!("Expected a comparison after the left operand, found {} token {:?}.", token.kind, token.value),
            ));
        }
    };
    let op = expect_token(comparison, 0, ISSUER)?;
    let right_side = expect_node(node, 2, ISSUER)?;
    let right = literal::compile(expect_node(right_side, 0, ISSUER)?)?;
    log::trace!("comparison expression `{}`", op.value);
    Ok(CompiledExpression::Expression(Expression::new(&op.value, left, right)))
}
