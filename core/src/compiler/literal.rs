//! file: core/src/compiler/literal.rs
//! description: value dispatch.
//!
//! `compile` takes a value wrapper (usually a `Values` node) and lowers its
//! first child according to its production. It is the one entry point
//! through which every other compiler lowers a value.
//!
use crate::cst::{CstChild, CstKind, CstNode, TokenType};
use crate::ir::{DictKey, IrValue};

use super::{expect_child, expect_node, expect_token, fail, path, string, CompileError, CompileResult};

const ISSUER: &str = "storyscript.compiler.literal.compile";

/// Lowers the value held by `node`.
///
/// A bare name token as first child means the wrapper itself is shaped
/// like a path (`name` followed by fragments) and is resolved as one.
pub fn compile(node: &CstNode) -> CompileResult<IrValue> {
    let inner = match expect_child(node, 0, ISSUER)? {
        CstChild::Node(inner) => inner,
        CstChild::Token(token) if token.kind == TokenType::Name => {
            return Ok(IrValue::Path(path::resolve(node)?));
        }
        CstChild::Token(token) => {
            return fail(CompileError::at(
                node,
                ISSUER,
                format!("Unexpected {} token {:?} in value position.", token.kind, token.value),
            ));
        }
    };

    log::trace!("compiling `{}` value", inner.kind);
    match inner.kind {
        CstKind::String => Ok(IrValue::String(string::compile(inner)?)),
        CstKind::Boolean => Ok(IrValue::Boolean(boolean(inner)?)),
        CstKind::List => Ok(IrValue::List(list(inner)?)),
        CstKind::Number => Ok(IrValue::Number(number(inner)?)),
        CstKind::Objects => Ok(IrValue::Dict(objects(inner)?)),
        CstKind::Types => Ok(IrValue::Type(types(inner)?)),
        CstKind::Path => Ok(IrValue::Path(path::resolve(inner)?)),
        CstKind::Values
        | CstKind::KeyValue
        | CstKind::PathFragment
        | CstKind::Argument
        | CstKind::ArgumentList
        | CstKind::TypedArgument
        | CstKind::FunctionArgument
        | CstKind::FunctionArguments
        | CstKind::Mutation
        | CstKind::MutationCall
        | CstKind::Command
        | CstKind::Expression
        | CstKind::PathValue
        | CstKind::Operator
        | CstKind::Comparison => fail(CompileError::unexpected_kind(node, inner.kind, ISSUER)),
    }
}

/// Only the exact text `true` is true. `True`, `TRUE` and everything else
/// compile to false.
pub fn boolean(node: &CstNode) -> CompileResult<bool> {
    let token = expect_token(node, 0, ISSUER)?;
    Ok(token.value == "true")
}

pub fn number(node: &CstNode) -> CompileResult<i64> {
    let token = expect_token(node, 0, ISSUER)?;
    match token.value.parse::<i64>() {
        Ok(number) => Ok(number),
        Err(e) => fail(CompileError::at(
            node,
            ISSUER,
            format!("Invalid integer literal {:?}: {}.", token.value, e),
        )),
    }
}

pub fn list(node: &CstNode) -> CompileResult<Vec<IrValue>> {
    let mut items = Vec::with_capacity(node.children.len());
    for index in 0..node.children.len() {
        items.push(compile(expect_node(node, index, ISSUER)?)?);
    }
    Ok(items)
}

/// Dictionary entries in declaration order. Duplicate keys are kept as
/// separate entries.
pub fn objects(node: &CstNode) -> CompileResult<Vec<(DictKey, IrValue)>> {
    let mut items = Vec::with_capacity(node.children.len());
    for index in 0..node.children.len() {
        let entry = expect_node(node, index, ISSUER)?;
        let key_node = expect_node(entry, 0, ISSUER)?;
        let key = match key_node.kind {
            CstKind::String => DictKey::String(string::compile(key_node)?),
            CstKind::Path => DictKey::Path(path::resolve(key_node)?),
            other => return fail(CompileError::unexpected_kind(entry, other, ISSUER)),
        };
        let value = compile(expect_node(entry, 1, ISSUER)?)?;
        items.push((key, value));
    }
    Ok(items)
}

pub fn types(node: &CstNode) -> CompileResult<String> {
    Ok(expect_token(node, 0, ISSUER)?.value.clone())
}
