//! file: core/src/compiler/mod.rs
//! description: CST to IR lowering.
//!
//! Six stateless compilers, leaves first: `path`, `string`, `literal`,
//! `argument`, `mutation` and `expression`. `literal::compile` is the
//! shared entry point every other compiler uses to lower a value.
//!
//! No compiler keeps state between calls, so disjoint subtrees can be
//! compiled from different threads.
//!
pub mod argument;
pub mod err;
pub mod expression;
pub mod literal;
pub mod mutation;
pub mod path;
pub mod string;

use crate::cst::{CstChild, CstNode, Token};
use crate::error::StoryErrorExt;

pub use err::CompileError;

pub type CompileResult<T> = Result<T, Box<dyn StoryErrorExt>>;

pub(crate) fn fail<T>(error: CompileError) -> CompileResult<T> {
    log::debug!("compile failed: {}", error);
    Err(Box::new(error))
}

pub(crate) fn expect_child<'a>(node: &'a CstNode, index: usize, issuer: &str) -> CompileResult<&'a CstChild> {
    match node.child(index) {
        Some(child) => Ok(child),
        None => fail(CompileError::missing_child(node, index, issuer)),
    }
}

pub(crate) fn expect_token<'a>(node: &'a CstNode, index: usize, issuer: &str) -> CompileResult<&'a Token> {
    match expect_child(node, index, issuer)? {
        CstChild::Token(token) => Ok(token),
        CstChild::Node(inner) => fail(CompileError::at(
            node,
            issuer,
            format!("Expected a token at position {} of `{}`, found `{}`.", index, node.kind, inner.kind),
        )),
    }
}

pub(crate) fn expect_node<'a>(node: &'a CstNode, index: usize, issuer: &str) -> CompileResult<&'a CstNode> {
    match expect_child(node, index, issuer)? {
        CstChild::Node(inner) => Ok(inner),
        CstChild::Token(token) => fail(CompileError::at(
            node,
            issuer,
            format!("Expected a node at position {} of `{}`, found {} token {:?}.", index, node.kind, token.kind, token.value),
        )),
    }
}
