//! Resolution of dotted/indexed name references.
use crate::cst::{CstChild, CstKind, CstNode};
use crate::ir::{Path, PathSegment};

use super::{expect_child, expect_token, fail, string, CompileError, CompileResult};

const ISSUER: &str = "storyscript.compiler.path.resolve";

/// Resolves a path-shaped node: a leading name token followed by zero or
/// more `PathFragment` nodes.
///
/// `a.b["c"][d.e]` resolves to `["a", "b", "c", Path(["d", "e"])]`.
pub fn resolve(node: &CstNode) -> CompileResult<Path> {
    log::trace!("resolving path from `{}`", node.kind);
    let base = expect_token(node, 0, ISSUER)?;
    let mut path = Path::new(base.value.clone());

    for fragment in node.children.iter().skip(1) {
        let fragment = match fragment {
            CstChild::Node(fragment) => fragment,
            CstChild::Token(token) => {
                return fail(CompileError::at(
                    node,
                    ISSUER,
                    format!("Unexpected {} token {:?} after the path base.", token.kind, token.value),
                ));
            }
        };
        path = path.with_segment(segment(fragment)?);
    }

    Ok(path)
}

fn segment(fragment: &CstNode) -> CompileResult<PathSegment> {
    let inner = match expect_child(fragment, 0, ISSUER)? {
        CstChild::Token(token) => return Ok(PathSegment::Name(token.value.clone())),
        CstChild::Node(inner) => inner,
    };

    match inner.kind {
        CstKind::String => {
            let token = expect_token(inner, 0, ISSUER)?;
            Ok(PathSegment::Name(string::unquote(token, inner, ISSUER)?.to_string()))
        }
        CstKind::Path => Ok(PathSegment::Path(resolve(inner)?)),
        CstKind::Values
        | CstKind::Boolean
        | CstKind::Number
        | CstKind::List
        | CstKind::Objects
        | CstKind::KeyValue
        | CstKind::Types
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
        | CstKind::Comparison => fail(CompileError::unexpected_kind(fragment, inner.kind, ISSUER)),
    }
}
