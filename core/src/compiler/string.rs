//! Templated string literals.
//!
//! Every `{...}` span in a string is a placeholder; there is no escape for
//! a literal brace. Placeholder text is taken verbatim as a single-segment
//! path and is never split on `.` or `[`.
use crate::cst::{CstNode, Token};
use crate::ir::{Path, StringLiteral};

use super::{expect_token, fail, CompileError, CompileResult};

const ISSUER: &str = "storyscript.compiler.string.compile";

pub fn compile(node: &CstNode) -> CompileResult<StringLiteral> {
    let token = expect_token(node, 0, ISSUER)?;
    let text = unquote(token, node, ISSUER)?;
    let (template, names) = extract_placeholders(text);
    log::trace!("string literal with {} placeholder(s)", names.len());

    Ok(StringLiteral {
        template,
        values: names.into_iter().map(Path::new).collect(),
    })
}

/// Splits `text` into a template with `{}` markers and the placeholder
/// names, in occurrence order. Repeated names each keep their own slot.
pub fn extract_placeholders(text: &str) -> (String, Vec<String>) {
    let mut template = String::with_capacity(text.len());
    let mut names = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            break;
        };
        template.push_str(&rest[..open]);
        template.push_str(StringLiteral::MARKER);
        names.push(after[..close].to_string());
        rest = &after[close + 1..];
    }

    template.push_str(rest);
    (template, names)
}

/// Token text without its surrounding quote characters.
pub(crate) fn unquote<'a>(token: &'a Token, node: &CstNode, issuer: &str) -> CompileResult<&'a str> {
    let value = token.value.as_str();
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if !quoted {
        return fail(CompileError::at(
            node,
            issuer,
            format!("String token {:?} is not quoted.", value),
        ));
    }
    Ok(&value[1..value.len() - 1])
}
