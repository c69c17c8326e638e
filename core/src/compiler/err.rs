use crate::cst::{CstKind, CstNode};
use crate::error::{Level, StoryErrorExt};
use crate::location::{Location, Span};

/// Raised when a compiler is handed a CST shape the grammar cannot
/// produce: a missing child, a token where a node belongs, or a kind the
/// production does not allow.
#[derive(Debug, Clone)]
pub struct CompileError {
    level: Level,
    message: String,
    issuer: String,
    location: Option<Location>,
    span: Option<Span>,
}

impl CompileError {
    pub fn with(level: Level, message: String, issuer: String, location: Option<Location>, span: Option<Span>) -> Self {
        CompileError {
            level,
            message,
            issuer,
            location,
            span,
        }
    }

    /// Contract violation reported against `node`.
    pub fn at(node: &CstNode, issuer: &str, message: String) -> Self {
        CompileError::with(
            Level::Critical,
            message,
            issuer.to_string(),
            node.location(),
            node.span.clone(),
        )
    }

    pub fn missing_child(node: &CstNode, index: usize, issuer: &str) -> Self {
        CompileError::at(
            node,
            issuer,
            format!("`{}` node has no child at position {}.", node.kind, index),
        )
    }

    pub fn unexpected_kind(node: &CstNode, found: CstKind, issuer: &str) -> Self {
        CompileError::at(
            node,
            issuer,
            format!("Unexpected `{}` production inside `{}`.", found, node.kind),
        )
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(loc) => write!(f, "{} (at {})", self.message, loc),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for CompileError {}

impl StoryErrorExt for CompileError {
    fn level(&self) -> Level {
        self.level
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn issuer(&self) -> String {
        self.issuer.clone()
    }

    fn span(&self) -> Option<Span> {
        self.span.clone()
    }

    fn location(&self) -> Option<Location> {
        self.location.clone()
    }
}
