use crate::location::{Location, Span};

use super::kind::{CstKind, TokenType};

/// Leaf of the CST: a typed slice of source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenType,
    pub value: String,
    pub span: Option<Span>,
}

impl Token {
    pub fn new(kind: TokenType, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
            span: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CstChild {
    Token(Token),
    Node(CstNode),
}

impl CstChild {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            CstChild::Token(token) => Some(token),
            CstChild::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&CstNode> {
        match self {
            CstChild::Node(node) => Some(node),
            CstChild::Token(_) => None,
        }
    }

    pub fn span(&self) -> Option<&Span> {
        match self {
            CstChild::Token(token) => token.span.as_ref(),
            CstChild::Node(node) => node.span.as_ref(),
        }
    }
}

impl From<Token> for CstChild {
    fn from(token: Token) -> Self {
        CstChild::Token(token)
    }
}

impl From<CstNode> for CstChild {
    fn from(node: CstNode) -> Self {
        CstChild::Node(node)
    }
}

/// Inner node of the CST, one per matched grammar production.
///
/// Nodes are built once by the front-end (or by hand in tests) and only
/// read afterwards; none of the compilers take `&mut CstNode`.
#[derive(Debug, Clone, PartialEq)]
pub struct CstNode {
    pub kind: CstKind,
    pub children: Vec<CstChild>,
    pub span: Option<Span>,
}

impl CstNode {
    pub fn new(kind: CstKind, children: Vec<CstChild>) -> Self {
        CstNode {
            kind,
            children,
            span: None,
        }
    }

    /// Container node that has no counterpart in the source, used to route
    /// a bare child through an entry point that expects a wrapper.
    pub fn synthetic(kind: CstKind, child: CstChild) -> Self {
        CstNode::new(kind, vec![child])
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn child(&self, index: usize) -> Option<&CstChild> {
        self.children.get(index)
    }

    pub fn token(&self, index: usize) -> Option<&Token> {
        self.child(index).and_then(CstChild::as_token)
    }

    pub fn node(&self, index: usize) -> Option<&CstNode> {
        self.child(index).and_then(CstChild::as_node)
    }

    /// First direct child node of the given kind.
    pub fn slot(&self, kind: CstKind) -> Option<&CstNode> {
        self.children
            .iter()
            .filter_map(CstChild::as_node)
            .find(|node| node.kind == kind)
    }

    pub fn values(&self) -> Option<&CstNode> {
        self.slot(CstKind::Values)
    }

    pub fn operator(&self) -> Option<&CstNode> {
        self.slot(CstKind::Operator)
    }

    pub fn path_value(&self) -> Option<&CstNode> {
        self.slot(CstKind::PathValue)
    }

    pub fn arguments(&self) -> Option<&CstNode> {
        self.slot(CstKind::ArgumentList)
    }

    pub fn command(&self) -> Option<&CstNode> {
        self.slot(CstKind::Command)
    }

    /// Every node of the given kind in this subtree, self included, in
    /// pre-order (source order).
    pub fn find_all(&self, kind: CstKind) -> Vec<&CstNode> {
        let mut found = Vec::new();
        self.collect_kind(kind, &mut found);
        found
    }

    fn collect_kind<'a>(&'a self, kind: CstKind, found: &mut Vec<&'a CstNode>) {
        if self.kind == kind {
            found.push(self);
        }
        for child in self.children.iter().filter_map(CstChild::as_node) {
            child.collect_kind(kind, found);
        }
    }

    pub fn location(&self) -> Option<Location> {
        self.span.as_ref().map(|span| span.start.clone())
    }
}

use std::fmt;

impl fmt::Display for CstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn fmt_node(node: &CstNode, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
            writeln!(f, "{:indent$}{}", "", node.kind, indent = indent)?;
            for child in node.children.iter() {
                match child {
                    CstChild::Token(token) => writeln!(
                        f,
                        "{:indent$}{} {:?}",
                        "",
                        token.kind,
                        token.value,
                        indent = indent + 2
                    )?,
                    CstChild::Node(inner) => fmt_node(inner, f, indent + 2)?,
                }
            }
            Ok(())
        }

        fmt_node(self, f, 0)
    }
}
