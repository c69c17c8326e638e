//! file: core/src/ir/value.rs
//! description: the IR value model emitted by the compilers.
//!
//! Values are plain owned trees. They are produced once as the return of a
//! compile call and never mutated afterwards. The `$OBJECT` discriminator
//! used on the wire only exists in `ir::serialize`.
//!

/// One compiled value.
#[derive(Debug, Clone, PartialEq)]
pub enum IrValue {
    Path(Path),
    Number(i64),
    Boolean(bool),
    String(StringLiteral),
    List(Vec<IrValue>),
    /// Entries in declaration order; duplicate keys are kept.
    Dict(Vec<(DictKey, IrValue)>),
    Type(String),
    Argument(Argument),
    Mutation(Mutation),
    Expression(Expression),
}

impl From<Path> for IrValue {
    fn from(path: Path) -> Self {
        IrValue::Path(path)
    }
}

impl From<StringLiteral> for IrValue {
    fn from(string: StringLiteral) -> Self {
        IrValue::String(string)
    }
}

impl From<i64> for IrValue {
    fn from(number: i64) -> Self {
        IrValue::Number(number)
    }
}

impl From<bool> for IrValue {
    fn from(value: bool) -> Self {
        IrValue::Boolean(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    Name(String),
    /// Dynamic index, e.g. the `b.c` in `a[b.c]`.
    Path(Path),
}

/// Dotted/indexed reference. Always holds at least one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new(base: impl Into<String>) -> Self {
        Path {
            segments: vec![PathSegment::Name(base.into())],
        }
    }

    /// Path made of literal segments only. Returns `None` for an empty list.
    pub fn from_names<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<PathSegment> = names.into_iter().map(|n| PathSegment::Name(n.into())).collect();
        if segments.is_empty() {
            None
        } else {
            Some(Path { segments })
        }
    }

    pub fn with_segment(mut self, segment: PathSegment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

/// String literal with its `{name}` placeholders replaced by `{}` markers.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub template: String,
    /// One single-segment path per placeholder occurrence, left to right.
    pub values: Vec<Path>,
}

impl StringLiteral {
    pub const MARKER: &'static str = "{}";

    /// Fills the `{}` markers left to right with `bindings`. Markers without
    /// a binding are kept as they are.
    pub fn render<S: AsRef<str>>(&self, bindings: &[S]) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();
        let mut bindings = bindings.iter();
        while let Some(at) = rest.find(Self::MARKER) {
            out.push_str(&rest[..at]);
            match bindings.next() {
                Some(binding) => out.push_str(binding.as_ref()),
                None => out.push_str(Self::MARKER),
            }
            rest = &rest[at + Self::MARKER.len()..];
        }
        out.push_str(rest);
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DictKey {
    Path(Path),
    String(StringLiteral),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: String,
    pub value: Box<IrValue>,
}

impl Argument {
    pub fn new(name: impl Into<String>, value: IrValue) -> Self {
        Argument {
            name: name.into(),
            value: Box::new(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub name: String,
    pub arguments: Vec<Argument>,
}

/// Binary or comparison expression: a `{} op {}` template plus its two
/// operands in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub template: String,
    pub operands: Box<[IrValue; 2]>,
}

impl Expression {
    pub fn new(operator: &str, left: IrValue, right: IrValue) -> Self {
        Expression {
            template: format!("{} {} {}", StringLiteral::MARKER, operator, StringLiteral::MARKER),
            operands: Box::new([left, right]),
        }
    }

    pub fn left(&self) -> &IrValue {
        &self.operands[0]
    }

    pub fn right(&self) -> &IrValue {
        &self.operands[1]
    }
}

/// Result of compiling an expression node.
///
/// A value with no comparison attached passes through as `Plain`; anything
/// with an operator becomes an `Expression`. Externally both are emitted as
/// a one-element sequence, see [`CompiledExpression::into_sequence`].
#[derive(Debug, Clone, PartialEq)]
pub enum CompiledExpression {
    Plain(IrValue),
    Expression(Expression),
}

impl CompiledExpression {
    pub fn into_value(self) -> IrValue {
        match self {
            CompiledExpression::Plain(value) => value,
            CompiledExpression::Expression(expression) => IrValue::Expression(expression),
        }
    }

    /// The one-element sequence shape consumers index at position 0.
    pub fn into_sequence(self) -> Vec<IrValue> {
        vec![self.into_value()]
    }
}
