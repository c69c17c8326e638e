use std::fmt;

/// How bad an error is. Parse failures are `Error`; a tree the grammar
/// could not have produced is `Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Error,
    Critical,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "ERROR"),
            Level::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Common surface of every error the front-end and the compilers raise.
pub trait StoryErrorExt {
    fn level(&self) -> Level;
    fn message(&self) -> String;
    /// Dotted name of the function that raised the error,
    /// e.g. `storyscript.compiler.literal.compile`.
    fn issuer(&self) -> String;
    fn span(&self) -> Option<crate::location::Span>;
    fn location(&self) -> Option<crate::location::Location>;
}

impl fmt::Debug for dyn StoryErrorExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "STORY | {} | ", self.level())?;
        match self.location() {
            Some(loc) => write!(f, "{}", loc)?,
            None => write!(f, "unknown")?,
        }
        write!(f, " | {} | ", self.issuer())?;
        match self.span() {
            Some(span) => write!(f, "{}", span)?,
            None => write!(f, "span:none")?,
        }
        write!(f, " | {}", self.message())
    }
}

impl fmt::Display for dyn StoryErrorExt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
