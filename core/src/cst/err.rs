use crate::diagnostic::ErrorCode;
use crate::error::{Level, StoryErrorExt};
use crate::location::{Location, Span};

/// Raised when the front-end cannot produce a tree from the source text.
#[derive(Debug, Clone)]
pub struct SyntaxError {
    level: Level,
    message: String,
    issuer: String,
    code: Option<ErrorCode>,
    location: Option<Location>,
    span: Option<Span>,
}

impl SyntaxError {
    pub fn with(level: Level, message: String, issuer: String, location: Option<Location>, span: Option<Span>) -> Self {
        SyntaxError {
            level,
            message,
            issuer,
            code: None,
            location,
            span,
        }
    }

    /// The script holds nothing but whitespace.
    pub fn empty_script(file: &str) -> Self {
        log::debug!("{} holds no source", file);
        SyntaxError::with(
            Level::Error,
            "The provided script is empty.".into(),
            "storyscript.cst.generate_cst_from_source".into(),
            None,
            None,
        )
    }

    /// Converts a pest parse failure, keeping its line/column information
    /// and classifying the offending line.
    pub fn from_pest<R: pest::RuleType>(error: &pest::error::Error<R>, file: &str) -> Self {
        let (start, end) = match error.line_col {
            pest::error::LineColLocation::Pos((line, column)) => {
                let at = Location::new(file.to_string(), line, column);
                (at.clone(), at)
            }
            pest::error::LineColLocation::Span((line, column), (end_line, end_column)) => (
                Location::new(file.to_string(), line, column),
                Location::new(file.to_string(), end_line, end_column),
            ),
        };
        let mut syntax = SyntaxError::with(
            Level::Error,
            error.variant.message().to_string(),
            "storyscript.cst.parse".into(),
            Some(start.clone()),
            Some(Span::new(start, end)),
        );
        syntax.code = Some(ErrorCode::identify(error.line()));
        syntax
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(loc) => write!(f, "{} (at {})", self.message, loc),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for SyntaxError {}

impl StoryErrorExt for SyntaxError {
    fn level(&self) -> Level {
        self.level
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    /// Carries the error code as a `[E00NN]` suffix when one was assigned.
    fn issuer(&self) -> String {
        match self.code {
            Some(code) => format!("{} [{}]", self.issuer, code),
            None => self.issuer.clone(),
        }
    }

    fn span(&self) -> Option<Span> {
        self.span.clone()
    }

    fn location(&self) -> Option<Location> {
        self.location.clone()
    }
}
