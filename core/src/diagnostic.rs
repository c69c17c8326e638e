//! file: core/src/diagnostic.rs
//! description: human-facing rendering of front-end errors.
//!
//! `StoryError` pairs an error with the script it came from and renders a
//! header, the offending source line with a caret underline, and the hint
//! attached to the error's `ErrorCode`.
//!
use std::fmt;
use std::path::{Path, PathBuf};

use console::style;

use crate::error::StoryErrorExt;
use crate::script::Script;

/// Known classes of syntax mistakes, each with a short hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    E0001,
    E0002,
    E0003,
    E0004,
    E0005,
    E0006,
    E0007,
    E0008,
    E0009,
    E0010,
    E0011,
    E0012,
    E0013,
    E0014,
    E0015,
    E0016,
    E0017,
    E0018,
    E0019,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 19] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E0008,
        ErrorCode::E0009,
        ErrorCode::E0010,
        ErrorCode::E0011,
        ErrorCode::E0012,
        ErrorCode::E0013,
        ErrorCode::E0014,
        ErrorCode::E0015,
        ErrorCode::E0016,
        ErrorCode::E0017,
        ErrorCode::E0018,
        ErrorCode::E0019,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E0008 => "E0008",
            ErrorCode::E0009 => "E0009",
            ErrorCode::E0010 => "E0010",
            ErrorCode::E0011 => "E0011",
            ErrorCode::E0012 => "E0012",
            ErrorCode::E0013 => "E0013",
            ErrorCode::E0014 => "E0014",
            ErrorCode::E0015 => "E0015",
            ErrorCode::E0016 => "E0016",
            ErrorCode::E0017 => "E0017",
            ErrorCode::E0018 => "E0018",
            ErrorCode::E0019 => "E0019",
        }
    }

    /// The hint shown under the highlighted line. `E0001` is the generic
    /// code and has none.
    pub fn hint(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "",
            ErrorCode::E0002 => "A service name can't contain `.`",
            ErrorCode::E0003 => "You have defined an argument, but not a service",
            ErrorCode::E0004 => "`return` is allowed only inside functions",
            ErrorCode::E0005 => "A variable name can't contain `/`",
            ErrorCode::E0006 => "A variable name can't contain `-`",
            ErrorCode::E0007 => "Missing value after `=`",
            ErrorCode::E0008 => "You have misspelt `function`",
            ErrorCode::E0009 => "You have misspelt `import`",
            ErrorCode::E0010 => "You have misspelt `as` in an import statement",
            ErrorCode::E0011 => "The imported filename must be in quotes",
            ErrorCode::E0012 => "Missing opening quote for string",
            ErrorCode::E0013 => "Missing closing quote for string",
            ErrorCode::E0014 => "Trailing comma in list",
            ErrorCode::E0015 => "Missing opening bracket for list",
            ErrorCode::E0016 => "Missing closing bracket for list",
            ErrorCode::E0017 => "Missing opening bracket for object",
            ErrorCode::E0018 => "Missing closing bracket for object",
            ErrorCode::E0019 => "Missing colon in service argument",
        }
    }

    /// Looks a code up by its `E00NN` name.
    pub fn lookup(code: &str) -> Option<ErrorCode> {
        ErrorCode::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Recovers the code from an issuer carrying a `[E00NN]` suffix.
    pub fn from_issuer(issuer: &str) -> Option<ErrorCode> {
        let tail = issuer.trim_end().strip_suffix(']')?;
        let open = tail.rfind('[')?;
        ErrorCode::lookup(&tail[open + 1..])
    }

    /// Classifies a rejected source line by the mistake it most likely
    /// contains. Falls back to `E0001`.
    pub fn identify(line: &str) -> ErrorCode {
        if line.matches('"').count() % 2 == 1 {
            let first = line.find('"').unwrap_or(0);
            // A quote closing a word that never opened one.
            let before = line[..first].trim_end();
            return if line.trim_end().ends_with('"') && before.ends_with(|c: char| c.is_alphanumeric()) {
                ErrorCode::E0012
            } else {
                ErrorCode::E0013
            };
        }

        let code = strip_strings(line);
        let compact: String = code.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.contains(",]") {
            return ErrorCode::E0014;
        }

        let count = |ch: char| code.matches(ch).count();
        if count('[') > count(']') {
            return ErrorCode::E0016;
        }
        if count('[') < count(']') {
            return ErrorCode::E0015;
        }
        if count('{') > count('}') {
            return ErrorCode::E0018;
        }
        if count('{') < count('}') {
            return ErrorCode::E0017;
        }

        if let Some(open) = code.find('(') {
            let inner = &code[open + 1..];
            let inner = inner.split(')').next().unwrap_or(inner).trim();
            if !inner.is_empty() && inner.split(',').any(|arg| !arg.trim().is_empty() && !arg.contains(':')) {
                return ErrorCode::E0019;
            }
        }

        ErrorCode::E0001
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Drops the contents of double-quoted strings, quotes included.
fn strip_strings(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut quoted = false;
    for ch in line.chars() {
        if ch == '"' {
            quoted = !quoted;
        } else if !quoted {
            out.push(ch);
        }
    }
    out
}

/// An error rendered against the script it was raised for.
pub struct StoryError<'a> {
    error: &'a dyn StoryErrorExt,
    script: &'a Script,
}

impl<'a> StoryError<'a> {
    pub fn new(error: &'a dyn StoryErrorExt, script: &'a Script) -> Self {
        StoryError { error, script }
    }

    /// Script path relative to the working directory, or `story` when the
    /// script has no path.
    pub fn name(&self) -> String {
        let path = &self.script.path;
        if path.as_os_str().is_empty() {
            return "story".to_string();
        }
        let relative = std::env::current_dir()
            .ok()
            .and_then(|cwd| relative_to(path, &cwd))
            .unwrap_or_else(|| path.clone());
        relative.display().to_string()
    }

    /// Code carried by the error's issuer, else one inferred from the
    /// offending line.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::from_issuer(&self.error.issuer())
            .or_else(|| self.get_line().map(ErrorCode::identify))
            .unwrap_or(ErrorCode::E0001)
    }

    /// The source line the error points at.
    pub fn get_line(&self) -> Option<&'a str> {
        let line = self.error.location()?.line;
        self.script.content.lines().nth(line.checked_sub(1)?)
    }

    pub fn header(&self) -> String {
        let name = style(self.name()).bold();
        match self.error.location() {
            Some(loc) => format!("Error: syntax error in {} at line {}, column {}", name, loc.line, loc.column),
            None => format!("Error: syntax error in {}", name),
        }
    }

    /// Caret underline, one `^` per column of the error's first line.
    pub fn symbols(&self) -> String {
        let width = self.error.span().map(|span| span.width_on_start_line()).unwrap_or(1);
        style("^".repeat(width)).red().to_string()
    }

    /// The offending line prefixed with its number, and the caret row
    /// aligned under the error column.
    pub fn highlight(&self) -> Option<String> {
        let loc = self.error.location()?;
        let text = self.get_line()?;
        let prefix = format!("{}|    ", loc.line);
        let padding = " ".repeat(prefix.chars().count() + loc.column.saturating_sub(1));
        Some(format!("{}{}\n{}{}", prefix, text, padding, self.symbols()))
    }

    pub fn hint(&self) -> &'static str {
        self.code().hint()
    }

    /// Header, highlight and hint separated by blank lines. Parts that do
    /// not apply are left out.
    pub fn message(&self) -> String {
        let mut parts = vec![self.header()];
        parts.extend(self.highlight());
        let hint = self.hint();
        if !hint.is_empty() {
            parts.push(hint.to_string());
        }
        parts.join("\n\n")
    }
}

impl fmt::Display for StoryError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

fn relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    path.strip_prefix(base).ok().map(Path::to_path_buf)
}
