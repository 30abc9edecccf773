//! Errors raised while reading `name=value` lines.

/// A line that is not a well-formed flag line.
///
/// `line` is the 1-based line number inside a scanned artifact, or 0 when
/// the line was parsed on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagError {
    /// No `=` separating the name from the value
    MissingEquals { line: usize },
    /// Name is empty or not an identifier
    InvalidName { line: usize, name: String },
    /// Value is not `true`, `false`, an unsigned integer or a quoted string
    InvalidValue {
        line: usize,
        name: String,
        value: String,
    },
}

impl FlagError {
    /// Attach an artifact line number to an error produced by `Flag::parse`.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            FlagError::MissingEquals { .. } => FlagError::MissingEquals { line },
            FlagError::InvalidName { name, .. } => FlagError::InvalidName { line, name },
            FlagError::InvalidValue { name, value, .. } => {
                FlagError::InvalidValue { line, name, value }
            }
        }
    }
}

impl std::fmt::Display for FlagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagError::MissingEquals { line } => {
                write!(f, "line {}: expected `name=value`", line)
            }
            FlagError::InvalidName { line, name } => {
                write!(f, "line {}: invalid flag name '{}'", line, name)
            }
            FlagError::InvalidValue { line, name, value } => {
                write!(
                    f,
                    "line {}: invalid value for '{}': {} (expected true, false, an integer or a quoted string)",
                    line, name, value
                )
            }
        }
    }
}

impl std::error::Error for FlagError {}
