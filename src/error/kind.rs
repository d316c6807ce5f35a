use std::fmt;

/// Coarse classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A network or server error on any remote operation.
    FetchFailure,
    /// Malformed filter input. Handled by ignoring the offending value.
    ValidationFailure,
}

impl ErrorKind {
    /// Short label for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::FetchFailure => "fetch_failure",
            ErrorKind::ValidationFailure => "validation_failure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
