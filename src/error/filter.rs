use thiserror::Error;

use super::ErrorKind;

/// A filter value that could not be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
    #[error("year {0} must be after 1900")]
    YearOutOfRange(i32),
    #[error("month {0} must be between 1 and 12")]
    MonthOutOfRange(i64),
}

impl FilterError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ValidationFailure
    }
}
