use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is terminal for the computation that raised it. No partial result is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("{what}: expected {expected} entries, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("criterion {criterion} cannot be normalized at alternative {alternative}: {reason}")]
    UndefinedNormalization {
        criterion: usize,
        alternative: usize,
        reason: &'static str,
    },

    #[error("value at row {row}, column {column} is not finite")]
    NonFinite { row: usize, column: usize },

    #[error("value {value} for criterion {criterion} must be between 0 and 1")]
    OutOfRange { criterion: usize, value: f64 },

    #[error("weight {value} for criterion {criterion} must be a non-negative number")]
    InvalidWeight { criterion: usize, value: f64 },

    #[error("unknown criterion label '{0}', expected 'benefit' or 'cost'")]
    InvalidLabel(String),

    #[error("no alternatives have been saved")]
    NoAlternatives,
}

impl Error {
    pub(crate) fn shape(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            what,
            expected,
            actual,
        }
    }
}
