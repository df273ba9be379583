use thiserror::Error;

pub type UncResult<T> = Result<T, UncError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UncError {
    /// A required identity field is empty or absent
    #[error("invalid input: {field} cannot be empty")]
    InvalidInput { field: &'static str },
}

impl UncError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            UncError::InvalidInput { field } => field,
        }
    }
}
