use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors returned by the clinic stores.
///
/// Unknown ids are not errors: lookups return `None`, deletes return `false`.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// Input failed validation.
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// A built-in validation pattern failed to compile.
    #[error("validation pattern is broken: {0}")]
    Pattern(#[from] regex::Error),
}

impl StoreError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        StoreError::Validation {
            field,
            message: message.into(),
        }
    }
}
