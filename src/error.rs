//! Error types shared by the containers and the validators.

use thiserror::Error;

/// Errors raised while indexing containers or validating document fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocError {
    /// A scalar or listed index fell outside the container
    #[error("index {index} is out of bounds for length {len}")]
    Index { index: isize, len: usize },
    /// The input had the right kind but an unusable value, e.g. a mask of
    /// the wrong length or a tensor of the wrong shape
    #[error("{0}")]
    Value(String),
    /// No recognized input shape matched the target type
    #[error("cannot convert {found} into {target}")]
    TypeConversion { target: String, found: String },
}

pub type Result<T> = std::result::Result<T, DocError>;

impl DocError {
    pub fn value(msg: impl Into<String>) -> Self {
        DocError::Value(msg.into())
    }

    pub fn conversion(target: impl Into<String>, found: impl Into<String>) -> Self {
        DocError::TypeConversion { target: target.into(), found: found.into() }
    }

    /// Prefix the error with the field (or element) it was raised for,
    /// keeping the error class intact.
    pub fn in_field(self, field: &str) -> Self {
        match self {
            DocError::Value(msg) => DocError::Value(format!("{field}: {msg}")),
            DocError::TypeConversion { target, found } => DocError::TypeConversion {
                target: format!("{field}: {target}"),
                found,
            },
            err @ DocError::Index { .. } => err,
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, DocError::Index { .. })
    }

    pub fn is_value(&self) -> bool {
        matches!(self, DocError::Value(_))
    }

    pub fn is_type_conversion(&self) -> bool {
        matches!(self, DocError::TypeConversion { .. })
    }
}
