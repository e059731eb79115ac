//! Query error types.

use thiserror::Error;
use triplet_pattern::PatternError;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur while building or executing a query.
///
/// An empty result is never an error.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Invalid pattern: {message}")]
    InvalidPattern { message: String },

    #[error("Unbound variable '{name}'")]
    UnboundVariable { name: String },

    #[error("Invalid binding: {message}")]
    InvalidBinding { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QueryError {
    pub fn invalid_pattern(message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            message: message.into(),
        }
    }

    pub fn unbound_variable(name: impl Into<String>) -> Self {
        Self::UnboundVariable { name: name.into() }
    }
}

impl From<PatternError> for QueryError {
    fn from(e: PatternError) -> Self {
        match e {
            PatternError::InvalidPattern { message } => Self::InvalidPattern { message },
            PatternError::UnboundVariable { name } => Self::UnboundVariable { name },
            other @ PatternError::NotGround { .. } => Self::InvalidBinding {
                message: other.to_string(),
            },
        }
    }
}
