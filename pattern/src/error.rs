//! Pattern error types.

use thiserror::Error;

/// Errors that can occur while building patterns or reading solutions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A pattern is missing a position or holds a term its position forbids.
    #[error("Invalid pattern: {message}")]
    InvalidPattern { message: String },

    /// A binding was requested for a variable that is not declared.
    #[error("Unbound variable '{name}'")]
    UnboundVariable { name: String },

    /// Solutions only ever bind ground terms.
    #[error("Cannot bind '{name}' to non-ground term {term}")]
    NotGround { name: String, term: String },
}

impl PatternError {
    pub fn invalid_pattern(message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            message: message.into(),
        }
    }

    pub fn unbound_variable(name: impl Into<String>) -> Self {
        Self::UnboundVariable { name: name.into() }
    }

    pub fn not_ground(name: impl Into<String>, term: impl ToString) -> Self {
        Self::NotGround {
            name: name.into(),
            term: term.to_string(),
        }
    }
}

/// Result type for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;
