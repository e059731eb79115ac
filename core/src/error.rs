//! Common error types for triplet.

use thiserror::Error;

/// Errors raised while constructing terms and statements.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TermError {
    /// A term kind that is not allowed in a statement position.
    #[error("Invalid {position}: {term} is not allowed here")]
    InvalidPosition {
        position: &'static str,
        term: String,
    },

    /// Statements are ground; variables never appear in graph data.
    #[error("Statement {position} must be ground, got variable {term}")]
    NotGround {
        position: &'static str,
        term: String,
    },
}

impl TermError {
    pub fn invalid_position(position: &'static str, term: impl ToString) -> Self {
        Self::InvalidPosition {
            position,
            term: term.to_string(),
        }
    }

    pub fn not_ground(position: &'static str, term: impl ToString) -> Self {
        Self::NotGround {
            position,
            term: term.to_string(),
        }
    }
}

/// Result type for term operations.
pub type TermResult<T> = Result<T, TermError>;
