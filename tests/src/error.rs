//! Error types for the scenario framework.

use thiserror::Error;

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur when running scenarios.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Assertion failed.
    #[error("assertion failed for step '{step}': {message}")]
    AssertionFailed { step: String, message: String },

    /// Two steps share a name.
    #[error("duplicate step '{step}' in scenario '{scenario}'")]
    DuplicateStep { scenario: String, step: String },
}

impl ScenarioError {
    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }

    pub fn duplicate_step(scenario: impl Into<String>, step: impl Into<String>) -> Self {
        Self::DuplicateStep {
            scenario: scenario.into(),
            step: step.into(),
        }
    }
}
