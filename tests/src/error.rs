//! Scenario error types.

use thiserror::Error;

/// Errors raised while running a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("[{scenario}] no document configured")]
    MissingDocument { scenario: String },

    #[error("[{scenario}] failed to load document: {message}")]
    DocumentLoad { scenario: String, message: String },

    #[error("step '{step}': assertion failed: {message}")]
    AssertionFailed { step: String, message: String },

    #[error("step '{step}': tree integrity broken: {message}")]
    Integrity { step: String, message: String },
}

impl ScenarioError {
    pub fn missing_document(scenario: impl Into<String>) -> Self {
        Self::MissingDocument {
            scenario: scenario.into(),
        }
    }

    pub fn document_load(scenario: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DocumentLoad {
            scenario: scenario.into(),
            message: message.into(),
        }
    }

    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }

    pub fn integrity(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Integrity {
            step: step.into(),
            message: message.into(),
        }
    }
}

/// Result type for scenario runs.
pub type ScenarioResult<T> = Result<T, ScenarioError>;
