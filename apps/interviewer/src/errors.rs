#![allow(dead_code)]

use std::path::Path;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type shared by the workflow controller and the
/// persistence sinks. Validation problems are NOT errors — they are outcomes
/// (see `session::ProfileOutcome` / `session::AnswerOutcome`); this type is
/// reserved for operations submitted out of step order and for failures of
/// external collaborators.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// The model responded, but not in the shape the workflow requires
    /// (e.g. fewer than five question lines).
    #[error("Unexpected model output: {0}")]
    ModelOutput(String),

    /// A sink failed after the evaluation was already computed. The path is
    /// carried so the operator can recover the record by hand.
    #[error("Storage error at {path}: {source}")]
    Storage {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub(crate) fn storage(path: &Path, source: impl Into<anyhow::Error>) -> Self {
        AppError::Storage {
            path: path.display().to_string(),
            source: source.into(),
        }
    }
}
