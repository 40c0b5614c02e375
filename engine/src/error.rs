//! Engine-specific error types

use thiserror::Error;
use shared::SharedError;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid selection reference: {kind} '{reference}' is not in the dataset")]
    InvalidSelectionReference { kind: String, reference: String },

    #[error("Invalid colour value: {input}")]
    InvalidColor { input: String },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),
}

impl EngineError {
    pub fn invalid_reference(kind: &str, reference: impl ToString) -> Self {
        EngineError::InvalidSelectionReference {
            kind: kind.to_string(),
            reference: reference.to_string(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
