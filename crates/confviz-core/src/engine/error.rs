use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Cannot rank an empty ensemble")]
    EmptyEnsemble,

    #[error("Internal logic error: {0}")]
    Internal(String),
}
