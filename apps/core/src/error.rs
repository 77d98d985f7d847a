use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::actors::messages::ActorError;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Training input fell below the usable-document floor.
    #[error("Insufficient training data: need at least {required} usable documents, got {supplied}")]
    InsufficientData { required: usize, supplied: usize },

    /// The new model is live in memory but could not be written to durable storage.
    #[error("Model trained but not persisted to {path:?}: {reason}")]
    ModelNotPersisted { path: PathBuf, reason: String },

    /// Represents failures reading or decoding a persisted model.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents errors specific to the actor system, such as communication failures.
    #[error("Actor error: {0}")]
    Actor(#[from] ActorError),

    /// Represents data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The text extractor cannot handle the given content.
    #[error("Unsupported content: {0}")]
    Unsupported(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Short machine-readable kind, used in wire responses.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InsufficientData { .. } => "insufficient_data",
            AppError::ModelNotPersisted { .. } => "model_not_persisted",
            AppError::Persistence(_) => "persistence",
            AppError::Io(_) => "io",
            AppError::Actor(_) => "actor",
            AppError::Validation(_) => "validation",
            AppError::Config(_) => "config",
            AppError::Unsupported(_) => "unsupported",
            AppError::Internal(_) => "internal",
        }
    }

    /// Whether the caller sent something we refuse to act on.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::InsufficientData { .. } | AppError::Validation(_) | AppError::Unsupported(_)
        )
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        match self {
            AppError::InsufficientData { required, supplied } => AppError::InsufficientData {
                required: *required,
                supplied: *supplied,
            },
            AppError::ModelNotPersisted { path, reason } => AppError::ModelNotPersisted {
                path: path.clone(),
                reason: reason.clone(),
            },
            AppError::Persistence(s) => AppError::Persistence(s.clone()),
            AppError::Io(e) => AppError::Io(io::Error::new(e.kind(), e.to_string())),
            AppError::Actor(e) => AppError::Actor(e.clone()),
            AppError::Validation(s) => AppError::Validation(s.clone()),
            AppError::Config(s) => AppError::Config(s.clone()),
            AppError::Unsupported(s) => AppError::Unsupported(s.clone()),
            AppError::Internal(s) => AppError::Internal(s.clone()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("Background task failed: {}", err))
    }
}
