use serde::Serialize;
use tokio::sync::oneshot;

use crate::models::{TrainResponse, TrainingDocument};

/// Defines errors that can occur within the actor system.
#[derive(Debug, thiserror::Error, Serialize, Clone)]
pub enum ActorError {
    /// An error originating from the trainer actor.
    #[error("Training request failed: {0}")]
    TrainerError(String),
    /// A generic internal error within an actor.
    #[error("Internal system error: {0}")]
    Internal(String),
}

// Re-export AppError for convenience
pub use crate::error::AppError;

/// Messages that can be sent to the trainer actor.
#[derive(Debug)]
pub enum TrainerMessage {
    /// Build a new model from labeled documents and make it current.
    Train {
        documents: Vec<TrainingDocument>,
        /// A channel to send the training report back.
        responder: oneshot::Sender<Result<TrainResponse, AppError>>,
    },
}
