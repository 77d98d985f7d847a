use crate::actors::messages::AppError;
use crate::models::{TrainResponse, TrainingDocument};
use async_trait::async_trait;

/// Defines the public interface for a training actor.
///
/// Training replaces the process-wide model; implementations must make the
/// swap atomic for concurrent readers.
#[async_trait]
pub trait TrainingActor: Send + Sync + 'static {
    /// Trains a model from the documents and makes it current.
    async fn train(&self, documents: Vec<TrainingDocument>) -> Result<TrainResponse, AppError>;
}
