use crate::actors::messages::{ActorError, AppError, TrainerMessage};
use crate::actors::traits::TrainingActor;
use crate::brain::ModelTrainer;
use crate::models::{TrainResponse, TrainingDocument};
use crate::state::SharedModel;
use crate::store::ModelStore;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

/// A handle to the trainer actor.
///
/// Cloneable; every clone feeds the same actor, so training runs are
/// processed one at a time in arrival order. The actor stops once the last
/// handle is dropped.
#[derive(Clone)]
pub struct TrainerActorHandle {
    sender: mpsc::Sender<TrainerMessage>,
}

impl TrainerActorHandle {
    /// Spawns the actor on the current tokio runtime.
    pub fn new(model: SharedModel, store: ModelStore) -> Self {
        let (sender, receiver) = mpsc::channel(8);
        let actor = TrainerActorRunner::new(receiver, model, store);
        tokio::spawn(async move { actor.run().await });
        Self { sender }
    }
}

#[async_trait]
impl TrainingActor for TrainerActorHandle {
    async fn train(&self, documents: Vec<TrainingDocument>) -> Result<TrainResponse, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = TrainerMessage::Train {
            documents,
            responder: send,
        };
        self.sender
            .send(msg)
            .await
            .map_err(|_| AppError::Actor(ActorError::Internal("Trainer actor closed".to_string())))?;
        recv.await.map_err(|_| {
            AppError::Actor(ActorError::TrainerError(
                "Trainer actor failed to respond".to_string(),
            ))
        })?
    }
}

// --- Actor Runner (Internal Logic) ---
struct TrainerActorRunner {
    receiver: mpsc::Receiver<TrainerMessage>,
    trainer: ModelTrainer,
    model: SharedModel,
    store: ModelStore,
}

impl TrainerActorRunner {
    fn new(receiver: mpsc::Receiver<TrainerMessage>, model: SharedModel, store: ModelStore) -> Self {
        Self {
            receiver,
            trainer: ModelTrainer::new(),
            model,
            store,
        }
    }

    async fn run(mut self) {
        info!("TrainerActor started");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                TrainerMessage::Train {
                    documents,
                    responder,
                } => {
                    let run_id = Uuid::new_v4();
                    let result = self
                        .handle_train(documents)
                        .instrument(info_span!("train", %run_id))
                        .await;
                    let _ = responder.send(result);
                }
            }
        }
        info!("TrainerActor stopped");
    }

    async fn handle_train(&self, documents: Vec<TrainingDocument>) -> Result<TrainResponse, AppError> {
        info!(documents = documents.len(), "Training requested");

        let trainer = self.trainer;
        let model = tokio::task::spawn_blocking(move || trainer.train(&documents))
            .await?
            .inspect_err(|e| warn!(error = %e, "Training rejected"))?;

        let response = TrainResponse {
            status: "trained".to_string(),
            samples: model.trained_samples,
            categories: model.categories(),
        };

        // Readers switch to the new model here; the old one stays valid for
        // whoever still holds a snapshot.
        let model = Arc::new(model);
        self.model.replace(model.clone());
        info!(
            samples = response.samples,
            categories = ?response.categories,
            "New model active"
        );

        let store = self.store.clone();
        let persisted = tokio::task::spawn_blocking(move || store.save(&model)).await?;
        if let Err(e) = persisted {
            error!(path = ?self.store.path(), error = %e, "Failed to persist trained model");
            return Err(AppError::ModelNotPersisted {
                path: self.store.path().to_path_buf(),
                reason: e.to_string(),
            });
        }

        Ok(response)
    }
}
