//! Classification service.
//!
//! The single entry point request handlers talk to. It owns the shared model
//! handle, the trainer actor, and the optional text extractor; every call
//! reads the model through a snapshot taken at call time.

use std::sync::Arc;
use tracing::{debug, info};

use crate::actors::{TrainerActorHandle, TrainingActor};
use crate::brain::{DocumentClassifier, ScoringMode, TagRanker};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{
    ClassificationResult, ClassifyRequest, HealthStatus, TagRequest, TagSuggestion,
    TrainRequest, TrainResponse,
};
use crate::state::SharedModel;
use crate::store::ModelStore;
use crate::text_extract::{Capability, ExtractedText, TextExtractor};

const NO_EXTRACTOR: &str = "no text extractor configured";

#[derive(Clone)]
pub struct ClassifierService {
    model: SharedModel,
    classifier: DocumentClassifier,
    tags: TagRanker,
    trainer: Arc<dyn TrainingActor>,
    extractor: Option<Arc<dyn TextExtractor>>,
}

impl ClassifierService {
    /// Load any persisted model and spawn the trainer actor.
    ///
    /// Must be called inside a tokio runtime. A missing or corrupt model file
    /// leaves the service in lexicon-only mode.
    pub fn start(config: &AppConfig, extractor: Option<Arc<dyn TextExtractor>>) -> Self {
        let store = ModelStore::new(config.model_path.clone());
        let model = SharedModel::new(store.load_or_none());
        let trainer = TrainerActorHandle::new(model.clone(), store);
        Self::with_parts(model, Arc::new(trainer), extractor, config.default_max_tags)
    }

    /// Assemble a service from explicit collaborators.
    pub fn with_parts(
        model: SharedModel,
        trainer: Arc<dyn TrainingActor>,
        extractor: Option<Arc<dyn TextExtractor>>,
        default_max_tags: usize,
    ) -> Self {
        let service = Self {
            model,
            classifier: DocumentClassifier::new(),
            tags: TagRanker::new(default_max_tags),
            trainer,
            extractor,
        };
        info!(extractor = %service.extractor_capability(), "Classifier service ready");
        service
    }

    pub fn model(&self) -> &SharedModel {
        &self.model
    }

    pub fn classify(&self, request: &ClassifyRequest) -> ClassificationResult {
        let mode = ScoringMode::select(self.model.snapshot());
        let result = self
            .classifier
            .classify(&mode, &request.text, request.candidates.as_deref());
        debug!(
            prediction = %result.prediction,
            confidence = result.confidence,
            source = ?result.source,
            "Classified document"
        );
        result
    }

    pub fn suggest_tags(&self, request: &TagRequest) -> TagSuggestion {
        TagSuggestion {
            tags: self
                .tags
                .suggest(request.text.as_deref(), request.max_tags.as_ref()),
        }
    }

    /// Train and activate a new model.
    pub async fn train(&self, request: TrainRequest) -> Result<TrainResponse, AppError> {
        self.trainer.train(request.documents).await
    }

    pub fn extractor_capability(&self) -> Capability {
        self.extractor
            .as_ref()
            .map(|e| e.capability())
            .unwrap_or_else(|| Capability::Unavailable(NO_EXTRACTOR.to_string()))
    }

    /// Extract text from document bytes via the configured extractor.
    pub async fn extract_text(
        &self,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<ExtractedText, AppError> {
        let Some(extractor) = self.extractor.as_ref() else {
            return Err(AppError::Unsupported(format!(
                "text extraction unavailable: {}",
                NO_EXTRACTOR
            )));
        };
        if let Capability::Unavailable(reason) = extractor.capability() {
            return Err(AppError::Unsupported(format!(
                "text extraction unavailable: {}",
                reason
            )));
        }
        extractor.extract(bytes, content_type).await
    }

    /// Extract text from document bytes, then classify it.
    pub async fn classify_bytes(
        &self,
        bytes: &[u8],
        content_type: &str,
        candidates: Option<Vec<String>>,
    ) -> Result<ClassificationResult, AppError> {
        let extracted = self.extract_text(bytes, content_type).await?;
        Ok(self.classify(&ClassifyRequest {
            text: extracted.text,
            candidates,
        }))
    }

    pub fn health(&self) -> HealthStatus {
        let snapshot = self.model.snapshot();
        HealthStatus {
            status: "healthy".to_string(),
            model_loaded: snapshot.is_some(),
            model_version: snapshot.as_ref().map(|m| m.version.clone()),
            trained_samples: snapshot.as_ref().map(|m| m.trained_samples),
            categories: snapshot.map(|m| m.categories()).unwrap_or_default(),
            extractor: self.extractor_capability().to_string(),
        }
    }
}
