//! Line-delimited JSON commands.
//!
//! Each input line is one command selected by its `op` field. Every line gets
//! exactly one JSON answer; failures come back as `{"error", "message"}`
//! bodies instead of ending the session.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

use crate::error::AppError;
use crate::models::{ClassifyRequest, TagRequest, TrainRequest};
use crate::service::ClassifierService;

/// Commands accepted on stdin, selected by the `op` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Classify(ClassifyRequest),
    ClassifyDocument(DocumentPayload),
    SuggestTags(TagRequest),
    Train(TrainRequest),
    Health,
}

/// Raw document bytes for extraction before classification.
#[derive(Debug, Deserialize)]
pub struct DocumentPayload {
    pub content_base64: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub candidates: Option<Vec<String>>,
}

fn to_value<T: Serialize>(value: T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(AppError::from)
}

/// Error body written in place of a result.
pub fn error_body(err: &AppError) -> Value {
    json!({ "error": err.kind(), "message": err.to_string() })
}

/// Run one command line against the service.
pub async fn handle_line(service: &ClassifierService, line: &str) -> Value {
    let command: Command = match serde_json::from_str(line) {
        Ok(command) => command,
        Err(e) => return error_body(&AppError::from(e)),
    };

    let outcome = match command {
        Command::Classify(request) => to_value(service.classify(&request)),
        Command::ClassifyDocument(payload) => match STANDARD.decode(payload.content_base64.trim()) {
            Ok(bytes) => service
                .classify_bytes(&bytes, &payload.content_type, payload.candidates)
                .await
                .and_then(to_value),
            Err(e) => Err(AppError::Validation(format!("invalid base64 content: {}", e))),
        },
        Command::SuggestTags(request) => to_value(service.suggest_tags(&request)),
        Command::Train(request) => service.train(request).await.and_then(to_value),
        Command::Health => to_value(service.health()),
    };

    outcome.unwrap_or_else(|e| {
        warn!(kind = e.kind(), error = %e, "Request failed");
        error_body(&e)
    })
}
