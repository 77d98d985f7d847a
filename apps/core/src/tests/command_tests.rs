//! Command Tests
//!
//! The JSON-lines command surface: one answer per line, errors as
//! `{"error", "message"}` bodies, and the session keeps going after them.

use crate::commands::handle_line;
use crate::config::AppConfig;
use crate::service::ClassifierService;
use crate::text_extract::{PlainTextExtractor, TextExtractor};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::{tempdir, TempDir};

use super::sample_documents;

fn service() -> (TempDir, ClassifierService) {
    let dir = tempdir().unwrap();
    let config = AppConfig {
        model_path: dir.path().join("model.json"),
        ..AppConfig::default()
    };
    let extractor: Arc<dyn TextExtractor> = Arc::new(PlainTextExtractor::new(10_000));
    let service = ClassifierService::start(&config, Some(extractor));
    (dir, service)
}

async fn send(service: &ClassifierService, command: Value) -> Value {
    handle_line(service, &command.to_string()).await
}

#[tokio::test]
async fn test_classify_command() {
    let (_dir, service) = service();
    let response = send(
        &service,
        json!({"op": "classify", "text": "This invoice requires payment approval"}),
    )
    .await;

    assert_eq!(response["prediction"], "Business");
    assert_eq!(response["confidence"], 0.6);
    assert_eq!(response["source"], "heuristic");
    assert_eq!(response["alternatives"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_classify_with_candidates_command() {
    let (_dir, service) = service();
    let response = send(
        &service,
        json!({
            "op": "classify",
            "text": "database server deployment",
            "candidates": ["Technical", "General"]
        }),
    )
    .await;

    assert_eq!(response["prediction"], "Technical");
    let categories: Vec<&str> = response["alternatives"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["category"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["Technical", "General"]);
}

#[tokio::test]
async fn test_classify_document_command() {
    let (_dir, service) = service();
    let content = STANDARD.encode("This invoice requires payment approval");
    let response = send(
        &service,
        json!({
            "op": "classify_document",
            "content_base64": content,
            "content_type": "text/plain"
        }),
    )
    .await;

    assert_eq!(response["prediction"], "Business");
    assert!(response.get("error").is_none());
}

#[tokio::test]
async fn test_invalid_base64_is_validation_error() {
    let (_dir, service) = service();
    let response = send(
        &service,
        json!({"op": "classify_document", "content_base64": "!!!"}),
    )
    .await;

    assert_eq!(response["error"], "validation");
    assert!(response["message"]
        .as_str()
        .unwrap()
        .contains("invalid base64 content"));
}

#[tokio::test]
async fn test_suggest_tags_command() {
    let (_dir, service) = service();
    let text = "the database schema design pattern database schema";
    for max_tags in [json!(3), json!("3"), json!(3.0)] {
        let response = send(
            &service,
            json!({"op": "suggest_tags", "text": text, "max_tags": max_tags}),
        )
        .await;
        assert_eq!(
            response["tags"],
            json!(["database", "schema", "design"]),
            "max_tags {}",
            max_tags
        );
    }

    let response = send(&service, json!({"op": "suggest_tags", "max_tags": 3})).await;
    assert_eq!(response["tags"], json!([]));
}

#[tokio::test]
async fn test_train_and_health_commands() {
    let (dir, service) = service();

    let health = send(&service, json!({"op": "health"})).await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["model_loaded"], false);
    assert_eq!(health["extractor"], "available");

    let response = send(
        &service,
        json!({"op": "train", "documents": sample_documents()}),
    )
    .await;
    assert_eq!(response["status"], "trained");
    assert_eq!(response["samples"], 5);
    assert_eq!(response["categories"], json!(["Business", "Technical"]));
    assert!(dir.path().join("model.json").exists());

    let health = send(&service, json!({"op": "health"})).await;
    assert_eq!(health["model_loaded"], true);
    assert_eq!(health["model_version"], "1.0");

    let response = send(
        &service,
        json!({"op": "classify", "text": "database schema review"}),
    )
    .await;
    assert_eq!(response["source"], "model");
    assert_eq!(response["prediction"], "Technical");
}

#[tokio::test]
async fn test_train_rejection_is_reported() {
    let (_dir, service) = service();
    let mut documents = sample_documents();
    documents.truncate(3);
    let response = send(&service, json!({"op": "train", "documents": documents})).await;

    assert_eq!(response["error"], "insufficient_data");
    assert!(response["message"].is_string());
}

#[tokio::test]
async fn test_malformed_lines_answer_with_errors() {
    let (_dir, service) = service();

    for line in ["garbage", "{}", r#"{"op": "launch"}"#, r#"{"op": "classify"}"#] {
        let response = handle_line(&service, line).await;
        assert_eq!(response["error"], "validation", "line {}", line);
        assert!(response["message"].is_string());
    }

    // the session still answers after the failures
    let response = send(&service, json!({"op": "health"})).await;
    assert_eq!(response["status"], "healthy");
}
