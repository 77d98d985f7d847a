//! Test Module
//!
//! Cross-module test suite for the classification core.
//!
//! ## Test Categories
//! - `command_tests`: JSON-lines command handling and error bodies
//! - `brain_tests`: Tokenizer, lexicon scorer, keyword model, classifier and tag properties
//! - `store_tests`: Model persistence and reload behavior
//! - `service_tests`: Service orchestration, training actor, model swaps
//! - `text_extract_tests`: Extraction collaborator behavior
//! - `integration_tests`: Full train / persist / restart / classify workflow

mod command_tests;

use crate::models::TrainingDocument;

/// Five labeled documents across two categories.
pub(crate) fn sample_documents() -> Vec<TrainingDocument> {
    vec![
        TrainingDocument::new("Invoice payment approval for the vendor", "Business"),
        TrainingDocument::new("Quarterly budget and revenue forecast", "Business"),
        TrainingDocument::new("Purchase order invoice reconciliation", "Business"),
        TrainingDocument::new("Database schema migration script", "Technical"),
        TrainingDocument::new("Server deployment pipeline with kubernetes", "Technical"),
    ]
}
