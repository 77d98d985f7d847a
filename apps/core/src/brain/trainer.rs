//! Builds a [`KeywordModel`] from labeled documents.

use indexmap::IndexMap;
use tracing::debug;

use super::keyword_model::{CategoryKeywords, KeywordModel};
use super::tokenizer::{tokenize, TokenCounts};
use crate::error::AppError;
use crate::models::TrainingDocument;

/// Fewest documents (supplied and usable) a training run accepts.
pub const MIN_TRAINING_DOCUMENTS: usize = 5;

/// Keyword model trainer
#[derive(Debug, Clone, Copy)]
pub struct ModelTrainer {
    min_documents: usize,
}

impl Default for ModelTrainer {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelTrainer {
    pub fn new() -> Self {
        Self {
            min_documents: MIN_TRAINING_DOCUMENTS,
        }
    }

    /// Train a model. All-or-nothing: either a complete model or an error.
    pub fn train(&self, documents: &[TrainingDocument]) -> Result<KeywordModel, AppError> {
        if documents.len() < self.min_documents {
            return Err(AppError::InsufficientData {
                required: self.min_documents,
                supplied: documents.len(),
            });
        }

        let mut per_category: IndexMap<String, TokenCounts> = IndexMap::new();
        let mut usable = 0;

        for doc in documents {
            if doc.text.trim().is_empty() {
                continue;
            }
            let tokens = tokenize(&doc.text);
            if tokens.is_empty() {
                continue;
            }
            usable += 1;
            per_category
                .entry(doc.category_or_default().to_string())
                .or_default()
                .extend(tokens);
        }

        debug!(
            supplied = documents.len(),
            usable,
            categories = per_category.len(),
            "Aggregated training tokens"
        );

        if usable < self.min_documents {
            return Err(AppError::InsufficientData {
                required: self.min_documents,
                supplied: usable,
            });
        }

        let keywords = CategoryKeywords::from_counts(&per_category);
        keywords.validate()?;
        Ok(KeywordModel::new(keywords, usable))
    }
}
