//! Trained keyword model.
//!
//! Maps each category to its most frequent training tokens. A model is an
//! immutable value: training builds a new one and the service swaps it in.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::tokenizer::TokenCounts;
use crate::error::AppError;

/// Version tag written into every model.
pub const MODEL_VERSION: &str = "1.0";

/// Keywords kept per category.
pub const KEYWORDS_PER_CATEGORY: usize = 50;

/// Category name to its top tokens, most frequent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKeywords(IndexMap<String, Vec<String>>);

impl CategoryKeywords {
    /// Build from per-category token counts, keeping the top tokens of each.
    pub fn from_counts(per_category: &IndexMap<String, TokenCounts>) -> Self {
        let keywords = per_category
            .iter()
            .map(|(category, counts)| {
                let top: Vec<String> = counts
                    .most_common(KEYWORDS_PER_CATEGORY)
                    .into_iter()
                    .map(|(token, _)| token)
                    .collect();
                (category.clone(), top)
            })
            .collect();
        Self(keywords)
    }

    /// Validated construction from raw parts.
    pub fn try_from_map(map: IndexMap<String, Vec<String>>) -> Result<Self, AppError> {
        let keywords = Self(map);
        keywords.validate()?;
        Ok(keywords)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        for (category, tokens) in &self.0 {
            if category.trim().is_empty() {
                return Err(AppError::Validation("blank category name".to_string()));
            }
            if tokens.len() > KEYWORDS_PER_CATEGORY {
                return Err(AppError::Validation(format!(
                    "category '{}' has {} keywords (max {})",
                    category,
                    tokens.len(),
                    KEYWORDS_PER_CATEGORY
                )));
            }
            let mut seen = HashSet::with_capacity(tokens.len());
            if let Some(dup) = tokens.iter().find(|t| !seen.insert(t.as_str())) {
                return Err(AppError::Validation(format!(
                    "category '{}' lists keyword '{}' twice",
                    category, dup
                )));
            }
        }
        Ok(())
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.0.get(category).map(Vec::as_slice)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The trained artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordModel {
    pub version: String,
    pub trained_samples: usize,
    pub trained_at: DateTime<Utc>,
    pub keywords: CategoryKeywords,
}

impl KeywordModel {
    pub fn new(keywords: CategoryKeywords, trained_samples: usize) -> Self {
        Self {
            version: MODEL_VERSION.to_string(),
            trained_samples,
            trained_at: Utc::now(),
            keywords,
        }
    }

    /// A model can drive classification only if it knows some category.
    pub fn is_usable(&self) -> bool {
        !self.keywords.is_empty()
    }

    pub fn categories(&self) -> Vec<String> {
        self.keywords.categories().map(str::to_string).collect()
    }

    /// Sum of counts of a category's keywords within a text's tokens.
    ///
    /// Unknown categories score zero.
    pub fn score(&self, category: &str, counts: &TokenCounts) -> usize {
        self.keywords
            .get(category)
            .map(|keywords| keywords.iter().map(|k| counts.get(k)).sum())
            .unwrap_or(0)
    }
}
