use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category used when a training document carries none.
pub const DEFAULT_CATEGORY: &str = "General";

/// Categories targeted when neither the caller nor the model supplies any.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["General", "Business", "Technical"];

/// Tag count used when the caller gives none (or garbage).
pub const DEFAULT_MAX_TAGS: usize = 5;
/// Inclusive bounds for the tag count.
pub const MIN_TAGS: usize = 1;
pub const MAX_TAGS: usize = 20;

/// Which scorer produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationSource {
    /// Scores came from the trained keyword model.
    Model,
    /// Scores came from the fixed lexicon.
    Heuristic,
}

/// A candidate category with its normalized support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub category: String,
    pub confidence: f64,
}

/// Outcome of classifying one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Best-guess category.
    pub prediction: String,
    /// Support for the prediction, in [0, 1].
    pub confidence: f64,
    /// Ranked candidates, most confident first.
    pub alternatives: Vec<Alternative>,
    pub source: ClassificationSource,
}

/// Request to classify a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
    /// Optional allow-list of categories.
    #[serde(default)]
    pub candidates: Option<Vec<String>>,
}

impl ClassifyRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            candidates: None,
        }
    }

    pub fn with_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates = Some(candidates.into_iter().map(Into::into).collect());
        self
    }
}

/// Request for keyword tags.
///
/// Both fields are loose on purpose: absent text yields no tags and a
/// non-numeric `max_tags` falls back to the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub max_tags: Option<Value>,
}

impl TagRequest {
    pub fn new(text: impl Into<String>, max_tags: usize) -> Self {
        Self {
            text: Some(text.into()),
            max_tags: Some(Value::from(max_tags)),
        }
    }
}

/// Ranked tag list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSuggestion {
    pub tags: Vec<String>,
}

/// One labeled training example.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingDocument {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Accepted for compatibility with upstream payloads; unused by training.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl TrainingDocument {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: Some(category.into()),
            tags: Vec::new(),
        }
    }

    /// The document's category, defaulting to `General` when missing or blank.
    pub fn category_or_default(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.trim().is_empty() => category,
            _ => DEFAULT_CATEGORY,
        }
    }
}

/// Batch of training documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainRequest {
    pub documents: Vec<TrainingDocument>,
}

/// Report of a successful training run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainResponse {
    pub status: String,
    /// Number of usable documents the model was built from.
    pub samples: usize,
    /// Categories known to the new model, in first-seen order.
    pub categories: Vec<String>,
}

/// Service health report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
    pub model_version: Option<String>,
    pub trained_samples: Option<usize>,
    pub categories: Vec<String>,
    pub extractor: String,
}
