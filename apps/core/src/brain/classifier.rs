//! Document classifier.
//!
//! Picks a scoring mode up front: the keyword model when a usable one is
//! loaded, the fixed lexicon otherwise. A model that finds no support for any
//! target category hands over to the lexicon, restricted to the same targets.

use std::sync::Arc;
use tracing::debug;

use super::heuristic::HeuristicScorer;
use super::keyword_model::KeywordModel;
use super::tokenizer::TokenCounts;
use crate::models::{Alternative, ClassificationResult, ClassificationSource, DEFAULT_CATEGORIES};

/// Alternatives reported by the model-backed path.
pub const MODEL_ALTERNATIVES: usize = 3;

/// How a classification call is scored.
#[derive(Debug, Clone)]
pub enum ScoringMode {
    /// A trained model with at least one category.
    ModelBacked(Arc<KeywordModel>),
    /// No usable model; lexicon only.
    HeuristicFallback,
}

impl ScoringMode {
    /// Choose the mode for a model snapshot.
    pub fn select(model: Option<Arc<KeywordModel>>) -> Self {
        match model {
            Some(model) if model.is_usable() => ScoringMode::ModelBacked(model),
            _ => ScoringMode::HeuristicFallback,
        }
    }
}

/// Classifier combining the keyword model and the lexicon scorer
#[derive(Debug, Clone, Default)]
pub struct DocumentClassifier {
    heuristic: HeuristicScorer,
}

impl DocumentClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a text under the given mode.
    pub fn classify(
        &self,
        mode: &ScoringMode,
        text: &str,
        candidates: Option<&[String]>,
    ) -> ClassificationResult {
        let candidates = candidates.filter(|c| !c.is_empty());
        match mode {
            ScoringMode::ModelBacked(model) => self.classify_with_model(model, text, candidates),
            ScoringMode::HeuristicFallback => {
                debug!("No usable model loaded, scoring with lexicon");
                self.heuristic.score(text, candidates)
            }
        }
    }

    fn classify_with_model(
        &self,
        model: &KeywordModel,
        text: &str,
        candidates: Option<&[String]>,
    ) -> ClassificationResult {
        let targets = target_categories(model, candidates);
        let counts = TokenCounts::from_text(text);

        let mut scored: Vec<(String, usize)> = targets
            .iter()
            .map(|category| (category.clone(), model.score(category, &counts)))
            .collect();
        let total: usize = scored.iter().map(|(_, score)| score).sum();

        if total == 0 {
            debug!(
                targets = targets.len(),
                "Model found no support, falling back to lexicon"
            );
            return self.heuristic.score(text, Some(targets.as_slice()));
        }

        // stable: equal scores keep target order
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let total = total as f64;
        let alternatives: Vec<Alternative> = scored
            .iter()
            .take(MODEL_ALTERNATIVES)
            .map(|(category, score)| Alternative {
                category: category.clone(),
                confidence: *score as f64 / total,
            })
            .collect();

        let (prediction, top) = &scored[0];
        ClassificationResult {
            prediction: prediction.clone(),
            confidence: *top as f64 / total,
            alternatives,
            source: ClassificationSource::Model,
        }
    }
}

/// Caller candidates (deduplicated), else the model's categories, else the defaults.
fn target_categories(model: &KeywordModel, candidates: Option<&[String]>) -> Vec<String> {
    if let Some(candidates) = candidates {
        let mut targets: Vec<String> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !targets.contains(candidate) {
                targets.push(candidate.clone());
            }
        }
        return targets;
    }

    let known = model.categories();
    if known.is_empty() {
        DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
    } else {
        known
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::keyword_model::CategoryKeywords;
    use indexmap::IndexMap;

    fn model(entries: &[(&str, &[&str])]) -> Arc<KeywordModel> {
        let map: IndexMap<String, Vec<String>> = entries
            .iter()
            .map(|(c, ks)| (c.to_string(), ks.iter().map(|k| k.to_string()).collect()))
            .collect();
        Arc::new(KeywordModel::new(
            CategoryKeywords::try_from_map(map).unwrap(),
            5,
        ))
    }

    #[test]
    fn test_mode_selection() {
        assert!(matches!(
            ScoringMode::select(None),
            ScoringMode::HeuristicFallback
        ));
        assert!(matches!(
            ScoringMode::select(Some(model(&[]))),
            ScoringMode::HeuristicFallback
        ));
        assert!(matches!(
            ScoringMode::select(Some(model(&[("A", &["alpha"])]))),
            ScoringMode::ModelBacked(_)
        ));
    }

    #[test]
    fn test_model_scores_normalized() {
        let mode = ScoringMode::select(Some(model(&[
            ("Tech", &["database", "schema"]),
            ("Finance", &["invoice"]),
        ])));
        let result = DocumentClassifier::new().classify(
            &mode,
            "database schema database invoice",
            None,
        );
        assert_eq!(result.source, ClassificationSource::Model);
        assert_eq!(result.prediction, "Tech");
        assert_eq!(result.confidence, 0.75);
        assert_eq!(result.alternatives.len(), 2);
        assert_eq!(result.alternatives[1].category, "Finance");
        assert_eq!(result.alternatives[1].confidence, 0.25);
    }

    #[test]
    fn test_alternatives_capped_at_three() {
        let mode = ScoringMode::select(Some(model(&[
            ("A", &["alpha"]),
            ("B", &["bravo"]),
            ("C", &["charlie"]),
            ("D", &["delta"]),
        ])));
        let result = DocumentClassifier::new().classify(
            &mode,
            "alpha bravo bravo charlie delta delta delta",
            None,
        );
        assert_eq!(result.prediction, "D");
        assert_eq!(result.alternatives.len(), 3);
        let order: Vec<&str> = result.alternatives.iter().map(|a| a.category.as_str()).collect();
        assert_eq!(order, vec!["D", "B", "A"]);
    }

    #[test]
    fn test_ties_keep_target_order() {
        let mode = ScoringMode::select(Some(model(&[("A", &["alpha"]), ("B", &["bravo"])])));
        let candidates = vec!["B".to_string(), "A".to_string()];
        let result =
            DocumentClassifier::new().classify(&mode, "alpha bravo", Some(candidates.as_slice()));
        assert_eq!(result.prediction, "B");
        assert_eq!(result.confidence, 0.5);
    }

    #[test]
    fn test_zero_score_falls_back_to_lexicon_over_targets() {
        let mode = ScoringMode::select(Some(model(&[("Legal", &["clause"]), ("HR", &["hiring"])])));
        let result =
            DocumentClassifier::new().classify(&mode, "invoice payment approval", None);
        assert_eq!(result.source, ClassificationSource::Heuristic);
        // neither model category is in the lexicon prior
        assert_eq!(result.prediction, "Legal");
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_empty_text_falls_back() {
        let mode = ScoringMode::select(Some(model(&[
            ("Business", &["invoice"]),
            ("Technical", &["database"]),
        ])));
        let result = DocumentClassifier::new().classify(&mode, "", None);
        assert_eq!(result.source, ClassificationSource::Heuristic);
        assert_eq!(result.alternatives.len(), 2);
        let total: f64 = result.alternatives.iter().map(|a| a.confidence).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_candidate_scores_zero() {
        let mode = ScoringMode::select(Some(model(&[("Tech", &["database"])])));
        let candidates = vec!["Tech".to_string(), "Other".to_string()];
        let result =
            DocumentClassifier::new().classify(&mode, "database", Some(candidates.as_slice()));
        assert_eq!(result.prediction, "Tech");
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.alternatives[1].confidence, 0.0);
    }
}
