//! # Brain Module
//!
//! Classification and tagging engine for incoming documents.
//! Pure, synchronous functions of their input; no I/O.
//!
//! ## Components
//! - `tokenizer`: Latin word and CJK run extraction
//! - `heuristic`: Fixed-lexicon category scorer (fallback)
//! - `keyword_model`: Trained category-to-keywords artifact
//! - `trainer`: Builds a keyword model from labeled documents
//! - `classifier`: Chooses between model and lexicon, ranks alternatives
//! - `tags`: Frequency-based tag suggestion

pub mod classifier;
pub mod heuristic;
pub mod keyword_model;
pub mod tags;
pub mod tokenizer;
pub mod trainer;

pub use classifier::{DocumentClassifier, ScoringMode};
pub use heuristic::HeuristicScorer;
pub use keyword_model::{CategoryKeywords, KeywordModel};
pub use tags::TagRanker;
pub use tokenizer::{tokenize, TokenCounts};
pub use trainer::ModelTrainer;
