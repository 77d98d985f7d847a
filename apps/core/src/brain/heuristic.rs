//! Fixed-lexicon category scorer.
//!
//! Used when no trained keyword model is loaded, or when the model finds no
//! support at all. Two keyword families (business, technical) are matched as
//! plain substrings of the lowered text, and the dominant family picks one of
//! three fixed priors.

use crate::models::{Alternative, ClassificationResult, ClassificationSource};

/// Business vocabulary, English then Chinese.
pub const BUSINESS_TERMS: &[&str] = &[
    "invoice",
    "contract",
    "payment",
    "approval",
    "budget",
    "revenue",
    "purchase",
    "sales",
    "finance",
    "customer",
    "agreement",
    "report",
    "合同",
    "发票",
    "付款",
    "审批",
    "预算",
    "财务",
    "采购",
    "销售",
    "客户",
];

/// Technical vocabulary, English then Chinese.
pub const TECHNICAL_TERMS: &[&str] = &[
    "database",
    "server",
    "software",
    "system",
    "network",
    "deploy",
    "architecture",
    "algorithm",
    "code",
    "config",
    "interface",
    "数据库",
    "服务器",
    "系统",
    "软件",
    "代码",
    "网络",
    "架构",
    "接口",
];

const NO_SIGNAL: [(&str, f64); 3] = [("General", 0.6), ("Business", 0.2), ("Technical", 0.2)];
const BUSINESS_LEADS: [(&str, f64); 3] = [("Business", 0.6), ("General", 0.25), ("Technical", 0.15)];
const TECHNICAL_LEADS: [(&str, f64); 3] =
    [("Technical", 0.6), ("General", 0.25), ("Business", 0.15)];

/// How many terms of each family appear in a text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexiconHits {
    pub business: usize,
    pub technical: usize,
}

impl LexiconHits {
    pub fn count(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let hits = |terms: &[&str]| terms.iter().filter(|term| lowered.contains(*term)).count();
        Self {
            business: hits(BUSINESS_TERMS),
            technical: hits(TECHNICAL_TERMS),
        }
    }

    /// The prior matching these hits; ties go to business.
    fn prior(&self) -> &'static [(&'static str, f64); 3] {
        if self.business == 0 && self.technical == 0 {
            &NO_SIGNAL
        } else if self.business >= self.technical {
            &BUSINESS_LEADS
        } else {
            &TECHNICAL_LEADS
        }
    }
}

/// Lexicon-based scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a text, optionally restricted to an allow-list of categories.
    ///
    /// An empty allow-list is treated as no allow-list.
    pub fn score(&self, text: &str, candidates: Option<&[String]>) -> ClassificationResult {
        let hits = LexiconHits::count(text);
        let prior: Vec<(String, f64)> = hits
            .prior()
            .iter()
            .map(|(category, p)| (category.to_string(), *p))
            .collect();

        let distribution = match candidates.filter(|c| !c.is_empty()) {
            None => prior,
            Some(allowed) => restrict(prior, allowed),
        };

        build_result(distribution)
    }
}

/// Keep only allowed categories and renormalize; with nothing in common, the
/// first candidate takes everything.
fn restrict(prior: Vec<(String, f64)>, allowed: &[String]) -> Vec<(String, f64)> {
    let kept: Vec<(String, f64)> = prior
        .into_iter()
        .filter(|(category, _)| allowed.contains(category))
        .collect();

    let total: f64 = kept.iter().map(|(_, p)| p).sum();
    if kept.is_empty() || total <= 0.0 {
        return vec![(allowed[0].clone(), 1.0)];
    }

    kept.into_iter().map(|(category, p)| (category, p / total)).collect()
}

fn build_result(mut distribution: Vec<(String, f64)>) -> ClassificationResult {
    distribution.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let alternatives: Vec<Alternative> = distribution
        .into_iter()
        .map(|(category, confidence)| Alternative {
            category,
            confidence,
        })
        .collect();

    let (prediction, confidence) = alternatives
        .first()
        .map(|top| (top.category.clone(), top.confidence))
        .unwrap_or_else(|| (NO_SIGNAL[0].0.to_string(), NO_SIGNAL[0].1));

    ClassificationResult {
        prediction,
        confidence,
        alternatives,
        source: ClassificationSource::Heuristic,
    }
}
