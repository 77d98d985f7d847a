//! Frequency-based tag suggestion.

use serde_json::Value;

use super::tokenizer::TokenCounts;
use crate::models::{DEFAULT_MAX_TAGS, MAX_TAGS, MIN_TAGS};

/// Texts shorter than this (in characters, after trimming) get no tags.
pub const MIN_TEXT_CHARS: usize = 10;

/// Resolve a caller-supplied tag count.
///
/// Numbers (and numeric strings) are clamped to [1, 20]; anything else
/// falls back to `default`.
pub fn resolve_max_tags(raw: Option<&Value>, default: usize) -> usize {
    let requested = match raw {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match requested {
        Some(n) => n.clamp(MIN_TAGS as i64, MAX_TAGS as i64) as usize,
        None => default.clamp(MIN_TAGS, MAX_TAGS),
    }
}

/// Tag ranker
#[derive(Debug, Clone, Copy)]
pub struct TagRanker {
    default_max_tags: usize,
}

impl Default for TagRanker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TAGS)
    }
}

impl TagRanker {
    pub fn new(default_max_tags: usize) -> Self {
        Self { default_max_tags }
    }

    /// Most frequent tokens of a text, up to `max_tags`.
    pub fn suggest(&self, text: Option<&str>, max_tags: Option<&Value>) -> Vec<String> {
        let text = match text {
            Some(t) if t.trim().chars().count() >= MIN_TEXT_CHARS => t,
            _ => return Vec::new(),
        };
        let limit = resolve_max_tags(max_tags, self.default_max_tags);

        TokenCounts::from_text(text)
            .most_common(limit)
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ranked_by_frequency() {
        let tags = TagRanker::default().suggest(
            Some("the database schema design pattern database schema"),
            Some(&json!(3)),
        );
        assert_eq!(tags, vec!["database", "schema", "design"]);
    }

    #[test]
    fn test_short_or_missing_text() {
        let ranker = TagRanker::default();
        assert!(ranker.suggest(None, None).is_empty());
        assert!(ranker.suggest(Some("database"), None).is_empty());
        assert!(ranker.suggest(Some("          "), None).is_empty());
    }

    #[test]
    fn test_resolve_max_tags() {
        assert_eq!(resolve_max_tags(None, 5), 5);
        assert_eq!(resolve_max_tags(Some(&json!(0)), 5), 1);
        assert_eq!(resolve_max_tags(Some(&json!(-4)), 5), 1);
        assert_eq!(resolve_max_tags(Some(&json!(99)), 5), 20);
        assert_eq!(resolve_max_tags(Some(&json!(7)), 5), 7);
        assert_eq!(resolve_max_tags(Some(&json!(3.9)), 5), 3);
        assert_eq!(resolve_max_tags(Some(&json!("12")), 5), 12);
        assert_eq!(resolve_max_tags(Some(&json!("many")), 5), 5);
        assert_eq!(resolve_max_tags(Some(&json!(null)), 5), 5);
    }

    #[test]
    fn test_default_limit_applies() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel";
        let tags = TagRanker::default().suggest(Some(text), None);
        assert_eq!(tags, vec!["alpha", "bravo", "charlie", "delta", "echo"]);
    }
}
