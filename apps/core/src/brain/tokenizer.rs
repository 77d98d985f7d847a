//! Multi-script tokenization.
//!
//! Splits raw document text into Latin-script words and CJK character runs.
//! Latin words are lower-cased and filtered against a stopword list; CJK runs
//! are kept as-is. All downstream scoring works on these tokens only.

use indexmap::IndexMap;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Longest Latin token kept.
pub const MAX_LATIN_LEN: usize = 40;
/// Longest CJK run kept.
pub const MAX_CJK_LEN: usize = 12;

/// Stopwords for English text, plus URL noise.
const STOPWORDS_EN: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
    "one", "our", "out", "has", "him", "his", "how", "its", "may", "who", "did", "yet", "nor",
    "she", "they", "them", "their", "theirs", "this", "that", "these", "those", "what", "which",
    "whom", "whose", "with", "from", "into", "onto", "upon", "about", "above", "below", "after",
    "before", "during", "through", "between", "against", "over", "under", "again", "further",
    "then", "once", "here", "there", "where", "when", "why", "both", "each", "every", "few",
    "more", "most", "other", "some", "such", "only", "own", "same", "than", "too", "very",
    "just", "also", "now", "have", "having", "does", "doing", "been", "being", "were", "will",
    "would", "shall", "should", "could", "might", "must", "your", "yours", "ours", "hers",
    "mine", "itself", "myself", "yourself", "himself", "herself", "ourselves", "themselves",
    "because", "while", "until", "although", "though", "if", "as", "at", "by", "of", "on",
    "or", "to", "in", "is", "it", "be", "an", "a", "do", "so", "we", "he", "me", "my", "us",
    "no", "up", "http", "https", "www", "com",
];

// NOTE: expect() is acceptable here: the patterns are constants.
static LATIN_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z][a-z0-9_\-]{2,}").expect("Invalid regex: latin token pattern")
});

static CJK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{4E00}-\x{9FFF}]{2,}").expect("Invalid regex: CJK run pattern"));

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS_EN.iter().copied().collect());

/// Check if a lowered Latin word is a stopword
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Tokenize text into Latin words followed by CJK runs.
///
/// Each group keeps its order of appearance; the two groups are not
/// interleaved by position.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    let latin = LATIN_TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| word.chars().count() <= MAX_LATIN_LEN && !is_stopword(word));

    let cjk = CJK_RUN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|run| run.chars().count() <= MAX_CJK_LEN);

    latin.chain(cjk).map(str::to_string).collect()
}

/// Occurrence count per token, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCounts {
    counts: IndexMap<String, usize>,
}

impl TokenCounts {
    /// Count tokens of a text
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(tokenize(text))
    }

    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts = Self::default();
        counts.extend(tokens);
        counts
    }

    /// Add every token of the iterator, keeping first-seen order for new ones.
    pub fn extend<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = String>,
    {
        for token in tokens {
            *self.counts.entry(token).or_insert(0) += 1;
        }
    }

    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Tokens ordered by descending count; equal counts keep first-seen order.
    pub fn most_common(&self, limit: usize) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self
            .counts
            .iter()
            .map(|(token, count)| (token.clone(), *count))
            .collect();
        // sort_by is stable, so insertion order breaks ties
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}
