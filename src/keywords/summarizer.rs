// Top-N keyword distribution for one enrichment category.
//
// Descriptions in the category are pooled, split on whitespace, stripped of
// commas and lowercased. Stopwords are removed, the remaining tokens are
// ranked by count and the top N are normalized so their shares sum to 1.0.
// Shares are computed after truncation, so they describe proportions within
// the selected words only.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use super::stopwords::is_stopword;
use crate::enrichment::table::EnrichmentTable;

/// Number of keywords kept when the caller does not choose.
pub const DEFAULT_TOP_N: usize = 10;

/// Occurrence count per lowercase token.
pub type WordCount = HashMap<String, usize>;

/// One keyword in a distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordShare {
    pub token: String,
    pub count: usize,
    /// count / sum of counts over the retained keywords
    pub relative_share: f64,
}

/// Ranked keyword distribution, highest count first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeywordDistribution {
    entries: Vec<KeywordShare>,
}

impl KeywordDistribution {
    pub fn entries(&self) -> &[KeywordShare] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.token.as_str())
    }

    /// Share of `token`, or None if it was not retained.
    pub fn share_of(&self, token: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.token == token)
            .map(|e| e.relative_share)
    }
}

/// Summarizer with a fixed top-N, for callers that configure it once.
#[derive(Debug, Clone)]
pub struct KeywordFrequencySummarizer {
    pub top_n: usize,
}

impl Default for KeywordFrequencySummarizer {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl KeywordFrequencySummarizer {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn summarize(&self, table: &EnrichmentTable, category: &str) -> KeywordDistribution {
        summarize(table, category, self.top_n)
    }
}

/// Split descriptions into lowercase, comma-free tokens and count them.
pub fn count_words<'a>(descriptions: impl IntoIterator<Item = &'a str>) -> WordCount {
    let mut counts = WordCount::new();
    for description in descriptions {
        for raw in description.split_whitespace() {
            let token = raw.replace(',', "").to_lowercase();
            if token.is_empty() {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    counts
}

/// Build the top-`n` keyword distribution for `category`.
///
/// An unknown category, an empty table or `n == 0` all yield an empty
/// distribution. Equal counts are ordered lexicographically by token so
/// repeated runs produce identical charts.
pub fn summarize(table: &EnrichmentTable, category: &str, n: usize) -> KeywordDistribution {
    let counts = count_words(table.descriptions(category));

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .filter(|(token, _)| !is_stopword(token))
        .collect();
    ranked.sort_by(|a, b| rank_order(a, b));
    ranked.truncate(n);

    let total: usize = ranked.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return KeywordDistribution::default();
    }

    let entries = ranked
        .into_iter()
        .map(|(token, count)| KeywordShare {
            token,
            count,
            relative_share: count as f64 / total as f64,
        })
        .collect();

    KeywordDistribution { entries }
}

/// Descending count, then ascending token.
fn rank_order(a: &(String, usize), b: &(String, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}
