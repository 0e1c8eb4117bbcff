// Up- vs down-regulated keyword comparison.
//
// Two distributions for the same category are outer-joined on token. A token
// retained on only one side gets share 0.0 on the other. Rows are ordered by
// ascending (up, down) so the overlaid radar polygons grow smoothly around
// the circle.

use std::collections::BTreeSet;

use serde::Serialize;

use super::summarizer::KeywordDistribution;

/// One token's shares in both directions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub token: String,
    pub up: f64,
    pub down: f64,
}

/// Outer join of an up and a down distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeywordComparison {
    rows: Vec<ComparisonRow>,
}

impl KeywordComparison {
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.token.as_str())
    }

    pub fn up_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.up).collect()
    }

    pub fn down_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.down).collect()
    }
}

/// Join `up` and `down` over the union of their tokens.
pub fn compare(up: &KeywordDistribution, down: &KeywordDistribution) -> KeywordComparison {
    let tokens: BTreeSet<&str> = up.tokens().chain(down.tokens()).collect();

    let mut rows: Vec<ComparisonRow> = tokens
        .into_iter()
        .map(|token| ComparisonRow {
            token: token.to_string(),
            up: up.share_of(token).unwrap_or(0.0),
            down: down.share_of(token).unwrap_or(0.0),
        })
        .collect();

    rows.sort_by(|a, b| {
        a.up
            .total_cmp(&b.up)
            .then(a.down.total_cmp(&b.down))
            .then_with(|| a.token.cmp(&b.token))
    });

    KeywordComparison { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::table::{EnrichmentRecord, EnrichmentTable};
    use crate::keywords::summarizer::summarize;

    fn dist(descriptions: &[&str]) -> KeywordDistribution {
        let table: EnrichmentTable = descriptions
            .iter()
            .map(|d| EnrichmentRecord::new("Process", *d))
            .collect();
        summarize(&table, "Process", 10)
    }

    #[test]
    fn test_outer_join_fills_zeros() {
        let up = dist(&["iron transport", "iron uptake"]);
        let down = dist(&["flagellum assembly"]);
        let cmp = compare(&up, &down);

        assert_eq!(cmp.len(), 5);
        let iron = cmp.rows().iter().find(|r| r.token == "iron").unwrap();
        assert!((iron.up - 0.5).abs() < 1e-9);
        assert_eq!(iron.down, 0.0);
        let flagellum = cmp.rows().iter().find(|r| r.token == "flagellum").unwrap();
        assert_eq!(flagellum.up, 0.0);
        assert!((flagellum.down - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_rows_sorted_by_up_then_down() {
        let up = dist(&["iron iron transport"]);
        let down = dist(&["motility"]);
        let cmp = compare(&up, &down);
        let tokens: Vec<&str> = cmp.tokens().collect();
        assert_eq!(tokens, vec!["motility", "transport", "iron"]);
        assert_eq!(cmp.up_values().len(), cmp.down_values().len());
    }

    #[test]
    fn test_shared_token_keeps_both_shares() {
        let up = dist(&["iron transport"]);
        let down = dist(&["iron"]);
        let cmp = compare(&up, &down);
        let iron = cmp.rows().iter().find(|r| r.token == "iron").unwrap();
        assert!((iron.up - 0.5).abs() < 1e-9);
        assert!((iron.down - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_both_empty() {
        let cmp = compare(&KeywordDistribution::default(), &KeywordDistribution::default());
        assert!(cmp.is_empty());
    }
}
