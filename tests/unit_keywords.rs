// Unit tests for keyword summarization and comparison.
//
// Exercises the properties every distribution must satisfy: bounded size,
// shares summing to one, no stopwords, determinism, and empty results for
// categories that are not present.

use enrich_radar::enrichment::table::{EnrichmentRecord, EnrichmentTable};
use enrich_radar::keywords::comparison::compare;
use enrich_radar::keywords::stopwords::{is_stopword, STOPWORDS};
use enrich_radar::keywords::summarizer::{count_words, summarize, KeywordDistribution};

fn process_table(descriptions: &[&str]) -> EnrichmentTable {
    descriptions
        .iter()
        .map(|d| EnrichmentRecord::new("Process", *d))
        .collect()
}

fn ecoli_process_table() -> EnrichmentTable {
    EnrichmentTable::new(vec![
        EnrichmentRecord::new("Process", "cellular amino acid metabolic process"),
        EnrichmentRecord::new("Process", "alpha-amino acid biosynthetic process"),
        EnrichmentRecord::new("Process", "organic acid biosynthetic process"),
        EnrichmentRecord::new("Process", "response to heat"),
        EnrichmentRecord::new("Process", "protein folding"),
        EnrichmentRecord::new("Process", "cellular response to stress, incl. heat"),
        EnrichmentRecord::new("KEGG", "Biosynthesis of amino acids"),
        EnrichmentRecord::new("Component", "cytosol"),
    ])
}

fn share_sum(distribution: &KeywordDistribution) -> f64 {
    distribution.entries().iter().map(|e| e.relative_share).sum()
}

// ============================================================
// summarize — documented examples
// ============================================================

#[test]
fn protein_example_from_two_descriptions() {
    let table = process_table(&["protein metabolic process", "protein folding process"]);
    let distribution = summarize(&table, "Process", 5);

    let entries = distribution.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!((entries[0].token.as_str(), entries[0].count), ("protein", 2));
    assert_eq!((entries[1].token.as_str(), entries[1].count), ("folding", 1));
    assert!((entries[0].relative_share - 0.667).abs() < 0.001);
    assert!((entries[1].relative_share - 0.333).abs() < 0.001);
}

#[test]
fn absent_category_gives_empty_distribution() {
    let table = process_table(&["protein folding"]);
    assert!(summarize(&table, "Y", 10).is_empty());
    assert!(summarize(&EnrichmentTable::default(), "Process", 10).is_empty());
}

// ============================================================
// summarize — invariants
// ============================================================

#[test]
fn never_more_than_n_entries() {
    let table = ecoli_process_table();
    for n in 1..12 {
        assert!(summarize(&table, "Process", n).len() <= n);
    }
}

#[test]
fn exactly_n_when_vocabulary_is_large_enough() {
    let table = ecoli_process_table();
    // cellular amino acid alpha-amino biosynthetic organic response heat
    // protein folding stress -> 11 distinct non-stopword tokens
    let distinct = count_words(table.descriptions("Process"))
        .keys()
        .filter(|t| !is_stopword(t))
        .count();
    assert_eq!(distinct, 11);
    for n in 1..=distinct {
        assert_eq!(summarize(&table, "Process", n).len(), n);
    }
    assert_eq!(summarize(&table, "Process", 50).len(), distinct);
}

#[test]
fn shares_sum_to_one() {
    let table = ecoli_process_table();
    for n in [1, 3, 10] {
        for category in ["Process", "KEGG", "Component"] {
            let distribution = summarize(&table, category, n);
            assert!(!distribution.is_empty());
            let sum = share_sum(&distribution);
            assert!((sum - 1.0).abs() < 1e-9, "{category} n={n}: sum {sum}");
        }
    }
}

#[test]
fn stopwords_never_appear() {
    let every_stopword = STOPWORDS.join(" ");
    let upper = every_stopword.to_uppercase();
    let table = process_table(&[
        every_stopword.as_str(),
        upper.as_str(),
        "transport of iron by the cell",
    ]);
    let distribution = summarize(&table, "Process", 100);
    for token in distribution.tokens() {
        assert!(!is_stopword(token), "stopword {token} leaked");
    }
    let tokens: Vec<&str> = distribution.tokens().collect();
    assert_eq!(tokens, vec!["cell", "iron", "transport"]);
}

#[test]
fn counts_descend_and_ties_are_lexicographic() {
    let distribution = summarize(&ecoli_process_table(), "Process", 20);
    for pair in distribution.entries().windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.count > b.count || (a.count == b.count && a.token < b.token));
    }
    // acid appears three times, more than anything else
    assert_eq!(distribution.entries()[0].token, "acid");
}

#[test]
fn repeated_calls_are_identical() {
    let table = ecoli_process_table();
    let first = summarize(&table, "Process", 4);
    for _ in 0..5 {
        assert_eq!(summarize(&table, "Process", 4), first);
    }
}

#[test]
fn category_match_is_case_sensitive() {
    let table = ecoli_process_table();
    assert!(summarize(&table, "process", 10).is_empty());
    assert!(summarize(&table, "kegg", 10).is_empty());
}

#[test]
fn commas_are_stripped_before_counting() {
    let table = process_table(&["heat, cold, and salt", "heat"]);
    let distribution = summarize(&table, "Process", 10);
    assert_eq!(distribution.entries()[0].token, "heat");
    assert_eq!(distribution.entries()[0].count, 2);
    assert!(distribution.tokens().all(|t| !t.contains(',')));
}

// ============================================================
// compare — outer join of up/down
// ============================================================

#[test]
fn comparison_covers_union_of_tokens() {
    let up = summarize(&process_table(&["iron transport", "iron uptake"]), "Process", 10);
    let down = summarize(&process_table(&["flagellum assembly", "iron"]), "Process", 10);
    let comparison = compare(&up, &down);

    let mut tokens: Vec<&str> = comparison.tokens().collect();
    tokens.sort_unstable();
    assert_eq!(tokens, vec!["assembly", "flagellum", "iron", "transport", "uptake"]);

    let up_sum: f64 = comparison.up_values().iter().sum();
    let down_sum: f64 = comparison.down_values().iter().sum();
    assert!((up_sum - 1.0).abs() < 1e-9);
    assert!((down_sum - 1.0).abs() < 1e-9);
}

#[test]
fn comparison_with_one_empty_side_is_all_zero_there() {
    let up = summarize(&process_table(&["chemotaxis"]), "Process", 10);
    let comparison = compare(&up, &KeywordDistribution::default());
    assert_eq!(comparison.len(), 1);
    assert_eq!(comparison.down_values(), vec![0.0]);
    assert_eq!(comparison.up_values(), vec![1.0]);
}
