// Words that carry no meaning in enrichment term descriptions.
//
// STRING descriptions are short GO/KEGG-style phrases ("cellular amino acid
// metabolic process"), so generic English stopword lists are both too broad
// and too narrow. This is the fixed set the summaries are built against.

/// Tokens dropped from every keyword distribution. All lowercase.
pub const STOPWORDS: [&str; 14] = [
    "process",
    "substance",
    "to",
    "a",
    "metabolic",
    "via",
    "and",
    "of",
    "incl.",
    "by",
    "in",
    "with",
    "the",
    "from",
];

/// Exact membership test. Callers lowercase tokens before asking.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords_are_lowercase() {
        for word in STOPWORDS {
            assert_eq!(word, word.to_lowercase());
        }
    }

    #[test]
    fn test_is_stopword_exact_match() {
        assert!(is_stopword("incl."));
        assert!(!is_stopword("incl"));
        assert!(!is_stopword("Process"));
        assert!(!is_stopword("protein"));
    }
}
