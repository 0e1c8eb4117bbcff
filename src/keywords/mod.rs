// Keyword summaries of enrichment descriptions.
//
// The summarizer turns the free-text descriptions of one enrichment category
// into a ranked top-N keyword distribution. The comparison module joins two
// such distributions (up- and down-regulated) for overlaid radar charts.

pub mod comparison;
pub mod stopwords;
pub mod summarizer;
