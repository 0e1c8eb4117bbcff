// Enrichment results as returned by the STRING enrichment endpoint.

pub mod table;
