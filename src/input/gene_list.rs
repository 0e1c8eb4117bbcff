// Plain-text gene lists: one identifier per line, first column only.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Read a gene list file. Fails if the file holds no identifiers.
pub fn read_gene_list(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read gene list {}", path.display()))?;

    let genes = parse_gene_list(&text);
    if genes.is_empty() {
        anyhow::bail!("Gene list {} contains no identifiers", path.display());
    }

    debug!(path = %path.display(), genes = genes.len(), "Read gene list");
    Ok(genes)
}

/// Take the first whitespace-delimited token of every non-blank line.
pub fn parse_gene_list(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}
