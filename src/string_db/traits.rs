// Interaction service trait — what the pipelines need from STRING.

use anyhow::Result;
use async_trait::async_trait;

use crate::enrichment::table::EnrichmentTable;
use crate::species::Species;

/// A source of interaction networks and enrichment results for gene lists.
/// Implementations must be async because the real provider is an HTTP API.
#[async_trait]
pub trait InteractionService: Send + Sync {
    /// Fetch the interaction network for `genes` as an SVG document.
    async fn network_image(&self, genes: &[String], species: Species) -> Result<Vec<u8>>;

    /// Fetch functional enrichment for `genes`. An empty table means the
    /// service found nothing enriched, which is not an error.
    async fn enrichment(&self, genes: &[String], species: Species) -> Result<EnrichmentTable>;
}
