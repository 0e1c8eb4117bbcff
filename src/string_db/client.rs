// HTTP client for the STRING REST API.
//
// Both endpoints take a form-encoded POST:
//   {base}/svg/network     -> SVG image of the interaction network
//   {base}/json/enrichment -> JSON array of enrichment records
// Identifiers are joined with a carriage return, which is STRING's list
// separator. Every call is followed by the fixed courtesy delay.
//
// API docs: https://string-db.org/help/api/

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use super::pacing::CourtesyDelay;
use super::traits::InteractionService;
use crate::enrichment::table::EnrichmentTable;
use crate::species::Species;

/// Versioned STRING API endpoint the results were validated against.
pub const DEFAULT_STRING_API_URL: &str = "https://version-11-5.string-db.org/api";

/// Separator between identifiers in the `identifiers` form field.
pub const IDENTIFIER_SEPARATOR: &str = "\r";

/// Client for the STRING network and enrichment endpoints.
pub struct StringClient {
    client: reqwest::Client,
    base_url: String,
    caller_identity: String,
    pacer: CourtesyDelay,
}

impl StringClient {
    /// Create a client pointing at `base_url` (no trailing slash needed).
    pub fn new(base_url: &str, caller_identity: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("enrich-radar/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            caller_identity: caller_identity.to_string(),
            pacer: CourtesyDelay::default(),
        })
    }

    /// Full URL for an output format and method, e.g. ("json", "enrichment").
    pub fn endpoint(&self, output_format: &str, method: &str) -> String {
        format!("{}/{}/{}", self.base_url, output_format, method)
    }

    /// POST a form to an endpoint and return the raw body bytes.
    async fn post_form(&self, url: &str, params: &[(&str, String)]) -> Result<Vec<u8>> {
        debug!(url = url, "STRING POST request");

        let response = self
            .client
            .post(url)
            .form(params)
            .send()
            .await
            .with_context(|| format!("STRING request failed: {url}"));

        // The delay applies to failed requests too.
        self.pacer.after_request().await;
        let response = response?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("STRING {url} returned {status}: {body}");
        }

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read STRING response body from {url}"))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl InteractionService for StringClient {
    async fn network_image(&self, genes: &[String], species: Species) -> Result<Vec<u8>> {
        let url = self.endpoint("svg", "network");
        let params = network_params(genes, species);

        let svg = self.post_form(&url, &params).await?;
        info!(genes = genes.len(), bytes = svg.len(), "Fetched STRING network image");
        Ok(svg)
    }

    async fn enrichment(&self, genes: &[String], species: Species) -> Result<EnrichmentTable> {
        let url = self.endpoint("json", "enrichment");
        let params = enrichment_params(genes, species, &self.caller_identity);

        let body = self.post_form(&url, &params).await?;
        let text = String::from_utf8(body).context("STRING enrichment response is not UTF-8")?;
        let table = EnrichmentTable::from_json(&text)?;
        info!(genes = genes.len(), rows = table.len(), "Fetched STRING enrichment");
        Ok(table)
    }
}

/// Form fields for the network image request.
pub fn network_params(genes: &[String], species: Species) -> Vec<(&'static str, String)> {
    vec![
        ("identifiers", genes.join(IDENTIFIER_SEPARATOR)),
        ("species", species.taxonomy_id().to_string()),
        ("network_flavor", "confidence".to_string()),
    ]
}

/// Form fields for the enrichment request.
pub fn enrichment_params(
    genes: &[String],
    species: Species,
    caller_identity: &str,
) -> Vec<(&'static str, String)> {
    vec![
        ("identifiers", genes.join(IDENTIFIER_SEPARATOR)),
        ("species", species.taxonomy_id().to_string()),
        ("caller_identity", caller_identity.to_string()),
    ]
}
