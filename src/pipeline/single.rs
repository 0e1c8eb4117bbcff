// Single gene list pipeline.
//
// Writes into `output_dir`:
//   <name>.svg                    interaction network
//   <name>_categories_enrich.svg  rows per enrichment category
//   <category>_radar_chart.svg    top keywords, one per category
//   <name>_output.xlsx            raw enrichment rows, one sheet per category

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use tracing::{debug, info};

use super::radar_chart_path;
use crate::chart::{categories, radar};
use crate::keywords::summarizer::KeywordFrequencySummarizer;
use crate::output::{file_component, terminal, workbook, write_network_image};
use crate::species::Species;
use crate::string_db::traits::InteractionService;

/// Files written by one single-list run.
#[derive(Debug, Clone, Default)]
pub struct SingleReport {
    pub network: Option<PathBuf>,
    pub category_chart: Option<PathBuf>,
    pub radar_charts: Vec<PathBuf>,
    pub workbook: Option<PathBuf>,
    pub enrichment_rows: usize,
}

/// Run the full network + enrichment analysis for one gene list.
///
/// `output_dir` must already exist. `name` prefixes the network image, the
/// category chart and the workbook.
pub async fn run(
    service: &dyn InteractionService,
    genes: &[String],
    species: Species,
    output_dir: &Path,
    name: &str,
    summarizer: &KeywordFrequencySummarizer,
) -> Result<SingleReport> {
    let mut report = SingleReport::default();
    let stem = file_component(name);

    println!("Fetching interaction network for {} genes...", genes.len());
    let svg = service.network_image(genes, species).await?;
    report.network = Some(write_network_image(output_dir, &stem, &svg)?);

    println!("Fetching functional enrichment...");
    let enrichment = service.enrichment(genes, species).await?;
    report.enrichment_rows = enrichment.len();

    if enrichment.is_empty() {
        info!(genes = genes.len(), "No enrichment returned");
        println!("{}", "There were no enriched categories!".yellow());
        return Ok(report);
    }

    let counts = enrichment.category_counts();
    terminal::display_category_counts(&counts);

    let chart_path = output_dir.join(format!("{stem}_categories_enrich.svg"));
    categories::render_category_counts(&chart_path, "Enriched categories", &counts)?;
    report.category_chart = Some(chart_path);

    for (category, _) in &counts {
        let distribution = summarizer.summarize(&enrichment, category);
        if distribution.is_empty() {
            debug!(category = category.as_str(), "No keywords left after filtering");
            continue;
        }
        let path = radar_chart_path(output_dir, None, category, None);
        radar::render_distribution(&path, category, &distribution)?;
        report.radar_charts.push(path);
    }
    println!("  Radar charts written: {}", report.radar_charts.len());

    let workbook_path = output_dir.join(format!("{stem}_output.xlsx"));
    println!("Saving enrichment to {}", workbook_path.display());
    workbook::write_enrichment_workbook(&workbook_path, &enrichment)?;
    report.workbook = Some(workbook_path);

    Ok(report)
}
