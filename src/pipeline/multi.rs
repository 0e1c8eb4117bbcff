// Multi-sample pipeline (up- vs down-regulated genes per sample).
//
// For every sample, writes into `<output_dir>/<sample>/`:
//   <sample>_up_network.svg, <sample>_down_network.svg
//   <sample>_<category>_radar_chart.svg        categories enriched both ways
//   <sample>_<category>_UP_radar_chart.svg     categories enriched only up
//   <sample>_<category>_DOWN_radar_chart.svg   categories enriched only down
//   <sample>_output.xlsx                       both tables, with a direction column
//
// Samples whose names only differ in characters that are not allowed in file
// names get suffixed directories (`wt_1`, `wt_1_2`). A failing sample is
// reported and the remaining samples still run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::{debug, error, info, warn};

use super::radar_chart_path;
use crate::chart::radar;
use crate::enrichment::table::EnrichmentTable;
use crate::input::workbook::{Direction, SampleWorkbook};
use crate::keywords::comparison::compare;
use crate::keywords::summarizer::KeywordFrequencySummarizer;
use crate::output::{
    ensure_output_dir, file_component, unique_name, workbook, write_network_image,
};
use crate::species::Species;
use crate::string_db::traits::InteractionService;

/// Column added to workbook rows to record the regulation direction.
pub const DIRECTION_FIELD: &str = "direction";

/// Categories split by which directions they were enriched in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySplit {
    pub shared: Vec<String>,
    pub up_only: Vec<String>,
    pub down_only: Vec<String>,
}

/// Partition the categories of two tables, keeping first-appearance order.
pub fn split_categories(up: &EnrichmentTable, down: &EnrichmentTable) -> CategorySplit {
    let up_cats = up.categories();
    let down_cats = down.categories();

    let mut split = CategorySplit::default();
    for category in &up_cats {
        if down_cats.contains(category) {
            split.shared.push(category.clone());
        } else {
            split.up_only.push(category.clone());
        }
    }
    split.down_only = down_cats
        .into_iter()
        .filter(|c| !up_cats.contains(c))
        .collect();
    split
}

/// Files written for one sample.
#[derive(Debug, Clone, Default)]
pub struct SampleReport {
    pub sample: String,
    pub networks: Vec<PathBuf>,
    pub radar_charts: Vec<PathBuf>,
    pub workbook: Option<PathBuf>,
}

/// Outcome of a whole multi-sample run.
#[derive(Debug, Default)]
pub struct MultiReport {
    pub completed: Vec<SampleReport>,
    /// (sample, error message) for every sample that failed
    pub failed: Vec<(String, String)>,
}

/// One distinct subdirectory name per sample, in the same order.
pub fn sample_dir_names(samples: &[String]) -> Result<Vec<String>> {
    let mut names: Vec<String> = Vec::with_capacity(samples.len());
    for sample in samples {
        let base = file_component(sample);
        let name = unique_name(&base, usize::MAX, &names)?;
        if name != base {
            warn!(
                sample = sample.as_str(),
                dir = name.as_str(),
                "Sample directory renamed, another sample maps to {base}"
            );
        }
        names.push(name);
    }
    Ok(names)
}

/// Process every sample in `book`, one after another.
pub async fn run(
    service: &dyn InteractionService,
    book: &mut SampleWorkbook,
    species: Species,
    output_dir: &Path,
    summarizer: &KeywordFrequencySummarizer,
) -> Result<MultiReport> {
    let samples = book.samples();
    if samples.is_empty() {
        anyhow::bail!("No <sample>_UP / <sample>_DOWN sheets found in the workbook");
    }
    println!("The file has these samples: {}", samples.join(", "));
    let dir_names = sample_dir_names(&samples)?;

    let mut report = MultiReport::default();
    for (i, (sample, dir_name)) in samples.iter().zip(&dir_names).enumerate() {
        println!(
            "\n{}",
            format!("=== Sample {} ({}/{}) ===", sample, i + 1, samples.len()).bold()
        );

        let sample_dir = output_dir.join(dir_name);
        match read_and_run_sample(service, book, sample, species, &sample_dir, summarizer).await
        {
            Ok(sample_report) => report.completed.push(sample_report),
            Err(e) => {
                error!(sample = sample.as_str(), error = %e, "Sample failed");
                println!("  {} sample {} failed: {:#}", "Error:".red(), sample, e);
                report.failed.push((sample.clone(), format!("{e:#}")));
            }
        }
    }

    Ok(report)
}

async fn read_and_run_sample(
    service: &dyn InteractionService,
    book: &mut SampleWorkbook,
    sample: &str,
    species: Species,
    sample_dir: &Path,
    summarizer: &KeywordFrequencySummarizer,
) -> Result<SampleReport> {
    let up_genes = book.genes(sample, Direction::Up)?;
    let down_genes = book.genes(sample, Direction::Down)?;
    check_gene_lists(sample, &up_genes, &down_genes)?;
    ensure_output_dir(sample_dir)?;
    run_sample(service, sample, &up_genes, &down_genes, species, sample_dir, summarizer).await
}

fn check_gene_lists(sample: &str, up_genes: &[String], down_genes: &[String]) -> Result<()> {
    for (direction, genes) in [(Direction::Up, up_genes), (Direction::Down, down_genes)] {
        if genes.is_empty() {
            anyhow::bail!("Sheet {sample}_{direction} lists no genes");
        }
    }
    Ok(())
}

/// Fetch, summarize and write everything for one sample into `sample_dir`.
pub async fn run_sample(
    service: &dyn InteractionService,
    sample: &str,
    up_genes: &[String],
    down_genes: &[String],
    species: Species,
    sample_dir: &Path,
    summarizer: &KeywordFrequencySummarizer,
) -> Result<SampleReport> {
    check_gene_lists(sample, up_genes, down_genes)?;

    let stem = file_component(sample);
    let mut report = SampleReport {
        sample: sample.to_string(),
        ..SampleReport::default()
    };

    for (direction, genes) in [(Direction::Up, up_genes), (Direction::Down, down_genes)] {
        println!("Getting the network for the {direction}-regulated genes ({})", genes.len());
        let svg = service
            .network_image(genes, species)
            .await
            .with_context(|| format!("Network request failed for {sample} {direction}"))?;
        let name = format!("{stem}_{}_network", direction.label().to_lowercase());
        report.networks.push(write_network_image(sample_dir, &name, &svg)?);
    }

    println!("Getting enrichment for sample {sample}");
    let up = service
        .enrichment(up_genes, species)
        .await
        .with_context(|| format!("Enrichment request failed for {sample} UP"))?;
    let down = service
        .enrichment(down_genes, species)
        .await
        .with_context(|| format!("Enrichment request failed for {sample} DOWN"))?;

    if up.is_empty() && down.is_empty() {
        info!(sample = sample, "No enrichment in either direction");
        println!("{}", format!("There was no enrichment for sample {sample}").yellow());
        return Ok(report);
    }

    let split = split_categories(&up, &down);
    debug!(
        sample = sample,
        shared = split.shared.len(),
        up_only = split.up_only.len(),
        down_only = split.down_only.len(),
        "Split enrichment categories"
    );

    if !split.shared.is_empty() {
        println!("Plotting shared categories: {}", split.shared.join(", "));
    }
    for category in &split.shared {
        let comparison = compare(
            &summarizer.summarize(&up, category),
            &summarizer.summarize(&down, category),
        );
        if comparison.is_empty() {
            continue;
        }
        let path = radar_chart_path(sample_dir, Some(&stem), category, None);
        radar::render_comparison(&path, category, &comparison)?;
        report.radar_charts.push(path);
    }

    for (direction, table, categories) in [
        (Direction::Up, &up, &split.up_only),
        (Direction::Down, &down, &split.down_only),
    ] {
        if categories.is_empty() {
            continue;
        }
        println!(
            "Categories only enriched {direction}: {}",
            categories.join(", ")
        );
        for category in categories {
            let distribution = summarizer.summarize(table, category);
            if distribution.is_empty() {
                continue;
            }
            let path = radar_chart_path(sample_dir, Some(&stem), category, Some(direction));
            radar::render_distribution(&path, category, &distribution)?;
            report.radar_charts.push(path);
        }
    }

    let merged = up
        .tagged(DIRECTION_FIELD, Direction::Up.label())
        .concat(down.tagged(DIRECTION_FIELD, Direction::Down.label()));
    let workbook_path = sample_dir.join(format!("{stem}_output.xlsx"));
    println!("Saving enrichment in file {}", workbook_path.display());
    workbook::write_enrichment_workbook(&workbook_path, &merged)?;
    report.workbook = Some(workbook_path);

    Ok(report)
}
