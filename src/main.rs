use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use enrich_radar::config::Config;
use enrich_radar::enrichment::table::EnrichmentTable;
use enrich_radar::input::gene_list::read_gene_list;
use enrich_radar::input::workbook::SampleWorkbook;
use enrich_radar::keywords::summarizer::KeywordFrequencySummarizer;
use enrich_radar::output::{ensure_output_dir, terminal};
use enrich_radar::species::Species;
use enrich_radar::string_db::client::StringClient;

/// enrich-radar: STRING interaction networks and enrichment keyword charts.
///
/// Sends gene lists to STRING, saves the interaction network, and summarizes
/// each enrichment category as a radar chart of its most frequent keywords.
#[derive(Parser)]
#[command(name = "enrich-radar", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one gene list (one identifier per line)
    NetEnrich {
        /// Gene list file
        input: PathBuf,

        /// Output directory; its name also prefixes the output files
        output: PathBuf,

        /// Organism of the genes
        #[arg(value_enum)]
        species: Species,
    },

    /// Analyze every <sample>_UP / <sample>_DOWN sheet pair in a workbook
    Multi {
        /// Workbook with one sheet per sample and direction
        input: PathBuf,

        /// Output directory; each sample gets its own subdirectory
        output: PathBuf,

        /// Organism of the genes
        #[arg(value_enum)]
        species: Species,
    },

    /// Summarize a saved STRING enrichment JSON file without network access
    Words {
        /// JSON array as returned by the enrichment endpoint
        input: PathBuf,

        /// Only this category (default: every category in the file)
        #[arg(long)]
        category: Option<String>,

        /// Number of keywords (default: ENRICH_TOP_WORDS or 10)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        top: Option<u32>,

        /// Also write a radar chart of the category to this SVG file
        #[arg(long, requires = "category")]
        chart: Option<PathBuf>,

        /// Print the distribution as JSON instead of bars
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("enrich_radar=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let summarizer = KeywordFrequencySummarizer::new(config.top_words);

    match cli.command {
        Commands::NetEnrich {
            input,
            output,
            species,
        } => {
            println!("Analysing the file {} for {species}", input.display());
            let genes = read_gene_list(&input)?;
            println!("  {} genes read", genes.len());

            ensure_output_dir(&output)?;
            let name = output_name(&output);
            let client = StringClient::new(&config.string_api_url, &config.caller_identity)?;

            let report = enrich_radar::pipeline::single::run(
                &client,
                &genes,
                species,
                &output,
                &name,
                &summarizer,
            )
            .await?;

            println!("\n{}", "Analysis complete.".bold());
            println!("  Enrichment rows: {}", report.enrichment_rows);
            println!("  Radar charts:    {}", report.radar_charts.len());
            if let Some(path) = &report.workbook {
                println!("  Workbook:        {}", path.display());
            }
        }

        Commands::Multi {
            input,
            output,
            species,
        } => {
            println!("Analysing the file {} for {species}", input.display());
            let mut book = SampleWorkbook::open(&input)?;

            ensure_output_dir(&output)?;
            let client = StringClient::new(&config.string_api_url, &config.caller_identity)?;

            let report = enrich_radar::pipeline::multi::run(
                &client,
                &mut book,
                species,
                &output,
                &summarizer,
            )
            .await?;

            println!("\n{}", "All analyses have finished.".bold());
            println!("  Samples completed: {}", report.completed.len());
            if !report.failed.is_empty() {
                for (sample, error) in &report.failed {
                    println!("  {} {sample}: {error}", "Failed:".red());
                }
                anyhow::bail!(
                    "{} of {} samples failed",
                    report.failed.len(),
                    report.failed.len() + report.completed.len()
                );
            }
        }

        Commands::Words {
            input,
            category,
            top,
            chart,
            json,
        } => {
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let table = EnrichmentTable::from_json(&text)?;
            let summarizer = match top {
                Some(n) => KeywordFrequencySummarizer::new(n as usize),
                None => summarizer,
            };
            info!(rows = table.len(), top_n = summarizer.top_n, "Loaded enrichment file");

            let categories = match category {
                Some(c) => vec![c],
                None => table.categories(),
            };
            if categories.is_empty() {
                println!("{}", "There were no enriched categories!".yellow());
                return Ok(());
            }

            for category in &categories {
                let distribution = summarizer.summarize(&table, category);
                if json {
                    println!("{}", serde_json::to_string_pretty(&distribution)?);
                } else {
                    terminal::display_distribution(category, &distribution);
                }

                if let Some(path) = &chart {
                    if distribution.is_empty() {
                        println!("Nothing to chart for '{category}'.");
                    } else {
                        enrich_radar::chart::radar::render_distribution(
                            path,
                            category,
                            &distribution,
                        )?;
                        println!("Radar chart saved to {}", path.display());
                    }
                }
            }
        }
    }

    Ok(())
}

/// Name used to prefix single-run output files: the output directory's
/// last component.
fn output_name(output: &Path) -> String {
    output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}
