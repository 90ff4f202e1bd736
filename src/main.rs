use anyhow::{Context, Result};
use clap::{Args, Parser};
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use extractive_summarizer::{Pipeline, Source, SummarizerConfig, SummaryReport};

#[derive(Debug, Parser)]
#[command(author, version, about = "Extractive text summarizer for plain text, PDF and EPUB")]
struct Cli {
    #[command(flatten)]
    input: InputArgs,

    /// Maximum number of sentences in the summary
    #[arg(long)]
    limit: Option<usize>,

    /// Path to configuration JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long, default_value = "false")]
    json: bool,

    /// Do not repair word boundaries before summarizing
    #[arg(long, default_value = "false")]
    no_normalize: bool,
}

#[derive(Debug, Args)]
#[group(multiple = false)]
struct InputArgs {
    /// Text to summarize
    #[arg(long)]
    text: Option<String>,

    /// Text, PDF or EPUB file to summarize (stdin when neither is given)
    #[arg(long)]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout only carries the summary
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from: {:?}", path);
            SummarizerConfig::load(path)
                .with_context(|| format!("Failed to load config: {:?}", path))?
        }
        None => SummarizerConfig::default(),
    };
    if let Some(limit) = cli.limit {
        config.limit = limit;
    }
    if cli.no_normalize {
        config.normalize = false;
    }
    info!("Configuration: {}", config);

    let pipeline = Pipeline::from_config(&config).context("Invalid configuration")?;
    let source = read_source(&cli.input)?;
    let report = pipeline.run(&source).context("Failed to summarize input")?;

    if report.is_empty_source() {
        warn!("Input contained no text");
        anyhow::bail!("Please enter text or upload a PDF file.");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn read_source(input: &InputArgs) -> Result<Source> {
    if let Some(text) = &input.text {
        return Ok(Source::from(text.as_str()));
    }
    if let Some(path) = &input.file {
        return Source::from_path(path).with_context(|| format!("Failed to read input: {:?}", path));
    }

    info!("Reading text from stdin");
    let text = io::read_to_string(io::stdin()).context("Failed to read stdin")?;
    Ok(Source::from(text))
}

fn print_report(report: &SummaryReport) {
    println!("Extracted text length: {} words", report.source_words);
    println!();
    println!("Summary:");
    println!("{}", report.summary);
    println!();
    println!("Summary length: {} words", report.summary_words);
}
