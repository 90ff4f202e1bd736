use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use extractive_summarizer::source::is_supported;
use extractive_summarizer::{Pipeline, Source, SummarizerConfig, SummaryReport};

#[derive(Debug, Parser)]
#[command(author, version, about = "Summarize every document (PDF/EPUB/text) in a directory")]
struct Args {
    /// Input directory containing documents
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for summaries and metadata
    #[arg(short, long)]
    output: PathBuf,

    /// Maximum number of sentences per summary
    #[arg(long)]
    limit: Option<usize>,

    /// Path to configuration JSON file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize)]
struct DocumentMetadata {
    filename: String,
    file_type: String,
    source_words: usize,
    summary_words: usize,
    source_sentences: usize,
    summary_sentences: usize,
    processed_at: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct BatchMetadata {
    total_documents: usize,
    failed_documents: usize,
    total_source_words: usize,
    total_summary_words: usize,
    limit: usize,
    documents: Vec<DocumentMetadata>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    info!("Starting batch summarization");
    info!("Input directory: {:?}", args.input);
    info!("Output directory: {:?}", args.output);

    let mut config = match &args.config {
        Some(path) => SummarizerConfig::load(path)
            .with_context(|| format!("Failed to load config: {:?}", path))?,
        None => SummarizerConfig::default(),
    };
    if let Some(limit) = args.limit {
        config.limit = limit;
    }
    let pipeline = Pipeline::from_config(&config).context("Invalid configuration")?;

    fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create output directory: {:?}", args.output))?;

    let documents = find_documents(&args.input);
    info!("Found {} documents", documents.len());

    if documents.is_empty() {
        anyhow::bail!("No supported documents found in {:?}", args.input);
    }

    let mut processed = Vec::new();
    let mut failed = 0;

    for (idx, path) in documents.iter().enumerate() {
        info!("Processing {}/{}: {:?}", idx + 1, documents.len(), path);

        match summarize_document(&pipeline, path) {
            Ok(report) => {
                let relative = path.strip_prefix(&args.input).unwrap_or(path.as_path());
                let filename = relative.to_string_lossy().into_owned();

                let summary_path = summary_path(&args.output, relative);
                if let Some(parent) = summary_path.parent() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create directory: {:?}", parent))?;
                }
                fs::write(&summary_path, &report.summary)
                    .with_context(|| format!("Failed to write summary: {:?}", summary_path))?;

                processed.push(DocumentMetadata {
                    filename,
                    file_type: path
                        .extension()
                        .and_then(|s| s.to_str())
                        .unwrap_or("unknown")
                        .to_lowercase(),
                    source_words: report.source_words,
                    summary_words: report.summary_words,
                    source_sentences: report.source_sentences,
                    summary_sentences: report.sentences.len(),
                    processed_at: unix_timestamp(),
                });
            }
            Err(e) => {
                warn!("Failed to process {:?}: {:#}", path, e);
                failed += 1;
            }
        }
    }

    if processed.is_empty() {
        anyhow::bail!("No document in {:?} could be summarized", args.input);
    }

    let metadata = BatchMetadata {
        total_documents: processed.len(),
        failed_documents: failed,
        total_source_words: processed.iter().map(|d| d.source_words).sum(),
        total_summary_words: processed.iter().map(|d| d.summary_words).sum(),
        limit: pipeline.limit(),
        documents: processed,
    };

    let metadata_path = args.output.join("metadata.json");
    let metadata_json = serde_json::to_string_pretty(&metadata)?;
    fs::write(&metadata_path, metadata_json)
        .with_context(|| format!("Failed to write metadata: {:?}", metadata_path))?;
    info!("Metadata saved to: {:?}", metadata_path);

    info!("Batch complete!");
    info!("  - Documents: {}", metadata.total_documents);
    info!("  - Failed: {}", metadata.failed_documents);
    info!("  - Source words: {}", metadata.total_source_words);
    info!("  - Summary words: {}", metadata.total_summary_words);

    Ok(())
}

fn find_documents(dir: &Path) -> Vec<PathBuf> {
    let mut documents: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| is_supported(path))
        .collect();
    documents.sort();
    documents
}

/// `<output>/<relative dirs>/<file name>.summary.txt`; keeping the
/// directories and the extension gives every input its own file
fn summary_path(output: &Path, relative: &Path) -> PathBuf {
    let mut name = relative
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "unknown".into());
    name.push(".summary.txt");

    match relative.parent() {
        Some(dir) => output.join(dir).join(name),
        None => output.join(name),
    }
}

fn summarize_document(pipeline: &Pipeline, path: &Path) -> Result<SummaryReport> {
    let source = Source::from_path(path)?;
    let report = pipeline.run(&source)?;

    if report.is_empty_source() {
        anyhow::bail!("no extractable text (scanned document?)");
    }

    Ok(report)
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
