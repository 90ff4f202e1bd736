use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SummarizerConfig;
use crate::error::{ConfigError, SummarizeError};
use crate::source::Source;
use crate::summarizer::{Summarizer, DEFAULT_LIMIT};
use crate::text::{collapse_whitespace, normalize, word_count};

/// Outcome of summarizing one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub summary: String,
    /// Selected sentences in document order
    pub sentences: Vec<String>,
    pub source_words: usize,
    pub summary_words: usize,
    pub source_sentences: usize,
    pub scored_sentences: usize,
    pub limit: usize,
}

impl SummaryReport {
    /// True when the document had no text to summarize
    pub fn is_empty_source(&self) -> bool {
        self.source_words == 0
    }
}

/// Extract, normalize and summarize in one call
#[derive(Debug)]
pub struct Pipeline {
    summarizer: Summarizer,
    limit: usize,
    normalize: bool,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Summarizer::new())
    }
}

impl Pipeline {
    pub fn new(summarizer: Summarizer) -> Self {
        Self {
            summarizer,
            limit: DEFAULT_LIMIT,
            normalize: true,
        }
    }

    pub fn from_config(config: &SummarizerConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(Summarizer::from_config(config)?)
            .with_limit(config.limit)
            .with_normalize(config.normalize))
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Skip word-boundary repair; whitespace is still collapsed
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn run(&self, source: &Source) -> Result<SummaryReport, SummarizeError> {
        let raw = source.extract_text()?;
        info!("Extracted {} characters from {} source", raw.len(), source.kind());

        // Typed text is measured as entered, extracted text after repair
        let report = match source {
            Source::RawText(_) => self.run_text(&raw),
            Source::PdfBytes(_) | Source::EpubBytes(_) => self.summarize_document(&raw, false),
        };
        Ok(report)
    }

    /// Summarize typed text; `source_words` counts the text as given
    pub fn run_text(&self, raw: &str) -> SummaryReport {
        self.summarize_document(raw, true)
    }

    fn summarize_document(&self, raw: &str, count_raw: bool) -> SummaryReport {
        let document = if self.normalize {
            normalize(raw)
        } else {
            collapse_whitespace(raw)
        };

        let summary = self.summarizer.summarize(&document, self.limit);
        let text = summary.text();

        let report = SummaryReport {
            sentences: summary.sentences.iter().map(|s| s.text.to_string()).collect(),
            source_words: word_count(if count_raw { raw } else { document.as_str() }),
            summary_words: word_count(&text),
            source_sentences: summary.total_sentences,
            scored_sentences: summary.scored_sentences,
            limit: self.limit,
            summary: text,
        };

        info!(
            "Summarized {} words into {} words ({} of {} sentences)",
            report.source_words,
            report.summary_words,
            report.sentences.len(),
            report.source_sentences
        );

        report
    }
}
