// Library exports for the binaries and for embedding hosts

pub mod config;
pub mod error;
pub mod pipeline;
pub mod source;
pub mod summarizer;
pub mod text;

use once_cell::sync::Lazy;

// Re-export commonly used types
pub use config::SummarizerConfig;
pub use error::{ConfigError, SourceError, SummarizeError};
pub use pipeline::{Pipeline, SummaryReport};
pub use source::Source;
pub use summarizer::{Summarizer, Summary, DEFAULT_LIMIT};
pub use text::normalize;

/// English summarizer shared by the free functions, built on first use
static DEFAULT_SUMMARIZER: Lazy<Summarizer> = Lazy::new(Summarizer::new);

/// Summarize `text` into at most `limit` distinct sentences, in document
/// order, using the English stop-word list
pub fn summarize(text: &str, limit: usize) -> String {
    DEFAULT_SUMMARIZER.summarize_text(text, limit)
}

/// [`summarize`] with [`DEFAULT_LIMIT`] sentences
pub fn summarize_default(text: &str) -> String {
    summarize(text, DEFAULT_LIMIT)
}
