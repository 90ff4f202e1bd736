use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning an input source into plain text
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("failed to extract text from EPUB: {0}")]
    Epub(String),

    #[error("{path:?} is not valid UTF-8 text")]
    Utf8 { path: PathBuf },
}

/// Failures while loading or validating a summarizer configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config JSON")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
