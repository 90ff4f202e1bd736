use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::summarizer::DEFAULT_LIMIT;
use crate::text::StopwordFilter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Maximum number of distinct sentences in a summary
    pub limit: usize,
    /// Stop-word language code
    pub language: String,
    /// Words to treat as stop words on top of the language list
    pub extra_stopwords: Vec<String>,
    /// Words to drop from the language list
    pub keep_stopwords: Vec<String>,
    /// Extra abbreviations that never end a sentence
    pub abbreviations: Vec<String>,
    /// Repair word boundaries before summarizing
    pub normalize: bool,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            language: "en".to_string(),
            extra_stopwords: Vec::new(),
            keep_stopwords: Vec::new(),
            abbreviations: Vec::new(),
            normalize: true,
        }
    }
}

impl SummarizerConfig {
    /// Load a config from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.language.trim().is_empty() {
            return Err(ConfigError::Invalid("language must not be empty".to_string()));
        }
        if StopwordFilter::for_language(&self.language).is_none() {
            return Err(ConfigError::Invalid(format!(
                "no stop-word list for language {:?}",
                self.language
            )));
        }
        if let Some(word) = self.extra_stopwords.iter().find(|w| w.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("blank stop word {:?}", word)));
        }
        Ok(())
    }

    /// Stop-word filter described by this config
    pub fn stopword_filter(&self) -> Result<StopwordFilter, ConfigError> {
        let mut filter = StopwordFilter::for_language(&self.language).ok_or_else(|| {
            ConfigError::Invalid(format!("no stop-word list for language {:?}", self.language))
        })?;
        filter.add_stopwords(&self.extra_stopwords);
        filter.remove_stopwords(&self.keep_stopwords);
        Ok(filter)
    }
}

impl fmt::Display for SummarizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SummarizerConfig::default();
        assert_eq!(config.limit, 25);
        assert_eq!(config.language, "en");
        assert!(config.normalize);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SummarizerConfig = serde_json::from_str(r#"{"limit": 3}"#).unwrap();
        assert_eq!(config.limit, 3);
        assert_eq!(config.language, "en");
        assert!(config.normalize);
    }

    #[test]
    fn test_invalid_language() {
        let config = SummarizerConfig {
            language: "xx".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        assert!(config.stopword_filter().is_err());
    }

    #[test]
    fn test_blank_extra_stopword() {
        let config = SummarizerConfig {
            extra_stopwords: vec!["ok".to_string(), "  ".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_stopword_adjustments() {
        let config = SummarizerConfig {
            extra_stopwords: vec!["Summary".to_string()],
            keep_stopwords: vec!["the".to_string()],
            ..Default::default()
        };
        let filter = config.stopword_filter().unwrap();
        assert!(filter.is_stopword("summary"));
        assert!(!filter.is_stopword("the"));
        assert!(filter.is_stopword("and"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SummarizerConfig::load(Path::new("/nonexistent/summarizer.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("summarizer_config_{}.json", std::process::id()));
        fs::write(&path, r#"{"limit": 5, "normalize": false}"#).unwrap();

        let config = SummarizerConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(config.limit, 5);
        assert!(!config.normalize);
    }
}
