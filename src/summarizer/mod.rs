//! Frequency-based extractive summarization
//!
//! Sentences are scored by the document-wide frequency of their content
//! words, the best `limit` sentence texts are kept, and the result is emitted
//! in document order.

mod frequency;
mod scoring;
mod selector;

pub use frequency::WordFrequencies;
pub use scoring::{ScoredText, SentenceScores};
pub use selector::{reconstruct, select_top};

use serde::Serialize;
use tracing::debug;

use crate::config::SummarizerConfig;
use crate::error::ConfigError;
use crate::text::{
    EnglishSegmenter, Sentence, SentenceSegmenter, StopwordFilter, Tokenizer, WhitespaceTokenizer,
};

/// Number of sentences kept when no limit is given
pub const DEFAULT_LIMIT: usize = 25;

/// Result of one summarization
#[derive(Debug, Clone, Serialize)]
pub struct Summary<'a> {
    /// Selected sentences in document order
    pub sentences: Vec<Sentence<'a>>,
    /// Sentences found in the document
    pub total_sentences: usize,
    /// Distinct sentence texts with a non-empty score
    pub scored_sentences: usize,
    pub limit: usize,
}

impl Summary<'_> {
    /// Selected sentences joined with single spaces
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Extractive summarizer.
///
/// Owns the read-only resources every request shares: the stop-word set,
/// the sentence segmenter and the tokenizer. It holds no per-request state,
/// so one instance can serve any number of threads.
#[derive(Debug)]
pub struct Summarizer {
    stopwords: StopwordFilter,
    segmenter: Box<dyn SentenceSegmenter>,
    tokenizer: Box<dyn Tokenizer>,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// English summarizer
    pub fn new() -> Self {
        Self {
            stopwords: StopwordFilter::english(),
            segmenter: Box::new(EnglishSegmenter::new()),
            tokenizer: Box::new(WhitespaceTokenizer),
        }
    }

    pub fn from_config(config: &SummarizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let segmenter = EnglishSegmenter::new().with_abbreviations(&config.abbreviations);

        Ok(Self::new()
            .with_stopwords(config.stopword_filter()?)
            .with_segmenter(segmenter))
    }

    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_segmenter<S: SentenceSegmenter + 'static>(mut self, segmenter: S) -> Self {
        self.segmenter = Box::new(segmenter);
        self
    }

    pub fn with_tokenizer<T: Tokenizer + 'static>(mut self, tokenizer: T) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Select up to `limit` distinct sentence texts from `text`
    pub fn summarize<'a>(&self, text: &'a str, limit: usize) -> Summary<'a> {
        let sentences = self.segmenter.segment(text);
        let frequencies = WordFrequencies::build(self.tokenizer.tokenize(text), &self.stopwords);
        let scores = SentenceScores::build(&sentences, &frequencies, self.tokenizer.as_ref());

        let selected = select_top(&scores, limit);
        let kept = reconstruct(&sentences, &selected);

        debug!(
            "Scored {}/{} sentences over {} content words, kept {}",
            scores.len(),
            sentences.len(),
            frequencies.len(),
            kept.len()
        );
        debug!("Most frequent content words: {:?}", frequencies.most_common(5));

        Summary {
            sentences: kept,
            total_sentences: sentences.len(),
            scored_sentences: scores.len(),
            limit,
        }
    }

    /// Summary text of `text` with at most `limit` distinct sentences
    pub fn summarize_text(&self, text: &str, limit: usize) -> String {
        self.summarize(text, limit).text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const STORY: &str = "The cat sat. The cat sat on the mat. Dogs bark loudly at night.";

    fn summarizer() -> Summarizer {
        Summarizer::new().with_stopwords(StopwordFilter::from_list(&[
            "the", "on", "at", "a", "is", "it", "and",
        ]))
    }

    #[test]
    fn test_end_to_end_scenario() {
        let summary = summarizer().summarize(STORY, 2);

        // scores: 2, 3, 3
        assert_eq!(summary.total_sentences, 3);
        assert_eq!(summary.scored_sentences, 3);
        assert_eq!(
            summary.text(),
            "The cat sat on the mat. Dogs bark loudly at night."
        );
    }

    #[test]
    fn test_default_stopwords_scenario() {
        let summary = Summarizer::new().summarize(STORY, 1);
        assert_eq!(summary.sentences.len(), 1);
        assert_ne!(summary.sentences[0].text, "The cat sat.");
    }

    #[test]
    fn test_stopwords_never_select_empty_sentence() {
        let text = "Rivers flow south. It is on the. Rivers flood.";
        let summary = summarizer().summarize(text, 10);

        assert_eq!(summary.scored_sentences, 2);
        assert!(summary.sentences.iter().all(|s| s.text != "It is on the."));
    }

    #[test]
    fn test_degenerate_input() {
        let s = summarizer();
        for limit in [0, 1, DEFAULT_LIMIT] {
            assert_eq!(s.summarize_text("", limit), "");
            assert_eq!(s.summarize_text("   ", limit), "");
        }
        assert_eq!(s.summarize_text(STORY, 0), "");
    }

    #[test]
    fn test_limit_beyond_sentence_count() {
        assert_eq!(summarizer().summarize_text(STORY, 100), STORY);
    }

    /// Lowercases and trims punctuation off each word
    #[derive(Debug)]
    struct TrimmingTokenizer;

    impl Tokenizer for TrimmingTokenizer {
        fn tokenize(&self, text: &str) -> Vec<String> {
            text.split_whitespace()
                .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        }
    }

    #[test]
    fn test_custom_tokenizer() {
        // "sat." now counts as "sat": scores become 4, 5, 4
        let s = summarizer().with_tokenizer(TrimmingTokenizer);
        assert_eq!(s.summarize_text(STORY, 1), "The cat sat on the mat.");
        assert_eq!(
            s.summarize_text(STORY, 2),
            "The cat sat. The cat sat on the mat."
        );
    }

    #[test]
    fn test_from_config() {
        let config = SummarizerConfig {
            extra_stopwords: vec!["cat".to_string()],
            ..Default::default()
        };
        let s = Summarizer::from_config(&config).unwrap();
        assert!(s.stopwords().is_stopword("cat"));
        assert!(s.stopwords().is_stopword("the"));
    }

    fn random_document(rng: &mut StdRng) -> String {
        const WORDS: &[&str] = &[
            "the", "river", "flows", "on", "stone", "and", "bird", "sings", "it", "at", "moon",
            "rises", "a", "wind",
        ];
        const ENDINGS: &[&str] = &[".", "!", "?"];

        let sentence_count = rng.gen_range(0..12);
        let mut sentences = Vec::new();
        for _ in 0..sentence_count {
            let len = rng.gen_range(1..7);
            let mut words: Vec<String> = (0..len)
                .map(|_| WORDS[rng.gen_range(0..WORDS.len())].to_string())
                .collect();
            words[0] = capitalize(&words[0]);
            let ending = ENDINGS[rng.gen_range(0..ENDINGS.len())];
            sentences.push(format!("{}{}", words.join(" "), ending));
        }
        sentences.join(" ")
    }

    fn capitalize(word: &str) -> String {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    #[test]
    fn test_properties_on_generated_documents() {
        let s = summarizer();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let doc = random_document(&mut rng);
            let all = s.summarize(&doc, usize::MAX);

            let mut previous: Vec<usize> = Vec::new();
            for limit in 0..8 {
                let summary = s.summarize(&doc, limit);

                // document order
                assert!(summary.sentences.windows(2).all(|w| w[0].index < w[1].index));

                // cardinality over distinct texts
                let mut distinct: Vec<&str> = summary.sentences.iter().map(|s| s.text).collect();
                distinct.sort_unstable();
                distinct.dedup();
                assert_eq!(distinct.len(), limit.min(all.scored_sentences), "doc: {:?}", doc);
                assert!(distinct.len() <= summary.total_sentences);

                // monotonic in limit
                let indices: Vec<usize> = summary.sentences.iter().map(|s| s.index).collect();
                assert!(previous.iter().all(|i| indices.contains(i)), "doc: {:?}", doc);
                previous = indices;
            }
        }
    }
}
