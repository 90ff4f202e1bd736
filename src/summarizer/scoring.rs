use serde::Serialize;
use std::collections::HashMap;

use super::frequency::WordFrequencies;
use crate::text::{Sentence, Tokenizer};

/// Salience of one distinct sentence text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredText<'a> {
    pub text: &'a str,
    /// Sum of document frequencies over every occurrence of the text
    pub score: usize,
    /// Sentence index of the first occurrence
    pub first_index: usize,
}

/// Sentence score table keyed by sentence text.
///
/// Repeated sentences share one entry and their scores add up. Sentences
/// without a single content token have no entry at all.
#[derive(Debug, Clone, Default)]
pub struct SentenceScores<'a> {
    entries: Vec<ScoredText<'a>>,
    positions: HashMap<&'a str, usize>,
}

impl<'a> SentenceScores<'a> {
    pub fn build<T>(sentences: &[Sentence<'a>], frequencies: &WordFrequencies, tokenizer: &T) -> Self
    where
        T: Tokenizer + ?Sized,
    {
        let mut scores = Self::default();

        for sentence in sentences {
            let hits: Vec<usize> = tokenizer
                .tokenize(sentence.text)
                .iter()
                .filter_map(|token| frequencies.get(token))
                .collect();
            if hits.is_empty() {
                continue;
            }
            scores.add(sentence, hits.iter().sum());
        }

        scores
    }

    fn add(&mut self, sentence: &Sentence<'a>, score: usize) {
        match self.positions.get(sentence.text) {
            Some(&pos) => self.entries[pos].score += score,
            None => {
                self.positions.insert(sentence.text, self.entries.len());
                self.entries.push(ScoredText {
                    text: sentence.text,
                    score,
                    first_index: sentence.index,
                });
            }
        }
    }

    pub fn get(&self, text: &str) -> Option<usize> {
        self.positions.get(text).map(|&pos| self.entries[pos].score)
    }

    /// Entries in order of first occurrence
    pub fn entries(&self) -> &[ScoredText<'a>] {
        &self.entries
    }

    /// Number of distinct scored sentence texts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{EnglishSegmenter, SentenceSegmenter, StopwordFilter, WhitespaceTokenizer};

    fn scores(text: &str) -> SentenceScores<'_> {
        let stopwords = StopwordFilter::from_list(&["the", "on", "at", "is", "it"]);
        let sentences = EnglishSegmenter::new().segment(text);
        let frequencies = WordFrequencies::build(WhitespaceTokenizer.tokenize(text), &stopwords);
        SentenceScores::build(&sentences, &frequencies, &WhitespaceTokenizer)
    }

    #[test]
    fn test_scores_sum_content_frequencies() {
        let table = scores("The cat sat. The cat sat on the mat. Dogs bark loudly at night.");

        // cat=2, sat=1; "sat." "mat." and "night." miss the table
        assert_eq!(table.get("The cat sat."), Some(2));
        assert_eq!(table.get("The cat sat on the mat."), Some(3));
        assert_eq!(table.get("Dogs bark loudly at night."), Some(3));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_stopword_only_sentence_is_absent() {
        let table = scores("Cats purr. It is on the. Cats purr loudly.");

        assert_eq!(table.get("It is on the."), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_repeated_sentences_share_entry() {
        let table = scores("Rain falls here. Sun shines there. Rain falls here.");

        // rain=2, falls=2 per occurrence, accumulated over both occurrences
        assert_eq!(table.get("Rain falls here."), Some(8));
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].first_index, 0);
        assert_eq!(table.entries()[1].text, "Sun shines there.");
    }

    #[test]
    fn test_empty_document() {
        assert!(scores("").is_empty());
    }
}
