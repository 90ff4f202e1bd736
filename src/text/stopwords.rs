//! Stop-word filtering
//!
//! Stop words are excluded from the word frequency table. The default list is
//! NLTK's English corpus as shipped by the `stop-words` crate; callers can
//! extend or shrink it, or supply their own.

use std::collections::HashSet;
use stop_words::{get, LANGUAGE};

/// Case-insensitive set of words that carry no salience
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Stop words, stored lowercase
    stopwords: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// NLTK English stop words (179 entries)
    pub fn english() -> Self {
        Self::load(LANGUAGE::English)
    }

    /// Stop words for a language code or name.
    ///
    /// Returns `None` for languages without a bundled list.
    pub fn for_language(language: &str) -> Option<Self> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            _ => return None,
        };
        Some(Self::load(lang))
    }

    /// Filter that treats every word as content
    pub fn empty() -> Self {
        Self {
            stopwords: HashSet::new(),
        }
    }

    /// Filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        // Tokens reaching here from the summarizer are already lowercase.
        word.chars().any(char::is_uppercase) && self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load(language: LANGUAGE) -> Self {
        Self {
            stopwords: get(language).into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }
}
