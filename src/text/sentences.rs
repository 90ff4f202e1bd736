//! Sentence boundary detection
//!
//! A rule-based English segmenter. It works on the normalized document and
//! returns sentences as borrowed slices with their byte offsets, so callers
//! can keep document order and tell repeated sentences apart by position.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Abbreviations that are followed by a name rather than a new sentence
const TITLE_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "messrs", "dr", "prof", "sr", "jr", "st", "mt", "vs", "lt", "sgt", "capt",
    "supt",
];

/// Abbreviations that only continue the sentence when a number follows.
/// Otherwise they are ordinary words (`no.`, `sec.`).
const NUMBER_ABBREVIATIONS: &[&str] = &[
    "no", "nos", "vol", "vols", "pp", "ch", "sec", "ft", "fig", "figs",
];

/// A sentence inside a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sentence<'a> {
    /// Sentence text, trimmed of surrounding whitespace
    pub text: &'a str,
    /// Byte offset of the first character in the document
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Position in the document's sentence sequence
    pub index: usize,
}

/// Trait for sentence boundary detection
pub trait SentenceSegmenter: Send + Sync + fmt::Debug {
    /// Split text into sentences in document order
    fn segment<'a>(&self, text: &'a str) -> Vec<Sentence<'a>>;
}

/// English sentence segmenter.
///
/// A boundary is a run of `.`, `!`, `?` or `…`, plus any closing quotes or
/// brackets, followed by whitespace or the end of the text. `!` and `?`
/// always end a sentence. A period does not when the next word starts
/// lowercase, or when it closes a title abbreviation, a single-letter
/// initial or a dotted abbreviation such as `U.S.`. `No.`, `Vol.` and the
/// like only hold the sentence open when a number follows.
#[derive(Debug, Clone)]
pub struct EnglishSegmenter {
    abbreviations: HashSet<String>,
}

impl Default for EnglishSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishSegmenter {
    pub fn new() -> Self {
        Self {
            abbreviations: TITLE_ABBREVIATIONS.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Add abbreviations (without the trailing period) that never end a
    /// sentence
    pub fn with_abbreviations<S: AsRef<str>>(mut self, abbreviations: &[S]) -> Self {
        for abbreviation in abbreviations {
            let abbreviation = abbreviation.as_ref().trim_end_matches('.').to_lowercase();
            self.abbreviations.insert(abbreviation);
        }
        self
    }

    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(&word.to_lowercase())
    }

    fn period_ends_sentence(&self, text: &str, run_start: usize, single_period: bool, end: usize) -> bool {
        if next_word_is_lowercase(&text[end..]) {
            return false;
        }
        if !single_period {
            return true;
        }

        let word = preceding_word(&text[..run_start]);
        if is_initial(word) || word.contains('.') || self.is_abbreviation(word) {
            return false;
        }
        !(is_number_abbreviation(word) && next_word_is_number(&text[end..]))
    }
}

impl SentenceSegmenter for EnglishSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<Sentence<'a>> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (run_start, first) = chars[i];
            if !is_terminator(first) {
                i += 1;
                continue;
            }

            let mut j = i;
            let mut strong = false;
            while j < chars.len() && is_terminator(chars[j].1) {
                strong |= matches!(chars[j].1, '!' | '?');
                j += 1;
            }
            let single_period = first == '.' && j - i == 1;
            while j < chars.len() && is_closer(chars[j].1) {
                j += 1;
            }

            let end = chars.get(j).map_or(text.len(), |&(pos, _)| pos);
            let at_gap = chars.get(j).map_or(true, |&(_, c)| c.is_whitespace());

            if at_gap && (strong || self.period_ends_sentence(text, run_start, single_period, end)) {
                push_sentence(&mut sentences, text, start, end);
                start = end;
            }
            i = j;
        }

        push_sentence(&mut sentences, text, start, text.len());
        sentences
    }
}

fn push_sentence<'a>(sentences: &mut Vec<Sentence<'a>>, text: &'a str, start: usize, end: usize) {
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }

    let start = start + (slice.len() - slice.trim_start().len());
    sentences.push(Sentence {
        text: trimmed,
        start,
        end: start + trimmed.len(),
        index: sentences.len(),
    });
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '»')
}

fn is_opener(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '[' | '{' | '“' | '‘' | '«')
}

/// The word right before a terminator, without leading punctuation
fn preceding_word(text: &str) -> &str {
    text.rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric())
}

fn next_word_is_lowercase(rest: &str) -> bool {
    rest.trim_start()
        .trim_start_matches(is_opener)
        .chars()
        .next()
        .is_some_and(char::is_lowercase)
}

fn next_word_is_number(rest: &str) -> bool {
    rest.trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
}

fn is_number_abbreviation(word: &str) -> bool {
    NUMBER_ABBREVIATIONS.contains(&word.to_lowercase().as_str())
}

fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}
