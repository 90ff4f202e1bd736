//! Top-N selection and reconstruction in document order

use std::collections::HashSet;

use super::scoring::{ScoredText, SentenceScores};
use crate::text::Sentence;

/// Pick the `limit` highest scoring sentence texts.
///
/// The ranking is a stable sort over entries kept in first-occurrence
/// order, so among equal scores the text that appears earliest wins.
pub fn select_top<'a>(scores: &SentenceScores<'a>, limit: usize) -> Vec<ScoredText<'a>> {
    let mut ranked = scores.entries().to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

/// Keep the sentences whose text was selected, in their original order.
///
/// Every occurrence of a selected text is kept.
pub fn reconstruct<'a>(sentences: &[Sentence<'a>], selected: &[ScoredText<'a>]) -> Vec<Sentence<'a>> {
    let chosen: HashSet<&str> = selected.iter().map(|s| s.text).collect();
    sentences
        .iter()
        .filter(|sentence| chosen.contains(sentence.text))
        .copied()
        .collect()
}
