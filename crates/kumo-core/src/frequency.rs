use crate::model::{PosTag, WordFrequency};
use crate::segment::{Segmenter, Token};
use crate::stopwords::StopwordSet;
use indexmap::IndexMap;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy)]
pub struct FrequencyOptions {
    /// Result is truncated to this many words after ranking.
    pub max_words: usize,
    /// Tokens shorter than this (in chars, post-normalization) are dropped.
    pub min_token_length: usize,
}

impl Default for FrequencyOptions {
    fn default() -> Self {
        Self {
            max_words: 120,
            min_token_length: 2,
        }
    }
}

/// NFKC normalization followed by lowercasing.
///
/// NFKC folds width variants (full-width ASCII, half-width kana) so stopword
/// matching and counting are width-insensitive.
pub fn normalize_token(token: &str) -> String {
    token.trim().nfkc().collect::<String>().to_lowercase()
}

fn is_all_digits(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|ch| ch.is_ascii_digit())
}

fn should_skip(token: &str, stopwords: &StopwordSet, min_token_length: usize) -> bool {
    token.is_empty()
        || token.chars().count() < min_token_length
        || stopwords.contains(token)
        || is_all_digits(token)
}

/// A tagged token survives only when its tag is in the content-word set;
/// untagged tokens come from the delimiter fallback and pass through.
fn passes_pos_filter(token: &Token) -> bool {
    match &token.pos {
        Some(pos) => pos.is_content_word(),
        None => true,
    }
}

struct CountEntry {
    value: u64,
    pos: Option<PosTag>,
}

/// Turns raw text into a ranked `(word, frequency)` list.
///
/// Tokens are segmented by `segmenter`, normalized (NFKC + lowercase), counted
/// by dictionary base form where available, ranked by descending frequency
/// (ties keep first-seen order) and truncated to `max_words`.
///
/// Whitespace-only input and `max_words == 0` both yield an empty list; this
/// function never fails.
pub fn compute_word_frequencies(
    text: &str,
    stopwords: &StopwordSet,
    segmenter: &dyn Segmenter,
    options: &FrequencyOptions,
) -> Vec<WordFrequency> {
    if text.trim().is_empty() || options.max_words == 0 {
        return Vec::new();
    }

    // IndexMap keeps first-seen order so the stable sort below resolves ties
    // by earliest occurrence.
    let mut counts: IndexMap<String, CountEntry> = IndexMap::new();
    for token in segmenter.segment(text) {
        if !passes_pos_filter(&token) {
            continue;
        }
        let normalized = normalize_token(token.counting_form());
        if should_skip(&normalized, stopwords, options.min_token_length) {
            continue;
        }
        let entry = counts.entry(normalized).or_insert(CountEntry {
            value: 0,
            pos: token.pos.clone(),
        });
        entry.value += 1;
        if entry.pos.is_none() {
            entry.pos = token.pos;
        }
    }

    let mut ranked: Vec<WordFrequency> = counts
        .into_iter()
        .map(|(text, entry)| WordFrequency {
            text,
            value: entry.value,
            pos: entry.pos,
        })
        .collect();
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked.truncate(options.max_words);

    tracing::debug!(words = ranked.len(), "frequency extraction complete");
    ranked
}
