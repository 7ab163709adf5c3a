//! Descriptive statistics over cleaned text.
//!
//! Counts words and sentences and ranks the most frequent non-stopwords.
//! Input is expected to come from [`crate::normalize::process`], but any
//! string is accepted.
//!
//! Ranking is deterministic: words are grouped by lowercase form in the
//! order they first appear, then stably sorted by count, so equal counts
//! keep first-occurrence order. The list is cut strictly at the limit; a
//! word tied with the last entry is dropped.

use std::borrow::Cow;
use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::stopwords::StopWords;
use crate::text;

/// Default number of entries in [`TextStats::top_words`].
pub const DEFAULT_TOP_WORDS: usize = 5;

/// A ranked word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordCount {
    /// Lowercase word.
    pub word: String,
    /// Occurrences in the text (always positive).
    pub count: usize,
}

/// Statistics for one piece of cleaned text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextStats {
    /// Number of words (maximal runs of ASCII letters, digits, underscores).
    pub word_count: usize,
    /// Number of non-empty sentences.
    pub sentence_count: usize,
    /// Most frequent non-stopwords, highest count first.
    pub top_words: Vec<WordCount>,
}

/// Computes [`TextStats`] against a stopword set.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    stop_words: &'a StopWords,
    top_words: usize,
}

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer<'static> {
    /// Analyzer using the built-in stopwords and the default top-word limit.
    pub fn new() -> Self {
        Self {
            stop_words: StopWords::builtin(),
            top_words: DEFAULT_TOP_WORDS,
        }
    }
}

impl<'a> Analyzer<'a> {
    /// Use a different stopword set.
    pub const fn with_stop_words<'b>(self, stop_words: &'b StopWords) -> Analyzer<'b> {
        Analyzer {
            stop_words,
            top_words: self.top_words,
        }
    }

    /// Change how many ranked words are kept.
    pub const fn with_top_words(mut self, limit: usize) -> Self {
        self.top_words = limit;
        self
    }

    /// Compute statistics for `clean_text`. Never fails.
    #[tracing::instrument(skip_all, fields(text_len = clean_text.len()))]
    pub fn analyze(&self, clean_text: &str) -> TextStats {
        let words = text::extract_words(clean_text);
        let sentence_count = text::split_sentences(clean_text)
            .into_iter()
            .filter(|s| !s.is_empty())
            .count();
        let top_words = self.rank_words(&words);

        tracing::debug!(
            words = words.len(),
            sentences = sentence_count,
            ranked = top_words.len(),
            "text analyzed"
        );

        TextStats {
            word_count: words.len(),
            sentence_count,
            top_words,
        }
    }

    fn rank_words<'w>(&self, words: &[&'w str]) -> Vec<WordCount> {
        // Keys borrow from the text unless a word needs lowercasing.
        let mut slots: HashMap<Cow<'w, str>, usize> = HashMap::new();
        let mut groups: Vec<WordCount> = Vec::new();

        for &word in words {
            let key = if word.bytes().any(|b| b.is_ascii_uppercase()) {
                Cow::Owned(word.to_ascii_lowercase())
            } else {
                Cow::Borrowed(word)
            };
            if self.stop_words.contains(&key) {
                continue;
            }
            if let Some(&slot) = slots.get(&*key) {
                groups[slot].count += 1;
            } else {
                groups.push(WordCount {
                    word: key.to_string(),
                    count: 1,
                });
                slots.insert(key, groups.len() - 1);
            }
        }

        // Stable: equal counts stay in first-occurrence order.
        groups.sort_by(|a, b| b.count.cmp(&a.count));
        groups.truncate(self.top_words);
        groups
    }
}

/// Compute statistics with the built-in stopwords and a top-5 limit.
pub fn analyze(clean_text: &str) -> TextStats {
    Analyzer::new().analyze(clean_text)
}
