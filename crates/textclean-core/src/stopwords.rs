//! Stopword sets.
//!
//! The built-in list covers the common English function words excluded from
//! top-word ranking. It is built once on first use and never mutated; callers
//! that need more words build an extended copy with [`StopWords::with_extra`].

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words excluded from frequency ranking by default.
pub const BUILTIN_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "were", "will", "with",
];

static BUILTIN: LazyLock<StopWords> = LazyLock::new(|| StopWords::from_words(BUILTIN_STOP_WORDS));

/// An immutable set of lowercase stopwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl StopWords {
    /// The shared built-in set.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build a set from an arbitrary word list. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Copy this set and add `extra` words to the copy.
    pub fn with_extra<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = self.words.clone();
        words.extend(
            extra
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        Self { words }
    }

    /// Whether `word` is a stopword, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
