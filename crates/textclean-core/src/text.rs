//! Text processing primitives.
//!
//! Provides the sentence splitter and word extractor shared by the
//! normalizer and the statistics analyzer, so both agree on what a
//! sentence and a word are.

use regex::Regex;
use std::sync::LazyLock;

/// Sentence terminator followed by a whitespace run.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("valid regex"));

/// Runs of anything that is not an ASCII letter, digit, or underscore.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("valid regex"));

/// Split text into sentences.
///
/// A boundary is a `.`, `!` or `?` followed by one or more whitespace
/// characters. The terminator stays attached to the sentence before it and
/// the whitespace run is dropped.
///
/// Every segment is returned, including empty ones: `""` yields `[""]` and
/// a trailing boundary yields a trailing `""`. Callers decide whether empty
/// segments matter.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // Terminators are single-byte ASCII.
        let end = boundary.start() + 1;
        sentences.push(&text[start..end]);
        start = boundary.end();
    }

    sentences.push(&text[start..]);
    sentences
}

/// Extract words: maximal runs of ASCII letters, digits, and underscores.
///
/// Case is preserved; empty tokens are never returned.
pub fn extract_words(text: &str) -> Vec<&str> {
    NON_WORD.split(text).filter(|w| !w.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_sentences() {
        let sentences = split_sentences("This is a sentence. This is another sentence.");
        assert_eq!(
            sentences,
            vec!["This is a sentence.", "This is another sentence."]
        );
    }

    #[test]
    fn question_and_exclamation() {
        let sentences = split_sentences("Are you serious? I can't believe it! This is amazing.");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "Are you serious?");
        assert_eq!(sentences[1], "I can't believe it!");
    }

    #[test]
    fn whitespace_run_is_consumed() {
        let sentences = split_sentences("one.   two!\t\nthree");
        assert_eq!(sentences, vec!["one.", "two!", "three"]);
    }

    #[test]
    fn terminator_without_whitespace_does_not_split() {
        assert_eq!(split_sentences("3.14 is pi.e"), vec!["3.14 is pi.e"]);
        assert_eq!(split_sentences("wait...what"), vec!["wait...what"]);
    }

    #[test]
    fn repeated_terminators_stay_together() {
        assert_eq!(split_sentences("what?! no. ok"), vec!["what?!", "no.", "ok"]);
    }

    #[test]
    fn empty_input_yields_single_empty_segment() {
        assert_eq!(split_sentences(""), vec![""]);
    }

    #[test]
    fn trailing_boundary_yields_empty_segment() {
        assert_eq!(split_sentences("done. "), vec!["done.", ""]);
    }

    #[test]
    fn extract_words_basic() {
        let words = extract_words("Hello, world! This is a test.");
        assert_eq!(words, vec!["Hello", "world", "This", "is", "a", "test"]);
    }

    #[test]
    fn extract_words_keeps_digits_and_underscores() {
        assert_eq!(
            extract_words("snake_case x1 42-7"),
            vec!["snake_case", "x1", "42", "7"]
        );
    }

    #[test]
    fn extract_words_splits_on_apostrophes_and_non_ascii() {
        assert_eq!(extract_words("can't wörld"), vec!["can", "t", "w", "rld"]);
    }

    #[test]
    fn extract_words_without_word_characters() {
        assert!(extract_words("").is_empty());
        assert!(extract_words("... !? --").is_empty());
    }
}
