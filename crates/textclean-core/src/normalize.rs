//! Text normalization.
//!
//! [`process`] turns messy input into cleaned text in five ordered steps:
//!
//! 1. trim leading and trailing whitespace
//! 2. delete every character outside printable ASCII (`0x20..=0x7E`)
//! 3. collapse whitespace runs into a single space
//! 4. lowercase
//! 5. uppercase the first character of each sentence
//!
//! Order matters. Newlines and tabs are deleted in step 2, not turned into
//! spaces, so `"one\ntwo"` becomes `"Onetwo"`. Trimming happens before the
//! ASCII filter, so a leading non-ASCII character followed by a space leaves
//! a leading space behind.

use regex::Regex;
use std::sync::LazyLock;

use crate::text;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize raw text. Total over all inputs; `""` maps to `""`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn process(text: &str) -> String {
    let trimmed = text.trim();
    let ascii = strip_non_printable(trimmed);
    let collapsed = WHITESPACE_RUN.replace_all(&ascii, " ");
    let lowered = collapsed.to_ascii_lowercase();
    let cleaned = capitalize_sentences(&lowered);

    tracing::debug!(
        input_len = text.len(),
        output_len = cleaned.len(),
        "text normalized"
    );
    cleaned
}

fn strip_non_printable(text: &str) -> String {
    text.chars().filter(|c| matches!(c, ' '..='~')).collect()
}

fn capitalize_sentences(text: &str) -> String {
    text::split_sentences(text)
        .into_iter()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(sentence.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars);
            out
        }
        None => String::new(),
    }
}
