// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Word tokenization and normalization
//!
//! Corpus text is split into runs of word characters (alphanumerics,
//! apostrophes and underscores) and lowercased, so `"hello,world"` yields
//! `hello` and `world`. Poem input stays whitespace-delimited to keep every
//! token intact in the output; its lookup key is the lowercase token with
//! leading and trailing punctuation trimmed, so `"System."` keys as `system`.

/// Split text into whitespace-delimited tokens, keeping their original form
#[must_use]
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Normalize a token into a graph key.
///
/// Returns an empty string for tokens made only of punctuation.
#[must_use]
pub fn normalize(token: &str) -> String {
    token.trim_matches(|c: char| !is_word_char(c)).to_lowercase()
}

/// Tokenize corpus text into lowercase runs of word characters
#[must_use]
pub fn corpus_words(text: &str) -> Vec<String> {
    text.split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Join words with single spaces
#[must_use]
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(word.as_ref());
    }
    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '_'
}
