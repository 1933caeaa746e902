// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use affinity_poet::prelude::*;
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    corpus: &'a str,
    text: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let poet = AffinityPoet::from_corpus(input.corpus);
    let words = split_words(input.text);
    let output = poet.generate(&words);

    assert!(output.len() >= words.len());
    assert!(output.len() < words.len() * 2 || words.is_empty());
});
