// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Benchmarks for corpus ingestion and poem generation

use affinity_poet::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic_corpus(words: usize) -> Vec<String> {
    (0..words).map(|i| format!("w{}", (i * 7919) % 500)).collect()
}

fn bench_build(c: &mut Criterion) {
    let corpus = synthetic_corpus(20_000);
    c.bench_function("build_20k_words", |b| {
        b.iter(|| AffinityPoet::from_words(black_box(&corpus)));
    });
}

fn bench_generate(c: &mut Criterion) {
    let poet = AffinityPoet::from_words(synthetic_corpus(20_000));
    let input: Vec<String> = synthetic_corpus(200).into_iter().step_by(2).collect();
    c.bench_function("generate_100_words", |b| {
        b.iter(|| poet.generate(black_box(&input)));
    });
}

criterion_group!(benches, bench_build, bench_generate);
criterion_main!(benches);
