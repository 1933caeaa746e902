// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Word-affinity poetry
//!
//! A corpus is ingested into a [`WeightedDigraph`] whose edge `w1 -> w2`
//! counts how often `w1` is immediately followed by `w2`. Once frozen into an
//! [`AffinityPoet`], the graph is only queried: between every adjacent pair
//! of input words the poet inserts the bridge word `b` of the best two-edge
//! path `w1 -> b -> w2`, if any exists.
//!
//! Bridges are ranked by [`BridgeMetric`] score, highest first; equal scores
//! go to the lexicographically smallest word.

use crate::error::PoetError;
use crate::graph::WeightedDigraph;
use crate::words::{corpus_words, join_words, normalize, split_words};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// How the two edge weights of a bridge path combine into a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgeMetric {
    /// `w1 + w2`
    #[default]
    Sum,
    /// `w1 * w2`
    Product,
    /// `min(w1, w2)`, the bottleneck of the path
    Min,
}

impl BridgeMetric {
    /// Score a path whose edges into and out of the bridge weigh `into` and `out_of`
    #[must_use]
    pub fn score(self, into: u32, out_of: u32) -> u64 {
        let (into, out_of) = (u64::from(into), u64::from(out_of));
        match self {
            Self::Sum => into + out_of,
            Self::Product => into * out_of,
            Self::Min => into.min(out_of),
        }
    }

    /// Name used in configuration and on the command line
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Product => "product",
            Self::Min => "min",
        }
    }
}

impl fmt::Display for BridgeMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BridgeMetric {
    type Err = PoetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Self::Sum),
            "product" | "mul" => Ok(Self::Product),
            "min" | "bottleneck" => Ok(Self::Min),
            other => Err(PoetError::UnknownMetric(other.to_string())),
        }
    }
}

/// Build phase: accumulates adjacency counts from corpus words
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    graph: WeightedDigraph<String>,
    pairs: usize,
}

impl CorpusBuilder {
    /// Create a builder with an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one stream of words, adding 1 to the edge weight of every
    /// adjacent pair. Returns the number of pairs counted.
    ///
    /// Words are normalized first; words that normalize to nothing are
    /// skipped. Pairs never span two separate `ingest` calls.
    pub fn ingest<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut previous: Option<String> = None;
        let mut counted = 0;

        for word in words {
            let word = normalize(word.as_ref());
            if word.is_empty() {
                continue;
            }
            if let Some(prev) = previous.take() {
                let weight = self.graph.weight(&prev, &word);
                self.graph.set(prev, word.clone(), weight.saturating_add(1));
                counted += 1;
            }
            previous = Some(word);
        }

        self.pairs += counted;
        debug!(pairs = counted, "ingested word stream");
        counted
    }

    /// Total number of adjacent pairs counted so far
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.pairs
    }

    /// Finish the build phase. The graph can no longer be mutated.
    #[must_use]
    pub fn freeze(self) -> AffinityPoet {
        info!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            pairs = self.pairs,
            "affinity graph built"
        );
        AffinityPoet {
            graph: self.graph,
            metric: BridgeMetric::default(),
        }
    }
}

/// Build an affinity graph from a sequence of words
#[must_use]
pub fn build_graph<I, S>(words: I) -> WeightedDigraph<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = CorpusBuilder::new();
    builder.ingest(words);
    builder.graph
}

/// A bridge word inserted into a poem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bridge {
    /// Index of the input word the bridge follows
    pub after: usize,
    /// The bridge word, lower case
    pub word: String,
    /// Score of the winning path
    pub score: u64,
}

/// Output of [`AffinityPoet::compose`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Poem {
    /// Input words interleaved with bridges
    pub words: Vec<String>,
    /// The bridges that were inserted, in order
    pub bridges: Vec<Bridge>,
}

impl fmt::Display for Poem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_words(&self.words))
    }
}

/// Generation phase: a frozen affinity graph that inserts bridge words
#[derive(Debug, Clone)]
pub struct AffinityPoet {
    graph: WeightedDigraph<String>,
    metric: BridgeMetric,
}

impl AffinityPoet {
    /// Build a poet from corpus words
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = CorpusBuilder::new();
        builder.ingest(words);
        builder.freeze()
    }

    /// Build a poet from raw corpus text
    #[must_use]
    pub fn from_corpus(text: &str) -> Self {
        Self::from_words(corpus_words(text))
    }

    /// Use a different bridge metric
    #[must_use]
    pub fn with_metric(mut self, metric: BridgeMetric) -> Self {
        self.metric = metric;
        self
    }

    /// The bridge metric in use
    #[must_use]
    pub fn metric(&self) -> BridgeMetric {
        self.metric
    }

    /// Read-only view of the affinity graph
    #[must_use]
    pub fn graph(&self) -> &WeightedDigraph<String> {
        &self.graph
    }

    /// Best bridge word between `first` and `second`, if any
    #[must_use]
    pub fn bridge(&self, first: &str, second: &str) -> Option<String> {
        self.best_bridge(first, second).map(|(word, _)| word)
    }

    /// Insert bridges between adjacent input words
    #[must_use]
    pub fn generate<S: AsRef<str>>(&self, input: &[S]) -> Vec<String> {
        self.compose(input).words
    }

    /// Insert bridges and report where they went
    #[must_use]
    pub fn compose<S: AsRef<str>>(&self, input: &[S]) -> Poem {
        let mut words = Vec::with_capacity(input.len() * 2);
        let mut bridges = Vec::new();

        for (i, word) in input.iter().enumerate() {
            let word = word.as_ref();
            words.push(word.to_string());

            let Some(next) = input.get(i + 1) else {
                break;
            };
            if let Some((bridge, score)) = self.best_bridge(word, next.as_ref()) {
                debug!(after = word, bridge = %bridge, score, "inserting bridge");
                words.push(bridge.clone());
                bridges.push(Bridge {
                    after: i,
                    word: bridge,
                    score,
                });
            }
        }

        Poem { words, bridges }
    }

    /// Generate a poem from raw text, joining words with single spaces
    #[must_use]
    pub fn poem(&self, text: &str) -> String {
        self.compose(&split_words(text)).to_string()
    }

    fn best_bridge(&self, first: &str, second: &str) -> Option<(String, u64)> {
        let targets = self.graph.targets(&normalize(first));
        if targets.is_empty() {
            return None;
        }
        let sources = self.graph.sources(&normalize(second));

        targets
            .into_iter()
            .filter_map(|(word, into)| {
                let out_of = *sources.get(&word)?;
                Some((word, self.metric.score(into, out_of)))
            })
            .max_by(|(a, a_score), (b, b_score)| rank(a, *a_score, b, *b_score))
    }
}

/// Higher score wins; on a tie the smaller word ranks higher
fn rank(a: &str, a_score: u64, b: &str, b_score: u64) -> Ordering {
    a_score.cmp(&b_score).then_with(|| b.cmp(a))
}
