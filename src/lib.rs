// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Affinity poet library - bridge-word poetry from a word-affinity graph
//!
//! A corpus is turned into a weighted directed graph of word adjacencies.
//! Poems are generated by splicing, between each pair of adjacent input
//! words, the word that best links them through that graph.
//!
//! ```
//! use affinity_poet::prelude::*;
//!
//! let poet = AffinityPoet::from_corpus("This is a test of the Mugar Omni Theater sound system.");
//! assert_eq!(poet.poem("Test the system."), "Test of the system.");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod graph;
pub mod poet;
pub mod words;

/// Prelude for common imports
pub mod prelude {
    pub use crate::error::{PoetError, Result};
    pub use crate::graph::WeightedDigraph;
    pub use crate::poet::{AffinityPoet, BridgeMetric, CorpusBuilder, Poem};
    pub use crate::words::{corpus_words, join_words, normalize, split_words};
}
