// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types
//!
//! Graph and poet operations cannot fail; these errors come from the edges
//! of the crate (reading corpora, configuration, parsing options, export).

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised outside the infallible graph and poet core
#[derive(Debug, Error)]
pub enum PoetError {
    /// The corpus file could not be read
    #[error("failed to read corpus {}", .path.display())]
    CorpusRead {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A bridge metric name was not recognised
    #[error("unknown bridge metric: {0} (expected sum, product or min)")]
    UnknownMetric(String),

    /// An export format name was not recognised
    #[error("unknown export format: {0} (expected dot or json)")]
    UnknownFormat(String),

    /// Configuration could not be loaded
    #[error("invalid configuration")]
    Config(#[from] ::config::ConfigError),

    /// Graph or poem serialization failed
    #[error("failed to serialize output")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias for fallible crate operations
pub type Result<T> = std::result::Result<T, PoetError>;
