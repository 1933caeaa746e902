// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod export;
pub mod poem;

use crate::error::{PoetError, Result};
use crate::poet::AffinityPoet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Read a corpus file and build a poet from it
pub fn load_poet(corpus: &Path) -> Result<AffinityPoet> {
    info!("Reading corpus {}", corpus.display());
    let text = fs::read_to_string(corpus).map_err(|source| PoetError::CorpusRead {
        path: corpus.to_path_buf(),
        source,
    })?;
    Ok(AffinityPoet::from_corpus(&text))
}
