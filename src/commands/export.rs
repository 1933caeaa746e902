// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Export command - exports the affinity graph to various formats

use crate::error::PoetError;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Graphviz DOT format
    Dot,
    /// JSON format
    Json,
}

impl FromStr for ExportFormat {
    type Err = PoetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Ok(Self::Dot),
            "json" => Ok(Self::Json),
            other => Err(PoetError::UnknownFormat(other.to_string())),
        }
    }
}

impl ExportFormat {
    /// Get file extension for format
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Json => "json",
        }
    }
}

/// Run the export command
pub fn run(corpus: &Path, format: ExportFormat, output: Option<PathBuf>) -> Result<()> {
    info!("Exporting to {}", format.extension());

    let poet = super::load_poet(corpus)
        .with_context(|| format!("Failed to load corpus {}", corpus.display()))?;
    let graph = poet.graph();

    if graph.is_empty() {
        eprintln!("Warning: Graph is empty. Is the corpus at least two words long?");
    }

    let content = match format {
        ExportFormat::Dot => graph.to_dot(),
        ExportFormat::Json => graph.to_json()?,
    };

    match output {
        Some(path) => {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
