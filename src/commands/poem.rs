// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Poem command - inserts bridge words into input text

use crate::poet::{Bridge, BridgeMetric};
use crate::words::split_words;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

#[derive(Serialize)]
struct PoemReport<'a> {
    input: &'a str,
    poem: String,
    metric: BridgeMetric,
    bridges: &'a [Bridge],
}

/// Run the poem command
///
/// Input comes from `text` joined with spaces, or stdin when `text` is empty.
pub fn run(corpus: &Path, metric: BridgeMetric, text: &[String], json: bool) -> Result<()> {
    let poet = super::load_poet(corpus)
        .with_context(|| format!("Failed to load corpus {}", corpus.display()))?
        .with_metric(metric);

    let input = if text.is_empty() {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read input from stdin")?;
        buf
    } else {
        text.join(" ")
    };

    let poem = poet.compose(&split_words(&input));
    info!(
        "Inserted {} bridge(s) using {} metric",
        poem.bridges.len(),
        poet.metric()
    );

    let content = if json {
        let report = PoemReport {
            input: input.trim(),
            poem: poem.to_string(),
            metric: poet.metric(),
            bridges: &poem.bridges,
        };
        serde_json::to_string_pretty(&report).context("Failed to serialize poem")?
    } else {
        poem.to_string()
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.write_all(b"\n")?;

    Ok(())
}
