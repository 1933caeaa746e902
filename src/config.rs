// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Settings come from defaults, then an optional TOML file, then
//! `AFFINITY_POET_*` environment variables.

use crate::error::Result;
use crate::poet::BridgeMetric;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "AFFINITY_POET";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Metric used to rank bridge words
    pub metric: BridgeMetric,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metric: BridgeMetric::default(),
        }
    }
}

/// Default location of the configuration file, if the platform has one
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "hyperpolymath", "affinity-poet")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration.
///
/// An explicit `path` must exist; the default path is used only if present.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let mut builder = ::config::Config::builder();

    match path {
        Some(path) => {
            builder = builder.add_source(::config::File::from(path).required(true));
        }
        None => {
            if let Some(path) = default_path() {
                builder = builder.add_source(::config::File::from(path).required(false));
            }
        }
    }

    let settings = builder
        .add_source(::config::Environment::with_prefix(ENV_PREFIX))
        .build()?;

    Ok(settings.try_deserialize()?)
}
