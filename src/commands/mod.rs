//! Subcommand implementations

pub mod embed;
pub mod render;
pub mod serve;
pub mod watch;

use std::path::{Path, PathBuf};

use anyhow::Result;
use betternotes::Config;

/// Resolve the configuration for `input` and log any unknown keys.
pub(crate) fn load_config(input: &Path, explicit: Option<&Path>) -> Result<Config> {
    let (config, warnings) = Config::discover(input, explicit)?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    Ok(config)
}

/// Explicit output, or the input with an `.html` extension.
pub(crate) fn resolve_output(input: &Path, output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| betternotes::fs::default_output_path(input))
}
