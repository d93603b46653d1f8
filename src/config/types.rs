//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::NotesResult;
use crate::pipeline::RenderOptions;

use super::loader::{self, ConfigWarning};

/// Watch loop configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Create an empty input file when it does not exist
    #[serde(default = "default_true")]
    pub create_missing: bool,

    /// Force the polling backend instead of native notifications
    #[serde(default)]
    pub poll: bool,

    /// Idle tick of the watch loop, also the polling interval
    #[serde(default = "default_idle_ms")]
    pub idle_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            create_missing: true,
            poll: false,
            idle_ms: default_idle_ms(),
        }
    }
}

impl WatchConfig {
    pub fn idle_interval(&self) -> Duration {
        Duration::from_millis(self.idle_ms.max(1))
    }
}

/// Convert server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_true() -> bool {
    true
}

fn default_idle_ms() -> u64 {
    1000
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderOptions,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub serve: ServeConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> NotesResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> NotesResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the configuration for a document: explicit file, sidecar
    /// `betternotes.toml`, user config, then defaults. Env overrides last.
    pub fn discover(
        input: &Path,
        explicit: Option<&Path>,
    ) -> NotesResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(input, explicit)
    }

    /// Apply environment variable overrides (BETTERNOTES_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
