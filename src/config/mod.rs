//! Configuration module for BetterNotes
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BETTERNOTES_*)
//! 3. `--config <PATH>`, or `betternotes.toml` next to the document
//! 4. User config (<config dir>/betternotes/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, SIDECAR_FILE};
pub use types::{Config, ServeConfig, WatchConfig};
