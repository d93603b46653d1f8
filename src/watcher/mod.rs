//! File watcher for live re-rendering
//!
//! Implements the `watch` command with:
//! - An unconditional render at startup
//! - One full render per modification of the watched document (no debounce)
//! - Native notifications with a polling fallback
//! - Graceful Ctrl+C shutdown
//! - NDJSON output for tooling

mod event;
mod run;

pub use event::{Backend, WatchEvent, WatchOptions};
pub use run::watch;
