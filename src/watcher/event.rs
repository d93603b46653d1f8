//! Watch event types and options

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::pipeline::RenderOptions;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Markdown document to watch
    pub input: PathBuf,
    /// HTML file replaced on every render
    pub output: PathBuf,
    /// Pipeline options
    pub render: RenderOptions,
    /// Use the polling backend even if native notifications work
    pub poll: bool,
    /// Idle tick of the loop and polling interval
    pub idle: Duration,
}

/// Which notification backend is delivering events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Native,
    Polling,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Native => "native",
            Backend::Polling => "polling",
        }
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    WatchStarted {
        input: String,
        output: String,
        backend: String,
    },
    FileChanged {
        path: String,
    },
    RenderStarted,
    RenderComplete {
        output: String,
        title: String,
        bytes: usize,
        elapsed_ms: u64,
    },
    Error {
        message: String,
    },
    Shutdown,
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Why the loop is invoking the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Trigger {
    Startup,
    Modified(PathBuf),
}

/// The watched document, as given and as resolved on disk.
#[derive(Debug, Clone)]
pub(crate) struct WatchTarget {
    given: PathBuf,
    canonical: PathBuf,
}

impl WatchTarget {
    pub(crate) fn new(given: &Path) -> std::io::Result<Self> {
        Ok(Self {
            given: given.to_path_buf(),
            canonical: given.canonicalize()?,
        })
    }

    /// Directory handed to the notification backend
    pub(crate) fn directory(&self) -> &Path {
        self.canonical.parent().unwrap_or(&self.canonical)
    }

    pub(crate) fn canonical(&self) -> &Path {
        &self.canonical
    }

    /// Whether an event path refers to the watched document.
    pub(crate) fn matches(&self, path: &Path) -> bool {
        if path == self.canonical || path.ends_with(&self.given) {
            return true;
        }
        path.canonicalize()
            .map(|p| p == self.canonical)
            .unwrap_or(false)
    }
}
