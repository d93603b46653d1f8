//! BetterNotes - live Markdown note renderer
//!
//! BetterNotes watches a single Markdown document and regenerates a styled
//! HTML page on every save: numbered sections, MathJax delimiters, TikZ
//! diagrams and plots, and definition/theorem/proof callouts on top of
//! CommonMark. The same rendering is available once over stdin and as an
//! HTTP convert service.

pub mod config;
pub mod error;
pub mod fs;
pub mod pipeline;
pub mod render;
pub mod server;
pub mod watcher;

// Re-exports for convenience
pub use config::Config;
pub use error::{NotesError, NotesResult};
pub use pipeline::{convert, render_document, RenderOptions, RenderedDocument};
pub use render::{render_file, HtmlPayload, RenderReport};
pub use watcher::{watch, WatchEvent, WatchOptions};
