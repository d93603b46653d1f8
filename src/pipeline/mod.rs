//! Note rendering pipeline
//!
//! Turns raw Markdown notes into a complete HTML document:
//!
//! 1. title extraction ([`title`])
//! 2. heading relabeling ([`headings`])
//! 3. CommonMark rendering ([`markdown`])
//! 4. ordered post-processing passes ([`passes`])
//! 5. document shell assembly ([`template`])
//!
//! Every stage is a pure string transformation. Input that a stage does not
//! recognize passes through unchanged; nothing here returns an error.

pub mod headings;
pub mod markdown;
pub mod passes;
pub mod template;
pub mod title;

use serde::{Deserialize, Serialize};

pub use headings::relabel_headings;
pub use markdown::{render_markdown, slugify, RendererOptions};
pub use passes::{post_process, Pass};
pub use template::assemble;
pub use title::{extract_title, DEFAULT_TITLE};

/// Knobs for one pipeline run. Also the `[render]` config section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Title used when the document has no top-level heading
    pub default_title: String,
    /// Value of the `width` attribute added to images
    pub image_width: String,
    /// `scale` option of generated tikzpicture environments
    pub tikz_scale: f64,
    /// Sample count of generated plots
    pub plot_samples: u32,
    /// Convert fenced `plot` blocks into diagrams
    pub plots: bool,
    /// Leave underscores alone instead of treating them as emphasis
    pub code_friendly: bool,
    /// Give headings slug ids (section anchors and the TOC depend on them)
    pub header_ids: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_string(),
            image_width: "100%".to_string(),
            tikz_scale: 2.0,
            plot_samples: 70,
            plots: true,
            code_friendly: true,
            header_ids: true,
        }
    }
}

impl RenderOptions {
    pub fn renderer_options(&self) -> RendererOptions {
        RendererOptions {
            header_ids: self.header_ids,
            code_friendly: self.code_friendly,
        }
    }
}

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub title: String,
    pub html: String,
}

/// Render `source` with default options and return the HTML document.
pub fn convert(source: &str) -> String {
    render_document(source, &RenderOptions::default()).html
}

/// Run the full pipeline on `source`.
pub fn render_document(source: &str, options: &RenderOptions) -> RenderedDocument {
    let (titled, title) = extract_title(source, &options.default_title);
    let labeled = relabel_headings(&titled);
    let fragment = render_markdown(&labeled, &options.renderer_options());
    let body = post_process(&fragment, options);
    let html = assemble(&title, &body);

    tracing::debug!(
        title = %title,
        source_bytes = source.len(),
        html_bytes = html.len(),
        "rendered document"
    );

    RenderedDocument { title, html }
}
