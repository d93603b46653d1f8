//! One file-to-file pipeline run

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::NotesResult;
use crate::fs::atomic_write;
use crate::pipeline::{render_document, RenderOptions};

/// `{"html_content": ...}`, the reply of embed mode and `POST /convert`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlPayload {
    pub html_content: String,
}

impl HtmlPayload {
    pub fn render(source: &str, options: &RenderOptions) -> Self {
        Self {
            html_content: render_document(source, options).html,
        }
    }

    pub fn to_json(&self) -> NotesResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Summary of a completed render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub title: String,
    pub bytes: usize,
    pub elapsed: Duration,
}

/// Read `input`, run the pipeline and replace `output` with the result.
pub fn render_file(input: &Path, output: &Path, options: &RenderOptions) -> NotesResult<RenderReport> {
    let started = Instant::now();

    let source = fs::read_to_string(input)?;
    let doc = render_document(&source, options);
    atomic_write(output, doc.html.as_bytes())?;

    let report = RenderReport {
        title: doc.title,
        bytes: doc.html.len(),
        elapsed: started.elapsed(),
    };
    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        bytes = report.bytes,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "wrote rendering"
    );
    Ok(report)
}
