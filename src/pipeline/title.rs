//! Title extraction
//!
//! The first `# heading` line outside a code block becomes
//! `<h1 id="-Title">…</h1>` and its text becomes the document title.

use std::ops::Range;

use once_cell::sync::Lazy;
use pulldown_cmark::{Event, Parser, Tag};
use regex::Regex;

/// Title used when a document has no top-level heading
pub const DEFAULT_TITLE: &str = "Untitled";

static TITLE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#[ \t]+(\S.*?)[ \t\r]*$").unwrap());

/// Rewrite the first top-level heading and return `(rewritten, title)`.
///
/// The rewritten heading is followed by an empty line so the raw HTML block
/// ends before the next line of Markdown. Lines inside code blocks are never
/// headings.
pub fn extract_title(source: &str, default_title: &str) -> (String, String) {
    let code = code_block_ranges(source);
    let heading = TITLE_LINE.captures_iter(source).find_map(|caps| {
        let line = caps.get(0)?;
        let in_code = code.iter().any(|r| r.contains(&line.start()));
        (!in_code).then(|| (line.range(), caps[1].to_string()))
    });

    match heading {
        Some((line, title)) => {
            let rewritten = format!(
                "{}<h1 id=\"-Title\">{title}</h1>\n{}",
                &source[..line.start],
                &source[line.end..]
            );
            (rewritten, title)
        }
        None => (source.to_string(), default_title.to_string()),
    }
}

/// Byte ranges of fenced and indented code blocks in `source`.
fn code_block_ranges(source: &str) -> Vec<Range<usize>> {
    Parser::new(source)
        .into_offset_iter()
        .filter_map(|(event, range)| match event {
            Event::Start(Tag::CodeBlock(_)) => Some(range),
            _ => None,
        })
        .collect()
}
