//! CommonMark rendering
//!
//! Thin layer over `pulldown-cmark` that adds the two behaviours notes rely
//! on: automatic heading ids and code-friendly underscores.

use std::collections::HashMap;

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Renderer feature flags.
///
/// Fenced code blocks and lists that follow a paragraph without a blank
/// line are part of CommonMark and always on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererOptions {
    /// Give every heading an `id` derived from its text
    pub header_ids: bool,
    /// Treat `_` and `__` delimiters as literal text
    pub code_friendly: bool,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            header_ids: true,
            code_friendly: true,
        }
    }
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS
}

/// Render Markdown to an HTML fragment.
pub fn render_markdown(text: &str, options: &RendererOptions) -> String {
    let parser = Parser::new_ext(text, parser_options());

    let mut events: Vec<Event<'_>> = Vec::new();
    let mut ids = HeadingIds::default();
    // index of the open heading's Start event, plus its text so far
    let mut open_heading: Option<(usize, String)> = None;
    // one entry per open emphasis/strong; Some(literal) when underscore-delimited
    let mut delimiters: Vec<Option<&'static str>> = Vec::new();

    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Start(tag @ (Tag::Emphasis | Tag::Strong)) if options.code_friendly => {
                let marker = if matches!(tag, Tag::Strong) { "__" } else { "_" };
                let literal = text[range].starts_with('_').then_some(marker);
                delimiters.push(literal);
                match literal {
                    Some(lit) => events.push(Event::Text(CowStr::Borrowed(lit))),
                    None => events.push(Event::Start(tag)),
                }
            }
            Event::End(end @ (TagEnd::Emphasis | TagEnd::Strong)) if options.code_friendly => {
                match delimiters.pop().flatten() {
                    Some(lit) => events.push(Event::Text(CowStr::Borrowed(lit))),
                    None => events.push(Event::End(end)),
                }
            }
            Event::Start(Tag::Heading { .. }) if options.header_ids => {
                open_heading = Some((events.len(), String::new()));
                events.push(event);
            }
            Event::End(TagEnd::Heading(_)) if options.header_ids => {
                if let Some((start, heading_text)) = open_heading.take() {
                    if let Event::Start(Tag::Heading { id, .. }) = &mut events[start] {
                        if id.is_none() {
                            *id = Some(CowStr::from(ids.assign(&heading_text)));
                        }
                    }
                }
                events.push(event);
            }
            Event::Text(ref t) | Event::Code(ref t) => {
                if let Some((_, heading_text)) = open_heading.as_mut() {
                    heading_text.push_str(t);
                }
                events.push(event);
            }
            _ => events.push(event),
        }
    }

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}

/// Slug generator that keeps ids unique within one document.
#[derive(Default)]
struct HeadingIds {
    seen: HashMap<String, usize>,
}

impl HeadingIds {
    fn assign(&mut self, text: &str) -> String {
        let mut slug = slugify(text);
        if slug.is_empty() {
            slug.push_str("section");
        }
        let count = self.seen.entry(slug.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            slug
        } else {
            format!("{}-{}", slug, count)
        }
    }
}

/// Lowercase ASCII word characters, with runs of whitespace and hyphens
/// collapsed to a single `-`. Everything else is dropped.
///
/// ```
/// use betternotes::pipeline::slugify;
///
/// assert_eq!(slugify("1 Vector Spaces"), "1-vector-spaces");
/// assert_eq!(slugify("Bayes' rule -- revisited"), "bayes-rule-revisited");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        render_markdown(text, &RendererOptions::default())
    }

    #[test]
    fn test_heading_gets_slug_id() {
        assert_eq!(render("# 1 Intro"), "<h1 id=\"1-intro\">1 Intro</h1>\n");
    }

    #[test]
    fn test_duplicate_heading_ids_are_suffixed() {
        let html = render("## Notes\n\n## Notes\n");
        assert!(html.contains(r#"<h2 id="notes">"#));
        assert!(html.contains(r#"<h2 id="notes-2">"#));
    }

    #[test]
    fn test_heading_ids_can_be_disabled() {
        let options = RendererOptions {
            header_ids: false,
            ..RendererOptions::default()
        };
        assert_eq!(render_markdown("# Plain", &options), "<h1>Plain</h1>\n");
    }

    #[test]
    fn test_heading_id_includes_inline_code() {
        let html = render("## Using `map`");
        assert!(html.contains(r#"<h2 id="using-map">"#), "{html}");
    }

    #[test]
    fn test_code_friendly_keeps_underscores() {
        assert_eq!(
            render("call _private_ and __dunder__"),
            "<p>call _private_ and __dunder__</p>\n"
        );
    }

    #[test]
    fn test_code_friendly_keeps_star_emphasis() {
        assert_eq!(render("*soft* **hard**"), "<p><em>soft</em> <strong>hard</strong></p>\n");
    }

    #[test]
    fn test_underscore_emphasis_without_code_friendly() {
        let options = RendererOptions {
            code_friendly: false,
            ..RendererOptions::default()
        };
        assert_eq!(render_markdown("_soft_", &options), "<p><em>soft</em></p>\n");
    }

    #[test]
    fn test_fenced_block_carries_language_class() {
        let html = render("```tikz\n\\draw (0,0) -> (1,1);\n```\n");
        assert_eq!(
            html,
            "<pre><code class=\"language-tikz\">\\draw (0,0) -&gt; (1,1);\n</code></pre>\n"
        );
    }

    #[test]
    fn test_list_directly_after_paragraph() {
        let html = render("Items:\n- one\n- two\n");
        assert!(html.contains("<ul>"), "{html}");
        assert!(html.contains("<li>one</li>"), "{html}");
    }

    #[test]
    fn test_image_form() {
        assert_eq!(render("![b](a.png)"), "<p><img src=\"a.png\" alt=\"b\" /></p>\n");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("1 Intro"), "1-intro");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
        assert_eq!(slugify("snake_case name"), "snake_case-name");
        assert_eq!(slugify("Ünïcode"), "ncode");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn test_empty_slug_falls_back() {
        let html = render("# ???");
        assert!(html.contains(r#"<h1 id="section">"#), "{html}");
    }
}
