//! Post-processing passes
//!
//! An ordered table of `(pattern, rewrite)` steps applied to the rendered
//! HTML fragment. Order matters: block math must consume `$$` before inline
//! math sees it, and arrows are only unescaped inside the diagram scripts
//! that the tikz pass has already produced.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::RenderOptions;

/// How a pass rewrites a match.
enum Rewrite {
    /// `regex` replacement template (`${1}` style groups)
    Template(&'static str),
    /// Replacement computed from the match and the render options
    Computed(fn(&Captures<'_>, &RenderOptions) -> String),
}

/// One substitution step.
pub struct Pass {
    pub name: &'static str,
    pattern: Regex,
    rewrite: Rewrite,
    enabled: fn(&RenderOptions) -> bool,
}

impl Pass {
    fn template(name: &'static str, pattern: &str, template: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            rewrite: Rewrite::Template(template),
            enabled: always,
        }
    }

    fn computed(
        name: &'static str,
        pattern: &str,
        rewrite: fn(&Captures<'_>, &RenderOptions) -> String,
    ) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            rewrite: Rewrite::Computed(rewrite),
            enabled: always,
        }
    }

    fn when(mut self, enabled: fn(&RenderOptions) -> bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self, options: &RenderOptions) -> bool {
        (self.enabled)(options)
    }

    /// Apply this pass; borrowed output means nothing matched.
    pub fn apply<'h>(&self, html: &'h str, options: &RenderOptions) -> Cow<'h, str> {
        match &self.rewrite {
            Rewrite::Template(template) => self.pattern.replace_all(html, *template),
            Rewrite::Computed(f) => self
                .pattern
                .replace_all(html, |caps: &Captures<'_>| f(caps, options)),
        }
    }
}

fn always(_: &RenderOptions) -> bool {
    true
}

static PASSES: Lazy<Vec<Pass>> = Lazy::new(|| {
    vec![
        Pass::template(
            "section-ids",
            r#"<h1 id="(\d+)-([^"]*)">\d+"#,
            r#"<h1 id="L${1}">"#,
        ),
        Pass::template(
            "subsection-ids",
            r#"<h2 id="(\d+)-([^"]*)">\d+"#,
            r#"<h2 id="L${1}-${2}">"#,
        ),
        Pass::template("block-math", r"\$\$([^\$]+)\$\$", r"\[ ${1} \]"),
        Pass::template("inline-math", r"\$([^\$]+)\$", r"\( ${1} \)"),
        Pass::computed("image-width", r#"<img src="(.+?)" alt="(.*?)" />"#, |caps, o| {
            format!(
                r#"<img src="{}" alt="{}" width="{}" />"#,
                &caps[1], &caps[2], o.image_width
            )
        }),
        Pass::template("verbatim", r"<code>@(.+?)@</code>", r"\(\verb#${1}#\)"),
        Pass::computed(
            "tikz",
            r#"(?s)<pre><code class="language-tikz">(.*?)</code></pre>"#,
            |caps, o| tikz_script(o.tikz_scale, &caps[1]),
        ),
        Pass::computed(
            "tikz-arrows",
            r#"(?s)<script type="text/tikz">\\begin\{tikzpicture\}.*?\\end\{tikzpicture\}</script>"#,
            |caps, _| caps[0].replace("-&gt;", "->").replace("&lt;-", "<-"),
        ),
        Pass::computed(
            "plot",
            r#"<pre><code class="language-plot">domain=(.*?):(.*?)\n(.*?)\n</code></pre>"#,
            |caps, o| plot_script(o, &caps[1], &caps[2], &caps[3]),
        )
        .when(|o| o.plots),
        Pass::template(
            "definition",
            r"(?s)@@DEF\n(.*?)@@",
            r#"<div class="alert alert-success" role="alert">${1}</div>"#,
        ),
        Pass::template(
            "theorem",
            r"(?s)@@THM\n(.*?)@@",
            r#"<div class="alert alert-primary" role="alert">${1}</div>"#,
        ),
        Pass::template(
            "proof",
            r"(?s)@@PRF\n(.*?)@@",
            r#"<div class="alert alert-dark" role="alert">${1}</div>"#,
        ),
    ]
});

/// The passes in application order.
pub fn passes() -> &'static [Pass] {
    &PASSES
}

/// Run every enabled pass over `html`, in order.
pub fn post_process(html: &str, options: &RenderOptions) -> String {
    let mut current = html.to_string();

    for pass in passes() {
        if !pass.is_enabled(options) {
            tracing::trace!(pass = pass.name, "skipped");
            continue;
        }
        let rewritten = match pass.apply(&current, options) {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        if let Some(s) = rewritten {
            tracing::trace!(pass = pass.name, "rewrote");
            current = s;
        }
    }

    current
}

fn tikz_script(scale: f64, body: &str) -> String {
    format!(
        "<center><script type=\"text/tikz\">\\begin{{tikzpicture}}[scale={scale}]{body}\\end{{tikzpicture}}</script></center>"
    )
}

fn plot_script(options: &RenderOptions, low: &str, high: &str, expr: &str) -> String {
    let body = format!(
        "\\begin{{axis}}[legend pos=outer north east,axis lines = box,xlabel = $x$,ylabel = $y$,variable = t,trig format plots = rad,]\
         \\addplot [domain={}:{},samples={},color=blue,]{{{}}};\
         \\end{{axis}}",
        low.trim(),
        high.trim(),
        options.plot_samples,
        unescape_html(expr.trim()),
    );
    tikz_script(options.tikz_scale, &body)
}

// Script bodies are raw text, so entities would reach TikZ verbatim.
fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}
