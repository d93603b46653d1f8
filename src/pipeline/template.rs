//! HTML document shell
//!
//! Styling, table of contents, MathJax, highlight.js and TikZJax are loaded
//! from their CDNs; nothing is bundled.

const HEAD: &str = r#"
    <!-- Bootstrap Style -->
    <link
      href="https://cdn.jsdelivr.net/npm/bootstrap@5.2.0-beta1/dist/css/bootstrap.min.css"
      rel="stylesheet"
      integrity="sha384-0evHe/X+R7YkIZDRvuzKMRqM+OrBnVFBL6DOitfPri4tjfHxaWutUpFmBp4vmVor"
      crossorigin="anonymous"
    />

    <!-- TOC CSS -->
    <link rel="stylesheet" href="https://afeld.github.io/bootstrap-toc/bootstrap-toc.css">
    <link rel="stylesheet" href="https://afeld.github.io/bootstrap-toc/assets/screen.css" media="screen" charset="utf-8">

    <script
      src="https://code.jquery.com/jquery-3.2.1.slim.min.js"
      integrity="sha384-KJ3o2DKtIkvYIK3UENzmM7KCkRr/rE9/Qpg6aAZGJwFDMVNA/GpGFF93hXpG5KkN"
      crossorigin="anonymous"
    ></script>
    <script
      src="https://cdn.jsdelivr.net/npm/bootstrap@5.2.0-beta1/dist/js/bootstrap.bundle.min.js"
      integrity="sha384-pprn3073KE6tl6bjs2QrFaJGz5/SUsLqktiwsUTF55Jfv3qYSDhgCecCxMW52nD2"
      crossorigin="anonymous"
    ></script>
    <script src="https://afeld.github.io/bootstrap-toc/bootstrap-toc.js"></script>

    <!-- Math -->
    <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

    <!-- Syntax highlighting -->
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.7.0/styles/default.min.css">
    <script src="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.7.0/highlight.min.js"></script>

    <!-- Diagrams -->
    <link rel="stylesheet" type="text/css" href="https://tikzjax.com/v1/fonts.css">
    <script src="https://tikzjax.com/v1/tikzjax.js"></script>
"#;

/// Wrap a rendered fragment in the two-column document shell.
pub fn assemble(title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
{HEAD}
  </head>
  <body data-bs-spy="scroll" data-target="#toc">
    <div class="container">
      <div class="row">
        <div class="col-sm-3">
          <nav id="toc" data-toggle="toc" class="sticky-top"></nav>
        </div>
        <div class="col-sm-9">
{body}
        </div>
      </div>
    </div>
  </body>
</html>
"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_body_substituted() {
        let html = assemble("Topology", "<p>open sets</p>");
        assert!(html.contains("<title>Topology</title>"));
        assert!(html.contains("<p>open sets</p>"));
        assert!(html.find("col-sm-3").unwrap() < html.find("<p>open sets</p>").unwrap());
    }

    #[test]
    fn test_external_resources_referenced() {
        let html = assemble("t", "");
        for needle in [
            "bootstrap.min.css",
            "bootstrap-toc.js",
            "mathjax@3",
            "highlight.min.js",
            "tikzjax.js",
        ] {
            assert!(html.contains(needle), "missing {needle}");
        }
    }

    #[test]
    fn test_shell_has_no_dollar_signs() {
        assert!(!assemble("t", "").contains('$'));
    }
}
