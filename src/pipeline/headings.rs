//! Section numbering
//!
//! `## Name` lines become numbered top-level sections (`# 1 Name`), and
//! `### Name` lines become subsections carrying the number of the section
//! above them (`## 1 Name`). The counter lives for one call only.

/// Renumber second- and third-level headings, line by line.
pub fn relabel_headings(source: &str) -> String {
    let mut label: u32 = 0;

    source
        .split('\n')
        .map(|line| {
            if let Some(rest) = heading_text(line, "##") {
                label += 1;
                format!("# {label} {rest}")
            } else if let Some(rest) = heading_text(line, "###") {
                format!("## {label} {rest}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text after `marker` and exactly one whitespace character.
fn heading_text<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(marker)?;
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => Some(chars.as_str()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_relabel_sections_and_subsections() {
        let src = "## Groups\ntext\n### Cosets\n### Quotients\n## Rings\n### Ideals";
        assert_snapshot!(relabel_headings(src), @r"
        # 1 Groups
        text
        ## 1 Cosets
        ## 1 Quotients
        # 2 Rings
        ## 2 Ideals
        ");
    }

    #[test]
    fn test_subsection_before_any_section_gets_zero() {
        assert_eq!(relabel_headings("### Early\n## First"), "## 0 Early\n# 1 First");
    }

    #[test]
    fn test_other_lines_untouched() {
        let src = "# Title\n#### Deep\n##NoSpace\nplain ## text\n";
        assert_eq!(relabel_headings(src), src);
    }

    #[test]
    fn test_trailing_newline_preserved() {
        assert_eq!(relabel_headings("## A\n"), "# 1 A\n");
    }

    #[test]
    fn test_tab_separator() {
        assert_eq!(relabel_headings("##\tTabbed"), "# 1 Tabbed");
    }

    #[test]
    fn test_counter_resets_between_calls() {
        assert_eq!(relabel_headings("## A"), "# 1 A");
        assert_eq!(relabel_headings("## B"), "# 1 B");
    }
}
