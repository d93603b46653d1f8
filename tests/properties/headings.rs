//! Property tests for section numbering.

use proptest::prelude::*;

use betternotes::pipeline::relabel_headings;

#[derive(Debug, Clone)]
enum Line {
    Section(String),
    Subsection(String),
    Prose(String),
}

fn word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,20}").unwrap()
}

fn line() -> impl Strategy<Value = Line> {
    prop_oneof![
        word().prop_map(Line::Section),
        word().prop_map(Line::Subsection),
        proptest::string::string_regex("[a-z0-9 .,]{0,30}")
            .unwrap()
            .prop_map(Line::Prose),
    ]
}

fn render(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|l| match l {
            Line::Section(t) => format!("## {t}"),
            Line::Subsection(t) => format!("### {t}"),
            Line::Prose(t) => t.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Sections are numbered 1..k in order, and each subsection
    /// carries the number of the nearest preceding section (0 before any).
    #[test]
    fn property_sections_numbered_sequentially(lines in proptest::collection::vec(line(), 0..=24)) {
        let out = relabel_headings(&render(&lines));
        let out_lines: Vec<&str> = out.split('\n').collect();
        prop_assert_eq!(out_lines.len(), lines.len().max(1));

        let mut label = 0;
        for (input, output) in lines.iter().zip(&out_lines) {
            match input {
                Line::Section(t) => {
                    label += 1;
                    prop_assert_eq!(*output, format!("# {label} {t}"));
                }
                Line::Subsection(t) => {
                    prop_assert_eq!(*output, format!("## {label} {t}"));
                }
                Line::Prose(t) => prop_assert_eq!(*output, t.as_str()),
            }
        }
    }

    /// PROPERTY: Documents without level-2/3 headings are left untouched.
    #[test]
    fn property_no_headings_identity(text in "[a-z0-9 \n.]{0,200}") {
        prop_assert_eq!(relabel_headings(&text), text);
    }
}
