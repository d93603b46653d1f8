//! Property tests for the whole rendering pipeline.

use proptest::prelude::*;

use betternotes::{convert, render_document, RenderOptions};

fn note_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("# Title\n".to_string()),
        Just("## Section\n".to_string()),
        Just("### Sub\n".to_string()),
        Just("$$x^2$$\n".to_string()),
        Just("$a_1$ and $".to_string()),
        Just("`@code@`\n".to_string()),
        Just("@@DEF\n".to_string()),
        Just("@@THM\nbody\n@@\n".to_string()),
        Just("@@\n".to_string()),
        Just("```tikz\n\\draw (0,0) -> (1,1);\n```\n".to_string()),
        Just("```plot\ndomain=0:1\nx\n```\n".to_string()),
        Just("```plot\n".to_string()),
        Just("![img](a.png)\n".to_string()),
        Just("\n".to_string()),
        "[ -~]{0,40}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any mix of recognized and broken constructs converts
    /// without panicking, and the result is a full document.
    #[test]
    fn property_convert_never_panics(parts in proptest::collection::vec(note_fragment(), 0..=16)) {
        let source = parts.concat();
        let html = convert(&source);
        prop_assert!(html.starts_with("<!DOCTYPE html>"));
        prop_assert!(html.trim_end().ends_with("</html>"));
    }

    /// PROPERTY: Rendering is a pure function of its input.
    #[test]
    fn property_render_deterministic(parts in proptest::collection::vec(note_fragment(), 0..=12)) {
        let source = parts.concat();
        let options = RenderOptions::default();
        prop_assert_eq!(render_document(&source, &options), render_document(&source, &options));
    }

    /// PROPERTY: Arbitrary text never panics either.
    #[test]
    fn property_arbitrary_text_never_panics(source in any::<String>()) {
        let _ = convert(&source);
    }
}
