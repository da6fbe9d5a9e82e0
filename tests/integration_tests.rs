//! Integration tests for sheetcols loading and rendering

use sheetcols::fetch::{MemoryResponse, MemorySource};
use sheetcols::{
    emphasize, extract_video_id, format_cell, format_heading, render_csv, Fragment, FragmentKind,
    LoadOutcome, Loader, Page, PresentationMode, RenderOptions, Span, Surface, Table,
};

const GVIZ: &str = r#"{
    "version": "0.6",
    "status": "ok",
    "table": {
        "cols": [
            {"id": "A", "label": "", "type": "string"},
            {"id": "B", "label": "", "type": "string"},
            {"id": "C", "label": "", "type": "number"}
        ],
        "rows": [
            {"c": [{"v": "[Intro]"}, {"v": "\"Read fast\""}, {"v": 42.0, "f": "42"}]},
            {"c": [{"v": "https://youtu.be/dQw4w9WgXcQ"}, null, {"v": null}]},
            {"c": [{"v": "line one\nline two"}, {"v": "https://example.com/pic.PNG"}]}
        ]
    }
}"#;

// ============================================================================
// Normalization Tests
// ============================================================================

mod normalization {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_delimited_column_count_is_first_line_width() {
        let inputs = [
            ("a,b,c\n1,2,3,4,5", 3),
            ("single\nx,y", 1),
            ("a,b\n", 2),
            (",,,", 4),
        ];
        for (csv, expected) in inputs {
            let table = Table::from_delimited(csv);
            assert_eq!(table.column_count(), expected, "input: {:?}", csv);
        }
    }

    #[test]
    fn test_delimited_overflow_never_placed() {
        let table = Table::from_delimited("a\n1,2,3\n4,5");
        let placed: Vec<_> = table.placed_cells().collect();
        assert_eq!(placed, vec![(0, "a"), (0, "1"), (0, "4")]);
    }

    #[test]
    fn test_structured_column_count_is_descriptor_count() {
        let table = Table::from_gviz_json(GVIZ).unwrap();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.column(2), vec!["42"]);
        assert_eq!(table.column(1).len(), 2);
    }

    #[test]
    fn test_ragged_structured_rows_degrade() {
        let json = r#"{"table":{"cols":[{},{}],"rows":[{"c":[]},{},{"c":[{"v":"x"},{"v":"y"},{"v":"z"}]}]}}"#;
        let table = Table::from_gviz_json(json).unwrap();
        assert_eq!(table.column(0), vec!["x"]);
        assert_eq!(table.column(1), vec!["y"]);
    }
}

// ============================================================================
// Formatting Tests
// ============================================================================

mod formatting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_heading_letters_classified() {
        for input in ["[Title]", "<Title>"] {
            let fragment = format_cell(input);
            let html = fragment.to_html();
            let classified = html.matches("class=\"vowel\"").count()
                + html.matches("class=\"consonant\"").count();
            assert_eq!(classified, 5, "input: {}", input);
        }
        assert!(format_cell("<Title>").to_html().contains("<h2>"));
    }

    #[test]
    fn test_heading_non_letters_unchanged() {
        assert_eq!(
            format_heading("A-1"),
            "<span class=\"vowel\">A</span>-1"
        );
    }

    #[test]
    fn test_bionic_noop_on_markup() {
        let inputs = ["<p>hello</p>", "x <span>y</span>", "<Em>caps</Em>"];
        for input in inputs {
            assert_eq!(emphasize(input), input);
        }
    }

    #[test]
    fn test_video_identifier_extraction() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXc"), None);

        // Not 11 characters: falls through to normal formatting
        let fragment = format_cell("https://youtu.be/dQw4w9WgXc");
        assert_eq!(fragment.kind(), FragmentKind::Text);
    }

    #[test]
    fn test_image_detection_overrides_text() {
        let urls = [
            "https://example.com/a.png",
            "https://example.com/a.JPG",
            "https://example.com/a.jpeg",
            "https://example.com/a.Gif",
            "\"quoted\" then https://example.com/a.png",
        ];
        for url in urls {
            assert_eq!(format_cell(url).kind(), FragmentKind::Image, "url: {}", url);
        }
    }

    #[test]
    fn test_mixed_cell() {
        let fragment = format_cell("[Top]\n\"quoted\" - note");
        match fragment {
            Fragment::Paragraphs(lines) => {
                assert_eq!(lines.len(), 2);
                assert_eq!(lines[0], vec![Span::Heading1("Top".into())]);
                assert_eq!(
                    lines[1],
                    vec![
                        Span::Quote("quoted".into()),
                        Span::plain(" "),
                        Span::Superscript("note".into()),
                    ]
                );
            }
            other => panic!("expected paragraphs, got {:?}", other),
        }
    }
}

// ============================================================================
// Rendering Tests
// ============================================================================

mod rendering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_end_to_end_csv() {
        let mut page = Page::new(RenderOptions::default());
        page.populate(&Table::from_delimited("a,b\n[Hi],\"ok\""));

        let columns = page.columns();
        assert_eq!(columns.len(), 2);

        assert_eq!(
            columns[0].fragments()[1],
            Fragment::Text(vec![Span::Heading1("Hi".into())])
        );
        assert_eq!(
            columns[1].fragments()[1],
            Fragment::Text(vec![Span::Quote("ok".into())])
        );
        assert!(columns[1].fragments()[1].to_html().contains(
            "<div class=\"quote\"><span class=\"bionic-word\"><span class=\"bionic-part\">o</span>k</span></div>"
        ));
    }

    #[test]
    fn test_structured_page() {
        let mut page = Page::new(RenderOptions::fragment());
        page.populate(&Table::from_gviz_json(GVIZ).unwrap());

        let kinds: Vec<Vec<FragmentKind>> = page
            .columns()
            .iter()
            .map(|c| c.fragments().iter().map(Fragment::kind).collect())
            .collect();
        assert_eq!(
            kinds,
            vec![
                vec![FragmentKind::Text, FragmentKind::Embed, FragmentKind::Paragraphs],
                vec![FragmentKind::Text, FragmentKind::Image],
                vec![FragmentKind::Text],
            ]
        );
    }

    #[test]
    fn test_columns_render_left_to_right() {
        let html = render_csv("first,second,third", &RenderOptions::fragment());
        // Tails of the emphasized words: fi|rst, se|cond, th|ird
        let a = html.find("rst").unwrap();
        let b = html.find("cond").unwrap();
        let c = html.find("ird").unwrap();
        assert!(a < b && b < c);
        assert_eq!(html.matches("<div class=\"column\">").count(), 3);
    }

    #[test]
    fn test_light_mode_document() {
        let mut page = Page::new(RenderOptions::light());
        assert_eq!(page.mode(), PresentationMode::Light);
        assert!(page.to_html().contains("<body class=\"light-theme\">"));
        page.toggle_mode();
        assert!(page.to_html().contains("<body>"));
    }
}

// ============================================================================
// Loading Tests
// ============================================================================

mod loading {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fallback_attempted_exactly_once() {
        let source = MemorySource::new(
            MemoryResponse::Status(403),
            MemoryResponse::Payload(GVIZ.to_string()),
        );
        let loader = Loader::new(source);
        let mut page = Page::new(RenderOptions::default());

        let outcome = loader.load(&mut page);
        assert!(matches!(outcome, LoadOutcome::Fallback { .. }));
        assert_eq!(loader.source().delimited_requests(), 1);
        assert_eq!(loader.source().structured_requests(), 1);
        // Shown once for the primary failure, then replaced by content
        assert_eq!(page.error_displays(), 1);
        assert_eq!(page.columns().len(), 3);
    }

    #[test]
    fn test_error_panel_shown_twice_when_both_fail() {
        let loader = Loader::new(MemorySource::unreachable());
        let mut page = Page::new(RenderOptions::default());

        let outcome = loader.load(&mut page);
        assert!(matches!(outcome, LoadOutcome::Failed { .. }));
        assert_eq!(loader.source().structured_requests(), 1);
        assert_eq!(page.error_displays(), 2);

        let html = page.to_html();
        assert!(html.contains("Failed to load data. Please ensure:"));
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains("Try Again"));
    }

    #[test]
    fn test_reload_rebuilds_columns() {
        let loader = Loader::new(MemorySource::csv("a,b,c"));
        let mut page = Page::new(RenderOptions::default());
        loader.load(&mut page);
        loader.load(&mut page);
        assert_eq!(page.columns().len(), 3);
        assert_eq!(
            page.columns().iter().map(|c| c.len()).sum::<usize>(),
            3
        );
        assert_eq!(loader.source().delimited_requests(), 2);
    }

    #[test]
    fn test_no_callbacks_left_after_failures() {
        let loader = Loader::new(MemorySource::new(
            MemoryResponse::Unreachable,
            MemoryResponse::Body("not a callback".to_string()),
        ));
        let mut page = Page::new(RenderOptions::default());
        for _ in 0..3 {
            assert!(!loader.load(&mut page).is_success());
        }
        assert_eq!(loader.callbacks().pending_count(), 0);
    }

    #[test]
    fn test_custom_surface() {
        #[derive(Default)]
        struct Recorder {
            events: Vec<String>,
        }

        impl Surface for Recorder {
            fn populate(&mut self, table: &Table) {
                self.events.push(format!("populate:{}", table.column_count()));
            }

            fn show_error(&mut self) {
                self.events.push("error".to_string());
            }
        }

        let mut recorder = Recorder::default();
        sheetcols::load(MemorySource::gviz(GVIZ), &mut recorder);
        assert_eq!(recorder.events, vec!["error", "populate:3"]);
    }
}
