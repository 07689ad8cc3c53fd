//! Tests for primitive SVG elements.

use super::*;

mod axis_tests {
    use super::*;

    #[test]
    fn horizontal_axis_renders() {
        let axis = Axis::horizontal(10.0, 100.0, 200.0).with_labels(vec![
            (0.25, "Accuracy".to_string()),
            (0.75, "Recall".to_string()),
        ]);

        let svg = axis.render();
        assert!(svg.contains("<line"));
        assert!(svg.contains(">Accuracy</text>"));
        assert!(svg.contains("text-anchor=\"middle\""));
        // Tick at a quarter of the axis length
        assert!(svg.contains(r#"x1="60" y1="100" x2="60" y2="105""#));
    }

    #[test]
    fn vertical_axis_renders() {
        let axis = Axis::vertical(50.0, 150.0, 100.0)
            .with_labels(vec![(0.0, "0.0".to_string()), (1.0, "1.0".to_string())]);

        let svg = axis.render();
        assert!(svg.contains("text-anchor=\"end\""));
        // Top tick sits one axis length above the origin
        assert!(svg.contains(r#"x1="50" y1="50" x2="45" y2="50""#));
    }

    #[test]
    fn axis_with_custom_font_size() {
        let axis = Axis::horizontal(0.0, 0.0, 100.0)
            .with_font_size(14.0)
            .with_labels(vec![(0.5, "mid".to_string())]);

        let svg = axis.render();
        assert!(svg.contains("font-size=\"14\""));
        assert!(svg.contains("stroke=\"black\""));
    }

    #[test]
    fn axis_without_labels_is_single_line() {
        let svg = Axis::vertical(0.0, 100.0, 100.0).render();
        assert_eq!(svg.matches("<line").count(), 1);
        assert!(!svg.contains("<text"));
    }
}

mod bar_tests {
    use super::*;

    fn sample_bar() -> Bar {
        Bar {
            x: 10.0,
            y: 20.0,
            width: 50.0,
            height: 80.0,
            color: ChartColor::named("blue"),
            label: "Accuracy".to_string(),
            value_text: "0.884".to_string(),
            clip_path: None,
        }
    }

    #[test]
    fn bar_renders_with_title() {
        let svg = sample_bar().render();
        assert!(svg.contains(r#"<rect x="10" y="20" width="50" height="80" fill="blue">"#));
        assert!(svg.contains("<title>Accuracy: 0.884</title>"));
    }

    #[test]
    fn bar_with_clip_path() {
        let bar = Bar {
            clip_path: Some("plot-area".to_string()),
            ..sample_bar()
        };
        assert!(bar.render().contains(r#"clip-path="url(#plot-area)""#));
    }

    #[test]
    fn bar_escapes_label() {
        let bar = Bar {
            label: "<b>".to_string(),
            ..sample_bar()
        };
        assert!(bar.render().contains("&lt;b&gt;"));
    }

    #[test]
    fn bar_escapes_value_text() {
        let bar = Bar {
            label: "a".to_string(),
            value_text: "<b>".to_string(),
            ..sample_bar()
        };
        let svg = bar.render();
        assert!(svg.contains("<title>a: &lt;b&gt;</title>"));
        assert!(!svg.contains("<b>"));
    }
}

mod label_tests {
    use super::*;

    #[test]
    fn label_defaults_to_middle_anchor() {
        let svg = Label::new(5.0, 6.0, "0.884").render();
        assert_eq!(
            svg,
            r#"<text x="5" y="6" text-anchor="middle" fill="black" font-size="10">0.884</text>"#
        );
    }

    #[test]
    fn rotated_label() {
        let svg = Label::new(20.0, 300.0, "Score").with_rotation(-90.0).render();
        assert!(svg.contains(r#"transform="rotate(-90 20 300)""#));
    }

    #[test]
    fn label_with_class() {
        let svg = Label::new(0.0, 0.0, "Title")
            .with_class("chart-title")
            .with_font_size(16.0)
            .render();
        assert!(svg.contains(r#"class="chart-title""#));
        assert!(svg.contains(r#"font-size="16""#));
    }
}
