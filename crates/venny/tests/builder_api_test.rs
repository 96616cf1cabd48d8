//! Integration tests for the DiagramBuilder API

use venny::{
    Annotation, Annotations, DiagramBuilder, VennyError,
    config::{AppConfig, StyleConfig},
    layout::LayoutError,
};

fn range(start: u32, end: u32) -> Vec<u32> {
    (start..end).collect()
}

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_build_three_sets() {
    let builder = DiagramBuilder::default();
    let diagram = builder
        .build(
            [range(0, 10), range(5, 15), range(3, 8)],
            ["A", "B", "C"],
        )
        .expect("Failed to build diagram");

    assert_eq!(diagram.set_count(), 3);
    assert_eq!(diagram.labels().get_str("100"), "3");
    assert_eq!(diagram.labels().get_str("010"), "5");
    assert_eq!(diagram.labels().get_str("001"), "0");
    assert_eq!(diagram.labels().get_str("110"), "2");
    assert_eq!(diagram.labels().get_str("101"), "2");
    assert_eq!(diagram.labels().get_str("011"), "0");
    assert_eq!(diagram.labels().get_str("111"), "3");
}

#[test]
fn test_render_simple_diagram() {
    let builder = DiagramBuilder::default();
    let diagram = builder
        .build([vec!["a", "b"], vec!["b", "c"]], ["left", "right"])
        .expect("Failed to build diagram");

    let svg = builder.render_svg(&diagram).expect("Failed to render");
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains("left"));
    assert!(svg.contains("right"));
}

#[test]
fn test_too_many_sets_fail_before_rendering() {
    let builder = DiagramBuilder::default();
    let sets = vec![vec![1]; 5];
    let result = builder.build(sets, Vec::<String>::new());

    assert!(matches!(
        result,
        Err(VennyError::Layout(LayoutError::UnsupportedCardinality(5)))
    ));
}

#[test]
fn test_single_set_is_rejected() {
    let builder = DiagramBuilder::default();
    let result = builder.build([vec![1, 2, 3]], ["only"]);
    assert!(matches!(result, Err(VennyError::Layout(_))));
}

#[test]
fn test_fill_from_config() {
    let config = AppConfig::default().with_fill(
        Annotations::none()
            .with(Annotation::Logic)
            .with(Annotation::Percent),
    );
    let builder = DiagramBuilder::new(config);
    let diagram = builder
        .build([range(1, 3), range(3, 5)], Vec::<String>::new())
        .unwrap();

    assert_eq!(diagram.labels().get_str("10"), "10: (50.0%)");
    assert_eq!(diagram.labels().get_str("11"), "11: (0.0%)");
    assert_eq!(diagram.names(), ["A", "B"]);
}

#[test]
fn test_invalid_color_is_a_config_error() {
    let style = StyleConfig::default().with_colors(["definitely-not-a-color"]);
    let builder = DiagramBuilder::new(AppConfig::default().with_style(style));
    let diagram = builder.build([vec![1], vec![2]], ["x", "y"]).unwrap();

    let result = builder.render_svg(&diagram);
    assert!(matches!(result, Err(VennyError::Config(_))));
}

#[test]
fn test_parse_data_and_export() {
    let builder = DiagramBuilder::default();
    let first = builder.parse_data(r#"apple "green pear" plum"#).unwrap();
    let second = builder.parse_data("plum cherry").unwrap();
    assert_eq!(first, vec!["apple", "green pear", "plum"]);

    let diagram = builder.build([first, second], ["fruit"]).unwrap();
    assert_eq!(diagram.names(), ["fruit", "B"]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("venn.svg");
    builder.export_svg(&diagram, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("fruit"));
}

#[test]
fn test_parse_invalid_data_returns_error() {
    let builder = DiagramBuilder::default();
    let result = builder.parse_data(r#"ok "unterminated"#);
    assert!(matches!(result, Err(VennyError::Parse { .. })));
}

#[test]
fn test_builder_reusability() {
    let builder = DiagramBuilder::default();

    let two = builder.build([vec![1], vec![1, 2]], ["a", "b"]).unwrap();
    let four = builder
        .build([vec![1], vec![1], vec![1], vec![1]], ["a", "b", "c", "d"])
        .unwrap();

    assert_eq!(four.labels().get_str("1111"), "1");
    assert!(builder.render_svg(&two).unwrap().contains("<svg"));
    assert!(builder.render_svg(&four).unwrap().contains("<svg"));
}
