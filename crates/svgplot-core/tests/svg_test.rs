use svgplot_core::{Color, Element, Kind, Query, point};

fn two_circles(x: f64, y: f64, r: f64) -> Element {
    let mut root = Element::svg();
    root.add_child(Element::group())
        .push(Element::circle(x, y, r))
        .push(Element::circle(x, y, r));
    root
}

#[test]
fn attribute_values_follow_their_type() {
    let mut svg = Element::svg();
    svg.set_attr("width", 200).set_attr("height", "200");
    assert_eq!(svg.attr("width"), Some("200"));
    assert_eq!(svg.attr("height"), Some("200"));

    let rect = svg.add_child(Element::rect(0.0, 0.0, 100.0, 100.0));
    assert_eq!(rect.attr("width"), Some("100.0"));
    assert_eq!(svg.descendants(Kind::Rect).len(), 1);
}

#[test]
fn rect_accessors() {
    let rect = Element::rect(0.0, 0.0, 100.0, 100.0);
    assert_eq!(rect.x(), 0.0);
    assert_eq!(rect.y(), 0.0);
    assert_eq!(rect.width(), 100.0);
    assert_eq!(rect.height(), 100.0);
}

#[test]
fn circle_accessors_and_bbox() {
    let circle = Element::circle(50.0, 60.0, 25.0);
    assert_eq!(circle.x(), 50.0);
    assert_eq!(circle.y(), 60.0);
    assert_eq!(circle.radius(), 25.0);
    assert_eq!(circle.width(), 50.0);
    assert_eq!(circle.height(), 50.0);

    let bbox = circle.bbox().expect("circle bbox");
    assert_eq!(bbox.x1, 25.0);
    assert_eq!(bbox.x2, 75.0);
    assert_eq!(bbox.y1, 35.0);
    assert_eq!(bbox.y2, 85.0);
}

#[test]
fn line_accessors() {
    let line = Element::line(10.0, 30.0, 20.0, 40.0);
    assert_eq!(line.x1(), 10.0);
    assert_eq!(line.x2(), 20.0);
    assert_eq!(line.y1(), 30.0);
    assert_eq!(line.y2(), 40.0);
    assert!((line.length() - 14.142).abs() < 0.01);
    assert!((line.slope() - 1.0).abs() < 0.01);
}

#[test]
fn path_builds_d_attribute() {
    let mut path = Element::path();
    path.start(0.0, 0.0).line_to(100.0, 100.0);
    assert_eq!(path.attr("d"), Some("M 0 0 L 100 100"));

    path.to_origin().close();
    assert_eq!(path.attr("d"), Some("M 0 0 L 100 100 L 0 0 Z"));
    assert_eq!(path.vertices().len(), 3);
}

#[test]
fn line_to_without_start_opens_a_subpath() {
    let mut path = Element::path();
    path.line_to(1.5, 2.0).line_to(3.0, 4.0);
    assert_eq!(path.attr("d"), Some("M 1.5 2 L 3 4"));
}

#[test]
fn text_keeps_content() {
    let text = Element::text(100.0, 100.0, "Hello, SVG!");
    assert_eq!(text.attr("x"), Some("100.0"));
    assert_eq!(text.attr("y"), Some("100.0"));
    assert_eq!(text.content(), Some("Hello, SVG!"));
}

#[test]
fn group_queries_filter_by_kind() {
    let mut svg = Element::svg();
    let group = svg.add_child(Element::group());
    group.add_child(Element::circle(50.0, 50.0, 25.0));
    group.add_child(Element::rect(0.0, 0.0, 100.0, 100.0));

    let group = &svg.children()[0];
    assert_eq!(group.descendants(Query::Shape).len(), 2);
    assert_eq!(group.descendants(Kind::Circle).len(), 1);
    assert_eq!(group.descendants(Kind::Rect).len(), 1);
}

#[test]
fn proper_indentation() {
    let mut root = Element::svg();
    root.add_child(Element::new(Kind::Circle));
    let correct = "<svg xmlns=\"http://www.w3.org/2000/svg\">\n\
                   \t<circle />\n\
                   </svg>";
    assert_eq!(root.to_string(), correct);
}

#[test]
fn proper_indentation_nested() {
    let root = two_circles(0.0, 0.0, 0.0);
    let correct = "<svg xmlns=\"http://www.w3.org/2000/svg\">\n\
                   \t<g>\n\
                   \t\t<circle cx=\"0.0\" cy=\"0.0\" r=\"0.0\" />\n\
                   \t\t<circle cx=\"0.0\" cy=\"0.0\" r=\"0.0\" />\n\
                   \t</g>\n\
                   </svg>";
    assert_eq!(root.to_string(), correct);
}

#[test]
fn css_styling() {
    let mut root = two_circles(0.0, 0.0, 0.0);
    root.style("circle")
        .set_attr("fill", "#000000")
        .set_attr("stroke", "#000000");
    let correct = "<svg xmlns=\"http://www.w3.org/2000/svg\">\n\
                   \t<g>\n\
                   \t\t<circle cx=\"0.0\" cy=\"0.0\" r=\"0.0\" />\n\
                   \t\t<circle cx=\"0.0\" cy=\"0.0\" r=\"0.0\" />\n\
                   \t</g>\n\
                   \t<style type=\"text/css\">\n\
                   \t\t<![CDATA[\n\
                   \t\t\tcircle {\n\
                   \t\t\t\tfill: #000000;\n\
                   \t\t\t\tstroke: #000000;\n\
                   \t\t\t}\n\
                   \t\t]]>\n\
                   \t</style>\n\
                   </svg>";
    assert_eq!(root.to_string(), correct);
}

#[test]
fn css_rules_keep_insertion_order() {
    let mut root = Element::svg();
    root.style(".shape").set_attr("fill", "none");
    root.style(".text").set_attr("font-size", "24px");
    root.style(".shape").set_attr("stroke", Color::Black);

    let markup = root.to_markup();
    let shape = markup.find(".shape {").expect("shape rule");
    let text = markup.find(".text {").expect("text rule");
    assert!(shape < text);
    assert!(markup.contains("\t\t\t\tstroke: black;\n"));
    assert_eq!(root.styles().len(), 2);
}

#[test]
fn one_decimal_place() {
    let pi = std::f64::consts::PI;
    let mut root = Element::svg();
    root.add_child(Element::line(0.0, pi, 0.0, pi));
    let correct = "<svg xmlns=\"http://www.w3.org/2000/svg\">\n\
                   \t<line x1=\"0.0\" x2=\"0.0\" y1=\"3.1\" y2=\"3.1\" />\n\
                   </svg>";
    assert_eq!(root.to_string(), correct);
}

#[test]
fn text_and_attributes_are_escaped() {
    let mut root = Element::svg();
    root.add_child(Element::text(0.0, 0.0, "a < b & c > d"))
        .set_attr("class", "\"quoted\"");
    let markup = root.to_markup();
    assert!(markup.contains(
        "<text class=\"&quot;quoted&quot;\" x=\"0.0\" y=\"0.0\">a &lt; b &amp; c > d</text>"
    ));

    let doc = roxmltree::Document::parse(&markup).expect("well-formed");
    let text = doc
        .descendants()
        .find(|n| n.has_tag_name("text"))
        .expect("text node");
    assert_eq!(text.text(), Some("a < b & c > d"));
}

#[test]
fn children_by_tag_nested() {
    let root = two_circles(0.0, 0.0, 0.0);
    let by_tag = root.children_by_tag();
    assert_eq!(by_tag["g"].len(), 1);
    assert_eq!(by_tag["circle"].len(), 2);
    assert_eq!(by_tag.keys().copied().collect::<Vec<_>>(), ["g", "circle"]);
}

#[test]
fn typed_descendant_queries() {
    let root = two_circles(0.0, 0.0, 0.0);
    assert_eq!(root.descendants(Kind::Svg).len(), 0);
    assert_eq!(root.descendants(Kind::Group).len(), 1);
    assert_eq!(root.descendants(Kind::Circle).len(), 2);
    assert_eq!(root.descendants(Query::Any).len(), 3);
}

#[test]
fn element_anchor_feeds_line_endpoints() {
    let root = two_circles(3.0, 4.0, 1.0);
    let circles = root.descendants(Kind::Circle);
    let line = Element::line_between(circles[0].anchor(), circles[1].anchor());
    assert_eq!(line.x1(), circles[0].x());
    assert_eq!(line.y2(), 4.0);
}

#[test]
fn immediate_children_skip_nested_elements() {
    let mut root = Element::svg();
    root.add_child(Element::circle(50.0, 50.0, 25.0));
    root.add_child(Element::rect(0.0, 0.0, 100.0, 100.0));
    root.add_child(Element::group())
        .add_child(Element::circle(25.0, 25.0, 10.0));

    let shapes = root.immediate_children(Query::Shape);
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].kind(), Kind::Circle);
    assert_eq!(shapes[1].kind(), Kind::Rect);

    let circles = root.immediate_children(Kind::Circle);
    assert_eq!(circles.len(), 1);
    assert_eq!(circles[0].x(), 50.0);

    let groups = root.immediate_children(Kind::Group);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].children().len(), 1);

    assert_eq!(root.descendants(Kind::Circle).len(), 2);
}

#[test]
fn polygon_points_attribute() {
    let polygon = Element::polygon([
        point(300.0, 50.0),
        point(350.0, 100.0),
        point(300.0, 150.0),
        point(250.0, 100.0),
    ]);
    assert_eq!(
        polygon.attr("points"),
        Some("300.0,50.0 350.0,100.0 300.0,150.0 250.0,100.0")
    );

    let mut polyline = Element::polyline([point(0.0, 0.0)]);
    polyline.push_point(point(1.26, 2.0));
    assert_eq!(polyline.attr("points"), Some("0.0,0.0 1.3,2.0"));
}

#[test]
fn save_writes_markup_with_trailing_newline() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out.svg");
    std::fs::write(&path, "stale content that is longer than the output").expect("seed");

    let mut root = Element::svg();
    root.add_child(Element::new(Kind::Circle));
    root.save(&path).expect("save");

    let written = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(written, format!("{}\n", root.to_markup()));
}

#[test]
fn save_reports_unwritable_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("out.svg");
    let err = Element::svg().save(&path).expect_err("directory does not exist");
    assert!(matches!(err, svgplot_core::Error::Write { .. }));
    assert!(err.to_string().contains("out.svg"));
}

#[test]
fn to_document_adds_xml_prolog() {
    let doc = Element::svg().to_document();
    assert!(doc.starts_with("<?xml version=\"1.0\""));
    assert!(doc.ends_with("<svg xmlns=\"http://www.w3.org/2000/svg\" />\n"));
}
