use svgplot_core::{Element, Kind, NO_MARGINS, bounding_polygon, point};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.001
}

#[test]
fn rect_bbox_from_attributes() {
    let mut rect = Element::new(Kind::Rect);
    rect.set_attr("x", "10")
        .set_attr("y", "20")
        .set_attr("width", "100")
        .set_attr("height", "50");

    let bbox = rect.bbox().expect("rect bbox");
    assert!(approx(bbox.x1, 10.0));
    assert!(approx(bbox.y1, 20.0));
    assert!(approx(bbox.x2, 110.0));
    assert!(approx(bbox.y2, 70.0));
}

#[test]
fn circle_bbox_from_attributes() {
    let mut circle = Element::new(Kind::Circle);
    circle
        .set_attr("cx", "50")
        .set_attr("cy", "60")
        .set_attr("r", "30");

    let bbox = circle.bbox().expect("circle bbox");
    assert!(approx(bbox.x1, 20.0));
    assert!(approx(bbox.y1, 30.0));
    assert!(approx(bbox.x2, 80.0));
    assert!(approx(bbox.y2, 90.0));
}

#[test]
fn path_bbox_covers_vertices() {
    let mut path = Element::path();
    path.start(10.0, 20.0)
        .line_to(50.0, 60.0)
        .line_to(90.0, 30.0)
        .to_origin();

    let bbox = path.bbox().expect("path bbox");
    assert!(approx(bbox.x1, 10.0));
    assert!(approx(bbox.y1, 20.0));
    assert!(approx(bbox.x2, 90.0));
    assert!(approx(bbox.y2, 60.0));
}

#[test]
fn polygon_bbox_covers_vertices() {
    let polygon = Element::polygon([
        point(0.0, 0.0),
        point(100.0, 0.0),
        point(100.0, 100.0),
        point(0.0, 100.0),
    ]);

    let bbox = polygon.bbox().expect("polygon bbox");
    assert!(approx(bbox.x1, 0.0));
    assert!(approx(bbox.y1, 0.0));
    assert!(approx(bbox.x2, 100.0));
    assert!(approx(bbox.y2, 100.0));
}

#[test]
fn raw_geometry_attributes_drive_bbox() {
    let mut path = Element::path();
    path.set_attr("d", "M 0 0 L 10 10 L -4 6 Z");
    let bbox = path.bbox().expect("path bbox");
    assert_eq!((bbox.x1, bbox.x2, bbox.y1, bbox.y2), (-4.0, 10.0, 0.0, 10.0));

    let mut polyline = Element::new(Kind::Polyline);
    polyline.set_attr("points", "1,2 7.5,-3 4,9");
    let bbox = polyline.bbox().expect("polyline bbox");
    assert_eq!((bbox.x1, bbox.x2, bbox.y1, bbox.y2), (1.0, 7.5, -3.0, 9.0));

    // Replacing the attribute replaces the vertices rather than appending.
    polyline.set_attr("points", "0,0 2,2");
    let bbox = polyline.bbox().expect("polyline bbox");
    assert_eq!((bbox.x2, bbox.y2), (2.0, 2.0));
}

#[test]
fn line_bbox_is_order_independent() {
    let bbox = Element::line(10.0, 40.0, -5.0, 20.0)
        .bbox()
        .expect("line bbox");
    assert_eq!((bbox.x1, bbox.x2, bbox.y1, bbox.y2), (-5.0, 10.0, 20.0, 40.0));
}

#[test]
fn autoscale_nested_groups() {
    let mut root = Element::svg();
    {
        let lines = root.add_child(Element::group());
        // Both lines sit between the two circles and must not widen the box.
        lines.add_child(Element::line(0.0, 0.0, 10.0, 10.0));
        lines.add_child(Element::line(0.0, 0.0, 0.0, 10.0));
    }
    {
        let circles = root.add_child(Element::group());
        circles.add_child(Element::circle(-100.0, -100.0, 100.0));
        circles.add_child(Element::circle(100.0, 100.0, 100.0));
    }
    root.autoscale(NO_MARGINS);

    let circles = root.descendants(Kind::Circle);
    let c1 = circles[0].bbox().expect("c1");
    assert_eq!((c1.x1, c1.x2, c1.y1, c1.y2), (-200.0, 0.0, -200.0, 0.0));
    let c2 = circles[1].bbox().expect("c2");
    assert_eq!((c2.x1, c2.x2, c2.y1, c2.y2), (0.0, 200.0, 0.0, 200.0));

    assert_eq!(root.attr("width"), Some("400.0"));
    assert_eq!(root.attr("height"), Some("400.0"));
    assert_eq!(root.attr("viewBox"), Some("-200.0 -200.0 400.0 400.0"));
}

#[test]
fn autoscale_applies_margins() {
    let mut root = Element::svg();
    root.add_child(Element::rect(10.0, 20.0, 100.0, 50.0));
    root.autoscale(svgplot_core::DEFAULT_MARGINS);

    assert_eq!(root.attr("width"), Some("120.0"));
    assert_eq!(root.attr("height"), Some("70.0"));
    assert_eq!(root.attr("viewBox"), Some("0.0 10.0 120.0 70.0"));
}

#[test]
fn bounding_polygon_of_circle_inside_rect_is_the_rect() {
    let circle = Element::circle(50.0, 50.0, 25.0);
    let rect = Element::rect(0.0, 0.0, 100.0, 100.0);

    let polygon = bounding_polygon(&[&circle, &rect]);
    assert_eq!(polygon.len(), 4);
    for corner in [
        point(0.0, 0.0),
        point(100.0, 0.0),
        point(100.0, 100.0),
        point(0.0, 100.0),
    ] {
        assert!(polygon.contains(&corner), "missing corner {corner:?}");
    }
}

#[test]
fn bounding_polygon_of_lone_circle_follows_its_outline() {
    let circle = Element::circle(0.0, 0.0, 10.0);
    let polygon = bounding_polygon(&[&circle]);
    assert_eq!(polygon.len(), svgplot_core::bbox::CIRCLE_OUTLINE_POINTS);
    assert!(polygon.iter().all(|p| approx(p.x.hypot(p.y), 10.0)));
}
