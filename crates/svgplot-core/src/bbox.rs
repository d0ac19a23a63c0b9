//! Bounding boxes, outline points and autoscaling.

use crate::element::{Element, Kind};
use crate::fmt::fixed1_into;
use crate::geom::{BoundingBox, Margins, Point, convex_hull, point, polar_points};
use crate::text::{DeterministicTextMeasurer, TextMeasurer, TextStyle};

/// Number of outline samples taken from a circle by [`Element::points`].
pub const CIRCLE_OUTLINE_POINTS: usize = 64;

const DEFAULT_FONT_SIZE: f64 = 16.0;

impl Element {
    /// Axis-aligned bounding box in user units, ignoring stroke width.
    ///
    /// Containers return the union of their children; elements without geometry (an empty
    /// group, a path with no vertices) return `None`.
    pub fn bbox(&self) -> Option<BoundingBox> {
        match self.kind {
            Kind::Rect => {
                let (x, y) = (self.num("x"), self.num("y"));
                Some(BoundingBox::new(
                    x,
                    x + self.num("width"),
                    y,
                    y + self.num("height"),
                ))
            }
            Kind::Circle => {
                let (cx, cy, r) = (self.num("cx"), self.num("cy"), self.num("r").abs());
                Some(BoundingBox::new(cx - r, cx + r, cy - r, cy + r))
            }
            Kind::Line => Some(BoundingBox::new(self.x1(), self.x2(), self.y1(), self.y2())),
            Kind::Polyline | Kind::Polygon | Kind::Path => {
                BoundingBox::from_points(self.vertices.iter().copied())
            }
            Kind::Text => Some(self.text_bbox()),
            Kind::Svg | Kind::Group => self
                .children
                .iter()
                .filter_map(Element::bbox)
                .reduce(BoundingBox::union),
        }
    }

    fn text_bbox(&self) -> BoundingBox {
        let style = TextStyle {
            font_family: self.attr("font-family").map(str::to_string),
            font_size: self
                .attrs
                .get_f64("font-size")
                .or_else(|| {
                    self.attr("font-size")
                        .and_then(|v| v.trim().trim_end_matches("px").parse().ok())
                })
                .unwrap_or(DEFAULT_FONT_SIZE),
        };
        let metrics =
            DeterministicTextMeasurer::default().measure(self.content().unwrap_or_default(), &style);

        let (x, y) = (self.num("x"), self.num("y"));
        let x1 = match self.attr("text-anchor") {
            Some("middle") => x - metrics.width / 2.0,
            Some("end") => x - metrics.width,
            _ => x,
        };
        // Baseline sits at `y`; the estimate ignores descenders.
        BoundingBox::new(x1, x1 + metrics.width, y - style.font_size, y)
    }

    /// Outline points used for hull computations.
    pub fn points(&self) -> Vec<Point> {
        match self.kind {
            Kind::Circle => polar_points(
                CIRCLE_OUTLINE_POINTS,
                self.num("cx"),
                self.num("cy"),
                self.num("r").abs(),
            ),
            Kind::Line => vec![point(self.x1(), self.y1()), point(self.x2(), self.y2())],
            Kind::Polyline | Kind::Polygon | Kind::Path => self.vertices.clone(),
            Kind::Rect | Kind::Text => self
                .bbox()
                .map(|b| b.corners().to_vec())
                .unwrap_or_default(),
            Kind::Svg | Kind::Group => self.children.iter().flat_map(Element::points).collect(),
        }
    }

    /// Sizes this element to fit its content: sets `width`, `height` and `viewBox` from the
    /// aggregate bounding box of its descendants plus `margins`.
    pub fn autoscale(&mut self, margins: Margins) -> &mut Self {
        let Some(bbox) = self.bbox() else {
            tracing::warn!(tag = self.tag(), "autoscale skipped: element has no geometry");
            return self;
        };

        let width = bbox.width() + margins.left + margins.right;
        let height = bbox.height() + margins.top + margins.bottom;

        let mut view_box = String::new();
        fixed1_into(&mut view_box, bbox.x1 - margins.left);
        view_box.push(' ');
        fixed1_into(&mut view_box, bbox.y1 - margins.top);
        view_box.push(' ');
        fixed1_into(&mut view_box, width);
        view_box.push(' ');
        fixed1_into(&mut view_box, height);

        tracing::debug!(tag = self.tag(), view_box = view_box.as_str(), "autoscaled");
        self.set_attr("width", width)
            .set_attr("height", height)
            .set_attr("viewBox", view_box)
    }
}

/// Convex polygon enclosing every shape in `shapes`.
pub fn bounding_polygon(shapes: &[&Element]) -> Vec<Point> {
    let points: Vec<Point> = shapes.iter().flat_map(|s| s.points()).collect();
    convex_hull(&points)
}
