use crate::SVG_NAMESPACE;
use crate::attrs::{AttrValue, AttributeMap};
use crate::fmt::{compact_into, fixed1_into};
use crate::geom::{Point, point};
use indexmap::IndexMap;

/// The element variants the tree can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Svg,
    Group,
    Rect,
    Circle,
    Line,
    Polyline,
    Polygon,
    Path,
    Text,
}

impl Kind {
    pub fn tag(self) -> &'static str {
        match self {
            Kind::Svg => "svg",
            Kind::Group => "g",
            Kind::Rect => "rect",
            Kind::Circle => "circle",
            Kind::Line => "line",
            Kind::Polyline => "polyline",
            Kind::Polygon => "polygon",
            Kind::Path => "path",
            Kind::Text => "text",
        }
    }

    /// Geometric primitives. Containers and text are not shapes.
    pub fn is_shape(self) -> bool {
        matches!(
            self,
            Kind::Rect | Kind::Circle | Kind::Line | Kind::Polyline | Kind::Polygon | Kind::Path
        )
    }
}

/// Filter used by the typed child queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Any,
    Shape,
    Kind(Kind),
}

impl Query {
    pub fn matches(self, kind: Kind) -> bool {
        match self {
            Query::Any => true,
            Query::Shape => kind.is_shape(),
            Query::Kind(k) => k == kind,
        }
    }
}

impl From<Kind> for Query {
    fn from(value: Kind) -> Self {
        Query::Kind(value)
    }
}

/// A node of the SVG tree. Children are owned; dropping an element drops its subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub(crate) kind: Kind,
    pub(crate) attrs: AttributeMap,
    pub(crate) children: Vec<Element>,
    pub(crate) styles: IndexMap<String, AttributeMap>,
    pub(crate) content: Option<String>,
    pub(crate) vertices: Vec<Point>,
    pub(crate) path_start: Option<Point>,
}

impl Element {
    /// A bare element of `kind` with no attributes (`<circle />`).
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            attrs: AttributeMap::new(),
            children: Vec::new(),
            styles: IndexMap::new(),
            content: None,
            vertices: Vec::new(),
            path_start: None,
        }
    }

    /// Document root carrying the SVG namespace.
    pub fn svg() -> Self {
        let mut el = Self::new(Kind::Svg);
        el.set_attr("xmlns", SVG_NAMESPACE);
        el
    }

    pub fn group() -> Self {
        Self::new(Kind::Group)
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        let mut el = Self::new(Kind::Rect);
        el.set_attr("x", x)
            .set_attr("y", y)
            .set_attr("width", width)
            .set_attr("height", height);
        el
    }

    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        let mut el = Self::new(Kind::Circle);
        el.set_attr("cx", cx).set_attr("cy", cy).set_attr("r", r);
        el
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let mut el = Self::new(Kind::Line);
        el.set_attr("x1", x1)
            .set_attr("y1", y1)
            .set_attr("x2", x2)
            .set_attr("y2", y2);
        el
    }

    pub fn line_between(from: Point, to: Point) -> Self {
        Self::line(from.x, from.y, to.x, to.y)
    }

    pub fn polyline(points: impl IntoIterator<Item = Point>) -> Self {
        Self::with_vertices(Kind::Polyline, points)
    }

    pub fn polygon(points: impl IntoIterator<Item = Point>) -> Self {
        Self::with_vertices(Kind::Polygon, points)
    }

    fn with_vertices(kind: Kind, points: impl IntoIterator<Item = Point>) -> Self {
        let mut el = Self::new(kind);
        el.vertices = points.into_iter().collect();
        el.sync_points_attr();
        el
    }

    /// Empty path; build it with [`Element::start`] and [`Element::line_to`].
    pub fn path() -> Self {
        Self::new(Kind::Path)
    }

    pub fn text(x: f64, y: f64, content: impl Into<String>) -> Self {
        let mut el = Self::new(Kind::Text);
        el.set_attr("x", x).set_attr("y", y);
        el.content = Some(content.into());
        el
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    /// Sets an attribute. Writing `d` on a path or `points` on a polyline/polygon also
    /// reloads the vertex list used for bounding boxes (absolute coordinate pairs only).
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl AttrValue) -> &mut Self {
        let key = key.into();
        let geometry = matches!(
            (self.kind, key.as_str()),
            (Kind::Path, "d") | (Kind::Polyline | Kind::Polygon, "points")
        );
        self.attrs.set_attr(key.as_str(), value);
        if geometry {
            self.reload_vertices(&key);
        }
        self
    }

    fn reload_vertices(&mut self, key: &str) {
        let coords: Vec<f64> = self
            .attrs
            .get(key)
            .unwrap_or_default()
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter_map(|tok| {
                tok.trim_start_matches(|c: char| c.is_ascii_alphabetic())
                    .parse()
                    .ok()
            })
            .collect();
        self.vertices = coords
            .chunks_exact(2)
            .map(|pair| point(pair[0], pair[1]))
            .collect();
        if matches!(self.kind, Kind::Path) {
            self.path_start = self.vertices.first().copied();
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    pub fn attrs(&self) -> &AttributeMap {
        &self.attrs
    }

    /// Raw map access. Geometry written here bypasses the vertex list, so `bbox` won't see it.
    pub fn attrs_mut(&mut self) -> &mut AttributeMap {
        &mut self.attrs
    }

    /// Appends `child` and returns it for further configuration.
    pub fn add_child(&mut self, child: Element) -> &mut Element {
        let idx = self.children.len();
        self.children.push(child);
        &mut self.children[idx]
    }

    /// Builder-style append; returns `self` so pushes can be chained.
    pub fn push(&mut self, child: Element) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn extend<I>(&mut self, children: I) -> &mut Self
    where
        I: IntoIterator<Item = Element>,
    {
        self.children.extend(children);
        self
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        &mut self.children
    }

    /// All descendants matching `query`, depth-first pre-order. `self` is never included.
    pub fn descendants(&self, query: impl Into<Query>) -> Vec<&Element> {
        let query = query.into();
        let mut out = Vec::new();
        self.collect_descendants(query, &mut out);
        out
    }

    fn collect_descendants<'a>(&'a self, query: Query, out: &mut Vec<&'a Element>) {
        for child in &self.children {
            if query.matches(child.kind) {
                out.push(child);
            }
            child.collect_descendants(query, out);
        }
    }

    /// Direct children matching `query`.
    pub fn immediate_children(&self, query: impl Into<Query>) -> Vec<&Element> {
        let query = query.into();
        self.children
            .iter()
            .filter(|c| query.matches(c.kind))
            .collect()
    }

    /// Every descendant grouped by tag name, tags in first-seen order.
    pub fn children_by_tag(&self) -> IndexMap<&'static str, Vec<&Element>> {
        let mut out: IndexMap<&'static str, Vec<&Element>> = IndexMap::new();
        for el in self.descendants(Query::Any) {
            out.entry(el.tag()).or_default().push(el);
        }
        out
    }

    /// CSS rule for `selector`, created on first use. Rules serialize in insertion order as a
    /// trailing `<style>` child of this element.
    pub fn style(&mut self, selector: impl Into<String>) -> &mut AttributeMap {
        self.styles.entry(selector.into()).or_default()
    }

    pub fn styles(&self) -> &IndexMap<String, AttributeMap> {
        &self.styles
    }

    /// Text content (only [`Kind::Text`] elements carry any).
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = Some(content.into());
        self
    }

    /// Vertices of polylines, polygons and paths.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub(crate) fn num(&self, key: &str) -> f64 {
        self.attrs.get_f64(key).unwrap_or(0.0)
    }

    /// Reference x coordinate: `cx` for circles, `x1` for lines, `x` otherwise.
    pub fn x(&self) -> f64 {
        match self.kind {
            Kind::Circle => self.num("cx"),
            Kind::Line => self.num("x1"),
            Kind::Polyline | Kind::Polygon | Kind::Path => {
                self.vertices.first().map_or(0.0, |p| p.x)
            }
            _ => self.num("x"),
        }
    }

    pub fn y(&self) -> f64 {
        match self.kind {
            Kind::Circle => self.num("cy"),
            Kind::Line => self.num("y1"),
            Kind::Polyline | Kind::Polygon | Kind::Path => {
                self.vertices.first().map_or(0.0, |p| p.y)
            }
            _ => self.num("y"),
        }
    }

    pub fn width(&self) -> f64 {
        match self.kind {
            Kind::Rect | Kind::Svg => self.num("width"),
            Kind::Circle => 2.0 * self.radius(),
            _ => self.bbox().map_or(0.0, |b| b.width()),
        }
    }

    pub fn height(&self) -> f64 {
        match self.kind {
            Kind::Rect | Kind::Svg => self.num("height"),
            Kind::Circle => 2.0 * self.radius(),
            _ => self.bbox().map_or(0.0, |b| b.height()),
        }
    }

    pub fn radius(&self) -> f64 {
        match self.kind {
            Kind::Circle => self.num("r"),
            _ => 0.0,
        }
    }

    pub fn x1(&self) -> f64 {
        self.num("x1")
    }

    pub fn x2(&self) -> f64 {
        self.num("x2")
    }

    pub fn y1(&self) -> f64 {
        self.num("y1")
    }

    pub fn y2(&self) -> f64 {
        self.num("y2")
    }

    pub fn length(&self) -> f64 {
        (self.x2() - self.x1()).hypot(self.y2() - self.y1())
    }

    /// Rise over run; infinite for vertical lines.
    pub fn slope(&self) -> f64 {
        (self.y2() - self.y1()) / (self.x2() - self.x1())
    }

    /// The element's reference point, usable as a line endpoint.
    pub fn anchor(&self) -> Point {
        point(self.x(), self.y())
    }

    /// Begins a new subpath at `(x, y)`.
    pub fn start(&mut self, x: f64, y: f64) -> &mut Self {
        self.path_start = Some(point(x, y));
        self.push_path_command('M', x, y);
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        if self.path_start.is_none() {
            return self.start(x, y);
        }
        self.push_path_command('L', x, y);
        self
    }

    /// Draws a line back to the start of the current subpath.
    pub fn to_origin(&mut self) -> &mut Self {
        if let Some(origin) = self.path_start {
            self.push_path_command('L', origin.x, origin.y);
        }
        self
    }

    pub fn close(&mut self) -> &mut Self {
        if let Some(mut d) = self.attrs.remove("d") {
            d.push_str(" Z");
            self.attrs.set_attr("d", d);
        }
        self
    }

    fn push_path_command(&mut self, cmd: char, x: f64, y: f64) {
        let mut d = self.attrs.remove("d").unwrap_or_default();
        if !d.is_empty() {
            d.push(' ');
        }
        d.push(cmd);
        d.push(' ');
        compact_into(&mut d, x);
        d.push(' ');
        compact_into(&mut d, y);
        self.attrs.set_attr("d", d);
        self.vertices.push(point(x, y));
    }

    /// Appends a vertex to a polyline or polygon.
    pub fn push_point(&mut self, p: Point) -> &mut Self {
        self.vertices.push(p);
        self.sync_points_attr();
        self
    }

    fn sync_points_attr(&mut self) {
        let mut s = String::with_capacity(self.vertices.len() * 12);
        for (i, p) in self.vertices.iter().enumerate() {
            if i > 0 {
                s.push(' ');
            }
            fixed1_into(&mut s, p.x);
            s.push(',');
            fixed1_into(&mut s, p.y);
        }
        self.attrs.set_attr("points", s);
    }
}

impl From<Kind> for Element {
    fn from(value: Kind) -> Self {
        Element::new(value)
    }
}
