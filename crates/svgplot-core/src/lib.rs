#![forbid(unsafe_code)]

//! `svgplot-core` is a small SVG document-object model.
//!
//! An [`Element`] owns its attributes, its children and (optionally) a CSS stylesheet. Trees are
//! built synchronously and serialized once with [`Element::to_markup`] or [`Element::save`].
//! Shapes know their own axis-aligned bounding boxes, which drives [`Element::autoscale`].

pub mod attrs;
pub mod bbox;
pub mod color;
pub mod element;
pub mod error;
pub mod fmt;
pub mod geom;
pub mod markup;
pub mod text;

pub use attrs::{AttrValue, AttributeMap};
pub use bbox::bounding_polygon;
pub use color::Color;
pub use element::{Element, Kind, Query};
pub use error::{Error, Result};
pub use geom::{
    BoundingBox, DEFAULT_MARGINS, Margins, NO_MARGINS, Point, convex_hull, point, polar_points,
};
pub use text::{DeterministicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};

/// Namespace written on every document root.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
