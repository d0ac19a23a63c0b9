//! JSON description of a [`Figure`].
//!
//! ```json
//! {
//!   "width": 800,
//!   "height": 400,
//!   "subplots": [
//!     { "rows": 2, "cols": 1, "position": 0, "title": "speed",
//!       "curves": [{ "x": [0, 1, 2], "y": [1, 3, 2], "color": "red" }] }
//!   ]
//! }
//! ```

use crate::config::FigureConfig;
use crate::figure::Figure;
use crate::Result;
use serde::{Deserialize, Serialize};
use svgplot_core::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FigureSpec {
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<FigureConfig>,
    #[serde(default)]
    pub subplots: Vec<SubplotSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubplotSpec {
    pub rows: u32,
    pub cols: u32,
    pub position: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xlabel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ylabel: Option<String>,
    #[serde(default)]
    pub curves: Vec<CurveSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurveSpec {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl FigureSpec {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Figure {
    /// Replays `spec` through [`Figure::add_subplot`] and [`Figure::plot`], so a spec is
    /// validated exactly like the equivalent API calls.
    pub fn from_spec(spec: &FigureSpec) -> Result<Figure> {
        let config = spec.config.clone().unwrap_or_default();
        let mut figure = Figure::with_config(spec.width, spec.height, config);

        for subplot in &spec.subplots {
            let frame = figure.add_subplot(subplot.rows, subplot.cols, subplot.position)?;
            if let Some(title) = &subplot.title {
                frame.set_title(title.as_str());
            }
            if let Some(xlabel) = &subplot.xlabel {
                frame.set_xlabel(xlabel.as_str());
            }
            if let Some(ylabel) = &subplot.ylabel {
                frame.set_ylabel(ylabel.as_str());
            }
            for curve in &subplot.curves {
                figure.plot(&curve.x, &curve.y, &curve.label, curve.color)?;
            }
        }

        tracing::debug!(subplots = spec.subplots.len(), "figure built from spec");
        Ok(figure)
    }
}
