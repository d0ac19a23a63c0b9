//! Layout and styling knobs for [`crate::Plot`] and [`crate::Figure`].
//!
//! Every field has a default, so a JSON config only needs to name what it overrides. Unknown
//! keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use svgplot_core::Color;

fn default_palette() -> Vec<Color> {
    vec![
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::Purple,
        Color::Orange,
    ]
}

/// Picks `palette[index % len]`, falling back to blue for an empty palette.
pub(crate) fn palette_color(palette: &[Color], index: usize) -> Color {
    if palette.is_empty() {
        return Color::Blue;
    }
    palette[index % palette.len()]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// Number of tick intervals on each axis.
    pub tick_count: usize,
    pub tick_length: f64,
    pub tick_font_size: f64,
    pub line_width: f64,
    pub marker_radius: f64,
    pub marker_stroke: Color,
    pub axis_color: Color,
    pub palette: Vec<Color>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            tick_count: 5,
            tick_length: 5.0,
            tick_font_size: 10.0,
            line_width: 2.0,
            marker_radius: 3.0,
            marker_stroke: Color::Black,
            axis_color: Color::Black,
            palette: default_palette(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FigureConfig {
    /// Inset of the plot area from the top, right and bottom frame edges.
    pub margin: f64,
    /// Inset from the left frame edge; wider than `margin` to leave room for y tick labels.
    pub left_margin: f64,
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    pub tick_length: f64,
    pub font_family: String,
    pub tick_font_size: f64,
    pub label_font_size: f64,
    pub title_font_size: f64,
    pub line_width: f64,
    pub axis_color: Color,
    pub border_color: Color,
    pub palette: Vec<Color>,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            margin: 40.0,
            left_margin: 80.0,
            x_tick_count: 5,
            y_tick_count: 2,
            tick_length: 5.0,
            font_family: "Arial".to_string(),
            tick_font_size: 10.0,
            label_font_size: 12.0,
            title_font_size: 14.0,
            line_width: 1.0,
            axis_color: Color::Black,
            border_color: Color::Silver,
            palette: default_palette(),
        }
    }
}

impl FigureConfig {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl PlotConfig {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
