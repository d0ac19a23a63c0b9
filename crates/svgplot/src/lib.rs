#![forbid(unsafe_code)]

//! `svgplot` builds SVG documents from an element tree and turns numeric series into line,
//! scatter and subplot charts.
//!
//! # Features
//!
//! - `render` (default): plots and figures (`svgplot::render`)

pub use svgplot_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use svgplot_render::{
        CurveData, CurveSpec, Error, Extent, Figure, FigureConfig, FigureSpec, Plot, PlotConfig,
        Result, Series, SeriesKind, SubplotFrame, SubplotSpec,
    };

    /// Parses a JSON [`FigureSpec`], optionally overriding its config, and returns the markup.
    pub fn figure_markup_from_json(spec_json: &str, config: Option<FigureConfig>) -> Result<String> {
        let mut spec = FigureSpec::from_json(spec_json)?;
        if config.is_some() {
            spec.config = config;
        }
        Ok(Figure::from_spec(&spec)?.to_markup())
    }

}
