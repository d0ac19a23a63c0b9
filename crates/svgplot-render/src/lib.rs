#![forbid(unsafe_code)]

//! Line/scatter plots and subplot figures rendered to `svgplot-core` element trees.
//!
//! [`Plot`] draws every series into a single panel with shared axes. [`Figure`] splits a
//! canvas into a fixed grid of [`SubplotFrame`]s, each holding one or more curves. Both keep the
//! raw samples and build a fresh SVG tree on every [`Plot::to_svg`] / [`Figure::to_svg`] call.

pub mod config;
pub mod figure;
pub mod plot;
pub mod scale;
pub mod spec;

pub use config::{FigureConfig, PlotConfig};
pub use figure::{CurveData, Figure, SubplotFrame};
pub use plot::{Plot, Series, SeriesKind};
pub use scale::Extent;
pub use spec::{CurveSpec, FigureSpec, SubplotSpec};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("x and y must have the same length (x: {x_len}, y: {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[error("data vectors cannot be empty")]
    EmptyData,
    #[error("sample {index} is not a finite number")]
    NonFiniteSample { index: usize },
    #[error("invalid subplot grid {rows}x{cols}")]
    InvalidGrid { rows: u32, cols: u32 },
    #[error("subplot position {position} exceeds a {rows}x{cols} grid")]
    SubplotOutOfRange { position: u32, rows: u32, cols: u32 },
    #[error("no subplot available; call add_subplot first")]
    NoSubplot,
    #[error(transparent)]
    Svg(#[from] svgplot_core::Error),
    #[error("figure JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Checks that `x` and `y` pair up into a non-empty run of finite samples.
pub(crate) fn validate_samples(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.is_empty() {
        return Err(Error::EmptyData);
    }
    if let Some(index) = x
        .iter()
        .zip(y)
        .position(|(a, b)| !a.is_finite() || !b.is_finite())
    {
        return Err(Error::NonFiniteSample { index });
    }
    Ok(())
}
