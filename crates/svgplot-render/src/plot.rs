//! Single-panel line/scatter plot.

use crate::config::{PlotConfig, palette_color};
use crate::scale::Extent;
use crate::{Result, validate_samples};
use std::path::Path;
use svgplot_core::fmt::fixed1;
use svgplot_core::{Color, Element};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Samples joined by a single path.
    Line,
    /// One marker circle per sample.
    Scatter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub kind: SeriesKind,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: Color,
}

/// A plot area with shared axes. Series are stored as data and only turned into SVG by
/// [`Plot::to_svg`], so every series is mapped with the final limits.
#[derive(Debug, Clone)]
pub struct Plot {
    width: u32,
    height: u32,
    padding: u32,
    config: PlotConfig,
    series: Vec<Series>,
    limits: Option<(Extent, Extent)>,
}

impl Default for Plot {
    fn default() -> Self {
        Self::new(800, 600, 50)
    }
}

/// Pixel mapping for the final limits.
struct Frame {
    width: f64,
    height: f64,
    padding: f64,
    x: Extent,
    y: Extent,
}

impl Frame {
    fn px(&self, x: f64) -> f64 {
        self.padding + self.x.fraction(x) * (self.width - 2.0 * self.padding)
    }

    fn py(&self, y: f64) -> f64 {
        self.height - self.padding - self.y.fraction(y) * (self.height - 2.0 * self.padding)
    }
}

impl Plot {
    pub fn new(width: u32, height: u32, padding: u32) -> Self {
        Self::with_config(width, height, padding, PlotConfig::default())
    }

    pub fn with_config(width: u32, height: u32, padding: u32, config: PlotConfig) -> Self {
        Self {
            width,
            height,
            padding,
            config,
            series: Vec::new(),
            limits: None,
        }
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Data limits `(x, y)` over every series added so far.
    pub fn limits(&self) -> Option<(Extent, Extent)> {
        self.limits
    }

    /// Adds a line series. Without an explicit color the series takes the palette entry at its
    /// own index (not one past it), so the first series is `palette[0]`, blue by default.
    pub fn plot(&mut self, x: &[f64], y: &[f64], color: Option<Color>) -> Result<&mut Self> {
        self.add_series(SeriesKind::Line, x, y, color)
    }

    pub fn scatter(&mut self, x: &[f64], y: &[f64], color: Option<Color>) -> Result<&mut Self> {
        self.add_series(SeriesKind::Scatter, x, y, color)
    }

    fn add_series(
        &mut self,
        kind: SeriesKind,
        x: &[f64],
        y: &[f64],
        color: Option<Color>,
    ) -> Result<&mut Self> {
        validate_samples(x, y)?;

        let (Some(xs), Some(ys)) = (Extent::of(x), Extent::of(y)) else {
            return Err(crate::Error::EmptyData);
        };
        self.limits = Some(match self.limits {
            Some((lx, ly)) => (lx.union(xs), ly.union(ys)),
            None => (xs, ys),
        });

        let color =
            color.unwrap_or_else(|| palette_color(&self.config.palette, self.series.len()));
        tracing::debug!(?kind, len = x.len(), %color, "series added");
        self.series.push(Series {
            kind,
            x: x.to_vec(),
            y: y.to_vec(),
            color,
        });
        Ok(self)
    }

    /// Builds the document: series first, then axes, ticks and tick labels.
    pub fn to_svg(&self) -> Element {
        let mut root = Element::svg();
        root.set_attr("width", self.width)
            .set_attr("height", self.height)
            .set_attr("viewBox", format!("0 0 {} {}", self.width, self.height));

        let area = root.add_child(Element::group());
        let Some((x, y)) = self.limits else {
            tracing::warn!("plot has no data; rendering empty axes");
            self.draw_axis_lines(area);
            return root;
        };

        let frame = Frame {
            width: f64::from(self.width),
            height: f64::from(self.height),
            padding: f64::from(self.padding),
            x: x.widened(),
            y: y.widened(),
        };
        for series in &self.series {
            match series.kind {
                SeriesKind::Line => area.push(self.line_path(&frame, series)),
                SeriesKind::Scatter => area.extend(self.markers(&frame, series)),
            };
        }
        self.draw_axis_lines(area);
        self.draw_ticks(area, &frame);
        root
    }

    fn line_path(&self, frame: &Frame, series: &Series) -> Element {
        let mut path = Element::path();
        for (&x, &y) in series.x.iter().zip(&series.y) {
            path.line_to(frame.px(x), frame.py(y));
        }
        path.set_attr("fill", "none")
            .set_attr("stroke", series.color)
            .set_attr("stroke-width", self.config.line_width);
        path
    }

    fn markers<'a>(
        &'a self,
        frame: &'a Frame,
        series: &'a Series,
    ) -> impl Iterator<Item = Element> + 'a {
        series.x.iter().zip(&series.y).map(move |(&x, &y)| {
            let mut circle = Element::circle(frame.px(x), frame.py(y), self.config.marker_radius);
            circle
                .set_attr("fill", series.color)
                .set_attr("stroke", self.config.marker_stroke)
                .set_attr("stroke-width", 1);
            circle
        })
    }

    fn draw_axis_lines(&self, area: &mut Element) {
        let (w, h, pad) = (
            f64::from(self.width),
            f64::from(self.height),
            f64::from(self.padding),
        );
        let axis = self.config.axis_color;
        area.add_child(Element::line(pad, h - pad, w - pad, h - pad))
            .set_attr("stroke", axis);
        area.add_child(Element::line(pad, pad, pad, h - pad))
            .set_attr("stroke", axis);
    }

    fn draw_ticks(&self, area: &mut Element, frame: &Frame) {
        let n = self.config.tick_count;
        let len = self.config.tick_length;
        let axis = self.config.axis_color;
        let base = frame.height - frame.padding;

        for i in 0..=n {
            let value = frame.x.tick(i, n);
            let px = frame.px(value);
            area.add_child(Element::line(px, base, px, base + len))
                .set_attr("stroke", axis);
            area.add_child(Element::text(px, base + len + 10.0, fixed1(value)))
                .set_attr("text-anchor", "middle")
                .set_attr("font-size", self.config.tick_font_size);
        }

        for i in 0..=n {
            let value = frame.y.tick(i, n);
            let py = frame.py(value);
            area.add_child(Element::line(frame.padding - len, py, frame.padding, py))
                .set_attr("stroke", axis);
            area.add_child(Element::text(frame.padding - 2.0 * len, py, fixed1(value)))
                .set_attr("text-anchor", "end")
                .set_attr("dominant-baseline", "middle")
                .set_attr("font-size", self.config.tick_font_size);
        }
    }

    pub fn to_markup(&self) -> String {
        self.to_svg().to_markup()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_svg().save(path)?;
        tracing::debug!(path = %path.display(), series = self.series.len(), "plot saved");
        Ok(())
    }
}
