//! Multi-panel figures laid out on a fixed subplot grid.

use crate::config::{FigureConfig, palette_color};
use crate::scale::Extent;
use crate::{Error, Result, validate_samples};
use std::path::Path;
use svgplot_core::fmt::{fixed1, general};
use svgplot_core::{Color, Element, point};

/// One curve of a subplot.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub label: String,
    pub color: Color,
}

impl CurveData {
    pub fn new(x: &[f64], y: &[f64], label: impl Into<String>, color: Color) -> Result<Self> {
        validate_samples(x, y)?;
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            label: label.into(),
            color,
        })
    }

    /// `(x, y)` extents; `None` only for curves built by hand with no samples.
    pub fn extents(&self) -> Option<(Extent, Extent)> {
        Some((Extent::of(&self.x)?, Extent::of(&self.y)?))
    }
}

/// A rectangular cell of a [`Figure`] and the curves drawn in it.
#[derive(Debug, Clone, PartialEq)]
pub struct SubplotFrame {
    x_pos: u32,
    y_pos: u32,
    width: u32,
    height: u32,
    curves: Vec<CurveData>,
    title: Option<String>,
    xlabel: Option<String>,
    ylabel: Option<String>,
}

/// Plot area inside a frame, in pixels, plus the data extents mapped onto it.
struct Area {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    xs: Extent,
    ys: Extent,
}

impl Area {
    fn px(&self, v: f64) -> f64 {
        self.x + self.xs.fraction(v) * self.width
    }

    // Data y grows upward; pixel y grows downward.
    fn py(&self, v: f64) -> f64 {
        self.y + self.height - self.ys.fraction(v) * self.height
    }
}

impl SubplotFrame {
    pub fn x_pos(&self) -> u32 {
        self.x_pos
    }

    pub fn y_pos(&self) -> u32 {
        self.y_pos
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn curves(&self) -> &[CurveData] {
        &self.curves
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.xlabel = Some(label.into());
        self
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.ylabel = Some(label.into());
        self
    }

    /// The explicit title, else the curve labels joined by two spaces.
    pub fn caption(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        self.curves
            .iter()
            .map(|c| c.label.as_str())
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Union of every curve's extents.
    pub fn extents(&self) -> Option<(Extent, Extent)> {
        self.curves
            .iter()
            .filter_map(CurveData::extents)
            .reduce(|(ax, ay), (bx, by)| (ax.union(bx), ay.union(by)))
    }

    pub fn render(&self, config: &FigureConfig) -> Element {
        let mut group = Element::group();

        let (fx, fy) = (f64::from(self.x_pos), f64::from(self.y_pos));
        let (fw, fh) = (f64::from(self.width), f64::from(self.height));
        let ix = fx + config.left_margin;
        let iy = fy + config.margin;
        let iw = (fw - config.left_margin - config.margin).max(0.0);
        let ih = (fh - 2.0 * config.margin).max(0.0);

        if let Some((xs, ys)) = self.extents() {
            let area = Area {
                x: ix,
                y: iy,
                width: iw,
                height: ih,
                xs: xs.widened(),
                ys: ys.widened(),
            };
            for curve in &self.curves {
                let points = curve
                    .x
                    .iter()
                    .zip(&curve.y)
                    .map(|(&x, &y)| point(area.px(x), area.py(y)));
                group
                    .add_child(Element::polyline(points))
                    .set_attr("fill", "none")
                    .set_attr("stroke", curve.color)
                    .set_attr("stroke-width", config.line_width);
            }
            self.draw_ticks(&mut group, &area, config);
        }

        let caption = self.caption();
        if !caption.is_empty() {
            let text = group.add_child(Element::text(ix + iw / 2.0, iy - 10.0, caption));
            label_style(text, config, config.title_font_size)
                .set_attr("text-anchor", "middle");
        }

        let axis = config.axis_color;
        for line in [
            Element::line(ix, iy, ix + iw, iy),
            Element::line(ix, iy + ih, ix + iw, iy + ih),
            Element::line(ix, iy, ix, iy + ih),
            Element::line(ix + iw, iy, ix + iw, iy + ih),
        ] {
            group
                .add_child(line)
                .set_attr("stroke", axis)
                .set_attr("stroke-width", 1);
        }

        if let Some(xlabel) = &self.xlabel {
            let y = iy + ih + config.tick_length + 2.0 * config.tick_font_size + 10.0;
            let text = group.add_child(Element::text(ix + iw / 2.0, y, xlabel.as_str()));
            label_style(text, config, config.label_font_size)
                .set_attr("text-anchor", "middle");
        }
        if let Some(ylabel) = &self.ylabel {
            let (x, y) = (ix - 50.0, iy + ih / 2.0);
            let text = group.add_child(Element::text(x, y, ylabel.as_str()));
            label_style(text, config, config.label_font_size)
                .set_attr("text-anchor", "middle")
                .set_attr("transform", format!("rotate(-90 {} {})", fixed1(x), fixed1(y)));
        }

        group
            .add_child(Element::rect(fx, fy, fw, fh))
            .set_attr("fill", "none")
            .set_attr("stroke", config.border_color)
            .set_attr("stroke-width", 1);
        group
    }

    fn draw_ticks(&self, group: &mut Element, area: &Area, config: &FigureConfig) {
        let len = config.tick_length;
        let bottom = area.y + area.height;

        let n = config.x_tick_count;
        for i in 0..=n {
            let value = area.xs.tick(i, n);
            let x = area.x + area.width * i as f64 / n.max(1) as f64;
            group
                .add_child(Element::line(x, bottom, x, bottom + len))
                .set_attr("stroke", config.axis_color);
            let text = group.add_child(Element::text(
                x,
                bottom + len + config.tick_font_size,
                format!("{value:.2}"),
            ));
            label_style(text, config, config.tick_font_size).set_attr("text-anchor", "middle");
        }

        let n = config.y_tick_count;
        for i in 0..=n {
            let value = area.ys.tick(i, n);
            let y = bottom - area.height * i as f64 / n.max(1) as f64;
            group
                .add_child(Element::line(area.x - len, y, area.x, y))
                .set_attr("stroke", config.axis_color);
            let text = group.add_child(Element::text(area.x - 2.0 * len, y, general(value, 3)));
            label_style(text, config, config.tick_font_size)
                .set_attr("text-anchor", "end")
                .set_attr("dominant-baseline", "middle");
        }
    }
}

fn label_style<'a>(text: &'a mut Element, config: &FigureConfig, size: f64) -> &'a mut Element {
    text.set_attr("fill", Color::Black)
        .set_attr("font-family", config.font_family.as_str())
        .set_attr("font-size", size)
}

/// A canvas split into a grid of subplots.
///
/// ```
/// use svgplot_render::Figure;
///
/// let mut fig = Figure::new(800, 400);
/// fig.add_subplot(2, 1, 0)?;
/// fig.plot(&[0.0, 1.0, 2.0], &[1.0, 3.0, 2.0], "speed", None)?;
/// fig.add_subplot(2, 1, 1)?;
/// fig.plot(&[0.0, 1.0, 2.0], &[5.0, 4.0, 6.0], "load", None)?;
/// assert_eq!(fig.to_svg().descendants(svgplot_core::Kind::Polyline).len(), 2);
/// # Ok::<(), svgplot_render::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Figure {
    width: u32,
    height: u32,
    config: FigureConfig,
    subplots: Vec<SubplotFrame>,
}

impl Figure {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(width, height, FigureConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: FigureConfig) -> Self {
        Self {
            width,
            height,
            config,
            subplots: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn config(&self) -> &FigureConfig {
        &self.config
    }

    pub fn subplots(&self) -> &[SubplotFrame] {
        &self.subplots
    }

    /// Appends a subplot occupying cell `position` of a `rows` x `cols` grid and makes it
    /// current. Cells are numbered left to right, then top to bottom, from 0.
    pub fn add_subplot(&mut self, rows: u32, cols: u32, position: u32) -> Result<&mut SubplotFrame> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidGrid { rows, cols });
        }
        if u64::from(position) >= u64::from(rows) * u64::from(cols) {
            return Err(Error::SubplotOutOfRange {
                position,
                rows,
                cols,
            });
        }

        let width = self.width / cols;
        let height = self.height / rows;
        let frame = SubplotFrame {
            x_pos: (position % cols) * width,
            y_pos: (position / cols) * height,
            width,
            height,
            curves: Vec::new(),
            title: None,
            xlabel: None,
            ylabel: None,
        };
        tracing::debug!(
            rows,
            cols,
            position,
            x = frame.x_pos,
            y = frame.y_pos,
            "subplot added"
        );
        let idx = self.subplots.len();
        self.subplots.push(frame);
        Ok(&mut self.subplots[idx])
    }

    /// Adds a curve to the current subplot. Without an explicit color the curve takes the
    /// palette entry matching its index within the subplot.
    pub fn plot(
        &mut self,
        x: &[f64],
        y: &[f64],
        label: &str,
        color: Option<Color>,
    ) -> Result<&mut Self> {
        let Some(subplot) = self.subplots.last_mut() else {
            return Err(Error::NoSubplot);
        };
        let color = match color {
            Some(c) => c,
            None => palette_color(&self.config.palette, subplot.curves.len()),
        };
        subplot.curves.push(CurveData::new(x, y, label, color)?);
        tracing::debug!(label, len = x.len(), %color, "curve added");
        Ok(self)
    }

    /// The most recently added subplot.
    pub fn current_subplot_mut(&mut self) -> Option<&mut SubplotFrame> {
        self.subplots.last_mut()
    }

    /// Builds a fresh document from the current subplots.
    pub fn to_svg(&self) -> Element {
        let mut root = Element::svg();
        root.set_attr("width", self.width)
            .set_attr("height", self.height)
            .set_attr("viewBox", format!("0 0 {} {}", self.width, self.height));
        let figure = root.add_child(Element::group());
        for subplot in &self.subplots {
            figure.push(subplot.render(&self.config));
        }
        root
    }

    pub fn to_markup(&self) -> String {
        self.to_svg().to_markup()
    }

    /// Writes the figure to `path`. A figure without subplots is still written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if self.subplots.is_empty() {
            tracing::warn!(path = %path.display(), "figure has no subplots");
        }
        self.to_svg().save(path)?;
        tracing::debug!(path = %path.display(), subplots = self.subplots.len(), "figure saved");
        Ok(())
    }
}
