use svgplot::render::{Figure, Plot, Result};
use svgplot::{Color, Element, point};

/// Basic shapes plus a two-rule stylesheet on a 400x300 canvas.
pub fn shapes() -> Element {
    let mut svg = Element::svg();
    svg.set_attr("width", 400).set_attr("height", 300);

    svg.add_child(Element::rect(10.0, 10.0, 100.0, 50.0))
        .set_attr("fill", Color::Blue)
        .set_attr("stroke", Color::Black)
        .set_attr("stroke-width", 2);
    svg.add_child(Element::circle(200.0, 100.0, 40.0))
        .set_attr("fill", Color::Red)
        .set_attr("stroke", Color::Black)
        .set_attr("stroke-width", 2);
    svg.add_child(Element::line(50.0, 200.0, 350.0, 200.0))
        .set_attr("stroke", Color::Green)
        .set_attr("stroke-width", 4);
    svg.add_child(Element::text(150.0, 280.0, "SVG Example"))
        .set_attr("font-family", "Arial")
        .set_attr("font-size", 24)
        .set_attr("fill", Color::Black);
    svg.add_child(Element::polygon([
        point(300.0, 50.0),
        point(350.0, 100.0),
        point(300.0, 150.0),
        point(250.0, 100.0),
    ]))
    .set_attr("fill", Color::Yellow)
    .set_attr("stroke", Color::Black)
    .set_attr("stroke-width", 2);

    svg.style(".shape")
        .set_attr("fill", "none")
        .set_attr("stroke", Color::Black);
    svg.style(".text")
        .set_attr("font-family", "Arial")
        .set_attr("font-size", "24px");
    svg
}

/// Sine as a line and cosine as markers over `[0, 10]`.
pub fn plot() -> Result<Plot> {
    let x: Vec<f64> = (0..=100u32).map(|i| f64::from(i) * 0.1).collect();
    let sin: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let cos: Vec<f64> = x.iter().map(|v| v.cos()).collect();

    let mut plt = Plot::default();
    plt.plot(&x, &sin, Some(Color::Blue))?
        .scatter(&x, &cos, Some(Color::Red))?;
    Ok(plt)
}

fn sawtooth(x: f64, period: f64) -> f64 {
    2.0 * (x / period - (0.5 + x / period).floor())
}

fn triangle(x: f64, period: f64) -> f64 {
    2.0 * sawtooth(x + period / 4.0, period).abs() - 1.0
}

/// Four stacked telemetry panels sharing a 20 second time axis.
pub fn figure() -> Result<Figure> {
    let period = std::f64::consts::TAU;
    let time: Vec<f64> = (0..200u32).map(|i| f64::from(i) * 0.1).collect();
    let altitude: Vec<f64> = time.iter().map(|t| 1000.0 * t.sin()).collect();
    let target = vec![1000.0; time.len()];
    let velocity: Vec<f64> = time.iter().map(|t| 1000.0 * t.cos()).collect();
    let saw: Vec<f64> = time
        .iter()
        .map(|&t| 500.0 * sawtooth(t, period) + 500.0)
        .collect();
    let tri: Vec<f64> = time
        .iter()
        .map(|&t| 500.0 * triangle(t, period) + 500.0)
        .collect();

    let mut fig = Figure::new(800, 800);
    fig.add_subplot(4, 1, 0)?;
    fig.plot(&time, &altitude, "Altitude (m)", Some(Color::Blue))?
        .plot(&time, &target, "Target Altitude", Some(Color::Red))?;
    fig.add_subplot(4, 1, 1)?;
    fig.plot(&time, &velocity, "Velocity (m/s)", Some(Color::Green))?;
    fig.add_subplot(4, 1, 2)?;
    fig.plot(&time, &saw, "Sawtooth Wave", Some(Color::Purple))?;
    fig.add_subplot(4, 1, 3)?.set_xlabel("time (s)");
    fig.plot(&time, &tri, "Triangle Wave", Some(Color::Orange))?;
    Ok(fig)
}
