//! SVG rendering of the price curve against the payoff curve.

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

use crate::curve::CurvePoint;
use crate::models::types::OptionType;

pub const X_LABEL: &str = "Underlying Stock Price ($)";
pub const Y_LABEL: &str = "Value ($)";
pub const PRICE_SERIES_LABEL: &str = "Option Price (Black–Scholes)";
pub const PAYOFF_SERIES_LABEL: &str = "Payoff at Expiry";

/// "Call Option Price vs Payoff at Expiry" or the put equivalent.
pub fn chart_title(option_type: OptionType) -> String {
    format!("{} Option Price vs Payoff at Expiry", option_type.label())
}

/// Writes the chart as an SVG file at `path`.
pub fn render_chart(
    path: &Path,
    size: (u32, u32),
    option_type: OptionType,
    prices: &[CurvePoint],
    payoffs: &[CurvePoint],
) -> Result<()> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    draw_chart(root, option_type, prices, payoffs)
        .with_context(|| format!("failed to render chart to {}", path.display()))?;
    tracing::info!(path = %path.display(), "chart saved");
    Ok(())
}

/// Renders the chart into an in-memory SVG document.
pub fn render_chart_to_string(
    size: (u32, u32),
    option_type: OptionType,
    prices: &[CurvePoint],
    payoffs: &[CurvePoint],
) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_chart(root, option_type, prices, payoffs)?;
    }
    Ok(svg)
}

fn draw_chart(
    root: DrawingArea<SVGBackend<'_>, Shift>,
    option_type: OptionType,
    prices: &[CurvePoint],
    payoffs: &[CurvePoint],
) -> Result<()> {
    let price_runs = finite_runs(prices, "price");
    let payoff_runs = finite_runs(payoffs, "payoff");

    let all_points = || price_runs.iter().chain(&payoff_runs).flatten();
    let (x_min, x_max) = padded_range(all_points().map(|p| p.0), 0.0);
    let (y_min, y_max) = padded_range(all_points().map(|p| p.1), 0.05);
    // keep zero on the value axis
    let y_min = y_min.min(0.0);

    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(chart_title(option_type), ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()?;

    // One series per run; only the first run gets a legend entry
    let price_style = BLUE.stroke_width(2);
    for (i, run) in price_runs.into_iter().enumerate() {
        let anno = chart.draw_series(LineSeries::new(run, price_style))?;
        if i == 0 {
            anno.label(PRICE_SERIES_LABEL)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], price_style));
        }
    }

    let payoff_style = GREEN.stroke_width(2);
    for (i, run) in payoff_runs.into_iter().enumerate() {
        let anno = chart.draw_series(DashedLineSeries::new(run, 10, 6, payoff_style))?;
        if i == 0 {
            anno.label(PAYOFF_SERIES_LABEL)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], payoff_style));
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Splits a curve into runs of consecutive finite samples.
///
/// NaN / infinite samples (from degenerate inputs) end the current run, so the
/// chart leaves a gap there instead of joining its neighbours.
fn finite_runs(points: &[CurvePoint], series: &str) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    let mut skipped = 0usize;
    for p in points {
        if p.spot.is_finite() && p.value.is_finite() {
            current.push((p.spot, p.value));
        } else {
            skipped += 1;
            if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    if skipped > 0 {
        tracing::warn!(series, skipped, runs = runs.len(), "gaps at non-finite points");
    }
    runs
}

/// Min/max of `values`, widened by `padding` times the span.
/// Falls back to `0..1` for empty input and widens a zero-width range.
fn padded_range(values: impl Iterator<Item = f64>, padding: f64) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if hi - lo <= f64::EPSILON {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * padding;
    (lo - pad, hi + pad)
}
