//! Single-panel chart primitives shared by the chart groups.

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{PlotError, Result};
use crate::analysis::stats::{Histogram, LinearFit};

type Panel<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Vertical reference line drawn over a histogram.
pub(super) struct Marker {
    label: String,
    x: f64,
    color: RGBColor,
}

impl Marker {
    pub(super) fn new(label: String, x: f64, color: RGBColor) -> Self {
        Self { label, x, color }
    }
}

/// Caption-only panel for groups with nothing to show.
fn empty_panel(area: &Panel<'_>, title: &str) -> Result<()> {
    area.draw(&Text::new(
        format!("{title}: no data"),
        (20, 20),
        ("sans-serif", 22).into_font(),
    ))
    .map_err(|e| PlotError::Drawing(e.to_string()))
}

/// Horizontal bars, first entry on top.
pub(super) fn horizontal_bars(
    area: &Panel<'_>,
    title: &str,
    x_label: &str,
    bars: &[(String, f64)],
    color: RGBColor,
) -> Result<()> {
    if bars.is_empty() {
        return empty_panel(area, title);
    }

    let n = bars.len();
    let x_max = bars.iter().map(|(_, v)| *v).fold(0.0, f64::max).max(1.0) * 1.1;
    let label_of = |value: &SegmentValue<usize>| match value {
        SegmentValue::CenterOf(row) if *row < n => bars[n - 1 - row].0.clone(),
        _ => String::new(),
    };

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(280)
        .build_cartesian_2d(0.0..x_max, (0..n).into_segmented())
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(n)
        .y_label_formatter(&label_of)
        .x_desc(x_label)
        .label_style(("sans-serif", 13))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(bars.iter().enumerate().map(|(rank, (_, value))| {
            let row = n - 1 - rank;
            let mut bar = Rectangle::new(
                [(0.0, SegmentValue::Exact(row)), (*value, SegmentValue::Exact(row + 1))],
                color.filled(),
            );
            bar.set_margin(2, 2, 0, 0);
            bar
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Histogram with optional vertical markers and a legend.
pub(super) fn histogram(
    area: &Panel<'_>,
    title: &str,
    x_label: &str,
    hist: &Histogram,
    color: RGBColor,
    markers: &[Marker],
) -> Result<()> {
    if hist.peak() == 0 {
        return empty_panel(area, title);
    }

    let y_max = hist.peak() as f64 * 1.1;
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(hist.min..hist.max, 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc("Count")
        .label_style(("sans-serif", 13))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(hist.buckets().map(|(start, end, count)| {
            let mut bar = Rectangle::new([(start, 0.0), (end, count as f64)], color.mix(0.8).filled());
            bar.set_margin(0, 0, 1, 1);
            bar
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for marker in markers {
        let line_color = marker.color;
        chart
            .draw_series(LineSeries::new(
                vec![(marker.x, 0.0), (marker.x, y_max)],
                line_color.stroke_width(2),
            ))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(marker.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_color.stroke_width(2)));
    }

    if !markers.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 14))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    Ok(())
}

/// Scatter plot with an optional least-squares line.
pub(super) fn scatter(
    area: &Panel<'_>,
    title: &str,
    (x_label, y_label): (&str, &str),
    points: &[(f64, f64)],
    fit: Option<LinearFit>,
    color: RGBColor,
) -> Result<()> {
    if points.is_empty() {
        return empty_panel(area, title);
    }

    let (x_min, x_max) = padded_range(points.iter().map(|p| p.0));
    let (y_min, y_max) = padded_range(points.iter().map(|p| p.1));

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .label_style(("sans-serif", 13))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(points.iter().map(|&p| Circle::new(p, 2, color.mix(0.3).filled())))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    if let Some(fit) = fit {
        chart
            .draw_series(LineSeries::new(
                vec![(x_min, fit.at(x_min)), (x_max, fit.at(x_max))],
                RED.stroke_width(2),
            ))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    Ok(())
}

/// Min/max of the values with 5% headroom on each side. A constant sample gets a unit span.
fn padded_range(values: impl Iterator<Item = f64> + Clone) -> (f64, f64) {
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.fold(f64::NEG_INFINITY, f64::max);
    let span = if max > min { max - min } else { 1.0 };
    (min - span * 0.05, max + span * 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_range() {
        let (lo, hi) = padded_range([0.0, 10.0].into_iter());
        assert!((lo + 0.5).abs() < 1e-9);
        assert!((hi - 10.5).abs() < 1e-9);

        let (lo, hi) = padded_range([3.0, 3.0].into_iter());
        assert!(lo < 3.0 && hi > 3.0);
    }
}
