mod chart_data;

pub use chart_data::*;

use anyhow::anyhow;
use itertools::Itertools;
use log::debug;
use plotters::{prelude::*, style::RGBColor};
use plotters_svg::SVGBackend;

const LINE_COLOR: RGBColor = RGBColor(255, 99, 132);

fn short_number(value: f64) -> String {
    match value {
        v if v >= 1_000_000.0 => format!("{:.2}mil", v / 1_000_000.0),
        v if v >= 1_000.0 => format!("{:.2}K", v / 1_000.0),
        v if v.fract() == 0.0 => format!("{v:.0}"),
        v => format!("{v:.2}"),
    }
}

/// y axis bounds with a little headroom so the line never sits on the frame.
fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    let (min, max) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .minmax_by(|a, b| a.total_cmp(b))
        .into_option()?;
    let pad = if max > min { (max - min) * 0.1 } else { max.abs().max(1.0) * 0.1 };
    // prices can't go below zero, but only clamp when the data agrees
    let low = if min >= 0.0 { (min - pad).max(0.0) } else { min - pad };
    Some((low, max + pad))
}

fn label_at(labels: &[String], x: f64) -> String {
    if x < 0.0 {
        return String::new();
    }
    labels.get(x.round() as usize).cloned().unwrap_or_default()
}

/// Draws the first dataset of `chart` as a line with one marker per sample.
/// Fails if there is nothing to draw.
pub fn draw_price_line_chart<DB>(backend: DB, chart: &ChartData, title: &str) -> anyhow::Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let dataset = chart.dataset().ok_or(anyhow!("no dataset"))?;
    if dataset.data.is_empty() {
        Err(anyhow!("no prices to draw"))?;
    }
    let (y_min, y_max) = value_range(&dataset.data).ok_or(anyhow!("prices are not finite"))?;
    let x_max = (dataset.data.len() - 1).max(1) as f64;
    debug!(
        "drawing {} points for {title}, y {y_min}..{y_max}",
        dataset.data.len()
    );

    let root = backend.into_drawing_area();
    root.fill(&RGBColor(16, 10, 18).mix(0.93))?;

    let mut builder = ChartBuilder::on(&root)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .margin(10)
        .caption(
            title,
            ("sans-serif", 20.0).into_font().color(&WHITE),
        )
        .build_cartesian_2d(0f64..x_max, y_min..y_max)?;

    let labels = &chart.labels;
    builder
        .configure_mesh()
        .label_style(&WHITE)
        .bold_line_style(RGBColor(200, 200, 200).mix(0.2))
        .light_line_style(RGBColor(200, 200, 200).mix(0.02))
        .x_desc("Date")
        .y_desc("Value")
        .x_labels(labels.len().clamp(2, 8))
        .x_label_formatter(&|x| label_at(labels, *x))
        .y_label_formatter(&|y| short_number(*y))
        .draw()?;

    let points: Vec<(f64, f64)> = dataset
        .data
        .iter()
        .enumerate()
        .map(|(i, value)| (i as f64, *value))
        .collect();
    builder
        .draw_series(LineSeries::new(points.iter().copied(), LINE_COLOR.stroke_width(2)))?
        .label(dataset.label.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR));
    builder.draw_series(
        points
            .iter()
            .map(|point| Circle::new(*point, 3, LINE_COLOR.filled())),
    )?;

    builder
        .configure_series_labels()
        .border_style(WHITE)
        .label_font(&WHITE)
        .draw()?;

    // To avoid the IO failure being ignored silently, we manually call the present function
    root.present()?;
    Ok(())
}

/// Renders the chart to an SVG document.
pub fn render_chart(chart: &ChartData, title: &str, size: (u32, u32)) -> anyhow::Result<String> {
    let mut buffer = String::new();
    {
        let backend = SVGBackend::with_string(&mut buffer, size);
        draw_price_line_chart(backend, chart, title)
            .map_err(|e| anyhow!("Failed to draw chart: {}", e))?;
    }
    Ok(buffer)
}
