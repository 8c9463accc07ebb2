//! Drawing a [`Chart`] to an image file with `plotters`.

use std::ops::Range;
use std::path::Path;

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::chart::Chart;
use crate::errors::ChartError;

/// Line colours, assigned to series in drawing order.
const PALETTE: [RGBColor; 3] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
];

/// Radius of the point markers in pixels.
const MARKER_RADIUS: i32 = 4;

/// Image formats the renderer can produce.
///
/// Only vector output is offered: text is written as SVG `<text>` elements, so no
/// font rasteriser is needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    /// Scalable vector graphics.
    Svg,
}

impl ImageFormat {
    /// Pick the format from the extension of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::UnsupportedFormat`] for anything but `.svg`.
    pub fn from_path(path: &Path) -> Result<Self, ChartError> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "svg" => Ok(Self::Svg),
            _ => Err(ChartError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Render `chart` to `path` as SVG.
///
/// Nothing is written when the format or the data is rejected.
///
/// # Errors
///
/// Returns [`ChartError::UnsupportedFormat`] for extensions other than `.svg`,
/// [`ChartError::EmptyChart`] when there is nothing to plot and
/// [`ChartError::Render`] when the backend fails, for example on an unwritable path.
pub fn render(chart: &Chart, path: &Path) -> Result<(), ChartError> {
    let format = ImageFormat::from_path(path)?;
    let x_range = padded(chart.x_range()?);
    let y_range = padded(chart.y_range()?);

    let size = (chart.width, chart.height);
    match format {
        ImageFormat::Svg => draw(
            chart,
            SVGBackend::new(path, size).into_drawing_area(),
            x_range,
            y_range,
        )?,
    }
    info!(
        "wrote {} series to {}",
        chart.series.len(),
        path.display()
    );
    Ok(())
}

/// Widen a data range so markers at the extremes are not clipped.
fn padded(range: Range<f64>) -> Range<f64> {
    let span = range.end - range.start;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    (range.start - pad)..(range.end + pad)
}

/// Convert any backend error into a [`ChartError::Render`].
fn backend_error(error: impl std::fmt::Display) -> ChartError {
    ChartError::Render(error.to_string())
}

/// Draw every element of `chart` onto `root` and flush the backend.
fn draw<DB: DrawingBackend>(
    chart: &Chart,
    root: DrawingArea<DB, Shift>,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<(), ChartError> {
    root.fill(&WHITE).map_err(backend_error)?;

    let mut context = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(backend_error)?;

    {
        let mut mesh = context.configure_mesh();
        mesh.x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .axis_desc_style(("sans-serif", 18));
        if !chart.grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(backend_error)?;
    }

    for (index, series) in chart.series.iter().enumerate() {
        let color = PALETTE[index % PALETTE.len()];
        context
            .draw_series(LineSeries::new(
                series.points.iter().copied(),
                color.stroke_width(2),
            ))
            .map_err(backend_error)?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        context
            .draw_series(
                series
                    .points
                    .iter()
                    .map(|&point| Circle::new(point, MARKER_RADIUS, color.filled())),
            )
            .map_err(backend_error)?;
    }

    if chart.legend {
        context
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(backend_error)?;
    }

    root.present().map_err(backend_error)
}
