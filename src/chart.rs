//! Chart assembly: turns computed and reference data into labeled series.
//!
//! No numbers are computed here beyond axis extents. The resulting [`Chart`] is a
//! plain description that [`render`](crate::render) draws and `serde_json` can dump.

use std::ops::Range;

use ndarray::Array1;
use serde::Serialize;

use crate::errors::ChartError;
use crate::reference::ReferenceData;

/// Legend label of the closed-form series.
pub const ANALYTICAL_LABEL: &str = "Analytical";
/// Legend label of the finite-element series.
pub const SIMULATED_LABEL: &str = "Simulated";
/// Legend label of the measured series.
pub const EXPERIMENTAL_LABEL: &str = "Experimental";

/// Title shown above the plot.
pub const CHART_TITLE: &str = "Displacement vs Pressure for Linear Actuator";
/// Abscissa label.
pub const PRESSURE_AXIS: &str = "Pressure (kPa)";
/// Ordinate label.
pub const DISPLACEMENT_AXIS: &str = "Displacement (mm)";

/// One labeled line-with-markers series.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// `(x, y)` points in drawing order.
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Create a series from already paired points.
    #[must_use]
    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    /// Pair up parallel `x` and `y` sequences.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::MismatchedSeries`] when the sequences differ in length.
    pub fn from_xy(label: impl Into<String>, x: &[f64], y: &[f64]) -> Result<Self, ChartError> {
        let label = label.into();
        if x.len() != y.len() {
            return Err(ChartError::MismatchedSeries {
                label,
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        let points = x.iter().copied().zip(y.iter().copied()).collect();
        Ok(Self { label, points })
    }

    /// Number of points in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A single two-axis line chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Chart {
    /// Title drawn above the plotting area.
    pub title: String,
    /// Label of the horizontal axis.
    pub x_label: String,
    /// Label of the vertical axis.
    pub y_label: String,
    /// Whether to draw grid lines.
    pub grid: bool,
    /// Whether to draw a legend.
    pub legend: bool,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Series in drawing order.
    pub series: Vec<Series>,
}

impl Chart {
    /// Create an empty 800x600 chart with grid and legend enabled.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            grid: true,
            legend: true,
            width: 800,
            height: 600,
            series: Vec::new(),
        }
    }

    /// Append a series.
    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Look up a series by its legend label.
    #[must_use]
    pub fn series(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|series| series.label == label)
    }

    /// Extent of all finite x values.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::EmptyChart`] when no finite point exists.
    pub fn x_range(&self) -> Result<Range<f64>, ChartError> {
        self.extent(|&(x, _)| x)
    }

    /// Extent of all finite y values.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::EmptyChart`] when no finite point exists.
    pub fn y_range(&self) -> Result<Range<f64>, ChartError> {
        self.extent(|&(_, y)| y)
    }

    /// Min and max of one coordinate across every series.
    fn extent(&self, coordinate: impl Fn(&(f64, f64)) -> f64) -> Result<Range<f64>, ChartError> {
        self.series
            .iter()
            .flat_map(|series| series.points.iter())
            .map(coordinate)
            .filter(|value| value.is_finite())
            .fold(None, |bounds: Option<Range<f64>>, value| match bounds {
                None => Some(value..value),
                Some(range) => Some(range.start.min(value)..range.end.max(value)),
            })
            .ok_or(ChartError::EmptyChart)
    }
}

/// Assemble the comparison chart for one actuator.
///
/// `sweep_kpa` and `analytical_mm` are the sweep and the model output evaluated on
/// it. The simulated table shares that grid, the experimental table has its own.
///
/// # Examples
/// ```
/// use bellowsx::{assemble_chart, default_sweep, displacements_mm, to_kilopascals};
/// use bellowsx::{ActuatorConfig, ReferenceData};
///
/// let sweep = default_sweep();
/// let analytical = displacements_mm(&sweep, &ActuatorConfig::default()).unwrap();
/// let chart = assemble_chart(&to_kilopascals(&sweep), &analytical, &ReferenceData::new()).unwrap();
/// assert_eq!(chart.series.len(), 3);
/// ```
///
/// # Errors
///
/// Returns [`ChartError::MismatchedSeries`] when `analytical_mm` or the simulated
/// table does not have one value per sweep point.
pub fn assemble_chart(
    sweep_kpa: &Array1<f64>,
    analytical_mm: &Array1<f64>,
    reference: &ReferenceData,
) -> Result<Chart, ChartError> {
    let grid = sweep_kpa.to_vec();
    let mut chart = Chart::new(CHART_TITLE, PRESSURE_AXIS, DISPLACEMENT_AXIS);

    chart.push(Series::from_xy(
        ANALYTICAL_LABEL,
        &grid,
        &analytical_mm.to_vec(),
    )?);
    chart.push(Series::from_xy(
        SIMULATED_LABEL,
        &grid,
        reference.simulated_mm,
    )?);
    chart.push(Series::from_xy(
        EXPERIMENTAL_LABEL,
        reference.experimental_kpa,
        reference.experimental_mm,
    )?);

    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::{default_sweep, to_kilopascals};

    fn default_chart() -> Chart {
        let sweep = to_kilopascals(&default_sweep());
        let analytical = sweep.mapv(|kpa| kpa * 0.05);
        assemble_chart(&sweep, &analytical, &ReferenceData::new()).expect("chart assembles")
    }

    #[test]
    fn emits_three_labeled_series() {
        let chart = default_chart();
        let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![ANALYTICAL_LABEL, SIMULATED_LABEL, EXPERIMENTAL_LABEL]
        );
        assert_eq!(chart.series(ANALYTICAL_LABEL).map(Series::len), Some(21));
        assert_eq!(chart.series(SIMULATED_LABEL).map(Series::len), Some(21));
        assert_eq!(chart.series(EXPERIMENTAL_LABEL).map(Series::len), Some(20));
    }

    #[test]
    fn carries_titles_grid_and_legend() {
        let chart = default_chart();
        assert_eq!(chart.title, CHART_TITLE);
        assert_eq!(chart.x_label, PRESSURE_AXIS);
        assert_eq!(chart.y_label, DISPLACEMENT_AXIS);
        assert!(chart.grid);
        assert!(chart.legend);
    }

    #[test]
    fn ranges_cover_all_series() {
        let chart = default_chart();
        let x = chart.x_range().expect("data present");
        let y = chart.y_range().expect("data present");
        assert_eq!(x, 0.0..200.0);
        assert_eq!(y.start, 0.0);
        assert!((y.end - 16.337_147_48).abs() < 1.0e-12);
    }

    #[test]
    fn rejects_short_analytical_series() {
        let sweep = to_kilopascals(&default_sweep());
        let analytical = Array1::zeros(20);
        let error = assemble_chart(&sweep, &analytical, &ReferenceData::new())
            .expect_err("length mismatch is rejected");
        assert_eq!(
            error,
            ChartError::MismatchedSeries {
                label: ANALYTICAL_LABEL.to_string(),
                x_len: 21,
                y_len: 20,
            }
        );
    }

    #[test]
    fn rejects_sweep_off_the_simulated_grid() {
        let sweep = Array1::linspace(0.0, 200.0, 11);
        let analytical = Array1::zeros(11);
        let error = assemble_chart(&sweep, &analytical, &ReferenceData::new())
            .expect_err("simulated table needs the 21-point grid");
        assert!(matches!(
            error,
            ChartError::MismatchedSeries { ref label, .. } if label == SIMULATED_LABEL
        ));
    }

    #[test]
    fn empty_chart_has_no_extent() {
        let chart = Chart::new("t", "x", "y");
        assert_eq!(chart.x_range(), Err(ChartError::EmptyChart));
    }

    #[test]
    fn serialises_to_json() {
        let chart = default_chart();
        let json = serde_json::to_value(&chart).expect("chart serialises");
        assert_eq!(json["series"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["series"][2]["label"], EXPERIMENTAL_LABEL);
        assert_eq!(json["series"][2]["points"][1][0], 20.0);
    }
}
