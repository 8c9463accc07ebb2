//! Error types produced while evaluating or plotting actuator models.

use thiserror::Error;

/// Error returned when a physical parameter cannot be used by the model.
///
/// # Examples
///
/// ```
/// use bellowsx::{ActuatorGeometry, ModelError};
///
/// let geometry = ActuatorGeometry {
///     corrugation_count: 0,
///     ..ActuatorGeometry::default()
/// };
/// let error = geometry.validate().expect_err("zero corrugations are rejected");
/// assert!(matches!(error, ModelError::InvalidParameter { parameter: "corrugation_count", .. }));
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelError {
    /// Returned when a parameter is outside its physically meaningful range.
    #[error("invalid {parameter} (received {value}): {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Rejected value, in SI units.
        value: f64,
        /// Description of the accepted range.
        reason: &'static str,
    },
}

impl ModelError {
    /// Shorthand for building an [`ModelError::InvalidParameter`].
    pub(crate) fn invalid(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            parameter,
            value,
            reason,
        }
    }
}

/// Error returned when assembling or rendering a chart.
#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    /// Returned when the x and y sequences of a series differ in length.
    #[error("series {label:?} has {x_len} x values but {y_len} y values")]
    MismatchedSeries {
        /// Label of the offending series.
        label: String,
        /// Number of x values supplied.
        x_len: usize,
        /// Number of y values supplied.
        y_len: usize,
    },
    /// Returned when a chart has no finite data to derive axis extents from.
    #[error("chart has no finite data points")]
    EmptyChart,
    /// Returned when the output path does not name a supported image format.
    #[error("unsupported chart format {0:?}; use .svg")]
    UnsupportedFormat(String),
    /// Returned when the drawing backend fails.
    #[error("failed to render chart: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_message_names_the_parameter() {
        let error = ModelError::invalid("wall_thickness", -1.0e-3, "must be positive");
        assert_eq!(
            error.to_string(),
            "invalid wall_thickness (received -0.001): must be positive"
        );
    }

    #[test]
    fn mismatched_series_message_reports_lengths() {
        let error = ChartError::MismatchedSeries {
            label: "Simulated".to_string(),
            x_len: 21,
            y_len: 20,
        };
        assert!(error.to_string().contains("21 x values but 20 y values"));
    }
}
