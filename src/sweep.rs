//! Evenly spaced pressure sweeps.

use ndarray::Array1;
use uom::si::{f64::Pressure, pressure::kilopascal, pressure::pascal};

use crate::errors::ModelError;

/// Number of points in the default 0 to 200 kPa sweep.
pub const SWEEP_POINTS: usize = 21;

/// Upper end of the default sweep in kilopascals.
pub const SWEEP_MAX_KPA: f64 = 200.0;

/// Spacing of the default sweep in kilopascals.
pub const SWEEP_STEP_KPA: f64 = 10.0;

/// Absolute slack, in steps, added to the interval count so an `end` that sits on
/// the grid up to rounding is still included.
const GRID_TOLERANCE: f64 = 1.0e-9;

/// Largest number of points a sweep may hold.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

/// Build an inclusive sweep from `start` to `end` in increments of `step`.
///
/// The result is expressed in pascals. `end` is included whenever it lies on the
/// grid (within rounding); otherwise the sweep stops at the last grid point below it.
///
/// # Examples
/// ```
/// use bellowsx::pressure_sweep;
/// use uom::si::{f64::Pressure, pressure::kilopascal};
///
/// let sweep = pressure_sweep(
///     Pressure::new::<kilopascal>(0.0),
///     Pressure::new::<kilopascal>(50.0),
///     Pressure::new::<kilopascal>(25.0),
/// )
/// .unwrap();
/// assert_eq!(sweep.to_vec(), vec![0.0, 25_000.0, 50_000.0]);
/// ```
///
/// # Errors
///
/// Returns [`ModelError::InvalidParameter`] when `step` is not positive, when `end`
/// lies below `start`, when any bound is not finite, or when the sweep would hold
/// more than [`MAX_SWEEP_POINTS`] points.
pub fn pressure_sweep(
    start: Pressure,
    end: Pressure,
    step: Pressure,
) -> Result<Array1<f64>, ModelError> {
    let start = start.get::<pascal>();
    let end = end.get::<pascal>();
    let step = step.get::<pascal>();

    if !(step.is_finite() && step > 0.0) {
        return Err(ModelError::invalid(
            "sweep step",
            step,
            "must be positive and finite",
        ));
    }
    if !start.is_finite() {
        return Err(ModelError::invalid("sweep start", start, "must be finite"));
    }
    if !(end.is_finite() && end >= start) {
        return Err(ModelError::invalid(
            "sweep end",
            end,
            "must be finite and not below the start",
        ));
    }

    let intervals = ((end - start) / step + GRID_TOLERANCE).floor();
    // `intervals` is a non-negative whole number or infinity; the cast saturates.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (intervals as usize)
        .checked_add(1)
        .filter(|&count| count <= MAX_SWEEP_POINTS)
        .ok_or_else(|| {
            ModelError::invalid(
                "sweep step",
                step,
                "too small for the span; the sweep would exceed the point limit",
            )
        })?;

    #[allow(clippy::cast_precision_loss)]
    let sweep = Array1::from_iter((0..count).map(|index| start + index as f64 * step));
    Ok(sweep)
}

/// The 0 to 200 kPa sweep in 10 kPa steps, in pascals.
#[must_use]
pub fn default_sweep() -> Array1<f64> {
    Array1::from_iter((0..SWEEP_POINTS).map(|index| grid_pressure(index).get::<pascal>()))
}

/// Pressure of the `index`-th point of the default sweep.
fn grid_pressure(index: usize) -> Pressure {
    #[allow(clippy::cast_precision_loss)]
    Pressure::new::<kilopascal>(index as f64 * SWEEP_STEP_KPA)
}

/// Convert a sweep in pascals to kilopascals for presentation.
#[must_use]
pub fn to_kilopascals(pressures_pa: &Array1<f64>) -> Array1<f64> {
    pressures_pa.mapv(|pressure| Pressure::new::<pascal>(pressure).get::<kilopascal>())
}
