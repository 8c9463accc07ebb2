//! Reference datasets the analytical model is compared against.
//!
//! Both tables are fixed measurements of the default actuator from
//! [`ActuatorConfig::default`](crate::ActuatorConfig::default).

use serde::Serialize;

use crate::sweep::{SWEEP_POINTS, SWEEP_STEP_KPA};

/// Number of points in the experimental dataset.
pub const EXPERIMENTAL_POINTS: usize = 20;

/// Finite-element displacements in millimetres on the default sweep grid
/// (0 to 200 kPa, 10 kPa apart).
pub const SIMULATED_DISPLACEMENTS_MM: [f64; SWEEP_POINTS] = [
    0.0,
    0.816_857_373_8,
    1.633_714_748,
    2.450_572_121,
    3.267_429_495,
    4.084_286_869,
    4.901_144_243,
    5.718_001_617,
    6.534_858_99,
    7.351_716_364,
    8.168_573_738,
    8.985_431_112,
    9.802_288_486,
    10.619_145_86,
    11.436_003_23,
    12.252_860_61,
    13.069_717_98,
    13.886_575_35,
    14.703_432_73,
    15.520_290_1,
    16.337_147_48,
];

/// Pressures in kilopascals at which the physical actuator was measured.
pub const EXPERIMENTAL_PRESSURES_KPA: [f64; EXPERIMENTAL_POINTS] = [
    0.0, 20.0, 32.0, 42.0, 51.0, 61.0, 70.0, 80.0, 90.0, 100.0, 115.0, 120.0, 131.0, 142.0,
    149.0, 162.0, 171.0, 180.0, 191.0, 200.0,
];

/// Measured displacements in millimetres, paired with [`EXPERIMENTAL_PRESSURES_KPA`].
pub const EXPERIMENTAL_DISPLACEMENTS_MM: [f64; EXPERIMENTAL_POINTS] = [
    0.0, 1.0, 1.9, 2.3, 2.7, 3.4, 3.8, 4.2, 4.4, 4.8, 5.5, 5.7, 6.0, 6.5, 6.8, 7.2, 7.5, 7.8,
    8.3, 8.6,
];

/// Borrowed view of the simulated and experimental tables.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ReferenceData {
    /// Simulated displacements on the default sweep grid, in millimetres.
    pub simulated_mm: &'static [f64; SWEEP_POINTS],
    /// Experimental pressures in kilopascals.
    pub experimental_kpa: &'static [f64; EXPERIMENTAL_POINTS],
    /// Experimental displacements in millimetres.
    pub experimental_mm: &'static [f64; EXPERIMENTAL_POINTS],
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceData {
    /// Bundle the built-in tables.
    ///
    /// # Examples
    /// ```
    /// use bellowsx::ReferenceData;
    ///
    /// let reference = ReferenceData::new();
    /// assert_eq!(reference.simulated().count(), 21);
    /// assert_eq!(reference.experimental().count(), 20);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            simulated_mm: &SIMULATED_DISPLACEMENTS_MM,
            experimental_kpa: &EXPERIMENTAL_PRESSURES_KPA,
            experimental_mm: &EXPERIMENTAL_DISPLACEMENTS_MM,
        }
    }

    /// Simulated `(pressure_kpa, displacement_mm)` pairs on the default grid.
    pub fn simulated(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.simulated_mm.iter().enumerate().map(|(index, &mm)| {
            #[allow(clippy::cast_precision_loss)]
            let kpa = index as f64 * SWEEP_STEP_KPA;
            (kpa, mm)
        })
    }

    /// Experimental `(pressure_kpa, displacement_mm)` pairs.
    pub fn experimental(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.experimental_kpa
            .iter()
            .copied()
            .zip(self.experimental_mm.iter().copied())
    }
}
