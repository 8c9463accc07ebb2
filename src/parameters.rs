//! Material and geometric parameters describing a corrugated actuator.

use serde::Serialize;
use uom::si::{
    f64::{Length, Pressure},
    length::{meter, millimeter},
    pressure::{megapascal, pascal},
};

use crate::errors::ModelError;

/// Elastic properties of the actuator wall material.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Material {
    /// Young's modulus of the wall material.
    pub youngs_modulus: Pressure,
    /// Poisson's ratio, dimensionless.
    pub poisson_ratio: f64,
    /// Longitudinal wave number of the deformation mode.
    pub longitudinal_wave_number: u32,
    /// Empirical correction factor applied to the stiffness, dimensionless.
    pub correction_factor: f64,
}

impl Default for Material {
    /// A soft elastomer with `E = 25 MPa` and `ν = 0.45`.
    fn default() -> Self {
        Self {
            youngs_modulus: Pressure::new::<megapascal>(25.0),
            poisson_ratio: 0.45,
            longitudinal_wave_number: 1,
            correction_factor: 1.0,
        }
    }
}

impl Material {
    /// Check that the material constants describe a physical solid.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidParameter`] when the modulus or correction factor is
    /// not positive, the wave number is zero, or Poisson's ratio lies outside `(-1, 0.5)`.
    pub fn validate(&self) -> Result<(), ModelError> {
        let modulus = self.youngs_modulus.get::<pascal>();
        if !(modulus.is_finite() && modulus > 0.0) {
            return Err(ModelError::invalid(
                "youngs_modulus",
                modulus,
                "must be positive and finite",
            ));
        }
        if !(self.poisson_ratio > -1.0 && self.poisson_ratio < 0.5) {
            return Err(ModelError::invalid(
                "poisson_ratio",
                self.poisson_ratio,
                "must lie in the open interval (-1, 0.5)",
            ));
        }
        if self.longitudinal_wave_number == 0 {
            return Err(ModelError::invalid(
                "longitudinal_wave_number",
                0.0,
                "must be at least 1",
            ));
        }
        if !(self.correction_factor.is_finite() && self.correction_factor > 0.0) {
            return Err(ModelError::invalid(
                "correction_factor",
                self.correction_factor,
                "must be positive and finite",
            ));
        }
        Ok(())
    }
}

/// Dimensions of the corrugated chamber stack.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ActuatorGeometry {
    /// Number of corrugations (chambers) in series.
    pub corrugation_count: u32,
    /// Height of a single corrugation.
    pub corrugation_height: Length,
    /// Thickness of the actuator wall.
    pub wall_thickness: Length,
    /// Mean diameter of the corrugations.
    pub mean_diameter: Length,
}

impl Default for ActuatorGeometry {
    /// Two chambers, 7.5 mm tall, with a 1.6 mm wall on a 16.3 mm mean diameter.
    fn default() -> Self {
        Self {
            corrugation_count: 2,
            corrugation_height: Length::new::<millimeter>(7.5),
            wall_thickness: Length::new::<millimeter>(1.6),
            mean_diameter: Length::new::<millimeter>(16.3),
        }
    }
}

impl ActuatorGeometry {
    /// Check that every dimension is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidParameter`] naming the first non-positive dimension.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.corrugation_count == 0 {
            return Err(ModelError::invalid(
                "corrugation_count",
                0.0,
                "must be at least 1",
            ));
        }
        positive_length("corrugation_height", self.corrugation_height)?;
        positive_length("wall_thickness", self.wall_thickness)?;
        positive_length("mean_diameter", self.mean_diameter)?;
        Ok(())
    }
}

/// Reject lengths that are zero, negative or not finite.
fn positive_length(parameter: &'static str, length: Length) -> Result<(), ModelError> {
    let value = length.get::<meter>();
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ModelError::invalid(
            parameter,
            value,
            "must be positive and finite",
        ))
    }
}

/// Complete description of an actuator: wall material plus chamber geometry.
///
/// The configuration is built once and handed to the evaluator explicitly.
///
/// # Examples
/// ```
/// use bellowsx::ActuatorConfig;
///
/// let config = ActuatorConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.geometry.corrugation_count, 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ActuatorConfig {
    /// Wall material.
    pub material: Material,
    /// Chamber geometry.
    pub geometry: ActuatorGeometry,
}

impl ActuatorConfig {
    /// Create a configuration from its parts.
    #[must_use]
    pub const fn new(material: Material, geometry: ActuatorGeometry) -> Self {
        Self { material, geometry }
    }

    /// Validate both the material and the geometry.
    ///
    /// # Errors
    ///
    /// Propagates the first [`ModelError`] raised by [`Material::validate`] or
    /// [`ActuatorGeometry::validate`].
    pub fn validate(&self) -> Result<(), ModelError> {
        self.material.validate()?;
        self.geometry.validate()
    }
}
