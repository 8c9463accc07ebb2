//! Closed-form displacement model for corrugated-diaphragm actuators.
//!
//! The chamber stack is treated as a linear axial spring. Pressure acting on the
//! projected area of the mean diameter produces a force, and the displacement is
//! that force divided by the axial stiffness (Hooke's law, see
//! <https://en.wikipedia.org/wiki/Hooke%27s_law>).

use std::f64::consts::PI;

use log::debug;
use ndarray::Array1;
use uom::si::{
    f64::{Length, Pressure},
    length::meter,
    pressure::pascal,
};

use crate::errors::ModelError;
use crate::parameters::{ActuatorConfig, ActuatorGeometry};

/// Metres to millimetres.
const MILLIMETRES_PER_METRE: f64 = 1.0e3;

/// Axial spring constant `K_ax` of the chamber stack in newtons per metre.
///
/// `K_ax = E / (2 (1 - ν²)) · π D_m s³ / h³ · n_L / n_w · 1 / C_f`
///
/// # Errors
///
/// Returns [`ModelError::InvalidParameter`] when `config` fails validation.
pub fn axial_spring_constant(config: &ActuatorConfig) -> Result<f64, ModelError> {
    config.validate()?;
    let material = &config.material;
    let geometry = &config.geometry;

    let modulus = material.youngs_modulus.get::<pascal>();
    let nu = material.poisson_ratio;
    let diameter = geometry.mean_diameter.get::<meter>();
    let thickness = geometry.wall_thickness.get::<meter>();
    let height = geometry.corrugation_height.get::<meter>();

    let plate_modulus = modulus / (2.0 * (1.0 - nu.powi(2)));
    let section = PI * diameter * thickness.powi(3) / height.powi(3);
    let series = f64::from(material.longitudinal_wave_number) / f64::from(geometry.corrugation_count);

    Ok(plate_modulus * section * series / material.correction_factor)
}

/// Effective area `A_eff = π (D_m / 2)²` in square metres.
///
/// # Errors
///
/// Returns [`ModelError::InvalidParameter`] when `geometry` fails validation.
pub fn effective_area(geometry: &ActuatorGeometry) -> Result<f64, ModelError> {
    geometry.validate()?;
    let radius = geometry.mean_diameter.get::<meter>() / 2.0;
    Ok(PI * radius.powi(2))
}

/// Axial displacement produced by `pressure`.
///
/// # Examples
/// ```
/// use bellowsx::{displacement, ActuatorConfig};
/// use uom::si::{f64::Pressure, length::millimeter, pressure::kilopascal};
///
/// let config = ActuatorConfig::default();
/// let stroke = displacement(Pressure::new::<kilopascal>(100.0), &config).unwrap();
/// assert!((stroke.get::<millimeter>() - 5.3555).abs() < 1.0e-3);
/// ```
///
/// # Errors
///
/// Returns [`ModelError::InvalidParameter`] when `config` fails validation.
pub fn displacement(pressure: Pressure, config: &ActuatorConfig) -> Result<Length, ModelError> {
    let model = DisplacementModel::new(*config)?;
    Ok(model.displacement(pressure))
}

/// Displacement in millimetres for a pressure given in pascals.
///
/// # Errors
///
/// Returns [`ModelError::InvalidParameter`] when `config` fails validation.
pub fn displacement_mm(pressure_pa: f64, config: &ActuatorConfig) -> Result<f64, ModelError> {
    let model = DisplacementModel::new(*config)?;
    Ok(model.displacement_mm(pressure_pa))
}

/// Elementwise displacement in millimetres for pressures given in pascals.
///
/// The output has the same length and ordering as `pressures_pa`.
///
/// # Errors
///
/// Returns [`ModelError::InvalidParameter`] when `config` fails validation.
pub fn displacements_mm(
    pressures_pa: &Array1<f64>,
    config: &ActuatorConfig,
) -> Result<Array1<f64>, ModelError> {
    let model = DisplacementModel::new(*config)?;
    Ok(model.displacements_mm(pressures_pa))
}

/// A validated actuator model ready for repeated evaluation.
///
/// Construction validates the configuration and caches the compliance
/// `A_eff / K_ax`, so evaluating the model afterwards cannot fail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplacementModel {
    /// Configuration the model was built from.
    config: ActuatorConfig,
    /// Axial stiffness in newtons per metre.
    stiffness: f64,
    /// Effective pressurised area in square metres.
    area: f64,
}

impl DisplacementModel {
    /// Validate `config` and precompute the stiffness and effective area.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidParameter`] when `config` fails validation.
    pub fn new(config: ActuatorConfig) -> Result<Self, ModelError> {
        let stiffness = axial_spring_constant(&config)?;
        let area = effective_area(&config.geometry)?;
        debug!("actuator stiffness K_ax = {stiffness:.6e} N/m, A_eff = {area:.6e} m^2");
        Ok(Self {
            config,
            stiffness,
            area,
        })
    }

    /// Configuration the model was built from.
    #[must_use]
    pub fn config(&self) -> &ActuatorConfig {
        &self.config
    }

    /// Axial stiffness `K_ax` in newtons per metre.
    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    /// Effective area `A_eff` in square metres.
    #[must_use]
    pub fn effective_area(&self) -> f64 {
        self.area
    }

    /// Displacement per unit pressure in metres per pascal.
    #[must_use]
    pub fn compliance(&self) -> f64 {
        self.area / self.stiffness
    }

    /// Typed displacement for a typed pressure.
    #[must_use]
    pub fn displacement(&self, pressure: Pressure) -> Length {
        Length::new::<meter>(pressure.get::<pascal>() * self.compliance())
    }

    /// Displacement in millimetres for a pressure in pascals.
    #[must_use]
    pub fn displacement_mm(&self, pressure_pa: f64) -> f64 {
        pressure_pa * self.compliance() * MILLIMETRES_PER_METRE
    }

    /// Elementwise displacement in millimetres for pressures in pascals.
    #[must_use]
    pub fn displacements_mm(&self, pressures_pa: &Array1<f64>) -> Array1<f64> {
        let scale = self.compliance() * MILLIMETRES_PER_METRE;
        pressures_pa.mapv(|pressure| pressure * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::length::millimeter;
    use uom::si::pressure::kilopascal;

    /// Displacement at 100 kPa for the default actuator, captured from a reference run.
    const DISPLACEMENT_AT_100_KPA_MM: f64 = 5.355_525_970_458_983;

    #[test]
    fn stiffness_matches_hand_calculation() {
        let config = ActuatorConfig::default();
        let stiffness = axial_spring_constant(&config).expect("default config is valid");
        assert!((stiffness - 3_896.394_848_687_182).abs() < 1.0e-6);
    }

    #[test]
    fn effective_area_is_circle_of_mean_diameter() {
        let area = effective_area(&ActuatorGeometry::default()).expect("default geometry is valid");
        assert!((area - 2.086_724_380_330_68e-4).abs() < 1.0e-15);
    }

    #[test]
    fn regression_value_at_100_kpa() {
        let config = ActuatorConfig::default();
        let stroke = displacement_mm(100_000.0, &config).expect("default config is valid");
        assert!((stroke - DISPLACEMENT_AT_100_KPA_MM).abs() < 1.0e-9);

        let typed = displacement(Pressure::new::<kilopascal>(100.0), &config)
            .expect("default config is valid");
        assert!((typed.get::<millimeter>() - DISPLACEMENT_AT_100_KPA_MM).abs() < 1.0e-9);
    }

    #[test]
    fn zero_pressure_gives_zero_displacement() {
        let model = DisplacementModel::new(ActuatorConfig::default()).expect("valid");
        assert_eq!(model.displacement_mm(0.0), 0.0);
    }

    #[test]
    fn more_corrugations_are_softer() {
        let stiff = DisplacementModel::new(ActuatorConfig::default()).expect("valid");
        let mut config = ActuatorConfig::default();
        config.geometry.corrugation_count = 4;
        let soft = DisplacementModel::new(config).expect("valid");
        assert!((soft.stiffness() * 2.0 - stiff.stiffness()).abs() < 1.0e-9);
        assert!(soft.displacement_mm(1.0e5) > stiff.displacement_mm(1.0e5));
    }

    #[test]
    fn elementwise_preserves_order() {
        let model = DisplacementModel::new(ActuatorConfig::default()).expect("valid");
        let pressures = Array1::from(vec![2.0e5, 0.0, 5.0e4]);
        let strokes = model.displacements_mm(&pressures);
        assert_eq!(strokes.len(), 3);
        for (pressure, stroke) in pressures.iter().zip(strokes.iter()) {
            assert!((model.displacement_mm(*pressure) - stroke).abs() < 1.0e-12);
        }
    }

    #[test]
    fn invalid_config_is_rejected_before_dividing() {
        let mut config = ActuatorConfig::default();
        config.geometry.corrugation_height = Length::new::<meter>(0.0);
        assert!(matches!(
            displacement_mm(1.0e5, &config),
            Err(ModelError::InvalidParameter {
                parameter: "corrugation_height",
                ..
            })
        ));
    }
}
