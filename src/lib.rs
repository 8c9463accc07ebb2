#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod chart;
pub mod errors;
pub mod model;
pub mod parameters;
pub mod reference;
pub mod render;
pub mod sweep;

pub use chart::{assemble_chart, Chart, Series};
pub use errors::{ChartError, ModelError};
pub use model::{
    axial_spring_constant, displacement, displacement_mm, displacements_mm, effective_area,
    DisplacementModel,
};
pub use parameters::{ActuatorConfig, ActuatorGeometry, Material};
pub use reference::ReferenceData;
pub use render::{render, ImageFormat};
pub use sweep::{default_sweep, pressure_sweep, to_kilopascals};
