//! Brewing conversion models.
//!
//! The computational core is [`Conversions`], which owns the fitted polynomials
//! and exposes every conversion as a plain method. The remaining types are thin
//! [`twine_core::Model`] adapters that bundle related conversions behind typed
//! inputs and outputs:
//!
//! - [`PlatoToSg`] and [`Dissolution`]: gravity from Plato, Plato from dissolved sugar
//! - [`Fermentation`]: results implied by hydrometer OG/FG readings
//! - [`Refractometer`]: results implied by refractometer Brix readings
//! - [`WaterDensity`] and [`HydrometerCorrection`]: temperature-dependent fits

mod core;
mod fermentation;
mod gravity;
mod refractometer;
mod water;

pub use self::core::{ConversionError, Conversions};
pub use fermentation::{Fermentation, FermentationResults, Gravities};
pub use gravity::{Dissolution, PlatoToSg, SugarInWort};
pub use refractometer::{Refractometer, RefractometerReading, RefractometerResults};
pub use water::{HydrometerCorrection, WaterDensity};
