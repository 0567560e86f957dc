//! Temperature-dependent water and hydrometer fits.

use std::convert::Infallible;

use twine_core::Model;
use uom::si::{
    f64::{MassDensity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    thermodynamic_temperature::degree_celsius,
};

use super::Conversions;

/// Density of pure water at a given temperature.
#[derive(Debug, Clone, Default)]
pub struct WaterDensity {
    conversions: Conversions,
}

impl WaterDensity {
    #[must_use]
    pub fn new(conversions: Conversions) -> Self {
        Self { conversions }
    }
}

impl Model for WaterDensity {
    type Input = ThermodynamicTemperature;
    type Output = MassDensity;
    type Error = Infallible;

    fn call(&self, temperature: &Self::Input) -> Result<Self::Output, Self::Error> {
        let kg_l = self
            .conversions
            .water_density_kg_l(temperature.get::<degree_celsius>());

        Ok(MassDensity::new::<kilogram_per_cubic_meter>(kg_l * 1e3))
    }
}

/// Additive specific gravity correction for a 15°C hydrometer.
///
/// Add the output to a reading taken at the input temperature.
#[derive(Debug, Clone, Default)]
pub struct HydrometerCorrection {
    conversions: Conversions,
}

impl HydrometerCorrection {
    #[must_use]
    pub fn new(conversions: Conversions) -> Self {
        Self { conversions }
    }
}

impl Model for HydrometerCorrection {
    type Input = ThermodynamicTemperature;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, temperature: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self
            .conversions
            .hydrometer_15c_correction(temperature.get::<degree_celsius>()))
    }
}
