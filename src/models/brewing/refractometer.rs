//! Refractometer corrections.
//!
//! Once fermentation starts, alcohol skews refractometer readings, so a current
//! Brix reading only becomes meaningful together with the starting reading.

use std::convert::Infallible;

use twine_core::Model;

use super::Conversions;

/// Starting and current refractometer readings, both in °Brix (≈ °P).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefractometerReading {
    pub starting_brix: f64,
    pub current_brix: f64,
}

/// Quantities derived from a pair of refractometer readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefractometerResults {
    /// Current specific gravity.
    pub sg: f64,

    /// Refractive index at the current reading.
    pub refractive_index: f64,

    /// Real extract, °P.
    pub real_extract: f64,

    /// Alcohol by volume, %.
    pub abv: f64,

    /// Alcohol by weight, %.
    pub abw: f64,
}

/// Corrects refractometer readings taken during fermentation.
#[derive(Debug, Clone, Default)]
pub struct Refractometer {
    conversions: Conversions,
}

impl Refractometer {
    #[must_use]
    pub fn new(conversions: Conversions) -> Self {
        Self { conversions }
    }
}

impl Model for Refractometer {
    type Input = RefractometerReading;
    type Output = RefractometerResults;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let c = &self.conversions;
        let brix = input.current_brix;
        let sg = c.sg_from_starting_plato(input.starting_brix, brix);

        Ok(RefractometerResults {
            sg,
            refractive_index: c.refractive_index(brix),
            real_extract: c.real_extract(sg, brix),
            abv: c.abv_from_sg_plato(sg, brix),
            abw: c.abw_from_sg_plato(sg, brix),
        })
    }
}
