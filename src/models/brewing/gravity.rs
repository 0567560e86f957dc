//! Specific gravity and Plato from sugar additions.

use twine_core::Model;
use uom::si::{
    f64::{Mass, Volume},
    mass::kilogram,
    volume::liter,
};

use super::{ConversionError, Conversions};

/// Converts Plato to specific gravity (20°C/20°C).
#[derive(Debug, Clone, Default)]
pub struct PlatoToSg {
    conversions: Conversions,
}

impl PlatoToSg {
    #[must_use]
    pub fn new(conversions: Conversions) -> Self {
        Self { conversions }
    }
}

impl Model for PlatoToSg {
    type Input = f64;
    type Output = f64;
    type Error = ConversionError;

    fn call(&self, plato: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.conversions.plato_to_sg_20c20c(*plato)
    }
}

/// Sucrose dissolved to make a volume of wort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SugarInWort {
    pub sugar: Mass,
    pub wort: Volume,
}

/// Estimates Plato from a sugar mass dissolved into a wort volume.
#[derive(Debug, Clone, Default)]
pub struct Dissolution {
    conversions: Conversions,
}

impl Dissolution {
    #[must_use]
    pub fn new(conversions: Conversions) -> Self {
        Self { conversions }
    }
}

impl Model for Dissolution {
    type Input = SugarInWort;
    type Output = f64;
    type Error = ConversionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.conversions
            .plato(input.sugar.get::<kilogram>(), input.wort.get::<liter>())
    }
}
