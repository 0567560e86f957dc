//! Fermentation results from hydrometer readings.

use twine_core::Model;

use super::{ConversionError, Conversions};

/// Original and final specific gravity readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gravities {
    pub og: f64,
    pub fg: f64,
}

/// Quantities implied by an OG/FG pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FermentationResults {
    /// Plato reading implied by the final gravity, given the original gravity.
    pub current_plato: f64,

    /// Real extract, °P.
    pub real_extract: f64,

    /// Alcohol by volume, %.
    pub abv: f64,

    /// Alcohol by weight, %.
    pub abw: f64,
}

/// Derives fermentation results from original and final gravity.
///
/// Finds the Plato reading that the final gravity corresponds to, then
/// evaluates the extract and alcohol relations at the final gravity.
#[derive(Debug, Clone, Default)]
pub struct Fermentation {
    conversions: Conversions,
}

impl Fermentation {
    #[must_use]
    pub fn new(conversions: Conversions) -> Self {
        Self { conversions }
    }
}

impl Model for Fermentation {
    type Input = Gravities;
    type Output = FermentationResults;
    type Error = ConversionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let Gravities { og, fg } = *input;
        let c = &self.conversions;

        let current_plato = c.og_fg_to_plato(og, fg)?;

        Ok(FermentationResults {
            current_plato,
            real_extract: c.real_extract(fg, current_plato),
            abv: c.abv_from_sg_plato(fg, current_plato),
            abw: c.abw_from_sg_plato(fg, current_plato),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::polynomial::{RootFindError, SecantConfig};

    #[test]
    fn typical_ale() -> Result<(), ConversionError> {
        let model = Fermentation::default();
        let results = model.call(&Gravities { og: 1.050, fg: 1.010 })?;

        let c = Conversions::new();
        let current_plato = c.og_fg_to_plato(1.050, 1.010)?;

        assert_relative_eq!(results.current_plato, 6.401120954614951, epsilon = 1e-6);
        assert_relative_eq!(results.real_extract, c.real_extract(1.010, current_plato));
        assert_relative_eq!(results.abv, c.abv_from_sg_plato(1.010, current_plato));
        assert_relative_eq!(results.abw, c.abw_from_sg_plato(1.010, current_plato));

        Ok(())
    }

    #[test]
    fn search_failure_propagates() {
        let model = Fermentation::new(Conversions::with_secant_config(SecantConfig {
            max_iters: Some(1),
            ..SecantConfig::default()
        }));

        let result = model.call(&Gravities { og: 1.050, fg: 1.010 });
        assert!(matches!(
            result,
            Err(ConversionError::OgFgToPlato {
                source: RootFindError::MaxIters { .. },
                ..
            })
        ));
    }
}
