//! Brewing conversion formulas.
//!
//! Some conversions evaluate a fitted polynomial directly, some invert one with
//! a secant search, and the rest are closed-form relations between scalar
//! readings. Every operation is a pure function of its arguments and the fixed
//! fits held by [`Conversions`].

mod error;
mod fits;

pub use error::ConversionError;

use crate::support::{
    constants::SUCROSE_DENSITY_KG_L,
    constraint::{NonNegative, StrictlyPositive},
    polynomial::{Polynomial, SecantConfig},
};

use fits::Fits;

/// Guesses bracketing plausible brewing specific gravities.
const SG_GUESSES: (f64, f64) = (1.000, 1.050);

/// Guesses for the current Plato reading when inverting the refractometer fit.
const CURRENT_PLATO_GUESSES: (f64, f64) = (3.0, 5.0);

/// Current-Plato terms of the refractometer fit, ascending from `x¹`.
const CURRENT_PLATO_TERMS: [f64; 3] = [0.00574, 0.00003344, 0.000000086];

/// Brewing conversion service.
///
/// Holds the fixed polynomial fits, built once at construction, and the secant
/// tuning used by conversions that invert a fit. Instances are immutable and can
/// be shared freely across threads.
///
/// # Example
///
/// ```
/// use brew_models::models::brewing::Conversions;
///
/// let conversions = Conversions::new();
///
/// // 1 kg of sucrose dissolved to make 10 L of wort.
/// let plato = conversions.plato(1.0, 10.0).unwrap();
/// assert!((plato - 9.6433).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Conversions {
    fits: Fits,
    secant: SecantConfig,
}

impl Conversions {
    /// Creates a conversion service with the default secant tuning.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a conversion service with custom secant tuning.
    #[must_use]
    pub fn with_secant_config(secant: SecantConfig) -> Self {
        Self {
            fits: Fits::default(),
            secant,
        }
    }

    /// Returns the secant tuning used by inverted conversions.
    #[must_use]
    pub fn secant_config(&self) -> &SecantConfig {
        &self.secant
    }

    /// Estimates Plato from kilograms of dissolved sucrose and liters of wort.
    ///
    /// Sucrose and water volumes are assumed to add up to the wort volume.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidInput`] if the sugar mass is negative,
    /// the wort volume is not strictly positive, or the sugar alone would take
    /// up more than the wort volume.
    pub fn plato(&self, sugar_kg: f64, wort_l: f64) -> Result<f64, ConversionError> {
        let sugar_kg = NonNegative::new(sugar_kg)
            .map_err(ConversionError::invalid("sugar mass"))?
            .into_inner();
        let wort_l = StrictlyPositive::new(wort_l)
            .map_err(ConversionError::invalid("wort volume"))?
            .into_inner();

        let water_kg = NonNegative::new(wort_l - sugar_kg / SUCROSE_DENSITY_KG_L)
            .map_err(ConversionError::invalid("water mass"))?
            .into_inner();

        Ok(sugar_kg / (sugar_kg + water_kg) * 100.0)
    }

    /// Converts specific gravity (20°C/20°C) to Plato.
    #[must_use]
    pub fn sg_to_plato_20c20c(&self, sg: f64) -> f64 {
        self.fits.plato_from_sg_20c20c.eval(sg)
    }

    /// Converts Plato to specific gravity (20°C/20°C).
    ///
    /// Inverts the SG→Plato fit with a secant search started inside the
    /// brewing range `1.000..=1.050`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::PlatoToSg`] if the search fails.
    pub fn plato_to_sg_20c20c(&self, plato: f64) -> Result<f64, ConversionError> {
        let (x0, x1) = SG_GUESSES;
        self.fits
            .plato_from_sg_20c20c
            .offset(-plato)
            .root_find_with(x0, x1, &self.secant)
            .map_err(|source| {
                tracing::warn!(plato, %source, "plato to sg conversion failed");
                ConversionError::PlatoToSg { plato, source }
            })
    }

    /// Converts a final gravity to the Plato reading it implies, given the
    /// original gravity.
    ///
    /// This inverts [`Conversions::sg_from_starting_plato`] in its second
    /// argument, with the starting Plato taken from `og`. The searched cubic
    /// carries `- fg` in its constant term. This intentionally differs from the
    /// coefficient placement of the source fit, which puts the starting-Plato
    /// terms and `- fg` on `x¹` and converges to values that are not Plato
    /// readings.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::OgFgToPlato`] if the search fails.
    pub fn og_fg_to_plato(&self, og: f64, fg: f64) -> Result<f64, ConversionError> {
        let sp = self.sg_to_plato_20c20c(og);
        let [c1, c2, c3] = CURRENT_PLATO_TERMS;

        let poly = Polynomial::new()
            .push(starting_plato_term(sp) - fg)
            .push(c1)
            .push(c2)
            .push(c3);

        let (x0, x1) = CURRENT_PLATO_GUESSES;
        poly.root_find_with(x0, x1, &self.secant).map_err(|source| {
            tracing::warn!(og, fg, %source, "og/fg to plato conversion failed");
            ConversionError::OgFgToPlato { og, fg, source }
        })
    }

    /// Estimates ABV from the current gravity and a Brix (Plato) reading.
    ///
    /// `ABV = (277.8851 - 277.4·SG + 0.9956·B + 0.00523·B² + 0.000013·B³) · SG / 0.79`
    #[must_use]
    pub fn abv_from_sg_plato(&self, sg: f64, plato: f64) -> f64 {
        let extract = Polynomial::from([277.8851 - 277.4 * sg, 0.9956, 0.00523, 0.000013]);
        extract.eval(plato) * (sg / 0.79)
    }

    /// Estimates ABW from the current gravity and Plato.
    #[must_use]
    pub fn abw_from_sg_plato(&self, sg: f64, plato: f64) -> f64 {
        let ri = self.refractive_index(plato);
        1017.5596 - 277.4 * sg + ri * (937.8135 * ri - 1805.1228)
    }

    /// Gives the specific gravity from the starting and current Plato readings.
    #[must_use]
    pub fn sg_from_starting_plato(&self, starting_plato: f64, current_plato: f64) -> f64 {
        let [c1, c2, c3] = CURRENT_PLATO_TERMS;
        let cp = current_plato;

        starting_plato_term(starting_plato) + cp * (c1 + cp * (c2 + cp * c3))
    }

    /// Returns the refractive index of wort at the given Plato.
    #[must_use]
    pub fn refractive_index(&self, plato: f64) -> f64 {
        1.33302 + 0.001427193 * plato + 0.000005791157 * plato * plato
    }

    /// Corrects an apparent extract `plato` to the real extract using the
    /// current gravity `sg`.
    #[must_use]
    pub fn real_extract(&self, sg: f64, plato: f64) -> f64 {
        let ri = self.refractive_index(plato);
        194.5935 + 129.8 * sg + ri * (410.8815 * ri - 790.8732)
    }

    /// Returns the density of water in kg/L at `celsius`.
    #[must_use]
    pub fn water_density_kg_l(&self, celsius: f64) -> f64 {
        self.fits.water_density_vs_celsius.eval(celsius)
    }

    /// Returns the additive correction to a 15°C hydrometer reading taken at
    /// `celsius`.
    #[must_use]
    pub fn hydrometer_15c_correction(&self, celsius: f64) -> f64 {
        self.fits.hydrometer_15c_correction.eval(celsius) * 1e-3
    }
}

/// Starting-Plato part of the refractometer fit, including its constant term.
fn starting_plato_term(sp: f64) -> f64 {
    1.001843 - 0.002318474 * sp - 0.000007775 * sp * sp - 0.000000034 * sp * sp * sp
}
