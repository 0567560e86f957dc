//! Real polynomials in a single variable.
//!
//! A [`Polynomial`] is an ordered list of coefficients where `c[i]` multiplies
//! `x^i`. It supports evaluation and a single-root secant search, which is all
//! the fitted brewing models need.
//!
//! # Example
//!
//! ```
//! use brew_models::support::polynomial::Polynomial;
//!
//! // 4x² + 3x + 2
//! let poly = Polynomial::new().push(2.0).push(3.0).push(4.0);
//! assert_eq!(poly.eval(2.0), 24.0);
//!
//! // Solve 4x² + 3x + 2 = 12 near x = 1.
//! let x = poly.solve_for(12.0, 1.0, 2.0).unwrap();
//! assert!((poly.eval(x) - 12.0).abs() < 1e-9);
//! ```

mod secant;

pub use secant::{RootFindError, SecantConfig};

/// A real polynomial in a single variable.
///
/// Coefficients are stored in ascending degree order. Trailing zeros are kept,
/// so the degree is exactly `coeffs().len() - 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates the empty polynomial, which evaluates to zero everywhere.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the zero polynomial with `degree + 1` coefficients.
    #[must_use]
    pub fn zero(degree: usize) -> Self {
        Self {
            coeffs: vec![0.0; degree + 1],
        }
    }

    /// Appends `coeff` as the coefficient of `x^(degree + 1)`.
    #[must_use]
    pub fn push(mut self, coeff: f64) -> Self {
        self.coeffs.push(coeff);
        self
    }

    /// Returns the degree, or `None` for the empty polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Returns the coefficient of `x^n`, if present.
    #[must_use]
    pub fn coeff(&self, n: usize) -> Option<f64> {
        self.coeffs.get(n).copied()
    }

    /// Returns all coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluates the polynomial at `x` using Horner's scheme.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Returns a copy with `delta` added to the constant term.
    ///
    /// Shifting by `-target` turns "solve `P(x) = target`" into a root search.
    #[must_use]
    pub fn offset(&self, delta: f64) -> Self {
        let mut shifted = self.clone();
        match shifted.coeffs.first_mut() {
            Some(c0) => *c0 += delta,
            None => shifted.coeffs.push(delta),
        }
        shifted
    }

    /// Finds a root near two distinct initial guesses using the secant method.
    ///
    /// Uses the default [`SecantConfig`].
    ///
    /// # Errors
    ///
    /// Returns a [`RootFindError`] if the guesses are invalid, the iteration
    /// diverges, or a secant step would divide by zero.
    pub fn root_find(&self, x0: f64, x1: f64) -> Result<f64, RootFindError> {
        self.root_find_with(x0, x1, &SecantConfig::default())
    }

    /// Finds a root near two distinct initial guesses with explicit tuning.
    ///
    /// # Errors
    ///
    /// Returns a [`RootFindError`] if the guesses are invalid, the iteration
    /// diverges, a secant step would divide by zero, or the configured
    /// iteration cap is reached.
    pub fn root_find_with(
        &self,
        x0: f64,
        x1: f64,
        config: &SecantConfig,
    ) -> Result<f64, RootFindError> {
        secant::solve(|x| self.eval(x), x0, x1, config)
    }

    /// Finds `x` such that `P(x) = target`, starting from two guesses.
    ///
    /// # Errors
    ///
    /// See [`Polynomial::root_find`].
    pub fn solve_for(&self, target: f64, x0: f64, x1: f64) -> Result<f64, RootFindError> {
        self.offset(-target).root_find(x0, x1)
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coeffs: Vec<f64>) -> Self {
        Self { coeffs }
    }
}

impl<const N: usize> From<[f64; N]> for Polynomial {
    fn from(coeffs: [f64; N]) -> Self {
        Self {
            coeffs: coeffs.to_vec(),
        }
    }
}

impl FromIterator<f64> for Polynomial {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            coeffs: iter.into_iter().collect(),
        }
    }
}
