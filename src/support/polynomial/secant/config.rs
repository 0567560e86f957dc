/// Tuning for the secant root search.
///
/// The defaults are empirical and were tuned for the brewing fits in this
/// crate, where roots and guesses are of order one to ten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantConfig {
    /// Absolute separation between successive guesses that counts as converged.
    pub precision: f64,

    /// Multiple of the initial guess separation beyond which the search is
    /// considered divergent.
    pub divergence_factor: f64,

    /// Optional cap on the number of secant steps.
    ///
    /// `None` leaves the divergence bound as the only limit.
    pub max_iters: Option<usize>,
}

impl Default for SecantConfig {
    fn default() -> Self {
        Self {
            precision: 1e-7,
            divergence_factor: 1e3,
            max_iters: None,
        }
    }
}
