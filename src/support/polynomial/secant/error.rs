use thiserror::Error;

/// Errors that can occur during a secant root search.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RootFindError {
    /// The initial guesses are equal or not finite.
    #[error("initial guesses must be finite and distinct: x0={x0}, x1={x1}")]
    InvalidGuesses { x0: f64, x1: f64 },

    /// Both current guesses evaluate to the same value, so the secant is flat.
    #[error("secant step divides by zero: f({x0}) == f({x1})")]
    DivisionByZero {
        /// Older of the two guesses.
        x0: f64,

        /// Newer of the two guesses.
        x1: f64,
    },

    /// The guess separation exceeded the divergence bound or became non-finite.
    #[error("secant search diverged after {iters} steps: separation={separation}, limit={limit}")]
    Diverged {
        /// Separation between the last two guesses.
        separation: f64,

        /// Largest separation allowed by the configured divergence factor.
        limit: f64,

        /// Steps taken before divergence was detected.
        iters: usize,
    },

    /// The configured iteration cap was reached without convergence.
    #[error("secant search hit iteration limit: separation={separation}")]
    MaxIters { separation: f64, iters: usize },
}
