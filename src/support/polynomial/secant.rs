//! Secant-method root search.
//!
//! Starting from two guesses `(g0, g1)`, each step replaces the pair with
//! `(g1, g1 - (g1 - g0) * f(g1) / (f(g1) - f(g0)))`. The search converges when
//! successive guesses are within [`SecantConfig::precision`] of each other and
//! is abandoned once their separation grows past
//! [`SecantConfig::divergence_factor`] times the initial separation.
//!
//! Convergence is defined on guess separation, not on the residual `f(x)`.

mod config;
mod error;

pub use config::SecantConfig;
pub use error::RootFindError;

/// Runs the secant iteration on `f` from the guesses `x0` and `x1`.
pub(super) fn solve(
    f: impl Fn(f64) -> f64,
    x0: f64,
    x1: f64,
    config: &SecantConfig,
) -> Result<f64, RootFindError> {
    if !x0.is_finite() || !x1.is_finite() || x0 == x1 {
        return Err(RootFindError::InvalidGuesses { x0, x1 });
    }

    let limit = (x0 - x1).abs() * config.divergence_factor;
    let (mut g0, mut g1) = (x0, x1);
    let mut iters = 0;

    loop {
        let (f0, f1) = (f(g0), f(g1));
        let denominator = f1 - f0;
        if denominator == 0.0 {
            return Err(RootFindError::DivisionByZero { x0: g0, x1: g1 });
        }

        let next = g1 - (g1 - g0) * f1 / denominator;
        (g0, g1) = (g1, next);
        iters += 1;

        let separation = (g0 - g1).abs();
        if separation.is_nan() || separation > limit {
            return Err(RootFindError::Diverged {
                separation,
                limit,
                iters,
            });
        }

        if separation <= config.precision {
            tracing::debug!(root = g1, iters, "secant search converged");
            return Ok(g1);
        }

        if config.max_iters.is_some_and(|max| iters >= max) {
            return Err(RootFindError::MaxIters { separation, iters });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn converges_on_nonlinear_function() -> Result<(), RootFindError> {
        let root = solve(f64::cos, 1.0, 2.0, &SecantConfig::default())?;
        assert_relative_eq!(root, std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn exact_root_on_first_guess() -> Result<(), RootFindError> {
        // f(x1) == 0, so the first step lands on x1 and the separation drops to zero.
        let root = solve(|x| x - 2.0, 0.0, 2.0, &SecantConfig::default())?;
        assert_eq!(root, 2.0);
        Ok(())
    }

    #[test]
    fn rejects_invalid_guesses() {
        let config = SecantConfig::default();

        assert_eq!(
            solve(|x| x, 1.0, 1.0, &config),
            Err(RootFindError::InvalidGuesses { x0: 1.0, x1: 1.0 })
        );
        assert!(matches!(
            solve(|x| x, f64::NAN, 1.0, &config),
            Err(RootFindError::InvalidGuesses { .. })
        ));
        assert!(matches!(
            solve(|x| x, 0.0, f64::INFINITY, &config),
            Err(RootFindError::InvalidGuesses { .. })
        ));
    }

    #[test]
    fn non_finite_steps_diverge() {
        // Evaluation produces NaN once the guesses leave the domain of `ln`.
        let result = solve(|x: f64| x.ln() + 10.0, 0.5, 1.0, &SecantConfig::default());
        assert!(matches!(result, Err(RootFindError::Diverged { .. })));
    }

    #[test]
    fn divergence_factor_is_configurable() {
        // x² + 1 between 0 and 0.001: the first step lands near -1000.
        let f = |x: f64| x * x + 1.0;

        let strict = SecantConfig::default();
        let Err(RootFindError::Diverged { limit, .. }) = solve(f, 0.0, 0.001, &strict) else {
            panic!("expected divergence with the default bound");
        };
        assert_relative_eq!(limit, 1.0, epsilon = 1e-12);

        // A looser bound lets the search wander much longer; the cap stops it.
        let capped = SecantConfig {
            divergence_factor: 1e7,
            max_iters: Some(100),
            ..SecantConfig::default()
        };
        assert!(matches!(
            solve(f, 0.0, 0.001, &capped),
            Err(RootFindError::MaxIters { iters: 100, .. })
        ));
    }

    #[test]
    fn precision_is_configurable() -> Result<(), RootFindError> {
        let coarse = SecantConfig {
            precision: 1e-2,
            ..SecantConfig::default()
        };
        let root = solve(|x| x * x - 2.0, 1.0, 2.0, &coarse)?;
        assert_relative_eq!(root, std::f64::consts::SQRT_2, epsilon = 1e-2);
        Ok(())
    }
}
