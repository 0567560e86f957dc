use thiserror::Error;

use crate::support::{constraint::ConstraintError, polynomial::RootFindError};

/// Errors that can occur while evaluating a brewing conversion.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConversionError {
    /// A physical input is outside its meaningful range.
    #[error("invalid {quantity}")]
    InvalidInput {
        /// Name of the offending quantity.
        quantity: &'static str,

        #[source]
        source: ConstraintError,
    },

    /// No specific gravity was found for the requested Plato value.
    #[error("no specific gravity found for {plato} °P")]
    PlatoToSg {
        plato: f64,

        #[source]
        source: RootFindError,
    },

    /// No Plato value was found for the given original and final gravities.
    #[error("no Plato value found for og={og}, fg={fg}")]
    OgFgToPlato {
        og: f64,
        fg: f64,

        #[source]
        source: RootFindError,
    },
}

impl ConversionError {
    /// Returns a mapper that tags a constraint violation with the quantity name.
    pub(super) fn invalid(quantity: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidInput { quantity, source }
    }
}
