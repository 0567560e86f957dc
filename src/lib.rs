//! # Brew Models
//!
//! Brewing conversions (Plato, specific gravity, alcohol content, refractometer
//! corrections) built on empirically fitted polynomials.
//!
//! ## Crate layout
//!
//! - [`models`]: The brewing conversion service and thin [`twine_core::Model`]
//!   adapters over it.
//! - [`support`]: Supporting utilities used by models, including the
//!   [`Polynomial`](support::polynomial::Polynomial) type and its secant root finder.
//!
//! ## Example
//!
//! ```
//! use brew_models::models::brewing::Conversions;
//!
//! let conversions = Conversions::new();
//!
//! let plato = conversions.sg_to_plato_20c20c(1.048);
//! let sg = conversions.plato_to_sg_20c20c(plato).unwrap();
//!
//! assert!((sg - 1.048).abs() < 1e-6);
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
