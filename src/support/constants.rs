//! Physical constants used by brewing calculations.
//!
//! Densities are in kg/L and absorption in L/kg, matching the scalar units the
//! brewing formulas are fitted in.

/// Sucrose density, kg/L.
pub const SUCROSE_DENSITY_KG_L: f64 = 1.587;

/// Grain density, kg/L.
///
/// An experimental estimate rather than a tabulated value.
pub const GRAIN_DENSITY_KG_L: f64 = 0.963;

/// Liquid extract density, kg/L.
pub const LIQUID_EXTRACT_DENSITY_KG_L: f64 = 1.412;

/// Dry extract density, kg/L.
pub const DRY_EXTRACT_DENSITY_KG_L: f64 = SUCROSE_DENSITY_KG_L;

/// Liters of water absorbed by 1 kg of grain, L/kg.
pub const GRAIN_ABSORPTION_L_KG: f64 = 1.085;
