//! Supporting utilities used by models.

pub mod constants;
pub mod constraint;
pub mod polynomial;
