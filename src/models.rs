//! Public brewing models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail; its public types are re-exported by the parent module.
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate to
//! the core API. A single `core` may be exposed through multiple adapters.

pub mod brewing;
