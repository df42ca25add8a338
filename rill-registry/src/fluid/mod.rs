//! Fluid type registry.

#[allow(clippy::module_inception)]
mod fluid;
mod registry;
pub mod vanilla;

pub use fluid::{FluidId, FluidType, ReactionRule};
pub use registry::FluidRegistry;
