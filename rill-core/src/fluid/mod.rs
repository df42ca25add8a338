//! Fluid propagation engine.
//!
//! A fluid cell is an ordinary block whose `level` property says how many
//! spread steps separate it from the source that created it. Nothing about a
//! cell is cached: every step reads the world, writes the world and schedules
//! follow-up steps on the tick queue.
//!
//! - [`propagation`] - depth-bounded scheduling of spread steps
//! - [`spread`] - one spread step: fall first, otherwise horizontal fan-out
//! - [`reaction`] - what a fluid leaves behind when it meets another fluid
//! - [`hooks`] - placement and removal triggers
//! - [`simulation`] - the driver that owns the queue and the game clock

pub mod hooks;
pub mod propagation;
pub mod reaction;
pub mod simulation;
pub mod spread;

use rill_registry::{BlockState, BlockStateProperties, FluidType, Registry};

pub use propagation::{FluidTicks, PendingSpread, Propagation};
pub use simulation::{FluidSimulation, SpreadStats};
pub use spread::StepOutcome;

/// Reads the `level` of a fluid cell. Missing or malformed values read as 0.
#[must_use]
pub fn fluid_level(state: &BlockState) -> u8 {
    state
        .try_get_value::<u8>(BlockStateProperties::LEVEL)
        .unwrap_or(0)
}

/// Builds the block state for a cell of `fluid` at `level`.
///
/// Returns `None` if the fluid's block is not registered.
#[must_use]
pub fn fluid_state(registry: &Registry, fluid: &FluidType, level: u8) -> Option<BlockState> {
    registry
        .blocks
        .default_state(&fluid.block)
        .map(|state| state.with_property(BlockStateProperties::LEVEL, level))
}
