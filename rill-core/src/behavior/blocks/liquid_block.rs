//! Liquid block behavior (water, lava).

use rill_registry::{BlockState, FluidType};
use rill_utils::BlockPos;

use crate::behavior::BlockBehaviour;
use crate::fluid::{FluidSimulation, fluid_level};
use crate::world::VoxelWorld;

/// Behavior for liquid blocks.
///
/// Placing a source starts it spreading. Removing any cell gives its
/// horizontal neighbours of the same fluid another chance to flow.
pub struct LiquidBlockBehavior {
    fluid: FluidType,
}

impl LiquidBlockBehavior {
    /// Creates a new liquid block behavior.
    #[must_use]
    pub const fn new(fluid: FluidType) -> Self {
        Self { fluid }
    }
}

impl BlockBehaviour for LiquidBlockBehavior {
    /// Only sources start spreading. Flowing cells are written by the spread
    /// step itself, which already scheduled them.
    fn on_place(
        &self,
        world: &dyn VoxelWorld,
        simulation: &mut FluidSimulation,
        pos: BlockPos,
        state: &BlockState,
    ) {
        if fluid_level(state) == 0 {
            simulation.on_fluid_placed(world, pos, &self.fluid);
        }
    }

    fn on_remove(
        &self,
        world: &dyn VoxelWorld,
        simulation: &mut FluidSimulation,
        pos: BlockPos,
        _state: &BlockState,
    ) {
        simulation.on_fluid_removed(world, pos, &self.fluid);
    }
}
