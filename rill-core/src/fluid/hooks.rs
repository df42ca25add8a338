//! Placement and removal triggers.

use rill_registry::FluidType;
use rill_utils::{BlockPos, Direction};

use super::{Propagation, fluid_level};
use crate::world::VoxelWorld;

/// A source cell of `fluid` was placed at `pos`: start it spreading.
pub fn on_fluid_placed(propagation: &mut Propagation<'_>, pos: BlockPos, fluid: &FluidType) {
    propagation.schedule_spread(pos, 0, fluid);
}

/// A cell of `fluid` was removed from `pos`: re-arm every horizontal
/// neighbour holding the same fluid at its current level.
///
/// The cell above is left alone, and nothing guarantees the gap gets refilled.
/// Returns the number of neighbours that got a new step.
pub fn on_fluid_removed<W: VoxelWorld + ?Sized>(
    world: &W,
    propagation: &mut Propagation<'_>,
    pos: BlockPos,
    fluid: &FluidType,
) -> usize {
    let mut rearmed = 0;
    for direction in Direction::HORIZONTAL {
        let neighbour = direction.relative(&pos);
        let state = world.get_block_state(&neighbour);
        let same_fluid = world
            .registry()
            .fluids
            .fluid_of(&state)
            .is_some_and(|resident| resident.id == fluid.id);
        if !same_fluid {
            continue;
        }

        if propagation
            .schedule_spread(neighbour, fluid_level(&state), fluid)
            .is_some()
        {
            rearmed += 1;
        }
    }
    rearmed
}
