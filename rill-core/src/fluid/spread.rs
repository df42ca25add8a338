//! One spread step.
//!
//! A step first tries to fall into the cell below. Only if that cell is not
//! empty does it fan out to the four horizontal neighbours, in the fixed
//! order east, west, south, north (`+x`, `-x`, `+z`, `-z`).

use rill_registry::FluidType;
use rill_utils::{BlockPos, Direction};

use super::{Propagation, fluid_level, fluid_state, reaction};
use crate::world::VoxelWorld;

/// What a single spread step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The fluid's block is unknown to the world; nothing was touched.
    Skipped,
    /// A level 1 cell was created directly below.
    Fell,
    /// The step fanned out horizontally.
    Spread {
        /// New fluid cells written.
        placed: u8,
        /// Neighbours turned into a reaction product.
        reacted: u8,
    },
}

/// Runs one spread step of `fluid` from `pos`, which is assumed to hold a
/// cell at `level`.
///
/// `pos` itself is never read, so a step scheduled before its cell was
/// overwritten still runs with the captured level.
pub fn step<W: VoxelWorld + ?Sized>(
    world: &mut W,
    propagation: &mut Propagation<'_>,
    pos: BlockPos,
    level: u8,
    fluid: &FluidType,
) -> StepOutcome {
    let below = pos.below();
    if world.is_empty(&below) {
        let Some(state) = fluid_state(world.registry(), fluid, 1) else {
            log::debug!("Skipping step at {pos}: {} is not a registered block", fluid.block);
            return StepOutcome::Skipped;
        };
        if world.set_block(below, state) {
            propagation.schedule_spread(below, 1, fluid);
        }
        log::trace!("{} fell from {pos} to {below}", fluid.block);
        return StepOutcome::Fell;
    }

    let next_level = level.saturating_add(1);
    let Some(next_state) = fluid_state(world.registry(), fluid, next_level) else {
        log::debug!("Skipping step at {pos}: {} is not a registered block", fluid.block);
        return StepOutcome::Skipped;
    };

    let mut placed = 0;
    let mut reacted = 0;
    for direction in Direction::HORIZONTAL {
        let target = direction.relative(&pos);

        if world.is_empty(&target) {
            if world.set_block(target, next_state.clone()) {
                propagation.schedule_spread(target, next_level, fluid);
                placed += 1;
            }
            continue;
        }

        let resident_state = world.get_block_state(&target);
        let Some(resident) = world
            .registry()
            .fluids
            .fluid_of(&resident_state)
            .map(|resident| resident.id)
        else {
            continue;
        };
        if resident == fluid.id {
            continue;
        }

        if let Some(rule) = fluid.reaction_with(resident) {
            let resident_level = fluid_level(&resident_state);
            if reaction::resolve(world, target, fluid, next_level, rule, resident_level).is_some() {
                reacted += 1;
            }
        }
    }

    log::trace!(
        "{} at {pos} level {level} spread to {placed} cells, {reacted} reactions",
        fluid.block
    );
    StepOutcome::Spread { placed, reacted }
}
