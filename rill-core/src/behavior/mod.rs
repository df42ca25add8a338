//! Block and item behaviours.
//!
//! Turns generic world edits (a block placed, a block broken, a bucket used)
//! into the fluid simulation's placement and removal hooks.

pub mod blocks;
pub mod items;

use rill_registry::{BlockState, Registry};
use rill_utils::{BlockPos, Identifier};
use rustc_hash::FxHashMap;

use crate::fluid::FluidSimulation;
use crate::world::VoxelWorld;

pub use blocks::LiquidBlockBehavior;
pub use items::{Bucket, EmptyBucketBehavior, FilledBucketBehavior, UseOnContext};

/// Result of an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionResult {
    /// The interaction happened.
    Success,
    /// Nothing to do; the world is already in the requested state.
    Pass,
    /// The interaction was rejected.
    Fail,
}

/// Reactions of a block type to being placed or removed.
pub trait BlockBehaviour {
    /// Called after `state` was written at `pos`.
    fn on_place(
        &self,
        _world: &dyn VoxelWorld,
        _simulation: &mut FluidSimulation,
        _pos: BlockPos,
        _state: &BlockState,
    ) {
    }

    /// Called after `state` was removed from `pos`.
    fn on_remove(
        &self,
        _world: &dyn VoxelWorld,
        _simulation: &mut FluidSimulation,
        _pos: BlockPos,
        _state: &BlockState,
    ) {
    }
}

/// Behaviours by block id. Blocks without an entry do nothing.
pub struct BlockBehaviors {
    by_block: FxHashMap<Identifier, Box<dyn BlockBehaviour>>,
}

impl BlockBehaviors {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_block: FxHashMap::default(),
        }
    }

    /// Creates a table with a [`LiquidBlockBehavior`] for every registered fluid.
    #[must_use]
    pub fn with_fluids(registry: &Registry) -> Self {
        let mut behaviors = Self::new();
        for fluid in registry.fluids.iter() {
            behaviors.register(
                fluid.block.clone(),
                Box::new(LiquidBlockBehavior::new(fluid.clone())),
            );
        }
        behaviors
    }

    /// Sets the behaviour of `block`, replacing any previous one.
    pub fn register(&mut self, block: Identifier, behaviour: Box<dyn BlockBehaviour>) {
        self.by_block.insert(block, behaviour);
    }

    /// Dispatches a placement. Returns false if the block has no behaviour.
    pub fn on_block_placed(
        &self,
        world: &dyn VoxelWorld,
        simulation: &mut FluidSimulation,
        pos: BlockPos,
        state: &BlockState,
    ) -> bool {
        let Some(behaviour) = self.by_block.get(state.block()) else {
            return false;
        };
        behaviour.on_place(world, simulation, pos, state);
        true
    }

    /// Dispatches a removal of `state`. Returns false if the block has no behaviour.
    pub fn on_block_removed(
        &self,
        world: &dyn VoxelWorld,
        simulation: &mut FluidSimulation,
        pos: BlockPos,
        state: &BlockState,
    ) -> bool {
        let Some(behaviour) = self.by_block.get(state.block()) else {
            return false;
        };
        behaviour.on_remove(world, simulation, pos, state);
        true
    }
}

impl Default for BlockBehaviors {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rill_registry::fluid::vanilla;
    use rill_registry::vanilla_blocks;

    use super::*;
    use crate::fluid::fluid_state;
    use crate::world::MemoryWorld;

    #[test]
    fn test_dispatch_by_block() {
        let registry = Arc::new(Registry::new_vanilla());
        let behaviors = BlockBehaviors::with_fluids(&registry);
        let mut world = MemoryWorld::new(registry.clone(), 0, 16);
        let mut simulation = FluidSimulation::new();
        let pos = BlockPos::new(0, 1, 0);

        let stone = BlockState::new(vanilla_blocks::STONE);
        assert!(!behaviors.on_block_placed(&world, &mut simulation, pos, &stone));

        let lava = fluid_state(&registry, &vanilla::LAVA, 0).expect("lava");
        world.set_block(pos, lava.clone());
        assert!(behaviors.on_block_placed(&world, &mut simulation, pos, &lava));
        assert_eq!(simulation.pending_count(), 1);
    }
}
