//! Bucket item behavior implementations.

use rill_registry::{BlockState, FluidId, vanilla_blocks};
use rill_utils::{BlockPos, Direction};

use crate::behavior::InteractionResult;
use crate::fluid::{FluidSimulation, fluid_level, fluid_state};
use crate::world::VoxelWorld;

/// What a bucket currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// An empty bucket.
    Empty,
    /// A bucket holding one source of a fluid.
    Filled(FluidId),
}

impl Bucket {
    /// Uses the bucket held in `context` on the clicked block.
    pub fn use_on(context: &mut UseOnContext<'_>) -> InteractionResult {
        match context.held {
            Bucket::Empty => EmptyBucketBehavior::new().use_on(context),
            Bucket::Filled(fluid) => FilledBucketBehavior::new(fluid).use_on(context),
        }
    }
}

/// A bucket used on a block face.
pub struct UseOnContext<'a> {
    /// The world being edited.
    pub world: &'a mut dyn VoxelWorld,
    /// The world's fluid simulation.
    pub simulation: &'a mut FluidSimulation,
    /// The block that was clicked.
    pub clicked_pos: BlockPos,
    /// The face of the clicked block that was hit.
    pub face: Direction,
    /// The bucket in hand. Updated when the bucket is filled or emptied.
    pub held: Bucket,
}

/// Behavior for filled bucket items (water bucket, lava bucket).
///
/// Places a source at the clicked block if it is replaceable, otherwise
/// against the clicked face, and starts it spreading.
pub struct FilledBucketBehavior {
    fluid: FluidId,
}

impl FilledBucketBehavior {
    /// Creates a new filled bucket behavior.
    #[must_use]
    pub const fn new(fluid: FluidId) -> Self {
        Self { fluid }
    }

    /// Places the fluid. Empties the held bucket on success.
    pub fn use_on(&self, context: &mut UseOnContext<'_>) -> InteractionResult {
        let registry = context.world.registry();
        let Some(fluid) = registry.fluids.get(self.fluid).cloned() else {
            log::debug!("Bucket holds unregistered fluid {:?}", self.fluid);
            return InteractionResult::Fail;
        };
        let Some(source) = fluid_state(registry, &fluid, 0) else {
            return InteractionResult::Fail;
        };

        // Determine placement position: if replaceable, place there; otherwise place adjacent
        let clicked_state = context.world.get_block_state(&context.clicked_pos);
        let place_pos = if context.world.registry().blocks.is_replaceable(&clicked_state) {
            context.clicked_pos
        } else {
            context.face.relative(&context.clicked_pos)
        };

        if !context.world.is_in_valid_bounds(&place_pos) {
            return InteractionResult::Fail;
        }

        let existing_state = context.world.get_block_state(&place_pos);
        if !context.world.registry().blocks.is_replaceable(&existing_state) {
            return InteractionResult::Fail;
        }

        if existing_state.is_of(&fluid.block) && fluid_level(&existing_state) == 0 {
            return InteractionResult::Pass;
        }

        if !context.world.set_block(place_pos, source) {
            return InteractionResult::Fail;
        }
        context
            .simulation
            .on_fluid_placed(&*context.world, place_pos, &fluid);
        context.held = Bucket::Empty;

        InteractionResult::Success
    }
}

/// Behavior for empty bucket items.
///
/// Picks up the clicked fluid cell if it is a source. Flowing cells cannot be
/// picked up.
pub struct EmptyBucketBehavior;

impl EmptyBucketBehavior {
    /// Creates a new empty bucket behavior.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Picks up the fluid. Fills the held bucket on success.
    pub fn use_on(&self, context: &mut UseOnContext<'_>) -> InteractionResult {
        let pos = context.clicked_pos;
        let state = context.world.get_block_state(&pos);
        let Some(fluid) = context.world.registry().fluids.fluid_of(&state).cloned() else {
            return InteractionResult::Fail;
        };
        if fluid_level(&state) != 0 {
            return InteractionResult::Fail;
        }

        if !context
            .world
            .set_block(pos, BlockState::new(vanilla_blocks::AIR))
        {
            return InteractionResult::Fail;
        }
        context.simulation.on_fluid_removed(&*context.world, pos, &fluid);
        context.held = Bucket::Filled(fluid.id);

        InteractionResult::Success
    }
}

impl Default for EmptyBucketBehavior {
    fn default() -> Self {
        Self::new()
    }
}
