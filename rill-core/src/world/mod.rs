//! The voxel world seam.
//!
//! The fluid engine never owns block state. It reads and writes cells through
//! [`VoxelWorld`], which the host server implements over its chunk storage.
//! [`MemoryWorld`] is a RAM-only implementation for tests and headless runs.

mod memory;
mod thread_guard;

use rill_registry::{BlockState, Registry};
use rill_utils::BlockPos;

pub use memory::MemoryWorld;
pub use thread_guard::WorldThread;

/// Block access the fluid engine needs from its host world.
pub trait VoxelWorld {
    /// The block and fluid registry of this world.
    fn registry(&self) -> &Registry;

    /// Returns true if `pos` is inside the buildable volume.
    fn is_in_valid_bounds(&self, pos: &BlockPos) -> bool;

    /// The state at `pos`. Out-of-bounds positions read as air.
    fn get_block_state(&self, pos: &BlockPos) -> BlockState;

    /// Writes `state` at `pos`. Returns false if nothing was written.
    fn set_block(&mut self, pos: BlockPos, state: BlockState) -> bool;

    /// Returns true if `pos` is in bounds and holds air.
    fn is_empty(&self, pos: &BlockPos) -> bool {
        self.is_in_valid_bounds(pos) && self.registry().blocks.is_air(&self.get_block_state(pos))
    }
}
