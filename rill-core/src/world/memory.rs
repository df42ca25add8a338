//! RAM-only world.
//!
//! Stores only non-air cells, grouped per chunk column, so a mostly empty
//! world costs nothing beyond the cells that were actually written.

use std::sync::Arc;

use rill_registry::{BlockState, Registry, vanilla_blocks};
use rill_utils::{BlockPos, ChunkPos, Identifier};
use rustc_hash::FxHashMap;

use super::VoxelWorld;

/// Sparse cell storage for one chunk column.
#[derive(Debug, Default)]
struct LevelChunk {
    /// Keyed by `(y - min_y) << 8 | z << 4 | x` in chunk-relative coordinates.
    blocks: FxHashMap<u32, BlockState>,
}

impl LevelChunk {
    fn index(relative_x: u32, relative_y: u32, relative_z: u32) -> u32 {
        debug_assert!(relative_x < 16);
        debug_assert!(relative_z < 16);
        (relative_y << 8) | (relative_z << 4) | relative_x
    }
}

/// An in-memory [`VoxelWorld`] with a fixed build height.
pub struct MemoryWorld {
    registry: Arc<Registry>,
    chunks: FxHashMap<ChunkPos, LevelChunk>,
    air: BlockState,
    min_y: i32,
    max_y: i32,
}

impl MemoryWorld {
    /// Tallest world the packed cell index can address.
    pub const MAX_HEIGHT: i32 = 4096;

    /// Creates an all-air world spanning `min_y..min_y + height`.
    ///
    /// # Panics
    /// Panics if `height` is outside `1..=MAX_HEIGHT` or `min_y + height`
    /// overflows `i32`.
    #[must_use]
    pub fn new(registry: Arc<Registry>, min_y: i32, height: i32) -> Self {
        assert!(
            (1..=Self::MAX_HEIGHT).contains(&height),
            "World height {height} must be in range 1..={}",
            Self::MAX_HEIGHT
        );
        let Some(max_y) = min_y.checked_add(height) else {
            panic!("World top {min_y} + {height} overflows");
        };

        Self {
            registry,
            chunks: FxHashMap::default(),
            air: BlockState::new(vanilla_blocks::AIR),
            min_y,
            max_y,
        }
    }

    /// One past the highest buildable y.
    #[must_use]
    pub const fn max_y(&self) -> i32 {
        self.max_y
    }

    fn locate(&self, pos: &BlockPos) -> Option<(ChunkPos, u32)> {
        if !self.is_in_valid_bounds(pos) {
            return None;
        }
        let relative_x = pos.x().rem_euclid(16) as u32;
        let relative_z = pos.z().rem_euclid(16) as u32;
        let relative_y = (pos.y() - self.min_y) as u32;
        Some((
            ChunkPos::containing(pos),
            LevelChunk::index(relative_x, relative_y, relative_z),
        ))
    }

    /// Fills the box between `from` and `to` (inclusive) with the default state of `block`.
    ///
    /// Returns the number of cells written; zero if `block` is unknown.
    pub fn fill(&mut self, from: BlockPos, to: BlockPos, block: &Identifier) -> usize {
        let Some(state) = self.registry.blocks.default_state(block) else {
            log::warn!("Cannot fill with unknown block {block}");
            return 0;
        };

        let mut written = 0;
        for x in from.x().min(to.x())..=from.x().max(to.x()) {
            for y in from.y().min(to.y())..=from.y().max(to.y()) {
                for z in from.z().min(to.z())..=from.z().max(to.z()) {
                    if self.set_block(BlockPos::new(x, y, z), state.clone()) {
                        written += 1;
                    }
                }
            }
        }
        written
    }

    /// Counts non-air cells of the given block type.
    #[must_use]
    pub fn count_blocks(&self, block: &Identifier) -> usize {
        self.chunks
            .values()
            .flat_map(|chunk| chunk.blocks.values())
            .filter(|state| state.is_of(block))
            .count()
    }

    /// Number of chunk columns holding at least one non-air cell.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

impl VoxelWorld for MemoryWorld {
    fn registry(&self) -> &Registry {
        &self.registry
    }

    fn is_in_valid_bounds(&self, pos: &BlockPos) -> bool {
        pos.y() >= self.min_y && pos.y() < self.max_y
    }

    fn get_block_state(&self, pos: &BlockPos) -> BlockState {
        self.locate(pos)
            .and_then(|(chunk_pos, index)| self.chunks.get(&chunk_pos)?.blocks.get(&index))
            .unwrap_or(&self.air)
            .clone()
    }

    fn set_block(&mut self, pos: BlockPos, state: BlockState) -> bool {
        let Some((chunk_pos, index)) = self.locate(&pos) else {
            return false;
        };

        if self.registry.blocks.is_air(&state) {
            if let Some(chunk) = self.chunks.get_mut(&chunk_pos) {
                chunk.blocks.remove(&index);
                if chunk.blocks.is_empty() {
                    self.chunks.remove(&chunk_pos);
                }
            }
        } else {
            self.chunks
                .entry(chunk_pos)
                .or_default()
                .blocks
                .insert(index, state);
        }
        true
    }
}
