//! Block registry and block states.

mod properties;
mod state;

use rill_utils::Identifier;
use rustc_hash::FxHashMap;

use crate::RegistryExt;

pub use properties::BlockStateProperties;
pub use state::BlockState;

/// Placement rules for a block type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockConfig {
    /// Empty space. Fluids only ever spread into air.
    pub is_air: bool,
    /// Can be overwritten by a placement (grass, fluids).
    pub replaceable: bool,
}

impl BlockConfig {
    /// Config for solid blocks.
    pub const SOLID: BlockConfig = BlockConfig {
        is_air: false,
        replaceable: false,
    };
    /// Config for air-like blocks.
    pub const AIR: BlockConfig = BlockConfig {
        is_air: true,
        replaceable: true,
    };
    /// Config for non-air blocks a placement may overwrite.
    pub const REPLACEABLE: BlockConfig = BlockConfig {
        is_air: false,
        replaceable: true,
    };
}

/// A registered block type.
#[derive(Debug, Clone)]
pub struct BlockEntry {
    /// The block id.
    pub key: Identifier,
    /// Placement rules.
    pub config: BlockConfig,
    /// Properties of the default state.
    pub default_properties: &'static [(&'static str, &'static str)],
}

impl BlockEntry {
    /// Builds the default state of this block.
    #[must_use]
    pub fn default_state(&self) -> BlockState {
        self.default_properties
            .iter()
            .fold(BlockState::new(self.key.clone()), |state, &(key, value)| {
                state.with_property(key, value)
            })
    }
}

/// Lookup table of block types by id.
pub struct BlockRegistry {
    by_key: FxHashMap<Identifier, BlockEntry>,
    allows_registering: bool,
}

impl BlockRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_key: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// Adds a block type.
    ///
    /// # Panics
    /// Panics if the registry has been frozen.
    pub fn register(&mut self, entry: BlockEntry) {
        assert!(
            self.allows_registering,
            "Cannot register block {} after registry is frozen",
            entry.key
        );
        self.by_key.insert(entry.key.clone(), entry);
    }

    /// Looks up a block type.
    #[must_use]
    pub fn get(&self, key: &Identifier) -> Option<&BlockEntry> {
        self.by_key.get(key)
    }

    /// The default state of `key`, or `None` for an unknown block.
    #[must_use]
    pub fn default_state(&self, key: &Identifier) -> Option<BlockState> {
        self.get(key).map(BlockEntry::default_state)
    }

    /// Unknown blocks are never air.
    #[must_use]
    pub fn is_air(&self, state: &BlockState) -> bool {
        self.get(state.block()).is_some_and(|entry| entry.config.is_air)
    }

    /// Unknown blocks are never replaceable.
    #[must_use]
    pub fn is_replaceable(&self, state: &BlockState) -> bool {
        self.get(state.block())
            .is_some_and(|entry| entry.config.replaceable)
    }

    /// Number of registered blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

impl RegistryExt for BlockRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}
