use rill_utils::Identifier;
use rustc_hash::FxHashMap;

use super::{FluidId, FluidType};
use crate::{BlockState, RegistryExt};

/// Lookup table of fluid types, by id and by the block that represents them.
pub struct FluidRegistry {
    by_id: FxHashMap<FluidId, FluidType>,
    by_block: FxHashMap<Identifier, FluidId>,
    allows_registering: bool,
}

impl FluidRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_id: FxHashMap::default(),
            by_block: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// Adds a fluid type.
    ///
    /// # Panics
    /// Panics if the registry has been frozen.
    pub fn register(&mut self, fluid: FluidType) {
        assert!(
            self.allows_registering,
            "Cannot register fluid {} after registry is frozen",
            fluid.block
        );
        self.by_block.insert(fluid.block.clone(), fluid.id);
        self.by_id.insert(fluid.id, fluid);
    }

    /// Looks up a fluid by id.
    #[must_use]
    pub fn get(&self, id: FluidId) -> Option<&FluidType> {
        self.by_id.get(&id)
    }

    /// Looks up the fluid represented by a block id.
    #[must_use]
    pub fn by_block(&self, block: &Identifier) -> Option<&FluidType> {
        self.by_block.get(block).and_then(|id| self.by_id.get(id))
    }

    /// The fluid held by a block state, if it is a fluid cell.
    #[must_use]
    pub fn fluid_of(&self, state: &BlockState) -> Option<&FluidType> {
        self.by_block(state.block())
    }

    /// Iterates over all registered fluids in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &FluidType> {
        self.by_id.values()
    }

    /// Number of registered fluids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl RegistryExt for FluidRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}

impl Default for FluidRegistry {
    fn default() -> Self {
        Self::new()
    }
}
