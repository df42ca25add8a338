//! # Rill Registry
//!
//! Static block and fluid data. Both registries are filled once at start-up,
//! frozen, and then only read.

pub mod blocks;
pub mod fluid;
pub mod vanilla_blocks;

pub use blocks::{BlockConfig, BlockEntry, BlockRegistry, BlockState, BlockStateProperties};
pub use fluid::{FluidId, FluidRegistry, FluidType, ReactionRule};

/// Shared behaviour of start-up registries.
pub trait RegistryExt {
    /// Stops accepting new entries.
    fn freeze(&mut self);
}

/// All static game data a world needs to run fluids.
pub struct Registry {
    /// Known blocks and their placement config.
    pub blocks: BlockRegistry,
    /// Known fluid types.
    pub fluids: FluidRegistry,
}

impl Registry {
    /// Creates an empty, unfrozen registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            blocks: BlockRegistry::new(),
            fluids: FluidRegistry::new(),
        }
    }

    /// Creates a frozen registry holding the vanilla blocks and fluids.
    #[must_use]
    pub fn new_vanilla() -> Self {
        let mut registry = Self::new();
        vanilla_blocks::register_blocks(&mut registry.blocks);
        fluid::vanilla::register_fluids(&mut registry.fluids);
        registry.freeze();
        log::debug!(
            "Vanilla registry ready: {} blocks, {} fluids",
            registry.blocks.len(),
            registry.fluids.len()
        );
        registry
    }
}

impl RegistryExt for Registry {
    fn freeze(&mut self) {
        self.blocks.freeze();
        self.fluids.freeze();
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
