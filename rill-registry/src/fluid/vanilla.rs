//! Vanilla fluid definitions.

use crate::vanilla_blocks;

use super::{FluidId, FluidRegistry, FluidType, ReactionRule};

/// Water: reaches seven cells, steps every 5 ticks, never reacts.
pub const WATER: FluidType = FluidType {
    id: FluidId::WATER,
    block: vanilla_blocks::WATER,
    max_level: 7,
    step_delay_ticks: 5,
    reaction: None,
};

/// Lava: reaches three cells, steps every 30 ticks, hardens water it flows into.
pub const LAVA: FluidType = FluidType {
    id: FluidId::LAVA,
    block: vanilla_blocks::LAVA,
    max_level: 3,
    step_delay_ticks: 30,
    reaction: Some(ReactionRule {
        resident: FluidId::WATER,
        source_product: vanilla_blocks::OBSIDIAN,
        flowing_product: vanilla_blocks::COBBLESTONE,
    }),
};

/// Registers water and lava.
pub fn register_fluids(fluids: &mut FluidRegistry) {
    fluids.register(WATER);
    fluids.register(LAVA);
}
