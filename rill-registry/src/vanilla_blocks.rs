//! Vanilla block ids used by the fluid engine.
#![allow(missing_docs)]

use rill_utils::Identifier;

use crate::blocks::{BlockConfig, BlockEntry, BlockRegistry, BlockStateProperties};

pub const AIR: Identifier = Identifier::vanilla_static("air");
pub const CAVE_AIR: Identifier = Identifier::vanilla_static("cave_air");
pub const STONE: Identifier = Identifier::vanilla_static("stone");
pub const COBBLESTONE: Identifier = Identifier::vanilla_static("cobblestone");
pub const OBSIDIAN: Identifier = Identifier::vanilla_static("obsidian");
pub const GLASS: Identifier = Identifier::vanilla_static("glass");
pub const SHORT_GRASS: Identifier = Identifier::vanilla_static("short_grass");
pub const WATER: Identifier = Identifier::vanilla_static("water");
pub const LAVA: Identifier = Identifier::vanilla_static("lava");

const NO_PROPERTIES: &[(&str, &str)] = &[];
pub const FLUID_DEFAULTS: &[(&str, &str)] = &[(BlockStateProperties::LEVEL, "0")];

/// Registers every vanilla block above.
pub fn register_blocks(blocks: &mut BlockRegistry) {
    let entries = [
        (AIR, BlockConfig::AIR, NO_PROPERTIES),
        (CAVE_AIR, BlockConfig::AIR, NO_PROPERTIES),
        (STONE, BlockConfig::SOLID, NO_PROPERTIES),
        (COBBLESTONE, BlockConfig::SOLID, NO_PROPERTIES),
        (OBSIDIAN, BlockConfig::SOLID, NO_PROPERTIES),
        (GLASS, BlockConfig::SOLID, NO_PROPERTIES),
        (SHORT_GRASS, BlockConfig::REPLACEABLE, NO_PROPERTIES),
        (WATER, BlockConfig::REPLACEABLE, FLUID_DEFAULTS),
        (LAVA, BlockConfig::REPLACEABLE, FLUID_DEFAULTS),
    ];

    for (key, config, default_properties) in entries {
        blocks.register(BlockEntry {
            key,
            config,
            default_properties,
        });
    }
}
