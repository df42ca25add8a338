//! Cross-fluid contact.

use rill_registry::{BlockState, FluidType, ReactionRule};
use rill_utils::{BlockPos, Identifier};

use crate::world::VoxelWorld;

/// The block a reaction produces, given the level of the resident cell.
///
/// Only the resident side matters: a resident source gives the rule's source
/// product, anything flowing gives its flowing product.
#[must_use]
pub const fn reaction_product(rule: &ReactionRule, resident_level: u8) -> &Identifier {
    if resident_level == 0 {
        &rule.source_product
    } else {
        &rule.flowing_product
    }
}

/// Replaces the resident fluid cell at `pos` with the product of `rule`.
///
/// The product is terminal: nothing is scheduled from it. Returns the written
/// state, or `None` if the product block is unknown or the write failed.
pub fn resolve<W: VoxelWorld + ?Sized>(
    world: &mut W,
    pos: BlockPos,
    incoming: &FluidType,
    incoming_level: u8,
    rule: &ReactionRule,
    resident_level: u8,
) -> Option<BlockState> {
    let product = reaction_product(rule, resident_level);
    let Some(state) = world.registry().blocks.default_state(product) else {
        log::debug!("Reaction product {product} at {pos} is not a registered block");
        return None;
    };

    if !world.set_block(pos, state.clone()) {
        return None;
    }
    log::debug!(
        "{} at level {incoming_level} met resident level {resident_level} at {pos}, left {product}",
        incoming.block
    );
    Some(state)
}
