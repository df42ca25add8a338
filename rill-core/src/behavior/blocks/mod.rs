//! Block behaviour implementations.

mod liquid_block;

pub use liquid_block::LiquidBlockBehavior;
