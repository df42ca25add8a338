//! # Rill Utils
//!
//! Shared value types for the rill crates: positions, directions and identifiers.

pub mod direction;
pub mod math;
pub mod types;

pub use direction::Direction;
pub use types::{BlockPos, ChunkPos, Identifier, IdentifierError};
