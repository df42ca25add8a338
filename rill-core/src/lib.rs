//! # Rill Core
//!
//! Voxel fluid propagation: water and lava spreading over a host-owned block
//! grid, driven by delayed, single-threaded scheduled ticks.
//!
//! - [`world`] - the host world seam and an in-memory implementation
//! - [`ticks`] - the delayed tick queue
//! - [`fluid`] - propagation scheduling, the spread step and reactions
//! - [`behavior`] - block and item event hooks feeding the simulation

pub mod behavior;
pub mod fluid;
pub mod ticks;
pub mod world;
