//! Delayed tick queue.
//!
//! Every propagation step is a scheduled tick: a payload, a position and the
//! absolute game tick it fires on. Ticks never recurse into each other; a step
//! that wants more work schedules it here and returns.
//!
//! - [`ScheduledTick`] - a single pending entry
//! - [`LevelChunkTicks`] - per-chunk storage ordered by trigger time
//! - [`LevelTicks`] - world-level queue that merges all chunks in global order

mod chunk_ticks;
mod level_ticks;
mod scheduled_tick;

pub use chunk_ticks::LevelChunkTicks;
pub use level_ticks::LevelTicks;
pub use scheduled_tick::{ScheduledTick, TickHandle};
