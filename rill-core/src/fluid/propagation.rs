//! Depth-bounded scheduling of spread steps.

use rill_registry::{FluidId, FluidType};
use rill_utils::BlockPos;

use crate::ticks::{LevelTicks, TickHandle};

/// A spread step waiting on the tick queue.
///
/// The level is captured when the step is scheduled and is not re-read from
/// the world when the step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingSpread {
    /// The fluid that spreads.
    pub fluid: FluidId,
    /// Level of the cell the step spreads from.
    pub level: u8,
}

/// The tick queue holding pending spread steps.
pub type FluidTicks = LevelTicks<PendingSpread>;

/// Schedules spread steps at the current game time.
///
/// This is the only place the depth bound is enforced.
pub struct Propagation<'a> {
    ticks: &'a mut FluidTicks,
    current_tick: u64,
}

impl<'a> Propagation<'a> {
    /// Wraps `ticks` for scheduling relative to `current_tick`.
    pub const fn new(ticks: &'a mut FluidTicks, current_tick: u64) -> Self {
        Self {
            ticks,
            current_tick,
        }
    }

    /// Schedules a spread step from `pos` at `level`, `fluid.step_delay_ticks`
    /// from now.
    ///
    /// Does nothing and returns `None` if `level` has reached the fluid's
    /// maximum level.
    pub fn schedule_spread(&mut self, pos: BlockPos, level: u8, fluid: &FluidType) -> Option<TickHandle> {
        if !fluid.can_spread_from(level) {
            log::trace!("{} at {pos} is terminal at level {level}", fluid.block);
            return None;
        }

        Some(self.ticks.schedule(
            pos,
            PendingSpread {
                fluid: fluid.id,
                level,
            },
            self.current_tick,
            fluid.step_delay_ticks,
        ))
    }
}
