//! Scheduled tick types.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use rill_utils::BlockPos;

/// Identifies one scheduled tick for the lifetime of its queue.
///
/// Handles are handed out in scheduling order, so comparing two handles tells
/// which entry was queued first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickHandle(pub u64);

impl Display for TickHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A pending unit of work at a position.
///
/// Ticks are ordered by trigger time, then by the order they were scheduled
/// in. The payload never takes part in ordering or equality.
#[derive(Debug, Clone)]
pub struct ScheduledTick<T> {
    /// Data captured when the tick was scheduled.
    pub payload: T,
    /// The position the tick runs at.
    pub pos: BlockPos,
    /// The absolute game tick when this should fire.
    pub trigger_tick: u64,
    /// Tie-breaker for ticks sharing a `trigger_tick`. Lower values run first.
    pub sub_tick_order: u64,
}

impl<T> ScheduledTick<T> {
    /// Creates a new scheduled tick.
    pub const fn new(payload: T, pos: BlockPos, trigger_tick: u64, sub_tick_order: u64) -> Self {
        Self {
            payload,
            pos,
            trigger_tick,
            sub_tick_order,
        }
    }

    /// The handle this tick was scheduled under.
    #[must_use]
    pub const fn handle(&self) -> TickHandle {
        TickHandle(self.sub_tick_order)
    }
}

impl<T> PartialEq for ScheduledTick<T> {
    fn eq(&self, other: &Self) -> bool {
        self.trigger_tick == other.trigger_tick && self.sub_tick_order == other.sub_tick_order
    }
}

impl<T> Eq for ScheduledTick<T> {}

impl<T> PartialOrd for ScheduledTick<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ScheduledTick<T> {
    /// `BinaryHeap` is a max-heap, so the comparison is reversed to pop the
    /// earliest tick first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .trigger_tick
            .cmp(&self.trigger_tick)
            .then_with(|| other.sub_tick_order.cmp(&self.sub_tick_order))
    }
}
