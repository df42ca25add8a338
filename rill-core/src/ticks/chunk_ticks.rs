//! Per-chunk scheduled tick storage.

use std::collections::BinaryHeap;

use rill_utils::BlockPos;

use super::ScheduledTick;

/// Per-chunk priority queue of scheduled ticks.
///
/// Ticks are not deduplicated: scheduling the same position twice queues two
/// independent entries, each firing with the payload it was scheduled with.
pub struct LevelChunkTicks<T> {
    tick_queue: BinaryHeap<ScheduledTick<T>>,
}

impl<T> LevelChunkTicks<T> {
    /// Creates a new empty chunk tick container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_queue: BinaryHeap::new(),
        }
    }

    /// Queues a tick.
    pub fn schedule(&mut self, tick: ScheduledTick<T>) {
        self.tick_queue.push(tick);
    }

    /// Returns a reference to the next tick to fire, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&ScheduledTick<T>> {
        self.tick_queue.peek()
    }

    /// Removes and returns the next tick to fire.
    pub fn poll(&mut self) -> Option<ScheduledTick<T>> {
        self.tick_queue.pop()
    }

    /// Returns the next tick if it is due at `current_tick`.
    pub fn poll_due(&mut self, current_tick: u64) -> Option<ScheduledTick<T>> {
        if self.peek()?.trigger_tick <= current_tick {
            self.poll()
        } else {
            None
        }
    }

    /// Counts the pending ticks at `pos`.
    #[must_use]
    pub fn scheduled_at(&self, pos: &BlockPos) -> usize {
        self.tick_queue.iter().filter(|tick| tick.pos == *pos).count()
    }

    /// Returns the number of scheduled ticks in this chunk.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tick_queue.len()
    }

    /// Returns `true` if there are no scheduled ticks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tick_queue.is_empty()
    }

    /// Returns an iterator over all scheduled ticks in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduledTick<T>> {
        self.tick_queue.iter()
    }
}

impl<T> Default for LevelChunkTicks<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_and_poll() {
        let mut ticks: LevelChunkTicks<u32> = LevelChunkTicks::new();
        let pos = BlockPos::new(10, 64, 20);

        ticks.schedule(ScheduledTick::new(1, pos, 100, 0));
        assert_eq!(ticks.count(), 1);

        // Same position again is a second, independent entry
        ticks.schedule(ScheduledTick::new(2, pos, 200, 1));
        assert_eq!(ticks.count(), 2);
        assert_eq!(ticks.scheduled_at(&pos), 2);

        let polled = ticks.poll().expect("should have a tick");
        assert_eq!(polled.trigger_tick, 100);
        assert_eq!(polled.payload, 1);

        let polled = ticks.poll().expect("should have a second tick");
        assert_eq!(polled.payload, 2);
        assert!(ticks.is_empty());
    }

    #[test]
    fn test_ordering() {
        let mut ticks: LevelChunkTicks<u32> = LevelChunkTicks::new();

        ticks.schedule(ScheduledTick::new(1, BlockPos::new(0, 0, 0), 200, 0));
        ticks.schedule(ScheduledTick::new(2, BlockPos::new(1, 0, 0), 100, 1));
        ticks.schedule(ScheduledTick::new(3, BlockPos::new(2, 0, 0), 150, 2));

        // Should come out in order: 100, 150, 200
        assert_eq!(ticks.poll().expect("first").trigger_tick, 100);
        assert_eq!(ticks.poll().expect("second").trigger_tick, 150);
        assert_eq!(ticks.poll().expect("third").trigger_tick, 200);
    }

    #[test]
    fn test_poll_due() {
        let mut ticks: LevelChunkTicks<u32> = LevelChunkTicks::new();
        ticks.schedule(ScheduledTick::new(1, BlockPos::new(0, 0, 0), 50, 0));

        assert!(ticks.poll_due(49).is_none());
        assert_eq!(ticks.count(), 1);
        assert!(ticks.poll_due(50).is_some());
        assert!(ticks.poll_due(1000).is_none());
    }
}
