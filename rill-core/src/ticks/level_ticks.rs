//! World-level scheduled tick coordinator.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rill_utils::{BlockPos, ChunkPos};
use rustc_hash::FxHashMap;

use super::{LevelChunkTicks, ScheduledTick, TickHandle};

/// World-level queue of scheduled ticks.
///
/// # Architecture
///
/// - Each chunk column with pending work has a `LevelChunkTicks` in
///   `all_containers`, created on first schedule and dropped once drained
/// - `next_tick_for_container` tracks the earliest trigger tick per chunk so
///   idle chunks are skipped without touching their queues
/// - `tick()` merges the due heads of every chunk, so ticks fire in global
///   `(trigger_tick, sub_tick_order)` order no matter where they live
pub struct LevelTicks<T> {
    all_containers: FxHashMap<ChunkPos, LevelChunkTicks<T>>,
    next_tick_for_container: FxHashMap<ChunkPos, u64>,
    sub_tick_counter: u64,
}

impl<T> LevelTicks<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            all_containers: FxHashMap::default(),
            next_tick_for_container: FxHashMap::default(),
            sub_tick_counter: 0,
        }
    }

    /// Schedules `payload` at `pos` to fire at `current_tick + delay`.
    pub fn schedule(&mut self, pos: BlockPos, payload: T, current_tick: u64, delay: u32) -> TickHandle {
        let chunk_pos = ChunkPos::containing(&pos);
        let trigger_tick = current_tick + u64::from(delay);

        let sub_tick_order = self.sub_tick_counter;
        self.sub_tick_counter += 1;

        self.all_containers
            .entry(chunk_pos)
            .or_default()
            .schedule(ScheduledTick::new(payload, pos, trigger_tick, sub_tick_order));

        self.next_tick_for_container
            .entry(chunk_pos)
            .and_modify(|earliest| {
                if trigger_tick < *earliest {
                    *earliest = trigger_tick;
                }
            })
            .or_insert(trigger_tick);

        log::trace!("Scheduled tick {sub_tick_order} at {pos} for game tick {trigger_tick}");
        TickHandle(sub_tick_order)
    }

    /// Removes and returns up to `max_ticks` ticks due at or before
    /// `current_tick`, earliest first.
    ///
    /// Ticks left over because of the budget stay queued for the next call.
    pub fn tick(&mut self, current_tick: u64, max_ticks: usize) -> Vec<ScheduledTick<T>> {
        let chunks_to_tick: Vec<ChunkPos> = self
            .next_tick_for_container
            .iter()
            .filter(|(_, earliest)| **earliest <= current_tick)
            .map(|(pos, _)| *pos)
            .collect();

        // Min-heap over the due head of every chunk
        let mut merged_heap: BinaryHeap<(Reverse<(u64, u64)>, ChunkPos)> = chunks_to_tick
            .iter()
            .filter_map(|chunk_pos| {
                let head = self.all_containers.get(chunk_pos)?.peek()?;
                (head.trigger_tick <= current_tick)
                    .then_some((Reverse((head.trigger_tick, head.sub_tick_order)), *chunk_pos))
            })
            .collect();

        let mut result = Vec::new();
        while result.len() < max_ticks {
            let Some((_, chunk_pos)) = merged_heap.pop() else {
                break;
            };
            let Some(container) = self.all_containers.get_mut(&chunk_pos) else {
                continue;
            };
            let Some(tick) = container.poll_due(current_tick) else {
                continue;
            };
            result.push(tick);

            if let Some(next) = container.peek()
                && next.trigger_tick <= current_tick
            {
                merged_heap.push((Reverse((next.trigger_tick, next.sub_tick_order)), chunk_pos));
            }
        }

        for chunk_pos in chunks_to_tick {
            match self.all_containers.get(&chunk_pos).and_then(LevelChunkTicks::peek) {
                Some(next) => {
                    self.next_tick_for_container.insert(chunk_pos, next.trigger_tick);
                }
                None => {
                    self.next_tick_for_container.remove(&chunk_pos);
                    self.all_containers.remove(&chunk_pos);
                }
            }
        }

        if result.len() == max_ticks && self.has_due(current_tick) {
            log::warn!(
                "Tick budget of {max_ticks} exhausted at game tick {current_tick}, {} ticks pending",
                self.count()
            );
        }

        result
    }

    fn has_due(&self, current_tick: u64) -> bool {
        self.next_tick_for_container
            .values()
            .any(|earliest| *earliest <= current_tick)
    }

    /// The earliest trigger tick of any pending entry.
    #[must_use]
    pub fn next_trigger_tick(&self) -> Option<u64> {
        self.next_tick_for_container.values().min().copied()
    }

    /// Counts the pending ticks at `pos`.
    #[must_use]
    pub fn scheduled_at(&self, pos: &BlockPos) -> usize {
        self.all_containers
            .get(&ChunkPos::containing(pos))
            .map_or(0, |container| container.scheduled_at(pos))
    }

    /// Iterates over the pending ticks at `pos` in no particular order.
    pub fn pending_at<'a>(&'a self, pos: &'a BlockPos) -> impl Iterator<Item = &'a ScheduledTick<T>> {
        self.all_containers
            .get(&ChunkPos::containing(pos))
            .into_iter()
            .flat_map(LevelChunkTicks::iter)
            .filter(move |tick| tick.pos == *pos)
    }

    /// Returns the total number of scheduled ticks across all chunks.
    #[must_use]
    pub fn count(&self) -> usize {
        self.all_containers.values().map(LevelChunkTicks::count).sum()
    }

    /// Returns `true` if nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.next_tick_for_container.is_empty()
    }
}

impl<T> Default for LevelTicks<T> {
    fn default() -> Self {
        Self::new()
    }
}
