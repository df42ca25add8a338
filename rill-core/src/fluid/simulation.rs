//! The fluid simulation driver.

use rill_registry::FluidType;
use rill_utils::BlockPos;

use super::{FluidTicks, PendingSpread, Propagation, StepOutcome, hooks, spread};
use crate::ticks::{ScheduledTick, TickHandle};
use crate::world::{VoxelWorld, WorldThread};

/// Default cap on spread steps executed in one game tick.
pub const DEFAULT_MAX_STEPS_PER_TICK: usize = 65_536;

/// Running totals of what the simulation has done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpreadStats {
    /// Spread steps executed.
    pub steps: u64,
    /// Steps that fell into the cell below.
    pub falls: u64,
    /// Fluid cells created by horizontal spread.
    pub spreads: u64,
    /// Reaction products written.
    pub reactions: u64,
    /// Steps that did nothing because their fluid is unknown.
    pub skipped: u64,
}

impl SpreadStats {
    fn record(&mut self, outcome: StepOutcome) {
        self.steps += 1;
        match outcome {
            StepOutcome::Skipped => self.skipped += 1,
            StepOutcome::Fell => self.falls += 1,
            StepOutcome::Spread { placed, reacted } => {
                self.spreads += u64::from(placed);
                self.reactions += u64::from(reacted);
            }
        }
    }
}

/// Owns the pending spread steps and the game clock of one world.
///
/// All entry points must be called from the thread that created the
/// simulation; this is asserted in debug builds and the type is not `Send`.
pub struct FluidSimulation {
    ticks: FluidTicks,
    game_time: u64,
    max_steps_per_tick: usize,
    thread: WorldThread,
    stats: SpreadStats,
}

impl FluidSimulation {
    /// Creates an idle simulation at game time 0, bound to the calling thread.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_steps_per_tick(DEFAULT_MAX_STEPS_PER_TICK)
    }

    /// Creates a simulation that runs at most `max_steps_per_tick` steps per
    /// game tick. Steps over the cap run on later ticks.
    #[must_use]
    pub fn with_max_steps_per_tick(max_steps_per_tick: usize) -> Self {
        Self {
            ticks: FluidTicks::new(),
            game_time: 0,
            max_steps_per_tick: max_steps_per_tick.max(1),
            thread: WorldThread::current(),
            stats: SpreadStats::default(),
        }
    }

    fn propagation(&mut self) -> Propagation<'_> {
        Propagation::new(&mut self.ticks, self.game_time)
    }

    /// Schedules a spread step from `pos` at `level`.
    ///
    /// Returns `None` if `level` is already at the fluid's maximum.
    pub fn schedule_spread(&mut self, pos: BlockPos, level: u8, fluid: &FluidType) -> Option<TickHandle> {
        self.thread.assert_current();
        self.propagation().schedule_spread(pos, level, fluid)
    }

    /// Placement hook: a source of `fluid` now sits at `pos`.
    pub fn on_fluid_placed<W: VoxelWorld + ?Sized>(&mut self, _world: &W, pos: BlockPos, fluid: &FluidType) {
        self.thread.assert_current();
        log::trace!("{} placed at {pos}", fluid.block);
        hooks::on_fluid_placed(&mut self.propagation(), pos, fluid);
    }

    /// Removal hook: a cell of `fluid` was removed from `pos`.
    ///
    /// Returns the number of neighbours re-armed.
    pub fn on_fluid_removed<W: VoxelWorld + ?Sized>(&mut self, world: &W, pos: BlockPos, fluid: &FluidType) -> usize {
        self.thread.assert_current();
        let rearmed = hooks::on_fluid_removed(world, &mut self.propagation(), pos, fluid);
        log::trace!("{} removed at {pos}, re-armed {rearmed} neighbours", fluid.block);
        rearmed
    }

    /// Advances the clock by one game tick and runs every step due by then.
    ///
    /// Returns the number of steps executed.
    pub fn tick<W: VoxelWorld + ?Sized>(&mut self, world: &mut W) -> usize {
        self.thread.assert_current();
        self.game_time += 1;

        let mut executed = 0;
        // Zero-delay fluids can schedule work due on this very tick
        while executed < self.max_steps_per_tick {
            let due = self
                .ticks
                .tick(self.game_time, self.max_steps_per_tick - executed);
            if due.is_empty() {
                break;
            }
            executed += due.len();
            for tick in due {
                self.run_step(world, &tick);
            }
        }
        executed
    }

    fn run_step<W: VoxelWorld + ?Sized>(&mut self, world: &mut W, tick: &ScheduledTick<PendingSpread>) {
        let PendingSpread { fluid, level } = tick.payload;
        let Some(fluid) = world.registry().fluids.get(fluid).cloned() else {
            log::debug!("Skipping step at {}: fluid {:?} is not registered", tick.pos, fluid);
            self.stats.record(StepOutcome::Skipped);
            return;
        };

        log::trace!("Running step {} at {} level {level}", tick.handle(), tick.pos);
        let outcome = spread::step(world, &mut self.propagation(), tick.pos, level, &fluid);
        self.stats.record(outcome);
    }

    /// Ticks until no step is pending or `max_ticks` game ticks have passed.
    ///
    /// Stretches with nothing due are skipped in one jump and count towards
    /// `max_ticks`. Returns the number of game ticks that passed.
    pub fn run_until_idle<W: VoxelWorld + ?Sized>(&mut self, world: &mut W, max_ticks: u64) -> u64 {
        let start = self.game_time;
        let deadline = start.saturating_add(max_ticks);

        while let Some(next) = self.ticks.next_trigger_tick() {
            if next > deadline {
                self.game_time = deadline;
                break;
            }
            // Jump to just before the next due tick
            self.game_time = self.game_time.max(next.saturating_sub(1));
            if self.game_time >= deadline {
                break;
            }
            self.tick(world);
        }

        if !self.is_idle() {
            log::warn!(
                "Fluids still active after {max_ticks} ticks, {} steps pending",
                self.pending_count()
            );
        }
        self.game_time - start
    }

    /// Totals since creation.
    #[must_use]
    pub const fn stats(&self) -> SpreadStats {
        self.stats
    }

    /// Number of scheduled steps not yet run.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.ticks.count()
    }

    /// The pending step queue.
    #[must_use]
    pub const fn ticks(&self) -> &FluidTicks {
        &self.ticks
    }

    /// The current game tick.
    #[must_use]
    pub const fn game_time(&self) -> u64 {
        self.game_time
    }

    /// Returns true if no step is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.ticks.is_empty()
    }
}

impl Default for FluidSimulation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rill_registry::fluid::vanilla;
    use rill_registry::{
        BlockConfig, BlockEntry, BlockState, FluidId, Registry, RegistryExt, vanilla_blocks,
    };
    use rill_utils::Identifier;

    use super::*;
    use crate::fluid::{fluid_level, fluid_state};
    use crate::world::MemoryWorld;

    fn flat_world() -> MemoryWorld {
        let mut world = MemoryWorld::new(Arc::new(Registry::new_vanilla()), 0, 32);
        world.fill(
            BlockPos::new(-16, 0, -16),
            BlockPos::new(16, 0, 16),
            &vanilla_blocks::STONE,
        );
        world
    }

    #[test]
    fn test_step_fires_after_delay() {
        let mut world = flat_world();
        let mut sim = FluidSimulation::new();
        let pos = BlockPos::new(0, 1, 0);
        world.set_block(pos, fluid_state(world.registry(), &vanilla::WATER, 0).expect("water"));
        sim.on_fluid_placed(&world, pos, &vanilla::WATER);

        for _ in 0..4 {
            assert_eq!(sim.tick(&mut world), 0);
        }
        assert!(world.is_empty(&BlockPos::new(1, 1, 0)));

        assert_eq!(sim.tick(&mut world), 1);
        assert_eq!(sim.game_time(), 5);
        assert_eq!(fluid_level(&world.get_block_state(&BlockPos::new(1, 1, 0))), 1);
    }

    #[test]
    fn test_horizontal_reach_is_bounded() {
        let mut world = flat_world();
        let mut sim = FluidSimulation::new();
        let pos = BlockPos::new(0, 1, 0);
        world.set_block(pos, fluid_state(world.registry(), &vanilla::LAVA, 0).expect("lava"));
        sim.on_fluid_placed(&world, pos, &vanilla::LAVA);
        sim.run_until_idle(&mut world, 10_000);

        assert!(sim.is_idle());
        for x in 1..=3 {
            let state = world.get_block_state(&BlockPos::new(x, 1, 0));
            assert!(state.is_of(&vanilla_blocks::LAVA));
            assert_eq!(fluid_level(&state), x as u8);
        }
        assert!(world.is_empty(&BlockPos::new(4, 1, 0)));
        // Diamond of radius 3 around the source, source included
        assert_eq!(world.count_blocks(&vanilla_blocks::LAVA), 25);
    }

    #[test]
    fn test_stale_step_still_runs() {
        let mut world = flat_world();
        let mut sim = FluidSimulation::new();
        let pos = BlockPos::new(0, 1, 0);
        world.set_block(pos, fluid_state(world.registry(), &vanilla::WATER, 0).expect("water"));
        sim.on_fluid_placed(&world, pos, &vanilla::WATER);

        // Source is replaced before its step fires
        world.set_block(pos, BlockState::new(vanilla_blocks::STONE));
        sim.run_until_idle(&mut world, 1_000);

        assert!(world.get_block_state(&pos).is_of(&vanilla_blocks::STONE));
        assert_eq!(fluid_level(&world.get_block_state(&BlockPos::new(1, 1, 0))), 1);
    }

    #[test]
    fn test_budget_spills_into_next_tick() {
        let mut world = flat_world();
        let mut sim = FluidSimulation::with_max_steps_per_tick(2);
        for x in 0..5 {
            sim.schedule_spread(BlockPos::new(x * 3, 1, 0), 6, &vanilla::WATER);
        }

        sim.game_time = 4;
        assert_eq!(sim.tick(&mut world), 2);
        assert_eq!(sim.tick(&mut world), 2);
        assert_eq!(sim.tick(&mut world), 1);
        assert_eq!(sim.stats().steps, 5);
    }

    #[test]
    fn test_zero_delay_fluid_runs_within_one_tick() {
        let honey_block = Identifier::vanilla_static("honey");
        let honey = FluidType {
            id: FluidId(100),
            block: honey_block.clone(),
            max_level: 2,
            step_delay_ticks: 0,
            reaction: None,
        };
        let mut registry = Registry::new();
        vanilla_blocks::register_blocks(&mut registry.blocks);
        registry.blocks.register(BlockEntry {
            key: honey_block.clone(),
            config: BlockConfig::REPLACEABLE,
            default_properties: vanilla_blocks::FLUID_DEFAULTS,
        });
        registry.fluids.register(honey.clone());
        registry.freeze();

        let mut world = MemoryWorld::new(Arc::new(registry), 0, 8);
        world.fill(BlockPos::new(-4, 0, -4), BlockPos::new(4, 0, 4), &vanilla_blocks::STONE);
        let origin = BlockPos::new(0, 1, 0);
        world.set_block(origin, fluid_state(world.registry(), &honey, 0).expect("honey"));
        let mut sim = FluidSimulation::new();
        sim.on_fluid_placed(&world, origin, &honey);

        // The source and its four children all run on the first tick
        assert_eq!(sim.tick(&mut world), 5);
        assert!(sim.is_idle());
        assert_eq!(world.count_blocks(&honey_block), 13);
    }

    #[test]
    fn test_unknown_fluid_is_skipped() {
        let mut world = flat_world();
        let mut sim = FluidSimulation::new();
        let mut honey = vanilla::WATER.clone();
        honey.id = FluidId(100);
        sim.schedule_spread(BlockPos::new(0, 1, 0), 0, &honey);

        sim.run_until_idle(&mut world, 100);

        assert_eq!(sim.stats().skipped, 1);
        assert!(world.is_empty(&BlockPos::new(1, 1, 0)));
    }

    #[test]
    fn test_run_until_idle_respects_limit() {
        let mut world = flat_world();
        let mut sim = FluidSimulation::new();
        sim.schedule_spread(BlockPos::new(0, 1, 0), 0, &vanilla::LAVA);

        let elapsed = sim.run_until_idle(&mut world, 10);

        assert_eq!(elapsed, 10);
        assert_eq!(sim.pending_count(), 1);
        assert_eq!(sim.stats().steps, 0);
    }
}
