//! Headless simulation run: seed the world, tick until the fluids settle.

use std::sync::Arc;

use rill_core::behavior::BlockBehaviors;
use rill_core::fluid::{FluidSimulation, SpreadStats, fluid_state};
use rill_core::world::{MemoryWorld, VoxelWorld};
use rill_registry::{FluidType, Registry, vanilla_blocks};
use rill_utils::BlockPos;

use crate::config::{ConfigError, RillConfig};

/// What a run left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Game ticks that passed.
    pub ticks: u64,
    /// Steps still queued when the run stopped.
    pub pending: usize,
    /// Simulation counters.
    pub stats: SpreadStats,
    /// Water cells in the world.
    pub water: usize,
    /// Lava cells in the world.
    pub lava: usize,
    /// Obsidian produced by reactions.
    pub obsidian: usize,
    /// Cobblestone produced by reactions.
    pub cobblestone: usize,
}

/// A seeded world plus its simulation.
pub struct Runner {
    world: MemoryWorld,
    simulation: FluidSimulation,
    max_ticks: u64,
}

impl Runner {
    /// Validates `config`, builds the world it describes and places its sources.
    pub fn new(config: &RillConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let registry = Arc::new(Registry::new_vanilla());
        let sources = config.resolve_sources(&registry)?;

        let mut world = MemoryWorld::new(registry.clone(), config.world.min_y, config.world.height);
        if let Some(floor_y) = config.floor_y {
            let written = lay_floor(&mut world, floor_y, &sources);
            log::debug!("Laid {written} floor blocks at y = {floor_y}");
        }

        let behaviors = BlockBehaviors::with_fluids(&registry);
        let mut simulation = FluidSimulation::with_max_steps_per_tick(config.simulation.max_steps_per_tick);
        for (pos, fluid) in &sources {
            let Some(state) = fluid_state(&registry, fluid, 0) else {
                continue;
            };
            if world.set_block(*pos, state.clone()) {
                behaviors.on_block_placed(&world, &mut simulation, *pos, &state);
                tracing::info!(%pos, fluid = %fluid.block, "Placed source");
            }
        }

        Ok(Self {
            world,
            simulation,
            max_ticks: config.simulation.max_ticks,
        })
    }

    /// Ticks until the queue drains or the tick limit is hit.
    pub fn run(&mut self) -> RunSummary {
        let ticks = self.simulation.run_until_idle(&mut self.world, self.max_ticks);
        let summary = self.summary(ticks);
        tracing::info!(
            ticks = summary.ticks,
            steps = summary.stats.steps,
            reactions = summary.stats.reactions,
            pending = summary.pending,
            "Simulation finished"
        );
        tracing::debug!(chunks = self.world.chunk_count(), "Chunks holding blocks");
        summary
    }

    fn summary(&self, ticks: u64) -> RunSummary {
        RunSummary {
            ticks,
            pending: self.simulation.pending_count(),
            stats: self.simulation.stats(),
            water: self.world.count_blocks(&vanilla_blocks::WATER),
            lava: self.world.count_blocks(&vanilla_blocks::LAVA),
            obsidian: self.world.count_blocks(&vanilla_blocks::OBSIDIAN),
            cobblestone: self.world.count_blocks(&vanilla_blocks::COBBLESTONE),
        }
    }

    /// The simulated world.
    #[must_use]
    pub const fn world(&self) -> &MemoryWorld {
        &self.world
    }
}

/// Fills a stone floor at `floor_y` covering the reach of every source.
fn lay_floor(world: &mut MemoryWorld, floor_y: i32, sources: &[(BlockPos, FluidType)]) -> usize {
    let Some(margin) = sources.iter().map(|(_, fluid)| i32::from(fluid.max_level) + 1).max() else {
        return 0;
    };
    let min_x = sources.iter().map(|(pos, _)| pos.x()).min().unwrap_or_default() - margin;
    let max_x = sources.iter().map(|(pos, _)| pos.x()).max().unwrap_or_default() + margin;
    let min_z = sources.iter().map(|(pos, _)| pos.z()).min().unwrap_or_default() - margin;
    let max_z = sources.iter().map(|(pos, _)| pos.z()).max().unwrap_or_default() + margin;

    world.fill(
        BlockPos::new(min_x, floor_y, min_z),
        BlockPos::new(max_x, floor_y, max_z),
        &vanilla_blocks::STONE,
    )
}
