//! End-to-end propagation scenarios against an in-memory world.

use std::sync::Arc;

use rill_core::behavior::BlockBehaviors;
use rill_core::fluid::{FluidSimulation, fluid_level, fluid_state};
use rill_core::world::{MemoryWorld, VoxelWorld};
use rill_registry::fluid::vanilla;
use rill_registry::{BlockState, FluidType, Registry, vanilla_blocks};
use rill_utils::BlockPos;

const Y: i32 = 64;
const SETTLE_TICKS: u64 = 100_000;

fn world(min_y: i32, height: i32) -> MemoryWorld {
    MemoryWorld::new(Arc::new(Registry::new_vanilla()), min_y, height)
}

fn stone(world: &mut MemoryWorld, from: BlockPos, to: BlockPos) {
    world.fill(from, to, &vanilla_blocks::STONE);
}

/// Writes a source and fires the placement hook, like a world edit would.
fn place_source(world: &mut MemoryWorld, sim: &mut FluidSimulation, pos: BlockPos, fluid: &FluidType) {
    let state = fluid_state(world.registry(), fluid, 0).expect("fluid block is registered");
    world.set_block(pos, state);
    sim.on_fluid_placed(&*world, pos, fluid);
}

fn fluid_at(world: &MemoryWorld, pos: &BlockPos) -> Option<(FluidType, u8)> {
    let state = world.get_block_state(pos);
    let fluid = world.registry().fluids.fluid_of(&state)?.clone();
    Some((fluid, fluid_level(&state)))
}

#[test]
fn scenario_a_water_reaches_seven_cells() {
    let mut world = world(0, 128);
    // Floor under x = -1..=11, walls along z = ±1 and both ends
    stone(&mut world, BlockPos::new(-1, Y - 1, -1), BlockPos::new(11, Y - 1, 1));
    stone(&mut world, BlockPos::new(-1, Y, -1), BlockPos::new(11, Y, -1));
    stone(&mut world, BlockPos::new(-1, Y, 1), BlockPos::new(11, Y, 1));
    stone(&mut world, BlockPos::new(-1, Y, 0), BlockPos::new(-1, Y, 0));
    stone(&mut world, BlockPos::new(11, Y, 0), BlockPos::new(11, Y, 0));

    let mut sim = FluidSimulation::new();
    place_source(&mut world, &mut sim, BlockPos::new(0, Y, 0), &vanilla::WATER);
    sim.run_until_idle(&mut world, SETTLE_TICKS);
    assert!(sim.is_idle());

    for x in 1..=7 {
        let (fluid, level) = fluid_at(&world, &BlockPos::new(x, Y, 0)).expect("water reached");
        assert_eq!(fluid.id, vanilla::WATER.id);
        assert_eq!(i32::from(level), x);
    }
    for x in 8..=10 {
        assert!(world.is_empty(&BlockPos::new(x, Y, 0)), "x = {x} should stay dry");
    }
}

#[test]
fn scenario_b_shaft_fills_with_level_one() {
    // The world floor closes the shaft
    let mut world = world(0, 32);
    stone(&mut world, BlockPos::new(-1, 0, -1), BlockPos::new(1, 4, -1));
    stone(&mut world, BlockPos::new(-1, 0, 1), BlockPos::new(1, 4, 1));
    stone(&mut world, BlockPos::new(-1, 0, 0), BlockPos::new(-1, 4, 0));
    stone(&mut world, BlockPos::new(1, 0, 0), BlockPos::new(1, 4, 0));

    let mut sim = FluidSimulation::new();
    place_source(&mut world, &mut sim, BlockPos::new(0, 5, 0), &vanilla::WATER);
    sim.run_until_idle(&mut world, SETTLE_TICKS);

    for y in 0..5 {
        let (fluid, level) = fluid_at(&world, &BlockPos::new(0, y, 0)).expect("shaft filled");
        assert_eq!(fluid.id, vanilla::WATER.id);
        assert_eq!(level, 1, "cell at y = {y}");
    }
    assert_eq!(sim.stats().falls, 5);
}

#[test]
fn falls_reach_the_bottom_at_any_depth() {
    for depth in [1, 2, 9, 40, 300] {
        let mut world = world(0, depth + 1);
        let mut sim = FluidSimulation::new();
        place_source(&mut world, &mut sim, BlockPos::new(0, depth, 0), &vanilla::LAVA);
        sim.run_until_idle(&mut world, SETTLE_TICKS);

        for y in 0..depth {
            let (fluid, level) = fluid_at(&world, &BlockPos::new(0, y, 0)).expect("column filled");
            assert_eq!(fluid.id, vanilla::LAVA.id);
            assert_eq!(level, 1, "depth {depth}, y = {y}");
        }
        // The pool at the bottom spreads like any other flow
        let (_, edge) = fluid_at(&world, &BlockPos::new(2, 0, 0)).expect("pool at the bottom");
        assert_eq!(edge, 3);
        assert!(world.is_empty(&BlockPos::new(3, 0, 0)));
    }
}

#[test]
fn open_floor_flood_is_a_diamond() {
    let mut world = world(0, 128);
    stone(&mut world, BlockPos::new(-10, Y - 1, -10), BlockPos::new(10, Y - 1, 10));

    let mut sim = FluidSimulation::new();
    place_source(&mut world, &mut sim, BlockPos::new(0, Y, 0), &vanilla::WATER);
    sim.run_until_idle(&mut world, SETTLE_TICKS);

    for x in -9i32..=9 {
        for z in -9i32..=9 {
            let distance = x.abs() + z.abs();
            let cell = fluid_at(&world, &BlockPos::new(x, Y, z));
            if distance <= 7 {
                let (_, level) = cell.expect("inside reach");
                assert_eq!(i32::from(level), distance);
            } else {
                assert!(cell.is_none(), "({x}, {z}) is out of reach");
            }
        }
    }
    assert_eq!(world.count_blocks(&vanilla_blocks::WATER), 113);
}

#[test]
fn scenario_c_first_arrival_decides_the_product() {
    let mut world = world(0, 128);
    stone(&mut world, BlockPos::new(-2, Y - 1, -1), BlockPos::new(2, Y - 1, 1));
    stone(&mut world, BlockPos::new(-2, Y, -1), BlockPos::new(2, Y, -1));
    stone(&mut world, BlockPos::new(-2, Y, 1), BlockPos::new(2, Y, 1));
    stone(&mut world, BlockPos::new(-2, Y, 0), BlockPos::new(-2, Y, 0));
    stone(&mut world, BlockPos::new(2, Y, 0), BlockPos::new(2, Y, 0));

    let mut sim = FluidSimulation::new();
    let shared = BlockPos::new(0, Y, 0);
    place_source(&mut world, &mut sim, BlockPos::new(-1, Y, 0), &vanilla::LAVA);
    place_source(&mut world, &mut sim, BlockPos::new(1, Y, 0), &vanilla::WATER);
    sim.run_until_idle(&mut world, SETTLE_TICKS);

    // Water steps first and leaves a flowing cell, which lava then hardens
    assert!(world.get_block_state(&shared).is_of(&vanilla_blocks::COBBLESTONE));
    assert_eq!(sim.stats().reactions, 1);
}

#[test]
fn lava_reaching_still_water_source_leaves_obsidian() {
    let mut world = world(0, 128);
    stone(&mut world, BlockPos::new(-2, Y - 1, -1), BlockPos::new(2, Y - 1, 1));
    stone(&mut world, BlockPos::new(-2, Y, -1), BlockPos::new(2, Y, -1));
    stone(&mut world, BlockPos::new(-2, Y, 1), BlockPos::new(2, Y, 1));
    stone(&mut world, BlockPos::new(-2, Y, 0), BlockPos::new(-2, Y, 0));
    stone(&mut world, BlockPos::new(2, Y, 0), BlockPos::new(2, Y, 0));

    let mut sim = FluidSimulation::new();
    let water = BlockPos::new(1, Y, 0);
    // A source that was never armed stays put
    world.set_block(water, fluid_state(world.registry(), &vanilla::WATER, 0).expect("water"));
    place_source(&mut world, &mut sim, BlockPos::new(-1, Y, 0), &vanilla::LAVA);
    sim.run_until_idle(&mut world, SETTLE_TICKS);

    let (fluid, level) = fluid_at(&world, &BlockPos::new(0, Y, 0)).expect("lava flowed in");
    assert_eq!((fluid.id, level), (vanilla::LAVA.id, 1));
    assert!(world.get_block_state(&water).is_of(&vanilla_blocks::OBSIDIAN));
}

#[test]
fn scenario_d_flowing_water_becomes_cobblestone() {
    let mut world = world(0, 128);
    stone(&mut world, BlockPos::new(-4, Y - 1, -4), BlockPos::new(4, Y - 1, 4));

    let lava = BlockPos::new(0, Y, 0);
    let water = BlockPos::new(1, Y, 0);
    world.set_block(water, fluid_state(world.registry(), &vanilla::WATER, 3).expect("water"));
    world.set_block(lava, fluid_state(world.registry(), &vanilla::LAVA, 2).expect("lava"));

    let mut sim = FluidSimulation::new();
    sim.schedule_spread(lava, 2, &vanilla::LAVA);
    sim.run_until_idle(&mut world, SETTLE_TICKS);

    let product = world.get_block_state(&water);
    assert!(product.is_of(&vanilla_blocks::COBBLESTONE));
    assert!(!product.is_of(&vanilla_blocks::OBSIDIAN));
    // The other neighbours got terminal lava
    let (_, level) = fluid_at(&world, &BlockPos::new(-1, Y, 0)).expect("lava spread west");
    assert_eq!(level, 3);
    assert!(sim.is_idle());
}

#[test]
fn breaking_a_cell_lets_neighbours_flow_back() {
    let mut world = world(0, 128);
    stone(&mut world, BlockPos::new(-8, Y - 1, -8), BlockPos::new(8, Y - 1, 8));
    let behaviors = BlockBehaviors::with_fluids(world.registry());

    let mut sim = FluidSimulation::new();
    let source = BlockPos::new(0, Y, 0);
    let source_state = fluid_state(world.registry(), &vanilla::WATER, 0).expect("water");
    world.set_block(source, source_state.clone());
    assert!(behaviors.on_block_placed(&world, &mut sim, source, &source_state));
    sim.run_until_idle(&mut world, SETTLE_TICKS);

    let gap = BlockPos::new(1, Y, 0);
    let removed = world.get_block_state(&gap);
    world.set_block(gap, BlockState::new(vanilla_blocks::AIR));
    assert!(behaviors.on_block_removed(&world, &mut sim, gap, &removed));
    assert!(!sim.is_idle());
    sim.run_until_idle(&mut world, SETTLE_TICKS);

    let (fluid, level) = fluid_at(&world, &gap).expect("gap refilled");
    assert_eq!(fluid.id, vanilla::WATER.id);
    assert!(level <= vanilla::WATER.max_level);
}

#[test]
fn stale_step_spreads_from_a_reaction_product() {
    let mut world = world(0, 128);
    stone(&mut world, BlockPos::new(-4, Y - 1, -4), BlockPos::new(4, Y - 1, 4));

    let mut sim = FluidSimulation::new();
    let pos = BlockPos::new(0, Y, 0);
    place_source(&mut world, &mut sim, pos, &vanilla::WATER);
    // Overwritten before the step fires
    world.set_block(pos, BlockState::new(vanilla_blocks::OBSIDIAN));
    sim.tick(&mut world);
    sim.run_until_idle(&mut world, SETTLE_TICKS);

    assert!(world.get_block_state(&pos).is_of(&vanilla_blocks::OBSIDIAN));
    let (_, level) = fluid_at(&world, &BlockPos::new(0, Y, 1)).expect("spread anyway");
    assert_eq!(level, 1);
}
