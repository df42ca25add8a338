//! Runs the fluid simulation described by a config file.
//!
//! Usage: `rill [config path]`, defaulting to `config/rill_config.json5`.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use rill::{DEFAULT_CONFIG_PATH, RillConfig, Runner, logger};

fn main() -> anyhow::Result<()> {
    let path = env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    let config = RillConfig::load_or_create(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    logger::init(&config.log_filter).context("Failed to initialise logging")?;

    tracing::info!(config = %path.display(), sources = config.sources.len(), "Starting Rill");
    let mut runner = Runner::new(&config).context("Failed to seed the world")?;
    let summary = runner.run();

    tracing::info!(
        water = summary.water,
        lava = summary.lava,
        obsidian = summary.obsidian,
        cobblestone = summary.cobblestone,
        "Final world"
    );
    if summary.pending > 0 {
        tracing::warn!(
            pending = summary.pending,
            "Tick limit reached before the fluids settled"
        );
    }
    Ok(())
}
