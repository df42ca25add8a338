//! Runner configuration, read from a JSON5 file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rill_core::world::MemoryWorld;
use rill_registry::{FluidType, Registry};
use rill_utils::{BlockPos, Identifier};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/rill_config.json5");

/// Where the runner looks for its config when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/rill_config.json5";

/// Why a config could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed.
    #[error("cannot access {path}: {source}")]
    Io {
        /// The config file.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// The file is not valid JSON5 or does not match the schema.
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
    /// A source names a block that is not a registered fluid.
    #[error("{0} is not a registered fluid")]
    UnknownFluid(Identifier),
}

/// Vertical extent of the world.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Lowest buildable y.
    pub min_y: i32,
    /// Number of buildable layers.
    pub height: i32,
}

/// Tick loop limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Spread steps per game tick.
    pub max_steps_per_tick: usize,
    /// Game ticks before the runner gives up.
    pub max_ticks: u64,
}

/// A source placed when the run starts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    /// Block id of the fluid, e.g. `minecraft:water`.
    pub fluid: Identifier,
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
    /// Z coordinate.
    pub z: i32,
}

impl SourceConfig {
    /// The source position.
    #[must_use]
    pub const fn pos(&self) -> BlockPos {
        BlockPos::new(self.x, self.y, self.z)
    }
}

/// The runner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RillConfig {
    /// World extent.
    pub world: WorldConfig,
    /// Tick loop limits.
    pub simulation: SimulationConfig,
    /// Default `tracing` filter directive.
    pub log_filter: String,
    /// Height of the stone floor under the sources, if any.
    pub floor_y: Option<i32>,
    /// Sources placed at game tick 0.
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}

impl RillConfig {
    /// Loads the config at `path`, writing the bundled default there first
    /// if the file does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        let io_error = |source: io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(io_error)?;
            }
            fs::write(path, DEFAULT_CONFIG).map_err(io_error)?;
            log::info!("Wrote default config to {}", path.display());
        }

        let config_str = fs::read_to_string(path).map_err(io_error)?;
        Self::parse(&config_str)
    }

    /// Parses and validates a config.
    pub fn parse(config_str: &str) -> Result<Self, ConfigError> {
        let config: RillConfig = serde_json5::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MemoryWorld::MAX_HEIGHT).contains(&self.world.height) {
            return Err(ConfigError::Invalid("World height must be in range 1..=4096"));
        }
        let Some(max_y) = self.world.min_y.checked_add(self.world.height) else {
            return Err(ConfigError::Invalid("World top must not overflow"));
        };
        if self.simulation.max_steps_per_tick == 0 {
            return Err(ConfigError::Invalid("max_steps_per_tick must be at least 1"));
        }
        if self.simulation.max_ticks == 0 {
            return Err(ConfigError::Invalid("max_ticks must be at least 1"));
        }

        let in_world = |y: i32| (self.world.min_y..max_y).contains(&y);
        if self.sources.iter().any(|source| !in_world(source.y)) {
            return Err(ConfigError::Invalid("Every source must lie inside the world"));
        }
        if let Some(floor_y) = self.floor_y
            && !in_world(floor_y)
        {
            return Err(ConfigError::Invalid("floor_y must lie inside the world"));
        }
        Ok(())
    }

    /// Pairs every source with its fluid type.
    pub fn resolve_sources(&self, registry: &Registry) -> Result<Vec<(BlockPos, FluidType)>, ConfigError> {
        self.sources
            .iter()
            .map(|source| {
                registry
                    .fluids
                    .by_block(&source.fluid)
                    .map(|fluid| (source.pos(), fluid.clone()))
                    .ok_or_else(|| ConfigError::UnknownFluid(source.fluid.clone()))
            })
            .collect()
    }
}

impl Default for RillConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig {
                min_y: -64,
                height: 384,
            },
            simulation: SimulationConfig {
                max_steps_per_tick: 65_536,
                max_ticks: 72_000,
            },
            log_filter: "info".to_string(),
            floor_y: Some(63),
            sources: vec![
                SourceConfig {
                    fluid: Identifier::vanilla_static("water"),
                    x: 0,
                    y: 64,
                    z: 0,
                },
                SourceConfig {
                    fluid: Identifier::vanilla_static("lava"),
                    x: 6,
                    y: 64,
                    z: 0,
                },
                SourceConfig {
                    fluid: Identifier::vanilla_static("water"),
                    x: 0,
                    y: 80,
                    z: 12,
                },
            ],
        }
    }
}
