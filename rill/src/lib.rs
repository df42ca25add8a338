//! # Rill
//!
//! Headless runner for the fluid simulation: loads a JSON5 config, seeds an
//! in-memory world with fluid sources and ticks it until everything settles.

pub mod config;
pub mod logger;
pub mod runner;

pub use config::{ConfigError, DEFAULT_CONFIG_PATH, RillConfig};
pub use runner::{RunSummary, Runner};
