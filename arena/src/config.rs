use anyhow::{Context, Result, ensure};
use bevy::prelude::Resource;
use common::chase::ChaseConfig;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::constants::*;

// ============================================================================
// Logging
// ============================================================================

// Install the global subscriber; RUST_LOG overrides the default filter
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}

// ============================================================================
// Arena Settings
// ============================================================================

/// Everything a run needs besides the map, fixed before the first tick.
#[derive(Debug, Clone, PartialEq, Resource)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct ArenaSettings {
    /// Seed for every random draw in the run.
    pub seed: u64,
    /// Number of fixed steps to simulate.
    pub ticks: u64,
    /// Fixed step rate.
    pub hz: u32,
    /// Cop tuning.
    pub chase: ChaseConfig,
    /// Cops allowed at once before any difficulty ramp.
    pub max_cops: u32,
    /// Whether bomb pickups spawn and the player throws bombs.
    pub bombs_enabled: bool,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            ticks: DEFAULT_TICKS,
            hz: DEFAULT_TICK_HZ,
            chase: ChaseConfig::default(),
            max_cops: COP_MAX_START,
            bombs_enabled: true,
        }
    }
}

impl ArenaSettings {
    #[must_use]
    pub fn tick_seconds(&self) -> f64 {
        1.0 / f64::from(self.hz)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            (MIN_TICK_HZ..=MAX_TICK_HZ).contains(&self.hz),
            "hz must be in [{MIN_TICK_HZ}, {MAX_TICK_HZ}], got {}",
            self.hz
        );
        ensure!(
            self.max_cops <= COP_MAX_CAP,
            "max_cops must not exceed {COP_MAX_CAP}, got {}",
            self.max_cops
        );
        self.chase.validate().context("invalid chase settings")
    }
}

// Settings from an optional JSON file, defaults otherwise
pub fn load_settings(path: Option<&Path>) -> Result<ArenaSettings> {
    let Some(path) = path else {
        return Ok(ArenaSettings::default());
    };

    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_settings(&text).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(feature = "json")]
pub fn parse_settings(text: &str) -> Result<ArenaSettings> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(not(feature = "json"))]
pub fn parse_settings(_text: &str) -> Result<ArenaSettings> {
    anyhow::bail!("settings files need the `json` feature")
}
