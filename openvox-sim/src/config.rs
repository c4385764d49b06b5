//! The configuration for the simulation, given from environment variables and lazy 
//! initialized when needed.

use std::path::{Path, PathBuf};
use std::env;

use once_cell::race::OnceBool;
use once_cell::sync::OnceCell;

use tracing::warn;

use openvox::config::GraveConfig;


/// Parse an environment variable, returning none if absent and warning if invalid.
fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let value = env::var(name).ok()?;
    match value.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("invalid value for {name}: {value:?}, using default");
            None
        }
    }
}

/// Parse a probability from an environment variable, clamped to 0..=1.
fn probability(name: &str, default: f64) -> f64 {
    parse_var::<f64>(name)
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 1.0))
        .unwrap_or(default)
}


/// Return true if graves spawn skeletons and bats around them.
/// 
/// To disable this feature, set `OPENVOX_SPAWN_SKELETONS=0`.
pub fn spawn_skeletons() -> bool {
    static ENV: OnceBool = OnceBool::new();
    ENV.get_or_init(|| {
        env::var_os("OPENVOX_SPAWN_SKELETONS")
            .map(|s| s.as_encoded_bytes() != b"0")
            .unwrap_or(true)
    })
}

/// Probability, on each tick, that a grave tries to spawn a mob.
/// 
/// Set with `OPENVOX_SKELETON_SPAWN_RATE`, in range 0 to 1.
pub fn skeleton_spawn_rate() -> f64 {
    static ENV: OnceCell<f64> = OnceCell::new();
    *ENV.get_or_init(|| probability("OPENVOX_SKELETON_SPAWN_RATE", GraveConfig::default().skeleton_spawn_rate))
}

/// Probability that robbing a non-empty grave angers the sky.
/// 
/// Set with `OPENVOX_GRAVE_SPECIAL_ACTION`, in range 0 to 1.
pub fn grave_special_action() -> f64 {
    static ENV: OnceCell<f64> = OnceCell::new();
    *ENV.get_or_init(|| probability("OPENVOX_GRAVE_SPECIAL_ACTION", GraveConfig::default().grave_special_action))
}

/// Number of ticks to run the simulation for, 600 by default (30 seconds).
/// 
/// Set with `OPENVOX_SIM_TICKS`.
pub fn sim_ticks() -> usize {
    static ENV: OnceCell<usize> = OnceCell::new();
    *ENV.get_or_init(|| {
        parse_var::<usize>("OPENVOX_SIM_TICKS")
            .filter(|&ticks| ticks > 0)
            .unwrap_or(600)
    })
}

/// Path of the gzip file block entities are saved to.
/// 
/// Set with `OPENVOX_SAVE_PATH`, `block_entities.nbt.gz` by default.
pub fn save_path() -> &'static Path {
    static ENV: OnceCell<PathBuf> = OnceCell::new();
    ENV.get_or_init(|| {
        env::var_os("OPENVOX_SAVE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("block_entities.nbt.gz"))
    })
}

/// The grave tunables assembled from the environment.
pub fn grave_config() -> GraveConfig {
    GraveConfig {
        spawn_skeletons: spawn_skeletons(),
        skeleton_spawn_rate: skeleton_spawn_rate(),
        grave_special_action: grave_special_action(),
    }
}
