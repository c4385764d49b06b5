//! Gameplay tunables of the content blocks, stored in the world.


/// Tunables of the grave block entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraveConfig {
    /// Enable graves spawning skeletons and bats around them.
    pub spawn_skeletons: bool,
    /// Probability, on each tick, that a grave tries to spawn a mob.
    pub skeleton_spawn_rate: f64,
    /// Probability that robbing a non-empty grave angers the sky.
    pub grave_special_action: f64,
}

impl Default for GraveConfig {
    fn default() -> Self {
        Self {
            spawn_skeletons: true,
            skeleton_spawn_rate: 0.002,
            grave_special_action: 0.5,
        }
    }
}
