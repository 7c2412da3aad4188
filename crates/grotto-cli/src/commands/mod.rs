pub mod map;
pub mod play;

use grotto_core::WorldConfig;

/// World config for the given command-line switches.
fn world_config(strict: bool) -> WorldConfig {
    WorldConfig::default().with_strict_directions(strict)
}
