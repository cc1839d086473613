//! # Cloud Placement
//!
//! Where a cloud appears, and how fast it drifts, each time it (re)enters the sky.

use crate::GameConfig;
use rand::rngs::StdRng;
use rand::Rng;

/// A rolled spawn point and drift speed for a cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudPlacement {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

/// Rolls a placement just past the right edge, inside the cloud height band.
pub fn roll_cloud(config: &GameConfig, rng: &mut StdRng) -> CloudPlacement {
    let jitter = rng.gen_range(0..=config.cloud_spawn_jitter);
    let y = rng.gen_range(config.cloud_min_y..=config.cloud_max_y);
    let speed = rng.gen_range(config.cloud_min_speed..config.cloud_max_speed);

    CloudPlacement {
        x: config.screen_width + jitter as f32,
        y: y as f32,
        speed,
    }
}
