//! # Game Module
//!
//! Core game rules: the dragon, the scenery, the obstacles and the world loop
//! that advances them once per frame.
//!
//! Nothing in here touches macroquad's window or input state. The world is
//! driven by [`FrameInput`](crate::FrameInput) values and an injected
//! [`StdRng`](rand::rngs::StdRng), so every rule can be tested headless.

pub mod entities;
pub mod state;

pub use entities::*;
pub use state::*;

use crate::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::{DragonError, DragonResult};
use serde::{Deserialize, Serialize};

/// Tuning values for a run.
///
/// The defaults reproduce the classic 800x400 layout. All distances are in
/// pixels and all speeds in pixels per tick.
///
/// # Examples
///
/// ```
/// use flying_dragon::GameConfig;
///
/// let config = GameConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.ground_y, 300.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Screen width
    pub screen_width: f32,
    /// Screen height
    pub screen_height: f32,
    /// Height of the grass band at the bottom of the screen
    pub ground_band_height: f32,

    /// Fixed horizontal position of the dragon
    pub dragon_x: f32,
    /// Vertical position the dragon spawns at (it falls to rest from here)
    pub dragon_spawn_y: f32,
    pub dragon_width: f32,
    pub dragon_height: f32,
    /// Lowest y the dragon may occupy
    pub ground_y: f32,
    /// Added to the vertical velocity every tick
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_impulse: f32,
    /// Distance moved per tick while "down" is held
    pub descend_step: f32,

    /// Number of clouds drifting across the sky
    pub cloud_count: usize,
    /// Clouds respawn at `screen_width + [0, cloud_spawn_jitter]`
    pub cloud_spawn_jitter: u32,
    /// Top of the band clouds spawn in
    pub cloud_min_y: i32,
    /// Bottom of the band clouds spawn in
    pub cloud_max_y: i32,
    pub cloud_min_speed: f32,
    pub cloud_max_speed: f32,
    /// Clouds left of this x are recycled
    pub cloud_recycle_x: f32,

    /// Number of obstacles kept active at once
    pub obstacle_count: usize,
    pub obstacle_speed: f32,
    /// Obstacles spawn at `screen_width + [0, obstacle_spawn_jitter]`
    pub obstacle_spawn_jitter: u32,
    /// Width choices for rocks and trees
    pub ground_hazard_widths: Vec<f32>,
    /// Height choices for rocks and trees
    pub ground_hazard_heights: Vec<f32>,
    /// Height a ground hazard's placement is measured against; a hazard of
    /// height `h` sits at `ground_y + (ground_hazard_base - h)`
    pub ground_hazard_base: f32,
    pub fireball_size: f32,
    /// Fixed y of a fireball
    pub fireball_y: f32,
}

impl GameConfig {
    /// Creates the classic configuration.
    pub fn new() -> Self {
        let width = WINDOW_WIDTH as f32;
        let height = WINDOW_HEIGHT as f32;

        Self {
            screen_width: width,
            screen_height: height,
            ground_band_height: 40.0,

            dragon_x: 50.0,
            dragon_spawn_y: height - 150.0,
            dragon_width: 60.0,
            dragon_height: 40.0,
            ground_y: height - 100.0,
            gravity: 0.8,
            jump_impulse: -15.0,
            descend_step: 7.0,

            cloud_count: 5,
            cloud_spawn_jitter: 100,
            cloud_min_y: 50,
            cloud_max_y: 150,
            cloud_min_speed: 0.5,
            cloud_max_speed: 1.5,
            cloud_recycle_x: -80.0,

            obstacle_count: 1,
            obstacle_speed: 12.0,
            obstacle_spawn_jitter: 300,
            ground_hazard_widths: vec![20.0, 40.0, 60.0],
            ground_hazard_heights: vec![40.0, 60.0, 30.0],
            ground_hazard_base: 60.0,
            fireball_size: 30.0,
            fireball_y: height - 70.0,
        }
    }

    /// Top edge of the grass band.
    pub fn ground_band_top(&self) -> f32 {
        self.screen_height - self.ground_band_height
    }

    /// Checks that the configuration describes a playable layout.
    pub fn validate(&self) -> DragonResult<()> {
        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err(DragonError::InvalidConfig(
                "screen dimensions must be positive".to_string(),
            ));
        }
        if self.dragon_width <= 0.0 || self.dragon_height <= 0.0 {
            return Err(DragonError::InvalidConfig(
                "dragon size must be positive".to_string(),
            ));
        }
        if self.ground_y <= 0.0 || self.ground_y + self.dragon_height > self.screen_height {
            return Err(DragonError::InvalidConfig(format!(
                "ground_y {} does not fit a {}px dragon on a {}px screen",
                self.ground_y, self.dragon_height, self.screen_height
            )));
        }
        if self.gravity <= 0.0 || self.jump_impulse >= 0.0 || self.descend_step <= 0.0 {
            return Err(DragonError::InvalidConfig(
                "gravity and descend_step must be positive, jump_impulse negative".to_string(),
            ));
        }
        if self.cloud_min_y > self.cloud_max_y {
            return Err(DragonError::InvalidConfig(
                "cloud_min_y must not exceed cloud_max_y".to_string(),
            ));
        }
        if self.cloud_min_speed <= 0.0 || self.cloud_min_speed >= self.cloud_max_speed {
            return Err(DragonError::InvalidConfig(
                "cloud speed range must be positive and non-empty".to_string(),
            ));
        }
        if self.obstacle_count == 0 {
            return Err(DragonError::InvalidConfig(
                "at least one obstacle is required".to_string(),
            ));
        }
        if self.obstacle_speed <= 0.0 {
            return Err(DragonError::InvalidConfig(
                "obstacle_speed must be positive".to_string(),
            ));
        }
        if self.ground_hazard_widths.is_empty() || self.ground_hazard_heights.is_empty() {
            return Err(DragonError::InvalidConfig(
                "ground hazard size tables must not be empty".to_string(),
            ));
        }
        if self
            .ground_hazard_widths
            .iter()
            .chain(self.ground_hazard_heights.iter())
            .any(|&v| v <= 0.0)
            || self.fireball_size <= 0.0
        {
            return Err(DragonError::InvalidConfig(
                "obstacle sizes must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> DragonResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 800.0);
        assert_eq!(config.screen_height, 400.0);
        assert_eq!(config.ground_y, 300.0);
        assert_eq!(config.dragon_spawn_y, 250.0);
        assert_eq!(config.ground_band_top(), 360.0);
        assert_eq!(config.fireball_y, 330.0);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_obstacles() {
        let config = GameConfig {
            obstacle_count: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DragonError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_ground_below_screen() {
        let config = GameConfig {
            ground_y: 390.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_upward_gravity() {
        let config = GameConfig {
            jump_impulse: 5.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_size_table() {
        let config = GameConfig {
            ground_hazard_heights: Vec::new(),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::default();
        let json = config.to_json().unwrap();

        // Should be valid JSON
        let _: serde_json::Value = serde_json::from_str(&json).unwrap();

        let loaded: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, config);
    }
}
