//! # Obstacle Generation
//!
//! Rolls the kind, size and spawn point of each obstacle.

use crate::{GameConfig, Obstacle, ObstacleKind};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Rolls a new obstacle just past the right edge of the screen.
///
/// The kind is uniform over [`ObstacleKind::ALL`]. Rocks and trees draw a
/// width and a height independently from the configured tables and are
/// placed so their bottom rests on the ground band; fireballs have a fixed
/// size and altitude.
pub fn roll_obstacle(config: &GameConfig, rng: &mut StdRng) -> Obstacle {
    let kind = ObstacleKind::ALL[rng.gen_range(0..ObstacleKind::ALL.len())];

    let (width, height, y) = match kind {
        ObstacleKind::Rock | ObstacleKind::Tree => {
            let width = pick(&config.ground_hazard_widths, rng);
            let height = pick(&config.ground_hazard_heights, rng);
            let y = config.ground_y + (config.ground_hazard_base - height);
            (width, height, y)
        }
        ObstacleKind::Fireball => (config.fireball_size, config.fireball_size, config.fireball_y),
    };

    let jitter = rng.gen_range(0..=config.obstacle_spawn_jitter);

    Obstacle {
        kind,
        x: config.screen_width + jitter as f32,
        y,
        width,
        height,
        speed: config.obstacle_speed,
    }
}

fn pick(table: &[f32], rng: &mut StdRng) -> f32 {
    // Empty tables are rejected by GameConfig::validate
    table.choose(rng).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::utils::create_rng;
    use std::collections::HashSet;

    #[test]
    fn test_obstacles_spawn_off_screen_right() {
        let config = GameConfig::default();
        let mut rng = create_rng(11);
        for _ in 0..200 {
            let o = roll_obstacle(&config, &mut rng);
            assert!(o.x >= config.screen_width);
            assert!(o.x <= config.screen_width + config.obstacle_spawn_jitter as f32);
            assert_eq!(o.speed, config.obstacle_speed);
        }
    }

    #[test]
    fn test_ground_hazards_rest_on_ground_band() {
        let config = GameConfig::default();
        let mut rng = create_rng(12);
        for _ in 0..300 {
            let o = roll_obstacle(&config, &mut rng);
            if o.kind.is_grounded() {
                assert!(config.ground_hazard_widths.contains(&o.width));
                assert!(config.ground_hazard_heights.contains(&o.height));
                assert_eq!(o.bounds().bottom(), config.ground_band_top());
            }
        }
    }

    #[test]
    fn test_fireball_has_fixed_geometry() {
        let config = GameConfig::default();
        let mut rng = create_rng(13);
        let fireballs: Vec<Obstacle> = (0..300)
            .map(|_| roll_obstacle(&config, &mut rng))
            .filter(|o| o.kind == ObstacleKind::Fireball)
            .collect();

        assert!(!fireballs.is_empty());
        for o in fireballs {
            assert_eq!((o.width, o.height, o.y), (30.0, 30.0, 330.0));
        }
    }

    #[test]
    fn test_every_kind_appears() {
        let config = GameConfig::default();
        let mut rng = create_rng(14);
        let kinds: HashSet<ObstacleKind> = (0..300)
            .map(|_| roll_obstacle(&config, &mut rng).kind)
            .collect();
        assert_eq!(kinds.len(), 3);
    }

    #[test]
    fn test_same_seed_same_obstacles() {
        let config = GameConfig::default();
        let mut a = create_rng(2024);
        let mut b = create_rng(2024);
        for _ in 0..50 {
            assert_eq!(roll_obstacle(&config, &mut a), roll_obstacle(&config, &mut b));
        }
    }
}
