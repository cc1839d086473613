//! # World State Module
//!
//! The per-frame world loop of a single run.
//!
//! A [`WorldState`] owns the dragon, the clouds, the active obstacles and the
//! score. Each call to [`WorldState::tick`] advances all of them by exactly one
//! frame in a fixed order:
//!
//! 1. apply the frame's input to the dragon
//! 2. integrate the dragon
//! 3. drift the clouds
//! 4. scroll the obstacles, recycling (and scoring) those that left the screen
//! 5. test the dragon against the remaining obstacles
//!
//! Recycling happens before the collision test, so an obstacle that left the
//! screen this frame can never end the run this frame.

use crate::generation::utils::create_rng;
use crate::{Cloud, Dragon, DragonResult, FrameInput, GameConfig, Obstacle};
use log::{debug, info};
use rand::rngs::StdRng;

/// Phase of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// The world advances every frame
    Running,
    /// The dragon hit an obstacle; the world no longer changes
    GameOver,
}

/// What happened during one call to [`WorldState::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The run continues
    Running,
    /// The dragon collided; carries the final score
    Collided { score: u32 },
}

/// Complete state of one run.
#[derive(Debug, Clone)]
pub struct WorldState {
    config: GameConfig,
    /// The player's dragon
    pub dragon: Dragon,
    /// Background clouds, fixed count
    pub clouds: Vec<Cloud>,
    /// Active obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Obstacles successfully dodged this run
    pub score: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Frames advanced while running
    pub frame: u64,
    seed: u64,
    rng: StdRng,
}

impl WorldState {
    /// Starts a new run seeded with `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flying_dragon::{GameConfig, WorldState};
    ///
    /// let world = WorldState::new(GameConfig::default(), 42).unwrap();
    /// assert_eq!(world.score, 0);
    /// assert_eq!(world.clouds.len(), 5);
    /// assert_eq!(world.obstacles.len(), 1);
    /// ```
    pub fn new(config: GameConfig, seed: u64) -> DragonResult<Self> {
        config.validate()?;

        let mut rng = create_rng(seed);
        let dragon = Dragon::new(&config);
        let clouds = (0..config.cloud_count)
            .map(|_| Cloud::spawn(&config, &mut rng))
            .collect();
        let obstacles = (0..config.obstacle_count)
            .map(|_| Obstacle::spawn(&config, &mut rng))
            .collect();

        info!("New run started (seed {})", seed);

        Ok(Self {
            config,
            dragon,
            clouds,
            obstacles,
            score: 0,
            phase: GamePhase::Running,
            frame: 0,
            seed,
            rng,
        })
    }

    /// The configuration this run was built from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The seed this run was started with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Advances the world by one frame.
    ///
    /// Once the run is over this is a no-op that keeps reporting the final
    /// score.
    pub fn tick(&mut self, input: &FrameInput) -> TickOutcome {
        self.apply_input(input);
        self.advance()
    }

    /// Applies one frame of player input to the dragon.
    pub fn apply_input(&mut self, input: &FrameInput) {
        if !self.is_running() {
            return;
        }
        if input.jump {
            self.dragon.jump();
        }
        if input.descend {
            self.dragon.descend_request();
        }
    }

    /// Runs the physics, scrolling, recycling and collision steps of a frame.
    pub fn advance(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Collided { score: self.score };
        }

        self.frame += 1;
        self.dragon.tick();

        for cloud in &mut self.clouds {
            cloud.tick(&self.config, &mut self.rng);
        }

        for obstacle in &mut self.obstacles {
            obstacle.tick();
        }
        self.recycle_obstacles();

        if let Some(hit) = self.colliding_obstacle() {
            self.phase = GamePhase::GameOver;
            info!(
                "Dragon hit a {:?} on frame {}, final score {}",
                self.obstacles[hit].kind, self.frame, self.score
            );
            return TickOutcome::Collided { score: self.score };
        }

        TickOutcome::Running
    }

    /// Replaces every obstacle that left the screen with a fresh one.
    ///
    /// Returns the number of obstacles recycled; each one scores a point.
    fn recycle_obstacles(&mut self) -> u32 {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.has_exited());
        let exited = (before - self.obstacles.len()) as u32;

        for _ in 0..exited {
            self.score += 1;
            let fresh = Obstacle::spawn(&self.config, &mut self.rng);
            debug!(
                "Obstacle recycled, score {}; next is a {:?} at x={}",
                self.score, fresh.kind, fresh.x
            );
            self.obstacles.push(fresh);
        }

        exited
    }

    /// Index of the first obstacle overlapping the dragon, if any.
    pub fn colliding_obstacle(&self) -> Option<usize> {
        let dragon = self.dragon.bounds();
        self.obstacles
            .iter()
            .position(|o| o.bounds().intersects(&dragon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ObstacleKind;

    fn world() -> WorldState {
        WorldState::new(GameConfig::default(), 12345).unwrap()
    }

    fn rock_at(x: f32, config: &GameConfig) -> Obstacle {
        Obstacle {
            kind: ObstacleKind::Rock,
            x,
            y: config.ground_y + (config.ground_hazard_base - 40.0),
            width: 20.0,
            height: 40.0,
            speed: config.obstacle_speed,
        }
    }

    #[test]
    fn test_new_world_layout() {
        let world = world();
        assert_eq!(world.clouds.len(), 5);
        assert_eq!(world.obstacles.len(), 1);
        assert_eq!(world.score, 0);
        assert_eq!(world.frame, 0);
        assert!(world.is_running());
        assert_eq!(world.seed(), 12345);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GameConfig {
            obstacle_count: 0,
            ..GameConfig::default()
        };
        assert!(WorldState::new(config, 1).is_err());
    }

    #[test]
    fn test_jump_from_rest_end_to_end() {
        let mut world = world();
        world.dragon = Dragon::at_rest(world.config());
        assert_eq!(world.dragon.y, 300.0);

        // Frame 0: the jump trigger sets the impulse before physics runs
        world.apply_input(&FrameInput::jump());
        assert_eq!(world.dragon.vel_y, -15.0);
        assert!(world.dragon.airborne);
        world.advance();

        // Frames 1 and 2
        world.tick(&FrameInput::default());
        world.tick(&FrameInput::default());
        assert!(world.dragon.y < 300.0);
    }

    #[test]
    fn test_descend_held_moves_dragon_down() {
        let mut world = world();
        world.obstacles = vec![rock_at(700.0, world.config())];
        world.dragon.y = 100.0;
        world.dragon.vel_y = 0.0;
        world.tick(&FrameInput {
            descend: true,
            ..FrameInput::default()
        });
        // 7px dive plus 0.8px of gravity
        assert!((world.dragon.y - 107.8).abs() < 1e-4);
    }

    #[test]
    fn test_exited_obstacle_scores_and_is_replaced() {
        let mut world = world();
        let config = world.config().clone();
        world.obstacles = vec![rock_at(-15.0, &config)];

        let outcome = world.tick(&FrameInput::default());
        assert_eq!(outcome, TickOutcome::Running);
        assert_eq!(world.score, 1);
        assert_eq!(world.obstacles.len(), 1);
        assert!(world.obstacles[0].x >= config.screen_width);
    }

    #[test]
    fn test_each_exit_scores_once() {
        let config = GameConfig {
            obstacle_count: 3,
            ..GameConfig::default()
        };
        let mut world = WorldState::new(config.clone(), 5).unwrap();
        world.obstacles = vec![
            rock_at(-15.0, &config),
            rock_at(-10.0, &config),
            rock_at(600.0, &config),
        ];

        world.tick(&FrameInput::default());
        assert_eq!(world.score, 2);
        assert_eq!(world.obstacles.len(), 3);
        // The survivor moves to the front, fresh ones are appended behind it
        assert_eq!(world.obstacles[0].x, 600.0 - config.obstacle_speed);
    }

    #[test]
    fn test_collision_ends_run_without_scoring() {
        let mut world = world();
        world.dragon = Dragon::at_rest(world.config());
        let config = world.config().clone();
        // Overlaps the resting dragon after one scroll step
        world.obstacles = vec![rock_at(60.0 + config.obstacle_speed, &config)];

        let outcome = world.tick(&FrameInput::default());
        assert_eq!(outcome, TickOutcome::Collided { score: 0 });
        assert_eq!(world.phase, GamePhase::GameOver);
        assert_eq!(world.score, 0);
    }

    #[test]
    fn test_world_frozen_after_game_over() {
        let mut world = world();
        world.dragon = Dragon::at_rest(world.config());
        let config = world.config().clone();
        world.obstacles = vec![rock_at(60.0 + config.obstacle_speed, &config)];
        world.tick(&FrameInput::default());

        let dragon = world.dragon.clone();
        let obstacles = world.obstacles.clone();
        let frame = world.frame;

        let outcome = world.tick(&FrameInput::jump());
        assert_eq!(outcome, TickOutcome::Collided { score: 0 });
        assert_eq!(world.dragon, dragon);
        assert_eq!(world.obstacles, obstacles);
        assert_eq!(world.frame, frame);
    }

    #[test]
    fn test_recycled_obstacle_cannot_collide_same_frame() {
        let mut world = world();
        let config = world.config().clone();
        world.dragon = Dragon::at_rest(&config);
        // Exits this frame; the replacement spawns off screen right
        world.obstacles = vec![rock_at(-10.0, &config)];

        let outcome = world.tick(&FrameInput::default());
        assert_eq!(outcome, TickOutcome::Running);
        assert_eq!(world.score, 1);
    }

    #[test]
    fn test_fireball_passes_over_airborne_dragon() {
        let mut world = world();
        let config = world.config().clone();
        world.dragon.y = 100.0;
        world.dragon.vel_y = 0.0;
        world.obstacles = vec![Obstacle {
            kind: ObstacleKind::Fireball,
            x: 60.0 + config.obstacle_speed,
            y: config.fireball_y,
            width: config.fireball_size,
            height: config.fireball_size,
            speed: config.obstacle_speed,
        }];

        assert_eq!(world.tick(&FrameInput::default()), TickOutcome::Running);
    }

    #[test]
    fn test_same_seed_replays_same_run() {
        let mut a = WorldState::new(GameConfig::default(), 777).unwrap();
        let mut b = WorldState::new(GameConfig::default(), 777).unwrap();
        for frame in 0..600 {
            let input = if frame % 40 == 0 {
                FrameInput::jump()
            } else {
                FrameInput::default()
            };
            assert_eq!(a.tick(&input), b.tick(&input));
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.clouds, b.clouds);
    }
}
