//! # Entities
//!
//! The moving pieces of a run: the player's dragon, the drifting clouds and
//! the obstacles the dragon has to avoid.

use crate::generation::{roll_cloud, roll_obstacle};
use crate::{Bounds, GameConfig};
use rand::rngs::StdRng;

/// The player-controlled dragon.
///
/// The dragon never moves horizontally. Vertically it is driven by gravity,
/// by jumps (only from the ground) and by an explicit "dive" while the down
/// key is held.
#[derive(Debug, Clone, PartialEq)]
pub struct Dragon {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity, negative is up
    pub vel_y: f32,
    /// True while the dragon is off the ground
    pub airborne: bool,
    gravity: f32,
    jump_impulse: f32,
    descend_step: f32,
    ground_y: f32,
}

impl Dragon {
    /// Creates a dragon at the configured spawn point.
    ///
    /// A spawn point above the ground makes the dragon start airborne so it
    /// falls to rest before it can jump.
    pub fn new(config: &GameConfig) -> Self {
        let y = config.dragon_spawn_y.clamp(0.0, config.ground_y);
        Self {
            x: config.dragon_x,
            y,
            width: config.dragon_width,
            height: config.dragon_height,
            vel_y: 0.0,
            airborne: y < config.ground_y,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
            descend_step: config.descend_step,
            ground_y: config.ground_y,
        }
    }

    /// Creates a dragon resting on the ground.
    pub fn at_rest(config: &GameConfig) -> Self {
        let mut dragon = Self::new(config);
        dragon.y = config.ground_y;
        dragon.airborne = false;
        dragon
    }

    /// Lowest y the dragon may occupy.
    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    /// Velocity applied by a jump.
    pub fn jump_impulse(&self) -> f32 {
        self.jump_impulse
    }

    /// Launches the dragon upward. No double jumps.
    pub fn jump(&mut self) {
        if !self.airborne {
            self.vel_y = self.jump_impulse;
            self.airborne = true;
        }
    }

    /// Dives one step toward the ground without passing it.
    pub fn descend_request(&mut self) {
        self.y = (self.y + self.descend_step).min(self.ground_y);
    }

    /// Integrates gravity for one frame and clamps to the playfield.
    pub fn tick(&mut self) {
        self.vel_y += self.gravity;
        self.y += self.vel_y;

        if self.y >= self.ground_y {
            self.y = self.ground_y;
            self.vel_y = 0.0;
            self.airborne = false;
        } else {
            self.airborne = true;
        }

        if self.y <= 0.0 {
            self.y = 0.0;
            self.vel_y = 0.0;
        }
    }

    /// Collision box at the current position.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}

/// A background cloud. Purely cosmetic, never collides.
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

impl Cloud {
    /// Spawns a cloud just past the right edge of the screen.
    pub fn spawn(config: &GameConfig, rng: &mut StdRng) -> Self {
        let placement = roll_cloud(config, rng);
        Self {
            x: placement.x,
            y: placement.y,
            speed: placement.speed,
        }
    }

    /// Drifts left, recycling the cloud once it has left the screen.
    pub fn tick(&mut self, config: &GameConfig, rng: &mut StdRng) {
        self.x -= self.speed;
        if self.x < config.cloud_recycle_x {
            let placement = roll_cloud(config, rng);
            self.x = placement.x;
            self.y = placement.y;
            self.speed = placement.speed;
        }
    }
}

/// The closed set of obstacle kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    /// Low grey block sitting on the ground
    Rock,
    /// Tree with a trunk and round crown, sitting on the ground
    Tree,
    /// Fixed-size ball of fire floating at dragon height
    Fireball,
}

impl ObstacleKind {
    /// All kinds, in the order they are rolled from.
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Rock, ObstacleKind::Tree, ObstacleKind::Fireball];

    /// Returns true for kinds that rest on the ground band.
    pub fn is_grounded(self) -> bool {
        match self {
            ObstacleKind::Rock | ObstacleKind::Tree => true,
            ObstacleKind::Fireball => false,
        }
    }
}

/// Something the dragon must not touch.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Obstacle {
    /// Rolls a new obstacle of random kind just past the right edge.
    pub fn spawn(config: &GameConfig, rng: &mut StdRng) -> Self {
        roll_obstacle(config, rng)
    }

    /// Scrolls the obstacle left by its speed.
    pub fn tick(&mut self) {
        self.x -= self.speed;
    }

    /// True once the right edge has passed the left side of the screen.
    pub fn has_exited(&self) -> bool {
        self.x + self.width < 0.0
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}
