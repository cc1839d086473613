//! # Flying Dragon
//!
//! A single-screen arcade side-scroller: the player steers a dragon that jumps
//! and dives to dodge rocks, trees and fireballs scrolling in from the right.
//!
//! ## Architecture Overview
//!
//! The crate is split so that all game rules can be exercised without a window:
//!
//! - **Game**: the dragon, clouds, obstacles and the per-frame world loop
//! - **Generation**: seeded random spawning of clouds and obstacles
//! - **Input**: translating macroquad keyboard/mouse state into frame inputs
//! - **Rendering**: drawing the world and the modal screens with macroquad
//! - **Scenes**: the start / playing / game-over state machine
//!
//! Only `rendering`, `input` and `scenes` talk to macroquad's global context;
//! everything in `game` and `generation` is plain data driven by a
//! [`FrameInput`] and an injected random number generator.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod scenes;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use input::*;
pub use rendering::*;
pub use utils::*;

pub use scenes::{SceneManager, SceneType};

/// Core error type for the Flying Dragon game.
#[derive(thiserror::Error, Debug)]
pub enum DragonError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Game configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Flying Dragon codebase.
pub type DragonResult<T> = Result<T, DragonError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Window width in pixels
    pub const WINDOW_WIDTH: i32 = 800;

    /// Window height in pixels
    pub const WINDOW_HEIGHT: i32 = 400;

    /// Window title
    pub const WINDOW_TITLE: &str = "Flying Dragon";

    /// Simulation ticks per second
    pub const TARGET_FPS: u32 = 60;

    /// Upper bound on simulation ticks run for a single presented frame.
    /// Frames slower than this are treated as a hiccup, not as lost game time.
    pub const MAX_TICKS_PER_FRAME: u32 = 5;
}
