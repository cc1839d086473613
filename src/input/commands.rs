//! # Key Bindings
//!
//! Which keys drive which player command.

use macroquad::prelude::KeyCode;

/// Keys that make the dragon jump (edge-triggered).
pub const JUMP_KEYS: &[KeyCode] = &[KeyCode::Space, KeyCode::Up, KeyCode::W];

/// Keys that make the dragon dive while held.
pub const DESCEND_KEYS: &[KeyCode] = &[KeyCode::Down, KeyCode::S];

/// Keyboard shortcuts for the Start button.
pub const START_KEYS: &[KeyCode] = &[KeyCode::Enter, KeyCode::KpEnter, KeyCode::Space];

/// Keyboard shortcuts for the Restart button. Never shares a key with
/// `JUMP_KEYS`, so a jump held through a crash cannot skip the final score.
pub const RESTART_KEYS: &[KeyCode] = &[KeyCode::Enter, KeyCode::KpEnter, KeyCode::R];

/// Keys that leave the game from any screen.
pub const QUIT_KEYS: &[KeyCode] = &[KeyCode::Escape];

/// One-line control summary shown under the title.
pub const CONTROLS_HINT: &str = "SPACE/UP: jump   DOWN: dive   ESC: quit";
