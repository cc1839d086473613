//! # Input Module
//!
//! Turns macroquad's keyboard and mouse state into the plain values the game
//! and the screens consume.

pub mod commands;

pub use commands::*;

use macroquad::prelude::*;

/// Player input relevant to one world frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// A jump trigger was pressed this frame
    pub jump: bool,
    /// The dive key is held
    pub descend: bool,
}

impl FrameInput {
    /// Input with only the jump trigger set.
    pub fn jump() -> Self {
        Self {
            jump: true,
            descend: false,
        }
    }

    /// The same input with edge-triggered presses cleared.
    ///
    /// Used for the extra simulation ticks of a long frame so that one key
    /// press never counts twice.
    pub fn held_only(self) -> Self {
        Self {
            jump: false,
            descend: self.descend,
        }
    }
}

/// Discrete inputs understood by the start and game-over screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerInput {
    /// Leave the game (quit key or window close)
    Quit,
    /// Keyboard shortcut for the primary button
    Confirm,
    /// Left mouse button pressed at a screen position
    Click { x: f32, y: f32 },
}

/// Input handler for processing player commands.
#[derive(Debug)]
pub struct InputHandler;

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// The window close button is intercepted so that closing the window goes
    /// through the same exit path as the quit button.
    pub fn new() -> Self {
        prevent_quit();
        Self
    }

    /// True if the window was asked to close or a quit key was pressed.
    pub fn quit_requested(&self) -> bool {
        is_quit_requested() || QUIT_KEYS.iter().any(|&k| is_key_pressed(k))
    }

    /// Samples the keyboard for the current world frame.
    pub fn get_frame_input(&self) -> FrameInput {
        FrameInput {
            jump: JUMP_KEYS.iter().any(|&k| is_key_pressed(k)),
            descend: DESCEND_KEYS.iter().any(|&k| is_key_down(k)),
        }
    }

    /// Returns the screen input for this frame, if any.
    ///
    /// `confirm_keys` are the shortcuts for the screen's primary button.
    pub fn get_menu_input(&self, confirm_keys: &[KeyCode]) -> Option<PlayerInput> {
        if self.quit_requested() {
            return Some(PlayerInput::Quit);
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            return Some(PlayerInput::Click { x, y });
        }

        if confirm_keys.iter().any(|&k| is_key_pressed(k)) {
            return Some(PlayerInput::Confirm);
        }

        None
    }
}
