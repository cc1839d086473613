//! # User Interface Elements
//!
//! Buttons for the start and game-over screens, their layout, and click
//! hit-testing.

use crate::input::{QUIT_KEYS, RESTART_KEYS, START_KEYS};
use crate::rendering::palette;
use crate::Bounds;
use macroquad::prelude::*;

/// What pressing a button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Start,
    Restart,
    Quit,
}

impl ButtonAction {
    /// Keys that press a button with this action.
    pub fn shortcut_keys(self) -> &'static [KeyCode] {
        match self {
            ButtonAction::Start => START_KEYS,
            ButtonAction::Restart => RESTART_KEYS,
            ButtonAction::Quit => QUIT_KEYS,
        }
    }
}

/// A clickable, labelled rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub bounds: Bounds,
    pub color: Color,
    pub action: ButtonAction,
}

impl Button {
    pub fn new(label: &'static str, bounds: Bounds, color: Color, action: ButtonAction) -> Self {
        Self {
            label,
            bounds,
            color,
            action,
        }
    }
}

/// Button geometry for the modal screens.
#[derive(Debug, Clone)]
pub struct UI {
    screen_width: f32,
    screen_height: f32,
    button_width: f32,
    button_height: f32,
    /// Font size for button labels
    pub label_size: u16,
}

impl UI {
    /// Creates the UI layout for a screen of the given size.
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            screen_width,
            screen_height,
            button_width: 100.0,
            button_height: 50.0,
            label_size: 30,
        }
    }

    /// Start and Quit, side by side below the title.
    pub fn start_buttons(&self) -> [Button; 2] {
        let cx = self.screen_width / 2.0;
        let y = self.screen_height / 2.0;
        [
            Button::new(
                "Start",
                Bounds::new(cx - 120.0, y, self.button_width, self.button_height),
                palette::GREEN,
                ButtonAction::Start,
            ),
            Button::new(
                "Quit",
                Bounds::new(cx + 20.0, y, self.button_width, self.button_height),
                palette::RED,
                ButtonAction::Quit,
            ),
        ]
    }

    /// Restart and Quit, below the final score.
    pub fn game_over_buttons(&self) -> [Button; 2] {
        let cx = self.screen_width / 2.0;
        let y = self.screen_height / 2.0 + 50.0;
        [
            Button::new(
                "Restart",
                Bounds::new(cx - 110.0, y, self.button_width, self.button_height),
                palette::GREEN,
                ButtonAction::Restart,
            ),
            Button::new(
                "Quit",
                Bounds::new(cx + 10.0, y, self.button_width, self.button_height),
                palette::RED,
                ButtonAction::Quit,
            ),
        ]
    }

    /// Returns the action of the button under the point, if any.
    pub fn hit_test(buttons: &[Button], x: f32, y: f32) -> Option<ButtonAction> {
        buttons
            .iter()
            .find(|b| b.bounds.contains_point(x, y))
            .map(|b| b.action)
    }

    /// Draws a button with its label centered.
    pub fn render_button(&self, button: &Button) {
        let b = button.bounds;
        draw_rectangle(b.x, b.y, b.w, b.h, button.color);

        let dims = measure_text(button.label, None, self.label_size, 1.0);
        let (cx, cy) = b.center();
        draw_text(
            button.label,
            cx - dims.width / 2.0,
            cy - dims.height / 2.0 + dims.offset_y,
            self.label_size as f32,
            palette::BLACK,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ui() -> UI {
        UI::new(800.0, 400.0)
    }

    #[test]
    fn test_start_button_layout() {
        let [start, quit] = ui().start_buttons();
        assert_eq!(start.bounds, Bounds::new(280.0, 200.0, 100.0, 50.0));
        assert_eq!(quit.bounds, Bounds::new(420.0, 200.0, 100.0, 50.0));
        assert_eq!(start.action, ButtonAction::Start);
        assert_eq!(quit.action, ButtonAction::Quit);
    }

    #[test]
    fn test_game_over_button_layout() {
        let [restart, quit] = ui().game_over_buttons();
        assert_eq!(restart.bounds, Bounds::new(290.0, 250.0, 100.0, 50.0));
        assert_eq!(quit.bounds, Bounds::new(410.0, 250.0, 100.0, 50.0));
        assert_eq!(restart.action, ButtonAction::Restart);
    }

    #[test]
    fn test_hit_test_inside_buttons() {
        let buttons = ui().start_buttons();
        assert_eq!(UI::hit_test(&buttons, 300.0, 220.0), Some(ButtonAction::Start));
        assert_eq!(UI::hit_test(&buttons, 470.0, 249.0), Some(ButtonAction::Quit));
    }

    #[test]
    fn test_hit_test_misses() {
        let buttons = ui().game_over_buttons();
        // Gap between the two buttons
        assert_eq!(UI::hit_test(&buttons, 400.0, 275.0), None);
        // Above the buttons
        assert_eq!(UI::hit_test(&buttons, 300.0, 100.0), None);
    }
}
