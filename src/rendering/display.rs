//! # Display Management
//!
//! Draws a run and the two modal screens with macroquad.

use crate::input::CONTROLS_HINT;
use crate::rendering::palette;
use crate::rendering::{Button, UI};
use crate::{Cloud, Dragon, GameConfig, Obstacle, ObstacleKind, WorldState};
use macroquad::prelude::*;

/// Font size of the score counter and the game-over score line
const TEXT_SIZE: u16 = 30;
/// Font size of the screen titles
const TITLE_SIZE: u16 = 60;
/// Font size of the controls hint
const HINT_SIZE: u16 = 20;

/// Macroquad display manager for the game.
///
/// Holds the playfield geometry and the button layout; every frame is drawn
/// from scratch.
pub struct MacroquadDisplay {
    /// Screen width in pixels
    pub screen_width: f32,
    /// Screen height in pixels
    pub screen_height: f32,
    /// Top edge of the grass band
    pub ground_top: f32,
    /// Button layout for the modal screens
    pub ui: UI,
}

impl MacroquadDisplay {
    /// Creates a display for the playfield described by `config`.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            screen_width: config.screen_width,
            screen_height: config.screen_height,
            ground_top: config.ground_band_top(),
            ui: UI::new(config.screen_width, config.screen_height),
        }
    }

    /// Renders one frame of a run: sky, clouds, ground, dragon, obstacles and
    /// the score.
    pub fn render_game(&self, world: &WorldState) {
        clear_background(palette::SKY_BLUE);

        for cloud in &world.clouds {
            self.render_cloud(cloud);
        }

        draw_rectangle(
            0.0,
            self.ground_top,
            self.screen_width,
            self.screen_height - self.ground_top,
            palette::GREEN,
        );

        self.render_dragon(&world.dragon);

        for obstacle in &world.obstacles {
            self.render_obstacle(obstacle);
        }

        let score = format!("Score: {}", world.score);
        self.draw_text_top_left(&score, self.screen_width - 150.0, 10.0, TEXT_SIZE, palette::BLACK);
    }

    /// Renders the start screen and returns the buttons drawn on it.
    pub fn render_start_screen(&self) -> [Button; 2] {
        clear_background(palette::SKY_BLUE);

        let title_y = self.screen_height / 3.0 - 50.0;
        self.draw_text_centered("Flying Dragon", title_y, TITLE_SIZE, palette::BLACK);
        self.draw_text_centered(CONTROLS_HINT, title_y + 70.0, HINT_SIZE, palette::BLACK);

        let buttons = self.ui.start_buttons();
        for button in &buttons {
            self.ui.render_button(button);
        }
        buttons
    }

    /// Renders the game-over screen and returns the buttons drawn on it.
    pub fn render_game_over_screen(&self, score: u32, best: u32) -> [Button; 2] {
        clear_background(palette::SKY_BLUE);

        let title_y = self.screen_height / 3.0 - 50.0;
        self.draw_text_centered("Game Over", title_y, TITLE_SIZE, palette::BLACK);
        self.draw_text_centered(&format!("Score: {}", score), title_y + 70.0, TEXT_SIZE, palette::BLACK);
        self.draw_text_centered(&format!("Best: {}", best), title_y + 105.0, HINT_SIZE, palette::BLACK);

        let buttons = self.ui.game_over_buttons();
        for button in &buttons {
            self.ui.render_button(button);
        }
        buttons
    }

    fn render_dragon(&self, dragon: &Dragon) {
        let b = dragon.bounds();
        draw_rectangle(b.x, b.y, b.w, b.h, palette::RED);
        // Wing
        draw_triangle(
            vec2(b.left() - 10.0, b.top() + 10.0),
            vec2(b.left() + 10.0, b.bottom() - 10.0),
            vec2(b.left() + 20.0, b.bottom() - 10.0),
            palette::DARK_RED,
        );
    }

    fn render_cloud(&self, cloud: &Cloud) {
        let (x, y) = (cloud.x, cloud.y);
        draw_ellipse(x + 25.0, y + 15.0, 25.0, 15.0, 0.0, palette::WHITE);
        draw_ellipse(x + 45.0, y + 10.0, 25.0, 20.0, 0.0, palette::WHITE);
        draw_ellipse(x + 65.0, y + 15.0, 25.0, 15.0, 0.0, palette::WHITE);
    }

    fn render_obstacle(&self, obstacle: &Obstacle) {
        let b = obstacle.bounds();
        match obstacle.kind {
            ObstacleKind::Rock => {
                draw_rectangle(b.x, b.y, b.w, b.h, palette::GREY);
            }
            ObstacleKind::Tree => {
                let trunk_height = b.h / 2.0;
                draw_rectangle(b.x + b.w / 2.0 - 5.0, b.y + trunk_height, 10.0, trunk_height, palette::BROWN);
                draw_ellipse(b.x + b.w / 2.0, b.y + b.h / 4.0, b.w / 2.0, b.h / 4.0, 0.0, palette::FOREST_GREEN);
            }
            ObstacleKind::Fireball => {
                let (cx, cy) = b.center();
                draw_circle(cx, cy, b.w / 2.0, palette::ORANGE);
            }
        }
    }

    /// Draws text with its top-left corner at (x, y).
    fn draw_text_top_left(&self, text: &str, x: f32, y: f32, size: u16, color: Color) {
        let dims = measure_text(text, None, size, 1.0);
        draw_text(text, x, y + dims.offset_y, size as f32, color);
    }

    /// Draws text horizontally centered with its top edge at y.
    fn draw_text_centered(&self, text: &str, y: f32, size: u16, color: Color) {
        let dims = measure_text(text, None, size, 1.0);
        let x = self.screen_width / 2.0 - dims.width / 2.0;
        draw_text(text, x, y + dims.offset_y, size as f32, color);
    }
}
