//! # Rendering Module
//!
//! Drawing the playfield and the modal screens with macroquad's shape and
//! text primitives. No textures or fonts are loaded.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;

/// Colors used across the game.
pub mod palette {
    use macroquad::prelude::Color;

    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const SKY_BLUE: Color = Color::new(135.0 / 255.0, 206.0 / 255.0, 235.0 / 255.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const GREY: Color = Color::new(100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0, 1.0);
    pub const GREEN: Color = Color::new(50.0 / 255.0, 205.0 / 255.0, 50.0 / 255.0, 1.0);
    pub const FOREST_GREEN: Color = Color::new(34.0 / 255.0, 139.0 / 255.0, 34.0 / 255.0, 1.0);
    pub const BROWN: Color = Color::new(139.0 / 255.0, 69.0 / 255.0, 19.0 / 255.0, 1.0);
    pub const RED: Color = Color::new(200.0 / 255.0, 0.0, 0.0, 1.0);
    pub const DARK_RED: Color = Color::new(150.0 / 255.0, 0.0, 0.0, 1.0);
    pub const ORANGE: Color = Color::new(1.0, 69.0 / 255.0, 0.0, 1.0);
}
