//! # Utilities Module
//!
//! Geometry helpers shared by the game rules and the user interface.

pub mod math;

pub use math::*;
