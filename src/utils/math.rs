//! # Game Mathematics
//!
//! Axis-aligned boxes used for collision queries and button hit-testing.

/// An axis-aligned rectangle in screen space (y grows downward).
///
/// Overlap and containment treat the right and bottom edges as exclusive, so
/// two boxes that merely share an edge do not intersect.
///
/// # Examples
///
/// ```
/// use flying_dragon::Bounds;
///
/// let dragon = Bounds::new(50.0, 260.0, 60.0, 40.0);
/// let rock = Bounds::new(50.0, 260.0, 20.0, 40.0);
/// assert!(dragon.intersects(&rock));
///
/// let far_rock = Bounds::new(500.0, 260.0, 20.0, 40.0);
/// assert!(!dragon.intersects(&far_rock));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    /// Creates a box from its top-left corner and size.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Returns the center point of the box.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Standard axis-aligned overlap test on both axes.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Returns true if the point lies inside the box.
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}
