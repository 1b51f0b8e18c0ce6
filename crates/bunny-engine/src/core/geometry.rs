use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tolerance used when deciding whether two edges are touching.
pub const CONTACT_EPSILON: f32 = 1e-3;

/// Axis-aligned rectangle in world units. `pos` is the top-left corner,
/// Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rectangle from its top-left corner and size.
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Both dimensions strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// True if the rectangles share a region of positive area.
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True if `inner` lies entirely within `self` (shared edges allowed).
    pub fn contains(&self, inner: &Aabb) -> bool {
        inner.left() >= self.left()
            && inner.right() <= self.right()
            && inner.top() >= self.top()
            && inner.bottom() <= self.bottom()
    }

    /// True if `self` sits on top of `support`: its bottom edge touches the
    /// support's top edge and the two overlap horizontally.
    pub fn rests_on(&self, support: &Aabb) -> bool {
        (self.bottom() - support.top()).abs() <= CONTACT_EPSILON
            && self.left() < support.right()
            && support.left() < self.right()
    }
}

/// Free-function form of [`Aabb::overlaps`].
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}

/// Free-function form of [`Aabb::contains`].
pub fn contains(outer: &Aabb, inner: &Aabb) -> bool {
    outer.contains(inner)
}
