//! Axis-aligned rectangle

use super::{Size, Vec2};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from position and size
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    /// Get position (top-left)
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Clamp a top-left position so a box of `size` stays inside `parent`.
    ///
    /// A box larger than the parent is pinned to the parent's top-left edge.
    pub fn clamp_position(parent: Size, size: Size, pos: Vec2) -> Vec2 {
        let max_x = (parent.width - size.width).max(0.0);
        let max_y = (parent.height - size.height).max(0.0);
        Vec2::new(pos.x.clamp(0.0, max_x), pos.y.clamp(0.0, max_y))
    }
}
