//! Core geometry types for the desktop
//!
//! Positions and sizes are in CSS pixels relative to the desktop's top-left
//! corner. Windows and icons share these types.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
