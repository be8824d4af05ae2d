//! Window record

use serde::Serialize;

use super::{WindowId, ACTIVE_Z_INDEX, INACTIVE_Z_INDEX};
use crate::config::{ResponsiveSize, WindowSpec};
use crate::math::{Rect, Size, Vec2};

/// A window known to the desktop
///
/// Records are created once from the window catalogue and never removed.
/// `content` is whatever the host renders inside the frame; the engine
/// carries it around without looking at it.
#[derive(Clone, Debug)]
pub struct WindowRecord<C> {
    pub id: WindowId,
    pub title: String,
    pub content: C,
    pub is_open: bool,
    pub is_minimized: bool,
    pub position: Vec2,
    pub size: Size,
    /// Breakpoint sizes reapplied on viewport changes
    pub(crate) sizing: Option<ResponsiveSize>,
}

impl<C> WindowRecord<C> {
    /// Create a closed window from its catalogue entry
    pub fn from_spec(spec: &WindowSpec, content: C) -> Self {
        Self {
            id: spec.id.clone(),
            title: spec.title.clone(),
            content,
            is_open: false,
            is_minimized: false,
            position: spec.position,
            size: spec.size,
            sizing: spec.sizing,
        }
    }

    /// Rendered iff open and not minimized
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }

    /// Current frame rectangle
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }
}

/// Render-ready view of a visible window
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindowView<C> {
    pub id: WindowId,
    pub title: String,
    pub content: C,
    pub position: Vec2,
    pub size: Size,
    pub is_active: bool,
    pub z_index: u32,
}

impl<C: Clone> WindowView<C> {
    pub(crate) fn of(record: &WindowRecord<C>, is_active: bool) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            content: record.content.clone(),
            position: record.position,
            size: record.size,
            is_active,
            z_index: if is_active {
                ACTIVE_Z_INDEX
            } else {
                INACTIVE_Z_INDEX
            },
        }
    }
}
