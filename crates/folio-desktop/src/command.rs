//! Requests flowing from child controllers to the composition root
//!
//! Icons, window drag surfaces and the dock never hold the window
//! collection. They hand back a [`DesktopCommand`] and the
//! [`DesktopEngine`](crate::DesktopEngine) applies it.

use crate::math::{Size, Vec2};
use crate::types::WindowId;

/// A state change requested by a child controller
#[derive(Clone, Debug, PartialEq)]
pub enum DesktopCommand {
    /// Open a window, or run the launcher registered under this id
    Open(WindowId),
    /// Close a window
    Close(WindowId),
    /// Make a visible window the active one
    Focus(WindowId),
    /// Hide an open window without closing it
    Minimize(WindowId),
    /// Bring a minimized window back
    Restore(WindowId),
    /// Overwrite a window's position
    UpdatePosition { id: WindowId, position: Vec2 },
    /// Overwrite a window's size
    UpdateSize { id: WindowId, size: Size },
}
