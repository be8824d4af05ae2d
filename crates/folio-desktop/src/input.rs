//! Input routing for window drag surfaces
//!
//! The router tracks one window gesture at a time (a title-bar move or an
//! edge/corner resize) and turns pointer positions into
//! [`DesktopCommand`]s. It never touches window records itself.

use tracing::trace;

use crate::command::DesktopCommand;
use crate::math::{Rect, Size, Vec2};
use crate::types::WindowId;

/// Keys the desktop reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Space,
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            _ => Self::Other,
        }
    }

    /// True for the keys that activate a focused icon or dock entry
    pub fn activates(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// Edge or corner a resize gesture started from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeHandle {
    /// Parse the direction string sent by a resize handle element
    pub fn from_direction(direction: &str) -> Option<Self> {
        match direction {
            "n" => Some(Self::N),
            "s" => Some(Self::S),
            "e" => Some(Self::E),
            "w" => Some(Self::W),
            "ne" => Some(Self::NE),
            "nw" => Some(Self::NW),
            "se" => Some(Self::SE),
            "sw" => Some(Self::SW),
            _ => None,
        }
    }

    fn moves_left(self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }

    fn moves_right(self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }

    fn moves_top(self) -> bool {
        matches!(self, Self::N | Self::NE | Self::NW)
    }

    fn moves_bottom(self) -> bool {
        matches!(self, Self::S | Self::SE | Self::SW)
    }
}

/// Gesture in progress
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Dragging a window by its title bar
    MoveWindow {
        window_id: WindowId,
        /// Pointer position relative to the window's top-left corner
        offset: Vec2,
        size: Size,
    },
    /// Resizing a window from an edge or corner
    ResizeWindow {
        window_id: WindowId,
        handle: ResizeHandle,
        start_pos: Vec2,
        start_size: Size,
        start_mouse: Vec2,
    },
}

impl DragState {
    /// Window the gesture belongs to
    pub fn window_id(&self) -> &str {
        match self {
            Self::MoveWindow { window_id, .. } | Self::ResizeWindow { window_id, .. } => window_id,
        }
    }
}

/// Calculate new window geometry for a resize gesture
///
/// Edges opposite to the handle stay put. Width and height never drop
/// below `min_size`; when the floor kicks in on a left or top handle the
/// window stops moving instead of sliding past its far edge.
pub fn calculate_resize(
    handle: ResizeHandle,
    start_pos: Vec2,
    start_size: Size,
    delta: Vec2,
    min_size: Size,
) -> (Vec2, Size) {
    let mut pos = start_pos;
    let mut size = start_size;

    if handle.moves_right() {
        size.width = (start_size.width + delta.x).max(min_size.width);
    }
    if handle.moves_left() {
        size.width = (start_size.width - delta.x).max(min_size.width);
        pos.x = start_pos.x + start_size.width - size.width;
    }
    if handle.moves_bottom() {
        size.height = (start_size.height + delta.y).max(min_size.height);
    }
    if handle.moves_top() {
        size.height = (start_size.height - delta.y).max(min_size.height);
        pos.y = start_pos.y + start_size.height - size.height;
    }

    (pos, size)
}

/// Keep a resized frame inside the parent
///
/// Edges crossing the parent are cut back to it; the size floor still wins
/// over the parent when the parent is smaller than the floor.
fn bound_resize(pos: Vec2, size: Size, parent: Size, min_size: Size) -> (Vec2, Size) {
    let left = pos.x.max(0.0);
    let top = pos.y.max(0.0);
    let right = (pos.x + size.width).min(parent.width);
    let bottom = (pos.y + size.height).min(parent.height);

    let size = Size::new(
        (right - left).max(min_size.width),
        (bottom - top).max(min_size.height),
    );
    (Vec2::new(left, top), size)
}

/// Window gesture state machine
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    drag: Option<DragState>,
    last_pointer: Option<Vec2>,
}

impl InputRouter {
    /// Create an idle router
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gesture, if any
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// True while a gesture is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start dragging a window by its title bar
    pub fn start_window_move(&mut self, window_id: WindowId, offset: Vec2, size: Size) {
        trace!(window_id = %window_id, "window move started");
        self.drag = Some(DragState::MoveWindow {
            window_id,
            offset,
            size,
        });
        self.last_pointer = None;
    }

    /// Start resizing a window
    pub fn start_window_resize(
        &mut self,
        window_id: WindowId,
        handle: ResizeHandle,
        start_pos: Vec2,
        start_size: Size,
        start_mouse: Vec2,
    ) {
        trace!(window_id = %window_id, ?handle, "window resize started");
        self.drag = Some(DragState::ResizeWindow {
            window_id,
            handle,
            start_pos,
            start_size,
            start_mouse,
        });
        self.last_pointer = None;
    }

    /// Geometry updates for a pointer position
    ///
    /// Returns nothing when no gesture is active.
    pub fn pointer_move(&mut self, pointer: Vec2, parent: Size, min_size: Size) -> Vec<DesktopCommand> {
        if self.drag.is_none() {
            return Vec::new();
        }
        self.last_pointer = Some(pointer);
        self.commands_for(pointer, parent, min_size)
    }

    /// Finish the gesture
    ///
    /// Re-emits the geometry of the last pointer position so the final
    /// frame is committed even if the host coalesced move events.
    pub fn pointer_up(&mut self, parent: Size, min_size: Size) -> Vec<DesktopCommand> {
        let commands = match self.last_pointer {
            Some(pointer) => self.commands_for(pointer, parent, min_size),
            None => Vec::new(),
        };
        self.end_drag();
        commands
    }

    /// Drop the current gesture without emitting anything
    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            trace!(window_id = drag.window_id(), "window gesture ended");
        }
        self.last_pointer = None;
    }

    fn commands_for(&self, pointer: Vec2, parent: Size, min_size: Size) -> Vec<DesktopCommand> {
        match &self.drag {
            Some(DragState::MoveWindow {
                window_id,
                offset,
                size,
            }) => {
                let position = Rect::clamp_position(parent, *size, pointer - *offset);
                vec![DesktopCommand::UpdatePosition {
                    id: window_id.clone(),
                    position,
                }]
            }
            Some(DragState::ResizeWindow {
                window_id,
                handle,
                start_pos,
                start_size,
                start_mouse,
            }) => {
                let delta = pointer - *start_mouse;
                let (pos, size) = calculate_resize(*handle, *start_pos, *start_size, delta, min_size);
                let (position, size) = bound_resize(pos, size, parent, min_size);
                vec![
                    DesktopCommand::UpdatePosition {
                        id: window_id.clone(),
                        position,
                    },
                    DesktopCommand::UpdateSize {
                        id: window_id.clone(),
                        size,
                    },
                ]
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARENT: Size = Size::new(1280.0, 800.0);
    const MIN: Size = Size::new(300.0, 200.0);

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom("Enter"), Key::Enter);
        assert_eq!(Key::from_dom(" "), Key::Space);
        assert_eq!(Key::from_dom("Escape"), Key::Escape);
        assert_eq!(Key::from_dom("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_dom("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_dom("a"), Key::Other);
        assert!(Key::Space.activates());
        assert!(!Key::Escape.activates());
    }

    #[test]
    fn test_resize_handle_from_direction() {
        assert_eq!(ResizeHandle::from_direction("se"), Some(ResizeHandle::SE));
        assert_eq!(ResizeHandle::from_direction("w"), Some(ResizeHandle::W));
        assert_eq!(ResizeHandle::from_direction("up"), None);
    }

    #[test]
    fn test_calculate_resize_se() {
        let (pos, size) = calculate_resize(
            ResizeHandle::SE,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(50.0, 20.0),
            MIN,
        );
        assert_eq!(pos, Vec2::new(100.0, 100.0));
        assert!((size.width - 450.0).abs() < 0.001);
        assert!((size.height - 320.0).abs() < 0.001);
    }

    #[test]
    fn test_calculate_resize_nw_keeps_far_edges() {
        let (pos, size) = calculate_resize(
            ResizeHandle::NW,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(-30.0, 40.0),
            MIN,
        );
        assert_eq!(pos, Vec2::new(70.0, 140.0));
        assert_eq!(size, Size::new(430.0, 260.0));
        assert!((pos.x + size.width - 500.0).abs() < 0.001);
        assert!((pos.y + size.height - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_calculate_resize_respects_floor() {
        let (pos, size) = calculate_resize(
            ResizeHandle::W,
            Vec2::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Vec2::new(250.0, 0.0),
            MIN,
        );
        assert_eq!(size.width, 300.0);
        assert_eq!(pos.x, 200.0);
    }

    #[test]
    fn test_move_is_bounded_to_parent() {
        let mut router = InputRouter::new();
        router.start_window_move("projects".into(), Vec2::new(10.0, 5.0), Size::new(800.0, 600.0));
        assert!(router.is_dragging());

        let cmds = router.pointer_move(Vec2::new(2000.0, -50.0), PARENT, MIN);
        assert_eq!(
            cmds,
            vec![DesktopCommand::UpdatePosition {
                id: "projects".into(),
                position: Vec2::new(480.0, 0.0),
            }]
        );
    }

    #[test]
    fn test_resize_emits_position_and_size() {
        let mut router = InputRouter::new();
        router.start_window_resize(
            "resources".into(),
            ResizeHandle::E,
            Vec2::new(100.0, 100.0),
            Size::new(350.0, 250.0),
            Vec2::new(450.0, 200.0),
        );
        let cmds = router.pointer_move(Vec2::new(500.0, 260.0), PARENT, MIN);
        assert_eq!(cmds.len(), 2);
        assert_eq!(
            cmds[1],
            DesktopCommand::UpdateSize {
                id: "resources".into(),
                size: Size::new(400.0, 250.0),
            }
        );
    }

    #[test]
    fn test_resize_cut_back_at_parent_edge() {
        let mut router = InputRouter::new();
        router.start_window_resize(
            "resources".into(),
            ResizeHandle::SE,
            Vec2::new(1000.0, 500.0),
            Size::new(300.0, 200.0),
            Vec2::new(1300.0, 700.0),
        );
        let cmds = router.pointer_move(Vec2::new(1500.0, 900.0), PARENT, MIN);
        assert_eq!(
            cmds[1],
            DesktopCommand::UpdateSize {
                id: "resources".into(),
                size: Size::new(300.0, 300.0),
            }
        );
    }

    #[test]
    fn test_pointer_up_commits_last_position() {
        let mut router = InputRouter::new();
        router.start_window_move("projects".into(), Vec2::ZERO, Size::new(400.0, 300.0));
        router.pointer_move(Vec2::new(30.0, 40.0), PARENT, MIN);

        let cmds = router.pointer_up(PARENT, MIN);
        assert_eq!(
            cmds,
            vec![DesktopCommand::UpdatePosition {
                id: "projects".into(),
                position: Vec2::new(30.0, 40.0),
            }]
        );
        assert!(!router.is_dragging());
    }

    #[test]
    fn test_idle_router_emits_nothing() {
        let mut router = InputRouter::new();
        assert!(router.pointer_move(Vec2::new(1.0, 1.0), PARENT, MIN).is_empty());
        assert!(router.pointer_up(PARENT, MIN).is_empty());

        router.start_window_move("projects".into(), Vec2::ZERO, Size::new(400.0, 300.0));
        assert!(router.pointer_up(PARENT, MIN).is_empty());
    }
}
