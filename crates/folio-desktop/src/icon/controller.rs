//! Draggable icon controller

use serde::Serialize;
use tracing::{debug, trace};

use super::{IconRecord, IconSize};
use crate::command::DesktopCommand;
use crate::config::LayoutConfig;
use crate::input::Key;
use crate::math::{Rect, Size, Vec2};
use crate::types::IconId;
use crate::viewport::{IconScale, Viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
struct IconDrag {
    /// Pointer position relative to the icon's top-left corner
    offset: Vec2,
    /// Position shown while dragging, committed on release
    live: Vec2,
}

/// One icon's position, drag gesture and activation rules
///
/// On desktop-class viewports the icon drags and opens on double-click.
/// On mobile-class viewports (narrow or touch) dragging is disabled and a
/// single click opens. Enter and Space open in either mode.
#[derive(Clone, Debug)]
pub struct DraggableIcon {
    record: IconRecord,
    position: Vec2,
    size: IconSize,
    is_mobile: bool,
    drag: Option<IconDrag>,
}

impl DraggableIcon {
    /// Create an icon at its initial position, sized for a large viewport
    pub fn new(record: IconRecord) -> Self {
        let position = record.initial_position;
        Self {
            record,
            position,
            size: IconSize::for_scale(IconScale::Large),
            is_mobile: false,
            drag: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }

    /// Committed position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Position to render: the live drag position while dragging
    pub fn display_position(&self) -> Vec2 {
        self.drag.map(|d| d.live).unwrap_or(self.position)
    }

    pub fn size(&self) -> IconSize {
        self.size
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Recompute mode and size for a new viewport
    pub fn on_viewport(&mut self, viewport: &Viewport, layout: &LayoutConfig) {
        self.is_mobile = viewport.is_mobile(layout);
        self.size = IconSize::for_scale(viewport.icon_scale(layout));
        if self.is_mobile && self.drag.take().is_some() {
            debug!(id = %self.record.id, "icon drag cancelled: viewport became mobile");
        }
    }

    /// Start dragging; ignored in mobile mode
    pub fn begin_drag(&mut self, pointer: Vec2) -> bool {
        if self.is_mobile {
            return false;
        }
        self.drag = Some(IconDrag {
            offset: pointer - self.position,
            live: self.position,
        });
        trace!(id = %self.record.id, "icon drag started");
        true
    }

    /// Follow the pointer, staying inside the parent container
    pub fn drag_to(&mut self, pointer: Vec2, parent: Size) -> Option<Vec2> {
        let footprint = self.size.footprint();
        let drag = self.drag.as_mut()?;
        drag.live = Rect::clamp_position(parent, footprint, pointer - drag.offset);
        Some(drag.live)
    }

    /// Commit the live position
    pub fn end_drag(&mut self) -> bool {
        match self.drag.take() {
            Some(drag) => {
                self.position = drag.live;
                trace!(id = %self.record.id, x = drag.live.x, y = drag.live.y, "icon dropped");
                true
            }
            None => false,
        }
    }

    /// Single click; opens only in mobile mode
    pub fn click(&self) -> Option<DesktopCommand> {
        self.is_mobile.then(|| self.open())
    }

    /// Double click; opens only in desktop mode
    pub fn double_click(&self) -> Option<DesktopCommand> {
        (!self.is_mobile).then(|| self.open())
    }

    /// Keyboard activation
    pub fn key(&self, key: Key) -> Option<DesktopCommand> {
        key.activates().then(|| self.open())
    }

    fn open(&self) -> DesktopCommand {
        DesktopCommand::Open(self.record.id.clone())
    }

    /// Render-ready snapshot
    pub fn view(&self) -> IconView {
        IconView {
            id: self.record.id.clone(),
            title: self.record.title.clone(),
            image: self.record.image.clone(),
            alt: self.record.alt.clone(),
            position: self.display_position(),
            size: self.size,
            is_dragging: self.is_dragging(),
        }
    }
}

/// Icon as the shell renders it
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IconView {
    pub id: IconId,
    pub title: String,
    pub image: String,
    pub alt: String,
    pub position: Vec2,
    pub size: IconSize,
    pub is_dragging: bool,
}
