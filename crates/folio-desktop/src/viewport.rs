//! Viewport measurements and the breakpoints derived from them

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::math::Size;

/// Window sizing breakpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Width at or below the mobile limit (768 by default)
    Mobile,
    /// Width at or below the tablet limit (1024 by default)
    Tablet,
    /// Anything wider
    Desktop,
}

/// Discrete icon size step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconScale {
    Small,
    Medium,
    Large,
}

/// What the desktop knows about the browser viewport
///
/// Both fields are read-only inputs supplied by the host on every
/// viewport-resize event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Inner width and height in CSS pixels
    pub size: Size,
    /// Coarse "this is a touch/mobile device" signal (user agent sniffing
    /// in the browser)
    pub touch: bool,
}

impl Viewport {
    /// Create a viewport for a pointer-driven device
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            touch: false,
        }
    }

    /// Mark the viewport as belonging to a touch device
    pub const fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Breakpoint used for default window sizes
    pub fn breakpoint(&self, layout: &LayoutConfig) -> Breakpoint {
        if self.size.width <= layout.mobile_max_width {
            Breakpoint::Mobile
        } else if self.size.width <= layout.tablet_max_width {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Icon size step for this width
    pub fn icon_scale(&self, layout: &LayoutConfig) -> IconScale {
        if self.size.width <= layout.small_icon_max_width {
            IconScale::Small
        } else if self.size.width <= layout.mobile_max_width {
            IconScale::Medium
        } else {
            IconScale::Large
        }
    }

    /// True when icons should use single-tap activation and no dragging
    pub fn is_mobile(&self, layout: &LayoutConfig) -> bool {
        self.size.width <= layout.mobile_max_width || self.touch
    }

    /// Area used to center a window when it is opened
    ///
    /// Tiny or unmeasured viewports are floored so centering never works
    /// against a degenerate area.
    pub fn open_area(&self, layout: &LayoutConfig) -> Size {
        let floor = layout.open_viewport_floor;
        self.size.max(Size::new(floor, floor))
    }
}
