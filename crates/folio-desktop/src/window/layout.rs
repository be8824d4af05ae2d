//! Responsive window geometry
//!
//! Two placement rules exist. Opening a window centers it and then keeps it
//! a margin away from the right/bottom edges. The viewport-resize reactor
//! only centers, with the margin as a lower bound. Both floor to whole
//! pixels.

use crate::config::{LayoutConfig, ResponsiveSize};
use crate::math::{Size, Vec2};
use crate::viewport::{Breakpoint, Viewport};

/// Default window size for the viewport's breakpoint
pub fn responsive_size(sizing: &ResponsiveSize, viewport: &Viewport, layout: &LayoutConfig) -> Size {
    match viewport.breakpoint(layout) {
        Breakpoint::Mobile => {
            let room = Size::new(
                viewport.width() - layout.mobile_inset.width,
                viewport.height() - layout.mobile_inset.height,
            );
            // Phones narrower than the minimum window get the whole screen
            let floor = layout.min_window_size.min(viewport.size).max(Size::new(0.0, 0.0));
            sizing.mobile_max.min(room).max(floor)
        }
        Breakpoint::Tablet => sizing.tablet,
        Breakpoint::Desktop => sizing.desktop,
    }
}

/// Position used by the viewport-resize reactor
///
/// `max(margin, floor((viewport - size) / 2))` on each axis.
pub fn centered_position(viewport: Size, size: Size, margin: f32) -> Vec2 {
    Vec2::new(
        ((viewport.width - size.width) / 2.0).floor().max(margin),
        ((viewport.height - size.height) / 2.0).floor().max(margin),
    )
}

/// Position used when a window is opened
///
/// Centers within the (floored) open area, pulls the window back so its
/// far edges sit at least `edge_margin` inside the area, then applies the
/// margin as a lower bound. The lower bound wins when the window is larger
/// than the area, so the result is never negative.
///
/// Viewports smaller than the floored area then pull the window back so at
/// least a margin-wide strip of it starts inside the measured viewport.
pub fn open_position(viewport: &Viewport, size: Size, layout: &LayoutConfig) -> Vec2 {
    let area = viewport.open_area(layout);
    let margin = layout.edge_margin;

    let axis = |extent: f32, measured: f32, length: f32| {
        let centered = ((extent - length) / 2.0).floor();
        let inside = centered.min(extent - length - margin).max(margin);
        let strip = length.clamp(1.0, margin.max(1.0));
        inside.min((measured - strip).floor().max(0.0))
    };

    Vec2::new(
        axis(area.width, viewport.width(), size.width),
        axis(area.height, viewport.height(), size.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects() -> ResponsiveSize {
        ResponsiveSize {
            mobile_max: Size::new(350.0, 500.0),
            tablet: Size::new(600.0, 500.0),
            desktop: Size::new(800.0, 600.0),
        }
    }

    #[test]
    fn test_responsive_size_per_breakpoint() {
        let layout = LayoutConfig::default();
        let sizing = projects();

        let desktop = responsive_size(&sizing, &Viewport::new(1280.0, 800.0), &layout);
        assert_eq!(desktop, Size::new(800.0, 600.0));

        let tablet = responsive_size(&sizing, &Viewport::new(1000.0, 800.0), &layout);
        assert_eq!(tablet, Size::new(600.0, 500.0));

        let mobile = responsive_size(&sizing, &Viewport::new(600.0, 800.0), &layout);
        assert_eq!(mobile, Size::new(350.0, 500.0));
    }

    #[test]
    fn test_mobile_size_shrinks_with_viewport() {
        let layout = LayoutConfig::default();
        let mobile = responsive_size(&projects(), &Viewport::new(360.0, 540.0), &layout);
        assert_eq!(mobile, Size::new(320.0, 440.0));
    }

    #[test]
    fn test_centered_position() {
        let pos = centered_position(Size::new(1280.0, 800.0), Size::new(800.0, 600.0), 20.0);
        assert_eq!(pos, Vec2::new(240.0, 100.0));

        // Odd remainder floors
        let pos = centered_position(Size::new(1001.0, 801.0), Size::new(500.0, 500.0), 20.0);
        assert_eq!(pos, Vec2::new(250.0, 150.0));

        // Oversized windows stick to the margin
        let pos = centered_position(Size::new(300.0, 300.0), Size::new(500.0, 500.0), 20.0);
        assert_eq!(pos, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_open_position_keeps_margin() {
        let layout = LayoutConfig::default();

        let pos = open_position(&Viewport::new(1280.0, 800.0), Size::new(800.0, 600.0), &layout);
        assert_eq!(pos, Vec2::new(240.0, 100.0));

        // Centering would leave 10px at the bottom, so it moves up
        let pos = open_position(&Viewport::new(1280.0, 620.0), Size::new(800.0, 600.0), &layout);
        assert_eq!(pos.y, 20.0);
    }

    #[test]
    fn test_open_position_uses_floored_area() {
        let layout = LayoutConfig::default();
        // Centered in 320x320, not in the measured 100x100
        let pos = open_position(&Viewport::new(100.0, 100.0), Size::new(200.0, 200.0), &layout);
        assert_eq!(pos, Vec2::new(60.0, 60.0));

        let pos = open_position(&Viewport::new(100.0, 100.0), Size::new(500.0, 500.0), &layout);
        assert_eq!(pos, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_open_position_stays_inside_tiny_viewport() {
        let layout = LayoutConfig::default();
        let viewport = Viewport::new(10.0, 10.0);

        let pos = open_position(&viewport, Size::new(200.0, 200.0), &layout);
        assert_eq!(pos, Vec2::new(0.0, 0.0));

        let pos = open_position(&viewport, Size::new(0.0, 0.0), &layout);
        assert!(pos.x < 10.0 && pos.y < 10.0, "off-screen {:?}", pos);
    }

    #[test]
    fn test_mobile_size_never_collapses() {
        let layout = LayoutConfig::default();

        // Room is 280x440, but the minimum window still fits the screen
        let narrow = responsive_size(&projects(), &Viewport::new(320.0, 540.0), &layout);
        assert_eq!(narrow, Size::new(300.0, 440.0));

        // Smaller than the minimum window: fill the viewport
        let tiny = responsive_size(&projects(), &Viewport::new(10.0, 10.0), &layout);
        assert_eq!(tiny, Size::new(10.0, 10.0));
    }
}
