//! Window manager: record storage, focus and the viewport-resize reactor

use tracing::{debug, trace};

use super::layout;
use super::{WindowId, WindowRecord, WindowView};
use crate::config::LayoutConfig;
use crate::error::{DesktopError, DesktopResult};
use crate::math::{Size, Vec2};
use crate::viewport::Viewport;

/// Owns every window record and the active-window pointer
///
/// Records keep catalogue order, which is also render order. Every
/// operation on an unknown id is a no-op that returns `false`.
#[derive(Clone, Debug)]
pub struct WindowManager<C> {
    records: Vec<WindowRecord<C>>,
    active: Option<WindowId>,
}

impl<C> Default for WindowManager<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> WindowManager<C> {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            active: None,
        }
    }

    /// Add a record; ids must be unique
    pub fn insert(&mut self, record: WindowRecord<C>) -> DesktopResult<()> {
        if self.get(&record.id).is_some() {
            return Err(DesktopError::DuplicateWindow(record.id));
        }
        self.records.push(record);
        Ok(())
    }

    /// Look up a record
    pub fn get(&self, id: &str) -> Option<&WindowRecord<C>> {
        self.records.iter().find(|r| r.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut WindowRecord<C>> {
        self.records.iter_mut().find(|r| r.id == id)
    }

    /// All records in catalogue order
    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord<C>> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no records exist
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id of the active window, if any
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether a window is currently the active one
    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Records that should be rendered
    pub fn visible(&self) -> impl Iterator<Item = &WindowRecord<C>> {
        self.records.iter().filter(|r| r.is_visible())
    }

    /// Open a window centered in the viewport and make it active
    pub fn open(&mut self, id: &str, viewport: &Viewport, layout: &LayoutConfig) -> bool {
        let Some(record) = self.get_mut(id) else {
            debug!(id, "open ignored: unknown window");
            return false;
        };

        record.is_open = true;
        record.is_minimized = false;
        record.position = layout::open_position(viewport, record.size, layout);
        trace!(id, x = record.position.x, y = record.position.y, "window opened");

        self.active = Some(record.id.clone());
        true
    }

    /// Close a window; clears the active pointer if it pointed here
    pub fn close(&mut self, id: &str) -> bool {
        let Some(record) = self.get_mut(id) else {
            debug!(id, "close ignored: unknown window");
            return false;
        };

        record.is_open = false;
        record.is_minimized = false;
        if self.is_active(id) {
            self.active = None;
        }
        true
    }

    /// Make a visible window the active one
    ///
    /// Hidden windows cannot become active.
    pub fn focus(&mut self, id: &str) -> bool {
        match self.get(id) {
            Some(record) if record.is_visible() => {
                self.active = Some(record.id.clone());
                true
            }
            Some(_) => {
                debug!(id, "focus ignored: window not visible");
                false
            }
            None => {
                debug!(id, "focus ignored: unknown window");
                false
            }
        }
    }

    /// Hide an open window without closing it
    pub fn minimize(&mut self, id: &str) -> bool {
        let Some(record) = self.get_mut(id) else {
            debug!(id, "minimize ignored: unknown window");
            return false;
        };
        if !record.is_open {
            return false;
        }

        record.is_minimized = true;
        if self.is_active(id) {
            self.active = None;
        }
        true
    }

    /// Show a minimized window again and focus it
    pub fn restore(&mut self, id: &str) -> bool {
        let Some(record) = self.get_mut(id) else {
            debug!(id, "restore ignored: unknown window");
            return false;
        };
        if !record.is_open {
            return false;
        }

        record.is_minimized = false;
        self.focus(id)
    }

    /// Overwrite a window's position
    pub fn update_position(&mut self, id: &str, position: Vec2) -> bool {
        let Some(record) = self.get_mut(id) else {
            debug!(id, "position update ignored: unknown window");
            return false;
        };
        record.position = position;
        true
    }

    /// Overwrite a window's size
    pub fn update_size(&mut self, id: &str, size: Size) -> bool {
        let Some(record) = self.get_mut(id) else {
            debug!(id, "size update ignored: unknown window");
            return false;
        };
        record.size = size;
        true
    }

    /// Viewport-resize reactor
    ///
    /// Every record gets its breakpoint size back and is recentered, open or
    /// not. Manual drags and resizes are discarded. The result depends only
    /// on the viewport, so repeated calls with the same viewport are stable.
    pub fn relayout(&mut self, viewport: &Viewport, layout: &LayoutConfig) {
        for record in &mut self.records {
            if let Some(sizing) = &record.sizing {
                record.size = layout::responsive_size(sizing, viewport, layout);
            }
            record.position =
                layout::centered_position(viewport.size, record.size, layout.edge_margin);
        }
        trace!(
            width = viewport.width(),
            height = viewport.height(),
            "windows relaid out"
        );
    }
}

impl<C: Clone> WindowManager<C> {
    /// Visible windows with their active flag, in render order
    pub fn views(&self) -> Vec<WindowView<C>> {
        self.visible()
            .map(|r| WindowView::of(r, self.is_active(&r.id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DesktopConfig, WindowSpec};

    fn manager() -> WindowManager<()> {
        let config = DesktopConfig::default();
        let mut windows = WindowManager::new();
        for spec in &config.windows {
            windows.insert(WindowRecord::from_spec(spec, ())).unwrap();
        }
        windows
    }

    fn desktop() -> Viewport {
        Viewport::new(1280.0, 800.0)
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut windows = manager();
        let spec = WindowSpec {
            id: "projects".to_string(),
            title: "Again".to_string(),
            position: Vec2::ZERO,
            size: Size::new(300.0, 200.0),
            sizing: None,
        };
        let err = windows.insert(WindowRecord::from_spec(&spec, ()));
        assert_eq!(err, Err(DesktopError::DuplicateWindow("projects".to_string())));
        assert_eq!(windows.len(), 3);
    }

    #[test]
    fn test_open_sets_visible_and_active() {
        let layout = LayoutConfig::default();
        let mut windows = manager();

        assert!(windows.open("projects", &desktop(), &layout));
        let record = windows.get("projects").unwrap();
        assert!(record.is_visible());
        assert_eq!(windows.active(), Some("projects"));
    }

    #[test]
    fn test_open_clears_minimized() {
        let layout = LayoutConfig::default();
        let mut windows = manager();
        windows.open("resources", &desktop(), &layout);
        windows.minimize("resources");
        windows.open("resources", &desktop(), &layout);
        assert!(windows.get("resources").unwrap().is_visible());
    }

    #[test]
    fn test_close_is_idempotent() {
        let layout = LayoutConfig::default();
        let mut windows = manager();
        windows.open("projects", &desktop(), &layout);

        assert!(windows.close("projects"));
        assert!(windows.close("projects"));
        assert!(!windows.get("projects").unwrap().is_open);
        assert_eq!(windows.active(), None);
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let layout = LayoutConfig::default();
        let mut windows = manager();
        windows.open("who-is-renee", &desktop(), &layout);
        windows.open("projects", &desktop(), &layout);

        windows.close("who-is-renee");
        assert_eq!(windows.active(), Some("projects"));
    }

    #[test]
    fn test_focus_requires_visible_window() {
        let layout = LayoutConfig::default();
        let mut windows = manager();
        assert!(!windows.focus("projects"));
        assert_eq!(windows.active(), None);

        windows.open("projects", &desktop(), &layout);
        windows.open("resources", &desktop(), &layout);
        assert!(windows.focus("projects"));
        assert_eq!(windows.active(), Some("projects"));
    }

    #[test]
    fn test_minimize_clears_active_and_restore_refocuses() {
        let layout = LayoutConfig::default();
        let mut windows = manager();
        windows.open("projects", &desktop(), &layout);

        assert!(windows.minimize("projects"));
        assert_eq!(windows.active(), None);
        assert_eq!(windows.visible().count(), 0);

        assert!(windows.restore("projects"));
        assert_eq!(windows.active(), Some("projects"));
    }

    #[test]
    fn test_minimize_closed_window_is_noop() {
        let mut windows = manager();
        assert!(!windows.minimize("projects"));
        assert!(!windows.get("projects").unwrap().is_minimized);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let layout = LayoutConfig::default();
        let mut windows = manager();
        assert!(!windows.open("nope", &desktop(), &layout));
        assert!(!windows.close("nope"));
        assert!(!windows.focus("nope"));
        assert!(!windows.update_position("nope", Vec2::ZERO));
        assert!(!windows.update_size("nope", Size::new(1.0, 1.0)));
        assert_eq!(windows.active(), None);
    }

    #[test]
    fn test_update_geometry_overwrites() {
        let mut windows = manager();
        windows.update_position("resources", Vec2::new(-5.0, 12.0));
        windows.update_size("resources", Size::new(310.0, 210.0));

        let record = windows.get("resources").unwrap();
        assert_eq!(record.position, Vec2::new(-5.0, 12.0));
        assert_eq!(record.size, Size::new(310.0, 210.0));
    }

    #[test]
    fn test_relayout_discards_manual_resize() {
        let layout = LayoutConfig::default();
        let mut windows = manager();
        windows.update_size("projects", Size::new(999.0, 777.0));

        windows.relayout(&desktop(), &layout);
        let record = windows.get("projects").unwrap();
        assert_eq!(record.size, Size::new(800.0, 600.0));
        assert_eq!(record.position, Vec2::new(240.0, 100.0));
    }

    #[test]
    fn test_relayout_without_sizing_only_recenters() {
        let layout = LayoutConfig::default();
        let mut windows: WindowManager<()> = WindowManager::new();
        let spec = WindowSpec {
            id: "plain".to_string(),
            title: "Plain".to_string(),
            position: Vec2::ZERO,
            size: Size::new(400.0, 400.0),
            sizing: None,
        };
        windows.insert(WindowRecord::from_spec(&spec, ())).unwrap();

        windows.relayout(&desktop(), &layout);
        let record = windows.get("plain").unwrap();
        assert_eq!(record.size, Size::new(400.0, 400.0));
        assert_eq!(record.position, Vec2::new(440.0, 200.0));
    }

    #[test]
    fn test_views_flag_active_window() {
        let layout = LayoutConfig::default();
        let mut windows = manager();
        windows.open("who-is-renee", &desktop(), &layout);
        windows.open("projects", &desktop(), &layout);

        let views = windows.views();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].id, "who-is-renee");
        assert!(!views[0].is_active);
        assert!(views[1].is_active);
    }
}
