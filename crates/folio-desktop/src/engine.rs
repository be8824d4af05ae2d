//! Desktop composition root
//!
//! [`DesktopEngine`] owns every controller and is the only place window
//! records are mutated. Children hand back [`DesktopCommand`]s which are
//! applied through [`DesktopEngine::dispatch`].

use serde::Serialize;
use tracing::{debug, trace};

use crate::carousel::{Carousel, CarouselState};
use crate::command::DesktopCommand;
use crate::config::{DesktopConfig, LaunchAction, WindowSpec};
use crate::dock::{Dock, DockView, Entropy};
use crate::effect::{Effect, EffectQueue};
use crate::error::DesktopResult;
use crate::icon::{DraggableIcon, IconRecord, IconView};
use crate::input::{InputRouter, Key, ResizeHandle};
use crate::math::Vec2;
use crate::types::{IconId, Millis};
use crate::viewport::{Breakpoint, Viewport};
use crate::window::{WindowManager, WindowRecord, WindowView};

/// Everything the shell needs to draw one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderState<C> {
    pub viewport: Viewport,
    pub breakpoint: Breakpoint,
    pub active_window: Option<String>,
    pub windows: Vec<WindowView<C>>,
    pub icons: Vec<IconView>,
    pub carousel: CarouselState,
    pub dock: DockView,
}

/// The desktop
///
/// `C` is the window content payload. The engine never inspects it; the
/// web shell uses a template name, tests use `()` or `&str`.
///
/// Time never advances on its own. Every operation that starts a timed
/// state takes the caller's clock, and [`tick`](Self::tick) completes the
/// states whose duration has elapsed.
#[derive(Clone, Debug)]
pub struct DesktopEngine<C> {
    config: DesktopConfig,
    viewport: Viewport,
    windows: WindowManager<C>,
    icons: Vec<DraggableIcon>,
    /// Icon currently following the pointer
    icon_drag: Option<IconId>,
    input: InputRouter,
    carousel: Carousel,
    dock: Dock,
    effects: EffectQueue,
}

impl<C> DesktopEngine<C> {
    /// Build a desktop from a configuration
    ///
    /// `content` is called once per window catalogue entry. All windows
    /// start closed and are laid out for `viewport`; the gallery prefetch
    /// is queued straight away.
    pub fn new(
        config: DesktopConfig,
        viewport: Viewport,
        mut content: impl FnMut(&WindowSpec) -> C,
    ) -> DesktopResult<Self> {
        config.validate()?;

        let mut windows = WindowManager::new();
        for spec in &config.windows {
            windows.insert(WindowRecord::from_spec(spec, content(spec)))?;
        }

        let icons: Vec<DraggableIcon> = config
            .icons
            .iter()
            .map(|spec| DraggableIcon::new(IconRecord::from(spec)))
            .collect();

        let carousel = Carousel::new(config.gallery.images.clone(), &config.timing)?;
        let dock = Dock::new(&config.dock, &config.timing);

        let mut engine = Self {
            viewport: Self::measured(&config, viewport),
            config,
            windows,
            icons,
            icon_drag: None,
            input: InputRouter::new(),
            carousel,
            dock,
            effects: EffectQueue::new(),
        };

        engine.apply_viewport();
        let prefetch = engine.carousel.prefetch();
        engine.effects.push(prefetch);

        debug!(
            windows = engine.windows.len(),
            icons = engine.icons.len(),
            images = engine.carousel.len(),
            "desktop initialized"
        );
        Ok(engine)
    }

    /// Replace an unmeasurable viewport with the configured fallback
    fn measured(config: &DesktopConfig, viewport: Viewport) -> Viewport {
        if viewport.width() > 0.0 && viewport.height() > 0.0 {
            viewport
        } else {
            let fallback = config.layout.fallback_viewport;
            Viewport::new(fallback.width, fallback.height).with_touch(viewport.touch)
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn windows(&self) -> &WindowManager<C> {
        &self.windows
    }

    pub fn window(&self, id: &str) -> Option<&WindowRecord<C>> {
        self.windows.get(id)
    }

    pub fn active_window(&self) -> Option<&str> {
        self.windows.active()
    }

    pub fn icons(&self) -> &[DraggableIcon] {
        &self.icons
    }

    pub fn icon(&self, id: &str) -> Option<&DraggableIcon> {
        self.icons.iter().find(|i| i.id() == id)
    }

    fn icon_mut(&mut self, id: &str) -> Option<&mut DraggableIcon> {
        self.icons.iter_mut().find(|i| i.id() == id)
    }

    pub fn input(&self) -> &InputRouter {
        &self.input
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn dock(&self) -> &Dock {
        &self.dock
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Apply a command from a child controller
    ///
    /// Returns whether anything happened. Unknown ids are ignored.
    pub fn dispatch(&mut self, cmd: DesktopCommand) -> bool {
        trace!(?cmd, "dispatch");
        match cmd {
            DesktopCommand::Open(id) => self.open(&id),
            DesktopCommand::Close(id) => {
                self.release_gallery(&id);
                self.windows.close(&id)
            }
            DesktopCommand::Focus(id) => self.windows.focus(&id),
            DesktopCommand::Minimize(id) => {
                let minimized = self.windows.minimize(&id);
                if minimized {
                    self.release_gallery(&id);
                }
                minimized
            }
            DesktopCommand::Restore(id) => self.windows.restore(&id),
            DesktopCommand::UpdatePosition { id, position } => {
                self.windows.update_position(&id, position)
            }
            DesktopCommand::UpdateSize { id, size } => self.windows.update_size(&id, size),
        }
    }

    /// Open a window, or run the launcher registered under `id`
    pub fn open(&mut self, id: &str) -> bool {
        if let Some(action) = self.config.launcher(id) {
            let effect = match action {
                LaunchAction::ComposeMail { recipient } => Effect::ComposeMail {
                    recipient: recipient.clone(),
                },
                LaunchAction::OpenUrl { url } => Effect::OpenUrl { url: url.clone() },
            };
            debug!(id, "launcher activated");
            self.effects.push(effect);
            return true;
        }
        self.windows.open(id, &self.viewport, &self.config.layout)
    }

    pub fn close(&mut self, id: &str) -> bool {
        self.dispatch(DesktopCommand::Close(id.to_string()))
    }

    pub fn focus(&mut self, id: &str) -> bool {
        self.dispatch(DesktopCommand::Focus(id.to_string()))
    }

    pub fn minimize(&mut self, id: &str) -> bool {
        self.dispatch(DesktopCommand::Minimize(id.to_string()))
    }

    pub fn restore(&mut self, id: &str) -> bool {
        self.dispatch(DesktopCommand::Restore(id.to_string()))
    }

    /// Drop the gallery overlay when its host window stops being shown
    fn release_gallery(&mut self, id: &str) {
        if self.config.gallery.host_window.as_deref() == Some(id) {
            self.carousel.reset(&mut self.effects);
        }
        if self.input.drag_state().map(|d| d.window_id()) == Some(id) {
            self.input.end_drag();
        }
    }

    // =========================================================================
    // Icons
    // =========================================================================

    /// Pointer pressed on an icon; starts a drag on desktop-class viewports
    ///
    /// A drag still in flight (its release was lost) is committed first.
    pub fn icon_pointer_down(&mut self, id: &str, pointer: Vec2) -> bool {
        if self.icon(id).is_none() {
            debug!(id, "icon pointer ignored: unknown icon");
            return false;
        }
        if self.icon_pointer_up() {
            debug!(id, "stale icon drag committed");
        }
        let started = self
            .icon_mut(id)
            .map(|icon| icon.begin_drag(pointer))
            .unwrap_or(false);
        if started {
            self.icon_drag = Some(id.to_string());
        }
        started
    }

    /// Live position of the dragged icon
    pub fn icon_pointer_move(&mut self, pointer: Vec2) -> Option<Vec2> {
        let parent = self.viewport.size;
        let id = self.icon_drag.clone()?;
        self.icon_mut(&id)?.drag_to(pointer, parent)
    }

    /// Release the dragged icon at its live position
    pub fn icon_pointer_up(&mut self) -> bool {
        let Some(id) = self.icon_drag.take() else {
            return false;
        };
        self.icon_mut(&id).map(|icon| icon.end_drag()).unwrap_or(false)
    }

    pub fn icon_click(&mut self, id: &str) -> bool {
        let cmd = self.icon(id).and_then(|icon| icon.click());
        self.dispatch_opt(cmd)
    }

    pub fn icon_double_click(&mut self, id: &str) -> bool {
        let cmd = self.icon(id).and_then(|icon| icon.double_click());
        self.dispatch_opt(cmd)
    }

    pub fn icon_key(&mut self, id: &str, key: Key) -> bool {
        let cmd = self.icon(id).and_then(|icon| icon.key(key));
        self.dispatch_opt(cmd)
    }

    fn dispatch_opt(&mut self, cmd: Option<DesktopCommand>) -> bool {
        match cmd {
            Some(cmd) => self.dispatch(cmd),
            None => false,
        }
    }

    // =========================================================================
    // Window gestures
    // =========================================================================

    /// Title bar pressed: focus the window and start moving it
    pub fn begin_window_move(&mut self, id: &str, pointer: Vec2) -> bool {
        let Some(window) = self.windows.get(id).filter(|w| w.is_visible()) else {
            debug!(id, "window move ignored: window not visible");
            return false;
        };
        let frame = window.rect();

        self.windows.focus(id);
        self.input
            .start_window_move(id.to_string(), pointer - frame.position(), frame.size());
        true
    }

    /// Resize handle pressed: focus the window and start resizing it
    pub fn begin_window_resize(&mut self, id: &str, handle: ResizeHandle, pointer: Vec2) -> bool {
        let Some(window) = self.windows.get(id).filter(|w| w.is_visible()) else {
            debug!(id, "window resize ignored: window not visible");
            return false;
        };
        let frame = window.rect();

        self.windows.focus(id);
        self.input.start_window_resize(
            id.to_string(),
            handle,
            frame.position(),
            frame.size(),
            pointer,
        );
        true
    }

    /// Continue the active window gesture
    pub fn pointer_move(&mut self, pointer: Vec2) -> bool {
        let cmds = self.input.pointer_move(
            pointer,
            self.viewport.size,
            self.config.layout.min_window_size,
        );
        self.apply_all(cmds)
    }

    /// Finish the active window gesture and commit its final geometry
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.input.is_dragging();
        let cmds = self
            .input
            .pointer_up(self.viewport.size, self.config.layout.min_window_size);
        self.apply_all(cmds);
        was_dragging
    }

    fn apply_all(&mut self, cmds: Vec<DesktopCommand>) -> bool {
        let mut changed = false;
        for cmd in cmds {
            changed |= self.dispatch(cmd);
        }
        changed
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Viewport-resize reactor
    ///
    /// Icons pick up their new mode and size; every window is resized for
    /// the new breakpoint and recentered. Window gestures in progress are
    /// abandoned since their start geometry no longer exists.
    pub fn resize_viewport(&mut self, viewport: Viewport) {
        self.viewport = Self::measured(&self.config, viewport);
        if self.input.is_dragging() {
            self.input.end_drag();
        }
        self.apply_viewport();
    }

    fn apply_viewport(&mut self) {
        let layout = &self.config.layout;
        for icon in &mut self.icons {
            icon.on_viewport(&self.viewport, layout);
        }
        let drag_alive = match &self.icon_drag {
            Some(id) => self.icons.iter().any(|i| i.id() == id && i.is_dragging()),
            None => false,
        };
        if !drag_alive {
            self.icon_drag = None;
        }
        self.windows.relayout(&self.viewport, layout);
        debug!(
            width = self.viewport.width(),
            height = self.viewport.height(),
            breakpoint = ?self.viewport.breakpoint(layout),
            "viewport applied"
        );
    }

    // =========================================================================
    // Carousel
    // =========================================================================

    /// Open the gallery overlay; only while its host window is shown
    pub fn carousel_open(&mut self, index: usize) -> bool {
        if let Some(host) = self.config.gallery.host_window.as_deref() {
            if !self.windows.get(host).is_some_and(|w| w.is_visible()) {
                debug!(host, index, "carousel open ignored: host window hidden");
                return false;
            }
        }
        self.carousel.open(index, &mut self.effects)
    }

    pub fn carousel_next(&mut self, now: Millis) -> bool {
        self.carousel.next(now)
    }

    pub fn carousel_previous(&mut self, now: Millis) -> bool {
        self.carousel.previous(now)
    }

    pub fn carousel_close(&mut self, now: Millis) -> bool {
        self.carousel.close(now)
    }

    // =========================================================================
    // Dock
    // =========================================================================

    pub fn dock_activate(&mut self, name: &str) -> bool {
        self.dock.activate(name, &mut self.effects)
    }

    pub fn dock_key(&mut self, name: &str, key: Key) -> bool {
        self.dock.key(name, key, &mut self.effects)
    }

    pub fn poke_trash(&mut self, now: Millis, entropy: &mut dyn Entropy) {
        self.dock.trash_mut().poke(now, entropy, &mut self.effects);
    }

    pub fn set_trash_hovered(&mut self, hovered: bool, now: Millis) {
        self.dock.trash_mut().set_trash_hovered(hovered, now);
    }

    pub fn set_bubble_hovered(&mut self, hovered: bool, now: Millis) {
        self.dock.trash_mut().set_bubble_hovered(hovered, now);
    }

    // =========================================================================
    // Keys, time and output
    // =========================================================================

    /// Document-level key press
    ///
    /// The carousel gets first refusal while it is visible.
    pub fn key(&mut self, key: Key, now: Millis) -> bool {
        self.carousel.handle_key(key, now)
    }

    /// Complete elapsed timed states; returns whether anything changed
    pub fn tick(&mut self, now: Millis) -> bool {
        let carousel = self.carousel.tick(now, &mut self.effects);
        let dock = self.dock.tick(now);
        carousel || dock
    }

    /// Take every queued side effect
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        self.effects.drain()
    }

    pub fn icon_views(&self) -> Vec<IconView> {
        self.icons.iter().map(DraggableIcon::view).collect()
    }
}

impl<C: Clone> DesktopEngine<C> {
    /// Visible windows in catalogue order, flagged with focus and stacking
    pub fn visible_windows(&self) -> Vec<WindowView<C>> {
        self.windows.views()
    }

    /// Snapshot of everything on screen
    pub fn render_state(&self) -> RenderState<C> {
        RenderState {
            viewport: self.viewport,
            breakpoint: self.viewport.breakpoint(&self.config.layout),
            active_window: self.windows.active().map(str::to_string),
            windows: self.visible_windows(),
            icons: self.icon_views(),
            carousel: self.carousel.state(),
            dock: self.dock.view(),
        }
    }
}
