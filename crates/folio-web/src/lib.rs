//! Browser shell for the Folio desktop
//!
//! Wraps [`DesktopEngine`] in a `wasm-bindgen` class. The page forwards
//! pointer, key and resize events here, calls [`Folio::tick`] from its
//! animation loop and redraws from [`Folio::render_state`]. Side effects the
//! engine queues (mail, new tabs, tones, scroll lock, prefetch) are carried
//! out before each entry point returns.

mod effects;
mod platform;

use folio_desktop::{DesktopConfig, DesktopEngine, Key, ResizeHandle, Vec2};
use wasm_bindgen::prelude::*;

pub use platform::PlatformEntropy;

pub(crate) fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

/// The desktop as seen from JavaScript
///
/// Window content is the window id; the page maps it to a template.
#[wasm_bindgen]
pub struct Folio {
    engine: DesktopEngine<String>,
    entropy: PlatformEntropy,
}

#[wasm_bindgen]
impl Folio {
    /// Create a desktop with the built-in portfolio catalogue
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Folio, JsValue> {
        Self::with_config(DesktopConfig::default())
    }

    /// Create a desktop from a JSON configuration
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<Folio, JsValue> {
        let config = DesktopConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::with_config(config)
    }

    // =========================================================================
    // Windows
    // =========================================================================

    pub fn open(&mut self, id: &str) -> bool {
        let opened = self.engine.open(id);
        self.flush();
        opened
    }

    pub fn close(&mut self, id: &str) -> bool {
        let closed = self.engine.close(id);
        self.flush();
        closed
    }

    pub fn focus(&mut self, id: &str) -> bool {
        self.engine.focus(id)
    }

    pub fn minimize(&mut self, id: &str) -> bool {
        let minimized = self.engine.minimize(id);
        self.flush();
        minimized
    }

    pub fn restore(&mut self, id: &str) -> bool {
        self.engine.restore(id)
    }

    /// Title bar pressed
    #[wasm_bindgen(js_name = beginWindowMove)]
    pub fn begin_window_move(&mut self, id: &str, x: f32, y: f32) -> bool {
        self.engine.begin_window_move(id, Vec2::new(x, y))
    }

    /// Resize handle pressed; `direction` is one of n, s, e, w, ne, nw, se, sw
    #[wasm_bindgen(js_name = beginWindowResize)]
    pub fn begin_window_resize(&mut self, id: &str, direction: &str, x: f32, y: f32) -> bool {
        match ResizeHandle::from_direction(direction) {
            Some(handle) => self.engine.begin_window_resize(id, handle, Vec2::new(x, y)),
            None => {
                log(&format!("[folio] Unknown resize direction: {}", direction));
                false
            }
        }
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.pointer_move(Vec2::new(x, y))
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> bool {
        self.engine.pointer_up()
    }

    // =========================================================================
    // Icons
    // =========================================================================

    #[wasm_bindgen(js_name = iconPointerDown)]
    pub fn icon_pointer_down(&mut self, id: &str, x: f32, y: f32) -> bool {
        self.engine.icon_pointer_down(id, Vec2::new(x, y))
    }

    #[wasm_bindgen(js_name = iconPointerMove)]
    pub fn icon_pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.engine.icon_pointer_move(Vec2::new(x, y)).is_some()
    }

    #[wasm_bindgen(js_name = iconPointerUp)]
    pub fn icon_pointer_up(&mut self) -> bool {
        self.engine.icon_pointer_up()
    }

    #[wasm_bindgen(js_name = iconClick)]
    pub fn icon_click(&mut self, id: &str) -> bool {
        let handled = self.engine.icon_click(id);
        self.flush();
        handled
    }

    #[wasm_bindgen(js_name = iconDoubleClick)]
    pub fn icon_double_click(&mut self, id: &str) -> bool {
        let handled = self.engine.icon_double_click(id);
        self.flush();
        handled
    }

    /// Key press on a focused icon; `key` is `KeyboardEvent.key`
    #[wasm_bindgen(js_name = iconKey)]
    pub fn icon_key(&mut self, id: &str, key: &str) -> bool {
        let handled = self.engine.icon_key(id, Key::from_dom(key));
        self.flush();
        handled
    }

    // =========================================================================
    // Carousel
    // =========================================================================

    #[wasm_bindgen(js_name = openImage)]
    pub fn open_image(&mut self, index: usize) -> bool {
        let opened = self.engine.carousel_open(index);
        self.flush();
        opened
    }

    #[wasm_bindgen(js_name = nextImage)]
    pub fn next_image(&mut self) -> bool {
        self.engine.carousel_next(platform::now())
    }

    #[wasm_bindgen(js_name = previousImage)]
    pub fn previous_image(&mut self) -> bool {
        self.engine.carousel_previous(platform::now())
    }

    #[wasm_bindgen(js_name = closeImage)]
    pub fn close_image(&mut self) -> bool {
        self.engine.carousel_close(platform::now())
    }

    // =========================================================================
    // Dock
    // =========================================================================

    #[wasm_bindgen(js_name = dockActivate)]
    pub fn dock_activate(&mut self, name: &str) -> bool {
        let handled = self.engine.dock_activate(name);
        self.flush();
        handled
    }

    #[wasm_bindgen(js_name = dockKey)]
    pub fn dock_key(&mut self, name: &str, key: &str) -> bool {
        let handled = self.engine.dock_key(name, Key::from_dom(key));
        self.flush();
        handled
    }

    #[wasm_bindgen(js_name = pokeTrash)]
    pub fn poke_trash(&mut self) {
        self.engine.poke_trash(platform::now(), &mut self.entropy);
        self.flush();
    }

    #[wasm_bindgen(js_name = setTrashHovered)]
    pub fn set_trash_hovered(&mut self, hovered: bool) {
        self.engine.set_trash_hovered(hovered, platform::now());
    }

    #[wasm_bindgen(js_name = setBubbleHovered)]
    pub fn set_bubble_hovered(&mut self, hovered: bool) {
        self.engine.set_bubble_hovered(hovered, platform::now());
    }

    // =========================================================================
    // Page events
    // =========================================================================

    /// Re-measure the browser viewport after a `resize` event
    #[wasm_bindgen(js_name = syncViewport)]
    pub fn sync_viewport(&mut self) {
        let viewport = platform::measure_viewport();
        self.engine.resize_viewport(viewport);
    }

    /// Apply an explicit viewport size
    pub fn resize(&mut self, width: f32, height: f32, touch: bool) {
        let viewport = folio_desktop::Viewport::new(width, height).with_touch(touch);
        self.engine.resize_viewport(viewport);
    }

    /// Document-level key press; returns whether the desktop consumed it
    pub fn key(&mut self, key: &str) -> bool {
        self.engine.key(Key::from_dom(key), platform::now())
    }

    /// Advance timers; returns whether a redraw is needed
    pub fn tick(&mut self) -> bool {
        let changed = self.engine.tick(platform::now());
        self.flush();
        changed
    }

    /// Everything on screen, as JSON
    #[wasm_bindgen(js_name = renderState)]
    pub fn render_state(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.engine.render_state()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = activeWindow)]
    pub fn active_window(&self) -> Option<String> {
        self.engine.active_window().map(str::to_string)
    }
}

impl Folio {
    fn with_config(config: DesktopConfig) -> Result<Folio, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let viewport = platform::measure_viewport();
        let engine = DesktopEngine::new(config, viewport, |spec| spec.id.clone())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log(&format!(
            "[folio] Desktop ready: {}x{} ({} windows, {} icons)",
            engine.viewport().width(),
            engine.viewport().height(),
            engine.windows().len(),
            engine.icons().len()
        ));

        let mut folio = Folio {
            engine,
            entropy: PlatformEntropy,
        };
        folio.flush();
        Ok(folio)
    }

    /// Run every queued side effect
    fn flush(&mut self) {
        for effect in self.engine.drain_effects() {
            effects::execute(&effect);
        }
    }
}
