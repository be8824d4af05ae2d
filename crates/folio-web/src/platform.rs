//! Browser measurements, clock and randomness

use folio_desktop::{Entropy, Millis, Viewport};

/// Substrings of user agents treated as touch/mobile devices
const MOBILE_AGENTS: [&str; 8] = [
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

/// Milliseconds since the epoch
pub(crate) fn now() -> Millis {
    js_sys::Date::now()
}

/// Current inner size of the browser window plus the mobile-agent flag
///
/// Unmeasurable dimensions come back as zero; the engine substitutes its
/// fallback viewport.
pub(crate) fn measure_viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::new(0.0, 0.0);
    };

    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    let width = dimension(window.inner_width());
    let height = dimension(window.inner_height());

    let touch = window
        .navigator()
        .user_agent()
        .map(|agent| is_mobile_agent(&agent))
        .unwrap_or(false);

    Viewport::new(width, height).with_touch(touch)
}

pub(crate) fn is_mobile_agent(agent: &str) -> bool {
    MOBILE_AGENTS.iter().any(|m| agent.contains(m))
}

/// Uniform picks backed by the platform RNG
#[derive(Clone, Copy, Debug, Default)]
pub struct PlatformEntropy;

impl Entropy for PlatformEntropy {
    fn pick(&mut self, len: usize) -> usize {
        let mut bytes = [0u8; 4];
        let value = match getrandom::getrandom(&mut bytes) {
            Ok(()) => u32::from_le_bytes(bytes) as usize,
            Err(_) => (js_sys::Math::random() * len as f64) as usize,
        };
        value % len.max(1)
    }
}
