//! Effect executor
//!
//! Carries out the side effects queued by the engine. Failures are logged
//! to the console and otherwise ignored; a missing audio device or a
//! blocked popup must never break the desktop.

use folio_desktop::{Effect, ToneSpec};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioScheduledSourceNode, HtmlImageElement, OscillatorType};

use crate::log;

pub(crate) fn execute(effect: &Effect) {
    let result = match effect {
        Effect::ComposeMail { recipient } => compose_mail(recipient),
        Effect::OpenUrl { url } => open_url(url),
        Effect::PlayTone(tone) => play_tone(tone),
        Effect::LockScroll => set_body_overflow("hidden"),
        Effect::UnlockScroll => set_body_overflow(""),
        Effect::PrefetchImages { images } => prefetch(images),
    };

    if let Err(e) = result {
        log(&format!("[folio] Effect {:?} failed: {:?}", effect, e));
    }
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

fn compose_mail(recipient: &str) -> Result<(), JsValue> {
    window()?
        .location()
        .set_href(&format!("mailto:{}", recipient))
}

fn open_url(url: &str) -> Result<(), JsValue> {
    window()?.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")?;
    Ok(())
}

/// Short sine beep with an exponential fade
fn play_tone(tone: &ToneSpec) -> Result<(), JsValue> {
    let ctx = AudioContext::new()?;
    let oscillator = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    let start = ctx.current_time();
    let end = start + f64::from(tone.duration_ms) / 1000.0;

    oscillator.set_type(OscillatorType::Sine);
    oscillator.frequency().set_value_at_time(tone.frequency_hz, start)?;
    gain.gain().set_value_at_time(tone.gain, start)?;
    gain.gain().exponential_ramp_to_value_at_time(tone.end_gain, end)?;

    let source: &AudioScheduledSourceNode = &oscillator;
    source.start_with_when(start)?;
    source.stop_with_when(end)?;
    Ok(())
}

fn set_body_overflow(value: &str) -> Result<(), JsValue> {
    let body = window()?
        .document()
        .and_then(|d| d.body())
        .ok_or_else(|| JsValue::from_str("no body"))?;
    body.style().set_property("overflow", value)
}

fn prefetch(images: &[String]) -> Result<(), JsValue> {
    for src in images {
        let img = HtmlImageElement::new()?;
        img.set_src(src);
    }
    log(&format!("[folio] Prefetching {} images", images.len()));
    Ok(())
}
