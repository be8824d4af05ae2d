//! Outbound side effects
//!
//! The engine never talks to the browser directly. Anything that leaves the
//! state model (mail client, new tab, tone, page scroll, image prefetch) is
//! queued as an [`Effect`] and drained by the platform shell.

use serde::{Deserialize, Serialize};

/// A side effect requested by the desktop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Hand a recipient to the platform's mail-composition handler
    ComposeMail { recipient: String },
    /// Open a URL in a new browsing context
    OpenUrl { url: String },
    /// Play a short tone; failure is ignored by the executor
    PlayTone(ToneSpec),
    /// Suppress page scroll while the carousel overlay is up
    LockScroll,
    /// Restore page scroll
    UnlockScroll,
    /// Warm the image cache so carousel navigation has no extra latency
    PrefetchImages { images: Vec<String> },
}

/// Parameters for the trash-can tone
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToneSpec {
    /// Sine frequency in Hz
    pub frequency_hz: f32,
    /// Starting gain
    pub gain: f32,
    /// Gain reached at the end of the exponential ramp
    pub end_gain: f32,
    /// Length of the tone in milliseconds
    pub duration_ms: f32,
}

impl Default for ToneSpec {
    fn default() -> Self {
        Self {
            frequency_hz: 800.0,
            gain: 0.3,
            end_gain: 0.01,
            duration_ms: 300.0,
        }
    }
}

/// FIFO of pending effects
#[derive(Clone, Debug, Default)]
pub struct EffectQueue {
    pending: Vec<Effect>,
}

impl EffectQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an effect
    pub fn push(&mut self, effect: Effect) {
        tracing::trace!(?effect, "effect queued");
        self.pending.push(effect);
    }

    /// Take every pending effect in the order they were queued
    pub fn drain(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.pending)
    }

    /// Number of pending effects
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True if nothing is pending
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
