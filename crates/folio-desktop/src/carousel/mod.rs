//! Image gallery carousel
//!
//! A full-window overlay over the projects gallery. Navigation and closing
//! are animated, so the controller is an explicit state machine whose timed
//! states are advanced by [`Carousel::tick`]:
//!
//! ```text
//!            open(i)                next/previous
//!   Closed ─────────▶ Open{i} ───────────────────▶ Transitioning{i → j}
//!     ▲                │  ▲                              │
//!     │                │  └──────── after transition ────┘
//!     │          close │                                 │ close
//!     │                ▼                                 ▼
//!     └── after close ─ Closing{i} ◀──────────────────────┘
//!                        │ open(k) cancels the pending clear
//! ```
//!
//! Navigation while transitioning, closing or closed is dropped.

use serde::Serialize;
use tracing::{debug, trace};

use crate::config::TimingConfig;
use crate::effect::{Effect, EffectQueue};
use crate::error::{DesktopError, DesktopResult};
use crate::input::Key;
use crate::types::Millis;

/// Carousel phase
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselPhase {
    /// No overlay
    Closed,
    /// Showing one image
    Open { index: usize },
    /// Swapping images; `from` stays on screen until the swap commits
    Transitioning { from: usize, to: usize, since: Millis },
    /// Fading out; the index is kept until the fade completes
    Closing { index: usize, since: Millis },
}

/// Render-facing snapshot of the carousel
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CarouselState {
    pub selected_index: Option<usize>,
    pub is_visible: bool,
    pub is_transitioning: bool,
    pub scroll_locked: bool,
    pub current_image: Option<String>,
    pub indicator: Option<String>,
}

/// Gallery overlay controller
#[derive(Clone, Debug)]
pub struct Carousel {
    images: Vec<String>,
    phase: CarouselPhase,
    scroll_locked: bool,
    transition_ms: Millis,
    close_ms: Millis,
}

impl Carousel {
    /// Create a closed carousel over a non-empty image list
    pub fn new(images: Vec<String>, timing: &TimingConfig) -> DesktopResult<Self> {
        if images.is_empty() {
            return Err(DesktopError::EmptyGallery);
        }
        Ok(Self {
            images,
            phase: CarouselPhase::Closed,
            scroll_locked: false,
            transition_ms: timing.transition_ms,
            close_ms: timing.close_ms,
        })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    /// Index of the image on screen
    ///
    /// During a transition this is still the source image; the target is
    /// committed by `tick`.
    pub fn selected_index(&self) -> Option<usize> {
        match self.phase {
            CarouselPhase::Closed => None,
            CarouselPhase::Open { index } | CarouselPhase::Closing { index, .. } => Some(index),
            CarouselPhase::Transitioning { from, .. } => Some(from),
        }
    }

    /// True while the overlay is shown
    pub fn is_visible(&self) -> bool {
        matches!(
            self.phase,
            CarouselPhase::Open { .. } | CarouselPhase::Transitioning { .. }
        )
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, CarouselPhase::Transitioning { .. })
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Path of the image on screen
    pub fn current_image(&self) -> Option<&str> {
        self.selected_index()
            .and_then(|i| self.images.get(i))
            .map(String::as_str)
    }

    /// Position indicator, e.g. `"3 / 8"`
    pub fn indicator(&self) -> Option<String> {
        self.selected_index()
            .map(|i| format!("{} / {}", i + 1, self.images.len()))
    }

    /// Effect that warms the cache with every gallery image
    pub fn prefetch(&self) -> Effect {
        Effect::PrefetchImages {
            images: self.images.clone(),
        }
    }

    /// Show the overlay at `index`
    ///
    /// Only valid from `Closed` or `Closing`; reopening while closing
    /// cancels the pending clear. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize, effects: &mut EffectQueue) -> bool {
        if index >= self.images.len() {
            debug!(index, len = self.images.len(), "carousel open ignored: index out of range");
            return false;
        }
        match self.phase {
            CarouselPhase::Closed | CarouselPhase::Closing { .. } => {}
            _ => {
                debug!(index, "carousel open ignored: already open");
                return false;
            }
        }

        self.phase = CarouselPhase::Open { index };
        if !self.scroll_locked {
            self.scroll_locked = true;
            effects.push(Effect::LockScroll);
        }
        trace!(index, "carousel opened");
        true
    }

    /// Start moving to the following image, wrapping at the end
    pub fn next(&mut self, now: Millis) -> bool {
        self.navigate(now, |i, n| (i + 1) % n)
    }

    /// Start moving to the preceding image, wrapping at the start
    pub fn previous(&mut self, now: Millis) -> bool {
        self.navigate(now, |i, n| (i + n - 1) % n)
    }

    fn navigate(&mut self, now: Millis, step: impl Fn(usize, usize) -> usize) -> bool {
        let CarouselPhase::Open { index } = self.phase else {
            trace!(phase = ?self.phase, "carousel navigation dropped");
            return false;
        };
        let to = step(index, self.images.len());
        self.phase = CarouselPhase::Transitioning {
            from: index,
            to,
            since: now,
        };
        true
    }

    /// Hide the overlay and start the fade-out
    ///
    /// An in-flight transition is abandoned; the source image stays selected.
    pub fn close(&mut self, now: Millis) -> bool {
        let index = match self.phase {
            CarouselPhase::Open { index } => index,
            CarouselPhase::Transitioning { from, .. } => from,
            _ => return false,
        };
        self.phase = CarouselPhase::Closing { index, since: now };
        trace!(index, "carousel closing");
        true
    }

    /// Tear the overlay down at once, skipping the fade-out
    ///
    /// Used when the window hosting the gallery goes away.
    pub fn reset(&mut self, effects: &mut EffectQueue) {
        self.phase = CarouselPhase::Closed;
        if self.scroll_locked {
            self.scroll_locked = false;
            effects.push(Effect::UnlockScroll);
        }
    }

    /// Escape closes, arrows navigate; only while the overlay is visible
    ///
    /// Returns whether the key belongs to the carousel.
    pub fn handle_key(&mut self, key: Key, now: Millis) -> bool {
        if !self.is_visible() {
            return false;
        }
        match key {
            Key::Escape => {
                self.close(now);
                true
            }
            Key::ArrowLeft => {
                self.previous(now);
                true
            }
            Key::ArrowRight => {
                self.next(now);
                true
            }
            _ => false,
        }
    }

    /// Complete timed states whose duration has elapsed
    pub fn tick(&mut self, now: Millis, effects: &mut EffectQueue) -> bool {
        match self.phase {
            CarouselPhase::Transitioning { to, since, .. } if now - since >= self.transition_ms => {
                self.phase = CarouselPhase::Open { index: to };
                trace!(index = to, "carousel transition committed");
                true
            }
            CarouselPhase::Closing { since, .. } if now - since >= self.close_ms => {
                self.phase = CarouselPhase::Closed;
                if self.scroll_locked {
                    self.scroll_locked = false;
                    effects.push(Effect::UnlockScroll);
                }
                trace!("carousel closed");
                true
            }
            _ => false,
        }
    }

    /// Snapshot for rendering
    pub fn state(&self) -> CarouselState {
        CarouselState {
            selected_index: self.selected_index(),
            is_visible: self.is_visible(),
            is_transitioning: self.is_transitioning(),
            scroll_locked: self.scroll_locked,
            current_image: self.current_image().map(str::to_string),
            indicator: self.indicator(),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::tests::carousel;
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// N steps in one direction come back to the starting image
        #[test]
        fn full_cycle_returns_to_start(n in 1usize..16, start in 0usize..16, forward in any::<bool>()) {
            let start = start % n;
            let mut c = carousel(n);
            let mut effects = EffectQueue::new();
            c.open(start, &mut effects);

            let mut now = 0.0;
            for _ in 0..n {
                if forward { c.next(now); } else { c.previous(now); }
                now += 150.0;
                c.tick(now, &mut effects);
            }
            prop_assert_eq!(c.selected_index(), Some(start), "n={} forward={}", n, forward);
        }

        /// Presses during a transition never move the selection
        #[test]
        fn navigation_while_transitioning_is_dropped(
            n in 2usize..16,
            start in 0usize..16,
            presses in proptest::collection::vec(any::<bool>(), 1..10),
        ) {
            let start = start % n;
            let mut c = carousel(n);
            let mut effects = EffectQueue::new();
            c.open(start, &mut effects);
            c.next(0.0);

            for (i, forward) in presses.iter().enumerate() {
                let now = i as f64;
                if *forward { c.next(now); } else { c.previous(now); }
                prop_assert_eq!(c.selected_index(), Some(start));
            }

            c.tick(1000.0, &mut effects);
            prop_assert_eq!(c.selected_index(), Some((start + 1) % n));
        }
    }
}
