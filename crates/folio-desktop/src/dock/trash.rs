//! Trash can easter egg
//!
//! Poking the can wiggles it, swaps in the full icon, plays a short tone and
//! shows a speech bubble. The wiggle resets on a timer; the bubble goes away
//! shortly after neither the can nor the bubble is hovered.

use serde::Serialize;
use tracing::trace;

use crate::config::{DockConfig, TimingConfig};
use crate::effect::{Effect, EffectQueue, ToneSpec};
use crate::types::Millis;

/// Source of uniform choices
///
/// The web shell backs this with the platform RNG; tests use fixed
/// sequences.
pub trait Entropy {
    /// A value in `0..len`; `len` is never zero
    fn pick(&mut self, len: usize) -> usize;
}

/// Which trash icon to show
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrashIcon {
    Empty,
    Full,
}

/// Trash can as the shell renders it
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrashView {
    pub icon: TrashIcon,
    pub image: String,
    pub wiggling: bool,
    pub message: Option<String>,
}

/// Trash can state
#[derive(Clone, Debug)]
pub struct TrashCan {
    messages: Vec<String>,
    empty_image: String,
    full_image: String,
    tone: ToneSpec,
    reset_ms: Millis,
    dismiss_ms: Millis,

    icon: TrashIcon,
    wiggling: bool,
    message: Option<String>,
    last_message: Option<String>,
    trash_hovered: bool,
    bubble_hovered: bool,
    reset_since: Option<Millis>,
    dismiss_since: Option<Millis>,
}

impl TrashCan {
    pub fn new(config: &DockConfig, timing: &TimingConfig) -> Self {
        Self {
            messages: config.trash_messages.clone(),
            empty_image: config.empty_trash_icon.clone(),
            full_image: config.full_trash_icon.clone(),
            tone: config.tone,
            reset_ms: timing.trash_reset_ms,
            dismiss_ms: timing.bubble_dismiss_ms,
            icon: TrashIcon::Empty,
            wiggling: false,
            message: None,
            last_message: None,
            trash_hovered: false,
            bubble_hovered: false,
            reset_since: None,
            dismiss_since: None,
        }
    }

    pub fn icon(&self) -> TrashIcon {
        self.icon
    }

    pub fn is_wiggling(&self) -> bool {
        self.wiggling
    }

    /// Message currently shown in the bubble
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// React to a click or keyboard activation
    ///
    /// The new message always differs from the previous one unless only one
    /// message is configured.
    pub fn poke(&mut self, now: Millis, entropy: &mut dyn Entropy, effects: &mut EffectQueue) {
        let fresh: Vec<&String> = self
            .messages
            .iter()
            .filter(|m| Some(m.as_str()) != self.last_message.as_deref())
            .collect();
        let pool: Vec<&String> = if fresh.is_empty() {
            self.messages.iter().collect()
        } else {
            fresh
        };

        let message = match pool.len() {
            0 => None,
            len => pool.get(entropy.pick(len) % len).map(|m| m.to_string()),
        };

        self.wiggling = true;
        self.icon = TrashIcon::Full;
        self.reset_since = Some(now);
        self.last_message = message.clone();
        self.message = message;
        effects.push(Effect::PlayTone(self.tone));
        trace!(message = ?self.message, "trash poked");

        self.schedule_dismiss(now);
    }

    pub fn set_trash_hovered(&mut self, hovered: bool, now: Millis) {
        self.trash_hovered = hovered;
        self.schedule_dismiss(now);
    }

    pub fn set_bubble_hovered(&mut self, hovered: bool, now: Millis) {
        self.bubble_hovered = hovered;
        self.schedule_dismiss(now);
    }

    /// Arm the dismissal timer iff a message is up and nothing is hovered
    fn schedule_dismiss(&mut self, now: Millis) {
        let idle = !self.trash_hovered && !self.bubble_hovered;
        self.dismiss_since = (idle && self.message.is_some()).then_some(now);
    }

    /// Fire elapsed timers
    pub fn tick(&mut self, now: Millis) -> bool {
        let mut changed = false;

        if let Some(since) = self.reset_since {
            if now - since >= self.reset_ms {
                self.reset_since = None;
                self.wiggling = false;
                self.icon = TrashIcon::Empty;
                changed = true;
            }
        }
        if let Some(since) = self.dismiss_since {
            if now - since >= self.dismiss_ms {
                self.dismiss_since = None;
                self.message = None;
                changed = true;
            }
        }

        changed
    }

    pub fn view(&self) -> TrashView {
        let image = match self.icon {
            TrashIcon::Empty => &self.empty_image,
            TrashIcon::Full => &self.full_image,
        };
        TrashView {
            icon: self.icon,
            image: image.clone(),
            wiggling: self.wiggling,
            message: self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the same slot
    struct Fixed(usize);

    impl Entropy for Fixed {
        fn pick(&mut self, len: usize) -> usize {
            self.0 % len
        }
    }

    fn trash() -> TrashCan {
        TrashCan::new(&DockConfig::default(), &TimingConfig::default())
    }

    #[test]
    fn test_poke_wiggles_and_plays_tone() {
        let mut trash = trash();
        let mut effects = EffectQueue::new();
        trash.set_trash_hovered(true, 0.0);
        trash.poke(0.0, &mut Fixed(0), &mut effects);

        assert!(trash.is_wiggling());
        assert_eq!(trash.icon(), TrashIcon::Full);
        assert_eq!(trash.message(), Some("Stop poking me!"));
        assert_eq!(effects.drain(), vec![Effect::PlayTone(ToneSpec::default())]);
        assert_eq!(trash.view().image, "assets/dock/full-trash-can.png");
    }

    #[test]
    fn test_wiggle_resets_after_delay() {
        let mut trash = trash();
        let mut effects = EffectQueue::new();
        trash.set_trash_hovered(true, 0.0);
        trash.poke(1000.0, &mut Fixed(3), &mut effects);

        assert!(!trash.tick(1499.0));
        assert!(trash.is_wiggling());
        assert!(trash.tick(1500.0));
        assert!(!trash.is_wiggling());
        assert_eq!(trash.icon(), TrashIcon::Empty);
        // Still hovered, so the bubble stays
        assert!(trash.message().is_some());
    }

    #[test]
    fn test_never_repeats_previous_message() {
        let mut trash = trash();
        let mut effects = EffectQueue::new();
        trash.set_trash_hovered(true, 0.0);

        // Slot 0 of the filtered list is the first message that differs
        trash.poke(0.0, &mut Fixed(0), &mut effects);
        let first = trash.message().map(str::to_string);
        trash.poke(10.0, &mut Fixed(0), &mut effects);
        let second = trash.message().map(str::to_string);
        assert_ne!(first, second);
        assert_eq!(second.as_deref(), Some("I'm empty, I swear!"));
    }

    #[test]
    fn test_single_message_repeats() {
        let mut config = DockConfig::default();
        config.trash_messages = vec!["only".to_string()];
        let mut trash = TrashCan::new(&config, &TimingConfig::default());
        let mut effects = EffectQueue::new();

        trash.poke(0.0, &mut Fixed(5), &mut effects);
        trash.poke(10.0, &mut Fixed(5), &mut effects);
        assert_eq!(trash.message(), Some("only"));
    }

    #[test]
    fn test_bubble_dismissed_when_unhovered() {
        let mut trash = trash();
        let mut effects = EffectQueue::new();
        trash.set_trash_hovered(true, 0.0);
        trash.poke(0.0, &mut Fixed(1), &mut effects);

        trash.set_trash_hovered(false, 200.0);
        assert!(!trash.tick(250.0));
        assert!(trash.message().is_some());

        assert!(trash.tick(300.0));
        assert_eq!(trash.message(), None);
    }

    #[test]
    fn test_hovering_bubble_cancels_dismissal() {
        let mut trash = trash();
        let mut effects = EffectQueue::new();
        trash.set_trash_hovered(true, 0.0);
        trash.poke(0.0, &mut Fixed(1), &mut effects);
        trash.tick(600.0);

        trash.set_trash_hovered(false, 1000.0);
        trash.set_bubble_hovered(true, 1050.0);
        trash.tick(1200.0);
        assert!(trash.message().is_some());

        trash.set_bubble_hovered(false, 1300.0);
        trash.tick(1400.0);
        assert_eq!(trash.message(), None);
    }

    #[test]
    fn test_keyboard_poke_without_hover_dismisses() {
        let mut trash = trash();
        let mut effects = EffectQueue::new();
        trash.poke(0.0, &mut Fixed(2), &mut effects);
        trash.tick(100.0);
        assert_eq!(trash.message(), None);
        assert!(trash.is_wiggling());
    }
}
