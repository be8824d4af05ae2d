//! Dock of social links and the trash can

mod trash;

pub use trash::{Entropy, TrashCan, TrashIcon, TrashView};

use serde::Serialize;
use tracing::debug;

use crate::config::{DockConfig, DockLink, TimingConfig};
use crate::effect::{Effect, EffectQueue};
use crate::input::Key;
use crate::types::Millis;

/// A social link in the dock
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DockEntry {
    pub name: String,
    pub url: String,
    pub icon: String,
    pub alt: String,
}

impl From<&DockLink> for DockEntry {
    fn from(link: &DockLink) -> Self {
        Self {
            name: link.name.clone(),
            url: link.url.clone(),
            icon: link.icon.clone(),
            alt: link.alt.clone(),
        }
    }
}

/// Dock as the shell renders it
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DockView {
    pub entries: Vec<DockEntry>,
    pub trash: TrashView,
}

/// Dock controller
#[derive(Clone, Debug)]
pub struct Dock {
    entries: Vec<DockEntry>,
    trash: TrashCan,
}

impl Dock {
    pub fn new(config: &DockConfig, timing: &TimingConfig) -> Self {
        Self {
            entries: config.links.iter().map(DockEntry::from).collect(),
            trash: TrashCan::new(config, timing),
        }
    }

    pub fn trash(&self) -> &TrashCan {
        &self.trash
    }

    pub fn trash_mut(&mut self) -> &mut TrashCan {
        &mut self.trash
    }

    /// Open the entry's page in a new browsing context
    pub fn activate(&self, name: &str, effects: &mut EffectQueue) -> bool {
        match self.entries.iter().find(|e| e.name == name) {
            Some(entry) => {
                effects.push(Effect::OpenUrl {
                    url: entry.url.clone(),
                });
                true
            }
            None => {
                debug!(name, "dock activation ignored: unknown entry");
                false
            }
        }
    }

    /// Enter or Space on a focused entry
    pub fn key(&self, name: &str, key: Key, effects: &mut EffectQueue) -> bool {
        key.activates() && self.activate(name, effects)
    }

    pub fn tick(&mut self, now: Millis) -> bool {
        self.trash.tick(now)
    }

    pub fn view(&self) -> DockView {
        DockView {
            entries: self.entries.clone(),
            trash: self.trash.view(),
        }
    }
}
