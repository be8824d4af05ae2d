//! Desktop icons
//!
//! Each icon is an independent [`DraggableIcon`] controller. Activation
//! hands a [`DesktopCommand::Open`](crate::DesktopCommand::Open) back to the
//! engine; icons never open windows themselves.

mod controller;

pub use controller::{DraggableIcon, IconView};

use serde::Serialize;

use crate::config::IconSpec;
use crate::math::{Size, Vec2};
use crate::types::IconId;
use crate::viewport::IconScale;

/// Static description of an icon
#[derive(Clone, Debug, PartialEq)]
pub struct IconRecord {
    pub id: IconId,
    pub title: String,
    pub image: String,
    pub alt: String,
    pub initial_position: Vec2,
}

impl From<&IconSpec> for IconRecord {
    fn from(spec: &IconSpec) -> Self {
        Self {
            id: spec.id.clone(),
            title: spec.title.clone(),
            image: spec.image.clone(),
            alt: spec.alt.clone(),
            initial_position: spec.position,
        }
    }
}

/// Rendered icon dimensions
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IconSize {
    /// Square image edge
    pub image: f32,
    /// Square container edge; the label sits below it
    pub container: f32,
}

/// Height reserved below the container for the title
const LABEL_HEIGHT: f32 = 40.0;

impl IconSize {
    /// Size step for an icon scale
    pub const fn for_scale(scale: IconScale) -> Self {
        match scale {
            IconScale::Small => Self {
                image: 64.0,
                container: 80.0,
            },
            IconScale::Medium => Self {
                image: 80.0,
                container: 100.0,
            },
            IconScale::Large => Self {
                image: 96.0,
                container: 120.0,
            },
        }
    }

    /// Box the icon occupies on the desktop
    pub fn footprint(&self) -> Size {
        Size::new(self.container, self.container + LABEL_HEIGHT)
    }
}
