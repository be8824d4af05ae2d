//! Desktop state engine for the Folio portfolio site
//!
//! This crate provides the state behind a desktop-OS style portfolio page:
//! - Window management (open, close, focus, minimize, responsive layout)
//! - Draggable desktop icons with desktop/mobile activation rules
//! - Input routing for window move and resize gestures
//! - An image gallery carousel with timed transitions
//! - A dock of social links and a trash can
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`)
//! - [`window`]: Window records, lifecycle and layout rules
//! - [`icon`]: Draggable icon controllers
//! - [`input`]: Window drag state machine and key mapping
//! - [`carousel`]: Gallery overlay state machine
//! - [`dock`]: Social links and the trash can
//! - [`config`]: Deployment configuration and the default catalogue
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{DesktopConfig, DesktopEngine, Effect, Viewport};
//!
//! let mut engine = DesktopEngine::new(
//!     DesktopConfig::default(),
//!     Viewport::new(1280.0, 800.0),
//!     |spec| spec.title.clone(),
//! )
//! .unwrap();
//!
//! engine.icon_double_click("projects");
//! assert_eq!(engine.active_window(), Some("projects"));
//!
//! engine.icon_double_click("drop-message");
//! let effects = engine.drain_effects();
//! assert!(matches!(effects.last(), Some(Effect::ComposeMail { .. })));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Time Abstraction**: Timed states take the caller's clock for deterministic testing
//! 3. **One Writer**: Only [`DesktopEngine`] mutates window records
//! 4. **Effects Out**: Browser side effects are queued, never performed here

pub mod carousel;
pub mod config;
pub mod dock;
pub mod icon;
pub mod input;
pub mod math;
pub mod window;

mod command;
mod effect;
mod engine;
mod error;
mod types;
mod viewport;

// Re-export core types for convenience
pub use carousel::{Carousel, CarouselPhase, CarouselState};
pub use command::DesktopCommand;
pub use config::{DesktopConfig, LayoutConfig, TimingConfig};
pub use dock::{Dock, Entropy};
pub use effect::{Effect, EffectQueue, ToneSpec};
pub use engine::{DesktopEngine, RenderState};
pub use error::{DesktopError, DesktopResult};
pub use icon::{DraggableIcon, IconSize, IconView};
pub use input::{DragState, InputRouter, Key, ResizeHandle};
pub use math::{Rect, Size, Vec2};
pub use types::{IconId, Millis, WindowId};
pub use viewport::{Breakpoint, IconScale, Viewport};
pub use window::{WindowManager, WindowRecord, WindowView};
