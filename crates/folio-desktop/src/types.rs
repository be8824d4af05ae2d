//! Core type definitions for the desktop engine
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Unique window identifier
///
/// Windows are identified by a stable string taken from the window
/// catalogue (e.g. `"projects"`). Ids are assigned at construction and
/// never reused.
pub type WindowId = String;

/// Unique icon identifier
///
/// An icon's id is also the id it asks the desktop to open when activated,
/// so an icon and the window (or launcher) it opens share the same string.
pub type IconId = String;

/// Milliseconds on the caller's clock
///
/// Timed states (carousel transitions, trash-can reset) compare against
/// this value. The web shell passes `Date.now()`; tests pass literals.
pub type Millis = f64;
