//! Window management module
//!
//! Provides the window records, open/close/focus lifecycle and the
//! responsive layout rules applied on viewport changes.

pub mod layout;
mod manager;
mod record;

pub use manager::WindowManager;
pub use record::{WindowRecord, WindowView};

pub use crate::types::WindowId;

/// Stacking order of the active window
pub const ACTIVE_Z_INDEX: u32 = 1000;

/// Stacking order of every other visible window
pub const INACTIVE_Z_INDEX: u32 = 100;
