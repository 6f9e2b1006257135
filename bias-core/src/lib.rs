//! Shortcut identity and gesture id registration.
//!
//! A [`Shortcut`] is the key a dispatch layer matches incoming events
//! against; an [`IdRegistry`] gives the gesture ids of each shortcut family
//! their human readable descriptions.

use once_cell::sync::Lazy;

pub mod bindings;
pub mod event;
mod internal;
pub mod registry;
pub mod shortcut;

pub use bias_types::*;
pub use bindings::Bindings;
pub use event::ShortcutEvent;
pub use internal::config::gesture_table::{
    ConfigError, FamilyNode, GestureNode, GestureTable, BUILTIN_GESTURES,
};
pub use registry::{IdRegistry, Registration};
pub use shortcut::{ClickShortcut, CustomShortcut, Gesture, KeyShortcut, MotionShortcut, Shortcut};

static GLOBAL: Lazy<IdRegistry> = Lazy::new(IdRegistry::new);

/// Process-wide registry for callers that do not thread their own
/// [`IdRegistry`] through. It starts empty.
pub fn global() -> &'static IdRegistry {
    &GLOBAL
}
