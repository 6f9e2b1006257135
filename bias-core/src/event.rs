use bias_types::{GestureId, Modifiers};

use crate::shortcut::Shortcut;

/// What the dispatch layer needs from a concrete input event.
pub trait ShortcutEvent {
    /// Modifier keys held when the event occurred
    fn modifiers(&self) -> Modifiers;

    /// Which button, key or axis produced the event
    fn id(&self) -> GestureId;

    fn shortcut(&self) -> Shortcut;

    fn matches(&self, wanted: &Shortcut) -> bool {
        self.shortcut() == *wanted
    }
}
