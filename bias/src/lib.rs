use std::{ops::Deref, sync::Arc};

pub use bias_core::{
    bindings, event, global, registry, shortcut, Bindings, ClickShortcut, ConfigError,
    CustomShortcut, Gesture, GestureTable, IdRegistry, KeyShortcut, MotionShortcut, Registration,
    Shortcut, ShortcutEvent,
};
pub use bias_types::*;

pub mod prelude {
    pub use crate::{
        load_registry, BiasRegistry, Bindings, ClickShortcut, CustomName, CustomShortcut, Family,
        Gesture, GestureId, KeyShortcut, Modifiers, MotionShortcut, Shortcut, ShortcutEvent,
    };
}

/// Registry preloaded with the standard mouse gestures
/// (`LEFT`, `CENTER`, `RIGHT`, `WHEEL`, `NO_BUTTON` and their clicks).
pub fn load_registry() -> Result<BiasRegistry, ConfigError> {
    Ok(BiasRegistry(Arc::new(IdRegistry::with_builtin_gestures()?)))
}

/// Cheaply clonable handle to one [`IdRegistry`], created once at scene
/// startup and handed to whatever registers or describes shortcuts.
#[derive(Debug, Clone, Default)]
pub struct BiasRegistry(Arc<IdRegistry>);

impl BiasRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a KDL gesture table and registers its gestures.
    pub fn load_gestures(
        &self,
        file_name: &str,
        text: &str,
        strict: bool,
    ) -> Result<Vec<(Family, GestureId)>, ConfigError> {
        GestureTable::parse(file_name, text)?.apply(&self.0, strict)
    }

    pub fn describe(&self, shortcut: &Shortcut) -> Option<String> {
        shortcut.description(&self.0)
    }

    pub fn label(&self, shortcut: &Shortcut) -> String {
        shortcut.label(&self.0)
    }
}

impl Deref for BiasRegistry {
    type Target = IdRegistry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
