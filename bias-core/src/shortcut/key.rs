use bias_types::{Family, GestureId, Modifiers};

use super::{with_modifiers, Gesture};
use crate::registry::IdRegistry;

/**
 * Shortcut of a key event.
 *
 * Either a character key (`'a'`), which is described by the character itself
 * and needs no registry entry, or a virtual key code carried as the gesture
 * id, described through the `KeyShortcut` id table.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyShortcut {
    gesture: Gesture,
    key: Option<char>,
}

impl KeyShortcut {
    pub fn from_char(key: char) -> Self {
        Self {
            gesture: Gesture::empty(),
            key: Some(key),
        }
    }

    pub fn from_char_with_modifiers(modifiers: Modifiers, key: char) -> Self {
        Self {
            gesture: Gesture::new(modifiers, GestureId::NO_ID),
            key: Some(key),
        }
    }

    /// A virtual key code without modifiers.
    pub fn from_id(virtual_key: impl Into<GestureId>) -> Self {
        Self::new(Modifiers::NO_MODIFIER, virtual_key)
    }

    pub fn new(modifiers: Modifiers, virtual_key: impl Into<GestureId>) -> Self {
        Self {
            gesture: Gesture::new(modifiers, virtual_key),
            key: None,
        }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn modifiers(&self) -> Modifiers {
        self.gesture.modifiers()
    }

    pub fn id(&self) -> GestureId {
        self.gesture.id()
    }

    pub fn key(&self) -> Option<char> {
        self.key
    }

    pub fn description(&self, registry: &IdRegistry) -> Option<String> {
        match self.key {
            Some(key) => Some(with_modifiers(self.modifiers(), &key.to_string())),
            None => self.gesture.describe(&Family::Key, registry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_keys_describe_themselves() {
        let registry = IdRegistry::new();
        assert_eq!(KeyShortcut::from_char('a').description(&registry).as_deref(), Some("a"));
        assert_eq!(
            KeyShortcut::from_char_with_modifiers(Modifiers::ALT, 'x')
                .description(&registry)
                .as_deref(),
            Some("ALT+x")
        );
    }

    #[test]
    fn virtual_keys_use_the_registry() {
        let registry = IdRegistry::new();
        assert_eq!(KeyShortcut::from_id(112).description(&registry), None);

        registry.register_id(&Family::Key, 112, "F1");
        assert_eq!(
            KeyShortcut::new(Modifiers::SHIFT, 112).description(&registry).as_deref(),
            Some("SHIFT+F1")
        );
    }

    #[test]
    fn character_is_identity() {
        assert_ne!(KeyShortcut::from_char('a'), KeyShortcut::from_char('b'));
        assert_ne!(KeyShortcut::from_char('a'), KeyShortcut::from_id(GestureId::NO_ID));
        assert_eq!(KeyShortcut::from_char('a').id(), GestureId::NO_ID);
    }
}
