use bias_types::{Family, GestureId, Modifiers};

use super::Gesture;
use crate::registry::IdRegistry;

/// Shortcut of a motion event, e.g. dragging a mouse button or turning the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MotionShortcut(Gesture);

impl MotionShortcut {
    pub const fn empty() -> Self {
        Self(Gesture::empty())
    }

    pub fn from_id(id: impl Into<GestureId>) -> Self {
        Self(Gesture::from_id(id))
    }

    pub fn new(modifiers: Modifiers, id: impl Into<GestureId>) -> Self {
        Self(Gesture::new(modifiers, id))
    }

    pub fn gesture(&self) -> Gesture {
        self.0
    }

    pub fn modifiers(&self) -> Modifiers {
        self.0.modifiers()
    }

    pub fn id(&self) -> GestureId {
        self.0.id()
    }

    /// Degrees of freedom the id was registered with.
    pub fn dofs(&self, registry: &IdRegistry) -> Option<u8> {
        registry.dofs(self.id())
    }

    pub fn description(&self, registry: &IdRegistry) -> Option<String> {
        self.0.describe(&Family::Motion, registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dofs_come_from_the_registry() {
        let registry = IdRegistry::new();
        registry.register_motion_id(39, 2, "RIGHT");

        let right = MotionShortcut::new(Modifiers::SHIFT, 39);
        assert_eq!(right.dofs(&registry), Some(2));
        assert_eq!(MotionShortcut::from_id(40).dofs(&registry), None);
        assert_eq!(right.description(&registry).as_deref(), Some("SHIFT+RIGHT"));
    }
}
