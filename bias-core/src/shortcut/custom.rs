use bias_types::{CustomName, Family, GestureId, Modifiers};
use smallvec::SmallVec;

use super::Gesture;
use crate::registry::IdRegistry;

/**
 * Shortcut of a user defined family.
 *
 * Extra attributes that distinguish two gestures of the family (finger count,
 * direction, ...) go into `discriminants` and take part in equality.
 * Built-in families have their own [`Shortcut`](super::Shortcut) variants;
 * a [`CustomName`] can never name one of them.
 *
 * ```ignore
 * let swipe = CustomName::new("SwipeShortcut").unwrap();
 * let up = registry.register_next_id(&swipe.clone().into(), "UP")?;
 * let three_finger_up = CustomShortcut::new(swipe, Gesture::from_id(up)).with_discriminant(3);
 * ```
 */
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomShortcut {
    name: CustomName,
    gesture: Gesture,
    discriminants: SmallVec<[i32; 2]>,
}

impl CustomShortcut {
    pub fn new(name: CustomName, gesture: Gesture) -> Self {
        Self {
            name,
            gesture,
            discriminants: SmallVec::new(),
        }
    }

    pub fn with_discriminant(mut self, value: i32) -> Self {
        self.discriminants.push(value);
        self
    }

    pub fn name(&self) -> &CustomName {
        &self.name
    }

    pub fn family(&self) -> Family {
        Family::Custom(self.name.clone())
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

    pub fn discriminants(&self) -> &[i32] {
        &self.discriminants
    }

    pub fn description(&self, registry: &IdRegistry) -> Option<String> {
        self.gesture.describe(&self.family(), registry)
    }
}
