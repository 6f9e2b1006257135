use bias_types::{Family, GestureId, Modifiers};

use crate::registry::IdRegistry;

pub mod click;
pub mod custom;
pub mod key;
pub mod motion;

pub use click::ClickShortcut;
pub use custom::CustomShortcut;
pub use key::KeyShortcut;
pub use motion::MotionShortcut;

/// The (modifier mask, gesture id) pair every shortcut family is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Gesture {
    modifiers: Modifiers,
    id: GestureId,
}

impl Gesture {
    /// No modifiers, [`GestureId::NO_ID`].
    pub const fn empty() -> Self {
        Self {
            modifiers: Modifiers::NO_MODIFIER,
            id: GestureId::NO_ID,
        }
    }

    pub fn from_id(id: impl Into<GestureId>) -> Self {
        Self::new(Modifiers::NO_MODIFIER, id)
    }

    pub fn new(modifiers: Modifiers, id: impl Into<GestureId>) -> Self {
        Self {
            modifiers,
            id: id.into(),
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn id(&self) -> GestureId {
        self.id
    }

    /// Looks the id up in `family`'s table and prefixes the modifier text.
    pub fn describe(&self, family: &Family, registry: &IdRegistry) -> Option<String> {
        let description = registry.description(family, self.id)?;
        Some(with_modifiers(self.modifiers, &description))
    }
}

pub(crate) fn with_modifiers(modifiers: Modifiers, description: &str) -> String {
    if modifiers.is_empty() {
        description.to_owned()
    } else {
        format!("{}+{}", modifiers.text(), description)
    }
}

/**
 * A gesture key that actions are bound to.
 *
 * Equality and hashing cover the family tag and every field of the family
 * payload, so shortcuts of different families never compare equal even when
 * they carry the same mask and id, and a family with extra identity (click
 * count, key character, custom discriminants) is compared on all of it.
 */
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shortcut {
    /// Caller-level ids not tied to a concrete family
    Base(Gesture),
    Motion(MotionShortcut),
    Click(ClickShortcut),
    Key(KeyShortcut),
    Custom(CustomShortcut),
}

impl Shortcut {
    pub const fn empty() -> Self {
        Shortcut::Base(Gesture::empty())
    }

    pub fn from_id(id: impl Into<GestureId>) -> Self {
        Shortcut::Base(Gesture::from_id(id))
    }

    pub fn new(modifiers: Modifiers, id: impl Into<GestureId>) -> Self {
        Shortcut::Base(Gesture::new(modifiers, id))
    }

    pub fn gesture(&self) -> Gesture {
        match self {
            Shortcut::Base(gesture) => *gesture,
            Shortcut::Motion(shortcut) => shortcut.gesture(),
            Shortcut::Click(shortcut) => shortcut.gesture(),
            Shortcut::Key(shortcut) => shortcut.gesture(),
            Shortcut::Custom(shortcut) => shortcut.gesture(),
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        self.gesture().modifiers()
    }

    pub fn id(&self) -> GestureId {
        self.gesture().id()
    }

    pub fn family(&self) -> Family {
        match self {
            Shortcut::Base(_) => Family::Base,
            Shortcut::Motion(_) => Family::Motion,
            Shortcut::Click(_) => Family::Click,
            Shortcut::Key(_) => Family::Key,
            Shortcut::Custom(shortcut) => shortcut.family(),
        }
    }

    /// `None` when the id was never registered for this shortcut's family.
    pub fn description(&self, registry: &IdRegistry) -> Option<String> {
        match self {
            Shortcut::Base(gesture) => gesture.describe(&Family::Base, registry),
            Shortcut::Motion(shortcut) => shortcut.description(registry),
            Shortcut::Click(shortcut) => shortcut.description(registry),
            Shortcut::Key(shortcut) => shortcut.description(registry),
            Shortcut::Custom(shortcut) => shortcut.description(registry),
        }
    }

    /// The description, or `<family>#<id>` for unregistered ids.
    pub fn label(&self, registry: &IdRegistry) -> String {
        self.description(registry).unwrap_or_else(|| {
            with_modifiers(self.modifiers(), &format!("{}#{}", self.family(), self.id()))
        })
    }
}

impl Default for Shortcut {
    fn default() -> Self {
        Shortcut::empty()
    }
}

impl From<Gesture> for Shortcut {
    fn from(gesture: Gesture) -> Self {
        Shortcut::Base(gesture)
    }
}

impl From<MotionShortcut> for Shortcut {
    fn from(shortcut: MotionShortcut) -> Self {
        Shortcut::Motion(shortcut)
    }
}

impl From<ClickShortcut> for Shortcut {
    fn from(shortcut: ClickShortcut) -> Self {
        Shortcut::Click(shortcut)
    }
}

impl From<KeyShortcut> for Shortcut {
    fn from(shortcut: KeyShortcut) -> Self {
        Shortcut::Key(shortcut)
    }
}

impl From<CustomShortcut> for Shortcut {
    fn from(shortcut: CustomShortcut) -> Self {
        Shortcut::Custom(shortcut)
    }
}
