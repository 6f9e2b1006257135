use std::{fmt, sync::Arc};

/// Shortcut family tag. Each family owns its own gesture id namespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    /// Ad-hoc ids not tied to any concrete shortcut kind
    Base,
    Motion,
    Click,
    Key,
    Custom(CustomName),
}

/// Name of a user defined family. Never one of the built-in family names,
/// so a built-in family can only be reached through its own variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomName(Arc<str>);

impl CustomName {
    /// `None` for the built-in names (`Shortcut`, `MotionShortcut`, ...).
    pub fn new(name: &str) -> Option<Self> {
        match Family::from_name(name) {
            Family::Custom(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CustomName> for Family {
    fn from(name: CustomName) -> Self {
        Family::Custom(name)
    }
}

impl Family {
    pub fn custom(name: &str) -> Self {
        Self::from_name(name)
    }

    /// Maps a family name back to its tag. The built-in names always resolve
    /// to the built-in variants so one name never owns two id tables.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Shortcut" => Family::Base,
            "MotionShortcut" => Family::Motion,
            "ClickShortcut" => Family::Click,
            "KeyShortcut" => Family::Key,
            other => Family::Custom(CustomName(Arc::from(other))),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Family::Base => "Shortcut",
            Family::Motion => "MotionShortcut",
            Family::Click => "ClickShortcut",
            Family::Key => "KeyShortcut",
            Family::Custom(name) => name.as_str(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Family::Custom(_))
    }
}

impl Default for Family {
    fn default() -> Self {
        Family::Base
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
