use std::fmt;

use thiserror::Error;

pub mod family;
pub mod modifiers;

pub use family::{CustomName, Family};
pub use modifiers::{Modifier, Modifiers, ParseModifiersError};

/**
 * Identifies which gesture a shortcut stands for within its family,
 * e.g. which mouse button is dragged or which key code is pressed.
 *
 * Ids are only unique inside one [`Family`]: `MotionShortcut` 37 and
 * `ClickShortcut` 37 are unrelated registry entries.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GestureId(pub i32);

impl GestureId {
    /// Sentinel for "no gesture". It is still a valid registry key.
    pub const NO_ID: GestureId = GestureId(0);

    /// `None` past `i32::MAX`.
    pub fn next(self) -> Option<GestureId> {
        self.0.checked_add(1).map(GestureId)
    }
}

impl From<i32> for GestureId {
    fn from(id: i32) -> Self {
        GestureId(id)
    }
}

impl fmt::Display for GestureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("{family} id {id} is already registered as `{existing}`")]
    AlreadyRegistered {
        family: Family,
        id: GestureId,
        existing: String,
    },
    #[error("{family} has no free id left")]
    IdSpaceExhausted { family: Family },
}
