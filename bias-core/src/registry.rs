use std::collections::BTreeMap;

use bias_types::{Family, GestureId, RegisterError};
use dashmap::DashMap;
use log::warn;

use crate::internal::config::gesture_table::{ConfigError, GestureTable};

/// Result of [`IdRegistry::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id: GestureId,
    /// The description that was overwritten, if any
    pub replaced: Option<String>,
}

/**
 * Maps (family, gesture id) to a human readable description.
 *
 * Every family has its own id table, so `MotionShortcut` 5 and
 * `ClickShortcut` 5 never collide. Registration is insert-or-overwrite;
 * there is no removal.
 *
 * All methods take `&self`. Each family table is locked for the whole
 * scan-and-insert of [`IdRegistry::register_next_id`], so concurrent
 * auto-allocation never hands out the same id twice.
 */
#[derive(Debug, Default)]
pub struct IdRegistry {
    families: DashMap<Family, BTreeMap<GestureId, String>>,
    motion_dofs: DashMap<GestureId, u8>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the standard mouse gestures.
    pub fn with_builtin_gestures() -> Result<Self, ConfigError> {
        let registry = Self::new();
        GestureTable::builtin()?.apply(&registry, true)?;
        Ok(registry)
    }

    /// Stores `description` for `(family, id)`, returning what it replaced.
    /// An overwrite is also logged at `warn` level; `replaced` is the form
    /// callers can act on.
    pub fn insert(
        &self,
        family: &Family,
        id: impl Into<GestureId>,
        description: impl Into<String>,
    ) -> Registration {
        let id = id.into();
        let replaced = self
            .families
            .entry(family.clone())
            .or_default()
            .insert(id, description.into());

        if let Some(old) = &replaced {
            warn!("Bias: overwriting {family} id {id} description `{old}`");
        }

        Registration { id, replaced }
    }

    /// Registers (and returns) `id` for `family`. An existing description is
    /// overwritten with a warning.
    pub fn register_id(
        &self,
        family: &Family,
        id: impl Into<GestureId>,
        description: impl Into<String>,
    ) -> GestureId {
        self.insert(family, id, description).id
    }

    /// Like [`IdRegistry::register_id`] but refuses to overwrite.
    pub fn try_register_id(
        &self,
        family: &Family,
        id: impl Into<GestureId>,
        description: impl Into<String>,
    ) -> Result<GestureId, RegisterError> {
        let id = id.into();
        let mut ids = self.families.entry(family.clone()).or_default();

        if let Some(existing) = ids.get(&id) {
            return Err(RegisterError::AlreadyRegistered {
                family: family.clone(),
                id,
                existing: existing.clone(),
            });
        }

        ids.insert(id, description.into());
        Ok(id)
    }

    /// Registers (and returns) the first free id of `family`: one past the
    /// largest id registered so far, or `0` for an empty family. Fails once
    /// the family holds `i32::MAX`; ids below a gap are never reused.
    pub fn register_next_id(
        &self,
        family: &Family,
        description: impl Into<String>,
    ) -> Result<GestureId, RegisterError> {
        let mut ids = self.families.entry(family.clone()).or_default();

        let id = match ids.keys().next_back() {
            Some(max) => max.next().ok_or_else(|| RegisterError::IdSpaceExhausted {
                family: family.clone(),
            })?,
            None => GestureId(0),
        };
        ids.insert(id, description.into());
        Ok(id)
    }

    /// Registers a motion gesture id together with its degrees of freedom.
    pub fn register_motion_id(
        &self,
        id: impl Into<GestureId>,
        dofs: u8,
        description: impl Into<String>,
    ) -> GestureId {
        let id = self.register_id(&Family::Motion, id, description);
        self.set_dofs(id, dofs);
        id
    }

    pub(crate) fn set_dofs(&self, id: GestureId, dofs: u8) {
        self.motion_dofs.insert(id, dofs);
    }

    /// Degrees of freedom of a motion id, if it was registered with them.
    pub fn dofs(&self, id: GestureId) -> Option<u8> {
        self.motion_dofs.get(&id).map(|dofs| *dofs)
    }

    pub fn has_id(&self, family: &Family, id: impl Into<GestureId>) -> bool {
        let id = id.into();
        self.families
            .get(family)
            .map_or(false, |ids| ids.contains_key(&id))
    }

    pub fn description(&self, family: &Family, id: impl Into<GestureId>) -> Option<String> {
        let id = id.into();
        self.families.get(family)?.get(&id).cloned()
    }

    /// Registered ids of `family` in ascending order.
    pub fn ids(&self, family: &Family) -> Vec<GestureId> {
        self.families
            .get(family)
            .map(|ids| ids.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn families(&self) -> Vec<Family> {
        let mut families = self
            .families
            .iter()
            .filter(|entry| !entry.value().is_empty())
            .map(|entry| entry.key().clone())
            .collect::<Vec<_>>();
        families.sort();
        families
    }

    /// Total number of registered (family, id) pairs.
    pub fn len(&self) -> usize {
        self.families.iter().map(|entry| entry.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn register_base_id(&self, id: impl Into<GestureId>, description: impl Into<String>) -> GestureId {
        self.register_id(&Family::Base, id, description)
    }

    pub fn register_next_base_id(
        &self,
        description: impl Into<String>,
    ) -> Result<GestureId, RegisterError> {
        self.register_next_id(&Family::Base, description)
    }

    pub fn has_base_id(&self, id: impl Into<GestureId>) -> bool {
        self.has_id(&Family::Base, id)
    }
}
