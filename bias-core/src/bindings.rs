use std::fmt::Display;

use bias_types::Family;
use itertools::Itertools;
use log::debug;

use crate::internal::types::{hash_map::Entry, HashMap};
use crate::registry::IdRegistry;
use crate::shortcut::Shortcut;

/**
 * Shortcut to action table consulted by the dispatch layer.
 *
 * Lookup is by [`Shortcut`] equality, so a binding made for a `MotionShortcut`
 * is never triggered by a `ClickShortcut` that happens to share its id.
 */
#[derive(Debug, Clone)]
pub struct Bindings<A> {
    actions: HashMap<Shortcut, A>,
}

impl<A> Default for Bindings<A> {
    fn default() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }
}

impl<A> Bindings<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `action` to `shortcut`, returning the action it replaced.
    pub fn bind(&mut self, shortcut: impl Into<Shortcut>, action: A) -> Option<A> {
        match self.actions.entry(shortcut.into()) {
            Entry::Occupied(mut entry) => {
                debug!("Bias: rebinding {:?}", entry.key());
                Some(entry.insert(action))
            }
            Entry::Vacant(entry) => {
                entry.insert(action);
                None
            }
        }
    }

    pub fn unbind(&mut self, shortcut: &Shortcut) -> Option<A> {
        self.actions.remove(shortcut)
    }

    pub fn action(&self, shortcut: &Shortcut) -> Option<&A> {
        self.actions.get(shortcut)
    }

    pub fn has_binding(&self, shortcut: &Shortcut) -> bool {
        self.actions.contains_key(shortcut)
    }

    /// Removes every binding whose shortcut belongs to `family`.
    pub fn remove_family(&mut self, family: &Family) {
        self.actions
            .retain(|shortcut, _| shortcut.family() != *family);
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Shortcut, &A)> {
        self.actions.iter()
    }
}

impl<A: PartialEq> Bindings<A> {
    pub fn is_action_bound(&self, action: &A) -> bool {
        self.actions.values().any(|bound| bound == action)
    }

    pub fn shortcuts_for(&self, action: &A) -> Vec<&Shortcut> {
        self.actions
            .iter()
            .filter(|(_, bound)| *bound == action)
            .map(|(shortcut, _)| shortcut)
            .collect()
    }
}

impl<A: Display> Bindings<A> {
    /// One sorted `"<shortcut> -> <action>"` line per binding.
    pub fn describe(&self, registry: &IdRegistry) -> Vec<String> {
        self.actions
            .iter()
            .map(|(shortcut, action)| format!("{} -> {}", shortcut.label(registry), action))
            .sorted()
            .collect()
    }
}
