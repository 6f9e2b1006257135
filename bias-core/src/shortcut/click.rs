use bias_types::{Family, GestureId, Modifiers};

use super::Gesture;
use crate::registry::IdRegistry;

/// Shortcut of a click event. The number of clicks is part of its identity,
/// so a double click never matches a binding made for a single click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClickShortcut {
    gesture: Gesture,
    clicks: u8,
}

impl ClickShortcut {
    /// A single click of `id`.
    pub fn from_id(id: impl Into<GestureId>) -> Self {
        Self::new(Modifiers::NO_MODIFIER, id, 1)
    }

    /// `clicks` is clamped to at least one.
    pub fn with_clicks(id: impl Into<GestureId>, clicks: u8) -> Self {
        Self::new(Modifiers::NO_MODIFIER, id, clicks)
    }

    pub fn new(modifiers: Modifiers, id: impl Into<GestureId>, clicks: u8) -> Self {
        Self {
            gesture: Gesture::new(modifiers, id),
            clicks: clicks.max(1),
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

    pub fn clicks(&self) -> u8 {
        self.clicks
    }

    /// `[MODS+]DESC+<n>_CLICK[S]`
    pub fn description(&self, registry: &IdRegistry) -> Option<String> {
        let description = self.gesture.describe(&Family::Click, registry)?;
        let suffix = if self.clicks == 1 { "CLICK" } else { "CLICKS" };
        Some(format!("{}+{}_{}", description, self.clicks, suffix))
    }
}

impl Default for ClickShortcut {
    fn default() -> Self {
        Self::from_id(GestureId::NO_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_count_is_identity() {
        assert_ne!(ClickShortcut::with_clicks(37, 1), ClickShortcut::with_clicks(37, 2));
        assert_eq!(ClickShortcut::from_id(37), ClickShortcut::with_clicks(37, 1));
    }

    #[test]
    fn zero_clicks_is_one() {
        assert_eq!(ClickShortcut::with_clicks(3, 0).clicks(), 1);
        assert_eq!(ClickShortcut::default().clicks(), 1);
    }

    #[test]
    fn description_appends_clicks() {
        let registry = IdRegistry::new();
        registry.register_id(&Family::Click, 37, "LEFT");

        assert_eq!(
            ClickShortcut::from_id(37).description(&registry).as_deref(),
            Some("LEFT+1_CLICK")
        );
        assert_eq!(
            ClickShortcut::new(Modifiers::CTRL, 37, 2)
                .description(&registry)
                .as_deref(),
            Some("CTRL+LEFT+2_CLICKS")
        );
        assert_eq!(ClickShortcut::from_id(39).description(&registry), None);
    }
}
