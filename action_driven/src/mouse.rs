use bias::prelude::*;

/// Gesture ids of the mouse, registered at startup.
#[derive(Debug, Clone, Copy)]
pub struct MouseIds {
    pub left: GestureId,
    pub center: GestureId,
    pub right: GestureId,
    pub wheel: GestureId,
    pub no_button: GestureId,
    pub left_click: GestureId,
    pub center_click: GestureId,
    pub right_click: GestureId,
}

impl MouseIds {
    pub fn register(registry: &BiasRegistry) -> Self {
        let left = registry.register_motion_id(37, 2, "LEFT");
        let center = registry.register_motion_id(3, 2, "CENTER");
        let right = registry.register_motion_id(39, 2, "RIGHT");
        let wheel = registry.register_motion_id(8, 1, "WHEEL");
        let no_button = registry.register_motion_id(GestureId::NO_ID, 2, "NO_BUTTON");

        Self {
            left,
            center,
            right,
            wheel,
            no_button,
            left_click: registry.register_id(&Family::Click, left, "LEFT"),
            center_click: registry.register_id(&Family::Click, center, "CENTER"),
            right_click: registry.register_id(&Family::Click, right, "RIGHT"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum MouseEvent {
    /// Pointer moved with `button` held, or with no button for [`GestureId::NO_ID`]
    Motion {
        modifiers: Modifiers,
        button: GestureId,
        dx: f32,
        dy: f32,
    },
    Wheel {
        modifiers: Modifiers,
        wheel: GestureId,
        delta: f32,
    },
    Click {
        modifiers: Modifiers,
        button: GestureId,
        count: u8,
    },
}

impl MouseEvent {
    /// Motion carried by the event; clicks carry none.
    pub fn delta(&self) -> (f32, f32) {
        match *self {
            MouseEvent::Motion { dx, dy, .. } => (dx, dy),
            MouseEvent::Wheel { delta, .. } => (0.0, delta),
            MouseEvent::Click { .. } => (0.0, 0.0),
        }
    }
}

impl ShortcutEvent for MouseEvent {
    fn modifiers(&self) -> Modifiers {
        match *self {
            MouseEvent::Motion { modifiers, .. }
            | MouseEvent::Wheel { modifiers, .. }
            | MouseEvent::Click { modifiers, .. } => modifiers,
        }
    }

    fn id(&self) -> GestureId {
        match *self {
            MouseEvent::Motion { button, .. } | MouseEvent::Click { button, .. } => button,
            MouseEvent::Wheel { wheel, .. } => wheel,
        }
    }

    fn shortcut(&self) -> Shortcut {
        match *self {
            MouseEvent::Motion { modifiers, button, .. } => {
                MotionShortcut::new(modifiers, button).into()
            }
            MouseEvent::Wheel { modifiers, wheel, .. } => MotionShortcut::new(modifiers, wheel).into(),
            MouseEvent::Click {
                modifiers,
                button,
                count,
            } => ClickShortcut::new(modifiers, button, count).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_the_standard_table() {
        let registry = BiasRegistry::new();
        let ids = MouseIds::register(&registry);

        assert_eq!(ids.left, GestureId(37));
        assert_eq!(ids.left_click, ids.left);
        assert_eq!(registry.dofs(ids.wheel), Some(1));
        assert!(registry.has_id(&Family::Click, ids.right_click));
        assert!(!registry.has_id(&Family::Click, ids.wheel));
    }

    #[test]
    fn wheel_and_drag_map_to_motion_shortcuts() {
        let wheel = MouseEvent::Wheel {
            modifiers: Modifiers::CTRL,
            wheel: GestureId(8),
            delta: 1.0,
        };
        assert_eq!(wheel.shortcut(), MotionShortcut::new(Modifiers::CTRL, 8).into());

        let click = MouseEvent::Click {
            modifiers: Modifiers::NO_MODIFIER,
            button: GestureId(37),
            count: 1,
        };
        assert!(click.matches(&ClickShortcut::from_id(37).into()));
        assert!(!click.matches(&MotionShortcut::from_id(37).into()));
    }
}
