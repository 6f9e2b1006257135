use std::{env, fmt, fs};

use anyhow::{anyhow, Context};
use bias::{prelude::*, ConfigError};
use log::{info, warn};
use tracing_subscriber::EnvFilter;

mod mouse;

use mouse::{MouseEvent, MouseIds};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Rotate,
    Translate,
    Zoom,
    Scale,
    Align,
    Highlight,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Dragging a button moves the target
fn mouse_drag_bindings(ids: &MouseIds) -> Bindings<Action> {
    let mut bindings = Bindings::new();
    bindings.bind(MotionShortcut::from_id(ids.left), Action::Rotate);
    bindings.bind(MotionShortcut::from_id(ids.right), Action::Translate);
    bindings.bind(MotionShortcut::from_id(ids.center), Action::Zoom);
    bindings.bind(MotionShortcut::from_id(ids.wheel), Action::Scale);
    bindings.bind(MotionShortcut::new(Modifiers::CTRL, ids.wheel), Action::Zoom);
    bindings.bind(ClickShortcut::with_clicks(ids.left_click, 2), Action::Align);
    bindings.bind(ClickShortcut::from_id(ids.right_click), Action::Highlight);
    bindings
}

/// Moving without any button pressed moves the target
fn mouse_move_bindings(ids: &MouseIds) -> Bindings<Action> {
    let mut bindings = Bindings::new();
    bindings.bind(MotionShortcut::from_id(ids.no_button), Action::Rotate);
    bindings.bind(MotionShortcut::new(Modifiers::SHIFT, ids.no_button), Action::Translate);
    bindings.bind(MotionShortcut::from_id(ids.wheel), Action::Scale);
    bindings.bind(ClickShortcut::from_id(ids.left_click), Action::Highlight);
    bindings.bind(ClickShortcut::from_id(ids.center_click), Action::Align);
    bindings
}

fn dispatch(registry: &BiasRegistry, bindings: &Bindings<Action>, events: &[MouseEvent]) {
    for event in events {
        let shortcut = event.shortcut();
        match bindings.action(&shortcut) {
            Some(action) => info!(
                "{} -> {} {:?}",
                registry.label(&shortcut),
                action,
                event.delta()
            ),
            None => info!("{} -> unbound", registry.label(&shortcut)),
        }
    }
}

fn load_gesture_file(registry: &BiasRegistry, path: &str) -> anyhow::Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;

    match registry.load_gestures(path, &text, false) {
        Ok(ids) => {
            info!("Loaded {} gestures from {path}", ids.len());
            Ok(())
        }
        Err(ConfigError::Parse(err)) => {
            eprintln!("{:?}", miette::Report::new(err));
            Err(anyhow!("invalid gesture file {path}"))
        }
        Err(err) => Err(err.into()),
    }
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let registry = BiasRegistry::new();
    let ids = MouseIds::register(&registry);

    if let Some(path) = env::args().nth(1) {
        load_gesture_file(&registry, &path)?;
    }

    let events = [
        MouseEvent::Motion {
            modifiers: Modifiers::NO_MODIFIER,
            button: ids.left,
            dx: 4.0,
            dy: -2.0,
        },
        MouseEvent::Motion {
            modifiers: Modifiers::SHIFT,
            button: ids.no_button,
            dx: 1.5,
            dy: 0.0,
        },
        MouseEvent::Wheel {
            modifiers: Modifiers::CTRL,
            wheel: ids.wheel,
            delta: 3.0,
        },
        MouseEvent::Click {
            modifiers: Modifiers::NO_MODIFIER,
            button: ids.left_click,
            count: 2,
        },
        MouseEvent::Click {
            modifiers: Modifiers::NO_MODIFIER,
            button: ids.center_click,
            count: 1,
        },
    ];

    for (mode, bindings) in [
        ("drag", mouse_drag_bindings(&ids)),
        ("move", mouse_move_bindings(&ids)),
    ] {
        info!("{mode} bindings:");
        for line in bindings.describe(&registry) {
            info!("  {line}");
        }
        if !bindings.is_action_bound(&Action::Rotate) {
            warn!("{mode} bindings cannot rotate");
        }
        dispatch(&registry, &bindings, &events);
    }

    Ok(())
}
