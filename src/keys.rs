//! Key and mouse binding records.
//!
//! A [`KeyBinding`] ties a modifier set and an X keysym name to an
//! [`Action`]; a [`MouseBinding`] does the same for pointer buttons, either
//! as a click or as a floating-window drag. [`static_bindings`] holds the
//! fixed personal binding list; the per-group bindings are generated
//! separately in [`groups`](crate::groups).
//!
//! A binding's identity is its *chord*: the canonically ordered modifier
//! set plus the key name. Two bindings with the same chord shadow each
//! other in the host, so the manifest treats duplicate chords as a
//! validation error.

use crate::action::{Action, SpawnCommand};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal emulator used by spawn bindings and widget click actions.
pub const TERMINAL: &str = "kitty";

/// A keyboard modifier.
///
/// `Super` is the primary personal modifier, `Alt` the secondary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Super,
    Alt,
    Shift,
    Control,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Super => write!(f, "super"),
            Modifier::Alt => write!(f, "alt"),
            Modifier::Shift => write!(f, "shift"),
            Modifier::Control => write!(f, "ctrl"),
        }
    }
}

/// A pointer button usable in a mouse binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MouseButton::Left => write!(f, "button1"),
            MouseButton::Middle => write!(f, "button2"),
            MouseButton::Right => write!(f, "button3"),
        }
    }
}

/// An input chord mapped to an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Modifiers held for this chord.
    pub mods: Vec<Modifier>,
    /// X keysym name, e.g. `"h"`, `"Return"`, `"XF86AudioMute"`.
    pub key: String,
    /// Action dispatched by the host when the chord fires.
    pub action: Action,
    /// Human-readable description. May be empty.
    pub desc: String,
}

impl KeyBinding {
    /// Create a binding.
    pub fn new(
        mods: Vec<Modifier>,
        key: impl Into<String>,
        action: Action,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            mods,
            key: key.into(),
            action,
            desc: desc.into(),
        }
    }

    /// Canonical chord identity: sorted modifiers plus the key name.
    ///
    /// Bindings that render to the same chord are unreachable duplicates,
    /// whatever order their modifiers were declared in.
    pub fn chord(&self) -> String {
        let mut mods = self.mods.clone();
        mods.sort();
        mods.dedup();
        let mut parts: Vec<String> = mods.iter().map(Modifier::to_string).collect();
        parts.push(self.key.clone());
        parts.join("+")
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chord())
    }
}

/// What a floating-window drag manipulates.
///
/// Each variant names a start/update action pair: the host queries the
/// window's current geometry when the drag starts, then applies the delta
/// on every pointer motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragHandle {
    /// Start from the window's position; dragging moves the window.
    Move,
    /// Start from the window's size; dragging resizes the window.
    Resize,
}

/// A pointer chord mapped to a drag or click action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MouseBinding {
    /// Hold the chord and drag to manipulate a floating window.
    Drag {
        mods: Vec<Modifier>,
        button: MouseButton,
        handle: DragHandle,
    },
    /// Press the chord once to dispatch an action.
    Click {
        mods: Vec<Modifier>,
        button: MouseButton,
        action: Action,
    },
}

//  Personal binding data

/// The fixed (non-generated) key binding list.
pub fn static_bindings() -> Vec<KeyBinding> {
    use Modifier::{Alt, Control, Shift, Super};

    vec![
        // Switch between windows.
        KeyBinding::new(vec![Super], "h", Action::FocusLeft, "Move focus to left"),
        KeyBinding::new(vec![Super], "l", Action::FocusRight, "Move focus to right"),
        KeyBinding::new(vec![Super], "j", Action::FocusDown, "Move focus down"),
        KeyBinding::new(vec![Super], "k", Action::FocusUp, "Move focus up"),
        KeyBinding::new(
            vec![Super],
            "space",
            Action::FocusNext,
            "Move window focus to other window",
        ),
        // Move windows between columns or within the current stack.
        KeyBinding::new(
            vec![Super, Shift],
            "h",
            Action::ShuffleLeft,
            "Move window to the left",
        ),
        KeyBinding::new(
            vec![Super, Shift],
            "l",
            Action::ShuffleRight,
            "Move window to the right",
        ),
        KeyBinding::new(vec![Super, Shift], "j", Action::ShuffleDown, "Move window down"),
        KeyBinding::new(vec![Super, Shift], "k", Action::ShuffleUp, "Move window up"),
        // Grow windows. A window on the screen edge shrinks instead.
        KeyBinding::new(
            vec![Super, Control],
            "h",
            Action::GrowLeft,
            "Grow window to the left",
        ),
        KeyBinding::new(
            vec![Super, Control],
            "l",
            Action::GrowRight,
            "Grow window to the right",
        ),
        KeyBinding::new(vec![Super, Control], "j", Action::GrowDown, "Grow window down"),
        KeyBinding::new(vec![Super, Control], "k", Action::GrowUp, "Grow window up"),
        KeyBinding::new(vec![Super], "n", Action::NormalizeSizes, "Reset all window sizes"),
        // Split = all stack windows shown; unsplit = only one, like Max.
        KeyBinding::new(
            vec![Super, Shift],
            "Return",
            Action::ToggleSplit,
            "Toggle between split and unsplit sides of stack",
        ),
        KeyBinding::new(
            vec![Super],
            "Return",
            Action::Spawn(SpawnCommand::direct(TERMINAL)),
            "Launch terminal",
        ),
        KeyBinding::new(vec![Super], "Tab", Action::NextLayout, "Toggle between layouts"),
        KeyBinding::new(vec![Super], "q", Action::KillWindow, "Kill focused window"),
        KeyBinding::new(vec![Super, Control], "q", Action::Shutdown, "Shutdown"),
        KeyBinding::new(vec![Super, Shift], "r", Action::Restart, "Restart the window manager"),
        KeyBinding::new(
            vec![Super],
            "r",
            Action::Spawn(SpawnCommand::direct("rofi -show run")),
            "Rofi",
        ),
        // User hotkeys.
        KeyBinding::new(
            vec![],
            "XF86AudioRaiseVolume",
            Action::Spawn(SpawnCommand::direct("amixer set Master 5%+")),
            "Increase volume",
        ),
        KeyBinding::new(
            vec![],
            "XF86AudioLowerVolume",
            Action::Spawn(SpawnCommand::direct("amixer set Master 5%-")),
            "Decrease volume",
        ),
        KeyBinding::new(
            vec![],
            "XF86AudioMute",
            Action::Spawn(SpawnCommand::direct("amixer set Master toggle")),
            "Toggle mute",
        ),
        KeyBinding::new(
            vec![],
            "XF86MonBrightnessUp",
            Action::Spawn(SpawnCommand::direct("light -A 7")),
            "Increase brightness",
        ),
        KeyBinding::new(
            vec![],
            "XF86MonBrightnessDown",
            Action::Spawn(SpawnCommand::direct("light -U 7")),
            "Decrease brightness",
        ),
        KeyBinding::new(
            vec![Super],
            "Print",
            Action::Spawn(SpawnCommand::shell(
                "maim -o -s -t 1 | xclip -selection clipboard -t image/png",
            )),
            "Clip screen to clipboard",
        ),
        KeyBinding::new(
            vec![Super, Control],
            "Print",
            Action::Spawn(SpawnCommand::shell("maim -o -s -t 1 ~/screenshot.png")),
            "Clip screen to file",
        ),
        KeyBinding::new(
            vec![Super, Alt],
            "l",
            Action::Spawn(SpawnCommand::direct("xsecurelock")),
            "Lock screen",
        ),
        KeyBinding::new(vec![Super], "f", Action::ToggleFloating, ""),
    ]
}

/// The fixed mouse binding list: drag to move or resize floating windows,
/// middle-click to raise.
pub fn mouse_bindings() -> Vec<MouseBinding> {
    use Modifier::Super;

    vec![
        MouseBinding::Drag {
            mods: vec![Super],
            button: MouseButton::Left,
            handle: DragHandle::Move,
        },
        MouseBinding::Drag {
            mods: vec![Super],
            button: MouseButton::Right,
            handle: DragHandle::Resize,
        },
        MouseBinding::Click {
            mods: vec![Super],
            button: MouseButton::Middle,
            action: Action::BringToFront,
        },
    ]
}

//  Tests
