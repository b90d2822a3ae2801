//! The assembled configuration manifest.
//!
//! [`Manifest::assemble`] is the whole evaluation: it builds every named
//! structure the host reads at startup and on reload. Assembly is
//! side-effect-free and infallible; [`Manifest::validate`] separately
//! proves the structural invariants the host silently depends on:
//! duplicate chords, dangling palette references, and empty match rules
//! would otherwise surface only as misbehavior at runtime.

use crate::bar::{self, Screen};
use crate::groups::{self, Group};
use crate::hooks::StartupHook;
use crate::keys::{self, KeyBinding, MouseBinding};
use crate::layout::{self, Layout};
use crate::rules::{self, FloatRule};
use crate::theme::{self, ColorRef, Palette, WidgetDefaults};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What the window manager does when a window asks for focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusActivation {
    /// Always focus the activating window.
    Focus,
    /// Focus it only when it lives in the current group.
    Smart,
    /// Mark it urgent instead of focusing.
    Urgent,
    /// Ignore activation requests.
    Never,
}

/// Named global flags the host reads directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    /// Focus follows the mouse pointer.
    pub follow_mouse_focus: bool,
    /// Clicking a floating window raises it.
    pub bring_front_click: bool,
    /// Warp the pointer to the focused window.
    pub cursor_warp: bool,
    /// Fullscreen windows that ask for it.
    pub auto_fullscreen: bool,
    /// Focus behavior on window activation requests.
    pub focus_on_window_activation: FocusActivation,
    /// Re-evaluate screen configuration when outputs change.
    pub reconfigure_screens: bool,
    /// Respect apps that auto-minimize on focus loss.
    pub auto_minimize: bool,
    /// Identity string reported to legacy toolkits. Java AWT only tiles
    /// correctly under window managers on its whitelist; LG3D is on it.
    pub wm_name: String,
}

impl Flags {
    /// The personal flag values.
    pub fn personal() -> Self {
        Self {
            follow_mouse_focus: true,
            bring_front_click: false,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: true,
            wm_name: "LG3D".into(),
        }
    }
}

/// A structural defect in the manifest.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Two bindings render to the same chord; the later one is unreachable.
    #[error("duplicate key chord: {0}")]
    DuplicateChord(String),
    /// Two groups share a name.
    #[error("duplicate group: {0}")]
    DuplicateGroup(String),
    /// A color reference points outside the palette.
    #[error("{reference} does not resolve ({palette_len} palette entries)")]
    UnresolvedColor {
        reference: ColorRef,
        palette_len: usize,
    },
    /// A palette entry is not a `#rrggbb` string.
    #[error("malformed palette entry {index}: {value:?}")]
    MalformedColor { index: usize, value: String },
    /// A floating rule matches on an empty string.
    #[error("floating rule with empty match value")]
    EmptyFloatRule,
}

/// Everything the host window manager reads at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Full key binding list: the static bindings followed by the
    /// generated per-group ones.
    pub keys: Vec<KeyBinding>,
    /// Pointer bindings for floating-window manipulation.
    pub mouse: Vec<MouseBinding>,
    /// Workspace groups in display order.
    pub groups: Vec<Group>,
    /// Ordered color palette.
    pub palette: Palette,
    /// Selectable layout instances in cycle order.
    pub layouts: Vec<Layout>,
    /// Windows matching any of these float instead of tiling.
    pub floating_rules: Vec<FloatRule>,
    /// Formatting every widget inherits.
    pub widget_defaults: WidgetDefaults,
    /// Output surfaces with their status bars.
    pub screens: Vec<Screen>,
    /// Global behavior flags.
    pub flags: Flags,
    /// One-shot autostart hook.
    pub startup: StartupHook,
}

impl Manifest {
    /// Evaluate the manifest.
    ///
    /// Called once at window-manager startup and again on every explicit
    /// reload. Pure data assembly; the startup hook is registered here but
    /// fired elsewhere.
    pub fn assemble() -> Self {
        let groups = groups::groups();
        let mut keys = keys::static_bindings();
        keys.extend(groups::group_bindings(&groups));

        Self {
            keys,
            mouse: keys::mouse_bindings(),
            groups,
            palette: theme::palette(),
            layouts: layout::layouts(),
            floating_rules: rules::float_rules(),
            widget_defaults: theme::widget_defaults(),
            screens: bar::screens(),
            flags: Flags::personal(),
            startup: StartupHook::personal(),
        }
    }

    /// Every palette reference the manifest carries.
    pub fn color_refs(&self) -> Vec<ColorRef> {
        let mut refs = vec![
            self.widget_defaults.foreground,
            self.widget_defaults.background,
        ];
        for layout in &self.layouts {
            refs.push(layout.theme.border_focus);
            refs.push(layout.theme.border_normal);
        }
        for screen in &self.screens {
            refs.extend(screen.top.color_refs());
        }
        refs
    }

    /// Check the structural invariants, collecting *every* violation.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let mut chords = HashSet::new();
        for binding in &self.keys {
            let chord = binding.chord();
            if !chords.insert(chord.clone()) {
                errors.push(ValidationError::DuplicateChord(chord));
            }
        }

        let mut names = HashSet::new();
        for group in &self.groups {
            if !names.insert(group.name.as_str()) {
                errors.push(ValidationError::DuplicateGroup(group.name.clone()));
            }
        }

        for (index, color) in self.palette.iter().enumerate() {
            if !color.is_well_formed() {
                errors.push(ValidationError::MalformedColor {
                    index,
                    value: color.hex().to_string(),
                });
            }
        }

        for reference in self.color_refs() {
            if self.palette.get(reference).is_none() {
                errors.push(ValidationError::UnresolvedColor {
                    reference,
                    palette_len: self.palette.len(),
                });
            }
        }

        for rule in &self.floating_rules {
            if rule.value().is_empty() {
                errors.push(ValidationError::EmptyFloatRule);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

//  Tests
