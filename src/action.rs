//! Actions a binding can invoke.
//!
//! This module defines the vocabulary that bindings share: [`Action`]
//! describes every operation a key or mouse chord can be bound to, and
//! [`SpawnCommand`] carries the payload of external-command actions.
//!
//! Actions are declarative. The manifest never executes them; it hands them
//! to the host window manager, which dispatches them when the bound chord
//! fires.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An external command to run, as bound to a spawn action.
///
/// `shell` selects whether the host should run the command line through a
/// shell (needed for pipes and `~` expansion) or exec it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnCommand {
    /// The full command line.
    pub command: String,
    /// Run through `sh -c` instead of exec'ing the first word.
    #[serde(default)]
    pub shell: bool,
}

impl SpawnCommand {
    /// A command exec'd directly (no shell).
    pub fn direct(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            shell: false,
        }
    }

    /// A command line run through a shell.
    pub fn shell(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            shell: true,
        }
    }
}

impl fmt::Display for SpawnCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)
    }
}

/// Every operation a binding can be bound to.
///
/// Focus / shuffle / grow variants are relative to the active layout;
/// the remaining variants address the focused window, the layout list,
/// groups, or the window manager itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Move focus to the window on the left.
    FocusLeft,
    /// Move focus to the window on the right.
    FocusRight,
    /// Move focus down.
    FocusDown,
    /// Move focus up.
    FocusUp,
    /// Move focus to the next window in the layout's order.
    FocusNext,

    /// Move the focused window left, creating a new column if it leaves
    /// the layout's bounds.
    ShuffleLeft,
    /// Move the focused window right.
    ShuffleRight,
    /// Move the focused window down.
    ShuffleDown,
    /// Move the focused window up.
    ShuffleUp,

    /// Grow the focused window toward the left edge (shrinks when the
    /// window already touches that edge).
    GrowLeft,
    /// Grow toward the right edge.
    GrowRight,
    /// Grow toward the bottom edge.
    GrowDown,
    /// Grow toward the top edge.
    GrowUp,
    /// Reset all window sizes to the layout's defaults.
    NormalizeSizes,

    /// Toggle between split and unsplit sides of a stack.
    ToggleSplit,

    /// Run an external command.
    Spawn(SpawnCommand),

    /// Cycle to the next layout in the manifest's layout list.
    NextLayout,
    /// Close the focused window.
    KillWindow,
    /// Toggle floating state of the focused window.
    ToggleFloating,
    /// Raise the focused window above its siblings.
    BringToFront,

    /// Shut the window manager down.
    Shutdown,
    /// Restart the window manager (triggers a manifest reload).
    Restart,

    /// Display the named group on the current screen.
    SwitchToGroup(String),
    /// Move the focused window to the named group.
    ///
    /// With `follow` set, the current screen switches to that group as
    /// well, so focus travels with the window.
    MoveToGroup {
        group: String,
        follow: bool,
    },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::FocusLeft => write!(f, "focus-left"),
            Action::FocusRight => write!(f, "focus-right"),
            Action::FocusDown => write!(f, "focus-down"),
            Action::FocusUp => write!(f, "focus-up"),
            Action::FocusNext => write!(f, "focus-next"),
            Action::ShuffleLeft => write!(f, "shuffle-left"),
            Action::ShuffleRight => write!(f, "shuffle-right"),
            Action::ShuffleDown => write!(f, "shuffle-down"),
            Action::ShuffleUp => write!(f, "shuffle-up"),
            Action::GrowLeft => write!(f, "grow-left"),
            Action::GrowRight => write!(f, "grow-right"),
            Action::GrowDown => write!(f, "grow-down"),
            Action::GrowUp => write!(f, "grow-up"),
            Action::NormalizeSizes => write!(f, "normalize-sizes"),
            Action::ToggleSplit => write!(f, "toggle-split"),
            Action::Spawn(cmd) => write!(f, "spawn({})", cmd),
            Action::NextLayout => write!(f, "next-layout"),
            Action::KillWindow => write!(f, "kill-window"),
            Action::ToggleFloating => write!(f, "toggle-floating"),
            Action::BringToFront => write!(f, "bring-to-front"),
            Action::Shutdown => write!(f, "shutdown"),
            Action::Restart => write!(f, "restart"),
            Action::SwitchToGroup(g) => write!(f, "switch-to-group({})", g),
            Action::MoveToGroup { group, follow } => {
                if *follow {
                    write!(f, "move-to-group({}, follow)", group)
                } else {
                    write!(f, "move-to-group({})", group)
                }
            }
        }
    }
}

//  Tests
