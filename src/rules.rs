//! Floating-window rules.
//!
//! A [`FloatRule`] is a predicate over a window's properties; a window
//! matching any rule in the manifest's list bypasses tiling and floats.
//! Each rule matches exactly one property: the enum makes a rule with
//! zero or two match fields unrepresentable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A predicate matching windows that should float instead of tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloatRule {
    /// Match on the window's WM_CLASS.
    WmClass(String),
    /// Match on the window's title.
    Title(String),
    /// Match on the window's _NET_WM_WINDOW_TYPE.
    WmType(String),
}

impl FloatRule {
    /// The matched value, whichever property it applies to.
    pub fn value(&self) -> &str {
        match self {
            FloatRule::WmClass(v) | FloatRule::Title(v) | FloatRule::WmType(v) => v,
        }
    }

    /// Whether this rule matches a window with the given properties.
    ///
    /// Comparison is exact; a property the window does not expose never
    /// matches.
    pub fn matches(
        &self,
        wm_class: Option<&str>,
        title: Option<&str>,
        wm_type: Option<&str>,
    ) -> bool {
        match self {
            FloatRule::WmClass(v) => wm_class == Some(v.as_str()),
            FloatRule::Title(v) => title == Some(v.as_str()),
            FloatRule::WmType(v) => wm_type == Some(v.as_str()),
        }
    }
}

impl fmt::Display for FloatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatRule::WmClass(v) => write!(f, "wm_class={}", v),
            FloatRule::Title(v) => write!(f, "title={}", v),
            FloatRule::WmType(v) => write!(f, "wm_type={}", v),
        }
    }
}

/// Whether any rule in `rules` matches the window.
pub fn should_float(
    rules: &[FloatRule],
    wm_class: Option<&str>,
    title: Option<&str>,
    wm_type: Option<&str>,
) -> bool {
    rules.iter().any(|r| r.matches(wm_class, title, wm_type))
}

//  Personal rule data

/// The host library's stock float rules: transient window types and the
/// wm-classes dialogs commonly use.
pub fn default_float_rules() -> Vec<FloatRule> {
    [
        FloatRule::WmType("utility".into()),
        FloatRule::WmType("notification".into()),
        FloatRule::WmType("toolbar".into()),
        FloatRule::WmType("splash".into()),
        FloatRule::WmType("dialog".into()),
        FloatRule::WmClass("file_progress".into()),
        FloatRule::WmClass("confirm".into()),
        FloatRule::WmClass("dialog".into()),
        FloatRule::WmClass("download".into()),
        FloatRule::WmClass("error".into()),
        FloatRule::WmClass("notification".into()),
        FloatRule::WmClass("splash".into()),
        FloatRule::WmClass("toolbar".into()),
    ]
    .to_vec()
}

/// The full floating-rule list: stock rules plus personal additions.
pub fn float_rules() -> Vec<FloatRule> {
    let mut rules = default_float_rules();
    rules.extend([
        FloatRule::WmClass("confirmreset".into()), // gitk
        FloatRule::WmClass("makebranch".into()),   // gitk
        FloatRule::WmClass("maketag".into()),      // gitk
        FloatRule::WmClass("ssh-askpass".into()),
        FloatRule::Title("win0".into()), // JetBrains splash
        FloatRule::Title("branchdialog".into()), // gitk
        FloatRule::Title("pinentry".into()), // GPG passphrase entry
    ]);
    rules
}

//  Tests
