//! Workspace groups and the generated per-group bindings.
//!
//! Groups are the fixed set `"1".."9","0"`, matching the number row. For
//! every group two key bindings are generated: `super+<name>` switches the
//! current screen to the group, `super+shift+<name>` moves the focused
//! window there and follows it. Generation iterates [`GROUP_NAMES`] in
//! order, so the produced bindings inherit the sequence's order and
//! uniqueness.

use crate::action::Action;
use crate::keys::{KeyBinding, Modifier};
use serde::{Deserialize, Serialize};

/// Group identifiers in display order.
pub const GROUP_NAMES: [&str; 10] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"];

/// A named virtual workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Single-character identifier, also used as the bound key.
    pub name: String,
}

impl Group {
    /// Create a group with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The fixed group list.
pub fn groups() -> Vec<Group> {
    GROUP_NAMES.iter().map(|name| Group::new(*name)).collect()
}

/// Generate the two per-group bindings for every group, in group order.
pub fn group_bindings(groups: &[Group]) -> Vec<KeyBinding> {
    let mut bindings = Vec::with_capacity(groups.len() * 2);
    for group in groups {
        bindings.push(KeyBinding::new(
            vec![Modifier::Super],
            group.name.clone(),
            Action::SwitchToGroup(group.name.clone()),
            format!("Switch to group {}", group.name),
        ));
        bindings.push(KeyBinding::new(
            vec![Modifier::Super, Modifier::Shift],
            group.name.clone(),
            Action::MoveToGroup {
                group: group.name.clone(),
                follow: true,
            },
            format!("Switch to & move focused window to group {}", group.name),
        ));
    }
    bindings
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn exactly_ten_groups_in_number_row_order() {
        let groups = groups();
        assert_eq!(groups.len(), 10);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"]);
    }

    #[test]
    fn group_names_are_distinct() {
        let names: HashSet<&str> = GROUP_NAMES.iter().copied().collect();
        assert_eq!(names.len(), GROUP_NAMES.len());
    }

    #[test]
    fn two_bindings_per_group() {
        let bindings = group_bindings(&groups());
        assert_eq!(bindings.len(), 20);
    }

    #[test]
    fn generated_chords_are_unique() {
        let bindings = group_bindings(&groups());
        let chords: HashSet<String> = bindings.iter().map(KeyBinding::chord).collect();
        assert_eq!(chords.len(), bindings.len());
    }

    #[test]
    fn generation_preserves_group_order() {
        let bindings = group_bindings(&groups());
        // Pairs are emitted in group order: switch first, then move-and-follow.
        for (i, name) in GROUP_NAMES.iter().enumerate() {
            assert_eq!(bindings[i * 2].key, *name);
            assert_eq!(
                bindings[i * 2].action,
                Action::SwitchToGroup((*name).to_string())
            );
            assert_eq!(bindings[i * 2 + 1].key, *name);
            assert_eq!(
                bindings[i * 2 + 1].action,
                Action::MoveToGroup {
                    group: (*name).to_string(),
                    follow: true,
                }
            );
        }
    }

    #[test]
    fn switch_binding_uses_bare_super() {
        let bindings = group_bindings(&groups());
        let switch = &bindings[0];
        assert_eq!(switch.chord(), "super+1");
        assert_eq!(switch.desc, "Switch to group 1");
    }

    #[test]
    fn move_binding_follows_the_window() {
        let bindings = group_bindings(&groups());
        let mv = &bindings[1];
        assert_eq!(mv.chord(), "super+shift+1");
        match &mv.action {
            Action::MoveToGroup { follow, .. } => assert!(follow),
            other => panic!("expected move-to-group, got {}", other),
        }
    }
}
