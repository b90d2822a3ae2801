//! Tiling layout instances.
//!
//! Each [`Layout`] pairs an algorithm kind with the shared visual theme.
//! The instance list is fixed at assembly time; the host's next-layout
//! action cycles through it in order.

use crate::theme::{self, ColorRef};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual parameters shared by every layout instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutTheme {
    /// Window border width in pixels.
    pub border_width: u32,
    /// Gap around each window in pixels.
    pub margin: u32,
    /// Border color of the focused window.
    pub border_focus: ColorRef,
    /// Border color of unfocused windows.
    pub border_normal: ColorRef,
}

/// The personal layout theme.
pub fn layout_theme() -> LayoutTheme {
    LayoutTheme {
        border_width: 2,
        margin: 5,
        border_focus: theme::GREY,
        border_normal: theme::BACKGROUND,
    }
}

/// A tiling algorithm, with its per-kind parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LayoutKind {
    /// One master window on the left, a stack on the right.
    ///
    /// `ratio` is the fraction of screen width the master column takes.
    MonadTall { ratio: f64 },
    /// Windows arranged in equal-weight columns.
    Columns,
    /// The focused window fills the screen.
    Max,
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutKind::MonadTall { ratio } => write!(f, "monadtall({})", ratio),
            LayoutKind::Columns => write!(f, "columns"),
            LayoutKind::Max => write!(f, "max"),
        }
    }
}

/// A selectable layout instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub kind: LayoutKind,
    pub theme: LayoutTheme,
}

/// The fixed layout list, in next-layout cycling order.
///
/// Two MonadTall instances with different ratios are deliberate: cycling
/// between them nudges the master column without a grow chord.
pub fn layouts() -> Vec<Layout> {
    let theme = layout_theme();
    vec![
        Layout {
            kind: LayoutKind::MonadTall { ratio: 0.7 },
            theme,
        },
        Layout {
            kind: LayoutKind::MonadTall { ratio: 0.6 },
            theme,
        },
        Layout {
            kind: LayoutKind::Columns,
            theme,
        },
        Layout {
            kind: LayoutKind::Max,
            theme,
        },
    ]
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette;

    #[test]
    fn four_layouts_in_cycle_order() {
        let layouts = layouts();
        assert_eq!(layouts.len(), 4);
        assert_eq!(layouts[0].kind, LayoutKind::MonadTall { ratio: 0.7 });
        assert_eq!(layouts[1].kind, LayoutKind::MonadTall { ratio: 0.6 });
        assert_eq!(layouts[2].kind, LayoutKind::Columns);
        assert_eq!(layouts[3].kind, LayoutKind::Max);
    }

    #[test]
    fn all_layouts_share_the_theme() {
        let expected = layout_theme();
        for layout in layouts() {
            assert_eq!(layout.theme, expected);
        }
    }

    #[test]
    fn theme_refs_resolve_in_palette() {
        let p = palette();
        let t = layout_theme();
        assert!(p.get(t.border_focus).is_some());
        assert!(p.get(t.border_normal).is_some());
    }

    #[test]
    fn theme_matches_personal_values() {
        let t = layout_theme();
        assert_eq!(t.border_width, 2);
        assert_eq!(t.margin, 5);
        assert_eq!(t.border_focus, crate::theme::GREY);
        assert_eq!(t.border_normal, crate::theme::BACKGROUND);
    }

    #[test]
    fn kind_display() {
        assert_eq!(
            LayoutKind::MonadTall { ratio: 0.7 }.to_string(),
            "monadtall(0.7)"
        );
        assert_eq!(LayoutKind::Columns.to_string(), "columns");
        assert_eq!(LayoutKind::Max.to_string(), "max");
    }

    #[test]
    fn layout_wire_round_trip() {
        let layout = Layout {
            kind: LayoutKind::MonadTall { ratio: 0.6 },
            theme: layout_theme(),
        };
        let json = serde_json::to_string(&layout).unwrap();
        let back: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layout);
    }
}
