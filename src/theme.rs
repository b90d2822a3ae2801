//! Visual theme: the color palette and shared widget defaults.
//!
//! Colors live in one ordered [`Palette`]; everything else in the manifest
//! refers to them by index through [`ColorRef`]. Keeping the indirection
//! (rather than inlining hex strings) means a single palette edit restyles
//! the whole bar, and lets validation prove every reference resolves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB color as a `#rrggbb` hex string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Wrap a hex string. Well-formedness is checked by
    /// [`Manifest::validate`](crate::manifest::Manifest::validate), not here.
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// The raw hex string, including the leading `#`.
    pub fn hex(&self) -> &str {
        &self.0
    }

    /// Whether the value is a well-formed `#rrggbb` string.
    pub fn is_well_formed(&self) -> bool {
        let s = self.0.as_str();
        s.len() == 7
            && s.starts_with('#')
            && s[1..].chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An index into the manifest's [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorRef(pub usize);

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "palette[{}]", self.0)
    }
}

//  Named palette slots

pub const BACKGROUND: ColorRef = ColorRef(0);
pub const FOREGROUND: ColorRef = ColorRef(1);
pub const BACKGROUND_LIGHT: ColorRef = ColorRef(2);
pub const RED: ColorRef = ColorRef(3);
pub const GREEN: ColorRef = ColorRef(4);
pub const YELLOW: ColorRef = ColorRef(5);
pub const BLUE: ColorRef = ColorRef(6);
pub const MAGENTA: ColorRef = ColorRef(7);
pub const CYAN: ColorRef = ColorRef(8);
pub const GREY: ColorRef = ColorRef(9);
pub const WHITE: ColorRef = ColorRef(10);
pub const ORANGE: ColorRef = ColorRef(11);
pub const SUPER_CYAN: ColorRef = ColorRef(12);
pub const SUPER_BLUE: ColorRef = ColorRef(13);
pub const DARK_BACKGROUND: ColorRef = ColorRef(14);
pub const SLATE_GREY: ColorRef = ColorRef(15);

/// The ordered color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Build a palette from an ordered color list.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        Self(colors.into_iter().collect())
    }

    /// Resolve a reference, or `None` when it is out of range.
    pub fn get(&self, reference: ColorRef) -> Option<&Color> {
        self.0.get(reference.0)
    }

    /// Number of palette entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.0.iter()
    }
}

/// The personal palette, a Nord-leaning scheme.
pub fn palette() -> Palette {
    Palette::new(
        [
            "#242831", // 0 background
            "#f8f8f2", // 1 foreground
            "#3b4252", // 2 background lighter
            "#bf616a", // 3 red
            "#a3be8c", // 4 green
            "#ebcb8b", // 5 yellow
            "#81a1c1", // 6 blue
            "#b48ead", // 7 magenta
            "#88c0d0", // 8 cyan
            "#4c566a", // 9 grey
            "#e5e9f0", // 10 white
            "#d08770", // 11 orange
            "#8fbcbb", // 12 super cyan
            "#5e81ac", // 13 super blue
            "#2e3440", // 14 super dark background
            "#708090", // 15 slate grey
        ]
        .map(Color::new),
    )
}

/// Formatting parameters every widget inherits unless it overrides them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDefaults {
    /// Font family name.
    pub font: String,
    /// Font size in points.
    pub fontsize: u32,
    /// Default text color.
    pub foreground: ColorRef,
    /// Default widget background.
    pub background: ColorRef,
}

/// The personal widget defaults.
pub fn widget_defaults() -> WidgetDefaults {
    WidgetDefaults {
        font: "JetBrains Mono Nerd Font".into(),
        fontsize: 14,
        foreground: WHITE,
        background: BACKGROUND,
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn palette_has_sixteen_entries() {
        assert_eq!(palette().len(), 16);
    }

    #[test]
    fn palette_entries_are_well_formed() {
        for color in palette().iter() {
            assert!(color.is_well_formed(), "bad color {}", color);
        }
    }

    #[test]
    fn palette_entries_are_distinct() {
        let p = palette();
        let unique: HashSet<&str> = p.iter().map(Color::hex).collect();
        assert_eq!(unique.len(), p.len());
    }

    #[test]
    fn named_slots_resolve() {
        let p = palette();
        assert_eq!(p.get(BACKGROUND).unwrap().hex(), "#242831");
        assert_eq!(p.get(GREY).unwrap().hex(), "#4c566a");
        assert_eq!(p.get(SLATE_GREY).unwrap().hex(), "#708090");
    }

    #[test]
    fn out_of_range_ref_is_none() {
        assert!(palette().get(ColorRef(16)).is_none());
    }

    #[test]
    fn well_formedness_rejects_junk() {
        assert!(Color::new("#242831").is_well_formed());
        assert!(!Color::new("242831").is_well_formed());
        assert!(!Color::new("#24283").is_well_formed());
        assert!(!Color::new("#24283g").is_well_formed());
        assert!(!Color::new("").is_well_formed());
    }

    #[test]
    fn widget_defaults_use_palette_refs() {
        let d = widget_defaults();
        assert_eq!(d.font, "JetBrains Mono Nerd Font");
        assert_eq!(d.fontsize, 14);
        assert_eq!(d.foreground, WHITE);
        assert_eq!(d.background, BACKGROUND);
    }

    #[test]
    fn color_serializes_as_bare_string() {
        let json = serde_json::to_string(&Color::new("#bf616a")).unwrap();
        assert_eq!(json, "\"#bf616a\"");
    }

    #[test]
    fn color_ref_serializes_as_bare_index() {
        let json = serde_json::to_string(&GREY).unwrap();
        assert_eq!(json, "9");
    }
}
