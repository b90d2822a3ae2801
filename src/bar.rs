//! Screens, the status bar, and its widgets.
//!
//! A [`Screen`] carries one top [`Bar`] of fixed pixel height holding an
//! ordered widget sequence. Each [`Widget`] variant carries its own
//! formatting string, colors, padding, and optional click action; the host
//! runtime owns the live values (clock ticks, battery percent, …) after
//! load.
//!
//! Format strings use the host's widget placeholder syntax verbatim
//! (`{down}`, `{percent:2.0%}`, strftime codes); glyphs are nerd-font
//! codepoints.

use crate::action::{Action, SpawnCommand};
use crate::hooks::config_dir;
use crate::keys::{MouseButton, TERMINAL};
use crate::theme::{self, ColorRef};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A pointer action attached to a widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickAction {
    pub button: MouseButton,
    pub action: Action,
}

impl ClickAction {
    /// Left-click shorthand, the only button the personal config uses.
    pub fn left(action: Action) -> Self {
        Self {
            button: MouseButton::Left,
            action,
        }
    }
}

/// How the group box marks the group shown on the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMethod {
    /// Underline the active group's label.
    Line,
    /// Fill the label's cell.
    Block,
    /// Recolor the label text only.
    Text,
    /// Draw a border around the label.
    Border,
}

/// Measurement system for the weather widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherUnits {
    Metric,
    Imperial,
}

/// A status-bar element.
///
/// Variants mirror the host's widget set; only the parameters the personal
/// config sets are carried, everything else falls back to the host's
/// defaults and the manifest-wide [`WidgetDefaults`](crate::theme::WidgetDefaults).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Widget {
    /// Blank separator.
    Sep { linewidth: u32, padding: u32 },
    /// One clickable label per group.
    GroupBox {
        margin_y: u32,
        margin_x: u32,
        padding_y: u32,
        padding_x: u32,
        borderwidth: u32,
        inactive: ColorRef,
        active: ColorRef,
        rounded: bool,
        highlight_color: ColorRef,
        highlight_method: HighlightMethod,
        this_current_screen_border: ColorRef,
        this_screen_border: ColorRef,
        other_current_screen_border: ColorRef,
        other_screen_border: ColorRef,
        foreground: ColorRef,
        background: ColorRef,
    },
    /// Inline command prompt.
    Prompt { prompt: String, padding: u32 },
    /// Titles of every window in the current group.
    TaskList { padding: u32 },
    /// Network throughput for one interface.
    Net {
        foreground: ColorRef,
        interface: String,
        format: String,
        padding: u32,
    },
    /// Memory in use.
    Memory {
        foreground: ColorRef,
        format: String,
        padding: u32,
        on_click: Option<ClickAction>,
    },
    /// CPU load.
    Cpu {
        foreground: ColorRef,
        format: String,
        padding: u32,
        on_click: Option<ClickAction>,
    },
    /// Current weather for a fixed location.
    Weather {
        foreground: ColorRef,
        location: String,
        format: String,
        units: WeatherUnits,
        padding: u32,
    },
    /// Audio volume.
    Volume { foreground: ColorRef, format: String },
    /// Battery state of charge.
    Battery {
        foreground: ColorRef,
        charge_char: String,
        discharge_char: String,
        empty_char: String,
        full_char: String,
        show_short_text: bool,
        format: String,
    },
    /// Date and time.
    Clock {
        foreground: ColorRef,
        format: String,
        on_click: Option<ClickAction>,
    },
    /// System tray icons.
    Systray,
    /// Icon of the active layout.
    CurrentLayoutIcon {
        icon_dir: PathBuf,
        padding: u32,
        scale: f64,
    },
}

impl Widget {
    /// Every palette reference this widget carries, for validation.
    pub fn color_refs(&self) -> Vec<ColorRef> {
        match self {
            Widget::Sep { .. }
            | Widget::Prompt { .. }
            | Widget::TaskList { .. }
            | Widget::Systray
            | Widget::CurrentLayoutIcon { .. } => Vec::new(),
            Widget::GroupBox {
                inactive,
                active,
                highlight_color,
                this_current_screen_border,
                this_screen_border,
                other_current_screen_border,
                other_screen_border,
                foreground,
                background,
                ..
            } => vec![
                *inactive,
                *active,
                *highlight_color,
                *this_current_screen_border,
                *this_screen_border,
                *other_current_screen_border,
                *other_screen_border,
                *foreground,
                *background,
            ],
            Widget::Net { foreground, .. }
            | Widget::Memory { foreground, .. }
            | Widget::Cpu { foreground, .. }
            | Widget::Weather { foreground, .. }
            | Widget::Volume { foreground, .. }
            | Widget::Battery { foreground, .. }
            | Widget::Clock { foreground, .. } => vec![*foreground],
        }
    }

    /// The widget's click action, if any.
    pub fn click_action(&self) -> Option<&ClickAction> {
        match self {
            Widget::Memory { on_click, .. }
            | Widget::Cpu { on_click, .. }
            | Widget::Clock { on_click, .. } => on_click.as_ref(),
            _ => None,
        }
    }
}

/// A status bar: fixed pixel height plus an ordered widget sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub height: u32,
    pub widgets: Vec<Widget>,
}

impl Bar {
    /// Every palette reference in the bar, in widget order.
    pub fn color_refs(&self) -> Vec<ColorRef> {
        self.widgets.iter().flat_map(Widget::color_refs).collect()
    }
}

/// A physical output with its bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    pub top: Bar,
}

//  Personal screen data

/// The prompt text, `user@host: `, resolved from the environment at
/// assembly time.
pub fn prompt_text() -> String {
    let user = std::env::var("USER").unwrap_or_else(|_| "user".into());
    let host = std::fs::read_to_string("/proc/sys/kernel/hostname")
        .map(|s| s.trim().to_string())
        .or_else(|_| std::env::var("HOSTNAME"))
        .unwrap_or_else(|_| "localhost".into());
    format!("{}@{}: ", user, host)
}

/// Spawn a command inside the terminal, for widget click actions.
fn in_terminal(program: &str) -> Action {
    Action::Spawn(SpawnCommand::direct(format!("{} -e {}", TERMINAL, program)))
}

/// The fixed screen list: one screen, one top bar.
pub fn screens() -> Vec<Screen> {
    vec![Screen {
        top: Bar {
            height: 28,
            widgets: vec![
                Widget::Sep {
                    linewidth: 0,
                    padding: 6,
                },
                Widget::GroupBox {
                    margin_y: 3,
                    margin_x: 0,
                    padding_y: 5,
                    padding_x: 3,
                    borderwidth: 3,
                    inactive: theme::BACKGROUND_LIGHT,
                    active: theme::SLATE_GREY,
                    rounded: false,
                    highlight_color: theme::FOREGROUND,
                    highlight_method: HighlightMethod::Line,
                    this_current_screen_border: theme::ORANGE,
                    this_screen_border: theme::SLATE_GREY,
                    other_current_screen_border: theme::SLATE_GREY,
                    other_screen_border: theme::GREY,
                    foreground: theme::SLATE_GREY,
                    background: theme::BACKGROUND,
                },
                Widget::Sep {
                    linewidth: 0,
                    padding: 5,
                },
                Widget::Prompt {
                    prompt: prompt_text(),
                    padding: 6,
                },
                Widget::Sep {
                    linewidth: 0,
                    padding: 5,
                },
                Widget::TaskList { padding: 2 },
                Widget::Net {
                    foreground: theme::RED,
                    interface: "wlan0".into(),
                    format: "\u{f1eb} {down} ↓↑ {up}".into(),
                    padding: 5,
                },
                Widget::Memory {
                    foreground: theme::GREEN,
                    format: "\u{f1c0} {MemUsed: .0f}{mm}".into(),
                    padding: 5,
                    on_click: Some(ClickAction::left(in_terminal("bpytop"))),
                },
                Widget::Cpu {
                    foreground: theme::YELLOW,
                    format: "\u{f2db} {load_percent}%".into(),
                    padding: 5,
                    on_click: Some(ClickAction::left(in_terminal("bpytop"))),
                },
                Widget::Weather {
                    foreground: theme::BLUE,
                    location: "Dana Point".into(),
                    format: "\u{f2c8} %t".into(),
                    units: WeatherUnits::Imperial,
                    padding: 5,
                },
                Widget::Volume {
                    foreground: theme::MAGENTA,
                    format: "\u{fa7f} {}".into(),
                },
                Widget::Battery {
                    foreground: theme::CYAN,
                    charge_char: "\u{f583}".into(),
                    discharge_char: "\u{f58b}".into(),
                    empty_char: "\u{f58d}".into(),
                    full_char: "\u{f578}".into(),
                    show_short_text: false,
                    format: "{char} {percent:2.0%} {hour:d}:{min:02d}".into(),
                },
                Widget::Clock {
                    foreground: theme::GREY,
                    format: "\u{f017} %m/%d/%y %H:%M ".into(),
                    on_click: Some(ClickAction::left(in_terminal("calcure"))),
                },
                Widget::Systray,
                Widget::CurrentLayoutIcon {
                    icon_dir: config_dir().join("icons"),
                    padding: 5,
                    scale: 0.7,
                },
                Widget::Sep {
                    linewidth: 0,
                    padding: 5,
                },
            ],
        },
    }]
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette;

    #[test]
    fn one_screen_with_top_bar() {
        let screens = screens();
        assert_eq!(screens.len(), 1);
        assert_eq!(screens[0].top.height, 28);
    }

    #[test]
    fn widget_order_matches_the_bar_layout() {
        let bar = &screens()[0].top;
        assert_eq!(bar.widgets.len(), 16);
        assert!(matches!(bar.widgets[0], Widget::Sep { .. }));
        assert!(matches!(bar.widgets[1], Widget::GroupBox { .. }));
        assert!(matches!(bar.widgets[3], Widget::Prompt { .. }));
        assert!(matches!(bar.widgets[5], Widget::TaskList { .. }));
        assert!(matches!(bar.widgets[6], Widget::Net { .. }));
        assert!(matches!(bar.widgets[13], Widget::Systray));
        assert!(matches!(bar.widgets[14], Widget::CurrentLayoutIcon { .. }));
        assert!(matches!(bar.widgets[15], Widget::Sep { .. }));
    }

    #[test]
    fn every_bar_color_ref_resolves() {
        let p = palette();
        for reference in screens()[0].top.color_refs() {
            assert!(p.get(reference).is_some(), "{} out of range", reference);
        }
    }

    #[test]
    fn group_box_contributes_nine_refs() {
        let bar = &screens()[0].top;
        assert_eq!(bar.widgets[1].color_refs().len(), 9);
    }

    #[test]
    fn system_widgets_open_bpytop_in_the_terminal() {
        let bar = &screens()[0].top;
        for widget in [&bar.widgets[7], &bar.widgets[8]] {
            let click = widget.click_action().expect("memory/cpu are clickable");
            assert_eq!(click.button, MouseButton::Left);
            assert_eq!(
                click.action,
                Action::Spawn(SpawnCommand::direct("kitty -e bpytop"))
            );
        }
    }

    #[test]
    fn clock_opens_the_calendar() {
        let bar = &screens()[0].top;
        let click = bar.widgets[12].click_action().expect("clock is clickable");
        assert_eq!(
            click.action,
            Action::Spawn(SpawnCommand::direct("kitty -e calcure"))
        );
    }

    #[test]
    fn undecorated_widgets_carry_no_refs() {
        assert!(Widget::Systray.color_refs().is_empty());
        assert!(Widget::Sep {
            linewidth: 0,
            padding: 6
        }
        .color_refs()
        .is_empty());
    }

    #[test]
    fn prompt_text_has_user_host_shape() {
        let prompt = prompt_text();
        assert!(prompt.contains('@'));
        assert!(prompt.ends_with(": "));
    }

    #[test]
    fn net_widget_watches_wlan0() {
        let bar = &screens()[0].top;
        match &bar.widgets[6] {
            Widget::Net {
                interface, format, ..
            } => {
                assert_eq!(interface, "wlan0");
                assert!(format.contains("{down}"));
                assert!(format.contains("{up}"));
            }
            other => panic!("expected Net, got {:?}", other),
        }
    }

    #[test]
    fn screen_wire_round_trip() {
        let screens = screens();
        let json = serde_json::to_string(&screens).unwrap();
        let back: Vec<Screen> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, screens);
    }
}
