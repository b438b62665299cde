//! Keyboard shortcuts for moving around without a toolbar.
//!
//! | Action       | macOS             | Elsewhere          |
//! |--------------|-------------------|--------------------|
//! | Back         | Cmd+[, Cmd+Left   | Alt+Left, Ctrl+[   |
//! | Forward      | Cmd+], Cmd+Right  | Alt+Right, Ctrl+]  |
//! | Reload       | Cmd+R             | Ctrl+R, F5         |
//! | Open address | Cmd+L             | Ctrl+L, F6         |
//!
//! Dedicated browser keys (`BrowserBack`, `BrowserForward`,
//! `BrowserRefresh`) work everywhere.

use winit::keyboard::{Key, ModifiersState};

/// A navigation shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Back,
    Forward,
    Reload,
    /// Show the start page with the current address ready to edit.
    OpenAddress,
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyMods {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
}

impl From<ModifiersState> for KeyMods {
    fn from(state: ModifiersState) -> Self {
        Self {
            ctrl: state.control_key(),
            alt: state.alt_key(),
            shift: state.shift_key(),
            super_key: state.super_key(),
        }
    }
}

impl KeyMods {
    fn none(self) -> bool {
        self == Self::default()
    }
}

/// Name a winit key the way [`nav_action`] expects it.
///
/// Arrow keys lose their `Arrow` prefix and single characters are
/// uppercased. Keys with no useful name yield `None`.
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Named(named) => {
            let name = format!("{named:?}");
            Some(match name.as_str() {
                "ArrowLeft" => "Left".to_string(),
                "ArrowRight" => "Right".to_string(),
                _ => name,
            })
        }
        Key::Character(c) => Some(c.to_uppercase()),
        _ => None,
    }
}

/// Map a key press to a navigation shortcut.
///
/// `mac` selects Cmd as the primary modifier; elsewhere it is Ctrl.
pub fn nav_action(key: &str, mods: KeyMods, mac: bool) -> Option<NavAction> {
    match key {
        "BrowserBack" => return Some(NavAction::Back),
        "BrowserForward" => return Some(NavAction::Forward),
        "BrowserRefresh" => return Some(NavAction::Reload),
        "F5" if !mac && mods.none() => return Some(NavAction::Reload),
        "F6" if !mac && mods.none() => return Some(NavAction::OpenAddress),
        _ => {}
    }

    let primary = if mac {
        mods.super_key && !mods.ctrl
    } else {
        mods.ctrl && !mods.super_key
    };

    if primary && !mods.alt {
        return match key {
            "[" => Some(NavAction::Back),
            "]" => Some(NavAction::Forward),
            "Left" if mac => Some(NavAction::Back),
            "Right" if mac => Some(NavAction::Forward),
            // Shift+R is a hard reload in browsers; the engine decides what that means
            "R" => Some(NavAction::Reload),
            "L" if !mods.shift => Some(NavAction::OpenAddress),
            _ => None,
        };
    }

    let alt_only = mods.alt && !mods.ctrl && !mods.shift && !mods.super_key;
    if !mac && alt_only {
        return match key {
            "Left" => Some(NavAction::Back),
            "Right" => Some(NavAction::Forward),
            _ => None,
        };
    }

    None
}
