//! Keyboard shortcuts for the picker commands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use eframe::egui;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    None,
    Ctrl,
    Alt,
    Shift,
    CtrlShift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::None => "",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::CtrlShift => "Ctrl+Shift",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: char,
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier == Modifier::None {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifier, self.key)
        }
    }
}

impl FromStr for Hotkey {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty hotkey".to_string());
        }
        let parts: Vec<&str> = s.split('+').map(|p| p.trim()).collect();
        let (last, mods) = match parts.split_last() {
            Some(split) => split,
            None => return Err("invalid hotkey".to_string()),
        };
        let mut chars = last.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphanumeric() => c.to_ascii_uppercase(),
            _ => return Err(format!("unsupported key '{}'", last)),
        };
        let lowers: Vec<String> = mods.iter().map(|m| m.to_lowercase()).collect();
        let modifier = match lowers.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
            [] => Modifier::None,
            ["ctrl"] | ["control"] => Modifier::Ctrl,
            ["alt"] => Modifier::Alt,
            ["shift"] => Modifier::Shift,
            ["ctrl", "shift"] | ["shift", "ctrl"] => Modifier::CtrlShift,
            other => return Err(format!("unknown modifier combo '{:?}'", other)),
        };
        Ok(Hotkey { modifier, key })
    }
}

impl Hotkey {
    pub fn new(modifier: Modifier, key: char) -> Self {
        Self { modifier, key }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotkeys {
    pub load_image: Option<Hotkey>,
    pub calculate: Option<Hotkey>,
    pub reset: Option<Hotkey>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            load_image: Some(Hotkey::new(Modifier::Ctrl, 'O')),
            calculate: Some(Hotkey::new(Modifier::None, 'C')),
            reset: Some(Hotkey::new(Modifier::None, 'R')),
        }
    }
}

impl Hotkeys {
    pub fn get(&self, name: HotkeyName) -> Option<&Hotkey> {
        match name {
            HotkeyName::LoadImage => self.load_image.as_ref(),
            HotkeyName::Calculate => self.calculate.as_ref(),
            HotkeyName::Reset => self.reset.as_ref(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HotkeyName {
    LoadImage,
    Calculate,
    Reset,
}

impl HotkeyName {
    pub const ALL: [HotkeyName; 3] = [
        HotkeyName::LoadImage,
        HotkeyName::Calculate,
        HotkeyName::Reset,
    ];
}

/// Button tooltip text, with the shortcut appended in brackets when one is bound.
pub fn format_button_tooltip(description: &str, hotkey: Option<&Hotkey>) -> String {
    match hotkey {
        Some(hk) => format!("{} [{}]", description, hk),
        None => description.to_string(),
    }
}

fn key_from_char(c: char) -> Option<egui::Key> {
    egui::Key::from_name(&c.to_ascii_uppercase().to_string())
}

fn modifiers_match(mods: &egui::Modifiers, modifier: Modifier) -> bool {
    let ctrl = mods.ctrl || mods.command;
    let alt = mods.alt;
    let shift = mods.shift;
    match modifier {
        Modifier::None => !ctrl && !alt,
        Modifier::Ctrl => ctrl && !alt && !shift,
        Modifier::Alt => alt && !ctrl,
        Modifier::Shift => shift && !ctrl && !alt,
        Modifier::CtrlShift => ctrl && shift && !alt,
    }
}

fn is_hotkey_pressed(hk: Option<&Hotkey>, input: &egui::InputState) -> bool {
    let Some(hk) = hk else { return false };
    let Some(key) = key_from_char(hk.key) else {
        return false;
    };
    modifiers_match(&input.modifiers, hk.modifier) && input.key_pressed(key)
}

/// Shortcuts pressed during this frame. Nothing fires while a text field has focus.
pub fn detect_hotkey_actions(cfg: &Hotkeys, ctx: &egui::Context) -> Vec<HotkeyName> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    ctx.input(|input| {
        HotkeyName::ALL
            .into_iter()
            .filter(|name| is_hotkey_pressed(cfg.get(*name), input))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_lookup_covers_letters_and_digits() {
        assert_eq!(key_from_char('o'), Some(egui::Key::O));
        assert_eq!(key_from_char('7'), Some(egui::Key::Num7));
    }

    #[test]
    fn ctrl_does_not_match_plain_binding() {
        let mods = egui::Modifiers {
            ctrl: true,
            ..Default::default()
        };
        assert!(!modifiers_match(&mods, Modifier::None));
        assert!(modifiers_match(&mods, Modifier::Ctrl));
    }
}
