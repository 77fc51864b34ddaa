//! Keyboard shortcut parsing and matching.
//!
//! Shortcuts are written as `+`-joined tokens such as `mod+J` or
//! `ctrl+shift+K`. `mod` means "Ctrl or Cmd", which lets one binding serve
//! both desktop conventions.

#[cfg(test)]
#[path = "hotkeys_test.rs"]
mod hotkeys_test;

use std::str::FromStr;

/// Global shortcut that flips the color scheme.
pub const TOGGLE_COLOR_SCHEME: &str = "mod+J";

/// Element tags whose key events never trigger shortcuts.
const IGNORED_TAGS: &[&str] = &["INPUT", "TEXTAREA", "SELECT"];

/// Errors produced while parsing a shortcut string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HotkeyError {
    #[error("hotkey has no key: {0:?}")]
    MissingKey(String),
    #[error("hotkey has more than one key: {0:?}")]
    MultipleKeys(String),
}

/// A parsed keyboard shortcut.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hotkey {
    pub key: String,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    /// Either Ctrl or Meta satisfies the binding.
    pub modifier: bool,
}

impl FromStr for Hotkey {
    type Err = HotkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut hotkey = Hotkey {
            key: String::new(),
            alt: false,
            ctrl: false,
            meta: false,
            shift: false,
            modifier: false,
        };

        for token in s.split('+').map(|t| t.trim().to_ascii_lowercase()) {
            match token.as_str() {
                "alt" => hotkey.alt = true,
                "ctrl" => hotkey.ctrl = true,
                "meta" => hotkey.meta = true,
                "shift" => hotkey.shift = true,
                "mod" => hotkey.modifier = true,
                "" => {}
                _ if !hotkey.key.is_empty() => return Err(HotkeyError::MultipleKeys(s.to_owned())),
                _ => hotkey.key = token,
            }
        }

        if hotkey.key.is_empty() {
            return Err(HotkeyError::MissingKey(s.to_owned()));
        }
        Ok(hotkey)
    }
}

/// The parts of a keyboard event that shortcut matching looks at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyStroke {
    /// `KeyboardEvent.key`, e.g. `"j"` or `"J"`.
    pub key: String,
    /// `KeyboardEvent.code`, e.g. `"KeyJ"`.
    pub code: String,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

#[cfg(feature = "hydrate")]
impl From<&web_sys::KeyboardEvent> for KeyStroke {
    fn from(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            code: ev.code(),
            alt: ev.alt_key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
        }
    }
}

impl Hotkey {
    /// Whether `stroke` triggers this shortcut. Modifiers must match exactly.
    pub fn matches(&self, stroke: &KeyStroke) -> bool {
        if self.alt != stroke.alt || self.shift != stroke.shift {
            return false;
        }

        if self.modifier {
            if !stroke.ctrl && !stroke.meta {
                return false;
            }
        } else if self.ctrl != stroke.ctrl || self.meta != stroke.meta {
            return false;
        }

        let code_key = stroke.code.strip_prefix("Key").unwrap_or(&stroke.code);
        stroke.key.eq_ignore_ascii_case(&self.key) || code_key.eq_ignore_ascii_case(&self.key)
    }
}

/// Whether key events targeting an element are left alone: form fields and
/// anything the user can type into.
pub fn is_ignored_target(tag_name: &str, content_editable: bool) -> bool {
    content_editable || IGNORED_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag_name))
}
