//! Typed event payloads exchanged with the host UI.
//!
//! Hosts translate whatever their toolkit delivers into these payloads and
//! hand them to [`Ipv4Field::handle`](crate::Ipv4Field::handle).

use octet_core::SlotIndex;

/// The separator key between octets.
pub const SEPARATOR: char = '.';

/// A key press as seen by one octet slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    Backspace,
    Delete,
    Tab,
    Enter,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

impl Key {
    /// Returns `true` for the octet separator.
    #[inline]
    pub fn is_separator(self) -> bool {
        self == Key::Char(SEPARATOR)
    }

    /// Parse a key name such as `"Backspace"`, `"."` or `"7"`.
    ///
    /// Single characters map to [`Key::Char`]; names are matched ASCII
    /// case-insensitively.
    pub fn from_name(name: &str) -> Option<Key> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Key::Char(c));
        }

        let key = match name.to_ascii_lowercase().as_str() {
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "tab" => Key::Tab,
            "enter" | "return" => Key::Enter,
            "arrowleft" | "left" => Key::ArrowLeft,
            "arrowright" | "right" => Key::ArrowRight,
            "home" => Key::Home,
            "end" => Key::End,
            "space" => Key::Char(' '),
            "period" | "dot" => Key::Char(SEPARATOR),
            _ => return None,
        };
        Some(key)
    }
}

/// Modifier keys held during a key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        alt: false,
        shift: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    /// Returns `true` if a shortcut modifier (ctrl, meta or alt) is held.
    ///
    /// Shift alone does not count: it still produces printable characters.
    #[inline]
    pub fn is_shortcut(self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

/// Events a single IPv4 field reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldEvent<'a> {
    /// Key pressed in a slot, before the host inserts anything.
    Keystroke {
        slot: SlotIndex,
        key: Key,
        modifiers: Modifiers,
    },
    /// The slot's full text after the host applied an edit.
    Input { slot: SlotIndex, text: &'a str },
    /// Clipboard text pasted into a slot.
    Paste { slot: SlotIndex, text: &'a str },
    /// A slot lost focus.
    Blur { slot: SlotIndex },
    /// Programmatic assignment of the whole address.
    SetValue(&'a str),
}

/// What the host should do after an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    /// `false` means the host must suppress its default action for the event.
    pub accepted: bool,
    /// Slot that should receive focus, if focus should move.
    pub focus: Option<SlotIndex>,
}

impl Response {
    pub const ACCEPT: Response = Response {
        accepted: true,
        focus: None,
    };

    pub const SUPPRESS: Response = Response {
        accepted: false,
        focus: None,
    };

    #[inline]
    pub fn with_focus(self, focus: Option<SlotIndex>) -> Response {
        Response { focus, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_name() {
        assert_eq!(Key::from_name("7"), Some(Key::Char('7')));
        assert_eq!(Key::from_name("."), Some(Key::Char('.')));
        assert_eq!(Key::from_name("BackSpace"), Some(Key::Backspace));
        assert_eq!(Key::from_name("dot"), Some(Key::Char('.')));
        assert_eq!(Key::from_name("F13"), None);
        assert_eq!(Key::from_name(""), None);
    }

    #[test]
    fn shift_is_not_a_shortcut() {
        let shift = Modifiers {
            shift: true,
            ..Modifiers::NONE
        };
        assert!(!shift.is_shortcut());
        assert!(Modifiers::CTRL.is_shortcut());
    }
}
