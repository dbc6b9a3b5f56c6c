//! Keyboard routing: raw `KeyboardEvent.key` strings to game actions.

/// Modifier keys held while a key was pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        alt: false,
    };

    pub fn any(self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Guess(char),
    Reset,
}

impl KeyAction {
    /// Only a single lowercase `a`–`z` guesses and `Enter` resets; every other
    /// key (uppercase, digits, named keys) is ignored, and so is anything
    /// pressed with Ctrl, Meta or Alt held so browser shortcuts keep working.
    pub fn from_key(key: &str, modifiers: Modifiers) -> Option<Self> {
        if modifiers.any() {
            return None;
        }
        if key == "Enter" {
            return Some(KeyAction::Reset);
        }
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_lowercase() => Some(KeyAction::Guess(c)),
            _ => None,
        }
    }
}
