//! Event handling for the converter TUI.
//!
//! Provides keyboard event handling with customizable key bindings.

use ftui::{KeyCode, KeyEvent, Modifiers};

/// Configurable key bindings for converter actions.
///
/// Bindings stay clear of the characters a numeric field accepts
/// (digits, `.`, `-`, `+`, `e`, `E`), so typing never collides with a
/// shortcut.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Keys to quit the application.
    pub quit: Vec<KeyEvent>,
    /// Keys to show help.
    pub help: Vec<KeyEvent>,
    /// Keys to swap the px and rem fields.
    pub swap: Vec<KeyEvent>,
    /// Keys to copy the focused value field.
    pub copy: Vec<KeyEvent>,
    /// Keys to move focus to the next field.
    pub focus_next: Vec<KeyEvent>,
    /// Keys to move focus to the previous field.
    pub focus_prev: Vec<KeyEvent>,
    /// Keys to clear the focused field.
    pub clear: Vec<KeyEvent>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: vec![
                KeyEvent::new(KeyCode::Char('q')),
                KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::CTRL),
            ],
            help: vec![
                KeyEvent::new(KeyCode::Char('?')),
                KeyEvent::new(KeyCode::F(1)),
            ],
            swap: vec![KeyEvent::new(KeyCode::Char('s'))],
            copy: vec![KeyEvent::new(KeyCode::Char('c'))],
            focus_next: vec![
                KeyEvent::new(KeyCode::Tab),
                KeyEvent::new(KeyCode::Down),
            ],
            focus_prev: vec![
                KeyEvent::new(KeyCode::BackTab),
                KeyEvent::new(KeyCode::Up),
            ],
            clear: vec![KeyEvent::new(KeyCode::Delete)],
        }
    }
}

impl KeyBindings {
    fn matches_any(bindings: &[KeyEvent], key: &KeyEvent) -> bool {
        // Ignore KeyEventKind when matching: ftui will emit both Press and
        // Repeat, and bindings should apply to either.
        //
        // Modifier matching allows an extra SHIFT bit. Many terminals report
        // SHIFT even when the shifted character is already encoded in
        // KeyCode::Char('?').
        bindings
            .iter()
            .any(|b| b.code == key.code && mods_match(b.modifiers, key.modifiers))
    }

    /// Check if a key event matches any quit binding.
    pub fn is_quit(&self, key: &KeyEvent) -> bool {
        Self::matches_any(&self.quit, key)
    }

    /// Check if a key event matches any help binding.
    pub fn is_help(&self, key: &KeyEvent) -> bool {
        Self::matches_any(&self.help, key)
    }

    /// Check if a key event matches any swap binding.
    pub fn is_swap(&self, key: &KeyEvent) -> bool {
        Self::matches_any(&self.swap, key)
    }

    /// Check if a key event matches any copy binding.
    pub fn is_copy(&self, key: &KeyEvent) -> bool {
        Self::matches_any(&self.copy, key)
    }

    /// Check if a key event matches any focus-next binding.
    pub fn is_focus_next(&self, key: &KeyEvent) -> bool {
        Self::matches_any(&self.focus_next, key)
    }

    /// Check if a key event matches any focus-prev binding.
    pub fn is_focus_prev(&self, key: &KeyEvent) -> bool {
        Self::matches_any(&self.focus_prev, key)
    }

    /// Check if a key event matches any clear binding.
    pub fn is_clear(&self, key: &KeyEvent) -> bool {
        Self::matches_any(&self.clear, key)
    }
}

fn mods_match(binding: Modifiers, observed: Modifiers) -> bool {
    observed == binding || observed == (binding | Modifiers::SHIFT)
}

/// Characters a numeric field accepts verbatim.
///
/// Mirrors what an HTML number input lets through: digits, sign, decimal
/// point, and scientific-notation `e`/`E`.
pub fn is_field_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}
