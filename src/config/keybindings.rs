//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions on the content screens.
///
/// Provides default vim-style bindings. Text entry (login form, search bar)
/// does not go through the bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup; press/repeat kind and
    /// keyboard state are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }

    /// Bind a printable character that terminals may report with or without
    /// SHIFT (uppercase letters, `?`).
    fn bind_shifted(&mut self, ch: char, action: KeyAction) {
        self.bind(KeyCode::Char(ch), KeyModifiers::NONE, action);
        self.bind(KeyCode::Char(ch), KeyModifiers::SHIFT, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Selection
        keys.bind(KeyCode::Char('j'), none, KeyAction::SelectNext);
        keys.bind(KeyCode::Down, none, KeyAction::SelectNext);
        keys.bind(KeyCode::Char('k'), none, KeyAction::SelectPrev);
        keys.bind(KeyCode::Up, none, KeyAction::SelectPrev);
        keys.bind(KeyCode::Char('g'), none, KeyAction::SelectFirst);
        keys.bind(KeyCode::Home, none, KeyAction::SelectFirst);
        keys.bind_shifted('G', KeyAction::SelectLast);
        keys.bind(KeyCode::End, none, KeyAction::SelectLast);

        // Tabs
        keys.bind(KeyCode::Char(']'), none, KeyAction::NextTab);
        keys.bind(KeyCode::Tab, none, KeyAction::NextTab);
        keys.bind(KeyCode::Char('['), none, KeyAction::PrevTab);
        keys.bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevTab);
        keys.bind(KeyCode::BackTab, none, KeyAction::PrevTab);
        for number in 1..=3 {
            if let Some(ch) = char::from_digit(number, 10) {
                keys.bind(KeyCode::Char(ch), none, KeyAction::SelectTab(number as usize));
            }
        }

        // Content
        keys.bind(KeyCode::Char('o'), none, KeyAction::OpenImage);
        keys.bind(KeyCode::Enter, none, KeyAction::OpenImage);
        keys.bind(KeyCode::Char('f'), none, KeyAction::OpenFile);
        keys.bind(KeyCode::Char('r'), none, KeyAction::Refresh);

        // Search
        keys.bind(KeyCode::Char('/'), none, KeyAction::StartSearch);
        keys.bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);
        keys.bind(KeyCode::Esc, none, KeyAction::Back);
        keys.bind(KeyCode::Backspace, none, KeyAction::Back);

        // Application
        keys.bind_shifted('L', KeyAction::Logout);
        keys.bind_shifted('?', KeyAction::Help);
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
