//! Keyboard navigation inside an open dialog
//!
//! Maps key events to dialog actions and keeps the focus ring that traps
//! Tab/Shift+Tab cycling within the dialog's buttons.

use super::types::Directionality;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions a key can trigger while the dialog is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    /// Resolve `false` and close (Escape)
    Dismiss,
    /// Move to the next focusable element, wrapping at the end
    FocusNext,
    /// Move to the previous focusable element, wrapping at the start
    FocusPrevious,
    /// Move one button toward the left edge
    FocusLeft,
    /// Move one button toward the right edge
    FocusRight,
    /// Activate the focused button
    Activate,
}

impl DialogAction {
    /// Arrow keys follow the screen; resolve them against the text direction
    pub fn resolve(self, directionality: Directionality) -> Self {
        match (self, directionality) {
            (Self::FocusLeft, Directionality::Ltr) | (Self::FocusRight, Directionality::Rtl) => {
                Self::FocusPrevious
            }
            (Self::FocusRight, Directionality::Ltr) | (Self::FocusLeft, Directionality::Rtl) => {
                Self::FocusNext
            }
            (action, _) => action,
        }
    }
}

/// Key binding for dialog actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key_code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key_code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { key_code, modifiers }
    }

    pub fn from_key_event(event: KeyEvent) -> Self {
        Self {
            key_code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Key bindings for an open dialog
#[derive(Debug, Clone)]
pub struct DialogKeymap {
    key_bindings: HashMap<KeyBinding, DialogAction>,
}

impl DialogKeymap {
    pub fn new() -> Self {
        let mut keymap = Self {
            key_bindings: HashMap::new(),
        };

        keymap.setup_default_bindings();
        keymap
    }

    fn setup_default_bindings(&mut self) {
        self.bind_key(KeyCode::Esc, KeyModifiers::NONE, DialogAction::Dismiss);

        self.bind_key(KeyCode::Tab, KeyModifiers::NONE, DialogAction::FocusNext);
        // Terminals disagree on whether Shift+Tab carries the SHIFT modifier
        self.bind_key(KeyCode::BackTab, KeyModifiers::SHIFT, DialogAction::FocusPrevious);
        self.bind_key(KeyCode::BackTab, KeyModifiers::NONE, DialogAction::FocusPrevious);
        self.bind_key(KeyCode::Tab, KeyModifiers::SHIFT, DialogAction::FocusPrevious);

        self.bind_key(KeyCode::Left, KeyModifiers::NONE, DialogAction::FocusLeft);
        self.bind_key(KeyCode::Right, KeyModifiers::NONE, DialogAction::FocusRight);

        self.bind_key(KeyCode::Enter, KeyModifiers::NONE, DialogAction::Activate);
        self.bind_key(KeyCode::Char(' '), KeyModifiers::NONE, DialogAction::Activate);
    }

    fn bind_key(&mut self, key_code: KeyCode, modifiers: KeyModifiers, action: DialogAction) {
        self.key_bindings
            .insert(KeyBinding::new(key_code, modifiers), action);
    }

    /// Get the dialog action for a key event
    pub fn get_action(&self, event: KeyEvent) -> Option<DialogAction> {
        self.key_bindings
            .get(&KeyBinding::from_key_event(event))
            .copied()
    }

    /// Footer hint shown under the buttons
    pub fn help_text(&self) -> &'static str {
        "Tab/←/→: Select • Enter/Space: Choose • Esc: Cancel"
    }
}

impl Default for DialogKeymap {
    fn default() -> Self {
        Self::new()
    }
}

/// Focus position among a dialog's focusable elements.
///
/// Moving past either end wraps around, so focus never leaves the dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusRing {
    len: usize,
    current: Option<usize>,
}

impl FocusRing {
    pub fn new(len: usize) -> Self {
        Self { len, current: None }
    }

    /// Replace the focusable set; nothing is focused until `first` or a move
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.current = None;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn first(&mut self) -> Option<usize> {
        self.current = (self.len > 0).then_some(0);
        self.current
    }

    pub fn last(&mut self) -> Option<usize> {
        self.current = self.len.checked_sub(1);
        self.current
    }

    pub fn next(&mut self) -> Option<usize> {
        match self.current {
            _ if self.len == 0 => None,
            Some(index) if index + 1 < self.len => {
                self.current = Some(index + 1);
                self.current
            }
            // Unfocused or on the last element
            _ => self.first(),
        }
    }

    pub fn previous(&mut self) -> Option<usize> {
        match self.current {
            _ if self.len == 0 => None,
            Some(index) if index > 0 => {
                self.current = Some(index - 1);
                self.current
            }
            _ => self.last(),
        }
    }
}
