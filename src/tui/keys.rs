use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key binding configuration
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub description: String,
}

impl KeyBinding {
    pub fn new(key: KeyCode, modifiers: KeyModifiers, description: &str) -> Self {
        Self {
            key,
            modifiers,
            description: description.to_string(),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && self.modifiers == event.modifiers
    }
}

/// Key mappings of the day-log screen
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub quit: KeyBinding,
    pub force_quit: KeyBinding,
    pub up: KeyBinding,
    pub down: KeyBinding,
    pub remove_entry: KeyBinding,
    pub clear_done: KeyBinding,
    pub delete_day: KeyBinding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            quit: KeyBinding::new(KeyCode::Char('q'), KeyModifiers::NONE, "q quit"),
            force_quit: KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL, "Ctrl+C quit"),
            up: KeyBinding::new(KeyCode::Up, KeyModifiers::NONE, "↑ previous"),
            down: KeyBinding::new(KeyCode::Down, KeyModifiers::NONE, "↓ next"),
            remove_entry: KeyBinding::new(KeyCode::Char('d'), KeyModifiers::NONE, "d remove set"),
            clear_done: KeyBinding::new(KeyCode::Char('c'), KeyModifiers::NONE, "c clear done"),
            delete_day: KeyBinding::new(KeyCode::Char('x'), KeyModifiers::NONE, "x delete day"),
        }
    }
}

impl KeyMap {
    /// Check if the event should quit the application
    pub fn should_quit(&self, event: &KeyEvent) -> bool {
        self.quit.matches(event) || self.force_quit.matches(event)
    }

    /// Status-bar help for all key bindings
    pub fn help_text(&self) -> String {
        [
            &self.up,
            &self.down,
            &self.remove_entry,
            &self.clear_done,
            &self.delete_day,
            &self.quit,
        ]
        .iter()
        .map(|binding| binding.description.as_str())
        .collect::<Vec<_>>()
        .join(" • ")
    }
}
