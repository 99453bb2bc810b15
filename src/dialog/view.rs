//! View abstraction the dialog state machine drives
//!
//! The widget never touches the host directly; every visible effect of a
//! transition goes through a [`DialogView`]. The terminal host implements it
//! with ratatui, tests implement it with a recorder.

use super::types::{DialogContent, ModalSemantics, ViewError};
use std::fmt;

/// Opaque handle to an element of the host that can hold input focus
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusTarget(pub String);

impl FocusTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FocusTarget {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for FocusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rendering and host-side effects of the dialog
pub trait DialogView {
    /// Create (or reuse) the overlay subtree and start listening for input
    fn attach(&mut self) -> Result<(), ViewError>;

    /// Remove the overlay subtree and stop listening
    fn detach(&mut self);

    /// Populate title, message and buttons
    fn render(&mut self, content: &DialogContent) -> Result<(), ViewError>;

    fn set_visible(&mut self, visible: bool);

    /// Apply modal semantics, or clear them with `None`
    fn set_modal(&mut self, semantics: Option<&ModalSemantics>);

    /// Give input focus to the button at `index` in reading order
    fn focus_button(&mut self, index: usize);

    fn focus_first(&mut self) {
        self.focus_button(0);
    }

    /// Keep keyboard focus inside the dialog while enabled
    fn trap_focus(&mut self, enabled: bool);

    /// Hold or release the background scroll lock
    fn lock_scroll(&mut self, locked: bool);

    /// The host element focused right now, if any
    fn active_element(&self) -> Option<FocusTarget>;

    fn restore_focus(&mut self, target: &FocusTarget);
}
