//! Recording view used by the dialog tests

use super::{
    types::{DialogContent, ModalSemantics, ViewError},
    view::{DialogView, FocusTarget},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Attach,
    Detach,
    Render(String),
    SetVisible(bool),
    SetModal(bool),
    FocusButton(usize),
    TrapFocus(bool),
    LockScroll(bool),
    RestoreFocus(FocusTarget),
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
    pub attached: bool,
    pub visible: bool,
    pub trapped: bool,
    pub scroll_locked: bool,
    pub focused: Option<usize>,
    pub rendered: Option<DialogContent>,
    pub semantics: Option<ModalSemantics>,
    pub host_focus: Option<FocusTarget>,
    pub fail_attach: bool,
    pub fail_render: bool,
}

impl RecordingView {
    pub fn focused_on(target: &str) -> Self {
        Self {
            host_focus: Some(FocusTarget::from(target)),
            ..Self::default()
        }
    }
}

impl DialogView for RecordingView {
    fn attach(&mut self) -> Result<(), ViewError> {
        self.calls.push(ViewCall::Attach);
        if self.fail_attach {
            return Err(ViewError::Unavailable("host not ready".into()));
        }
        self.attached = true;
        Ok(())
    }

    fn detach(&mut self) {
        self.calls.push(ViewCall::Detach);
        self.attached = false;
    }

    fn render(&mut self, content: &DialogContent) -> Result<(), ViewError> {
        self.calls.push(ViewCall::Render(content.message.clone()));
        if self.fail_render {
            return Err(ViewError::Render("message node missing".into()));
        }
        self.rendered = Some(content.clone());
        self.focused = None;
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) {
        self.calls.push(ViewCall::SetVisible(visible));
        self.visible = visible;
    }

    fn set_modal(&mut self, semantics: Option<&ModalSemantics>) {
        self.calls.push(ViewCall::SetModal(semantics.is_some()));
        self.semantics = semantics.cloned();
    }

    fn focus_button(&mut self, index: usize) {
        self.calls.push(ViewCall::FocusButton(index));
        self.focused = Some(index);
    }

    fn trap_focus(&mut self, enabled: bool) {
        self.calls.push(ViewCall::TrapFocus(enabled));
        self.trapped = enabled;
    }

    fn lock_scroll(&mut self, locked: bool) {
        self.calls.push(ViewCall::LockScroll(locked));
        self.scroll_locked = locked;
    }

    fn active_element(&self) -> Option<FocusTarget> {
        self.host_focus.clone()
    }

    fn restore_focus(&mut self, target: &FocusTarget) {
        self.calls.push(ViewCall::RestoreFocus(target.clone()));
        self.host_focus = Some(target.clone());
    }
}
