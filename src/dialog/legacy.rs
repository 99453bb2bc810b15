//! Free-function entry points for older call sites
//!
//! The workout log used to call `customConfirm(message, title)` and
//! `customAlert(message, title)` against a page-global dialog. Here the
//! composition root owns the widget and hands out a [`DialogHandle`]; the
//! free functions take that handle instead of reaching for a global.

use super::{
    outcome::Outcome,
    types::{DialogError, DialogText},
    view::DialogView,
    widget::DialogWidget,
};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Cloneable, single-threaded handle to the application's dialog widget
pub struct DialogHandle<V: DialogView> {
    inner: Rc<RefCell<DialogWidget<V>>>,
}

impl<V: DialogView> Clone for DialogHandle<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<V: DialogView> DialogHandle<V> {
    pub fn new(widget: DialogWidget<V>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(widget)),
        }
    }

    pub fn confirm(&self, message: impl Into<DialogText>, title: impl Into<DialogText>) -> Outcome {
        match self.inner.try_borrow_mut() {
            Ok(mut widget) => widget.confirm(message, title),
            Err(_) => Outcome::rejected(DialogError::Reentrant),
        }
    }

    pub fn alert(&self, message: impl Into<DialogText>, title: impl Into<DialogText>) -> Outcome {
        match self.inner.try_borrow_mut() {
            Ok(mut widget) => widget.alert(message, title),
            Err(_) => Outcome::rejected(DialogError::Reentrant),
        }
    }

    pub fn widget(&self) -> Ref<'_, DialogWidget<V>> {
        self.inner.borrow()
    }

    pub fn widget_mut(&self) -> RefMut<'_, DialogWidget<V>> {
        self.inner.borrow_mut()
    }
}

/// Ask for confirmation through `dialog`
pub fn custom_confirm<V: DialogView>(
    dialog: &DialogHandle<V>,
    message: impl Into<DialogText>,
    title: impl Into<DialogText>,
) -> Outcome {
    dialog.confirm(message, title)
}

/// Show a notice through `dialog`
pub fn custom_alert<V: DialogView>(
    dialog: &DialogHandle<V>,
    message: impl Into<DialogText>,
    title: impl Into<DialogText>,
) -> Outcome {
    dialog.alert(message, title)
}
