//! Modal confirm/alert dialog
//!
//! [`DialogWidget`] is the state machine; it drives a [`DialogView`] and hands
//! each caller an [`Outcome`] that resolves exactly once.

pub mod legacy;
pub mod navigation;
pub mod outcome;
pub mod types;
pub mod view;
pub mod widget;

#[cfg(test)]
pub(crate) mod testing;

pub use legacy::{custom_alert, custom_confirm, DialogHandle};
pub use navigation::{DialogAction, DialogKeymap, FocusRing};
pub use outcome::{Outcome, OutcomeResolver};
pub use types::{
    ButtonRole, ClickTarget, DialogButton, DialogContent, DialogError, DialogEvent, DialogInput,
    DialogKind, DialogOptions, DialogRequest, DialogResult, DialogState, DialogText,
    Directionality, Labels, ModalSemantics, ViewError,
};
pub use view::{DialogView, FocusTarget};
pub use widget::DialogWidget;
