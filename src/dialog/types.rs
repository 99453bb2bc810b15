//! Core dialog types
//!
//! Requests, rendered content, accessibility semantics, lifecycle states and
//! the error taxonomy shared by the widget and its views.

use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Which button set a dialog shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    /// Cancel + confirm, resolves `true` only through confirm
    Confirm,
    /// A single OK button
    Alert,
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirm => write!(f, "confirm"),
            Self::Alert => write!(f, "alert"),
        }
    }
}

/// Text direction of the host, used to lay the button row out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Directionality {
    #[default]
    Ltr,
    Rtl,
}

/// Default strings substituted for missing title, message and button labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    pub confirm_title: String,
    pub alert_title: String,
    pub message: String,
    pub confirm: String,
    pub cancel: String,
    pub ok: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            confirm_title: "Confirm".to_string(),
            alert_title: "Notice".to_string(),
            message: "Continue?".to_string(),
            confirm: "Confirm".to_string(),
            cancel: "Cancel".to_string(),
            ok: "OK".to_string(),
        }
    }
}

impl Labels {
    /// Brazilian Portuguese labels, as shipped by the workout log
    pub fn portuguese() -> Self {
        Self {
            confirm_title: "Confirmação".to_string(),
            alert_title: "Atenção".to_string(),
            message: "Deseja continuar?".to_string(),
            confirm: "Confirmar".to_string(),
            cancel: "Cancelar".to_string(),
            ok: "OK".to_string(),
        }
    }
}

/// Options the widget resolves at render time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogOptions {
    pub labels: Labels,
    pub directionality: Directionality,
    /// Delay between becoming visible and moving focus into the dialog
    pub focus_delay: Duration,
    /// Length of the close transition before the view is hidden
    pub close_transition: Duration,
}

/// Caller-supplied text, coerced the loose way the legacy callers expect.
///
/// `None`, `()`, JSON `null` and blank strings all count as missing and get
/// replaced by a default label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogText(Option<String>);

impl DialogText {
    pub fn missing() -> Self {
        Self(None)
    }

    pub fn is_missing(&self) -> bool {
        self.0.as_deref().map_or(true, |text| text.trim().is_empty())
    }

    /// Resolve to the given text or the fallback
    pub fn or_default(self, fallback: &str) -> String {
        match self.0 {
            Some(text) if !text.trim().is_empty() => text,
            _ => fallback.to_string(),
        }
    }
}

impl From<&str> for DialogText {
    fn from(text: &str) -> Self {
        Self(Some(text.to_string()))
    }
}

impl From<String> for DialogText {
    fn from(text: String) -> Self {
        Self(Some(text))
    }
}

impl From<&String> for DialogText {
    fn from(text: &String) -> Self {
        Self(Some(text.clone()))
    }
}

impl From<()> for DialogText {
    fn from(_: ()) -> Self {
        Self(None)
    }
}

impl<T: Into<DialogText>> From<Option<T>> for DialogText {
    fn from(text: Option<T>) -> Self {
        text.map(Into::into).unwrap_or_default()
    }
}

impl From<serde_json::Value> for DialogText {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self(None),
            serde_json::Value::String(text) => Self(Some(text)),
            other => Self(Some(other.to_string())),
        }
    }
}

macro_rules! dialog_text_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for DialogText {
                fn from(value: $ty) -> Self {
                    Self(Some(value.to_string()))
                }
            }
        )*
    };
}

dialog_text_from_display!(bool, char, i32, i64, u32, u64, usize, f32, f64);

/// One `show` call's worth of content, with defaults already substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub kind: DialogKind,
}

impl DialogRequest {
    pub fn confirm(
        message: impl Into<DialogText>,
        title: impl Into<DialogText>,
        labels: &Labels,
    ) -> Self {
        Self {
            title: title.into().or_default(&labels.confirm_title),
            message: message.into().or_default(&labels.message),
            confirm_label: labels.confirm.clone(),
            cancel_label: labels.cancel.clone(),
            kind: DialogKind::Confirm,
        }
    }

    pub fn alert(
        message: impl Into<DialogText>,
        title: impl Into<DialogText>,
        labels: &Labels,
    ) -> Self {
        Self {
            title: title.into().or_default(&labels.alert_title),
            message: message.into().or_default(&labels.message),
            confirm_label: labels.ok.clone(),
            cancel_label: labels.cancel.clone(),
            kind: DialogKind::Alert,
        }
    }

    pub fn with_confirm_label(mut self, label: impl Into<DialogText>) -> Self {
        self.confirm_label = label.into().or_default(&self.confirm_label);
        self
    }
}

/// What a footer button does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    Confirm,
    Cancel,
    /// The alert's OK button
    Acknowledge,
}

impl ButtonRole {
    /// Verdict delivered to the caller when this button is activated
    pub fn verdict(self) -> bool {
        !matches!(self, Self::Cancel)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogButton {
    pub label: String,
    pub role: ButtonRole,
}

impl DialogButton {
    pub fn new(label: impl Into<String>, role: ButtonRole) -> Self {
        Self {
            label: label.into(),
            role,
        }
    }
}

/// Assistive-technology semantics applied while the dialog is on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalSemantics {
    /// `dialog` for confirmations, `alertdialog` for alerts
    pub role: &'static str,
    pub modal: bool,
    pub labelled_by: String,
    pub described_by: String,
}

/// Rendered form of a request.
///
/// Buttons are kept in reading order (cancel before confirm); the view lays
/// them out from the start edge given by `directionality`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogContent {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
    pub buttons: Vec<DialogButton>,
    pub directionality: Directionality,
}

impl DialogContent {
    pub fn build(request: &DialogRequest, directionality: Directionality) -> Self {
        let buttons = match request.kind {
            DialogKind::Alert => vec![DialogButton::new(
                request.confirm_label.clone(),
                ButtonRole::Acknowledge,
            )],
            DialogKind::Confirm => vec![
                DialogButton::new(request.cancel_label.clone(), ButtonRole::Cancel),
                DialogButton::new(request.confirm_label.clone(), ButtonRole::Confirm),
            ],
        };

        Self {
            kind: request.kind,
            title: request.title.clone(),
            message: request.message.clone(),
            buttons,
            directionality,
        }
    }

    pub fn semantics(&self) -> ModalSemantics {
        ModalSemantics {
            role: match self.kind {
                DialogKind::Confirm => "dialog",
                DialogKind::Alert => "alertdialog",
            },
            modal: true,
            labelled_by: self.title.clone(),
            described_by: self.message.clone(),
        }
    }

    /// Verdict of the button at `index`, if there is one
    pub fn verdict_at(&self, index: usize) -> Option<bool> {
        self.buttons.get(index).map(|button| button.role.verdict())
    }
}

/// Dialog lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    /// Visible, focus not yet moved into the dialog
    Opening,
    Open,
    /// Settled, waiting out the close transition
    Closing,
}

impl DialogState {
    /// Whether the dialog is on screen and accepting input
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }
}

/// Where a pointer click landed, as resolved by the host's hit test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Outside the dialog body
    Overlay,
    /// Inside the body but not on a button
    Body,
    Button(usize),
}

/// Input routed to the widget by the host loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogInput {
    Key(KeyEvent),
    Click(ClickTarget),
}

/// Lifecycle notifications published to an optional listener.
///
/// `Opened` and `Closed` come in pairs. A request whose content fails to
/// render is reported as `Resolved` with `verdict: false` and no `Opened`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    Opened(DialogKind),
    Resolved { kind: DialogKind, verdict: bool },
    /// A live request was replaced by a newer one and resolved `false`
    Superseded(DialogKind),
    Closed,
}

/// Result type for dialog outcomes
pub type DialogResult<T> = std::result::Result<T, DialogError>;

/// Dialog-specific error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialogError {
    #[error("dialog view could not be initialised: {0}")]
    Initialization(#[source] ViewError),

    #[error("dialog content could not be rendered: {0}")]
    ContentRender(#[source] ViewError),

    #[error("dialog widget is busy handling another call")]
    Reentrant,
}

/// Errors raised by a [`DialogView`](super::view::DialogView)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("host view unavailable: {0}")]
    Unavailable(String),

    #[error("area {width}x{height} is smaller than the {min_width}x{min_height} a dialog needs")]
    TooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("render failed: {0}")]
    Render(String),
}
