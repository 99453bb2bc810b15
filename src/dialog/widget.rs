//! Dialog widget state machine
//!
//! `Closed → Opening → Open → Closing → Closed`. At most one request is live;
//! a new `show` resolves the live one `false` before taking its place. Every
//! visible effect goes through the injected [`DialogView`].

use super::{
    navigation::{DialogAction, DialogKeymap, FocusRing},
    outcome::{self, Outcome, OutcomeResolver},
    types::*,
    view::{DialogView, FocusTarget},
};
use crossterm::event::{KeyEvent, KeyEventKind};
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The request currently on screen, with the resolver its caller awaits
#[derive(Debug)]
struct LiveRequest {
    kind: DialogKind,
    resolver: OutcomeResolver,
}

/// Modal confirm/alert widget
pub struct DialogWidget<V: DialogView> {
    view: V,
    options: DialogOptions,
    keymap: DialogKeymap,
    state: DialogState,
    attached: bool,
    live: Option<LiveRequest>,
    content: Option<DialogContent>,
    focus: FocusRing,
    /// Host element focused before the dialog opened, restored on close
    prior_focus: Option<FocusTarget>,
    /// When the pending Opening/Closing transition completes
    deadline: Option<Instant>,
    event_sender: Option<mpsc::UnboundedSender<DialogEvent>>,
}

impl<V: DialogView> DialogWidget<V> {
    pub fn new(view: V, options: DialogOptions) -> Self {
        Self {
            view,
            options,
            keymap: DialogKeymap::new(),
            state: DialogState::Closed,
            attached: false,
            live: None,
            content: None,
            focus: FocusRing::default(),
            prior_focus: None,
            deadline: None,
            event_sender: None,
        }
    }

    /// Publish lifecycle events to `sender`
    pub fn set_event_sender(&mut self, sender: mpsc::UnboundedSender<DialogEvent>) {
        self.event_sender = Some(sender);
    }

    pub fn keymap(&self) -> &DialogKeymap {
        &self.keymap
    }

    pub fn options(&self) -> &DialogOptions {
        &self.options
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Whether the dialog is on screen and taking input
    pub fn is_visible(&self) -> bool {
        self.state.is_interactive()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Kind of the request awaiting a verdict, if any
    pub fn live_kind(&self) -> Option<DialogKind> {
        self.live.as_ref().map(|live| live.kind)
    }

    pub fn content(&self) -> Option<&DialogContent> {
        self.content.as_ref()
    }

    pub fn focused_button(&self) -> Option<usize> {
        self.focus.current()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Attach the view to the host. Called lazily by `show`.
    pub fn attach(&mut self) -> DialogResult<()> {
        if self.attached {
            return Ok(());
        }

        self.view.attach().map_err(DialogError::Initialization)?;
        self.attached = true;
        info!("Dialog view attached");
        Ok(())
    }

    /// Ask for confirmation; resolves `true` only through the confirm button
    pub fn confirm(
        &mut self,
        message: impl Into<DialogText>,
        title: impl Into<DialogText>,
    ) -> Outcome {
        let request = DialogRequest::confirm(message, title, &self.options.labels);
        self.show(request)
    }

    /// Show a notice; resolves `true` only through its OK button
    pub fn alert(&mut self, message: impl Into<DialogText>, title: impl Into<DialogText>) -> Outcome {
        let request = DialogRequest::alert(message, title, &self.options.labels);
        self.show(request)
    }

    /// Put `request` on screen, superseding any live request
    pub fn show(&mut self, request: DialogRequest) -> Outcome {
        if let Err(error) = self.attach() {
            warn!("Dialog unavailable: {}", error);
            return Outcome::rejected(error);
        }

        let (mut resolver, outcome) = outcome::channel();

        if let Some(previous) = self.live.take() {
            self.supersede(previous);
        }

        // Superseding or interrupting a close keeps the element focused before the first open
        if self.prior_focus.is_none() {
            self.prior_focus = self.view.active_element();
        }

        let content = DialogContent::build(&request, self.options.directionality);
        if let Err(error) = self.view.render(&content) {
            let error = DialogError::ContentRender(error);
            warn!("{}; resolving {} as dismissed", error, request.kind);
            resolver.resolve(false);
            self.emit(DialogEvent::Resolved {
                kind: request.kind,
                verdict: false,
            });
            if self.state == DialogState::Closed {
                // Nothing was shown, so there is nothing to close
                self.prior_focus = None;
            } else {
                self.finish_closing();
            }
            return outcome;
        }

        debug!(kind = %request.kind, title = %content.title, "Opening dialog");
        let semantics = content.semantics();
        self.focus.reset(content.buttons.len());
        self.content = Some(content);
        self.live = Some(LiveRequest {
            kind: request.kind,
            resolver,
        });

        self.state = DialogState::Opening;
        self.view.set_visible(true);
        self.view.set_modal(Some(&semantics));
        self.view.trap_focus(true);
        self.view.lock_scroll(true);
        self.emit(DialogEvent::Opened(request.kind));

        if self.options.focus_delay.is_zero() {
            self.finish_opening();
        } else {
            self.deadline = Some(Instant::now() + self.options.focus_delay);
        }

        outcome
    }

    /// Resolve any pending verdict `false` and start closing.
    ///
    /// A no-op unless the dialog is on screen.
    pub fn hide(&mut self) {
        if !self.state.is_interactive() {
            debug!(state = ?self.state, "hide ignored");
            return;
        }

        if let Some(mut live) = self.live.take() {
            if live.resolver.resolve(false) {
                self.emit(DialogEvent::Resolved {
                    kind: live.kind,
                    verdict: false,
                });
            }
        }

        self.state = DialogState::Closing;
        if self.options.close_transition.is_zero() {
            self.finish_closing();
        } else {
            self.deadline = Some(Instant::now() + self.options.close_transition);
        }
    }

    /// Complete a timed transition whose deadline has passed
    pub fn tick(&mut self, now: Instant) {
        let due = self.deadline.map_or(false, |deadline| deadline <= now);
        if !due {
            return;
        }

        match self.state {
            DialogState::Opening => self.finish_opening(),
            DialogState::Closing => self.finish_closing(),
            DialogState::Open | DialogState::Closed => self.deadline = None,
        }
    }

    /// Route host input to the dialog.
    ///
    /// Returns `true` when the dialog consumed the input, which is always the
    /// case while it is on screen.
    pub fn handle_input(&mut self, input: DialogInput) -> bool {
        if !self.state.is_interactive() {
            return false;
        }

        match input {
            DialogInput::Key(event) => self.handle_key(event),
            DialogInput::Click(ClickTarget::Overlay) => self.dismiss(),
            // Clicks on the body never reach the overlay
            DialogInput::Click(ClickTarget::Body) => {}
            DialogInput::Click(ClickTarget::Button(index)) => self.activate(index),
        }

        true
    }

    /// Tear down: resolve anything pending, hide, and detach from the host
    pub fn destroy(&mut self) {
        if let Some(mut live) = self.live.take() {
            if live.resolver.resolve(false) {
                self.emit(DialogEvent::Resolved {
                    kind: live.kind,
                    verdict: false,
                });
            }
        }

        if self.state != DialogState::Closed {
            self.finish_closing();
        }

        if self.attached {
            self.view.detach();
            self.attached = false;
            info!("Dialog view detached");
        }
    }

    fn handle_key(&mut self, event: KeyEvent) {
        if event.kind != KeyEventKind::Press {
            return;
        }

        let Some(action) = self.keymap.get_action(event) else {
            return;
        };

        match action.resolve(self.options.directionality) {
            DialogAction::Dismiss => self.dismiss(),
            DialogAction::FocusNext => {
                if let Some(index) = self.focus.next() {
                    self.view.focus_button(index);
                }
            }
            DialogAction::FocusPrevious => {
                if let Some(index) = self.focus.previous() {
                    self.view.focus_button(index);
                }
            }
            DialogAction::Activate => {
                if let Some(index) = self.focus.current() {
                    self.activate(index);
                }
            }
            DialogAction::FocusLeft | DialogAction::FocusRight => {}
        }
    }

    fn activate(&mut self, index: usize) {
        let Some(verdict) = self.content.as_ref().and_then(|c| c.verdict_at(index)) else {
            debug!(index, "activation of unknown button ignored");
            return;
        };

        self.resolve(verdict);
        self.hide();
    }

    /// Overlay click and Escape
    fn dismiss(&mut self) {
        self.resolve(false);
        self.hide();
    }

    fn resolve(&mut self, verdict: bool) {
        let Some(live) = self.live.as_mut() else {
            return;
        };

        if live.resolver.resolve(verdict) {
            debug!(kind = %live.kind, verdict, "Dialog resolved");
            let kind = live.kind;
            self.emit(DialogEvent::Resolved { kind, verdict });
        }
    }

    fn supersede(&mut self, mut previous: LiveRequest) {
        if previous.resolver.resolve(false) {
            debug!(kind = %previous.kind, "Dialog superseded by a newer request");
            self.emit(DialogEvent::Superseded(previous.kind));
        }
    }

    fn finish_opening(&mut self) {
        self.deadline = None;
        if self.focus.first().is_some() {
            self.view.focus_first();
        }
        self.state = DialogState::Open;
    }

    fn finish_closing(&mut self) {
        self.deadline = None;
        self.view.set_visible(false);
        self.view.set_modal(None);
        self.view.trap_focus(false);
        if let Some(target) = self.prior_focus.take() {
            self.view.restore_focus(&target);
        }
        self.view.lock_scroll(false);
        self.content = None;
        self.focus.reset(0);
        self.state = DialogState::Closed;
        self.emit(DialogEvent::Closed);
    }

    fn emit(&self, event: DialogEvent) {
        if let Some(sender) = &self.event_sender {
            let _ = sender.send(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::testing::{RecordingView, ViewCall};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::time::Duration;

    fn widget() -> DialogWidget<RecordingView> {
        DialogWidget::new(RecordingView::focused_on("day-list"), DialogOptions::default())
    }

    fn key(code: KeyCode) -> DialogInput {
        DialogInput::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn back_tab() -> DialogInput {
        DialogInput::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT))
    }

    #[tokio::test]
    async fn test_confirm_button_resolves_true() {
        let mut dialog = widget();
        let outcome = dialog.confirm("Delete?", "Remove");
        assert_eq!(dialog.state(), DialogState::Open);
        assert_eq!(dialog.focused_button(), Some(0));

        assert!(dialog.handle_input(DialogInput::Click(ClickTarget::Button(1))));
        assert_eq!(outcome.await, Ok(true));
        assert_eq!(dialog.state(), DialogState::Closed);
    }

    #[tokio::test]
    async fn test_cancel_button_restores_scroll() {
        let mut dialog = widget();
        let outcome = dialog.confirm("Delete?", ());
        assert!(dialog.view().scroll_locked);
        assert_eq!(dialog.content().map(|c| c.buttons[0].label.as_str()), Some("Cancel"));

        dialog.handle_input(DialogInput::Click(ClickTarget::Button(0)));
        assert_eq!(outcome.await, Ok(false));
        assert_eq!(dialog.state(), DialogState::Closed);
        assert!(!dialog.view().scroll_locked);
        assert!(!dialog.view().visible);
    }

    #[tokio::test]
    async fn test_every_dismissal_path_is_false() {
        let dismissals = [
            DialogInput::Click(ClickTarget::Overlay),
            key(KeyCode::Esc),
        ];

        for input in dismissals {
            let mut dialog = widget();
            let outcome = dialog.confirm("Delete?", "Remove");
            dialog.handle_input(input);
            assert_eq!(outcome.await, Ok(false), "{input:?}");
        }

        let mut dialog = widget();
        let outcome = dialog.confirm("Delete?", "Remove");
        dialog.hide();
        assert_eq!(outcome.await, Ok(false));
    }

    #[tokio::test]
    async fn test_keyboard_activation_follows_focus() {
        let mut dialog = widget();
        let outcome = dialog.confirm("Delete?", "Remove");
        dialog.handle_input(key(KeyCode::Tab));
        assert_eq!(dialog.view().focused, Some(1));
        dialog.handle_input(key(KeyCode::Enter));
        assert_eq!(outcome.await, Ok(true));

        let mut dialog = widget();
        let outcome = dialog.confirm("Delete?", "Remove");
        dialog.handle_input(key(KeyCode::Char(' ')));
        assert_eq!(outcome.await, Ok(false));
    }

    #[tokio::test]
    async fn test_alert_ok_and_escape() {
        let mut dialog = widget();
        let outcome = dialog.alert("Done", "Saved");
        dialog.handle_input(DialogInput::Click(ClickTarget::Button(0)));
        assert_eq!(outcome.await, Ok(true));

        let outcome = dialog.alert("Done", ());
        dialog.handle_input(key(KeyCode::Esc));
        assert_eq!(outcome.await, Ok(false));

        let outcome = dialog.alert("Done", ());
        dialog.handle_input(DialogInput::Click(ClickTarget::Overlay));
        assert_eq!(outcome.await, Ok(false));
    }

    #[tokio::test]
    async fn test_second_show_supersedes_first() {
        let (sender, mut events) = mpsc::unbounded_channel();
        let mut dialog = widget();
        dialog.set_event_sender(sender);

        let mut first = dialog.confirm("Delete?", "Remove");
        let second = dialog.confirm("Another?", "Remove");

        assert_eq!(first.try_verdict(), Some(Ok(false)));
        assert_eq!(dialog.live_kind(), Some(DialogKind::Confirm));
        assert_eq!(dialog.content().map(|c| c.message.as_str()), Some("Another?"));
        assert_eq!(dialog.view().rendered.as_ref().map(|c| c.message.as_str()), Some("Another?"));

        dialog.handle_input(DialogInput::Click(ClickTarget::Button(1)));
        assert_eq!(second.await, Ok(true));

        let mut seen = Vec::new();
        while let Ok(event) = events.try_recv() {
            seen.push(event);
        }
        assert_eq!(
            seen,
            vec![
                DialogEvent::Opened(DialogKind::Confirm),
                DialogEvent::Superseded(DialogKind::Confirm),
                DialogEvent::Opened(DialogKind::Confirm),
                DialogEvent::Resolved {
                    kind: DialogKind::Confirm,
                    verdict: true
                },
                DialogEvent::Closed,
            ]
        );
    }

    #[test]
    fn test_superseding_keeps_original_focus_target() {
        let mut dialog = widget();
        let _first = dialog.confirm("Delete?", ());
        dialog.view_mut().host_focus = Some(FocusTarget::from("dialog-button"));
        let _second = dialog.confirm("Another?", ());

        dialog.handle_input(key(KeyCode::Esc));
        assert_eq!(dialog.view().host_focus, Some(FocusTarget::from("day-list")));
    }

    #[test]
    fn test_escape_restores_prior_focus() {
        let mut dialog = widget();
        let _outcome = dialog.confirm("Delete?", ());
        dialog.view_mut().host_focus = None;

        dialog.handle_input(key(KeyCode::Esc));
        assert_eq!(dialog.view().host_focus, Some(FocusTarget::from("day-list")));
        assert!(dialog
            .view()
            .calls
            .contains(&ViewCall::RestoreFocus(FocusTarget::from("day-list"))));
    }

    #[test]
    fn test_tab_cycle_stays_inside_dialog() {
        let mut dialog = widget();
        let _outcome = dialog.confirm("Delete?", ());
        let count = dialog.content().map_or(0, |c| c.buttons.len());
        assert_eq!(count, 2);

        for _ in 0..count {
            dialog.handle_input(key(KeyCode::Tab));
        }
        assert_eq!(dialog.focused_button(), Some(0));

        dialog.handle_input(back_tab());
        assert_eq!(dialog.focused_button(), Some(1));
        dialog.handle_input(key(KeyCode::Tab));
        assert_eq!(dialog.focused_button(), Some(0));
        assert!(dialog.view().trapped);
    }

    #[test]
    fn test_arrow_keys_respect_direction() {
        let options = DialogOptions {
            directionality: Directionality::Rtl,
            ..DialogOptions::default()
        };
        let mut dialog = DialogWidget::new(RecordingView::default(), options);
        let _outcome = dialog.confirm("Delete?", ());

        dialog.handle_input(key(KeyCode::Left));
        assert_eq!(dialog.focused_button(), Some(1));
        dialog.handle_input(key(KeyCode::Right));
        assert_eq!(dialog.focused_button(), Some(0));
    }

    #[test]
    fn test_body_click_and_other_keys_are_swallowed() {
        let mut dialog = widget();
        let mut outcome = dialog.confirm("Delete?", ());

        assert!(dialog.handle_input(DialogInput::Click(ClickTarget::Body)));
        assert!(dialog.handle_input(key(KeyCode::Char('q'))));
        assert!(dialog.handle_input(DialogInput::Click(ClickTarget::Button(7))));
        assert_eq!(outcome.try_verdict(), None);
        assert_eq!(dialog.state(), DialogState::Open);
    }

    #[test]
    fn test_input_ignored_when_closed() {
        let mut dialog = widget();
        assert!(!dialog.handle_input(key(KeyCode::Esc)));
        assert!(!dialog.handle_input(DialogInput::Click(ClickTarget::Overlay)));
    }

    #[test]
    fn test_hide_when_closed_is_noop() {
        let mut dialog = widget();
        dialog.hide();
        assert_eq!(dialog.state(), DialogState::Closed);
        assert!(dialog.view().calls.is_empty());

        let mut outcome = dialog.alert("Done", ());
        dialog.handle_input(DialogInput::Click(ClickTarget::Button(0)));
        let calls = dialog.view().calls.len();
        dialog.hide();
        dialog.hide();
        assert_eq!(dialog.view().calls.len(), calls);
        assert_eq!(outcome.try_verdict(), Some(Ok(true)));
    }

    #[tokio::test]
    async fn test_attach_failure_rejects_outcome() {
        let mut view = RecordingView::default();
        view.fail_attach = true;
        let mut dialog = DialogWidget::new(view, DialogOptions::default());

        let outcome = dialog.confirm("Delete?", ());
        assert!(matches!(outcome.await, Err(DialogError::Initialization(_))));
        assert_eq!(dialog.state(), DialogState::Closed);
        assert!(!dialog.is_attached());

        // Host became ready: the next call attaches and works
        dialog.view_mut().fail_attach = false;
        let outcome = dialog.alert("Done", ());
        assert!(dialog.is_attached());
        dialog.handle_input(DialogInput::Click(ClickTarget::Button(0)));
        assert_eq!(outcome.await, Ok(true));
    }

    #[tokio::test]
    async fn test_render_failure_resolves_false_and_recovers() {
        let mut dialog = widget();
        let first = dialog.confirm("Delete?", ());
        dialog.view_mut().fail_render = true;

        let second = dialog.confirm("Another?", ());
        assert_eq!(first.await, Ok(false));
        assert_eq!(second.await, Ok(false));
        assert_eq!(dialog.state(), DialogState::Closed);
        assert!(!dialog.view().visible);
        assert!(!dialog.view().scroll_locked);
        assert_eq!(dialog.view().host_focus, Some(FocusTarget::from("day-list")));

        dialog.view_mut().fail_render = false;
        let third = dialog.confirm("Third?", ());
        dialog.handle_input(DialogInput::Click(ClickTarget::Button(1)));
        assert_eq!(third.await, Ok(true));
    }

    #[test]
    fn test_render_failure_when_closed_emits_no_close() {
        let (sender, mut events) = mpsc::unbounded_channel();
        let mut view = RecordingView::focused_on("day-list");
        view.fail_render = true;
        let mut dialog = DialogWidget::new(view, DialogOptions::default());
        dialog.set_event_sender(sender);

        let mut outcome = dialog.confirm("Delete?", ());
        assert_eq!(outcome.try_verdict(), Some(Ok(false)));
        assert_eq!(dialog.state(), DialogState::Closed);

        let mut seen = Vec::new();
        while let Ok(event) = events.try_recv() {
            seen.push(event);
        }
        assert_eq!(
            seen,
            vec![DialogEvent::Resolved {
                kind: DialogKind::Confirm,
                verdict: false
            }]
        );
        assert!(!dialog
            .view()
            .calls
            .iter()
            .any(|call| matches!(call, ViewCall::SetVisible(_) | ViewCall::RestoreFocus(_))));

        // The stale focus target must not leak into the next open
        dialog.view_mut().fail_render = false;
        dialog.view_mut().host_focus = Some(FocusTarget::from("entry-2"));
        let _outcome = dialog.confirm("Delete?", ());
        dialog.handle_input(key(KeyCode::Esc));
        assert_eq!(dialog.view().host_focus, Some(FocusTarget::from("entry-2")));
    }

    #[test]
    fn test_timed_transitions() {
        let options = DialogOptions {
            focus_delay: Duration::from_millis(100),
            close_transition: Duration::from_millis(200),
            ..DialogOptions::default()
        };
        let mut dialog = DialogWidget::new(RecordingView::focused_on("day-list"), options);

        let mut outcome = dialog.confirm("Delete?", ());
        assert_eq!(dialog.state(), DialogState::Opening);
        assert_eq!(dialog.view().focused, None);
        assert!(dialog.view().visible);

        dialog.tick(Instant::now() + Duration::from_millis(150));
        assert_eq!(dialog.state(), DialogState::Open);
        assert_eq!(dialog.view().focused, Some(0));

        dialog.handle_input(key(KeyCode::Esc));
        assert_eq!(outcome.try_verdict(), Some(Ok(false)));
        assert_eq!(dialog.state(), DialogState::Closing);
        assert!(dialog.view().visible);
        assert!(!dialog.handle_input(key(KeyCode::Esc)));

        dialog.tick(Instant::now() + Duration::from_millis(300));
        assert_eq!(dialog.state(), DialogState::Closed);
        assert!(!dialog.view().visible);
        assert_eq!(dialog.view().host_focus, Some(FocusTarget::from("day-list")));
    }

    #[test]
    fn test_escape_while_opening() {
        let options = DialogOptions {
            focus_delay: Duration::from_millis(100),
            ..DialogOptions::default()
        };
        let mut dialog = DialogWidget::new(RecordingView::default(), options);
        let mut outcome = dialog.alert("Done", ());

        dialog.handle_input(key(KeyCode::Esc));
        assert_eq!(outcome.try_verdict(), Some(Ok(false)));
        assert_eq!(dialog.state(), DialogState::Closed);
    }

    #[test]
    fn test_show_during_closing_reopens() {
        let options = DialogOptions {
            close_transition: Duration::from_millis(200),
            ..DialogOptions::default()
        };
        let mut dialog = DialogWidget::new(RecordingView::focused_on("day-list"), options);
        let _first = dialog.confirm("Delete?", ());
        dialog.handle_input(key(KeyCode::Esc));
        assert_eq!(dialog.state(), DialogState::Closing);

        let mut second = dialog.alert("Done", ());
        assert_eq!(dialog.state(), DialogState::Open);
        dialog.tick(Instant::now() + Duration::from_secs(1));
        assert_eq!(dialog.state(), DialogState::Open);

        dialog.handle_input(DialogInput::Click(ClickTarget::Button(0)));
        assert_eq!(second.try_verdict(), Some(Ok(true)));
        dialog.tick(Instant::now() + Duration::from_secs(1));
        assert_eq!(dialog.view().host_focus, Some(FocusTarget::from("day-list")));
    }

    #[test]
    fn test_modal_semantics_applied_and_cleared() {
        let mut dialog = widget();
        let _outcome = dialog.alert("Done", "Saved");
        let semantics = dialog.view().semantics.clone();
        assert_eq!(semantics.map(|s| s.role), Some("alertdialog"));

        dialog.hide();
        assert_eq!(dialog.view().semantics, None);
        assert!(!dialog.view().trapped);
    }

    #[tokio::test]
    async fn test_destroy_resolves_and_detaches() {
        let mut dialog = widget();
        let outcome = dialog.confirm("Delete?", ());
        dialog.destroy();

        assert_eq!(outcome.await, Ok(false));
        assert!(!dialog.is_attached());
        assert!(!dialog.view().attached);
        assert_eq!(dialog.state(), DialogState::Closed);

        dialog.destroy();
        assert_eq!(
            dialog.view().calls.iter().filter(|c| **c == ViewCall::Detach).count(),
            1
        );
    }

    #[tokio::test]
    async fn test_missing_text_uses_configured_labels() {
        let options = DialogOptions {
            labels: Labels::portuguese(),
            ..DialogOptions::default()
        };
        let mut dialog = DialogWidget::new(RecordingView::default(), options);
        let _outcome = dialog.confirm(None::<String>, "");

        let content = dialog.content().cloned();
        assert_eq!(content.as_ref().map(|c| c.title.as_str()), Some("Confirmação"));
        assert_eq!(content.as_ref().map(|c| c.message.as_str()), Some("Deseja continuar?"));
    }
}
