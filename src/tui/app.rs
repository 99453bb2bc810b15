//! Day-log screen hosting the dialog
//!
//! A single day's DONE list. Removing a set, clearing the list and deleting
//! the day all ask for confirmation first; a deleted day is acknowledged with
//! an alert.

use crate::dialog::{DialogInput, DialogRequest, DialogResult, DialogWidget, FocusTarget, Outcome};
use crate::tui::{events::Event, keys::KeyMap, themes::Theme, view::TerminalView, Frame};
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::time::Instant;
use tracing::{debug, info, warn};

/// One logged exercise
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: u64,
    pub exercise: String,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    Strength { sets: u32, reps: u32, weight_kg: Option<f32> },
    Cardio { minutes: u32, distance_km: Option<f32> },
}

impl LogEntry {
    pub fn summary(&self) -> String {
        match &self.kind {
            EntryKind::Strength { sets, reps, weight_kg } => match weight_kg {
                Some(weight) => format!("{} x {} - {}kg", sets, reps, weight),
                None => format!("{} x {}", sets, reps),
            },
            EntryKind::Cardio { minutes, distance_km } => match distance_km {
                Some(distance) => format!("{} min - {} km", minutes, distance),
                None => format!("{} min", minutes),
            },
        }
    }

    fn focus_target(&self) -> FocusTarget {
        FocusTarget::new(format!("entry-{}", self.id))
    }
}

/// The DONE list of one day
#[derive(Debug, Clone, PartialEq)]
pub struct DayLog {
    pub date: NaiveDate,
    pub entries: Vec<LogEntry>,
}

impl DayLog {
    /// A few entries so the screen has something to delete
    pub fn sample(date: NaiveDate) -> Self {
        let strength = |id, exercise: &str, sets, reps, weight_kg| LogEntry {
            id,
            exercise: exercise.to_string(),
            kind: EntryKind::Strength { sets, reps, weight_kg },
        };

        Self {
            date,
            entries: vec![
                strength(1, "Supino reto", 4, 10, Some(40.0)),
                strength(2, "Agachamento livre", 4, 8, Some(60.0)),
                strength(3, "Barra fixa", 3, 6, None),
                LogEntry {
                    id: 4,
                    exercise: "Esteira".to_string(),
                    kind: EntryKind::Cardio {
                        minutes: 20,
                        distance_km: Some(2.5),
                    },
                },
            ],
        }
    }
}

/// What to do once the pending dialog settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayAction {
    RemoveEntry(u64),
    ClearDone,
    DeleteDay,
    /// Nothing follows an acknowledgement
    Acknowledge,
}

struct PendingDialog {
    action: DayAction,
    outcome: Outcome,
}

/// Main application state and controller
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,

    pub key_map: KeyMap,

    pub theme: Theme,

    pub day: DayLog,

    pub selected: usize,

    /// Status message to display
    pub status_message: Option<String>,

    pub dialog: DialogWidget<TerminalView>,

    pending: Option<PendingDialog>,
}

impl App {
    pub fn new(dialog: DialogWidget<TerminalView>, day: DayLog) -> Self {
        let mut app = Self {
            should_quit: false,
            key_map: KeyMap::default(),
            theme: Theme::default(),
            day,
            selected: 0,
            status_message: None,
            dialog,
            pending: None,
        };
        app.sync_host_focus();
        app
    }

    /// Handle incoming events. Returns `true` when the app should exit.
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    return Ok(false);
                }

                if self.key_map.force_quit.matches(&key_event) {
                    self.should_quit = true;
                    return Ok(true);
                }

                // The dialog is modal: it sees keys before the list does
                if self.dialog.handle_input(DialogInput::Key(key_event)) {
                    return Ok(false);
                }

                if self.key_map.should_quit(&key_event) {
                    self.should_quit = true;
                    return Ok(true);
                }

                self.handle_list_key(key_event);
            }

            Event::Mouse(mouse_event) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
                    if let Some(target) = self
                        .dialog
                        .view()
                        .hit_test(mouse_event.column, mouse_event.row)
                    {
                        self.dialog.handle_input(DialogInput::Click(target));
                    }
                }
            }

            Event::Resize(width, height) => {
                self.dialog
                    .view_mut()
                    .set_area(Rect::new(0, 0, width, height));
            }

            Event::Tick => {
                self.dialog.tick(Instant::now());
                self.restore_selection_from_host();
            }
        }

        Ok(false)
    }

    fn handle_list_key(&mut self, key_event: crossterm::event::KeyEvent) {
        // The last result stays on the status line until the next key
        self.status_message = None;

        // Background stays put while a closing dialog still holds the lock
        let scroll_locked = self.dialog.view().is_scroll_locked();

        if self.key_map.up.matches(&key_event) && !scroll_locked {
            self.selected = self.selected.saturating_sub(1);
            self.sync_host_focus();
        } else if self.key_map.down.matches(&key_event) && !scroll_locked {
            if self.selected + 1 < self.day.entries.len() {
                self.selected += 1;
            }
            self.sync_host_focus();
        } else if self.key_map.remove_entry.matches(&key_event) {
            if let Some(entry) = self.day.entries.get(self.selected) {
                let action = DayAction::RemoveEntry(entry.id);
                let outcome = self.dialog.confirm("Remove this exercise?", ());
                self.await_dialog(action, outcome);
            }
        } else if self.key_map.clear_done.matches(&key_event) {
            let message = format!("Clear the DONE list for {}?", self.day.date);
            let outcome = self.dialog.confirm(message, ());
            self.await_dialog(DayAction::ClearDone, outcome);
        } else if self.key_map.delete_day.matches(&key_event) {
            let message = format!(
                "Are you sure you want to delete all data for {}?",
                self.day.date
            );
            let request = DialogRequest::confirm(message, "Delete day", &self.dialog.options().labels)
                .with_confirm_label("Delete");
            let outcome = self.dialog.show(request);
            self.await_dialog(DayAction::DeleteDay, outcome);
        }
    }

    /// Park `outcome` until it settles. A dialog opened over another one
    /// supersedes it, so the older action can only ever resolve `false`.
    fn await_dialog(&mut self, action: DayAction, outcome: Outcome) {
        if let Some(previous) = self.pending.replace(PendingDialog { action, outcome }) {
            debug!(action = ?previous.action, "Pending dialog replaced");
        }
    }

    /// Wait for the pending dialog, or forever when there is none
    pub async fn next_settled(&mut self) -> (DayAction, DialogResult<bool>) {
        if let Some(pending) = self.pending.as_mut() {
            let verdict = (&mut pending.outcome).await;
            let action = pending.action.clone();
            self.pending = None;
            return (action, verdict);
        }

        std::future::pending().await
    }

    pub fn has_pending_dialog(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply a settled dialog's action
    pub fn on_settled(&mut self, action: DayAction, verdict: DialogResult<bool>) {
        match verdict {
            Ok(true) => self.apply(action),
            Ok(false) => {
                debug!(?action, "Dialog dismissed");
                if action != DayAction::Acknowledge {
                    self.status_message = Some("Cancelled".to_string());
                }
            }
            Err(error) => {
                warn!("Dialog failed: {}", error);
                self.status_message = Some(format!("Dialog unavailable: {}", error));
            }
        }
    }

    fn apply(&mut self, action: DayAction) {
        match action {
            DayAction::RemoveEntry(id) => {
                self.day.entries.retain(|entry| entry.id != id);
                self.clamp_selection();
                self.status_message = Some("Exercise removed".to_string());
            }
            DayAction::ClearDone => {
                self.day.entries.clear();
                self.clamp_selection();
                self.status_message = Some("DONE list cleared".to_string());
            }
            DayAction::DeleteDay => {
                info!(date = %self.day.date, "Deleting day");
                self.day.entries.clear();
                self.clamp_selection();
                let message = format!("Day {} deleted successfully!", self.day.date);
                let outcome = self.dialog.alert(message, "Success");
                self.await_dialog(DayAction::Acknowledge, outcome);
            }
            DayAction::Acknowledge => {}
        }
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.day.entries.len().saturating_sub(1));
        self.sync_host_focus();
    }

    /// Tell the view which list row holds focus outside the dialog
    fn sync_host_focus(&mut self) {
        let target = self.day.entries.get(self.selected).map(LogEntry::focus_target);
        self.dialog.view_mut().set_host_focus(target);
    }

    /// Follow focus handed back by a closed dialog
    fn restore_selection_from_host(&mut self) {
        if self.dialog.is_visible() {
            return;
        }
        let Some(target) = self.dialog.view().host_focus().cloned() else {
            return;
        };
        if let Some(index) = self
            .day
            .entries
            .iter()
            .position(|entry| entry.focus_target() == target)
        {
            self.selected = index;
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "FEITO ",
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(self.day.date.to_string(), self.theme.muted()),
        ]))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border)));
        frame.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = self
            .day
            .entries
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<24}", entry.exercise), self.theme.text()),
                    Span::styled(entry.summary(), Style::default().fg(self.theme.accent)),
                ]))
            })
            .collect();

        let list = if items.is_empty() {
            List::new(vec![ListItem::new(Span::styled(
                "Nothing logged for this day",
                self.theme.muted(),
            ))])
        } else {
            List::new(items).highlight_style(self.theme.selected_row())
        };

        let mut state = ListState::default();
        if !self.day.entries.is_empty() {
            state.select(Some(self.selected));
        }
        frame.render_stateful_widget(
            list.block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border))),
            chunks[1],
            &mut state,
        );

        let status = self
            .status_message
            .clone()
            .unwrap_or_else(|| self.key_map.help_text());
        frame.render_widget(Paragraph::new(status).style(self.theme.muted()), chunks[2]);

        self.dialog.view().draw(frame, &self.theme);
    }

    /// Tear the dialog down when the screen goes away
    pub fn shutdown(&mut self) {
        self.dialog.destroy();
        debug!("Day-log screen closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::{ClickTarget, DialogOptions, DialogState};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

    fn app() -> App {
        let view = TerminalView::new(Rect::new(0, 0, 80, 24));
        let dialog = DialogWidget::new(view, DialogOptions::default());
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        App::new(dialog, DayLog::sample(date))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
            .unwrap();
    }

    fn click(app: &mut App, target: ClickTarget) {
        let layout = app.dialog.view().layout().cloned().unwrap();
        let (column, row) = match target {
            ClickTarget::Button(index) => (layout.buttons[index].x + 1, layout.buttons[index].y + 1),
            ClickTarget::Body => (layout.body.x + 1, layout.body.y + 1),
            ClickTarget::Overlay => (0, 0),
        };
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
        .unwrap();
    }

    async fn settle(app: &mut App) {
        let (action, verdict) = app.next_settled().await;
        app.on_settled(action, verdict);
    }

    #[tokio::test]
    async fn test_remove_entry_after_confirm() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        assert!(app.dialog.is_visible());

        click(&mut app, ClickTarget::Button(1));
        settle(&mut app).await;

        let names: Vec<_> = app.day.entries.iter().map(|e| e.exercise.as_str()).collect();
        assert_eq!(names, vec!["Supino reto", "Barra fixa", "Esteira"]);
        assert_eq!(app.dialog.state(), DialogState::Closed);
    }

    #[tokio::test]
    async fn test_cancel_keeps_entries_and_unlocks_scroll() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        assert!(app.dialog.view().is_scroll_locked());

        // Arrow keys move dialog focus, not the list
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 0);

        click(&mut app, ClickTarget::Button(0));
        settle(&mut app).await;

        assert_eq!(app.day.entries.len(), 4);
        assert!(!app.dialog.view().is_scroll_locked());
        assert_eq!(app.status_message.as_deref(), Some("Cancelled"));

        // Ticks keep the message; the next list key brings the key help back
        app.handle_event(Event::Tick).unwrap();
        assert_eq!(app.status_message.as_deref(), Some("Cancelled"));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.status_message, None);
        assert_eq!(app.selected, 1);
    }

    #[tokio::test]
    async fn test_delete_day_then_alert() {
        let mut app = app();
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(
            app.dialog.content().map(|c| c.title.as_str()),
            Some("Delete day")
        );
        assert_eq!(
            app.dialog.content().map(|c| c.buttons[1].label.as_str()),
            Some("Delete")
        );

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        assert!(app.day.entries.is_empty());
        assert!(app.has_pending_dialog());
        assert_eq!(
            app.dialog.content().map(|c| c.message.as_str()),
            Some("Day 2026-10-19 deleted successfully!")
        );

        press(&mut app, KeyCode::Esc);
        settle(&mut app).await;
        assert!(!app.has_pending_dialog());
        assert_eq!(app.dialog.state(), DialogState::Closed);
    }

    #[tokio::test]
    async fn test_overlay_click_dismisses_and_body_click_does_not() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));

        click(&mut app, ClickTarget::Body);
        assert!(app.dialog.is_visible());

        click(&mut app, ClickTarget::Overlay);
        settle(&mut app).await;
        assert_eq!(app.day.entries.len(), 4);
    }

    #[tokio::test]
    async fn test_focus_returns_to_selected_row() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));

        press(&mut app, KeyCode::Esc);
        settle(&mut app).await;
        app.handle_event(Event::Tick).unwrap();

        assert_eq!(app.selected, 2);
        assert_eq!(
            app.dialog.view().host_focus(),
            Some(&FocusTarget::new("entry-3"))
        );
    }

    #[test]
    fn test_quit_is_swallowed_while_dialog_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        assert!(!app
            .handle_event(Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)))
            .unwrap());

        press(&mut app, KeyCode::Esc);
        assert!(app
            .handle_event(Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)))
            .unwrap());
    }

    #[test]
    fn test_entry_summaries() {
        let day = DayLog::sample(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        let summaries: Vec<_> = day.entries.iter().map(LogEntry::summary).collect();
        assert_eq!(summaries, vec!["4 x 10 - 40kg", "4 x 8 - 60kg", "3 x 6", "20 min - 2.5 km"]);
    }
}
