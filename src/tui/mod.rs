//! Terminal host for the dialog using ratatui

pub mod app;
pub mod events;
pub mod keys;
pub mod themes;
pub mod view;

pub use app::{App, DayLog};
pub use events::{Event, EventHandler};
pub use view::TerminalView;

use crate::config::Config;
use crate::dialog::{DialogInput, DialogKind, DialogRequest, DialogText, DialogWidget};
use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, KeyEventKind, MouseButton, MouseEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io;
use std::time::Instant;
use tracing::info;

pub type Backend = CrosstermBackend<io::Stdout>;
pub type Frame<'a> = ratatui::Frame<'a>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
pub fn restore_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn dialog_for(terminal: &Terminal<Backend>, config: &Config) -> Result<DialogWidget<TerminalView>> {
    let area: Rect = terminal.size()?;
    let mut dialog = DialogWidget::new(TerminalView::new(area), config.dialog_options());
    let hint = dialog.keymap().help_text();
    dialog.view_mut().set_hint(hint);
    Ok(dialog)
}

/// Run the day-log screen until the user quits
pub async fn run_demo(config: &Config) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = match dialog_for(&terminal, config) {
        Ok(dialog) => {
            let today = chrono::Local::now().date_naive();
            let mut app = App::new(dialog, DayLog::sample(today));
            let mut event_handler = EventHandler::new();
            let result = run_app(&mut terminal, &mut app, &mut event_handler).await;
            app.shutdown();
            result
        }
        Err(e) => Err(e),
    };

    restore_terminal(&mut terminal)?;
    result
}

enum Step {
    Settled(app::DayAction, crate::dialog::DialogResult<bool>),
    Input(Event),
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    event_handler: &mut EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Settled outcomes first, so a verdict never waits behind a blocking read
        let step = tokio::select! {
            biased;
            (action, verdict) = app.next_settled() => Step::Settled(action, verdict),
            event = event_handler.next() => Step::Input(event?),
        };

        match step {
            Step::Settled(action, verdict) => app.on_settled(action, verdict),
            Step::Input(event) => {
                if app.handle_event(event)? {
                    break; // Exit requested
                }
            }
        }
    }

    info!("Day-log screen finished");
    Ok(())
}

/// Show one dialog full-screen and return its verdict
pub async fn run_prompt(
    config: &Config,
    kind: DialogKind,
    message: impl Into<DialogText>,
    title: impl Into<DialogText>,
) -> Result<bool> {
    let labels = config.labels();
    let request = match kind {
        DialogKind::Confirm => DialogRequest::confirm(message, title, &labels),
        DialogKind::Alert => DialogRequest::alert(message, title, &labels),
    };

    let mut terminal = init_terminal()?;
    let result = prompt_loop(&mut terminal, config, request).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn prompt_loop(
    terminal: &mut Terminal<Backend>,
    config: &Config,
    request: DialogRequest,
) -> Result<bool> {
    let mut dialog = dialog_for(terminal, config)?;
    let theme = themes::Theme::default();
    let mut event_handler = EventHandler::new();
    let mut outcome = dialog.show(request);

    loop {
        if let Some(verdict) = outcome.try_verdict() {
            dialog.destroy();
            return Ok(verdict?);
        }

        terminal.draw(|frame| dialog.view().draw(frame, &theme))?;

        match event_handler.next().await? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                dialog.handle_input(DialogInput::Key(key_event));
            }
            Event::Mouse(mouse_event) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
                    if let Some(target) = dialog.view().hit_test(mouse_event.column, mouse_event.row) {
                        dialog.handle_input(DialogInput::Click(target));
                    }
                }
            }
            Event::Resize(width, height) => {
                dialog.view_mut().set_area(Rect::new(0, 0, width, height));
            }
            Event::Key(_) | Event::Tick => dialog.tick(Instant::now()),
        }
    }
}
