//! Terminal rendition of the dialog
//!
//! [`TerminalView`] implements [`DialogView`] on top of ratatui. It keeps the
//! layout it last computed so the host can hit-test mouse clicks against the
//! same rectangles it draws.

use crate::dialog::{
    ClickTarget, DialogContent, DialogView, Directionality, FocusTarget, ModalSemantics, ViewError,
};
use crate::tui::{themes::Theme, Frame};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Smallest area a dialog can be drawn in
pub const MIN_WIDTH: u16 = 24;
pub const MIN_HEIGHT: u16 = 8;

/// Widest a dialog body grows before the message wraps
const PREFERRED_MAX_WIDTH: u16 = 60;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 2;
/// Border plus one column of padding on each side
const HORIZONTAL_CHROME: u16 = 4;
/// Borders, blank line above the buttons, hint line
const VERTICAL_CHROME: u16 = 4;

fn text_width(text: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(text)).unwrap_or(u16::MAX)
}

/// Computed positions of the dialog's parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLayout {
    /// Full available area, covered by the overlay
    pub overlay: Rect,
    /// Dialog body including its border
    pub body: Rect,
    pub message: Rect,
    pub message_lines: Vec<String>,
    /// One rect per button, indexed in reading order
    pub buttons: Vec<Rect>,
    pub hint: Rect,
}

impl DialogLayout {
    pub fn calculate(content: &DialogContent, area: Rect) -> Self {
        let mut button_widths: Vec<u16> = content
            .buttons
            .iter()
            .map(|button| text_width(&button.label).saturating_add(4))
            .collect();
        let gaps = BUTTON_GAP * (button_widths.len().saturating_sub(1) as u16);
        let mut row_width = button_widths.iter().copied().fold(gaps, u16::saturating_add);

        let message_width = content
            .message
            .lines()
            .map(text_width)
            .max()
            .unwrap_or(0);

        let preferred = [
            MIN_WIDTH,
            row_width.saturating_add(HORIZONTAL_CHROME),
            text_width(&content.title).saturating_add(HORIZONTAL_CHROME),
            message_width
                .saturating_add(HORIZONTAL_CHROME)
                .min(PREFERRED_MAX_WIDTH),
        ]
        .into_iter()
        .max()
        .unwrap_or(MIN_WIDTH);
        let width = preferred.min(area.width);
        let inner_width = width.saturating_sub(HORIZONTAL_CHROME).max(1);

        // Buttons share the row evenly when their labels do not fit
        if row_width > inner_width && !button_widths.is_empty() {
            let share = (inner_width.saturating_sub(gaps) / button_widths.len() as u16).max(1);
            button_widths.iter_mut().for_each(|width| *width = share);
            row_width = share * button_widths.len() as u16 + gaps;
        }

        let max_lines = area
            .height
            .saturating_sub(VERTICAL_CHROME + BUTTON_HEIGHT)
            .max(1) as usize;
        let mut message_lines: Vec<String> = textwrap::wrap(&content.message, inner_width as usize)
            .into_iter()
            .map(|line| line.into_owned())
            .collect();
        if message_lines.len() > max_lines {
            message_lines.truncate(max_lines);
            if let Some(last) = message_lines.last_mut() {
                last.push('…');
            }
        }

        let line_count = message_lines.len().max(1) as u16;
        let height = (line_count + VERTICAL_CHROME + BUTTON_HEIGHT).min(area.height);

        let body = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };

        let message = Rect {
            x: body.x + 2,
            y: body.y + 1,
            width: inner_width,
            height: line_count,
        };

        let row_y = message.y + line_count + 1;
        let row_x = body.x + 2 + inner_width.saturating_sub(row_width) / 2;

        // Lay the row out from the start edge of the text direction
        let mut order: Vec<usize> = (0..button_widths.len()).collect();
        if content.directionality == Directionality::Rtl {
            order.reverse();
        }

        let mut buttons = vec![Rect::default(); button_widths.len()];
        let mut x = row_x;
        for index in order {
            buttons[index] = Rect {
                x,
                y: row_y,
                width: button_widths[index],
                height: BUTTON_HEIGHT,
            };
            x = x.saturating_add(button_widths[index] + BUTTON_GAP);
        }

        let hint = Rect {
            x: body.x + 1,
            y: row_y + BUTTON_HEIGHT,
            width: body.width.saturating_sub(2),
            height: 1,
        };

        Self {
            overlay: area,
            body,
            message,
            message_lines,
            buttons,
            hint,
        }
    }

    /// Resolve a terminal cell to the part of the dialog it belongs to
    pub fn hit_test(&self, column: u16, row: u16) -> ClickTarget {
        let contains = |rect: &Rect| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        };

        if let Some(index) = self.buttons.iter().position(contains) {
            return ClickTarget::Button(index);
        }

        if contains(&self.body) {
            ClickTarget::Body
        } else {
            ClickTarget::Overlay
        }
    }
}

/// ratatui-backed dialog view
#[derive(Debug, Default)]
pub struct TerminalView {
    area: Rect,
    attached: bool,
    visible: bool,
    content: Option<DialogContent>,
    layout: Option<DialogLayout>,
    semantics: Option<ModalSemantics>,
    focused_button: Option<usize>,
    trapped: bool,
    scroll_locked: bool,
    host_focus: Option<FocusTarget>,
    hint: &'static str,
}

impl TerminalView {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            ..Self::default()
        }
    }

    /// Footer hint drawn under the buttons
    pub fn set_hint(&mut self, hint: &'static str) {
        self.hint = hint;
    }

    /// Track the terminal size, re-laying out visible content
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
        if let Some(content) = &self.content {
            self.layout = Some(DialogLayout::calculate(content, area));
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn focused_button(&self) -> Option<usize> {
        self.focused_button
    }

    pub fn layout(&self) -> Option<&DialogLayout> {
        self.layout.as_ref()
    }

    pub fn semantics(&self) -> Option<&ModalSemantics> {
        self.semantics.as_ref()
    }

    /// The host element that holds focus while no dialog does
    pub fn host_focus(&self) -> Option<&FocusTarget> {
        self.host_focus.as_ref()
    }

    pub fn set_host_focus(&mut self, target: Option<FocusTarget>) {
        self.host_focus = target;
    }

    /// Hit-test a click; `None` while nothing is on screen
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ClickTarget> {
        if !self.visible {
            return None;
        }
        self.layout.as_ref().map(|layout| layout.hit_test(column, row))
    }

    pub fn draw(&self, frame: &mut Frame, theme: &Theme) {
        let (Some(content), Some(layout)) = (&self.content, &self.layout) else {
            return;
        };
        if !self.visible {
            return;
        }
        // Too small to show anything useful; drawn again once the terminal grows
        if layout.overlay.width < MIN_WIDTH || layout.overlay.height < MIN_HEIGHT {
            return;
        }

        // Keep the background's glyphs, dim their colors
        frame.render_widget(Block::default().style(theme.overlay()), layout.overlay);
        frame.render_widget(Clear, layout.body);

        let title_color = match self.semantics.as_ref().map(|s| s.role) {
            Some("alertdialog") => theme.warning,
            _ => theme.primary,
        };
        let border_color = if self.trapped {
            theme.border_focus
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.bg_base))
            .title(Line::styled(
                format!(" {} ", content.title),
                Style::default().fg(title_color).add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(block, layout.body);

        let message: Vec<Line> = layout
            .message_lines
            .iter()
            .map(|line| Line::from(line.as_str()))
            .collect();
        let message_area = layout.message.intersection(layout.body);
        if message_area.area() > 0 {
            frame.render_widget(
                Paragraph::new(message)
                    .style(theme.text().bg(theme.bg_base))
                    .alignment(Alignment::Center),
                message_area,
            );
        }

        for (index, (button, rect)) in content.buttons.iter().zip(&layout.buttons).enumerate() {
            let button_area = rect.intersection(layout.body);
            if button_area.area() == 0 {
                continue;
            }
            let focused = self.focused_button == Some(index);
            let widget = Paragraph::new(button.label.as_str())
                .style(theme.button(focused))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(widget, button_area);
        }

        let hint_area = layout.hint.intersection(layout.body);
        if !self.hint.is_empty() && hint_area.area() > 0 {
            frame.render_widget(
                Paragraph::new(self.hint)
                    .style(theme.muted().bg(theme.bg_base).add_modifier(Modifier::DIM))
                    .alignment(Alignment::Center),
                hint_area,
            );
        }
    }
}

impl DialogView for TerminalView {
    fn attach(&mut self) -> Result<(), ViewError> {
        if self.area.width < MIN_WIDTH || self.area.height < MIN_HEIGHT {
            return Err(ViewError::TooSmall {
                width: self.area.width,
                height: self.area.height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }
        self.attached = true;
        Ok(())
    }

    fn detach(&mut self) {
        self.attached = false;
        self.visible = false;
        self.content = None;
        self.layout = None;
        self.semantics = None;
        self.focused_button = None;
    }

    fn render(&mut self, content: &DialogContent) -> Result<(), ViewError> {
        if !self.attached {
            return Err(ViewError::Unavailable("terminal view is detached".to_string()));
        }
        if self.area.width < MIN_WIDTH || self.area.height < MIN_HEIGHT {
            return Err(ViewError::Render(format!(
                "terminal shrank to {}x{}",
                self.area.width, self.area.height
            )));
        }

        self.layout = Some(DialogLayout::calculate(content, self.area));
        self.content = Some(content.clone());
        self.focused_button = None;
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.focused_button = None;
        }
    }

    fn set_modal(&mut self, semantics: Option<&ModalSemantics>) {
        self.semantics = semantics.cloned();
    }

    fn focus_button(&mut self, index: usize) {
        self.focused_button = Some(index);
    }

    fn trap_focus(&mut self, enabled: bool) {
        self.trapped = enabled;
    }

    fn lock_scroll(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn active_element(&self) -> Option<FocusTarget> {
        self.host_focus.clone()
    }

    fn restore_focus(&mut self, target: &FocusTarget) {
        self.host_focus = Some(target.clone());
    }
}
