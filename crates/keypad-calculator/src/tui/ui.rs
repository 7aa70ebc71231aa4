//! TUI rendering
//!
//! Visual feedback makes state visible

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use crate::core::Command;
use crate::keypad::Keypad;

/// Window title
pub const TITLE: &str = " Calculator ";

/// Key help shown under the keypad
pub const HELP_LINE: &str = "Enter = | Esc AC | Bksp DEL | q quit";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    let ui = CalculatorUI::new(app, Instant::now());
    frame.render_widget(ui, area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
    now: Instant,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a UI widget rendering `app` as of `now`
    #[must_use]
    pub fn new(app: &'a CalculatorApp, now: Instant) -> Self {
        Self { app, now }
    }

    /// Splits the inner area into display, keypad and help rows
    fn create_layout(&self, area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(4), // Display
                Constraint::Min(7),    // Keypad
                Constraint::Length(1), // Help
            ])
            .split(area)
            .to_vec()
    }

    /// Renders the two display lines, right-aligned
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let engine = self.app.engine();
        let current_style = if engine.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(
                engine.previous_display().to_string(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                engine.current_display().to_string(),
                current_style,
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP_LINE, Style::default().fg(Color::Gray)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let chunks = self.create_layout(area);
        if chunks.len() < 3 {
            return;
        }

        self.render_display(chunks[0], buf);
        KeypadWidget::new(self.app.keypad(), self.app.highlighted(self.now)).render(chunks[1], buf);
        self.render_help(chunks[2], buf);
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    highlighted: Option<Command>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad, highlighted: Option<Command>) -> Self {
        Self {
            keypad,
            highlighted,
        }
    }

    fn button_style(&self, command: Command) -> Style {
        if self.highlighted == Some(command) {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match command {
            Command::Digit(_) => Style::default().fg(Color::White),
            Command::Operation(_) => Style::default().fg(Color::Yellow),
            Command::Equals => Style::default().fg(Color::Green),
            Command::Clear | Command::Delete => Style::default().fg(Color::Red),
            Command::Percent => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 * 5 || inner.height < rows as u16 {
            return; // Too small to render
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for btn in self.keypad.buttons() {
            let x = inner.x + btn.col as u16 * btn_width;
            let y = inner.y + btn.row as u16 * btn_height + btn_height / 2;

            let label = format!("[{:^3}]", btn.label());
            let label_width = label.chars().count() as u16;
            let label_x = x + btn_width.saturating_sub(label_width) / 2;

            buf.set_span(
                label_x,
                y,
                &Span::styled(label, self.button_style(btn.command)),
                btn_width,
            );
        }
    }
}
