//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::ButtonTone;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Returns where the keypad is drawn for a given terminal area, for mouse
/// hit-testing
#[must_use]
pub fn keypad_area(area: Rect, show_help: bool) -> Rect {
    Regions::new(area, show_help).keypad
}

/// Screen regions
#[derive(Debug, Clone, Copy)]
struct Regions {
    display: Rect,
    keypad: Rect,
    status: Rect,
    tape: Rect,
    help: Rect,
}

impl Regions {
    fn new(area: Rect, show_help: bool) -> Self {
        let help_height = if show_help { HELP_SHORTCUTS.len() as u16 + 2 } else { 0 };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),           // Display
                Constraint::Min(7),              // Keypad + tape
                Constraint::Length(help_height), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(KEYPAD_WIDTH), Constraint::Min(20)])
            .split(rows[1]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(body[1]);

        Self {
            display: rows[0],
            keypad: body[0],
            status: side[0],
            tape: side[1],
            help: rows[2],
        }
    }
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.display(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.status(),
            Style::default().fg(KeypadWidget::tone_color(ButtonTone::Accent)),
        ))
        .block(
            Block::default()
                .title(" Pending ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(area, buf);
    }

    fn render_tape(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .app
            .session()
            .history()
            .iter_rev()
            .take(area.height.saturating_sub(2) as usize)
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.expression.as_str(), Style::default().fg(Color::Gray)),
                    Span::raw(" = "),
                    Span::styled(entry.result.as_str(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Tape (newest first) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>14}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
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

        let regions = Regions::new(area, self.app.show_help());
        self.render_display(regions.display, buf);
        KeypadWidget::new()
            .highlight(self.app.highlighted())
            .render(regions.keypad, buf);
        self.render_status(regions.status, buf);
        self.render_tape(regions.tape, buf);
        if self.app.show_help() {
            self.render_help(regions.help, buf);
        }
    }
}

/// Title shown on the outer border
pub const TITLE: &str = " Keypad Calculator ";

/// Keypad column width: four 6-wide cells plus the border
pub const KEYPAD_WIDTH: u16 = 26;

/// Key bindings shown in the help panel
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Digits, decimal"),
    ("+ - * x /", "Operators"),
    ("%", "Percent"),
    ("n", "Sign toggle"),
    ("Enter =", "Equals"),
    ("Esc Bksp Del c", "Clear"),
    ("q Ctrl+C", "Quit"),
    ("?", "Toggle help"),
];
