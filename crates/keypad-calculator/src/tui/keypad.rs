//! Keypad widget
//!
//! Draws the five keypad rows with each button painted in its tone; the
//! most recently pressed button is highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::core::{Button, ButtonTone};
use crate::layout::KeypadLayout;

/// Keypad widget for rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct KeypadWidget {
    layout: KeypadLayout,
    highlighted: Option<Button>,
}

impl KeypadWidget {
    /// Creates a keypad widget with nothing highlighted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlights a button
    #[must_use]
    pub fn highlight(mut self, button: Option<Button>) -> Self {
        self.highlighted = button;
        self
    }

    /// Returns the terminal colour for a tone
    #[must_use]
    pub fn tone_color(tone: ButtonTone) -> Color {
        let (r, g, b) = tone.rgb();
        Color::Rgb(r, g, b)
    }

    /// Returns the area inside the border
    fn inner(area: Rect) -> Rect {
        Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        }
    }

    /// Returns (cell width, cell height) for an inner area, if any cell fits
    fn cell_size(inner: Rect, layout: &KeypadLayout) -> Option<(u16, u16)> {
        let cell_w = inner.width / KeypadLayout::COLUMNS as u16;
        let cell_h = inner.height / layout.row_count() as u16;
        (cell_w > 0 && cell_h > 0).then_some((cell_w, cell_h))
    }

    /// Converts a click position to the button under it
    #[must_use]
    pub fn hit_test(area: Rect, x: u16, y: u16) -> Option<Button> {
        let inner = Self::inner(area);
        if x < inner.x || y < inner.y || x >= inner.x + inner.width || y >= inner.y + inner.height
        {
            return None;
        }

        let layout = KeypadLayout::new();
        let (cell_w, cell_h) = Self::cell_size(inner, &layout)?;
        let col = ((x - inner.x) / cell_w) as usize;
        let row = ((y - inner.y) / cell_h) as usize;
        layout.button_at(row, col)
    }

    fn style_for(&self, button: Button) -> Style {
        if self.highlighted == Some(button) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .bg(Self::tone_color(button.tone()))
        }
    }
}

impl Widget for KeypadWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        let inner = Self::inner(area);
        let Some((cell_w, cell_h)) = Self::cell_size(inner, &self.layout) else {
            return; // Too small to render
        };

        for (row, col, span, button) in self.layout.cells() {
            let x = inner.x + col as u16 * cell_w;
            let y = inner.y + row as u16 * cell_h;
            // Leave a one-column gap on the right of each button
            let width = (span as u16 * cell_w).saturating_sub(1).max(1);
            let cell = Rect::new(x, y, width, cell_h);
            let style = self.style_for(button);
            buf.set_style(cell, style);

            let label = button.label();
            let label_w = label.chars().count() as u16;
            let label_x = x + width.saturating_sub(label_w) / 2;
            let label_y = y + cell_h / 2;
            buf.set_stringn(label_x, label_y, label, width as usize, style);
        }
    }
}
