//! Keyboard and mouse input mapping

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::keypad::KeypadWidget;
use crate::core::Button;

/// Actions that can be triggered by terminal input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Tap a keypad button
    Press(Button),
    /// Show or hide the help panel
    ToggleHelp,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('?') => KeyAction::ToggleHelp,
            KeyCode::Char('n') => KeyAction::Press(Button::Negative),
            KeyCode::Char(c) => Self::button_for_char(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(Button::Equal),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Delete => KeyAction::Press(Button::Clear),
            _ => KeyAction::None,
        }
    }

    /// Maps a left click inside the keypad area to a button press
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent, keypad_area: Rect) -> KeyAction {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return KeyAction::None;
        }
        KeypadWidget::hit_test(keypad_area, event.column, event.row)
            .map_or(KeyAction::None, KeyAction::Press)
    }

    /// Returns the button a typed character stands for
    #[must_use]
    pub fn button_for_char(c: char) -> Option<Button> {
        match c {
            '0'..='9' => c
                .to_digit(10)
                .and_then(|d| Button::from_digit(d as u8)),
            '=' => Some(Button::Equal),
            'c' | 'C' => Some(Button::Clear),
            '+' | '-' | '*' | 'x' | 'X' | '/' | '.' | '%' => {
                let mut buf = [0u8; 4];
                c.encode_utf8(&mut buf).parse().ok()
            }
            _ => None,
        }
    }
}
