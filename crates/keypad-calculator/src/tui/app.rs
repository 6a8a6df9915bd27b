//! TUI application state

use tracing::debug;

use super::input::KeyAction;
use crate::config::CalculatorConfig;
use crate::core::session::Session;
use crate::core::Button;

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// Evaluator and tape
    session: Session,
    /// Last button pressed, drawn highlighted
    highlighted: Option<Button>,
    /// Whether the help panel is visible
    show_help: bool,
    /// Whether the app should quit
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator app from a config
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            session: Session::new(config),
            ..Self::default()
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.session.display()
    }

    /// Returns the session
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the highlighted button
    #[must_use]
    pub fn highlighted(&self) -> Option<Button> {
        self.highlighted
    }

    /// Returns whether the help panel is visible
    #[must_use]
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Shows or hides the help panel
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Taps a button
    pub fn press(&mut self, button: Button) {
        self.highlighted = Some(button);
        self.session.press(button);
    }

    /// Resets the session and highlight
    pub fn reset(&mut self) {
        self.session.reset();
        self.highlighted = None;
    }

    /// Applies an input action
    pub fn handle_action(&mut self, action: KeyAction) {
        debug!(?action, "input action");
        match action {
            KeyAction::Press(button) => self.press(button),
            KeyAction::ToggleHelp => self.toggle_help(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Describes the pending operation, e.g. `5 +`
    #[must_use]
    pub fn status(&self) -> String {
        let evaluator = self.session.evaluator();
        let pending = evaluator.pending();
        if pending.is_some() {
            format!(
                "{} {}",
                crate::core::display::format_value(evaluator.stored()),
                pending.symbol()
            )
        } else {
            "Ready".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluator::ClearMode;
    use crate::core::PendingOperation;

    fn press_all(app: &mut CalculatorApp, buttons: &[Button]) {
        for button in buttons {
            app.handle_action(KeyAction::Press(*button));
        }
    }

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.display(), "0");
        assert!(app.highlighted().is_none());
        assert!(!app.show_help());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_app_with_config() {
        let config = CalculatorConfig::new().with_clear_mode(ClearMode::All);
        let mut app = CalculatorApp::with_config(&config);
        press_all(&mut app, &[Button::Five, Button::Add, Button::Clear]);
        assert_eq!(app.session().evaluator().pending(), PendingOperation::None);
    }

    #[test]
    fn test_press_updates_display_and_highlight() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, &[Button::Five, Button::Add, Button::Three, Button::Equal]);
        assert_eq!(app.display(), "8");
        assert_eq!(app.highlighted(), Some(Button::Equal));
        assert_eq!(app.session().history().len(), 1);
    }

    #[test]
    fn test_handle_quit() {
        let mut app = CalculatorApp::new();
        app.handle_action(KeyAction::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_handle_toggle_help() {
        let mut app = CalculatorApp::new();
        app.handle_action(KeyAction::ToggleHelp);
        assert!(app.show_help());
        app.handle_action(KeyAction::ToggleHelp);
        assert!(!app.show_help());
    }

    #[test]
    fn test_handle_none() {
        let mut app = CalculatorApp::new();
        app.handle_action(KeyAction::None);
        assert_eq!(app.display(), "0");
        assert!(app.highlighted().is_none());
    }

    #[test]
    fn test_reset() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, &[Button::Two, Button::Multiply, Button::Two, Button::Equal]);
        app.reset();
        assert_eq!(app.display(), "0");
        assert!(app.highlighted().is_none());
        assert!(app.session().history().is_empty());
    }

    #[test]
    fn test_status() {
        let mut app = CalculatorApp::new();
        assert_eq!(app.status(), "Ready");
        press_all(&mut app, &[Button::One, Button::Two, Button::Divide]);
        assert_eq!(app.status(), "12 ÷");
    }
}
