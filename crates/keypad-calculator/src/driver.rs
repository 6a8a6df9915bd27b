//! Unified calculator driver
//!
//! Behaviour checks are written once against [`CalculatorDriver`] and run
//! against every front-end: the headless session and the TUI app.

use crate::config::CalculatorConfig;
use crate::core::session::Session;
use crate::core::Button;

/// Abstract driver for button-level interaction
///
/// # Example
///
/// ```rust
/// use keypad_calculator::core::Button;
/// use keypad_calculator::driver::{CalculatorDriver, HeadlessDriver};
///
/// let mut driver = HeadlessDriver::new();
/// driver.press(Button::Five);
/// driver.press(Button::Add);
/// driver.press(Button::Three);
/// assert_eq!(driver.press(Button::Equal), "8");
/// ```
pub trait CalculatorDriver {
    /// Taps a button and returns the new display text
    fn press(&mut self, button: Button) -> String;

    /// Returns the display text
    fn display(&self) -> String;

    /// Returns the calculator to its initial state, tape included
    fn reset(&mut self);

    /// Returns tape entries (newest first)
    fn history(&self) -> Vec<HistoryItem>;

    /// Taps each button in order and returns the final display text
    fn press_all(&mut self, buttons: &[Button]) -> String {
        for button in buttons {
            self.press(*button);
        }
        self.display()
    }
}

/// A tape line as seen through a driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// Left side of the equation
    pub expression: String,
    /// Result text
    pub result: String,
}

/// Driver over a bare [`Session`], no rendering
#[derive(Debug, Default)]
pub struct HeadlessDriver {
    session: Session,
}

impl HeadlessDriver {
    /// Creates a driver with the default config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver with a specific config
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            session: Session::new(config),
        }
    }

    /// Returns the underlying session
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, button: Button) -> String {
        self.session.press(button).to_string()
    }

    fn display(&self) -> String {
        self.session.display().to_string()
    }

    fn reset(&mut self) {
        self.session.reset();
    }

    fn history(&self) -> Vec<HistoryItem> {
        history_items(&self.session)
    }
}

fn history_items(session: &Session) -> Vec<HistoryItem> {
    session
        .history()
        .iter_rev()
        .map(|entry| HistoryItem {
            expression: entry.expression.clone(),
            result: entry.result.clone(),
        })
        .collect()
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{history_items, Button, CalculatorDriver, HistoryItem};
    use crate::tui::CalculatorApp;

    /// Driver over the TUI app state, so key handling and highlighting are
    /// exercised too
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, button: Button) -> String {
            self.app.press(button);
            self.app.display().to_string()
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn reset(&mut self) {
            self.app.reset();
        }

        fn history(&self) -> Vec<HistoryItem> {
            history_items(self.app.session())
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified behaviour checks =====
// These work with ANY CalculatorDriver implementation

/// Digits typed after a reset show up concatenated, leading zero replaced
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(
        driver.press_all(&[Button::Zero, Button::One, Button::Zero, Button::Nine]),
        "109"
    );
    driver.reset();
}

/// Each operator applied through equals
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    let cases = [
        (Button::Add, "8"),
        (Button::Subtract, "2"),
        (Button::Multiply, "15"),
    ];
    for (op, expected) in cases {
        driver.reset();
        assert_eq!(
            driver.press_all(&[Button::Five, op, Button::Three, Button::Equal]),
            expected
        );
    }

    driver.reset();
    assert_eq!(
        driver.press_all(&[Button::Nine, Button::Divide, Button::Two, Button::Equal]),
        "4.5"
    );
    driver.reset();
}

/// Division by zero shows the raw infinity text
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(
        driver.press_all(&[Button::Six, Button::Divide, Button::Zero, Button::Equal]),
        "inf"
    );
    driver.reset();
}

/// Clear returns the display to "0"
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.press_all(&[Button::Nine, Button::Clear]), "0");
    driver.reset();
}

/// Equals pressed again applies the same operation and stored operand
pub fn verify_repeated_equals<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(
        driver.press_all(&[Button::Two, Button::Multiply, Button::Three, Button::Equal]),
        "6"
    );
    assert_eq!(driver.press(Button::Equal), "12");
    assert_eq!(driver.press(Button::Equal), "24");

    let history = driver.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].expression, "2 X 12");
    assert_eq!(history[0].result, "24");
    driver.reset();
}

/// Decimal, percent and sign toggle leave the display alone
pub fn verify_inert_buttons<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all(&[Button::Four, Button::Two]);
    for button in [Button::Decimal, Button::Percent, Button::Negative] {
        assert_eq!(driver.press(button), "42");
    }
    driver.reset();
}

/// Complete behaviour suite
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_basic_arithmetic(driver);
    verify_division_by_zero(driver);
    verify_clear(driver);
    verify_repeated_equals(driver);
    verify_inert_buttons(driver);
}
