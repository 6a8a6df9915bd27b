//! Button-driven evaluator
//!
//! Holds the display text, the pending operation and the stored left-hand
//! operand. [`Evaluator::handle_button`] is the only transition; a
//! front-end calls it once per tap and renders the returned text verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::display::{self, INITIAL_DISPLAY};
use crate::core::{Button, ButtonClass, PendingOperation};

/// What the clear button resets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearMode {
    /// Only the display goes back to "0"; the pending operation and stored
    /// operand survive
    #[default]
    DisplayOnly,
    /// Display, pending operation and stored operand all reset
    All,
}

/// Coarse evaluator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Display shows the sole "0"
    Idle,
    /// Display holds an entered operand or a result
    OperandEntered,
}

/// An equals press: `lhs op rhs = result`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Stored operand
    pub lhs: f64,
    /// Operation applied
    pub operation: PendingOperation,
    /// Operand read from the display
    pub rhs: f64,
    /// Raw floating-point result
    pub result: f64,
}

impl Evaluation {
    /// Returns the left side of the equation, e.g. `5 + 3`
    #[must_use]
    pub fn expression(&self) -> String {
        format!(
            "{} {} {}",
            display::format_value(self.lhs),
            self.operation.symbol(),
            display::format_value(self.rhs)
        )
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {}",
            self.expression(),
            display::format_value(self.result)
        )
    }
}

/// Copy of the evaluator's three state fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluatorSnapshot {
    /// Display text
    pub display: String,
    /// Pending operation
    pub pending: PendingOperation,
    /// Stored left-hand operand
    pub stored: f64,
}

/// Four-function evaluator
#[derive(Debug, Clone)]
pub struct Evaluator {
    display: String,
    pending: PendingOperation,
    stored: f64,
    clear_mode: ClearMode,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator showing "0" with nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self::with_clear_mode(ClearMode::default())
    }

    /// Creates an evaluator with the given clear behaviour
    #[must_use]
    pub fn with_clear_mode(clear_mode: ClearMode) -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending: PendingOperation::None,
            stored: 0.0,
            clear_mode,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the pending operation
    #[must_use]
    pub fn pending(&self) -> PendingOperation {
        self.pending
    }

    /// Returns the stored left-hand operand
    #[must_use]
    pub fn stored(&self) -> f64 {
        self.stored
    }

    /// Returns the configured clear behaviour
    #[must_use]
    pub fn clear_mode(&self) -> ClearMode {
        self.clear_mode
    }

    /// Returns the coarse state
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.display == INITIAL_DISPLAY {
            Phase::Idle
        } else {
            Phase::OperandEntered
        }
    }

    /// Returns a copy of the state fields
    #[must_use]
    pub fn snapshot(&self) -> EvaluatorSnapshot {
        EvaluatorSnapshot {
            display: self.display.clone(),
            pending: self.pending,
            stored: self.stored,
        }
    }

    /// Returns what pressing equals right now would compute, if anything
    #[must_use]
    pub fn pending_evaluation(&self) -> Option<Evaluation> {
        let rhs = display::parse_value(&self.display);
        self.pending
            .apply(self.stored, rhs)
            .map(|result| Evaluation {
                lhs: self.stored,
                operation: self.pending,
                rhs,
                result,
            })
    }

    /// Handles one button tap and returns the new display text
    pub fn handle_button(&mut self, button: Button) -> &str {
        match button.class() {
            ButtonClass::Digit(d) => display::append_digit(&mut self.display, d),
            ButtonClass::Operator(op) => {
                self.stored = display::parse_value(&self.display);
                self.pending = op;
                self.display = INITIAL_DISPLAY.to_string();
            }
            ButtonClass::Equals => {
                // Pending operation is kept so equals can be pressed again
                if let Some(evaluation) = self.pending_evaluation() {
                    self.display = display::format_value(evaluation.result);
                } else {
                    trace!("equals with no pending operation");
                }
            }
            ButtonClass::Clear => match self.clear_mode {
                ClearMode::DisplayOnly => self.display = INITIAL_DISPLAY.to_string(),
                ClearMode::All => self.reset(),
            },
            ButtonClass::Inert => trace!(%button, "button has no effect"),
        }

        debug!(
            %button,
            display = %self.display,
            pending = ?self.pending,
            stored = self.stored,
            "button handled"
        );
        &self.display
    }

    /// Feeds a sequence of buttons and returns the final display text
    pub fn press_all<I>(&mut self, buttons: I) -> &str
    where
        I: IntoIterator<Item = Button>,
    {
        for button in buttons {
            self.handle_button(button);
        }
        &self.display
    }

    /// Returns every state field to its initial value
    pub fn reset(&mut self) {
        self.display = INITIAL_DISPLAY.to_string();
        self.pending = PendingOperation::None;
        self.stored = 0.0;
    }
}
