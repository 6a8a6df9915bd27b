//! Interactive session: an evaluator plus its tape

use tracing::debug;

use crate::config::CalculatorConfig;
use crate::core::evaluator::Evaluator;
use crate::core::history::History;
use crate::core::{Button, ButtonClass};

/// Evaluator and tape for one interactive session
#[derive(Debug, Clone)]
pub struct Session {
    evaluator: Evaluator,
    history: History,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&CalculatorConfig::default())
    }
}

impl Session {
    /// Creates a session from a config
    #[must_use]
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            evaluator: Evaluator::with_clear_mode(config.clear_mode),
            history: History::with_capacity(config.history_capacity),
        }
    }

    /// Handles a tap, recording equals presses that apply an operation
    pub fn press(&mut self, button: Button) -> &str {
        if button.class() == ButtonClass::Equals {
            if let Some(evaluation) = self.evaluator.pending_evaluation() {
                debug!(%evaluation, "recording evaluation");
                self.history.record(&evaluation);
            }
        }
        self.evaluator.handle_button(button)
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.evaluator.display()
    }

    /// Returns the evaluator
    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Returns the tape
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Resets the evaluator and empties the tape
    pub fn reset(&mut self) {
        self.evaluator.reset();
        self.history.clear();
    }
}
