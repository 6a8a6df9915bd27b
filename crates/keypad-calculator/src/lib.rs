//! Keypad Calculator
//!
//! A four-function calculator driven one button at a time. The evaluator
//! tracks the display text, a pending operation and a stored operand; a
//! front-end feeds it button taps and renders the display string it hands
//! back.
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut eval = Evaluator::new();
//! eval.press_all([Button::Five, Button::Add, Button::Three]);
//! assert_eq!(eval.handle_button(Button::Equal), "8");
//!
//! // Division by zero is displayed, not reported
//! eval.press_all([Button::Divide, Button::Zero]);
//! assert_eq!(eval.handle_button(Button::Equal), "inf");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod layout;
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalculatorConfig;
    pub use crate::core::evaluator::{ClearMode, Evaluation, Evaluator, Phase};
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::session::Session;
    pub use crate::core::{Button, ButtonClass, ButtonTone, CalcError, CalcResult, PendingOperation};
    pub use crate::driver::{CalculatorDriver, HeadlessDriver, HistoryItem};
    pub use crate::layout::{ButtonGeometry, KeypadLayout};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
