//! Pending binary operation
//!
//! Arithmetic is raw IEEE-754: dividing by zero yields infinity or NaN and
//! the caller displays whatever comes out.

use serde::{Deserialize, Serialize};

/// Operation captured by an operator button and applied on equals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingOperation {
    /// No operator pressed yet
    #[default]
    None,
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (X)
    Multiply,
    /// Division (÷)
    Divide,
}

impl PendingOperation {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "X",
            Self::Divide => "÷",
        }
    }

    /// Returns true unless this is [`PendingOperation::None`]
    #[must_use]
    pub const fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Applies the operation to `lhs` and `rhs`.
    ///
    /// Returns `None` when there is no operation to apply.
    #[must_use]
    pub fn apply(&self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Add => Some(lhs + rhs),
            Self::Subtract => Some(lhs - rhs),
            Self::Multiply => Some(lhs * rhs),
            Self::Divide => Some(lhs / rhs),
        }
    }
}
