//! Keypad button catalogue
//!
//! The 19 buttons of the keypad, what class of input each one is, and the
//! tone a front-end paints it with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, PendingOperation};

/// A keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    /// Digit 0
    Zero,
    /// Digit 1
    One,
    /// Digit 2
    Two,
    /// Digit 3
    Three,
    /// Digit 4
    Four,
    /// Digit 5
    Five,
    /// Digit 6
    Six,
    /// Digit 7
    Seven,
    /// Digit 8
    Eight,
    /// Digit 9
    Nine,
    /// Addition operator
    Add,
    /// Subtraction operator
    Subtract,
    /// Multiplication operator
    Multiply,
    /// Division operator
    Divide,
    /// Equals
    Equal,
    /// All-clear
    Clear,
    /// Decimal point
    Decimal,
    /// Percent
    Percent,
    /// Sign toggle
    Negative,
}

/// What kind of input a button produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonClass {
    /// Appends a digit to the display
    Digit(u8),
    /// Captures the stored operand and pending operation
    Operator(PendingOperation),
    /// Applies the pending operation
    Equals,
    /// Resets the display
    Clear,
    /// Accepted but has no effect
    Inert,
}

/// Presentation tone of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonTone {
    /// Operators and equals (orange)
    Accent,
    /// Clear, sign toggle and percent (light gray)
    Function,
    /// Digits and decimal point (dark gray)
    Digit,
}

impl ButtonTone {
    /// Returns the tone as an RGB triple
    #[must_use]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Accent => (255, 128, 0),
            Self::Function => (170, 170, 170),
            Self::Digit => (55, 55, 55),
        }
    }
}

impl Button {
    /// Every button, digits first
    pub const ALL: [Self; 19] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Equal,
        Self::Clear,
        Self::Decimal,
        Self::Percent,
        Self::Negative,
    ];

    /// Returns the digit button for `d`, if `d` is 0-9
    #[must_use]
    pub const fn from_digit(d: u8) -> Option<Self> {
        let button = match d {
            0 => Self::Zero,
            1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            6 => Self::Six,
            7 => Self::Seven,
            8 => Self::Eight,
            9 => Self::Nine,
            _ => return None,
        };
        Some(button)
    }

    /// Returns the text printed on the button
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "X",
            Self::Divide => "÷",
            Self::Equal => "=",
            Self::Clear => "AC",
            Self::Decimal => ".",
            Self::Percent => "%",
            Self::Negative => "-/+",
        }
    }

    /// Returns the input class of this button
    #[must_use]
    pub const fn class(&self) -> ButtonClass {
        match self {
            Self::Zero => ButtonClass::Digit(0),
            Self::One => ButtonClass::Digit(1),
            Self::Two => ButtonClass::Digit(2),
            Self::Three => ButtonClass::Digit(3),
            Self::Four => ButtonClass::Digit(4),
            Self::Five => ButtonClass::Digit(5),
            Self::Six => ButtonClass::Digit(6),
            Self::Seven => ButtonClass::Digit(7),
            Self::Eight => ButtonClass::Digit(8),
            Self::Nine => ButtonClass::Digit(9),
            Self::Add => ButtonClass::Operator(PendingOperation::Add),
            Self::Subtract => ButtonClass::Operator(PendingOperation::Subtract),
            Self::Multiply => ButtonClass::Operator(PendingOperation::Multiply),
            Self::Divide => ButtonClass::Operator(PendingOperation::Divide),
            Self::Equal => ButtonClass::Equals,
            Self::Clear => ButtonClass::Clear,
            Self::Decimal | Self::Percent | Self::Negative => ButtonClass::Inert,
        }
    }

    /// Returns the tone this button is painted with
    #[must_use]
    pub const fn tone(&self) -> ButtonTone {
        match self {
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Equal => {
                ButtonTone::Accent
            }
            Self::Clear | Self::Negative | Self::Percent => ButtonTone::Function,
            _ => ButtonTone::Digit,
        }
    }

    /// Returns true for the ten digit buttons
    #[must_use]
    pub const fn is_digit(&self) -> bool {
        matches!(self.class(), ButtonClass::Digit(_))
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Button {
    type Err = CalcError;

    /// Parses a button label, accepting common keyboard spellings too
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(button) = Self::ALL.iter().find(|b| b.label() == trimmed) {
            return Ok(*button);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "*" | "x" | "×" => Ok(Self::Multiply),
            "/" => Ok(Self::Divide),
            "−" => Ok(Self::Subtract),
            "c" | "ac" => Ok(Self::Clear),
            "+/-" | "±" | "neg" => Ok(Self::Negative),
            _ => Err(CalcError::UnknownButton(trimmed.to_string())),
        }
    }
}

/// Parses a whitespace-separated list of button labels
pub fn parse_sequence(input: &str) -> CalcResult<Vec<Button>> {
    input.split_whitespace().map(str::parse).collect()
}
