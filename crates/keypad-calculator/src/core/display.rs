//! Display text handling
//!
//! The display is kept as text. Reading it back is lenient: anything that
//! does not parse as a number counts as zero.

/// Text shown on a fresh or cleared display
pub const INITIAL_DISPLAY: &str = "0";

/// Reads the display text as a number, defaulting to zero
#[must_use]
pub fn parse_value(display: &str) -> f64 {
    display.parse::<f64>().unwrap_or(0.0)
}

/// Formats a number for the display.
///
/// Plain `f64` formatting with no rounding: `8.0` shows as `8`, infinity as
/// `inf`, not-a-number as `NaN`.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// Appends a digit, replacing a sole leading zero
pub fn append_digit(display: &mut String, digit: u8) {
    let Some(ch) = char::from_digit(u32::from(digit), 10) else {
        return;
    };
    if display == INITIAL_DISPLAY {
        display.clear();
    }
    display.push(ch);
}
