//! Keypad arrangement and button geometry
//!
//! Presentation data only; nothing here touches the evaluator.
//!
//! ```text
//! [ AC ] [-/+] [ % ] [ ÷ ]
//! [ 7  ] [ 8 ] [ 9 ] [ X ]
//! [ 4  ] [ 5 ] [ 6 ] [ - ]
//! [ 1  ] [ 2 ] [ 3 ] [ + ]
//! [    0     ] [ . ] [ = ]
//! ```

use crate::core::Button;

/// Button rows, top to bottom
pub static ROWS: [&[Button]; 5] = [
    &[Button::Clear, Button::Negative, Button::Percent, Button::Divide],
    &[Button::Seven, Button::Eight, Button::Nine, Button::Multiply],
    &[Button::Four, Button::Five, Button::Six, Button::Subtract],
    &[Button::One, Button::Two, Button::Three, Button::Add],
    &[Button::Zero, Button::Decimal, Button::Equal],
];

/// Keypad layout queries
#[derive(Debug, Clone, Copy, Default)]
pub struct KeypadLayout;

impl KeypadLayout {
    /// Width of every row in cell units
    pub const COLUMNS: usize = 4;

    /// Gap between buttons, in points
    pub const SPACING: f64 = 12.0;

    /// Creates the layout
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the rows, top to bottom
    #[must_use]
    pub fn rows(&self) -> &'static [&'static [Button]] {
        &ROWS
    }

    /// Returns the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        ROWS.len()
    }

    /// Returns how many cell units a button covers
    #[must_use]
    pub const fn span(button: Button) -> usize {
        match button {
            Button::Zero => 2,
            _ => 1,
        }
    }

    /// Returns the (row, first cell unit) of a button
    #[must_use]
    pub fn position(&self, button: Button) -> Option<(usize, usize)> {
        ROWS.iter().enumerate().find_map(|(row, buttons)| {
            let mut col = 0;
            for b in buttons.iter() {
                if *b == button {
                    return Some((row, col));
                }
                col += Self::span(*b);
            }
            None
        })
    }

    /// Returns the button covering a (row, cell unit) position
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<Button> {
        let buttons = ROWS.get(row)?;
        let mut start = 0;
        for b in buttons.iter() {
            let end = start + Self::span(*b);
            if col < end {
                return Some(*b);
            }
            start = end;
        }
        None
    }

    /// Iterates buttons with their (row, first cell unit, span)
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, usize, Button)> {
        ROWS.iter().enumerate().flat_map(|(row, buttons)| {
            let mut col = 0;
            buttons.iter().map(move |b| {
                let span = Self::span(*b);
                let cell = (row, col, span, *b);
                col += span;
                cell
            })
        })
    }
}

/// Size of a rendered button for a given screen width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonGeometry {
    /// Button width
    pub width: f64,
    /// Button height
    pub height: f64,
    /// Corner radius, half the width
    pub corner_radius: f64,
}

impl ButtonGeometry {
    /// Computes the geometry of `button` on a screen `screen_width` wide.
    ///
    /// A single cell is a quarter of the width left after five gaps; zero
    /// is two quarters of the width left after four gaps. Height is always
    /// one cell.
    #[must_use]
    pub fn for_button(button: Button, screen_width: f64) -> Self {
        let spacing = KeypadLayout::SPACING;
        let cell = (screen_width - 5.0 * spacing) / 4.0;
        let width = if button == Button::Zero {
            ((screen_width - 4.0 * spacing) / 4.0) * 2.0
        } else {
            cell
        };
        Self {
            width,
            height: cell,
            corner_radius: width / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_all_buttons_once() {
        let mut seen: Vec<Button> = ROWS.iter().flat_map(|r| r.iter().copied()).collect();
        assert_eq!(seen.len(), 19);
        seen.sort_by_key(|b| Button::ALL.iter().position(|a| a == b));
        assert_eq!(seen, Button::ALL.to_vec());
    }

    #[test]
    fn test_every_row_spans_four_units() {
        for row in ROWS {
            let units: usize = row.iter().map(|b| KeypadLayout::span(*b)).sum();
            assert_eq!(units, KeypadLayout::COLUMNS);
        }
    }

    #[test]
    fn test_row_count() {
        assert_eq!(KeypadLayout::new().row_count(), 5);
        assert_eq!(KeypadLayout::new().rows().len(), 5);
    }

    #[test]
    fn test_position() {
        let layout = KeypadLayout::new();
        assert_eq!(layout.position(Button::Clear), Some((0, 0)));
        assert_eq!(layout.position(Button::Multiply), Some((1, 3)));
        assert_eq!(layout.position(Button::Zero), Some((4, 0)));
        assert_eq!(layout.position(Button::Decimal), Some((4, 2)));
        assert_eq!(layout.position(Button::Equal), Some((4, 3)));
    }

    #[test]
    fn test_button_at_zero_spans_two_cells() {
        let layout = KeypadLayout::new();
        assert_eq!(layout.button_at(4, 0), Some(Button::Zero));
        assert_eq!(layout.button_at(4, 1), Some(Button::Zero));
        assert_eq!(layout.button_at(4, 2), Some(Button::Decimal));
    }

    #[test]
    fn test_button_at_out_of_bounds() {
        let layout = KeypadLayout::new();
        assert_eq!(layout.button_at(5, 0), None);
        assert_eq!(layout.button_at(0, 4), None);
    }

    #[test]
    fn test_cells_roundtrip_position() {
        let layout = KeypadLayout::new();
        for (row, col, _, button) in layout.cells() {
            assert_eq!(layout.position(button), Some((row, col)));
            assert_eq!(layout.button_at(row, col), Some(button));
        }
    }

    #[test]
    fn test_geometry_regular_button() {
        let g = ButtonGeometry::for_button(Button::Seven, 400.0);
        assert_eq!(g.width, 85.0);
        assert_eq!(g.height, 85.0);
        assert_eq!(g.corner_radius, 42.5);
    }

    #[test]
    fn test_geometry_zero_button() {
        let g = ButtonGeometry::for_button(Button::Zero, 400.0);
        assert_eq!(g.width, 176.0);
        assert_eq!(g.height, 85.0);
        assert_eq!(g.corner_radius, 88.0);
    }
}
