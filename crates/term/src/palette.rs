//! Palette: color ids to terminal colors.
//!
//! The eight ids map onto the standard ANSI colors (SGR 40–47), so the game
//! looks the same on any terminal that supports basic color.

use crossterm::style::Color as TermColor;

use crate::types::{CellValue, Color};

pub fn term_color(color: Color) -> TermColor {
    match color {
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::White => TermColor::Grey,
    }
}

/// Background for a board cell. Empty cells show as the White entry, the
/// wall sentinel as Black.
pub fn cell_color(value: CellValue) -> TermColor {
    match Color::from_cell(value) {
        Some(color) => term_color(color),
        None if value < 0 => term_color(Color::Black),
        None => term_color(Color::White),
    }
}
