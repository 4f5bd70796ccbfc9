//! Terminal color definitions and the fixed ANSI escape-code tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SGR sequence that restores every default text attribute at once.
pub(crate) const RESET_ALL: &str = "\x1B[0m";

/// Clears the current line past the cursor. A line break inherits the
/// active background color for the whole new line, so this must follow
/// every background change.
pub(crate) const CLEAR_LINE: &str = "\x1B[K";

/// A color supported for display by a terminal.
///
/// Covers the 8 standard colors, their bright variants (bright implies
/// bold weight) and the default color configured for the terminal itself.
/// Each variant maps to a fixed ANSI escape sequence; there is no runtime
/// capability detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// Default color according to terminal settings.
    #[default]
    Default,
}

impl Color {
    /// Every supported color, in declaration order.
    pub const ALL: [Color; 17] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
        Color::Default,
    ];

    /// Escape sequence that applies this color to the text font.
    ///
    /// Bright variants select bold weight alongside the color; the others
    /// explicitly select normal weight so a bright color painted earlier
    /// does not leak its boldness into later text.
    pub fn foreground_code(&self) -> &'static str {
        match self {
            Color::Black => "\x1B[22;38;5;0m",
            Color::Red => "\x1B[22;38;5;1m",
            Color::Green => "\x1B[22;38;5;2m",
            Color::Yellow => "\x1B[22;38;5;3m",
            Color::Blue => "\x1B[22;38;5;4m",
            Color::Magenta => "\x1B[22;38;5;5m",
            Color::Cyan => "\x1B[22;38;5;6m",
            Color::White => "\x1B[22;38;5;7m",
            Color::BrightBlack => "\x1B[1;38;5;8m",
            Color::BrightRed => "\x1B[1;38;5;9m",
            Color::BrightGreen => "\x1B[1;38;5;10m",
            Color::BrightYellow => "\x1B[1;38;5;11m",
            Color::BrightBlue => "\x1B[1;38;5;12m",
            Color::BrightMagenta => "\x1B[1;38;5;13m",
            Color::BrightCyan => "\x1B[1;38;5;14m",
            Color::BrightWhite => "\x1B[1;38;5;15m",
            Color::Default => "\x1B[22;39m",
        }
    }

    /// Escape sequence that applies this color to the text background.
    pub fn background_code(&self) -> &'static str {
        match self {
            Color::Black => "\x1B[48;5;0m",
            Color::Red => "\x1B[48;5;1m",
            Color::Green => "\x1B[48;5;2m",
            Color::Yellow => "\x1B[48;5;3m",
            Color::Blue => "\x1B[48;5;4m",
            Color::Magenta => "\x1B[48;5;5m",
            Color::Cyan => "\x1B[48;5;6m",
            Color::White => "\x1B[48;5;7m",
            Color::BrightBlack => "\x1B[48;5;8m",
            Color::BrightRed => "\x1B[48;5;9m",
            Color::BrightGreen => "\x1B[48;5;10m",
            Color::BrightYellow => "\x1B[48;5;11m",
            Color::BrightBlue => "\x1B[48;5;12m",
            Color::BrightMagenta => "\x1B[48;5;13m",
            Color::BrightCyan => "\x1B[48;5;14m",
            Color::BrightWhite => "\x1B[48;5;15m",
            Color::Default => "\x1B[49m",
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::BrightBlack => "bright black",
            Color::BrightRed => "bright red",
            Color::BrightGreen => "bright green",
            Color::BrightYellow => "bright yellow",
            Color::BrightBlue => "bright blue",
            Color::BrightMagenta => "bright magenta",
            Color::BrightCyan => "bright cyan",
            Color::BrightWhite => "bright white",
            Color::Default => "default",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Color::ALL
            .iter()
            .find(|color| color.to_str() == normalized)
            .copied()
            .ok_or_else(|| format!("Invalid color name: '{}'", s))
    }
}

/// Target of a terminal attribute reset.
///
/// Replaces the legacy pair of single-attribute reset calls with one
/// parameterized operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetTarget {
    /// Restore the default text color and normal font weight.
    Text,
    /// Restore the default background color.
    Background,
    /// Restore every default attribute and clear the line past the cursor.
    All,
}
