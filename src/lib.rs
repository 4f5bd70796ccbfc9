//! # Message Logger
//!
//! An embeddable logging facility that prints categorized, color-tagged
//! messages to the terminal and optionally mirrors them, timestamped, to
//! a log file.
//!
//! ## Features
//!
//! - **Categorized Messages**: message, info, success, warning and error
//!   entry points with per-category tags
//! - **Configurable Palette**: display colors for every message and tag
//!   category, resettable to built-in defaults
//! - **Log File Mirror**: plain-text, timestamped copies of every
//!   emission in write or append mode
//! - **Thread Safe**: a whole emission is one critical section, so
//!   concurrent callers never interleave output

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Color, ColorPalette, DisplayColors, LogFileMode, LogSink, Logger, LoggerError,
        MessageCategory, ResetTarget, Result, TagCategory, TerminalGuard, TimeFormat,
        TIME_FORMAT_MAX_LEN,
    };
}

pub use crate::core::{
    Color, ColorPalette, DisplayColors, LogFileMode, LogSink, Logger, LoggerError,
    MessageCategory, ResetTarget, Result, TagCategory, TerminalGuard, TimeFormat,
    TIME_FORMAT_MAX_LEN,
};
