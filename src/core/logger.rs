//! Main logger implementation.
//!
//! The logger is split in two layers. The inner layer is [`LoggerState`]:
//! palette, time format, optional log sink and the terminal writer, with
//! unlocked methods that assume exclusive access. The outer layer is
//! [`Logger`], whose public methods acquire the state mutex exactly once
//! for their full duration and delegate to the inner layer. High-level
//! emissions reach the low-level painting primitives through the inner
//! layer, so no reentrant locking is needed anywhere.

use super::color::{Color, ResetTarget, CLEAR_LINE, RESET_ALL};
use super::error::{LoggerError, Result};
use super::palette::{ColorPalette, DisplayColors, MessageCategory, TagCategory};
use super::sink::{LogFileMode, LogSink};
use super::time_format::TimeFormat;
use parking_lot::{Mutex, MutexGuard};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Context used for the logger's own diagnostic messages.
const SELF_CONTEXT: &str = "Logger module";

/// Everything an emission or configuration call touches, owned behind
/// the state mutex. Methods assume the caller already holds the lock.
struct LoggerState {
    palette: ColorPalette,
    time_format: TimeFormat,
    sink: Option<LogSink>,
    terminal: Box<dyn Write + Send>,
}

impl LoggerState {
    /// Render one message to the terminal and, if configured, mirror it
    /// to the log sink. Runs every phase under the caller's single lock
    /// acquisition; write failures are ignored (emissions are unfailing).
    fn emit(&mut self, category: MessageCategory, context: Option<&str>, body: &str) {
        let context = context.filter(|context| !context.is_empty());

        if let Some(context) = context {
            let colors = self.palette.tag_colors(TagCategory::Context);
            self.paint_text(colors.text_color);
            self.paint_background(colors.background_color);
            let _ = write!(self.terminal, "{}: ", context);
            self.apply_default_attributes();
        }

        if let (Some(tag), Some(tag_category)) = (category.tag(), category.tag_category()) {
            let colors = self.palette.tag_colors(tag_category);
            self.paint_text(colors.text_color);
            self.paint_background(colors.background_color);
            let _ = write!(self.terminal, "{} ", tag);
            self.apply_default_attributes();
        }

        let colors = self.palette.message_colors(category);
        self.paint_text(colors.text_color);
        self.paint_background(colors.background_color);
        let _ = self.terminal.write_all(body.as_bytes());

        self.reset(ResetTarget::All);
        self.flush_terminal();

        self.mirror(category, context, body);
    }

    /// Write the plain-text, timestamped copy of an emission to the sink.
    fn mirror(&mut self, category: MessageCategory, context: Option<&str>, body: &str) {
        if self.sink.is_none() {
            return;
        }

        let mut line = format!("[{}] ", self.time_format.format_now());
        if let Some(context) = context {
            line.push_str(context);
            line.push_str(": ");
        }
        if let Some(tag) = category.tag() {
            line.push_str(tag);
            line.push(' ');
        }
        line.push_str(body);

        if let Some(sink) = self.sink.as_mut() {
            let _ = sink.write_text(&line);
        }
    }

    fn paint_text(&mut self, color: Color) {
        let _ = self.terminal.write_all(color.foreground_code().as_bytes());
    }

    fn paint_background(&mut self, color: Color) {
        let _ = self.terminal.write_all(color.background_code().as_bytes());
        // A line break paints the rest of the new line with the active
        // background color; drop anything already past the cursor.
        let _ = self.terminal.write_all(CLEAR_LINE.as_bytes());
    }

    /// Restore default attributes between emission phases.
    fn apply_default_attributes(&mut self) {
        let _ = self.terminal.write_all(RESET_ALL.as_bytes());
    }

    fn reset(&mut self, target: ResetTarget) {
        match target {
            ResetTarget::Text => self.paint_text(Color::Default),
            ResetTarget::Background => self.paint_background(Color::Default),
            ResetTarget::All => {
                self.apply_default_attributes();
                let _ = self.terminal.write_all(CLEAR_LINE.as_bytes());
            }
        }
    }

    fn flush_terminal(&mut self) {
        let _ = self.terminal.flush();
    }
}

/// The stateful logging engine: categorized, color-tagged terminal
/// messages with an optional timestamped log file mirror.
///
/// A `Logger` is an explicit handle, not process-global state; hosts
/// construct one and share it by reference. Every public method holds the
/// internal state mutex for its full duration, so a whole emission is one
/// critical section and concurrent callers can never interleave output.
///
/// # Example
///
/// ```
/// use message_logger::prelude::*;
///
/// let logger = Logger::new();
/// logger.success(Some("Setup"), "configuration loaded\n");
/// logger.error(None, "no route to host\n");
/// ```
pub struct Logger {
    state: Mutex<LoggerState>,
    thread_safety: AtomicBool,
}

impl Logger {
    /// Create a logger that writes to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_terminal(io::stdout())
    }

    /// Create a logger with a custom terminal writer.
    ///
    /// Useful for capturing emissions in tests or redirecting them to
    /// another stream.
    pub fn with_terminal<W: Write + Send + 'static>(terminal: W) -> Self {
        Self {
            state: Mutex::new(LoggerState {
                palette: ColorPalette::default(),
                time_format: TimeFormat::default(),
                sink: None,
                terminal: Box::new(terminal),
            }),
            thread_safety: AtomicBool::new(false),
        }
    }

    // ------------------------------------------------------------------
    // Emission entry points
    // ------------------------------------------------------------------

    /// Emit a default-category message: no tag, default message colors.
    pub fn message(&self, context: Option<&str>, body: impl AsRef<str>) {
        self.state
            .lock()
            .emit(MessageCategory::Default, context, body.as_ref());
    }

    /// Emit an info message, tagged `(Info)`.
    pub fn info(&self, context: Option<&str>, body: impl AsRef<str>) {
        self.state
            .lock()
            .emit(MessageCategory::Info, context, body.as_ref());
    }

    /// Emit a success message, tagged `(Success)`.
    pub fn success(&self, context: Option<&str>, body: impl AsRef<str>) {
        self.state
            .lock()
            .emit(MessageCategory::Success, context, body.as_ref());
    }

    /// Emit a warning message, tagged `(Warning)`.
    pub fn warning(&self, context: Option<&str>, body: impl AsRef<str>) {
        self.state
            .lock()
            .emit(MessageCategory::Warning, context, body.as_ref());
    }

    /// Emit an error message, tagged `(Error)`.
    pub fn error(&self, context: Option<&str>, body: impl AsRef<str>) {
        self.state
            .lock()
            .emit(MessageCategory::Error, context, body.as_ref());
    }

    // ------------------------------------------------------------------
    // Painting primitives
    // ------------------------------------------------------------------

    /// Apply a text color to subsequent terminal output.
    pub fn paint_text(&self, color: Color) {
        let mut state = self.state.lock();
        state.paint_text(color);
        state.flush_terminal();
    }

    /// Apply a background color to subsequent terminal output and clear
    /// the line past the cursor.
    pub fn paint_background(&self, color: Color) {
        let mut state = self.state.lock();
        state.paint_background(color);
        state.flush_terminal();
    }

    /// Restore default terminal attributes for the given target.
    pub fn reset(&self, target: ResetTarget) {
        let mut state = self.state.lock();
        state.reset(target);
        state.flush_terminal();
    }

    // ------------------------------------------------------------------
    // Color palette
    // ------------------------------------------------------------------

    /// A copy of the display colors for a message category.
    #[must_use]
    pub fn message_colors(&self, category: MessageCategory) -> DisplayColors {
        self.state.lock().palette.message_colors(category)
    }

    /// A copy of the display colors for a tag category.
    #[must_use]
    pub fn tag_colors(&self, category: TagCategory) -> DisplayColors {
        self.state.lock().palette.tag_colors(category)
    }

    /// Replace the display colors for a message category.
    pub fn set_message_colors(&self, category: MessageCategory, colors: DisplayColors) {
        self.state.lock().palette.set_message_colors(category, colors);
    }

    /// Replace the display colors for a tag category.
    pub fn set_tag_colors(&self, category: TagCategory, colors: DisplayColors) {
        self.state.lock().palette.set_tag_colors(category, colors);
    }

    /// Restore every palette slot to the built-in defaults in one
    /// critical section.
    pub fn reset_palette(&self) {
        self.state.lock().palette.reset();
    }

    // ------------------------------------------------------------------
    // Time format
    // ------------------------------------------------------------------

    /// A copy of the active timestamp pattern.
    #[must_use]
    pub fn time_format(&self) -> String {
        self.state.lock().time_format.as_str().to_string()
    }

    /// Replace the timestamp pattern used for log file entries.
    ///
    /// Oversized or unparseable patterns are rejected with
    /// [`LoggerError::InvalidArgument`], leaving the stored pattern
    /// unchanged and emitting a diagnostic error message.
    pub fn set_time_format(&self, pattern: &str) -> Result<()> {
        let mut state = self.state.lock();
        match TimeFormat::new(pattern) {
            Ok(format) => {
                state.time_format = format;
                Ok(())
            }
            Err(err) => {
                state.emit(
                    MessageCategory::Error,
                    Some(SELF_CONTEXT),
                    &format!("Could not change time format: {}.\n", err),
                );
                Err(err)
            }
        }
    }

    // ------------------------------------------------------------------
    // Log file
    // ------------------------------------------------------------------

    /// Open a log file to mirror every emission, replacing any sink
    /// configured before.
    ///
    /// [`LogFileMode::Append`] expects the target to exist; when it does
    /// not, a diagnostic warning is emitted and the target is created in
    /// write mode instead (a recoverable condition, not an error).
    /// [`LogFileMode::Write`] always truncates. On failure the previous
    /// sink stays closed, no new sink is held, a diagnostic error message
    /// is emitted and [`LoggerError::Io`] is returned.
    pub fn configure_log_file(&self, path: impl AsRef<Path>, mode: LogFileMode) -> Result<()> {
        let path = path.as_ref();
        let mut state = self.state.lock();

        // The previous sink is closed before the new target is opened.
        state.sink = None;

        let opened = match LogSink::open(path, mode) {
            Err(err) if mode == LogFileMode::Append && err.kind() == io::ErrorKind::NotFound => {
                state.emit(
                    MessageCategory::Warning,
                    Some(SELF_CONTEXT),
                    "Could not find log file! Defaulting to write mode!\n",
                );
                LogSink::open(path, LogFileMode::Write)
            }
            other => other,
        };

        match opened {
            Ok(sink) => {
                state.sink = Some(sink);
                Ok(())
            }
            Err(source) => {
                state.emit(
                    MessageCategory::Error,
                    Some(SELF_CONTEXT),
                    "Could not create log file! Please check your system.\n",
                );
                Err(LoggerError::io(path.display().to_string(), source))
            }
        }
    }

    /// Whether a log sink is currently open.
    #[must_use]
    pub fn has_log_file(&self) -> bool {
        self.state.lock().sink.is_some()
    }

    /// The mode the current log sink was opened with, if one is open.
    #[must_use]
    pub fn log_file_mode(&self) -> Option<LogFileMode> {
        self.state.lock().sink.as_ref().map(LogSink::mode)
    }

    /// The path the current log sink was opened with, if one is open.
    #[must_use]
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.state
            .lock()
            .sink
            .as_ref()
            .map(|sink| sink.path().to_path_buf())
    }

    // ------------------------------------------------------------------
    // Thread safety and lifecycle
    // ------------------------------------------------------------------

    /// Arm the manual lock surface ([`Logger::lock`]).
    ///
    /// Internal operations always serialize on the state mutex, which is
    /// allocated at construction; arming is therefore a flag flip and
    /// currently cannot fail. Calling this twice is a no-op returning
    /// `Ok`. [`LoggerError::Resource`] remains the contract for a lock
    /// primitive that cannot be initialized.
    pub fn enable_thread_safety(&self) -> Result<()> {
        self.thread_safety.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Whether [`enable_thread_safety`](Logger::enable_thread_safety) has
    /// been called since construction or the last clean up.
    #[must_use]
    pub fn thread_safety_enabled(&self) -> bool {
        self.thread_safety.load(Ordering::SeqCst)
    }

    /// Hold the logger's lock so the caller can serialize its own
    /// terminal writes with the logger's emissions.
    ///
    /// The returned guard keeps the state mutex locked for its lifetime
    /// and exposes the painting primitives; dropping it unlocks. Before
    /// thread safety is enabled this emits a diagnostic warning and
    /// returns an unarmed guard instead of blocking, so it can never
    /// deadlock a caller that forgot to opt in.
    #[must_use]
    pub fn lock(&self) -> TerminalGuard<'_> {
        if self.thread_safety_enabled() {
            TerminalGuard {
                logger: self,
                state: Some(self.state.lock()),
            }
        } else {
            self.warning(
                Some(SELF_CONTEXT),
                "Enable thread safety to hold the logger lock.\n",
            );
            TerminalGuard {
                logger: self,
                state: None,
            }
        }
    }

    /// Release the resources a host may have configured: close the log
    /// sink and disarm thread safety.
    ///
    /// Idempotent; safe to call when nothing was configured.
    pub fn clean_up(&self) {
        let mut state = self.state.lock();
        state.sink = None;
        self.thread_safety.store(false, Ordering::SeqCst);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds the logger's lock on behalf of an external caller.
///
/// Obtained through [`Logger::lock`]. While armed, no emission or
/// configuration call on any thread can run until the guard is dropped.
/// The painting primitives are available either way; on an unarmed guard
/// they fall back to the logger's own one-shot operations.
pub struct TerminalGuard<'a> {
    logger: &'a Logger,
    state: Option<MutexGuard<'a, LoggerState>>,
}

impl TerminalGuard<'_> {
    /// Whether this guard actually holds the lock.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.state.is_some()
    }

    /// Apply a text color to subsequent terminal output.
    pub fn paint_text(&mut self, color: Color) {
        match self.state.as_mut() {
            Some(state) => {
                state.paint_text(color);
                state.flush_terminal();
            }
            None => self.logger.paint_text(color),
        }
    }

    /// Apply a background color to subsequent terminal output and clear
    /// the line past the cursor.
    pub fn paint_background(&mut self, color: Color) {
        match self.state.as_mut() {
            Some(state) => {
                state.paint_background(color);
                state.flush_terminal();
            }
            None => self.logger.paint_background(color),
        }
    }

    /// Restore default terminal attributes for the given target.
    pub fn reset(&mut self, target: ResetTarget) {
        match self.state.as_mut() {
            Some(state) => {
                state.reset(target);
                state.flush_terminal();
            }
            None => self.logger.reset(target),
        }
    }
}
