//! The optional log file receiving mirrored output.

use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A file mode used to open a log file.
///
/// Determines the behavior taken when a file with the same name as the
/// one being opened already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFileMode {
    /// Write to the log file, overwriting any existing file.
    Write,
    /// Append to the log file, assuming one already exists.
    Append,
}

/// An open log file, together with the mode and path it was opened with.
///
/// At most one sink exists per logger; it is replaced whole by
/// `configure_log_file` and destroyed by `clean_up` or drop. Writes are
/// unbuffered so that a completed emission is on disk immediately.
#[derive(Debug)]
pub struct LogSink {
    file: File,
    mode: LogFileMode,
    path: PathBuf,
}

impl LogSink {
    /// Open `path` in the given mode.
    ///
    /// `Write` creates or truncates the target. `Append` opens an existing
    /// file only; a missing target fails with [`io::ErrorKind::NotFound`]
    /// so the caller can decide on the fallback.
    pub fn open(path: impl AsRef<Path>, mode: LogFileMode) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = match mode {
            LogFileMode::Write => File::create(&path)?,
            LogFileMode::Append => OpenOptions::new().append(true).open(&path)?,
        };
        Ok(Self { file, mode, path })
    }

    /// The mode this sink was opened with.
    #[must_use]
    pub fn mode(&self) -> LogFileMode {
        self.mode
    }

    /// The path this sink was opened with.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write already-formatted plain text verbatim.
    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.file.write_all(text.as_bytes())
    }
}
