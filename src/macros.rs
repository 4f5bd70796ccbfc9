//! Logging macros for ergonomic message formatting.
//!
//! These macros provide a convenient interface for emitting messages
//! with automatic string formatting, similar to `println!` and
//! `format!`. Each accepts an optional `ctx:` argument that becomes the
//! message's context tag.
//!
//! # Examples
//!
//! ```
//! use message_logger::prelude::*;
//! use message_logger::{info, success};
//!
//! let logger = Logger::new();
//!
//! // Basic emission
//! info!(logger, "Server started\n");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}\n", port);
//!
//! // With a context tag
//! success!(logger, ctx: "Startup", "Loaded {} routes\n", 12);
//! ```

/// Emit a default-category message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use message_logger::prelude::*;
/// # let logger = Logger::new();
/// use message_logger::message;
/// message!(logger, "Processing {} items\n", 100);
/// message!(logger, ctx: "Worker", "batch finished\n");
/// ```
#[macro_export]
macro_rules! message {
    ($logger:expr, ctx: $context:expr, $($arg:tt)+) => {
        $logger.message(Some($context), format!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.message(None, format!($($arg)+))
    };
}

/// Emit an info message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use message_logger::prelude::*;
/// # let logger = Logger::new();
/// use message_logger::info;
/// info!(logger, "Application started\n");
/// info!(logger, ctx: "Config", "using profile {}\n", "release");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, ctx: $context:expr, $($arg:tt)+) => {
        $logger.info(Some($context), format!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(None, format!($($arg)+))
    };
}

/// Emit a success message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use message_logger::prelude::*;
/// # let logger = Logger::new();
/// use message_logger::success;
/// success!(logger, "All checks passed\n");
/// success!(logger, ctx: "Main", "Thread {} finished!\n", 1);
/// ```
#[macro_export]
macro_rules! success {
    ($logger:expr, ctx: $context:expr, $($arg:tt)+) => {
        $logger.success(Some($context), format!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.success(None, format!($($arg)+))
    };
}

/// Emit a warning message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use message_logger::prelude::*;
/// # let logger = Logger::new();
/// use message_logger::warning;
/// warning!(logger, "Low disk space\n");
/// warning!(logger, ctx: "Retry", "attempt {} of {}\n", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, ctx: $context:expr, $($arg:tt)+) => {
        $logger.warning(Some($context), format!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(None, format!($($arg)+))
    };
}

/// Emit an error message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use message_logger::prelude::*;
/// # let logger = Logger::new();
/// use message_logger::error;
/// error!(logger, "Failed to connect to database\n");
/// error!(logger, ctx: "Net", "error code {}\n", 500);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, ctx: $context:expr, $($arg:tt)+) => {
        $logger.error(Some($context), format!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(None, format!($($arg)+))
    };
}
