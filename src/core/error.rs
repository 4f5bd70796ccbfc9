//! Error types for the message logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A required argument was absent or outside its documented bounds
    #[error("Invalid argument for {operation}: {message}")]
    InvalidArgument { operation: String, message: String },

    /// Log file could not be opened in the requested or fallback mode
    #[error("IO error for '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Lock primitive could not be allocated or initialized
    #[error("Resource error: {message}")]
    Resource { message: String },
}

impl LoggerError {
    /// Create an invalid argument error
    pub fn invalid_argument(operation: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidArgument {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create an IO error with the path it concerns
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a resource error
    pub fn resource(message: impl Into<String>) -> Self {
        LoggerError::Resource {
            message: message.into(),
        }
    }
}
