//! Error types for the site binary and library.

use thiserror::Error;

/// Site error type.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Configuration could not be assembled or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Writing the rendered document failed.
    #[error("Failed to write {path}: {source}")]
    Export {
        /// Destination path.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The listener could not bind.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Requested socket address.
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Result type alias for site operations.
pub type Result<T> = std::result::Result<T, SiteError>;
