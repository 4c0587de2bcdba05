//! Error types for slog_avp
//!
//! This module defines all error types used throughout the crate. Persistence
//! errors are recovered locally by the handlers and reported to the diagnostic
//! sink; only the file-fallback errors can abort logger construction.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for slog_avp operations
#[derive(Error, Debug)]
pub enum SlogError {
    /// The log or database directory could not be created
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The SQLite store could not be opened or created
    #[error("Failed to open log store {path}: {message}")]
    StoreOpen { path: PathBuf, message: String },

    /// Creating the `logs` table failed
    #[error("Failed to ensure log schema: {0}")]
    Schema(String),

    /// Inserting a row into the store failed
    #[error("Failed to write log row: {0}")]
    Write(String),

    /// `append` was called before a successful `open`
    #[error("Log store connection is not initialized")]
    NotInitialized,

    /// The daily fallback log file could not be opened
    #[error("Failed to open log file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file fallback could not be set up, so the logger has no output at all
    #[error("No log output available: {source}")]
    NoOutput {
        #[source]
        source: Box<SlogError>,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    ConfigFileMissing(String),

    /// I/O errors not covered by a more specific variant
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// TOML parsing errors
    #[error("TOML parsing error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },
}

/// Result type alias for slog_avp operations
pub type Result<T> = std::result::Result<T, SlogError>;

impl SlogError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new schema error
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        Self::Schema(msg.into())
    }

    /// Create a new write error
    pub fn write<S: Into<String>>(msg: S) -> Self {
        Self::Write(msg.into())
    }

    /// Wrap a file-fallback failure
    pub fn no_output(source: SlogError) -> Self {
        Self::NoOutput {
            source: Box::new(source),
        }
    }

    /// Errors that leave the logger without any sink to report through.
    ///
    /// Only the file-fallback path can produce these.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NoOutput { .. })
    }

    /// Get the error category for diagnostics
    pub fn category(&self) -> &'static str {
        match self {
            Self::DirectoryCreation { .. } => "directory",
            Self::StoreOpen { .. }
            | Self::Schema(_)
            | Self::Write(_)
            | Self::NotInitialized => "persistence",
            Self::FileOpen { .. } => "file",
            Self::Config(_) | Self::ConfigFileMissing(_) | Self::Toml { .. } => "config",
            Self::Io { .. } => "io",
            Self::NoOutput { source } => source.category(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let config_err = SlogError::config("Invalid configuration");
        assert!(matches!(config_err, SlogError::Config(_)));
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Invalid configuration"
        );

        let write_err = SlogError::write("disk I/O error");
        assert_eq!(write_err.to_string(), "Failed to write log row: disk I/O error");
    }

    #[test]
    fn test_error_from_conversions() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: SlogError = io_error.into();
        assert!(matches!(err, SlogError::Io { .. }));

        let toml_error = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: SlogError = toml_error.into();
        assert!(matches!(err, SlogError::Toml { .. }));
    }

    #[test]
    fn test_only_missing_output_is_fatal() {
        let file_err = SlogError::FileOpen {
            path: PathBuf::from("log/error-01-01-2024.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!file_err.is_fatal());

        let dir_err = SlogError::DirectoryCreation {
            path: PathBuf::from("log"),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "not a directory"),
        };
        let fatal = SlogError::no_output(dir_err);
        assert!(fatal.is_fatal());
        assert_eq!(fatal.category(), "directory");
        assert!(fatal.to_string().starts_with("No log output available: Failed to create directory log"));
        assert!(std::error::Error::source(&fatal).is_some());

        assert!(!SlogError::NotInitialized.is_fatal());
        assert!(!SlogError::write("locked").is_fatal());
        assert!(!SlogError::schema("bad ddl").is_fatal());
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(SlogError::NotInitialized.category(), "persistence");
        assert_eq!(SlogError::schema("x").category(), "persistence");
        assert_eq!(SlogError::config("x").category(), "config");
        assert_eq!(
            SlogError::DirectoryCreation {
                path: PathBuf::from("log"),
                source: io::Error::new(io::ErrorKind::Other, "nope"),
            }
            .category(),
            "directory"
        );
    }

    #[test]
    fn test_error_chain_keeps_source() {
        let err = SlogError::DirectoryCreation {
            path: PathBuf::from("/root/log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        };
        let error_string = err.to_string();
        assert!(error_string.contains("/root/log"));
        assert!(error_string.contains("Access denied"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
