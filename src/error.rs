//! Error types for anf-config operations.
//!
//! This module defines [`AnfError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `AnfError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `AnfError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for anf-config operations.
#[derive(Debug, Error)]
pub enum AnfError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Field-level input rejected during collection.
    #[error("Invalid value: {message}")]
    ValidationError { message: String },

    /// No tried encoding could decode the file.
    #[error("Could not decode {path} with any supported encoding")]
    EncodingError { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for anf-config operations.
pub type Result<T> = std::result::Result<T, AnfError>;
