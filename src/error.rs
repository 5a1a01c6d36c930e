//! Error types and exit codes for embernav
//!
//! Core queries never produce these: "no root found", "no matching file",
//! and "no resolvable URL" are normal absent results. The error type exists
//! for CLI plumbing (unreadable manifests, malformed URLs, IO).

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for embernav operations
#[derive(Error, Debug)]
pub enum EmberNavError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid project manifest {path}: {message}")]
    ManifestError { path: String, message: String },

    #[error("Invalid name index {path}: {message}")]
    IndexError { path: String, message: String },

    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EmberNavError {
    /// Convert error to appropriate exit code:
    /// - 0: Success
    /// - 1: File not found / IO error
    /// - 2: Bad project manifest
    /// - 3: Bad name index
    /// - 4: Malformed URL
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(1),
            Self::Io(_) => ExitCode::from(1),
            Self::ManifestError { .. } => ExitCode::from(2),
            Self::IndexError { .. } => ExitCode::from(3),
            Self::InvalidUrl { .. } => ExitCode::from(4),
        }
    }
}

/// Result type alias for embernav operations
pub type Result<T> = std::result::Result<T, EmberNavError>;
