//! Error types for installer operations.
//!
//! This module defines [`InstallError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every fatal condition is an `InstallError` returned up to `main`, which
//!   prints it and exits non-zero
//! - Soft failures (unreadable OS metadata, a version command that prints
//!   nothing) never become errors; callers fall back to placeholders
//! - Use `anyhow::Error` (via `InstallError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for installer operations.
#[derive(Debug, Error)]
pub enum InstallError {
    /// An external command could not be spawned or exited non-zero.
    #[error("Command failed{}: {command}", exit_suffix(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        /// Captured stdout/stderr, empty when output was streamed.
        output: String,
    },

    /// A download produced no file, or an empty one.
    #[error("Download failed for {}", .artifact.display())]
    DownloadFailed { artifact: PathBuf },

    /// A tool name outside the catalog was requested.
    #[error("Unknown tool '{name}' (expected one of: {known})")]
    UnknownTool { name: String, known: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit code {})", code),
        None => String::new(),
    }
}

/// Result type alias for installer operations.
pub type Result<T> = std::result::Result<T, InstallError>;
