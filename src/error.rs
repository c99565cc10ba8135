//! Error types for pkg-config queries.
//!
//! This module defines [`PkgConfigError`], the error type shared by the
//! resolver, the descriptor parser and the query command, and a [`Result`]
//! type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Only two failures are terminal for a query: the package is missing from
//!   the search path, or its descriptor cannot be read
//! - Malformed descriptor content is never an error; unknown keys and unset
//!   fields are silently defaulted
//! - Use `anyhow::Error` (via `PkgConfigError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pkg-config operations.
#[derive(Debug, Error)]
pub enum PkgConfigError {
    /// No descriptor exists for the package in any search directory.
    #[error("Package '{name}' not found")]
    PackageNotFound { name: String },

    /// The descriptor was found but could not be fully read.
    #[error("Failed to parse {}: {source}", path.display())]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pkg-config operations.
pub type Result<T> = std::result::Result<T, PkgConfigError>;
