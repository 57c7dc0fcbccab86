//! Error types.
//!
//! The optimization core performs no I/O and either fails fast before the
//! run starts or runs to completion, so every variant here is a pre-flight
//! failure: bad instance data, bad configuration, or an application-shell
//! file problem.

use std::path::PathBuf;

/// Crate-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The instance has no cities at all.
    #[error("instance must contain at least one city")]
    EmptyInstance,

    /// The city-name list and the coordinate/tour list disagree in length.
    #[error("input size mismatch: {names} city names, {coords} coordinates")]
    SizeMismatch { names: usize, coords: usize },

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Reading or writing a file failed.
    #[error("{}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of the city file could not be parsed.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Writing a result CSV failed.
    #[error("{}: {}", path.display(), source)]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
