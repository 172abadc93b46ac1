//! Storage error types for climb-store.

use std::path::PathBuf;

use climb_core::CoreError;
use thiserror::Error;

/// Errors from encoding or decoding the record stream.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A value is too wide for its fixed slot.
    #[error("{field} needs {len} bytes but its slot holds {width}")]
    FieldOverflow {
        field: &'static str,
        len: usize,
        width: usize,
    },

    /// An integer slot did not hold decimal digits.
    #[error("{field} slot holds `{raw}`, expected a decimal number")]
    InvalidInteger { field: &'static str, raw: String },

    /// A text slot was not valid UTF-8.
    #[error("{field} slot is not valid UTF-8")]
    InvalidText { field: &'static str },

    /// A tag slot held something no encoder ever writes.
    #[error("unknown {field} tag `{tag}`")]
    UnknownTag { field: &'static str, tag: String },

    /// A decoded record violated a model invariant.
    #[error("climb record {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: CoreError,
    },

    /// Reading or writing the underlying stream failed (including short reads).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from loading or saving the store file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file could not be opened for reading.
    #[error("failed to open store at {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file could not be created or truncated for writing.
    #[error("failed to create store at {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents could not be decoded.
    #[error("store at {} is unreadable: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// The collection could not be encoded into the file.
    #[error("failed to write store at {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },
}
