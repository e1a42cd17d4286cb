//! Error types for loading and saving annotation documents.
//!
//! Exactly two kinds exist: I/O failures and decode failures. There is no
//! semantic-validation kind — this crate never checks `Validation` rules,
//! identifier uniqueness, or group references. Lookups never error; a miss
//! is an empty result.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnnotationError {
    /// The underlying filesystem call failed; carries the offending path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed JSON, or a value whose type does not match the declared
    /// field type. `serde_json` reports the line and column of the offender.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnnotationError>;
