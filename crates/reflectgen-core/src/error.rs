//! Error types shared by the scanner and the generator.

use std::path::PathBuf;

use thiserror::Error;

use crate::MarkerKind;

/// Errors raised while configuring a scanner or reading headers.
///
/// Malformed annotations are never errors: the scanner drops what it cannot
/// resolve. Only configuration and I/O problems surface here.
#[derive(Debug, Error)]
pub enum ReflectError {
    /// A marker name is not a plain identifier.
    #[error("invalid {kind:?} marker '{name}': expected a C++ identifier")]
    InvalidMarker { kind: MarkerKind, name: String },

    /// A header could not be read.
    #[error("failed to read header {}: {source}", path.display())]
    ReadHeader {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ReflectResult<T> = Result<T, ReflectError>;
