//! Errors raised by the generation pipeline.

use std::path::PathBuf;

use reflectgen_core::ReflectError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Reflect(#[from] ReflectError),

    #[error("failed to walk header root: {0}")]
    Discover(#[from] walkdir::Error),

    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),
}

pub type GenerateResult<T> = Result<T, GenerateError>;
