//! Reflection registration generator for annotated C++ headers.
//!
//! Headers mark classes, data members and member functions with
//! `REFLECT_CLASS`, `REFLECT_MEMBER` and `REFLECT_FUNCTION`. reflectgen scans
//! them and writes one C++ source file that registers everything with the
//! runtime reflection system.
//!
//! # Example
//!
//! ```no_run
//! use reflectgen::{Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig::builder()
//!     .root("engine/runtime/include")
//!     .output_dir("engine/runtime/generated")
//!     .build()?;
//!
//! let summary = Generator::new(config)?.run()?;
//! println!("registered {} classes", summary.registered);
//! # Ok::<(), reflectgen::GenerateError>(())
//! ```

pub mod codegen;
pub mod config;
pub mod discover;
mod error;
mod generator;

pub use config::{GeneratorConfig, GeneratorConfigBuilder, OutputLayout};
pub use error::{GenerateError, GenerateResult};
pub use generator::{GenerateSummary, Generator, write_output};

pub use reflectgen_core::{
    Binding, ClassEntity, ClassRegistry, MarkerSet, QualifiedName, ReflectError,
};
pub use reflectgen_scanner::HeaderScanner;
