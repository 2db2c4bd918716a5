//! Core data model for reflectgen.
//!
//! This crate holds the types shared between the header scanner and the code
//! generator:
//! - [`QualifiedName`] - scoped class names as written in generated code
//! - [`ClassEntity`] and [`Binding`] - classes with their reflected members
//!   and functions
//! - [`ClassRegistry`] - ordered, append-only class storage
//! - [`MarkerSet`] - the names of the reflection markers
//! - [`ReflectError`] - configuration and I/O errors

mod entity;
mod error;
mod markers;
mod qualified_name;
mod registry;

pub use entity::{Binding, ClassEntity};
pub use error::{ReflectError, ReflectResult};
pub use markers::{CLASS_MARKER, FUNCTION_MARKER, MEMBER_MARKER, MarkerKind, MarkerSet};
pub use qualified_name::QualifiedName;
pub use registry::ClassRegistry;
