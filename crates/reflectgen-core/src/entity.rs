//! Entities collected from annotated headers.

use std::path::{Path, PathBuf};

use crate::QualifiedName;

/// A reflected member or function: the name the runtime knows it by and
/// the C++ identifier it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Name passed to the reflection runtime.
    pub registration_name: String,
    /// Identifier as declared in the header.
    pub identifier: String,
}

impl Binding {
    /// Create a binding. An empty `registration_name` falls back to the
    /// identifier.
    pub fn new(registration_name: impl Into<String>, identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        let registration_name = registration_name.into();
        let registration_name = if registration_name.is_empty() {
            identifier.clone()
        } else {
            registration_name
        };
        Self {
            registration_name,
            identifier,
        }
    }

    /// Create a binding registered under its own identifier.
    pub fn same(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into();
        Self {
            registration_name: identifier.clone(),
            identifier,
        }
    }
}

/// A class or struct found in a header.
///
/// Classes only reach the generated code when a class marker gave them a
/// registration name; unmarked classes are still tracked so nested scopes
/// qualify correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntity {
    qualified_name: QualifiedName,
    header: PathBuf,
    registration_name: Option<String>,
    members: Vec<Binding>,
    functions: Vec<Binding>,
}

impl ClassEntity {
    pub fn new(qualified_name: QualifiedName, header: impl Into<PathBuf>) -> Self {
        Self {
            qualified_name,
            header: header.into(),
            registration_name: None,
            members: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Simple class name.
    pub fn name(&self) -> &str {
        self.qualified_name.simple_name()
    }

    pub fn qualified_name(&self) -> &QualifiedName {
        &self.qualified_name
    }

    /// Header the class was declared in.
    pub fn header(&self) -> &Path {
        &self.header
    }

    pub fn registration_name(&self) -> Option<&str> {
        self.registration_name.as_deref()
    }

    /// Whether a class marker was seen for this class.
    pub fn is_registered(&self) -> bool {
        self.registration_name.is_some()
    }

    pub fn members(&self) -> &[Binding] {
        &self.members
    }

    pub fn functions(&self) -> &[Binding] {
        &self.functions
    }

    /// Set the registration name from a class marker. `None` registers the
    /// class under its qualified name.
    pub fn mark_registered(&mut self, explicit: Option<String>) {
        let name = explicit.unwrap_or_else(|| self.qualified_name.to_string());
        self.registration_name = Some(name);
    }

    pub fn add_member(&mut self, binding: Binding) {
        self.members.push(binding);
    }

    pub fn add_function(&mut self, binding: Binding) {
        self.functions.push(binding);
    }
}
