use std::fmt;

/// Fully scoped name of a C++ class as it must be spelled in generated code.
///
/// The scope holds every enclosing namespace and outer class, outermost
/// first. Chained namespaces (`namespace A::B {`) contribute one segment per
/// component.
///
/// # Examples
///
/// ```
/// use reflectgen_core::QualifiedName;
///
/// let player = QualifiedName::global("Player");
/// assert_eq!(player.to_string(), "Player");
///
/// let entity = QualifiedName::new("Entity", vec!["Game".into(), "Core".into()]);
/// assert_eq!(entity.to_string(), "Game::Core::Entity");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Simple name (e.g., "Player")
    pub name: String,
    /// Enclosing namespaces and classes, outermost first.
    /// Empty for the global namespace.
    pub scope: Vec<String>,
}

impl QualifiedName {
    /// Create a qualified name inside the given scope.
    pub fn new(name: impl Into<String>, scope: Vec<String>) -> Self {
        Self {
            name: name.into(),
            scope,
        }
    }

    /// Create a qualified name in the global namespace.
    pub fn global(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scope: Vec::new(),
        }
    }

    /// Build a name from scope segments that may themselves be chained
    /// (`"B::C"`), splitting them on `::`.
    pub fn from_segments<'a, I>(segments: I, name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let scope = segments
            .into_iter()
            .flat_map(|segment| segment.split("::"))
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            name: name.into(),
            scope,
        }
    }

    /// Get the simple (unqualified) name.
    pub fn simple_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scope.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}::{}", self.scope.join("::"), self.name)
        }
    }
}
