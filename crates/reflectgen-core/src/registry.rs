//! ClassRegistry - ordered storage for scanned classes.
//!
//! A registry is filled by one header scan, then merged into the run-wide
//! registry. Merging only appends, so headers can be scanned independently
//! and combined afterwards without changing discovery order.

use crate::ClassEntity;

/// Append-only list of classes in discovery order (file order, then
/// textual order within a file).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassRegistry {
    classes: Vec<ClassEntity>,
}

impl ClassRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a class and return its index.
    pub fn push(&mut self, class: ClassEntity) -> usize {
        self.classes.push(class);
        self.classes.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&ClassEntity> {
        self.classes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ClassEntity> {
        self.classes.get_mut(index)
    }

    /// Append every class of `other`, keeping its order.
    pub fn merge(&mut self, other: ClassRegistry) {
        self.classes.extend(other.classes);
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// All classes, registered or not.
    pub fn iter(&self) -> impl Iterator<Item = &ClassEntity> {
        self.classes.iter()
    }

    /// Classes that carry a registration name and will be emitted.
    pub fn registered(&self) -> impl Iterator<Item = &ClassEntity> {
        self.classes.iter().filter(|class| class.is_registered())
    }

    pub fn into_vec(self) -> Vec<ClassEntity> {
        self.classes
    }
}

impl FromIterator<ClassEntity> for ClassRegistry {
    fn from_iter<I: IntoIterator<Item = ClassEntity>>(iter: I) -> Self {
        Self {
            classes: iter.into_iter().collect(),
        }
    }
}

impl Extend<ClassEntity> for ClassRegistry {
    fn extend<I: IntoIterator<Item = ClassEntity>>(&mut self, iter: I) {
        self.classes.extend(iter);
    }
}

impl IntoIterator for ClassRegistry {
    type Item = ClassEntity;
    type IntoIter = std::vec::IntoIter<ClassEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClassRegistry {
    type Item = &'a ClassEntity;
    type IntoIter = std::slice::Iter<'a, ClassEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}
