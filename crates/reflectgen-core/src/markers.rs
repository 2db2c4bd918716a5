use crate::error::{ReflectError, ReflectResult};

/// Default class marker.
pub const CLASS_MARKER: &str = "REFLECT_CLASS";
/// Default member marker.
pub const MEMBER_MARKER: &str = "REFLECT_MEMBER";
/// Default function marker.
pub const FUNCTION_MARKER: &str = "REFLECT_FUNCTION";

/// The kind of declaration a marker annotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Class,
    Member,
    Function,
}

/// Names of the three reflection markers recognised in headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    pub class: String,
    pub member: String,
    pub function: String,
}

impl MarkerSet {
    pub fn new(
        class: impl Into<String>,
        member: impl Into<String>,
        function: impl Into<String>,
    ) -> Self {
        Self {
            class: class.into(),
            member: member.into(),
            function: function.into(),
        }
    }

    /// Marker name for a kind.
    pub fn name(&self, kind: MarkerKind) -> &str {
        match kind {
            MarkerKind::Class => &self.class,
            MarkerKind::Member => &self.member,
            MarkerKind::Function => &self.function,
        }
    }

    /// All markers with their kind, class marker first.
    pub fn iter(&self) -> impl Iterator<Item = (MarkerKind, &str)> {
        [MarkerKind::Class, MarkerKind::Member, MarkerKind::Function]
            .into_iter()
            .map(|kind| (kind, self.name(kind)))
    }

    /// Check every marker is a plain C++ identifier.
    pub fn validate(&self) -> ReflectResult<()> {
        for (kind, name) in self.iter() {
            if !is_identifier(name) {
                return Err(ReflectError::InvalidMarker {
                    kind,
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::new(CLASS_MARKER, MEMBER_MARKER, FUNCTION_MARKER)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_markers() {
        let markers = MarkerSet::default();
        assert_eq!(markers.name(MarkerKind::Class), "REFLECT_CLASS");
        assert_eq!(markers.name(MarkerKind::Member), "REFLECT_MEMBER");
        assert_eq!(markers.name(MarkerKind::Function), "REFLECT_FUNCTION");
        assert!(markers.validate().is_ok());
    }

    #[test]
    fn iter_orders_class_first() {
        let kinds: Vec<_> = MarkerSet::default().iter().map(|(kind, _)| kind).collect();
        assert_eq!(
            kinds,
            [MarkerKind::Class, MarkerKind::Member, MarkerKind::Function]
        );
    }

    #[test]
    fn rejects_non_identifier_markers() {
        let markers = MarkerSet::new("META", "META FIELD", "META_FN");
        match markers.validate() {
            Err(ReflectError::InvalidMarker { kind, name }) => {
                assert_eq!(kind, MarkerKind::Member);
                assert_eq!(name, "META FIELD");
            }
            other => panic!("expected invalid marker, got {other:?}"),
        }

        assert!(MarkerSet::new("", "A", "B").validate().is_err());
        assert!(MarkerSet::new("1A", "A", "B").validate().is_err());
    }
}
