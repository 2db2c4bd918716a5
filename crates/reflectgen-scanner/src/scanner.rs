//! Header scanning.
//!
//! [`HeaderScanner`] turns the text of one header into the classes it
//! declares. All state lives in a [`ScannerState`] folded over the cleaned
//! lines, so headers can be scanned independently of each other.

use std::fs;
use std::path::Path;

use tracing::debug;

use reflectgen_core::{ClassRegistry, MarkerSet, ReflectError, ReflectResult};

use crate::metadata::MetadataExtractor;
use crate::normalize::clean_lines;
use crate::scope::{BraceCount, ScopeTracker};

/// Scanner for annotated C++ headers.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use reflectgen_scanner::HeaderScanner;
///
/// let scanner = HeaderScanner::new().unwrap();
/// let source = r#"
/// namespace game {
/// class Player {
///     REFLECT_CLASS("Player")
///     REFLECT_MEMBER()
///     int health = 100;
/// };
/// }
/// "#;
///
/// let classes = scanner.scan_source(Path::new("player.hpp"), source);
/// let player = classes.get(0).unwrap();
/// assert_eq!(player.qualified_name().to_string(), "game::Player");
/// assert_eq!(player.members()[0].identifier, "health");
/// ```
#[derive(Debug, Clone)]
pub struct HeaderScanner {
    extractor: MetadataExtractor,
}

/// Per-header scanning state.
struct ScannerState<'s, 'h> {
    header: &'h Path,
    scopes: ScopeTracker<'s>,
    registry: ClassRegistry,
}

impl HeaderScanner {
    /// Create a scanner for the default `REFLECT_*` markers.
    pub fn new() -> ReflectResult<Self> {
        Self::with_markers(&MarkerSet::default())
    }

    /// Create a scanner for a custom marker set.
    pub fn with_markers(markers: &MarkerSet) -> ReflectResult<Self> {
        let extractor = MetadataExtractor::new(markers)?;
        Ok(Self { extractor })
    }

    /// Whether a header can declare a reflected class at all.
    ///
    /// Files that never mention the class marker are skipped without being
    /// scanned.
    pub fn needs_scan(&self, source: &str) -> bool {
        source.contains(self.extractor.class_marker().name())
    }

    /// Read and scan a header file.
    pub fn scan_file(&self, path: &Path) -> ReflectResult<ClassRegistry> {
        let source = fs::read_to_string(path).map_err(|source| ReflectError::ReadHeader {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.scan_source(path, &source))
    }

    /// Scan header text. `header` is recorded on every class found.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn scan_source(&self, header: &Path, source: &str) -> ClassRegistry {
        if !self.needs_scan(source) {
            debug!(header = %header.display(), "no class marker, skipping");
            return ClassRegistry::new();
        }

        let lines = clean_lines(source);
        let state = ScannerState {
            header,
            scopes: ScopeTracker::new(self.extractor.class_marker()),
            registry: ClassRegistry::new(),
        };
        let state = lines.iter().fold(state, |mut state, line| {
            self.scan_line(&mut state, line);
            state
        });

        debug!(
            header = %header.display(),
            classes = state.registry.len(),
            registered = state.registry.registered().count(),
            "scanned header"
        );
        state.registry
    }

    fn scan_line(&self, state: &mut ScannerState<'_, '_>, line: &str) {
        let braces = BraceCount::of(line);
        let marker_consumed = state
            .scopes
            .open_scopes(line, braces, state.header, &mut state.registry);

        if !marker_consumed {
            if let Some(frame) = state.scopes.innermost_class_mut() {
                if let Some(class) = state.registry.get_mut(frame.class) {
                    self.extractor.process_line(line, frame, class);
                }
            }
        }

        state.scopes.close_scopes(braces, &state.registry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflectgen_core::ClassEntity;

    fn scan(source: &str) -> Vec<ClassEntity> {
        HeaderScanner::new()
            .unwrap()
            .scan_source(Path::new("include/test.hpp"), source)
            .into_vec()
    }

    fn pairs(bindings: &[reflectgen_core::Binding]) -> Vec<(&str, &str)> {
        bindings
            .iter()
            .map(|b| (b.registration_name.as_str(), b.identifier.as_str()))
            .collect()
    }

    #[test]
    fn single_line_class() {
        let classes = scan("class Foo { REFLECT_CLASS(); REFLECT_MEMBER() int x; };");
        assert_eq!(classes.len(), 1);
        let foo = &classes[0];
        assert_eq!(foo.name(), "Foo");
        assert_eq!(foo.registration_name(), Some("Foo"));
        assert_eq!(pairs(foo.members()), [("x", "x")]);
    }

    #[test]
    fn marker_in_front_of_class_keyword() {
        let classes = scan(concat!(
            "namespace NS {\n",
            "REFLECT_CLASS(\"Bar\") class Foo {\n",
            "    REFLECT_MEMBER() int x;\n",
            "};\n",
            "}\n",
        ));
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].qualified_name().to_string(), "NS::Foo");
        assert_eq!(classes[0].registration_name(), Some("Bar"));
    }

    #[test]
    fn member_override_on_previous_line() {
        let classes = scan(concat!(
            "class Counter {\n",
            "    REFLECT_CLASS()\n",
            "    REFLECT_MEMBER(\"count\")\n",
            "    int m_count;\n",
            "};\n",
        ));
        assert_eq!(pairs(classes[0].members()), [("count", "m_count")]);
    }

    #[test]
    fn forward_declaration_produces_nothing() {
        let classes = scan("REFLECT_CLASS()\nclass Foo;\n");
        assert!(classes.is_empty());
    }

    #[test]
    fn function_markers() {
        let classes = scan(concat!(
            "class Foo {\n",
            "    REFLECT_CLASS()\n",
            "    REFLECT_FUNCTION() void DoThing(int a);\n",
            "    REFLECT_FUNCTION(\"Check\")\n",
            "    if (x) {\n",
            "    }\n",
            "    bool check() const;\n",
            "};\n",
        ));
        assert_eq!(
            pairs(classes[0].functions()),
            [("DoThing", "DoThing"), ("Check", "check")]
        );
    }

    #[test]
    fn file_without_class_marker_is_skipped() {
        let classes = scan("class Foo {\n    REFLECT_MEMBER() int x;\n};\n");
        assert!(classes.is_empty());
    }

    #[test]
    fn unmarked_classes_are_kept_unregistered() {
        let classes = scan(concat!(
            "class Plain {\n",
            "    REFLECT_MEMBER() int x;\n",
            "};\n",
            "class Marked {\n",
            "    REFLECT_CLASS()\n",
            "};\n",
        ));
        assert_eq!(classes.len(), 2);
        assert!(!classes[0].is_registered());
        assert_eq!(pairs(classes[0].members()), [("x", "x")]);
        assert!(classes[1].is_registered());
    }

    #[test]
    fn markers_in_comments_are_ignored() {
        let classes = scan(concat!(
            "class Foo {\n",
            "    REFLECT_CLASS()\n",
            "    // REFLECT_MEMBER() int commented;\n",
            "    /* REFLECT_MEMBER()\n",
            "       int also_commented; */\n",
            "    int plain;\n",
            "};\n",
        ));
        assert!(classes[0].members().is_empty());
    }

    #[test]
    fn members_after_class_close_do_not_attach() {
        let classes = scan(concat!(
            "class Foo {\n",
            "    REFLECT_CLASS()\n",
            "    REFLECT_MEMBER()\n",
            "};\n",
            "int stray;\n",
        ));
        assert!(classes[0].members().is_empty());
    }

    #[test]
    fn nested_class_bindings_go_to_innermost_class() {
        let classes = scan(concat!(
            "namespace wen {\n",
            "class Outer {\n",
            "    REFLECT_CLASS()\n",
            "    struct Inner {\n",
            "        REFLECT_CLASS(\"Inner\")\n",
            "        REFLECT_MEMBER() float weight;\n",
            "    };\n",
            "    REFLECT_MEMBER() int count;\n",
            "};\n",
            "}\n",
        ));
        let names: Vec<_> = classes
            .iter()
            .map(|class| class.qualified_name().to_string())
            .collect();
        assert_eq!(names, ["wen::Outer", "wen::Outer::Inner"]);
        assert_eq!(classes[0].registration_name(), Some("wen::Outer"));
        assert_eq!(pairs(classes[0].members()), [("count", "count")]);
        assert_eq!(pairs(classes[1].members()), [("weight", "weight")]);
    }

    #[test]
    fn marked_nested_class_head_split_from_its_brace() {
        let classes = scan(concat!(
            "class Outer {\n",
            "    REFLECT_CLASS()\n",
            "    REFLECT_CLASS(\"Bar\") struct Inner : public Base\n",
            "    {\n",
            "        REFLECT_MEMBER() int x;\n",
            "    };\n",
            "};\n",
        ));
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].qualified_name().to_string(), "Outer");
        assert_eq!(classes[0].registration_name(), Some("Outer"));
        assert!(classes[0].members().is_empty());
        assert_eq!(classes[1].qualified_name().to_string(), "Outer::Inner");
        assert_eq!(classes[1].registration_name(), Some("Bar"));
        assert_eq!(pairs(classes[1].members()), [("x", "x")]);
    }

    #[test]
    fn scan_file_reports_missing_header() {
        let scanner = HeaderScanner::new().unwrap();
        let err = scanner
            .scan_file(Path::new("does/not/exist.hpp"))
            .unwrap_err();
        assert!(matches!(err, ReflectError::ReadHeader { .. }));
    }

    #[test]
    fn scanning_twice_gives_equal_results() {
        let source = "class Foo {\n    REFLECT_CLASS()\n    REFLECT_MEMBER() int x;\n};\n";
        assert_eq!(scan(source), scan(source));
    }
}
