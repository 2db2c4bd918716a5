//! Namespace and class nesting.
//!
//! The [`ScopeTracker`] follows a single brace depth counter. Every frame
//! records the depth its body lives at and is popped as soon as the depth
//! drops below it, so one line with several `}` can close several frames.
//!
//! Each line is handled in two halves so the metadata extractor can run in
//! between against the scopes the line opened:
//! 1. [`ScopeTracker::open_scopes`] pushes namespaces and classes using the
//!    depth from before the line.
//! 2. [`ScopeTracker::close_scopes`] applies the line's brace delta and pops.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use reflectgen_core::{ClassEntity, ClassRegistry, QualifiedName};

use crate::macro_args::MacroPattern;

static NAMESPACE_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bnamespace\s+([A-Za-z_]\w*(?:::\w+)*)\s*\{").expect("namespace pattern")
});

static CLASS_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:class|struct)\s+([A-Za-z_]\w*)\b").expect("class pattern")
});

/// `{` and `}` counts of one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BraceCount {
    pub open: usize,
    pub close: usize,
}

impl BraceCount {
    pub fn of(line: &str) -> Self {
        line.chars().fold(Self::default(), |mut count, ch| {
            match ch {
                '{' => count.open += 1,
                '}' => count.close += 1,
                _ => {}
            }
            count
        })
    }

    /// Net depth change.
    pub fn delta(&self) -> isize {
        self.open as isize - self.close as isize
    }
}

/// An open namespace. Chained names (`A::B`) occupy one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceFrame {
    pub name: String,
    /// The frame closes once depth falls below this value.
    pub body_depth: isize,
}

/// An open class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassFrame {
    /// Index of the class in the file's registry.
    pub class: usize,
    /// The frame closes once depth falls below this value.
    pub body_depth: isize,
    /// Override name of a member marker still waiting for its declaration.
    /// An empty string means "use the identifier".
    pub pending_member: Option<String>,
    /// Same as `pending_member`, for function markers.
    pub pending_function: Option<String>,
}

impl ClassFrame {
    fn new(class: usize, body_depth: isize) -> Self {
        Self {
            class,
            body_depth,
            pending_member: None,
            pending_function: None,
        }
    }
}

/// What a `class`/`struct` line declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassDeclaration<'a> {
    /// `class Foo;`
    Forward,
    /// The body brace is on this line.
    Opening(&'a str),
    /// The body brace comes on a later line (base-class lists and such).
    /// `marked` is set when a class marker precedes the keyword.
    Pending { name: &'a str, marked: bool },
}

/// A class head whose body brace has not been seen yet.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingClass {
    name: String,
    /// Set by a class marker in front of the keyword, holding its non-empty
    /// explicit name.
    registration: Option<Option<String>>,
}

/// Depth counter plus the namespace and class stacks of one header.
#[derive(Debug)]
pub struct ScopeTracker<'m> {
    depth: isize,
    namespaces: Vec<NamespaceFrame>,
    classes: Vec<ClassFrame>,
    pending_class: Option<PendingClass>,
    class_marker: &'m MacroPattern,
}

impl<'m> ScopeTracker<'m> {
    /// Create a tracker at depth 0. Invocations of `class_marker` in front
    /// of a `class` keyword do not stop the line from opening a class.
    pub fn new(class_marker: &'m MacroPattern) -> Self {
        Self {
            depth: 0,
            namespaces: Vec::new(),
            classes: Vec::new(),
            pending_class: None,
            class_marker,
        }
    }

    pub fn depth(&self) -> isize {
        self.depth
    }

    pub fn namespaces(&self) -> &[NamespaceFrame] {
        &self.namespaces
    }

    pub fn classes(&self) -> &[ClassFrame] {
        &self.classes
    }

    pub fn pending_class(&self) -> Option<&str> {
        self.pending_class
            .as_ref()
            .map(|pending| pending.name.as_str())
    }

    /// The class whose body the current line is in, if any.
    pub fn innermost_class_mut(&mut self) -> Option<&mut ClassFrame> {
        self.classes.last_mut()
    }

    /// Push the namespaces and classes `line` opens, judged at the depth
    /// from before the line.
    ///
    /// A class that opens on its own line drops any class still pending from
    /// an earlier line.
    ///
    /// Returns `true` when the line's class marker belongs to a class whose
    /// body opens on a later line, so it must not be applied to the
    /// enclosing class.
    pub fn open_scopes(
        &mut self,
        line: &str,
        braces: BraceCount,
        header: &Path,
        registry: &mut ClassRegistry,
    ) -> bool {
        for captures in NAMESPACE_OPENER.captures_iter(line) {
            let name = captures[1].to_string();
            debug!(namespace = %name, depth = self.depth, "opened namespace");
            self.namespaces.push(NamespaceFrame {
                name,
                body_depth: self.depth + 1,
            });
        }

        let mut marker_consumed = false;
        match self.class_declaration(line, braces) {
            Some(ClassDeclaration::Opening(name)) => {
                self.pending_class = None;
                self.open_class(name, header, registry);
            }
            Some(ClassDeclaration::Pending { name, marked }) => {
                let registration = marked.then(|| {
                    self.class_marker
                        .explicit_name(line)
                        .filter(|explicit| !explicit.is_empty())
                });
                marker_consumed = marked;
                self.pending_class = Some(PendingClass {
                    name: name.to_string(),
                    registration,
                });
            }
            Some(ClassDeclaration::Forward) | None => {}
        }

        if braces.open > 0 {
            if let Some(pending) = self.pending_class.take() {
                let index = self.open_class(&pending.name, header, registry);
                if let Some(explicit) = pending.registration {
                    if let Some(class) = registry.get_mut(index) {
                        class.mark_registered(explicit);
                    }
                }
            }
        }
        marker_consumed
    }

    /// Apply the line's brace delta and pop every frame left behind.
    pub fn close_scopes(&mut self, braces: BraceCount, registry: &ClassRegistry) {
        self.depth += braces.delta();

        while self
            .namespaces
            .last()
            .is_some_and(|frame| self.depth < frame.body_depth)
        {
            if let Some(frame) = self.namespaces.pop() {
                debug!(namespace = %frame.name, "closed namespace");
            }
        }

        while self
            .classes
            .last()
            .is_some_and(|frame| self.depth < frame.body_depth)
        {
            let Some(frame) = self.classes.pop() else {
                break;
            };
            if let Some(class) = registry.get(frame.class) {
                debug!(
                    class = %class.qualified_name(),
                    members = class.members().len(),
                    functions = class.functions().len(),
                    "closed class"
                );
                if frame.pending_member.is_some() || frame.pending_function.is_some() {
                    debug!(
                        class = %class.qualified_name(),
                        "class closed with an unresolved marker"
                    );
                }
            }
        }
    }

    fn class_declaration<'l>(
        &self,
        line: &'l str,
        braces: BraceCount,
    ) -> Option<ClassDeclaration<'l>> {
        let text = self.class_marker.skip_leading(line);
        let captures = CLASS_DECLARATION.captures(text)?;
        let name = captures.get(1)?.as_str();

        let declaration = if braces.open > 0 {
            ClassDeclaration::Opening(name)
        } else if line.contains(';') {
            ClassDeclaration::Forward
        } else {
            let marked = text.len() < line.trim_start().len();
            ClassDeclaration::Pending { name, marked }
        };
        Some(declaration)
    }

    fn open_class(&mut self, name: &str, header: &Path, registry: &mut ClassRegistry) -> usize {
        let outer_classes: Vec<&str> = self
            .classes
            .iter()
            .filter_map(|frame| registry.get(frame.class))
            .map(ClassEntity::name)
            .collect();
        let qualified = QualifiedName::from_segments(
            self.namespaces
                .iter()
                .map(|frame| frame.name.as_str())
                .chain(outer_classes),
            name,
        );

        debug!(class = %qualified, depth = self.depth, "opened class");
        let index = registry.push(ClassEntity::new(qualified, header));
        self.classes.push(ClassFrame::new(index, self.depth + 1));
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflectgen_core::MarkerKind;

    fn class_marker() -> MacroPattern {
        MacroPattern::new(MarkerKind::Class, "REFLECT_CLASS").unwrap()
    }

    /// Feed lines through both halves and return the registry.
    fn track(lines: &[&str]) -> (ClassRegistry, isize) {
        let marker = class_marker();
        let mut tracker = ScopeTracker::new(&marker);
        let mut registry = ClassRegistry::new();
        for line in lines {
            let braces = BraceCount::of(line);
            tracker.open_scopes(line, braces, Path::new("test.hpp"), &mut registry);
            tracker.close_scopes(braces, &registry);
        }
        (registry, tracker.depth())
    }

    fn qualified_names(registry: &ClassRegistry) -> Vec<String> {
        registry
            .iter()
            .map(|class| class.qualified_name().to_string())
            .collect()
    }

    #[test]
    fn brace_count() {
        let braces = BraceCount::of("void f() { if (x) { } }}");
        assert_eq!(braces, BraceCount { open: 2, close: 3 });
        assert_eq!(braces.delta(), -1);
    }

    #[test]
    fn class_inside_namespaces() {
        let (registry, depth) = track(&[
            "namespace B::C {",
            "namespace A::D {",
            "class ExampleReflect {",
            "};",
            "}",
            "}",
        ]);
        assert_eq!(qualified_names(&registry), ["B::C::A::D::ExampleReflect"]);
        assert_eq!(depth, 0);
    }

    #[test]
    fn namespaces_on_one_line() {
        let (registry, _) = track(&["namespace a { namespace b {", "struct S {", "};", "} }"]);
        assert_eq!(qualified_names(&registry), ["a::b::S"]);
    }

    #[test]
    fn forward_declaration_is_ignored() {
        let (registry, _) = track(&["class Foo;", "struct Bar;"]);
        assert!(registry.is_empty());
    }

    #[test]
    fn opener_split_across_lines() {
        let marker = class_marker();
        let mut tracker = ScopeTracker::new(&marker);
        let mut registry = ClassRegistry::new();
        let header = Path::new("test.hpp");

        for line in ["class Derived", "    : public Base"] {
            let braces = BraceCount::of(line);
            tracker.open_scopes(line, braces, header, &mut registry);
            tracker.close_scopes(braces, &registry);
        }
        assert_eq!(tracker.pending_class(), Some("Derived"));
        assert!(registry.is_empty());

        let braces = BraceCount::of("{");
        tracker.open_scopes("{", braces, header, &mut registry);
        tracker.close_scopes(braces, &registry);
        assert_eq!(tracker.pending_class(), None);
        assert_eq!(qualified_names(&registry), ["Derived"]);
        assert_eq!(tracker.classes().len(), 1);
        assert_eq!(tracker.depth(), 1);
    }

    #[test]
    fn nested_classes_include_outer_class() {
        let (registry, _) = track(&[
            "namespace wen {",
            "class Outer {",
            "    struct Inner {",
            "    };",
            "};",
            "class Next {",
            "};",
            "}",
        ]);
        assert_eq!(
            qualified_names(&registry),
            ["wen::Outer", "wen::Outer::Inner", "wen::Next"]
        );
    }

    #[test]
    fn several_frames_close_on_one_line() {
        let marker = class_marker();
        let mut tracker = ScopeTracker::new(&marker);
        let mut registry = ClassRegistry::new();
        let header = Path::new("test.hpp");

        for line in ["namespace ns {", "class A {", "struct B {"] {
            let braces = BraceCount::of(line);
            tracker.open_scopes(line, braces, header, &mut registry);
            tracker.close_scopes(braces, &registry);
        }
        assert_eq!(tracker.classes().len(), 2);
        assert_eq!(tracker.namespaces().len(), 1);

        let braces = BraceCount::of("}; }; }");
        tracker.open_scopes("}; }; }", braces, header, &mut registry);
        tracker.close_scopes(braces, &registry);
        assert!(tracker.classes().is_empty());
        assert!(tracker.namespaces().is_empty());
        assert_eq!(tracker.depth(), 0);
    }

    #[test]
    fn class_keyword_must_start_the_line() {
        let (registry, _) = track(&[
            "friend class GameObject;",
            "enum class Mode { A, B };",
            "template <typename T> class Box {",
            "};",
        ]);
        assert!(registry.is_empty());
    }

    #[test]
    fn leading_class_marker_does_not_hide_the_opener() {
        let (registry, _) = track(&[r#"REFLECT_CLASS("Bar") class Foo {"#, "};"]);
        assert_eq!(qualified_names(&registry), ["Foo"]);
    }

    #[test]
    fn member_with_class_keyword_is_a_forward_declaration() {
        let (registry, _) = track(&["class Holder {", "    class GameObject* master_;", "};"]);
        assert_eq!(qualified_names(&registry), ["Holder"]);
    }

    #[test]
    fn marked_class_head_registers_when_body_opens() {
        let marker = class_marker();
        let mut tracker = ScopeTracker::new(&marker);
        let mut registry = ClassRegistry::new();
        let header = Path::new("test.hpp");

        let line = r#"REFLECT_CLASS("Bar") struct Inner : public Base"#;
        let braces = BraceCount::of(line);
        assert!(tracker.open_scopes(line, braces, header, &mut registry));
        tracker.close_scopes(braces, &registry);
        assert_eq!(tracker.pending_class(), Some("Inner"));
        assert!(registry.is_empty());

        let braces = BraceCount::of("{");
        assert!(!tracker.open_scopes("{", braces, header, &mut registry));
        tracker.close_scopes(braces, &registry);
        assert_eq!(qualified_names(&registry), ["Inner"]);
        assert_eq!(registry.get(0).unwrap().registration_name(), Some("Bar"));
    }

    #[test]
    fn class_head_without_marker_stays_unregistered() {
        let (registry, _) = track(&["struct Inner : public Base", "{", "};"]);
        assert!(!registry.get(0).unwrap().is_registered());

        let (registry, _) = track(&["REFLECT_CLASS() struct Inner", "{", "};"]);
        assert_eq!(registry.get(0).unwrap().registration_name(), Some("Inner"));
    }

    #[test]
    fn opening_class_replaces_pending_one() {
        let (registry, _) = track(&["struct Maybe", "struct Real {", "};"]);
        assert_eq!(qualified_names(&registry), ["Real"]);
    }
}
