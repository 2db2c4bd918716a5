//! Reflection metadata extraction.
//!
//! Runs on every line that sits inside a class body and attaches what the
//! markers on that line (or on earlier lines still pending) describe to the
//! innermost class.

use tracing::trace;

use reflectgen_core::{Binding, ClassEntity, MarkerKind, MarkerSet, ReflectResult};

use crate::extract::{function_identifier, is_transparent_line, member_identifier};
use crate::macro_args::MacroPattern;
use crate::scope::ClassFrame;

/// Applies the three reflection markers to class bodies.
#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    class: MacroPattern,
    member: MacroPattern,
    function: MacroPattern,
}

impl MetadataExtractor {
    pub fn new(markers: &MarkerSet) -> ReflectResult<Self> {
        markers.validate()?;
        Ok(Self {
            class: MacroPattern::new(MarkerKind::Class, &markers.class)?,
            member: MacroPattern::new(MarkerKind::Member, &markers.member)?,
            function: MacroPattern::new(MarkerKind::Function, &markers.function)?,
        })
    }

    /// Pattern of the class marker.
    pub fn class_marker(&self) -> &MacroPattern {
        &self.class
    }

    /// Process one line of the class described by `frame`/`class`.
    pub fn process_line(&self, line: &str, frame: &mut ClassFrame, class: &mut ClassEntity) {
        let has_member_marker = self.member.occurs_in(line);
        let has_function_marker = self.function.occurs_in(line);

        if self.class.occurs_in(line) {
            let explicit = self
                .class
                .explicit_name(line)
                .filter(|name| !name.is_empty());
            class.mark_registered(explicit);
            trace!(
                class = %class.qualified_name(),
                registration = class.registration_name().unwrap_or_default(),
                "class marker"
            );
        }

        if has_member_marker {
            let explicit = self.member.explicit_name(line).unwrap_or_default();
            match member_identifier(&self.strip_markers(line)) {
                Some(identifier) => add_member(class, Binding::new(explicit, identifier)),
                None => {
                    trace!(
                        class = %class.qualified_name(),
                        "member marker waiting for declaration"
                    );
                    frame.pending_member = Some(explicit);
                }
            }
        }

        if has_function_marker {
            let explicit = self.function.explicit_name(line).unwrap_or_default();
            match function_identifier(&self.strip_markers(line)) {
                Some(identifier) => add_function(class, Binding::new(explicit, identifier)),
                None => {
                    trace!(
                        class = %class.qualified_name(),
                        "function marker waiting for declaration"
                    );
                    frame.pending_function = Some(explicit);
                }
            }
        }

        if !has_member_marker && frame.pending_member.is_some() && !is_transparent_line(line) {
            if let Some(identifier) = member_identifier(&self.strip_markers(line)) {
                let explicit = frame.pending_member.take().unwrap_or_default();
                add_member(class, Binding::new(explicit, identifier));
            }
        }

        if !has_function_marker && frame.pending_function.is_some() && !is_transparent_line(line) {
            if let Some(identifier) = function_identifier(&self.strip_markers(line)) {
                let explicit = frame.pending_function.take().unwrap_or_default();
                add_function(class, Binding::new(explicit, identifier));
            }
        }
    }

    /// Remove every marker invocation from the line.
    fn strip_markers(&self, line: &str) -> String {
        [&self.class, &self.member, &self.function]
            .into_iter()
            .fold(line.to_string(), |text, pattern| {
                pattern.strip(&text).into_owned()
            })
    }
}

fn add_member(class: &mut ClassEntity, binding: Binding) {
    trace!(
        class = %class.qualified_name(),
        registration = %binding.registration_name,
        identifier = %binding.identifier,
        "member"
    );
    class.add_member(binding);
}

fn add_function(class: &mut ClassEntity, binding: Binding) {
    trace!(
        class = %class.qualified_name(),
        registration = %binding.registration_name,
        identifier = %binding.identifier,
        "function"
    );
    class.add_function(binding);
}
