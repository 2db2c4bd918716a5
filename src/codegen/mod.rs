//! C++ registration source generation.
//!
//! Turns scanned classes into one translation unit that registers every
//! class carrying a registration name with the runtime reflection system.
//! Classes without a class marker are left out, and each header is
//! included once, in the order its first registered class was found.

mod emitter;

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use reflectgen_core::ClassRegistry;

use crate::config::OutputLayout;

pub use emitter::RegistrationEmitter;

/// Generate the registration source for `classes`.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn generate(classes: &ClassRegistry, roots: &[PathBuf], layout: &OutputLayout) -> String {
    let includes = collect_includes(classes, roots);

    let mut emitter = RegistrationEmitter::new(layout);
    emitter.emit_preamble(&includes);
    emitter.open_entry();
    for class in classes.registered() {
        emitter.emit_class(class);
    }
    emitter.finish()
}

/// Distinct include paths of the headers declaring registered classes, in
/// first-seen order.
pub fn collect_includes(classes: &ClassRegistry, roots: &[PathBuf]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    classes
        .registered()
        .map(|class| include_path(class.header(), roots))
        .filter(|include| seen.insert(include.clone()))
        .collect()
}

/// Path used to `#include` a header.
///
/// Separators are normalized to `/`, then the first root that is a
/// directory prefix of the header is removed. Headers outside every root
/// keep their full path.
pub fn include_path(header: &Path, roots: &[PathBuf]) -> String {
    let normalized = normalize_separators(header);
    roots
        .iter()
        .find_map(|root| {
            let root = normalize_separators(root);
            let prefix = format!("{}/", root.trim_end_matches('/'));
            normalized.strip_prefix(&prefix).map(str::to_string)
        })
        .unwrap_or(normalized)
}

fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
