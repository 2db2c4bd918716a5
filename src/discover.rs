//! Header discovery under the configured roots.

use std::path::PathBuf;

use rustc_hash::FxHashSet;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::GeneratorConfig;
use crate::error::GenerateResult;

/// Every header under the configured roots.
///
/// Roots are walked in order, each sorted by file name, so the result is
/// stable across runs. A header reachable from several roots is listed once,
/// under the first root that reaches it. Roots that are not directories are
/// skipped with a warning.
pub fn discover_headers(config: &GeneratorConfig) -> GenerateResult<Vec<PathBuf>> {
    let mut seen = FxHashSet::default();
    let mut headers = Vec::new();

    for root in &config.roots {
        if !root.is_dir() {
            warn!(root = %root.display(), "header root is not a directory, skipping");
            continue;
        }

        let before = headers.len();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() || !config.is_header(entry.path()) {
                continue;
            }
            let path = entry.into_path();
            if seen.insert(path.clone()) {
                headers.push(path);
            }
        }
        debug!(
            root = %root.display(),
            headers = headers.len() - before,
            "discovered headers"
        );
    }

    Ok(headers)
}
