//! The end-to-end generation pipeline.
//!
//! Discover headers under the configured roots, scan each one on its own,
//! merge the classes in discovery order and write one registration source
//! file. Every header is read before anything is written, so a failed run
//! never leaves a partial output file behind.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use reflectgen_core::ClassRegistry;
use reflectgen_scanner::HeaderScanner;

use crate::codegen;
use crate::config::GeneratorConfig;
use crate::discover::discover_headers;
use crate::error::{GenerateError, GenerateResult};

/// Counts reported after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub headers: usize,
    pub classes: usize,
    pub registered: usize,
    pub output: PathBuf,
}

pub struct Generator {
    config: GeneratorConfig,
    scanner: HeaderScanner,
}

impl Generator {
    /// Create a generator. Fails if the configured markers are invalid.
    pub fn new(config: GeneratorConfig) -> GenerateResult<Self> {
        let scanner = HeaderScanner::with_markers(&config.markers)?;
        Ok(Self { config, scanner })
    }

    /// Scan every header under the configured roots.
    pub fn scan(&self) -> GenerateResult<(usize, ClassRegistry)> {
        let headers = discover_headers(&self.config)?;
        let classes = self.scan_headers(&headers)?;
        Ok((headers.len(), classes))
    }

    /// Scan the given headers in order and merge their classes.
    pub fn scan_headers(&self, headers: &[PathBuf]) -> GenerateResult<ClassRegistry> {
        let mut classes = ClassRegistry::new();
        for header in headers {
            classes.merge(self.scanner.scan_file(header)?);
        }
        Ok(classes)
    }

    /// Registration source for already scanned classes.
    pub fn render(&self, classes: &ClassRegistry) -> String {
        codegen::generate(classes, &self.config.roots, &self.config.layout)
    }

    /// Run the whole pipeline and write the output file.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn run(&self) -> GenerateResult<GenerateSummary> {
        let (headers, classes) = self.scan()?;
        let source = self.render(&classes);
        write_output(&self.config.output, &source)?;

        let summary = GenerateSummary {
            headers,
            classes: classes.len(),
            registered: classes.registered().count(),
            output: self.config.output.clone(),
        };
        info!(
            headers = summary.headers,
            classes = summary.classes,
            registered = summary.registered,
            output = %summary.output.display(),
            "generated reflection registration"
        );
        Ok(summary)
    }
}

/// Write `source` to `path`, creating missing parent directories and
/// replacing any existing file.
pub fn write_output(path: &Path, source: &str) -> GenerateResult<()> {
    let write_error = |source| GenerateError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let parent = path.parent().filter(|dir| !dir.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, source).map_err(write_error)?;
    debug!(path = %path.display(), bytes = source.len(), "wrote output");
    Ok(())
}
