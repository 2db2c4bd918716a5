//! Generator configuration.
//!
//! [`GeneratorConfig`] gathers everything a run needs: where headers live,
//! where the generated file goes, which markers to look for and the literals
//! that shape the emitted C++. It is built with [`GeneratorConfigBuilder`]:
//!
//! ```
//! use reflectgen::GeneratorConfig;
//!
//! let config = GeneratorConfig::builder()
//!     .root("engine/include")
//!     .output_dir("engine/generated")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     config.output,
//!     std::path::Path::new("engine/generated/auto_generated.cpp")
//! );
//! ```

use std::path::{Path, PathBuf};

use reflectgen_core::MarkerSet;

use crate::error::{GenerateError, GenerateResult};

/// File name used when only an output directory is given.
pub const DEFAULT_OUTPUT_FILE: &str = "auto_generated.cpp";

/// Header file extensions scanned by default.
pub const DEFAULT_HEADER_EXTENSIONS: &[&str] = &["h", "hpp"];

/// Literals of the emitted registration source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    /// Comment lines at the top of the file, without the `//` prefix.
    pub banner: Vec<String>,
    /// Includes emitted before the per-header includes.
    pub framework_includes: Vec<String>,
    /// Name of the generated registration function.
    pub entry_function: String,
    /// Namespace brought into scope inside the function body.
    pub runtime_namespace: String,
    /// Global pointer to the engine context.
    pub context: String,
    /// Field of the context holding the reflection system.
    pub reflect_system: String,
    /// Local variable holding the per-class builder.
    pub class_builder: String,
    pub class_call: String,
    pub member_call: String,
    pub function_call: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            banner: vec![
                "This file is auto-generated by reflectgen.".to_string(),
                "Do not edit manually.".to_string(),
            ],
            framework_includes: vec![
                "engine/global_context.hpp".to_string(),
                "core/reflect/reflect_system.hpp".to_string(),
            ],
            entry_function: "Parser".to_string(),
            runtime_namespace: "wen".to_string(),
            context: "global_context".to_string(),
            reflect_system: "reflect_system".to_string(),
            class_builder: "class_builder".to_string(),
            class_call: "addClass".to_string(),
            member_call: "addMember".to_string(),
            function_call: "addFunction".to_string(),
        }
    }
}

/// Complete configuration of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directories searched for headers. Include paths are made relative to
    /// the first root that contains the header.
    pub roots: Vec<PathBuf>,
    /// Path of the generated source file.
    pub output: PathBuf,
    /// Extensions (without the dot) that mark a file as a header.
    pub header_extensions: Vec<String>,
    pub markers: MarkerSet,
    pub layout: OutputLayout,
}

impl GeneratorConfig {
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Whether `path` carries one of the configured header extensions.
    pub fn is_header(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.header_extensions.iter().any(|known| known == ext))
    }
}

/// Builder for [`GeneratorConfig`].
///
/// At least one root and an output location are required.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    roots: Vec<PathBuf>,
    output: Option<PathBuf>,
    header_extensions: Option<Vec<String>>,
    markers: MarkerSet,
    layout: OutputLayout,
}

impl GeneratorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.roots.push(root.into());
        self
    }

    pub fn roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(roots.into_iter().map(Into::into));
        self
    }

    /// Write the generated source to exactly this file.
    pub fn output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Write the generated source to [`DEFAULT_OUTPUT_FILE`] inside `dir`.
    pub fn output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.output = Some(dir.as_ref().join(DEFAULT_OUTPUT_FILE));
        self
    }

    /// Replace the default header extensions.
    pub fn header_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header_extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    pub fn markers(mut self, markers: MarkerSet) -> Self {
        self.markers = markers;
        self
    }

    pub fn layout(mut self, layout: OutputLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn banner<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layout.banner = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn framework_includes<I, S>(mut self, includes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layout.framework_includes = includes.into_iter().map(Into::into).collect();
        self
    }

    pub fn entry_function<S: Into<String>>(mut self, name: S) -> Self {
        self.layout.entry_function = name.into();
        self
    }

    pub fn runtime_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.layout.runtime_namespace = namespace.into();
        self
    }

    /// Names of the class, member and function registration calls.
    pub fn registration_calls<S: Into<String>>(mut self, class: S, member: S, function: S) -> Self {
        self.layout.class_call = class.into();
        self.layout.member_call = member.into();
        self.layout.function_call = function.into();
        self
    }

    pub fn build(self) -> GenerateResult<GeneratorConfig> {
        if self.roots.is_empty() {
            return Err(GenerateError::MissingConfig("header root"));
        }
        let output = self
            .output
            .ok_or(GenerateError::MissingConfig("output path"))?;
        let header_extensions = self.header_extensions.unwrap_or_else(|| {
            DEFAULT_HEADER_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect()
        });

        Ok(GeneratorConfig {
            roots: self.roots,
            output,
            header_extensions,
            markers: self.markers,
            layout: self.layout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = GeneratorConfig::builder()
            .root("include")
            .output("out/gen.cpp")
            .build()
            .unwrap();

        assert_eq!(config.roots, [PathBuf::from("include")]);
        assert_eq!(config.output, PathBuf::from("out/gen.cpp"));
        assert_eq!(config.header_extensions, ["h", "hpp"]);
        assert_eq!(config.markers, MarkerSet::default());
        assert_eq!(config.layout, OutputLayout::default());
    }

    #[test]
    fn output_dir_uses_default_file_name() {
        let config = GeneratorConfig::builder()
            .root("include")
            .output_dir("gen")
            .build()
            .unwrap();
        assert_eq!(config.output, Path::new("gen").join(DEFAULT_OUTPUT_FILE));
    }

    #[test]
    fn last_output_wins() {
        let config = GeneratorConfig::builder()
            .root("include")
            .output_dir("gen")
            .output("custom.cpp")
            .build()
            .unwrap();
        assert_eq!(config.output, PathBuf::from("custom.cpp"));
    }

    #[test]
    fn missing_root_or_output() {
        let err = GeneratorConfig::builder()
            .output("gen.cpp")
            .build()
            .unwrap_err();
        assert!(matches!(err, GenerateError::MissingConfig("header root")));

        let err = GeneratorConfig::builder()
            .root("include")
            .build()
            .unwrap_err();
        assert!(matches!(err, GenerateError::MissingConfig("output path")));
    }

    #[test]
    fn layout_setters() {
        let config = GeneratorConfig::builder()
            .roots(["a", "b"])
            .output("gen.cpp")
            .banner(["generated"])
            .framework_includes(["runtime.hpp"])
            .entry_function("RegisterAll")
            .runtime_namespace("engine")
            .registration_calls("type", "field", "method")
            .build()
            .unwrap();

        assert_eq!(config.roots.len(), 2);
        assert_eq!(config.layout.banner, ["generated"]);
        assert_eq!(config.layout.framework_includes, ["runtime.hpp"]);
        assert_eq!(config.layout.entry_function, "RegisterAll");
        assert_eq!(config.layout.runtime_namespace, "engine");
        assert_eq!(config.layout.class_call, "type");
        assert_eq!(config.layout.member_call, "field");
        assert_eq!(config.layout.function_call, "method");
    }

    #[test]
    fn header_extension_matching() {
        let config = GeneratorConfig::builder()
            .root("include")
            .output("gen.cpp")
            .build()
            .unwrap();
        assert!(config.is_header(Path::new("a/b.hpp")));
        assert!(config.is_header(Path::new("a/b.h")));
        assert!(!config.is_header(Path::new("a/b.cpp")));
        assert!(!config.is_header(Path::new("a/hpp")));

        let config = GeneratorConfig::builder()
            .root("include")
            .output("gen.cpp")
            .header_extensions(["hh"])
            .build()
            .unwrap();
        assert!(config.is_header(Path::new("a/b.hh")));
        assert!(!config.is_header(Path::new("a/b.hpp")));
    }
}
