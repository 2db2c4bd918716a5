//! Line-oriented scanner for annotated C++ headers.
//!
//! The scanner does not parse C++. It strips comments, tracks brace depth to
//! follow namespace and class scopes, and looks for three marker macros:
//! - the class marker registers the enclosing class
//! - the member marker binds a data member, on its own line or the next
//!   declaration line
//! - the function marker binds a member function the same way
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use reflectgen_scanner::HeaderScanner;
//!
//! let scanner = HeaderScanner::new().unwrap();
//! let source = "class Foo {\n    REFLECT_CLASS()\n    REFLECT_FUNCTION() void tick();\n};\n";
//!
//! let classes = scanner.scan_source(Path::new("foo.hpp"), source);
//! assert_eq!(classes.registered().count(), 1);
//! ```

pub mod cursor;
pub mod extract;
pub mod macro_args;
pub mod normalize;
pub mod scope;

mod metadata;
mod scanner;

pub use macro_args::MacroPattern;
pub use metadata::MetadataExtractor;
pub use scanner::HeaderScanner;
pub use scope::{BraceCount, ClassFrame, ScopeTracker};
