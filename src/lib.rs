//! Generates getter/setter interfaces, and optionally skeleton classes, from
//! `@property` annotations in class documentation comments.
//!
//! ```no_run
//! use interface_generator::InterfaceGenerator;
//!
//! let mut generator = InterfaceGenerator::new()
//!     .output_dir("output")
//!     .return_types(true)
//!     .generate_classes(true);
//! generator.add_class("src/Model/CardDetails.php")?;
//! generator.generate()?;
//! # Ok::<(), interface_generator::GeneratorError>(())
//! ```

pub mod class;
pub mod error;
pub mod output;
pub mod utils;

// Re-export main types and functions for easier access
pub use class::types::{DocumentKind, GeneratedDocument, GenerationResult, GeneratorOptions, Property, SourceUnit, UnitOutput};
pub use class::scanner::{FileCollector, normalize};
pub use class::processor::{GenerationStats, InterfaceGenerator, TemplateSet, generate_unit};

pub use error::GeneratorError;
pub use output::{OutputWriter, WriteOutcome};

// Re-export utility functions
pub use utils::file_utils;
