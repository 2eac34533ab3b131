mod file_collector;
pub mod naming;
mod progress;
pub mod property_parser;

// Re-export from submodules
pub use file_collector::FileCollector;
pub use naming::{NormalizedName, normalize};
pub use progress::ProgressTracker;
pub use property_parser::{AnnotationParser, RawProperty, extract_properties, extract_unit_name};
