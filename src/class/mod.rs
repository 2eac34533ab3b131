pub mod types;
pub mod scanner;
pub mod processor;

// Re-export the main API for easier access
pub use types::{GeneratedDocument, GenerationResult, GeneratorOptions, Property, SourceUnit};
pub use scanner::FileCollector;
pub use processor::InterfaceGenerator;
