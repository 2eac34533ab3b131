pub mod accessor;
pub mod assembler;
mod generator;
mod stats;
pub mod template;

// Re-export from submodules
pub use accessor::{AccessorFragment, AccessorKind, AccessorSynthesizer, PropertyAccessors, TargetForm};
pub use assembler::UnitAssembler;
pub use generator::{InterfaceGenerator, generate_unit};
pub use stats::GenerationStats;
pub use template::{Bindings, Template, TemplateSet};
