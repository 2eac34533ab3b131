pub mod writer;

// Re-export main types for easier access
pub use writer::{OutputWriter, WriteOutcome};
