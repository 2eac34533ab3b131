use std::path::PathBuf;
use serde::Serialize;

use crate::output::WriteOutcome;

/// Statistics for a generation run
#[derive(Debug, Default, Clone, Serialize)]
pub struct GenerationStats {
    /// Total number of input files processed
    pub total_units: usize,
    
    /// Number of units documents were generated for
    pub generated_units: usize,
    
    /// Number of files without a detectable class declaration
    pub units_without_class: usize,
    
    /// Paths to files without a detectable class declaration
    pub units_without_class_paths: Vec<PathBuf>,
    
    /// Properties that produced accessors
    pub properties: usize,
    
    /// Properties dropped because their name normalized to nothing
    pub properties_dropped: usize,
    
    /// Number of files written
    pub files_written: usize,
    
    /// Paths of files written
    pub written_paths: Vec<PathBuf>,
    
    /// Number of existing files left untouched
    pub files_skipped: usize,
    
    /// Paths of existing files left untouched
    pub skipped_paths: Vec<PathBuf>,
}

impl GenerationStats {
    /// Create a new generation stats instance
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Record the outcome of one document write
    pub fn record_write(&mut self, outcome: &WriteOutcome) {
        match outcome {
            WriteOutcome::Written(path) => {
                self.files_written += 1;
                self.written_paths.push(path.clone());
            }
            WriteOutcome::Skipped(path) => {
                self.files_skipped += 1;
                self.skipped_paths.push(path.clone());
            }
        }
    }
    
    /// Record an input file that declares no class
    pub fn record_missing_class(&mut self, path: PathBuf) {
        self.units_without_class += 1;
        self.units_without_class_paths.push(path);
    }
    
    /// Number of output files considered, written or not
    pub fn total_files(&self) -> usize {
        self.files_written + self.files_skipped
    }
    
    /// One-line human readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} units, {} properties ({} dropped), {} files written, {} skipped",
            self.generated_units,
            self.properties,
            self.properties_dropped,
            self.files_written,
            self.files_skipped
        )
    }
}
