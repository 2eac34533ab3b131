use std::path::{Path, PathBuf};
use std::fs;
use log::{info, debug};

use crate::class::types::GeneratedDocument;
use crate::error::{GeneratorError, Result};

/// What happened to one generated document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or replaced
    Written(PathBuf),
    
    /// The file already existed and overwriting is disabled
    Skipped(PathBuf),
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Written(path) | Self::Skipped(path) => path,
        }
    }
}

/// Persists generated documents under an output directory
#[derive(Debug)]
pub struct OutputWriter {
    /// Directory generated files are written into
    output_dir: PathBuf,
    
    /// Replace files that already exist
    overwrite: bool,
}

impl OutputWriter {
    /// Create a new writer for the given directory
    pub fn new(output_dir: impl AsRef<Path>, overwrite: bool) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            overwrite,
        }
    }
    
    /// Path a document would be written to
    pub fn target_path(&self, document: &GeneratedDocument) -> PathBuf {
        self.output_dir.join(&document.file_name)
    }
    
    /// Write a document unless it exists and overwriting is disabled
    pub fn write(&self, document: &GeneratedDocument) -> Result<WriteOutcome> {
        let path = self.target_path(document);
        
        if !self.overwrite && path.exists() {
            info!("Skipping existing file {}", path.display());
            return Ok(WriteOutcome::Skipped(path));
        }
        
        // Create output directory if it doesn't exist
        if !self.output_dir.exists() {
            debug!("Creating directory: {}", self.output_dir.display());
            fs::create_dir_all(&self.output_dir)
                .map_err(|e| GeneratorError::io(&self.output_dir, e))?;
        }
        
        fs::write(&path, &document.body)
            .map_err(|e| GeneratorError::io(&path, e))?;
        
        info!("Wrote {}", path.display());
        Ok(WriteOutcome::Written(path))
    }
}
