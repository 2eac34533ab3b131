use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use log::{debug, trace};
use walkdir::WalkDir;

use crate::utils::file_utils;

/// File collector for finding annotated class files
#[derive(Debug)]
pub struct FileCollector {
    /// Valid file extensions to collect
    valid_extensions: Vec<String>,
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FileCollector {
    /// Create a new file collector for `.php` files
    pub fn new() -> Self {
        Self {
            valid_extensions: vec!["php".to_string()],
        }
    }
    
    /// Create a new file collector with custom file extensions
    pub fn with_extensions(extensions: Vec<String>) -> Self {
        Self {
            valid_extensions: extensions,
        }
    }
    
    /// Collect all files with valid extensions below `input_dir`, sorted by path
    pub fn collect_files(&self, input_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let input_dir = input_dir.as_ref();
        debug!("Collecting files from directory: {}", input_dir.display());
        
        if !input_dir.is_dir() {
            anyhow::bail!("Not a directory: {}", input_dir.display());
        }
        
        let mut files = Vec::new();
        
        for entry in WalkDir::new(input_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if file_utils::matches_extension(entry.path(), &self.valid_extensions) {
                trace!("Found file: {}", entry.path().display());
                files.push(entry.path().to_owned());
            }
        }
        
        debug!("Collected {} files for processing", files.len());
        Ok(files)
    }
    
    /// Expand a mix of files and directories into a flat list of files.
    ///
    /// Files are kept as given, whatever their extension; directories are
    /// searched recursively.
    pub fn expand_inputs(&self, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        
        for input in inputs {
            if input.is_dir() {
                let found = self.collect_files(input)
                    .with_context(|| format!("Failed to scan {}", input.display()))?;
                files.extend(found);
            } else {
                files.push(input.clone());
            }
        }
        
        Ok(files)
    }
    
    /// Add a valid file extension
    pub fn add_extension(&mut self, extension: &str) {
        if !self.valid_extensions.iter().any(|ext| ext.eq_ignore_ascii_case(extension)) {
            self.valid_extensions.push(extension.to_string());
        }
    }
}
