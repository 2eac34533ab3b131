use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress tracker for displaying progress while units are generated
#[derive(Debug, Default)]
pub struct ProgressTracker {
    /// Hide the bar regardless of the number of items
    hidden: bool,
}

impl ProgressTracker {
    /// Create a new progress tracker
    pub fn new() -> Self {
        Self { hidden: false }
    }
    
    /// Create a tracker that never draws anything
    pub fn hidden() -> Self {
        Self { hidden: true }
    }
    
    /// Run `operation` over every path in order, stopping at the first error
    pub fn track_path_progress<F, R, E>(&self, paths: &[PathBuf], mut operation: F) -> Result<Vec<R>, E>
    where
        F: FnMut(&PathBuf) -> Result<R, E>,
    {
        // Only worth a bar for larger runs
        let progress_bar = if !self.hidden && paths.len() > 10 {
            let pb = ProgressBar::new(paths.len() as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
            Some(pb)
        } else {
            None
        };
        
        let mut results = Vec::with_capacity(paths.len());
        
        for path in paths {
            if let Some(pb) = &progress_bar {
                if let Some(file_name) = path.file_name() {
                    pb.set_message(file_name.to_string_lossy().into_owned());
                }
            }
            
            let result = operation(path);
            
            if let Some(pb) = &progress_bar {
                pb.inc(1);
            }
            
            match result {
                Ok(value) => results.push(value),
                Err(e) => {
                    if let Some(pb) = &progress_bar {
                        pb.abandon_with_message("Generation aborted");
                    }
                    return Err(e);
                }
            }
        }
        
        if let Some(pb) = progress_bar {
            pb.finish_with_message("Generation complete");
        }
        
        Ok(results)
    }
}
