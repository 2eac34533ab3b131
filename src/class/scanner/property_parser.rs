use std::path::Path;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::class::types::{Property, SourceUnit};
use crate::error::{GeneratorError, Result};
use super::naming;

// Coarse class detection: `class Name` at the start of a line, modifiers allowed
static CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?mi)^[ \t]*(?:(?:abstract|final|readonly)[ \t]+)*class[ \t]+([A-Za-z_][A-Za-z0-9_]*)").unwrap()
});

// Matches any of:
//   @property $name
//   @property type $name
//   @property type $name Description
//   @property \Explicit\Class\Type $name
static PROPERTY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)(?:^|[ \t])@property[ \t]+(?:([A-Za-z0-9_\\]+)[ \t]+)?\$([A-Za-z0-9_]+)").unwrap()
});

/// A `@property` annotation as written in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProperty {
    /// Declared type, empty when absent
    pub type_hint: String,
    
    /// Name without the leading `$`
    pub name: String,
}

/// Name of the first class declared in `content`
pub fn extract_unit_name(content: &str) -> Option<String> {
    CLASS_RE
        .captures(content)
        .map(|caps| caps[1].to_string())
}

/// All `@property` annotations in textual order, duplicates included
pub fn extract_properties(content: &str) -> Vec<RawProperty> {
    PROPERTY_RE
        .captures_iter(content)
        .map(|caps| RawProperty {
            type_hint: caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default(),
            name: caps[2].to_string(),
        })
        .collect()
}

/// Parser turning annotated class files into [`SourceUnit`]s
#[derive(Debug, Default)]
pub struct AnnotationParser {
    /// Whether to log every extracted property
    pub verbose: bool,
}

impl AnnotationParser {
    /// Create a new annotation parser
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
    
    /// Load and parse a file.
    ///
    /// Returns `Ok(None)` when the file declares no class.
    pub fn parse_file(&self, file_path: impl AsRef<Path>) -> Result<Option<SourceUnit>> {
        let file_path = file_path.as_ref();
        debug!("Parsing file: {}", file_path.display());
        
        if !file_path.exists() {
            return Err(GeneratorError::MissingInputFile(file_path.to_path_buf()));
        }
        
        let content = std::fs::read_to_string(file_path)
            .map_err(|e| GeneratorError::io(file_path, e))?;
        
        Ok(self.parse_content(&content, file_path))
    }
    
    /// Parse already loaded content
    pub fn parse_content(&self, content: &str, file_path: &Path) -> Option<SourceUnit> {
        let content = content.replace("\r\n", "\n");
        
        let name = extract_unit_name(&content)?;
        
        let mut properties = Vec::new();
        let mut dropped_properties = 0;
        
        for raw in extract_properties(&content) {
            match naming::normalize(&raw.name) {
                Some(normalized) => {
                    if self.verbose {
                        trace!("{}: property {} ${} -> {}", name, raw.type_hint, raw.name, normalized.pascal);
                    }
                    properties.push(Property {
                        type_hint: raw.type_hint,
                        raw_name: raw.name,
                        pascal_name: normalized.pascal,
                        field_name: normalized.camel,
                    });
                }
                None => {
                    debug!("Dropping property ${} in {}: no usable accessor name", raw.name, name);
                    dropped_properties += 1;
                }
            }
        }
        
        debug!("Found class {} with {} properties in {}", name, properties.len(), file_path.display());
        
        Some(SourceUnit {
            path: file_path.to_path_buf(),
            name,
            properties,
            dropped_properties,
        })
    }
}
