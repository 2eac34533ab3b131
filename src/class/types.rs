use std::fs;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};

use crate::class::processor::GenerationStats;
use crate::error::{GeneratorError, Result};

/// One property declared through a `@property` annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Declared type, empty when the annotation carries none
    pub type_hint: String,
    
    /// Name exactly as written after the `$`
    pub raw_name: String,
    
    /// PascalCase form used as accessor suffix
    pub pascal_name: String,
    
    /// camelCase form used for the backing field and parameter
    pub field_name: String,
}

impl Property {
    /// Whether the declared type should appear in generated signatures.
    ///
    /// An empty type and the `mixed` sentinel both mean "untyped".
    pub fn has_explicit_type(&self) -> bool {
        !self.type_hint.is_empty() && self.type_hint != "mixed"
    }
    
    /// Type to show in documentation headers
    pub fn doc_type(&self) -> &str {
        if self.type_hint.is_empty() {
            "mixed"
        } else {
            &self.type_hint
        }
    }
}

/// One input class definition
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Path the unit was loaded from
    pub path: PathBuf,
    
    /// Name of the first class declared in the text
    pub name: String,
    
    /// Properties in source order, duplicates included
    pub properties: Vec<Property>,
    
    /// Annotations whose name normalized to nothing
    pub dropped_properties: usize,
}

/// Name of the interface generated for the unit called `unit_name`
pub fn interface_name(unit_name: &str) -> String {
    format!("{unit_name}Interface")
}

/// Which document a generated text is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Interface,
    Class,
}

/// Final interface or class text for a unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    /// Interface or class
    pub kind: DocumentKind,
    
    /// File name relative to the output directory
    pub file_name: String,
    
    /// Rendered text
    pub body: String,
}

/// Documents produced for one unit
#[derive(Debug, Clone)]
pub struct UnitOutput {
    /// Unit name
    pub unit_name: String,
    
    /// Path of the input file
    pub source_path: PathBuf,
    
    /// Number of accessor pairs synthesized
    pub accessor_pairs: usize,
    
    /// Interface document
    pub interface: GeneratedDocument,
    
    /// Class document, only when class generation is enabled
    pub class: Option<GeneratedDocument>,
}

impl UnitOutput {
    /// All documents of this unit in write order
    pub fn documents(&self) -> impl Iterator<Item = &GeneratedDocument> {
        std::iter::once(&self.interface).chain(self.class.as_ref())
    }
}

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Documents produced for every unit, in registration order
    pub units: Vec<UnitOutput>,
    
    /// Statistics about the run
    pub stats: GenerationStats,
}

/// Configuration options for a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Directory generated files are written into
    pub output_dir: PathBuf,
    
    /// Replace files that already exist
    pub overwrite_files: bool,
    
    /// Annotate setter parameters with the declared type
    pub argument_types: bool,
    
    /// Annotate getters with the declared type and setters with a fluent self type
    pub return_types: bool,
    
    /// Also produce a skeleton class implementing the interface
    pub generate_classes: bool,
    
    /// Extension of generated files, without the dot
    pub extension: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            overwrite_files: false,
            argument_types: false,
            return_types: false,
            generate_classes: false,
            extension: "php".to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Load options from a TOML file; missing keys take their default
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| GeneratorError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        
        toml::from_str(&content).map_err(|e| GeneratorError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    
    fn property(type_hint: &str) -> Property {
        Property {
            type_hint: type_hint.to_string(),
            raw_name: "name".to_string(),
            pascal_name: "Name".to_string(),
            field_name: "name".to_string(),
        }
    }
    
    #[test]
    fn mixed_and_empty_types_are_untyped() {
        assert!(!property("").has_explicit_type());
        assert!(!property("mixed").has_explicit_type());
        assert!(property("string").has_explicit_type());
        assert!(property("\\App\\Money").has_explicit_type());
    }
    
    #[test]
    fn interface_name_appends_suffix() {
        assert_eq!(interface_name("CardDetails"), "CardDetailsInterface");
    }
    
    #[test]
    fn doc_type_falls_back_to_mixed() {
        assert_eq!(property("").doc_type(), "mixed");
        assert_eq!(property("int").doc_type(), "int");
    }
    
    #[test]
    fn options_load_partial_toml() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("generator.toml");
        fs::write(&path, "output_dir = \"gen\"\nreturn_types = true\n")?;
        
        let options = GeneratorOptions::from_toml_file(&path)?;
        
        assert_eq!(options.output_dir, PathBuf::from("gen"));
        assert!(options.return_types);
        assert!(!options.argument_types);
        assert_eq!(options.extension, "php");
        Ok(())
    }
    
    #[test]
    fn options_reject_invalid_toml() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("generator.toml");
        fs::write(&path, "return_types = \"yes please\"\n")?;
        
        let err = GeneratorOptions::from_toml_file(&path).unwrap_err();
        assert!(matches!(err, GeneratorError::Config { .. }));
        Ok(())
    }
}
