//! Placeholder substitution for the text templates generated files are built from.
//!
//! A template is opaque text with `{{KEY}}` substitution points. There is no
//! control flow: callers decide which value to bind, never how to lay it out.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::{GeneratorError, Result};

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{([^{}]+)\}\}").unwrap());

pub const INTERFACE_FUNCTION_FILE: &str = "InterfaceFunctionTemplate.txt";
pub const CLASS_FUNCTION_FILE: &str = "ClassFunctionTemplate.txt";
pub const INTERFACE_FILE: &str = "InterfaceTemplate.txt";
pub const CLASS_FILE: &str = "ClassTemplate.txt";

/// Values bound to placeholder keys
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: BTreeMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Bind `key` (without braces) to `value`
    pub fn bind(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }
    
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// A text template with `{{KEY}}` placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
    
    /// Load a template from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(GeneratorError::MissingTemplate(path.to_path_buf()));
        }
        
        let text = std::fs::read_to_string(path)
            .map_err(|e| GeneratorError::io(path, e))?;
        debug!("Loaded template {}", path.display());
        
        Ok(Self::new(text.replace("\r\n", "\n")))
    }
    
    pub fn text(&self) -> &str {
        &self.text
    }
    
    /// Replace every bound placeholder in a single pass.
    ///
    /// Unbound placeholders are left as they are, and substituted values are
    /// never scanned for further placeholders.
    pub fn render(&self, bindings: &Bindings) -> String {
        PLACEHOLDER_RE
            .replace_all(&self.text, |caps: &Captures| match bindings.get(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

/// Templates only needed when skeleton classes are generated
#[derive(Debug, Clone)]
pub struct ClassTemplates {
    /// Shape of one implemented method
    pub method: Template,
    
    /// Shape of the whole class file
    pub document: Template,
}

/// All templates used by a generation run
#[derive(Debug, Clone)]
pub struct TemplateSet {
    /// Shape of one interface method declaration
    pub interface_method: Template,
    
    /// Shape of the whole interface file
    pub interface_document: Template,
    
    /// Class templates, absent when classes are not generated
    pub class: Option<ClassTemplates>,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateSet {
    /// Templates shipped with the crate
    pub fn builtin() -> Self {
        Self {
            interface_method: Template::new(include_str!("../../../templates/InterfaceFunctionTemplate.txt")),
            interface_document: Template::new(include_str!("../../../templates/InterfaceTemplate.txt")),
            class: Some(ClassTemplates {
                method: Template::new(include_str!("../../../templates/ClassFunctionTemplate.txt")),
                document: Template::new(include_str!("../../../templates/ClassTemplate.txt")),
            }),
        }
    }
    
    /// Load templates from a directory.
    ///
    /// The interface templates are always required. The class templates are
    /// required when `with_classes` is set and picked up if present otherwise.
    pub fn load(dir: impl AsRef<Path>, with_classes: bool) -> Result<Self> {
        let dir = dir.as_ref();
        debug!("Loading templates from {}", dir.display());
        
        let interface_method = Template::load(dir.join(INTERFACE_FUNCTION_FILE))?;
        let interface_document = Template::load(dir.join(INTERFACE_FILE))?;
        
        let class_paths: [PathBuf; 2] = [dir.join(CLASS_FUNCTION_FILE), dir.join(CLASS_FILE)];
        let class = if with_classes || class_paths.iter().all(|p| p.is_file()) {
            Some(ClassTemplates {
                method: Template::load(&class_paths[0])?,
                document: Template::load(&class_paths[1])?,
            })
        } else {
            None
        };
        
        Ok(Self {
            interface_method,
            interface_document,
            class,
        })
    }
}
