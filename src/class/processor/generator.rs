use std::path::{Path, PathBuf};
use log::{debug, info, warn};

use crate::class::scanner::{AnnotationParser, ProgressTracker};
use crate::class::types::{GenerationResult, GeneratorOptions, SourceUnit, UnitOutput};
use crate::error::{GeneratorError, Result};
use crate::output::OutputWriter;
use super::accessor::AccessorSynthesizer;
use super::assembler::UnitAssembler;
use super::stats::GenerationStats;
use super::template::TemplateSet;

/// Turn one parsed unit into its interface and, optionally, class document.
///
/// Pure: nothing is read or written.
pub fn generate_unit(unit: &SourceUnit, options: &GeneratorOptions, templates: &TemplateSet) -> UnitOutput {
    let synthesizer = AccessorSynthesizer::new(options, templates);
    let assembler = UnitAssembler::new(&options.extension);
    
    let mut interface_fragments = Vec::with_capacity(unit.properties.len() * 2);
    let mut class_fragments = Vec::new();
    let mut fields = Vec::new();
    
    for property in &unit.properties {
        let accessors = synthesizer.synthesize(property, &unit.name);
        interface_fragments.extend(accessors.interface);
        class_fragments.extend(accessors.class);
        fields.extend(accessors.field);
    }
    
    let interface = assembler.assemble_interface(&templates.interface_document, &unit.name, &interface_fragments);
    
    let class = match (&templates.class, options.generate_classes) {
        (Some(class_templates), true) => Some(assembler.assemble_class(
            &class_templates.document,
            &unit.name,
            &class_fragments,
            &fields,
        )),
        _ => None,
    };
    
    UnitOutput {
        unit_name: unit.name.clone(),
        source_path: unit.path.clone(),
        accessor_pairs: unit.properties.len(),
        interface,
        class,
    }
}

/// Generates accessor interfaces (and optionally skeleton classes) for
/// registered class files.
///
/// Configuration is collected through the builder methods and frozen for the
/// duration of [`InterfaceGenerator::generate`].
///
/// ```no_run
/// use interface_generator::InterfaceGenerator;
///
/// let mut generator = InterfaceGenerator::new()
///     .output_dir("output")
///     .argument_types(true)
///     .return_types(true);
/// generator.add_class("example/CardDetails.php")?;
/// let result = generator.generate()?;
/// println!("{}", result.stats.summary());
/// # Ok::<(), interface_generator::GeneratorError>(())
/// ```
#[derive(Debug)]
pub struct InterfaceGenerator {
    /// Configuration options for generation
    options: GeneratorOptions,
    
    /// Templates documents are rendered from
    templates: TemplateSet,
    
    /// Registered input files, in registration order
    class_files: Vec<PathBuf>,
    
    /// Parser for annotated class files
    parser: AnnotationParser,
    
    /// Progress tracker for larger runs
    progress_tracker: ProgressTracker,
}

impl Default for InterfaceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl InterfaceGenerator {
    /// Create a new generator with default options and the built-in templates
    pub fn new() -> Self {
        Self::with_options(GeneratorOptions::default())
    }
    
    /// Create a new generator with the given options
    pub fn with_options(options: GeneratorOptions) -> Self {
        Self {
            options,
            templates: TemplateSet::builtin(),
            class_files: Vec::new(),
            parser: AnnotationParser::default(),
            progress_tracker: ProgressTracker::new(),
        }
    }
    
    /// Set the directory generated files are written into
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.output_dir = dir.into();
        self
    }
    
    /// Replace existing files instead of skipping them
    pub fn overwrite_files(mut self, overwrite: bool) -> Self {
        self.options.overwrite_files = overwrite;
        self
    }
    
    /// Type setter parameters with the declared property type
    pub fn argument_types(mut self, enabled: bool) -> Self {
        self.options.argument_types = enabled;
        self
    }
    
    /// Emit getter return types and fluent setter return types
    pub fn return_types(mut self, enabled: bool) -> Self {
        self.options.return_types = enabled;
        self
    }
    
    /// Also generate a skeleton class per unit
    pub fn generate_classes(mut self, enabled: bool) -> Self {
        self.options.generate_classes = enabled;
        self
    }
    
    /// Extension of generated files, without the dot
    ///
    /// Default: `php`
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.options.extension = extension.into();
        self
    }
    
    /// Use a custom template set
    pub fn templates(mut self, templates: TemplateSet) -> Self {
        self.templates = templates;
        self
    }
    
    /// Log every extracted property at trace level
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.parser = AnnotationParser::new(verbose);
        self
    }
    
    /// Never draw a progress bar
    pub fn quiet(mut self) -> Self {
        self.progress_tracker = ProgressTracker::hidden();
        self
    }
    
    /// Register a class file.
    ///
    /// Fails immediately when the path does not exist.
    pub fn add_class(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(GeneratorError::MissingInputFile(path.to_path_buf()));
        }
        
        debug!("Adding {}", path.display());
        self.class_files.push(path.to_path_buf());
        Ok(())
    }
    
    /// Register several class files
    pub fn add_classes<I, P>(&mut self, paths: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            self.add_class(path)?;
        }
        Ok(())
    }
    
    /// Get the current options
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }
    
    /// Get the registered class files
    pub fn class_files(&self) -> &[PathBuf] {
        &self.class_files
    }
    
    /// Generate documents for every registered file without writing them
    pub fn render(&self) -> Result<GenerationResult> {
        self.run(None)
    }
    
    /// Generate documents and write them to the output directory
    pub fn generate(&self) -> Result<GenerationResult> {
        let writer = OutputWriter::new(&self.options.output_dir, self.options.overwrite_files);
        self.run(Some(&writer))
    }
    
    fn run(&self, writer: Option<&OutputWriter>) -> Result<GenerationResult> {
        if self.options.generate_classes && self.templates.class.is_none() {
            return Err(GeneratorError::MissingTemplate(PathBuf::from(super::template::CLASS_FILE)));
        }
        
        info!("Generating interfaces for {} files", self.class_files.len());
        
        let mut stats = GenerationStats::new();
        
        let units = self.progress_tracker.track_path_progress(&self.class_files, |path: &PathBuf| -> Result<Option<UnitOutput>> {
            stats.total_units += 1;
            
            let Some(unit) = self.parser.parse_file(path)? else {
                warn!("No class declaration found in {}", path.display());
                stats.record_missing_class(path.clone());
                return Ok(None);
            };
            
            stats.properties += unit.properties.len();
            stats.properties_dropped += unit.dropped_properties;
            
            let output = generate_unit(&unit, &self.options, &self.templates);
            stats.generated_units += 1;
            
            if let Some(writer) = writer {
                for document in output.documents() {
                    let outcome = writer.write(document)?;
                    stats.record_write(&outcome);
                }
            }
            
            Ok(Some(output))
        })?;
        
        info!("Generation finished: {}", stats.summary());
        
        Ok(GenerationResult {
            units: units.into_iter().flatten().collect(),
            stats,
        })
    }
}
