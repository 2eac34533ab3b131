//! interface-gen - generate accessor interfaces from `@property` annotations

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use interface_generator::{FileCollector, GeneratorOptions, InterfaceGenerator, TemplateSet};

#[derive(Parser, Debug)]
#[command(name = "interface-gen")]
#[command(author, version, about = "Generate getter/setter interfaces from @property annotations", long_about = None)]
struct Cli {
    /// Class files or directories to scan
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    
    /// Directory generated files are written into
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    
    /// Replace files that already exist
    #[arg(long)]
    overwrite: bool,
    
    /// Type setter parameters with the declared property type
    #[arg(long)]
    argument_types: bool,
    
    /// Emit getter return types and fluent setter return types
    #[arg(long)]
    return_types: bool,
    
    /// Also generate a skeleton class implementing each interface
    #[arg(long)]
    classes: bool,
    
    /// Extension of input files to collect and of generated files
    #[arg(short, long)]
    extension: Option<String>,
    
    /// TOML file with generator options; flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    
    /// Directory holding custom templates
    #[arg(short, long)]
    templates: Option<PathBuf>,
    
    /// Print the run statistics as JSON
    #[arg(long)]
    json: bool,
    
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Merge the configuration file (if any) with command line flags
    fn options(&self) -> Result<GeneratorOptions> {
        let mut options = match &self.config {
            Some(path) => GeneratorOptions::from_toml_file(path)?,
            None => GeneratorOptions::default(),
        };
        
        if let Some(dir) = &self.output_dir {
            options.output_dir = dir.clone();
        }
        if let Some(extension) = &self.extension {
            options.extension = extension.trim_start_matches('.').to_string();
        }
        options.overwrite_files |= self.overwrite;
        options.argument_types |= self.argument_types;
        options.return_types |= self.return_types;
        options.generate_classes |= self.classes;
        
        Ok(options)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
    
    let options = cli.options()?;
    
    let templates = match &cli.templates {
        Some(dir) => TemplateSet::load(dir, options.generate_classes)?,
        None => TemplateSet::builtin(),
    };
    
    let collector = FileCollector::with_extensions(vec![options.extension.clone()]);
    let files = collector.expand_inputs(&cli.inputs)?;
    
    let mut generator = InterfaceGenerator::with_options(options)
        .templates(templates)
        .verbose(cli.verbose);
    
    for file in &files {
        info!("Adding {}", file.display());
        generator.add_class(file)?;
    }
    
    let result = generator.generate()?;
    
    if cli.json {
        let json = serde_json::to_string_pretty(&result.stats)
            .context("Failed to serialize statistics")?;
        println!("{json}");
    } else {
        info!("{}", result.stats.summary());
    }
    
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn flags_override_config_defaults() -> Result<()> {
        let cli = Cli::try_parse_from([
            "interface-gen",
            "--return-types",
            "--extension",
            ".inc",
            "-o",
            "generated",
            "src",
        ])?;
        
        let options = cli.options()?;
        
        assert!(options.return_types);
        assert!(!options.argument_types);
        assert_eq!(options.extension, "inc");
        assert_eq!(options.output_dir, PathBuf::from("generated"));
        Ok(())
    }
    
    #[test]
    fn inputs_are_required() {
        assert!(Cli::try_parse_from(["interface-gen"]).is_err());
    }
}
