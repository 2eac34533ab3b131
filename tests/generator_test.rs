use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use interface_generator::{
    DocumentKind, FileCollector, GeneratorError, GeneratorOptions, InterfaceGenerator, TemplateSet, WriteOutcome,
};
use interface_generator::output::OutputWriter;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn write_class(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

fn accessor_names(body: &str) -> Vec<String> {
    body.lines()
        .filter_map(|line| line.trim().strip_prefix("public function "))
        .map(|rest| rest.split('(').next().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_card_details_interface_matches_expected_output() -> Result<()> {
    let temp_dir = tempdir()?;
    let output_dir = temp_dir.path().join("output");
    
    let mut generator = InterfaceGenerator::new()
        .output_dir(&output_dir)
        .argument_types(true)
        .return_types(true)
        .quiet();
    generator.add_class(fixture("CardDetails.php"))?;
    
    let result = generator.generate()?;
    
    let generated = fs::read_to_string(output_dir.join("CardDetailsInterface.php"))?;
    let expected = fs::read_to_string(fixture("expected/CardDetailsInterface.php"))?;
    assert_eq!(generated, expected);
    
    // `$___` has no usable name and is dropped without failing the run
    assert_eq!(result.stats.properties, 8);
    assert_eq!(result.stats.properties_dropped, 1);
    assert_eq!(result.stats.files_written, 1);
    assert!(!output_dir.join("CardDetails.php").exists());
    
    Ok(())
}

#[test]
fn test_round_trip_declares_accessors_in_order() -> Result<()> {
    let temp_dir = tempdir()?;
    let class_file = write_class(temp_dir.path(), "CardDetails.php", r#"<?php

/**
 * @property string $name
 * @property string $number
 * @property string $expiryMonth
 */
class CardDetails
{
}
"#)?;
    
    let mut generator = InterfaceGenerator::new().return_types(true).quiet();
    generator.add_class(&class_file)?;
    
    let result = generator.render()?;
    
    assert_eq!(result.units.len(), 1);
    let interface = &result.units[0].interface;
    assert_eq!(interface.kind, DocumentKind::Interface);
    assert_eq!(interface.file_name, "CardDetailsInterface.php");
    assert_eq!(
        accessor_names(&interface.body),
        vec!["getName", "setName", "getNumber", "setNumber", "getExpiryMonth", "setExpiryMonth"]
    );
    assert_eq!(interface.body.matches("): self;").count(), 3);
    
    // render never touches the output directory
    assert_eq!(result.stats.total_files(), 0);
    
    Ok(())
}

#[test]
fn test_existing_interface_is_left_untouched() -> Result<()> {
    let temp_dir = tempdir()?;
    let output_dir = temp_dir.path().join("output");
    fs::create_dir_all(&output_dir)?;
    let existing = output_dir.join("CardDetailsInterface.php");
    fs::write(&existing, "<?php // edited by hand\n")?;
    
    let mut generator = InterfaceGenerator::new()
        .output_dir(&output_dir)
        .generate_classes(true)
        .quiet();
    generator.add_class(fixture("CardDetails.php"))?;
    
    let result = generator.generate()?;
    
    assert_eq!(fs::read_to_string(&existing)?, "<?php // edited by hand\n");
    assert_eq!(result.stats.files_skipped, 1);
    assert_eq!(result.stats.skipped_paths, vec![existing.clone()]);
    
    // The class did not exist yet, so it is still written
    assert_eq!(result.stats.files_written, 1);
    assert!(output_dir.join("CardDetails.php").exists());
    
    // A second run skips both
    let second = generator.generate()?;
    assert_eq!(second.stats.files_written, 0);
    assert_eq!(second.stats.files_skipped, 2);
    
    Ok(())
}

#[test]
fn test_overwrite_replaces_existing_files() -> Result<()> {
    let temp_dir = tempdir()?;
    let existing = temp_dir.path().join("CardDetailsInterface.php");
    fs::write(&existing, "stale")?;
    
    let mut generator = InterfaceGenerator::new()
        .output_dir(temp_dir.path())
        .overwrite_files(true)
        .quiet();
    generator.add_class(fixture("CardDetails.php"))?;
    generator.generate()?;
    
    assert!(fs::read_to_string(&existing)?.contains("interface CardDetailsInterface"));
    Ok(())
}

#[test]
fn test_class_generation() -> Result<()> {
    let temp_dir = tempdir()?;
    let class_file = write_class(temp_dir.path(), "Customer.php", r#"<?php
/**
 * @property int $id
 * @property $notes
 */
final class Customer
{
}
"#)?;
    
    let mut generator = InterfaceGenerator::new()
        .output_dir(temp_dir.path().join("out"))
        .argument_types(true)
        .return_types(true)
        .generate_classes(true)
        .quiet();
    generator.add_class(&class_file)?;
    
    let result = generator.generate()?;
    let class = result.units[0].class.as_ref().expect("class document");
    
    assert_eq!(class.file_name, "Customer.php");
    assert!(class.body.contains("class Customer implements CustomerInterface"));
    assert!(class.body.contains("    /** @var int $id */\n    protected $id;"));
    assert!(class.body.contains("    protected $notes;"));
    assert!(!class.body.contains("@var  $notes"));
    assert!(class.body.contains("public function setId(int $id): CustomerInterface"));
    assert!(class.body.contains("public function setNotes($notes): CustomerInterface"));
    assert!(class.body.contains("public function getNotes()\n"));
    assert_eq!(
        accessor_names(&class.body),
        vec!["getId", "setId", "getNotes", "setNotes"]
    );
    
    let written: Vec<PathBuf> = result.stats.written_paths.clone();
    assert_eq!(
        written,
        vec![
            temp_dir.path().join("out").join("CustomerInterface.php"),
            temp_dir.path().join("out").join("Customer.php"),
        ]
    );
    Ok(())
}

#[test]
fn test_missing_input_file_aborts() -> Result<()> {
    let temp_dir = tempdir()?;
    let class_file = write_class(temp_dir.path(), "Gone.php", "<?php\nclass Gone\n")?;
    
    let mut generator = InterfaceGenerator::new().output_dir(temp_dir.path().join("out")).quiet();
    generator.add_class(&class_file)?;
    fs::remove_file(&class_file)?;
    
    let err = generator.generate().unwrap_err();
    
    assert!(matches!(err, GeneratorError::MissingInputFile(path) if path == class_file));
    assert!(!temp_dir.path().join("out").exists());
    Ok(())
}

#[test]
fn test_custom_templates_from_directory() -> Result<()> {
    let temp_dir = tempdir()?;
    let template_dir = temp_dir.path().join("templates");
    fs::create_dir_all(&template_dir)?;
    fs::write(template_dir.join("InterfaceFunctionTemplate.txt"), "  fn {{FUNCTION_NAME}}({{ARGUMENTS}}){{RETURN_TYPE}}")?;
    fs::write(template_dir.join("InterfaceTemplate.txt"), "trait {{INTERFACE_NAME}} {\n{{FUNCTIONS}}\n}\n")?;
    
    let class_file = write_class(temp_dir.path(), "Point.php", "class Point\n * @property float $x\n")?;
    
    let mut generator = InterfaceGenerator::with_options(GeneratorOptions {
        extension: "txt".to_string(),
        ..GeneratorOptions::default()
    })
    .templates(TemplateSet::load(&template_dir, false)?)
    .quiet();
    generator.add_class(&class_file)?;
    
    let result = generator.render()?;
    
    assert_eq!(result.units[0].interface.file_name, "PointInterface.txt");
    assert_eq!(result.units[0].interface.body, "trait PointInterface {\n  fn getX()\n\n  fn setX($x)\n}\n");
    Ok(())
}

#[test]
fn test_directory_scan_feeds_generator() -> Result<()> {
    let temp_dir = tempdir()?;
    let source_dir = temp_dir.path().join("src");
    fs::create_dir_all(&source_dir)?;
    write_class(&source_dir, "A.php", "class Alpha\n * @property string $title\n")?;
    write_class(&source_dir, "B.php", "class Beta\n * @property bool $is_active\n")?;
    write_class(&source_dir, "README.md", "class NotPhp\n")?;
    
    let files = FileCollector::new().collect_files(&source_dir)?;
    let mut generator = InterfaceGenerator::new().output_dir(temp_dir.path().join("out")).quiet();
    generator.add_classes(&files)?;
    
    let result = generator.generate()?;
    
    let names: Vec<&str> = result.units.iter().map(|u| u.unit_name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
    assert!(result.units[1].interface.body.contains("public function getIsActive();"));
    assert_eq!(result.stats.files_written, 2);
    Ok(())
}

#[test]
fn test_writer_reports_target_paths() -> Result<()> {
    let temp_dir = tempdir()?;
    let mut generator = InterfaceGenerator::new().quiet();
    generator.add_class(fixture("CardDetails.php"))?;
    let result = generator.render()?;
    
    let writer = OutputWriter::new(temp_dir.path(), false);
    let document = &result.units[0].interface;
    
    assert_eq!(writer.target_path(document), temp_dir.path().join("CardDetailsInterface.php"));
    assert_eq!(writer.write(document)?, WriteOutcome::Written(temp_dir.path().join("CardDetailsInterface.php")));
    assert_eq!(writer.write(document)?, WriteOutcome::Skipped(temp_dir.path().join("CardDetailsInterface.php")));
    Ok(())
}
