use log::trace;

use crate::class::types::{GeneratorOptions, Property, interface_name};
use super::template::{Bindings, ClassTemplates, Template, TemplateSet};

// Indentation of doc lines inside a class or interface body
const DOC_INDENT: &str = "\n    ";

// Indentation of statements inside a method body
const BODY_INDENT: &str = "        ";

/// Getter or setter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Get,
    Set,
}

/// Interface declaration or class implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetForm {
    Interface,
    Class,
}

/// Rendered text for one accessor in one target form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorFragment {
    pub kind: AccessorKind,
    pub form: TargetForm,
    pub text: String,
}

/// Everything synthesized for a single property
#[derive(Debug, Clone, Default)]
pub struct PropertyAccessors {
    /// Getter then setter, interface form
    pub interface: Vec<AccessorFragment>,
    
    /// Getter then setter, class form; empty when classes are not generated
    pub class: Vec<AccessorFragment>,
    
    /// Backing field declaration; `None` when classes are not generated
    pub field: Option<String>,
}

/// Decides accessor signatures and renders them through the method templates
#[derive(Debug)]
pub struct AccessorSynthesizer<'a> {
    options: &'a GeneratorOptions,
    templates: &'a TemplateSet,
}

impl<'a> AccessorSynthesizer<'a> {
    pub fn new(options: &'a GeneratorOptions, templates: &'a TemplateSet) -> Self {
        Self { options, templates }
    }
    
    /// Synthesize getter and setter for `property` of the unit called `unit_name`
    pub fn synthesize(&self, property: &Property, unit_name: &str) -> PropertyAccessors {
        trace!("Synthesizing accessors for {}::{}", unit_name, property.pascal_name);
        
        let getter = self.getter_signature(property);
        let setter = self.setter_signature(property, unit_name);
        
        let mut accessors = PropertyAccessors {
            interface: vec![
                self.render_interface(AccessorKind::Get, &getter),
                self.render_interface(AccessorKind::Set, &setter),
            ],
            ..PropertyAccessors::default()
        };
        
        if let Some(class_templates) = self.class_templates() {
            let getter_body = vec![format!("return $this->{};", property.field_name)];
            let setter_body = vec![
                format!("$this->{0} = ${0};", property.field_name),
                String::new(),
                "return $this;".to_string(),
            ];
            
            accessors.class = vec![
                render_class(&class_templates.method, AccessorKind::Get, &getter, &getter.class_return, &getter_body),
                render_class(&class_templates.method, AccessorKind::Set, &setter, &setter.class_return, &setter_body),
            ];
            accessors.field = Some(field_declaration(property));
        }
        
        accessors
    }
    
    fn class_templates(&self) -> Option<&'a ClassTemplates> {
        if self.options.generate_classes {
            self.templates.class.as_ref()
        } else {
            None
        }
    }
    
    fn getter_signature(&self, property: &Property) -> Signature {
        let return_type = if self.options.return_types && property.has_explicit_type() {
            format!(": {}", property.type_hint)
        } else {
            String::new()
        };
        
        Signature {
            name: format!("get{}", property.pascal_name),
            arguments: String::new(),
            doc: vec![
                "/**".to_string(),
                format!(" * @return {}", property.doc_type()),
                " */".to_string(),
            ],
            class_return: return_type.clone(),
            interface_return: return_type,
        }
    }
    
    fn setter_signature(&self, property: &Property, unit_name: &str) -> Signature {
        let variable = format!("${}", property.field_name);
        
        let arguments = if self.options.argument_types && property.has_explicit_type() {
            format!("{} {}", property.type_hint, variable)
        } else {
            variable.clone()
        };
        
        let param_doc = format!("{} {}", property.type_hint, variable);
        
        let (interface_return, class_return) = if self.options.return_types {
            (": self".to_string(), format!(": {}", interface_name(unit_name)))
        } else {
            (String::new(), String::new())
        };
        
        Signature {
            name: format!("set{}", property.pascal_name),
            arguments,
            doc: vec![
                "/**".to_string(),
                format!(" * @param {}", param_doc.trim()),
                " *".to_string(),
                " * @return $this".to_string(),
                " */".to_string(),
            ],
            interface_return,
            class_return,
        }
    }
    
    fn render_interface(&self, kind: AccessorKind, signature: &Signature) -> AccessorFragment {
        let text = self.templates.interface_method.render(
            &signature.bindings().bind("RETURN_TYPE", signature.interface_return.as_str()),
        );
        
        AccessorFragment {
            kind,
            form: TargetForm::Interface,
            text,
        }
    }
}

// Shared shape of one accessor
struct Signature {
    name: String,
    arguments: String,
    doc: Vec<String>,
    interface_return: String,
    class_return: String,
}

impl Signature {
    fn bindings(&self) -> Bindings {
        Bindings::new()
            .bind("FUNCTION_NAME", self.name.as_str())
            .bind("ARGUMENTS", self.arguments.as_str())
            .bind("PHPDOC", self.doc.join(DOC_INDENT))
    }
}

fn render_class(
    template: &Template,
    kind: AccessorKind,
    signature: &Signature,
    return_type: &str,
    body: &[String],
) -> AccessorFragment {
    let text = template.render(
        &signature
            .bindings()
            .bind("RETURN_TYPE", return_type)
            .bind("FUNCTION", indent_body(body)),
    );
    
    AccessorFragment {
        kind,
        form: TargetForm::Class,
        text,
    }
}

/// Join body lines for a method whose first line is already indented
fn indent_body(lines: &[String]) -> String {
    let mut body = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            body.push('\n');
            if !line.is_empty() {
                body.push_str(BODY_INDENT);
            }
        }
        body.push_str(line);
    }
    body
}

/// Backing field for a property, typed in its doc comment when the type is known
pub fn field_declaration(property: &Property) -> String {
    let declaration = format!("    protected ${};", property.field_name);
    
    if property.has_explicit_type() {
        format!(
            "    /** @var {} ${} */\n{}",
            property.type_hint, property.field_name, declaration
        )
    } else {
        declaration
    }
}
