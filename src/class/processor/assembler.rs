use crate::class::types::{DocumentKind, GeneratedDocument, interface_name};
use super::accessor::AccessorFragment;
use super::template::{Bindings, Template};

// Blank line between generated members
const MEMBER_SEPARATOR: &str = "\n\n";

/// Wraps synthesized fragments into whole interface and class documents
#[derive(Debug)]
pub struct UnitAssembler<'a> {
    /// Extension of generated files, without the dot
    extension: &'a str,
}

impl<'a> UnitAssembler<'a> {
    pub fn new(extension: &'a str) -> Self {
        Self { extension }
    }
    
    /// Build `<unit>Interface` from interface-form fragments in order
    pub fn assemble_interface(
        &self,
        template: &Template,
        unit_name: &str,
        fragments: &[AccessorFragment],
    ) -> GeneratedDocument {
        let name = interface_name(unit_name);
        
        let body = template.render(
            &Bindings::new()
                .bind("INTERFACE_NAME", name.as_str())
                .bind("CLASS_NAME", unit_name)
                .bind("FUNCTIONS", join_fragments(fragments)),
        );
        
        GeneratedDocument {
            kind: DocumentKind::Interface,
            file_name: format!("{name}.{}", self.extension),
            body,
        }
    }
    
    /// Build class `<unit>` implementing `<unit>Interface`
    pub fn assemble_class(
        &self,
        template: &Template,
        unit_name: &str,
        fragments: &[AccessorFragment],
        field_declarations: &[String],
    ) -> GeneratedDocument {
        let body = template.render(
            &Bindings::new()
                .bind("CLASS_NAME", unit_name)
                .bind("INTERFACE_NAME", interface_name(unit_name))
                .bind("PROPERTIES", field_declarations.join(MEMBER_SEPARATOR))
                .bind("FUNCTIONS", join_fragments(fragments)),
        );
        
        GeneratedDocument {
            kind: DocumentKind::Class,
            file_name: format!("{unit_name}.{}", self.extension),
            body,
        }
    }
}

fn join_fragments(fragments: &[AccessorFragment]) -> String {
    fragments
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join(MEMBER_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::processor::accessor::{AccessorKind, TargetForm};
    use pretty_assertions::assert_eq;
    
    fn fragment(text: &str) -> AccessorFragment {
        AccessorFragment {
            kind: AccessorKind::Get,
            form: TargetForm::Interface,
            text: text.to_string(),
        }
    }
    
    #[test]
    fn interface_joins_fragments_with_blank_lines() {
        let template = Template::new("interface {{INTERFACE_NAME}}\n{\n{{FUNCTIONS}}\n}");
        
        let document = UnitAssembler::new("php")
            .assemble_interface(&template, "Card", &[fragment("a();"), fragment("b();")]);
        
        assert_eq!(document.kind, DocumentKind::Interface);
        assert_eq!(document.file_name, "CardInterface.php");
        assert_eq!(document.body, "interface CardInterface\n{\na();\n\nb();\n}");
    }
    
    #[test]
    fn class_implements_its_interface() {
        let template = Template::new("class {{CLASS_NAME}} implements {{INTERFACE_NAME}}\n{{PROPERTIES}}\n--\n{{FUNCTIONS}}");
        
        let document = UnitAssembler::new("inc").assemble_class(
            &template,
            "Card",
            &[fragment("getA() {}")],
            &["$a;".to_string(), "$b;".to_string()],
        );
        
        assert_eq!(document.kind, DocumentKind::Class);
        assert_eq!(document.file_name, "Card.inc");
        assert_eq!(document.body, "class Card implements CardInterface\n$a;\n\n$b;\n--\ngetA() {}");
    }
    
    #[test]
    fn unit_without_properties_still_gets_an_interface() {
        let template = Template::new("interface {{INTERFACE_NAME}} {{{FUNCTIONS}}}");
        
        let document = UnitAssembler::new("php").assemble_interface(&template, "Empty", &[]);
        
        assert_eq!(document.body, "interface EmptyInterface {}");
    }
}
