//! Text rendering of inspection reports
//!
//! Formatting only: every decision about what appears in a report is made
//! by the walkers; this module turns the finished records into the
//! sectioned text the CLI prints.

use mira_core::{ClassInfo, FieldReport, InspectReport, ObjectRecord};

/// Render a full report: every class record, then every object record.
pub fn render_report(report: &InspectReport) -> String {
    let mut out = String::new();
    for class in &report.classes {
        out.push_str(&render_class(class));
    }
    for object in &report.objects {
        out.push_str(&render_object(object));
    }
    out
}

/// Render one class record with all of its sections.
pub fn render_class(cls: &ClassInfo) -> String {
    let mut out = String::new();
    out.push_str("***CLASS***\n");
    out.push_str(&format!("Declaring Class: {}\n\n", cls.name));
    if !cls.is_interface {
        if let Some(superclass) = cls.superclass {
            out.push_str(&format!("Immediate Superclass: {}\n\n", superclass.name));
        }
    }
    out.push_str(&render_interfaces(cls));
    out.push_str(&render_methods(cls));
    out.push_str(&render_constructors(cls));
    out.push_str(&render_fields(cls));
    out
}

/// Render the directly implemented interfaces of one class.
pub fn render_interfaces(cls: &ClassInfo) -> String {
    if cls.interfaces.is_empty() {
        return "No interfaces implemented.\n\n".to_string();
    }
    let mut out = String::from("Interfaces implemented:\n");
    for iface in &cls.interfaces {
        out.push_str(&format!(" - {}\n", iface.name));
    }
    out.push('\n');
    out
}

/// Render the declared methods of one class.
pub fn render_methods(cls: &ClassInfo) -> String {
    if cls.methods.is_empty() {
        return "No declared methods.\n\n".to_string();
    }
    let mut out = String::from("Methods:\n");
    for method in &cls.methods {
        out.push_str(&format!("    Name: {}\n", method.name));
        out.push_str("    Failures raised:\n");
        push_name_list(&mut out, &method.throws);
        out.push_str("    Parameter types:\n");
        push_name_list(&mut out, &method.params);
        out.push_str(&format!("    Modifiers: {}\n\n", method.modifiers));
    }
    out
}

/// Render the declared constructors of one class.
pub fn render_constructors(cls: &ClassInfo) -> String {
    if cls.constructors.is_empty() {
        return "No constructors.\n\n".to_string();
    }
    let mut out = String::from("Constructors:\n");
    for ctor in &cls.constructors {
        out.push_str(&format!("    Name: {}\n", ctor.name));
        out.push_str("    Parameter types:\n");
        push_name_list(&mut out, &ctor.params);
        out.push_str(&format!("    Modifiers: {}\n\n", ctor.modifiers));
    }
    out
}

/// Render the declared fields of one class.
pub fn render_fields(cls: &ClassInfo) -> String {
    if cls.fields.is_empty() {
        return "No fields.\n\n".to_string();
    }
    let mut out = String::from("Fields:\n");
    for field in &cls.fields {
        out.push_str(&format!("    Name: {}\n", field.name));
        out.push_str(&format!("    Type: {}\n", field.ty));
        out.push_str(&format!("    Modifiers: {}\n\n", field.modifiers));
    }
    out
}

/// Render one object record with its captured field values.
pub fn render_object(record: &ObjectRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("***OBJECT: {} {}***\n", record.class.name, record.id));
    out.push_str("Field values:\n");
    for field in &record.fields {
        match &field.value {
            FieldReport::Null => {
                out.push_str(&format!("{} = Null\n", field.name));
            }
            FieldReport::Scalar(text) => {
                out.push_str(&format!("{} = {}\n", field.name, text));
            }
            FieldReport::Array { elem_type, len, elements } => {
                out.push_str(&format!("{} = Array\n", field.name));
                out.push_str(&format!("       Type: {elem_type}\n"));
                out.push_str(&format!("       Length: {len}\n"));
                out.push_str(&format!("       Contents: [{}]\n", elements.join(", ")));
            }
            FieldReport::Ref { class, id } => {
                out.push_str(&format!("{} = {} {}\n", field.name, class, id));
            }
            FieldReport::Skipped { reason } => {
                out.push_str(&format!("{} = <skipped: {}>\n", field.name, reason));
            }
        }
    }
    out.push('\n');
    out
}

fn push_name_list(out: &mut String, names: &[&'static str]) {
    if names.is_empty() {
        out.push_str("        None\n");
    } else {
        for name in names {
            out.push_str(&format!("        {name}\n"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, Graph, ListNode, COUNTER, FORMATTER, PROBE, PRINTABLE};
    use mira_core::inspect_object;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_interfaces() {
        assert_eq!(
            render_interfaces(&COUNTER),
            "Interfaces implemented:\n - demo.Printable\n - demo.Runnable\n\n"
        );
    }

    #[test]
    fn test_render_no_interfaces() {
        assert_eq!(render_interfaces(&FORMATTER), "No interfaces implemented.\n\n");
    }

    #[test]
    fn test_render_methods() {
        assert_eq!(
            render_methods(&FORMATTER),
            "Methods:\n\
             \x20   Name: pad_to\n\
             \x20   Failures raised:\n\
             \x20       None\n\
             \x20   Parameter types:\n\
             \x20       i32\n\
             \x20   Modifiers: public\n\n"
        );
    }

    #[test]
    fn test_render_methods_lists_failure_types() {
        let out = render_methods(&COUNTER);
        assert!(out.contains(
            "    Name: set_val\n\
             \x20   Failures raised:\n\
             \x20       demo.RangeFailure\n\
             \x20   Parameter types:\n\
             \x20       i32\n\
             \x20   Modifiers: public\n"
        ));
    }

    #[test]
    fn test_render_constructors() {
        assert_eq!(
            render_constructors(&FORMATTER),
            "Constructors:\n\
             \x20   Name: demo.Formatter\n\
             \x20   Parameter types:\n\
             \x20       i32\n\
             \x20       char\n\
             \x20   Modifiers: public\n\n"
        );
    }

    #[test]
    fn test_render_fields() {
        assert_eq!(
            render_fields(&PROBE),
            "Fields:\n\
             \x20   Name: w\n\
             \x20   Type: i32\n\
             \x20   Modifiers: private\n\n"
        );
    }

    #[test]
    fn test_render_class_header() {
        let out = render_class(&COUNTER);
        assert!(out.starts_with(
            "***CLASS***\n\
             Declaring Class: demo.Counter\n\n\
             Immediate Superclass: demo.Widget\n\n"
        ));
    }

    #[test]
    fn test_render_interface_class_has_no_superclass_line() {
        let out = render_class(&PRINTABLE);
        assert!(!out.contains("Immediate Superclass"));
    }

    #[test]
    fn test_render_object_with_array_and_refs() {
        let report = fixtures::run(Graph::Scenario, true);
        assert_eq!(
            render_object(&report.objects[0]),
            "***OBJECT: demo.Sampler #0***\n\
             Field values:\n\
             probe = demo.Probe #1\n\
             samples = Array\n\
             \x20      Type: i32\n\
             \x20      Length: 3\n\
             \x20      Contents: [1, 2, 5]\n\
             scale = 7\n\n"
        );
    }

    #[test]
    fn test_render_object_null_field() {
        let node = ListNode::new(5);
        let report = inspect_object(&node, false);
        assert_eq!(
            render_object(&report.objects[0]),
            "***OBJECT: demo.ListNode #0***\n\
             Field values:\n\
             id = 5\n\
             next = Null\n\n"
        );
    }

    #[test]
    fn test_render_report_covers_all_records() {
        let report = fixtures::run(Graph::Scenario, true);
        let out = render_report(&report);
        assert_eq!(out.matches("***CLASS***").count(), report.classes.len());
        assert_eq!(out.matches("***OBJECT:").count(), report.objects.len());
    }
}
