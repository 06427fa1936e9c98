//! Custom-field descriptors with type-conditional defaults.

use crate::field::{FieldDefinition, FieldType};
use crate::xml;

/// Namespace of Metadata API documents.
pub const METADATA_NAMESPACE: &str = "http://soap.sforce.com/2006/04/metadata";

const DEFAULT_TEXT_LENGTH: &str = "255";
const DEFAULT_PHONE_URL_LENGTH: &str = "100";
const DEFAULT_TEXT_AREA_LENGTH: &str = "1000";
const DEFAULT_LONG_TEXT_LENGTH: &str = "32768";
const DEFAULT_VISIBLE_LINES: &str = "10";
const DEFAULT_PRECISION: &str = "18";
const DEFAULT_SCALE: &str = "2";

/// A fully-resolved custom-field descriptor, ready for staging and
/// submission.
///
/// Attributes left `None` are omitted from the generated XML entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomField {
    pub full_name: String,
    pub label: String,
    pub field_type: FieldType,
    pub length: Option<String>,
    pub visible_lines: Option<String>,
    pub precision: Option<String>,
    pub scale: Option<String>,
    pub required: Option<bool>,
    pub unique: Option<bool>,
    pub external_id: Option<bool>,
    pub case_sensitive: Option<bool>,
    pub default_value: Option<String>,
    pub formula: Option<String>,
    pub description: Option<String>,
    pub inline_help_text: Option<String>,
    pub value_set: Option<ValueSet>,
}

/// Ordered picklist value entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSet {
    pub values: Vec<PicklistValue>,
}

/// One picklist entry; `default` is true for at most one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PicklistValue {
    pub full_name: String,
    pub label: String,
    pub default: bool,
}

impl ValueSet {
    /// Build a value set from a comma-separated literal list.
    ///
    /// Literals are trimmed and deduplicated preserving first
    /// occurrence; an entry is flagged default iff it equals
    /// `default_value`.
    fn from_literals(literals: &str, default_value: Option<&str>) -> Self {
        let mut values: Vec<PicklistValue> = Vec::new();
        for literal in literals.split(',').map(str::trim).filter(|v| !v.is_empty()) {
            if values.iter().any(|v| v.full_name == literal) {
                continue;
            }
            values.push(PicklistValue {
                full_name: literal.to_string(),
                label: literal.to_string(),
                default: default_value == Some(literal),
            });
        }
        Self { values }
    }
}

/// Build one descriptor from a validated definition.
///
/// Copies the generic attributes, then applies type-conditional
/// defaults. Defaulting never overwrites an attribute the definition
/// already carries, so re-applying it is a no-op.
pub fn build_descriptor(definition: &FieldDefinition) -> CustomField {
    let mut field = CustomField {
        full_name: definition.full_name.clone(),
        label: definition.label.clone(),
        field_type: definition.field_type,
        length: definition.length.clone(),
        visible_lines: None,
        precision: definition.precision.clone(),
        scale: definition.scale.clone(),
        required: definition.required,
        unique: definition.unique,
        external_id: definition.external_id,
        case_sensitive: definition.case_sensitive,
        default_value: definition.default_value.clone(),
        formula: definition.formula.clone(),
        description: definition.description.clone(),
        inline_help_text: definition.inline_help_text.clone(),
        value_set: None,
    };

    match field.field_type {
        FieldType::Picklist => {
            if let Some(literals) = &definition.picklist_values {
                field.value_set = Some(ValueSet::from_literals(
                    literals,
                    definition.default_value.as_deref(),
                ));
            }
            // The value-set default flags supersede the generic default.
            field.default_value = None;
        }
        FieldType::Text => default_if_absent(&mut field.length, DEFAULT_TEXT_LENGTH),
        FieldType::Phone | FieldType::Url => {
            default_if_absent(&mut field.length, DEFAULT_PHONE_URL_LENGTH)
        }
        FieldType::Email => field.length = None,
        FieldType::Number | FieldType::Currency | FieldType::Percent => {
            default_if_absent(&mut field.precision, DEFAULT_PRECISION);
            default_if_absent(&mut field.scale, DEFAULT_SCALE);
        }
        FieldType::Checkbox => default_if_absent(&mut field.default_value, "false"),
        FieldType::TextArea => default_if_absent(&mut field.length, DEFAULT_TEXT_AREA_LENGTH),
        FieldType::LongTextArea | FieldType::Html => {
            default_if_absent(&mut field.length, DEFAULT_LONG_TEXT_LENGTH);
            default_if_absent(&mut field.visible_lines, DEFAULT_VISIBLE_LINES);
        }
    }

    field
}

fn default_if_absent(slot: &mut Option<String>, value: &str) {
    if slot.is_none() {
        *slot = Some(value.to_string());
    }
}

impl CustomField {
    /// Render the standalone `.field-meta.xml` document.
    pub fn to_meta_xml(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(&format!("<CustomField xmlns=\"{}\">\n", METADATA_NAMESPACE));
        push_element(&mut out, 4, "", "fullName", &self.full_name);
        self.write_body_elements(&mut out, "", 4);
        out.push_str("</CustomField>\n");
        out
    }

    /// Write every element except `fullName`, with the given namespace
    /// prefix and indent. Shared by the standalone document and the
    /// SOAP envelope, which qualify the name differently.
    pub fn write_body_elements(&self, out: &mut String, prefix: &str, indent: usize) {
        push_element(out, indent, prefix, "label", &self.label);
        push_element(out, indent, prefix, "type", self.field_type.as_str());
        if let Some(length) = &self.length {
            push_element(out, indent, prefix, "length", length);
        }
        if let Some(lines) = &self.visible_lines {
            push_element(out, indent, prefix, "visibleLines", lines);
        }
        if let Some(precision) = &self.precision {
            push_element(out, indent, prefix, "precision", precision);
        }
        if let Some(scale) = &self.scale {
            push_element(out, indent, prefix, "scale", scale);
        }
        if let Some(required) = self.required {
            push_element(out, indent, prefix, "required", bool_str(required));
        }
        if let Some(unique) = self.unique {
            push_element(out, indent, prefix, "unique", bool_str(unique));
        }
        if let Some(external_id) = self.external_id {
            push_element(out, indent, prefix, "externalId", bool_str(external_id));
        }
        if let Some(case_sensitive) = self.case_sensitive {
            push_element(out, indent, prefix, "caseSensitive", bool_str(case_sensitive));
        }
        if let Some(default_value) = &self.default_value {
            push_element(out, indent, prefix, "defaultValue", default_value);
        }
        if let Some(formula) = &self.formula {
            push_element(out, indent, prefix, "formula", formula);
        }
        if let Some(help) = &self.inline_help_text {
            push_element(out, indent, prefix, "inlineHelpText", help);
        }
        if let Some(description) = &self.description {
            push_element(out, indent, prefix, "description", description);
        }
        if let Some(value_set) = &self.value_set {
            write_value_set(out, prefix, indent, value_set);
        }
    }
}

fn write_value_set(out: &mut String, prefix: &str, indent: usize, value_set: &ValueSet) {
    let pad = " ".repeat(indent);
    let step = 4;
    out.push_str(&format!("{pad}<{prefix}valueSet>\n"));
    out.push_str(&format!(
        "{}<{prefix}valueSetDefinition>\n",
        " ".repeat(indent + step)
    ));
    push_element(out, indent + 2 * step, prefix, "sorted", "false");
    for value in &value_set.values {
        out.push_str(&format!("{}<{prefix}value>\n", " ".repeat(indent + 2 * step)));
        push_element(out, indent + 3 * step, prefix, "fullName", &value.full_name);
        push_element(out, indent + 3 * step, prefix, "default", bool_str(value.default));
        push_element(out, indent + 3 * step, prefix, "label", &value.label);
        out.push_str(&format!("{}</{prefix}value>\n", " ".repeat(indent + 2 * step)));
    }
    out.push_str(&format!(
        "{}</{prefix}valueSetDefinition>\n",
        " ".repeat(indent + step)
    ));
    out.push_str(&format!("{pad}</{prefix}valueSet>\n"));
}

fn push_element(out: &mut String, indent: usize, prefix: &str, tag: &str, value: &str) {
    out.push_str(&format!(
        "{}<{prefix}{tag}>{}</{prefix}{tag}>\n",
        " ".repeat(indent),
        xml::escape(value)
    ));
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
