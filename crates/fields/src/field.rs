//! Field normalization and validation.

use crate::error::{Error, ErrorKind, Result};
use crate::record::FieldRow;

/// Suffix every custom-field full name must carry.
pub const CUSTOM_FIELD_SUFFIX: &str = "__c";

/// Supported custom-field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Currency,
    Checkbox,
    Picklist,
    Number,
    Percent,
    Email,
    Phone,
    Url,
    TextArea,
    LongTextArea,
    Html,
}

impl FieldType {
    /// The type literal used on the wire and in metadata documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Currency => "Currency",
            FieldType::Checkbox => "Checkbox",
            FieldType::Picklist => "Picklist",
            FieldType::Number => "Number",
            FieldType::Percent => "Percent",
            FieldType::Email => "Email",
            FieldType::Phone => "Phone",
            FieldType::Url => "Url",
            FieldType::TextArea => "TextArea",
            FieldType::LongTextArea => "LongTextArea",
            FieldType::Html => "Html",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Text" => Ok(FieldType::Text),
            "Currency" => Ok(FieldType::Currency),
            "Checkbox" => Ok(FieldType::Checkbox),
            "Picklist" => Ok(FieldType::Picklist),
            "Number" => Ok(FieldType::Number),
            "Percent" => Ok(FieldType::Percent),
            "Email" => Ok(FieldType::Email),
            "Phone" => Ok(FieldType::Phone),
            "Url" => Ok(FieldType::Url),
            "TextArea" => Ok(FieldType::TextArea),
            "LongTextArea" => Ok(FieldType::LongTextArea),
            "Html" => Ok(FieldType::Html),
            _ => Err(format!("Unknown field type: {}", s)),
        }
    }
}

/// A validated, normalized field definition.
///
/// Optional attributes are modeled as `Option` values; an absent
/// attribute stays `None` all the way through to the generated XML.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    pub full_name: String,
    pub label: String,
    pub field_type: FieldType,
    pub length: Option<String>,
    pub precision: Option<String>,
    pub scale: Option<String>,
    pub description: Option<String>,
    pub formula: Option<String>,
    pub picklist_values: Option<String>,
    pub default_value: Option<String>,
    pub required: Option<bool>,
    pub external_id: Option<bool>,
    pub unique: Option<bool>,
    pub case_sensitive: Option<bool>,
    pub inline_help_text: Option<String>,
}

/// Normalize and validate every row, in input order.
///
/// All-or-nothing: the first violation aborts the whole batch and no
/// partial result set is returned.
pub fn normalize_rows(rows: &[FieldRow]) -> Result<Vec<FieldDefinition>> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| normalize_row(idx + 1, row))
        .collect()
}

fn normalize_row(row_number: usize, row: &FieldRow) -> Result<FieldDefinition> {
    let full_name = require(row_number, "fullName", &row.full_name)?;
    let label = require(row_number, "label", &row.label)?;
    let type_literal = require(row_number, "type", &row.field_type)?;

    if !full_name.ends_with(CUSTOM_FIELD_SUFFIX) {
        return Err(Error::new(ErrorKind::InvalidFieldName { name: full_name }));
    }

    // Legacy alias: Boolean columns predate the Checkbox type literal.
    let field_type = if type_literal == "Boolean" {
        tracing::info!(
            field = %full_name,
            "rewriting legacy field type Boolean to Checkbox"
        );
        FieldType::Checkbox
    } else {
        type_literal.parse().map_err(|_| {
            Error::new(ErrorKind::UnsupportedFieldType {
                name: full_name.clone(),
                field_type: type_literal.clone(),
            })
        })?
    };

    Ok(FieldDefinition {
        full_name,
        label,
        field_type,
        length: non_empty(&row.length),
        precision: non_empty(&row.precision),
        scale: non_empty(&row.scale),
        description: non_empty(&row.description),
        formula: non_empty(&row.formula),
        picklist_values: non_empty(&row.picklist_values),
        default_value: non_empty(&row.default_value),
        required: parse_flag(&row.required),
        external_id: parse_flag(&row.external_id),
        unique: parse_flag(&row.unique),
        case_sensitive: parse_flag(&row.case_sensitive),
        inline_help_text: non_empty(&row.inline_help_text),
    })
}

fn require(row: usize, column: &'static str, value: &Option<String>) -> Result<String> {
    non_empty(value).ok_or_else(|| Error::new(ErrorKind::InvalidFieldDefinition { row, column }))
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Boolean columns compare case-insensitively against the literal
/// "true"; any other non-empty token reads as false.
fn parse_flag(value: &Option<String>) -> Option<bool> {
    non_empty(value).map(|v| v.eq_ignore_ascii_case("true"))
}
