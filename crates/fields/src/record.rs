//! CSV field definition rows.

use std::io::Read;

use serde::Deserialize;

use crate::error::Result;

/// One raw field definition row.
///
/// Every column is optional at this stage; an empty cell reads as
/// `None`, the same as a missing column. Validation happens later in
/// [`crate::normalize_rows`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FieldRow {
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub length: Option<String>,
    pub precision: Option<String>,
    pub scale: Option<String>,
    pub description: Option<String>,
    pub formula: Option<String>,
    #[serde(rename = "picklistValues")]
    pub picklist_values: Option<String>,
    #[serde(rename = "defaultValue")]
    pub default_value: Option<String>,
    pub required: Option<String>,
    #[serde(rename = "externalId")]
    pub external_id: Option<String>,
    pub unique: Option<String>,
    #[serde(rename = "caseSensitive")]
    pub case_sensitive: Option<String>,
    #[serde(rename = "inlineHelpText")]
    pub inline_help_text: Option<String>,
}

/// Parse field definition rows from delimited text.
///
/// The first row is the header; header names are matched exactly and may
/// appear in any order. Blank lines are skipped. Rows with fewer columns
/// than the header are tolerated: missing trailing columns read as
/// absent values rather than erroring.
pub fn parse_rows(input: impl Read) -> Result<Vec<FieldRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(input);

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
