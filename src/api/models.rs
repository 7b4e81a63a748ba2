use serde::{Deserialize, Serialize};

/// Response of the Sheets values endpoint. A tab with no data at all comes
/// back without a `values` field; that is an empty row-set, not an error.
#[derive(Debug, Deserialize, Serialize)]
pub struct ValueRange {
    #[serde(default)]
    pub range: String,
    #[serde(rename = "majorDimension", default)]
    pub major_dimension: String,
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

/// Spreadsheet metadata, trimmed to the tab list via a `fields` mask.
#[derive(Debug, Deserialize)]
pub struct SpreadsheetMeta {
    #[serde(default)]
    pub sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SheetEntry {
    pub properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
pub struct SheetProperties {
    pub title: String,
}
