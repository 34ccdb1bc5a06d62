use serde::{Deserialize, Serialize};
use std::fmt;

//==============================================================================
// Sheet Cells
//==============================================================================

/// A single spreadsheet cell as delivered by the values API
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// Safe string coercion: only text cells qualify
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short type name used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            CellValue::Text(_) => "text",
            CellValue::Number(_) => "number",
            CellValue::Bool(_) => "boolean",
            CellValue::Empty => "empty cell",
        }
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => CellValue::Text(s),
            serde_json::Value::Number(n) => n.as_f64().map_or(CellValue::Empty, CellValue::Number),
            serde_json::Value::Bool(b) => CellValue::Bool(b),
            // Arrays and objects never appear in a values response
            _ => CellValue::Empty,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "\"{s}\""),
            CellValue::Number(n) => write!(f, "number {n}"),
            CellValue::Bool(b) => write!(f, "boolean {b}"),
            CellValue::Empty => write!(f, "empty cell"),
        }
    }
}

/// Raw sheet grid; rows may differ in length
pub type SheetData = Vec<Vec<CellValue>>;

/// Build a grid of text cells from string literals
#[doc(hidden)]
pub fn text_rows(rows: &[&[&str]]) -> SheetData {
    rows.iter()
        .map(|row| row.iter().map(|cell| CellValue::from(*cell)).collect())
        .collect()
}

//==============================================================================
// Locales and Translations
//==============================================================================

/// Maps one spreadsheet column to one locale file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleColumn {
    pub column: String,
    pub locale: String,
}

impl LocaleColumn {
    pub fn new(column: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            locale: locale.into(),
        }
    }
}

/// One key/value pair extracted from a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub key: String,
    pub value: String,
}

impl Translation {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Output layout for locale files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `{"a.b": "x"}`
    Flat,
    /// `{"a": {"b": "x"}}`
    Tree,
}

impl OutputFormat {
    pub fn from_is_flat(is_flat: bool) -> Self {
        if is_flat {
            OutputFormat::Flat
        } else {
            OutputFormat::Tree
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Flat => write!(f, "flat"),
            OutputFormat::Tree => write!(f, "tree"),
        }
    }
}
