use thiserror::Error;

pub type GslocResult<T> = Result<T, GslocError>;

#[derive(Error, Debug)]
pub enum GslocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    ConfigValidation(String),

    #[error("data source error: {0}")]
    DataSource(String),

    /// The key column holds something other than text (a number, a boolean...)
    #[error("malformed key cell at row {row}, column {column}: expected text, found {found}")]
    MalformedKeyCell {
        /// 1-based, as shown in the spreadsheet UI
        row: usize,
        column: String,
        found: String,
    },

    #[error("key path conflict for '{key}': segment '{segment}' is already used as a {existing}")]
    KeyPathConflict {
        key: String,
        segment: String,
        existing: &'static str,
    },
}
