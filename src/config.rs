//! YAML configuration: loading, defaults, validation and the example file

use crate::core::is_column_label;
use crate::error::{GslocError, GslocResult};
use crate::types::{LocaleColumn, OutputFormat};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "./conf.yaml";
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Generator configuration as read from `conf.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub spreadsheet_id: String,
    pub keys_column: String,
    pub locales: Vec<LocaleColumn>,
    pub rows_to_skip: usize,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    pub service_account_json: Option<PathBuf>,
    pub sheet_name: String,
    pub output_dir: PathBuf,
    pub is_flat: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            keys_column: String::new(),
            locales: Vec::new(),
            rows_to_skip: 0,
            service_account_json: None,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            output_dir: PathBuf::new(),
            is_flat: false,
        }
    }
}

impl Config {
    /// Read and parse a config file. Does not validate.
    pub fn load(path: &Path) -> GslocResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GslocError::Io(std::io::Error::new(
                e.kind(),
                format!("can't read config '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> GslocResult<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Check that every required field is present and well-formed
    pub fn validate(&self) -> GslocResult<()> {
        if self.spreadsheet_id.trim().is_empty() {
            return Err(invalid("spreadsheet_id is required"));
        }

        if self.keys_column.is_empty() {
            return Err(invalid("keys_column is required"));
        }
        if !is_column_label(&self.keys_column) {
            return Err(invalid(format!(
                "keys_column '{}' is not a column label (expected letters like 'A' or 'AB')",
                self.keys_column
            )));
        }

        if self.locales.is_empty() {
            return Err(invalid("locales is required"));
        }
        for (i, locale) in self.locales.iter().enumerate() {
            if locale.locale.trim().is_empty() {
                return Err(invalid(format!("locales[{i}].locale is required")));
            }
            if !is_file_stem(&locale.locale) {
                return Err(invalid(format!(
                    "locales[{i}].locale '{}' must be a plain file name (no '/', '\\' or '..')",
                    locale.locale
                )));
            }
            if !is_column_label(&locale.column) {
                return Err(invalid(format!(
                    "locales[{i}].column '{}' is not a column label (locale '{}')",
                    locale.column, locale.locale
                )));
            }
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(invalid("output_dir is required"));
        }

        if self.sheet_name.is_empty() {
            return Err(invalid("sheet_name must not be empty"));
        }

        Ok(())
    }

    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_is_flat(self.is_flat)
    }

    /// The config written by `gen-config-example`
    pub fn example() -> Self {
        Self {
            spreadsheet_id: "your-spreadsheet-id".to_string(),
            keys_column: "A".to_string(),
            locales: vec![LocaleColumn::new("B", "en"), LocaleColumn::new("C", "de")],
            rows_to_skip: 1,
            service_account_json: Some(PathBuf::from("service-account.json")),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            output_dir: PathBuf::from("./locales"),
            is_flat: false,
        }
    }

    pub fn to_yaml(&self) -> GslocResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// `<locale>.json` must land directly inside `output_dir`
fn is_file_stem(locale: &str) -> bool {
    !locale.contains(['/', '\\']) && locale != "." && locale != ".."
}

/// An empty or blank `service_account_json` means "not configured"
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from))
}

fn invalid(msg: impl Into<String>) -> GslocError {
    GslocError::ConfigValidation(msg.into())
}

/// Write the example config to `path`, refusing to clobber unless `force`
pub fn write_example(path: &Path, force: bool) -> GslocResult<()> {
    if path.exists() && !force {
        return Err(GslocError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} already exists (use --force to overwrite)", path.display()),
        )));
    }
    let yaml = Config::example().to_yaml()?;
    fs::write(path, yaml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn valid() -> Config {
        Config {
            spreadsheet_id: "sheet-id".to_string(),
            keys_column: "A".to_string(),
            locales: vec![LocaleColumn::new("B", "en")],
            output_dir: PathBuf::from("out"),
            ..Config::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_yaml(
            r#"
spreadsheet_id: abc
keys_column: A
locales:
  - column: B
    locale: en
output_dir: ./locales
"#,
        )
        .unwrap();

        assert_eq!(config.sheet_name, "Sheet1");
        assert_eq!(config.rows_to_skip, 0);
        assert!(!config.is_flat);
        assert!(config.service_account_json.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_required_fields() {
        let cases: Vec<(Config, &str)> = vec![
            (
                Config {
                    spreadsheet_id: String::new(),
                    ..valid()
                },
                "spreadsheet_id",
            ),
            (
                Config {
                    keys_column: String::new(),
                    ..valid()
                },
                "keys_column",
            ),
            (
                Config {
                    locales: vec![],
                    ..valid()
                },
                "locales",
            ),
            (
                Config {
                    output_dir: PathBuf::new(),
                    ..valid()
                },
                "output_dir",
            ),
        ];

        for (config, field) in cases {
            let err = config.validate().unwrap_err();
            assert!(
                matches!(&err, GslocError::ConfigValidation(msg) if msg.contains(field)),
                "expected validation error about {field}, got {err}"
            );
        }
    }

    #[test]
    fn test_blank_service_account_is_unset() {
        let base = "spreadsheet_id: abc\nkeys_column: A\n";
        for value in ["\"\"", "\"   \"", "~"] {
            let config =
                Config::from_yaml(&format!("{base}service_account_json: {value}\n")).unwrap();
            assert!(
                config.service_account_json.is_none(),
                "service_account_json: {value} should be unset"
            );
        }

        let config =
            Config::from_yaml(&format!("{base}service_account_json: sa.json\n")).unwrap();
        assert_eq!(config.service_account_json, Some(PathBuf::from("sa.json")));
    }

    #[test]
    fn test_rejects_locales_outside_output_dir() {
        for locale in ["../escaped", "en/US", "en\\US", ".", ".."] {
            let config = Config {
                locales: vec![LocaleColumn::new("B", locale)],
                ..valid()
            };
            let err = config.validate().unwrap_err();
            assert!(
                matches!(&err, GslocError::ConfigValidation(msg) if msg.contains("plain file name")),
                "locale {locale:?} should be rejected, got {err}"
            );
        }

        let config = Config {
            locales: vec![LocaleColumn::new("B", "pt-BR"), LocaleColumn::new("C", "zh.Hant")],
            ..valid()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_column_labels() {
        let config = Config {
            keys_column: "a".to_string(),
            ..valid()
        };
        assert!(config.validate().is_err());

        let config = Config {
            locales: vec![LocaleColumn::new("B1", "en")],
            ..valid()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_example_round_trips_and_validates() {
        let example = Config::example();
        let parsed = Config::from_yaml(&example.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed, example);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_write_example_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("conf.yaml");

        write_example(&path, false).unwrap();
        assert!(write_example(&path, false).is_err());
        assert!(write_example(&path, true).is_ok());
    }
}
