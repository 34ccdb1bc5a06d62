//! Orchestration: config → one fetch → one file per locale

use super::column::column_index;
use super::extractor::extract_translations;
use crate::config::Config;
use crate::error::{GslocError, GslocResult};
use crate::source::SheetSource;
use crate::types::OutputFormat;
use crate::writer::write_locale_file;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// What a successful run wrote
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub format: OutputFormat,
    pub rows_fetched: usize,
    pub locales: Vec<LocaleReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleReport {
    pub locale: String,
    pub path: PathBuf,
    pub entries: usize,
}

/// Generate every locale file described by `config`.
///
/// The sheet is fetched once. The first failure stops the run; files of
/// locales already written stay on disk.
pub fn generate(config: &Config, source: &dyn SheetSource) -> GslocResult<GenerationReport> {
    config.validate()?;

    fs::create_dir_all(&config.output_dir)?;

    let rows = source.fetch_values(&config.spreadsheet_id, &config.sheet_name)?;
    if rows.is_empty() {
        return Err(GslocError::DataSource(format!(
            "no data found in sheet '{}'",
            config.sheet_name
        )));
    }
    info!(rows = rows.len(), "sheet fetched");

    let key_column = column_index(&config.keys_column);
    let format = config.output_format();
    let mut locales = Vec::with_capacity(config.locales.len());

    for locale in &config.locales {
        let locale_column = column_index(&locale.column);
        debug!(
            locale = %locale.locale,
            key_column,
            locale_column,
            "resolved columns"
        );

        let translations =
            extract_translations(&rows, key_column, locale_column, config.rows_to_skip)?;
        let path = write_locale_file(&config.output_dir, &locale.locale, &translations, format)?;

        info!(locale = %locale.locale, entries = translations.len(), path = %path.display(), "locale file written");
        locales.push(LocaleReport {
            locale: locale.locale.clone(),
            path,
            entries: translations.len(),
        });
    }

    Ok(GenerationReport {
        format,
        rows_fetched: rows.len(),
        locales,
    })
}
