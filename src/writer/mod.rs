//! Locale file writer: one `<locale>.json` per configured locale

use crate::core::build_tree;
use crate::error::GslocResult;
use crate::types::{OutputFormat, Translation};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Path of the file written for `locale`
pub fn locale_file_path(output_dir: &Path, locale: &str) -> PathBuf {
    output_dir.join(format!("{locale}.json"))
}

/// Render translations in the requested layout.
///
/// Both layouts are two-space pretty JSON followed by a newline.
pub fn render(translations: &[Translation], format: OutputFormat) -> GslocResult<String> {
    let document = match format {
        OutputFormat::Flat => flat_document(translations),
        OutputFormat::Tree => build_tree(translations)?,
    };

    let mut out = serde_json::to_string_pretty(&Value::Object(document))?;
    out.push('\n');
    Ok(out)
}

/// Literal dotted keys, first-seen position, last value wins
fn flat_document(translations: &[Translation]) -> Map<String, Value> {
    let mut map = Map::new();
    for t in translations {
        map.insert(t.key.clone(), Value::String(t.value.clone()));
    }
    map
}

/// Create or truncate `<output_dir>/<locale>.json` and write the document
pub fn write_locale_file(
    output_dir: &Path,
    locale: &str,
    translations: &[Translation],
    format: OutputFormat,
) -> GslocResult<PathBuf> {
    let content = render(translations, format)?;
    let path = locale_file_path(output_dir, locale);
    fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GslocError;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_flat_exact_bytes() {
        let out = render(&[Translation::new("a.b", "x")], OutputFormat::Flat).unwrap();
        assert_eq!(out, "{\n  \"a.b\": \"x\"\n}\n");
    }

    #[test]
    fn test_flat_no_trailing_comma_and_order() {
        let out = render(
            &[
                Translation::new("z.last", "1"),
                Translation::new("a.first", "2"),
            ],
            OutputFormat::Flat,
        )
        .unwrap();
        assert_eq!(out, "{\n  \"z.last\": \"1\",\n  \"a.first\": \"2\"\n}\n");
    }

    #[test]
    fn test_flat_escapes_strings() {
        let out = render(
            &[Translation::new("quote", "say \"hi\"\nbye")],
            OutputFormat::Flat,
        )
        .unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["quote"], "say \"hi\"\nbye");
    }

    #[test]
    fn test_flat_empty() {
        let out = render(&[], OutputFormat::Flat).unwrap();
        assert_eq!(out, "{}\n");
    }

    #[test]
    fn test_tree_nested() {
        let out = render(
            &[Translation::new("a.b", "x"), Translation::new("a.c", "y")],
            OutputFormat::Tree,
        )
        .unwrap();
        assert_eq!(
            out,
            "{\n  \"a\": {\n    \"b\": \"x\",\n    \"c\": \"y\"\n  }\n}\n"
        );
    }

    #[test]
    fn test_tree_conflict_propagates() {
        let result = render(
            &[Translation::new("a", "x"), Translation::new("a.b", "y")],
            OutputFormat::Tree,
        );
        assert!(matches!(result, Err(GslocError::KeyPathConflict { .. })));
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = locale_file_path(dir.path(), "en");
        fs::write(&path, "stale content that is much longer than the new file").unwrap();

        let written = write_locale_file(
            dir.path(),
            "en",
            &[Translation::new("k", "v")],
            OutputFormat::Flat,
        )
        .unwrap();

        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n  \"k\": \"v\"\n}\n");
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let result = write_locale_file(&missing, "en", &[], OutputFormat::Tree);
        assert!(matches!(result, Err(GslocError::Io(_))));
    }
}
