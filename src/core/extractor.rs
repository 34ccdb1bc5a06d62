//! Row extraction: pairs the key column with one locale column

use super::column::column_label;
use crate::error::{GslocError, GslocResult};
use crate::types::{CellValue, Translation};
use tracing::debug;

/// Collect the translations of one locale column, in row order.
///
/// Rows before `rows_to_skip` are never looked at. A row is skipped when it
/// is too short to hold both columns, when its value cell is not non-empty
/// text, or when its key is empty. A key cell that is not text aborts the
/// extraction with [`GslocError::MalformedKeyCell`].
pub fn extract_translations(
    rows: &[Vec<CellValue>],
    key_column: usize,
    locale_column: usize,
    rows_to_skip: usize,
) -> GslocResult<Vec<Translation>> {
    let mut translations = Vec::with_capacity(rows.len().saturating_sub(rows_to_skip));

    for (i, row) in rows.iter().enumerate().skip(rows_to_skip) {
        let (Some(key_cell), Some(value_cell)) = (row.get(key_column), row.get(locale_column))
        else {
            debug!(row = i + 1, "skipping short row");
            continue;
        };

        let value = match value_cell.as_text() {
            Some(v) if !v.is_empty() => v,
            _ => continue,
        };

        let key = key_cell
            .as_text()
            .ok_or_else(|| GslocError::MalformedKeyCell {
                row: i + 1,
                column: column_label(key_column),
                found: key_cell.to_string(),
            })?;

        if key.is_empty() {
            debug!(row = i + 1, "skipping row with empty key");
            continue;
        }

        translations.push(Translation::new(key, value));
    }

    Ok(translations)
}
