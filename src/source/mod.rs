//! Where sheet values come from
//!
//! The generator only needs "all values of one tab" as a grid. Production
//! runs use [`GoogleSheetsClient`]; tests feed an [`InMemorySheet`].

mod google;

pub use google::GoogleSheetsClient;

use crate::error::GslocResult;
use crate::types::SheetData;

/// Fetches every value of one worksheet in a single call
pub trait SheetSource {
    fn fetch_values(&self, spreadsheet_id: &str, sheet_name: &str) -> GslocResult<SheetData>;
}

/// A fixed grid, returned as-is for any spreadsheet/tab
#[derive(Debug, Clone, Default)]
pub struct InMemorySheet {
    rows: SheetData,
}

impl InMemorySheet {
    pub fn new(rows: SheetData) -> Self {
        Self { rows }
    }
}

impl SheetSource for InMemorySheet {
    fn fetch_values(&self, _spreadsheet_id: &str, _sheet_name: &str) -> GslocResult<SheetData> {
        Ok(self.rows.clone())
    }
}
