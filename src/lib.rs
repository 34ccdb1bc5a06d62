//! gsloc - localization files from Google Sheets
//!
//! Reads one spreadsheet tab, pairs a key column with one column per locale,
//! and writes `<output_dir>/<locale>.json` for each locale.
//!
//! # Features
//!
//! - Spreadsheet-style column labels (`A`, `AB`) in a YAML config
//! - Header rows skipped, short or empty rows ignored
//! - Flat (`{"a.b": "x"}`) or tree (`{"a": {"b": "x"}}`) output
//! - Service-account authentication for private sheets
//!
//! # Example
//!
//! ```no_run
//! use gsloc::config::Config;
//! use gsloc::core::generate;
//! use gsloc::source::GoogleSheetsClient;
//! use std::path::Path;
//!
//! let config = Config::load(Path::new("conf.yaml"))?;
//! let client = GoogleSheetsClient::new(config.service_account_json.clone())?;
//! let report = generate(&config, &client)?;
//!
//! for locale in &report.locales {
//!     println!("{}: {} keys", locale.locale, locale.entries);
//! }
//! # Ok::<(), gsloc::error::GslocError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod source;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use config::Config;
pub use error::{GslocError, GslocResult};
pub use types::{CellValue, LocaleColumn, OutputFormat, SheetData, Translation};
