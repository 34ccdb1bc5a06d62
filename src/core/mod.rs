pub mod column;
pub mod extractor;
pub mod generator;
pub mod key_path;

pub use column::{column_index, column_label, is_column_label};
pub use extractor::extract_translations;
pub use generator::{generate, GenerationReport, LocaleReport};
pub use key_path::{build_tree, insert_path, LocaleTree};
