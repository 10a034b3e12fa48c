//! CSV reading utilities.

mod header;
mod reader;

pub use header::{CsvHeaders, normalize_header};
pub use reader::{read_csv_header, read_csv_table, validate_encoding};
