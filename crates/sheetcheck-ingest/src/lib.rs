//! Loading sheets and rule files from disk.

pub mod error;
pub mod rules;
pub mod sheet;

pub use error::{IngestError, Result};
pub use rules::{load_rules, parse_rules_csv, parse_rules_json};
pub use sheet::{read_sheet, read_sheet_from_reader};
