pub mod error;
pub mod report;
pub mod rule;
pub mod table;

pub use error::{Result, RuleError};
pub use report::{CellFailure, ValidationReport};
pub use rule::{DEFAULT_ERROR_MESSAGE, IdentifierScheme, RuleKind, ValidationRule};
pub use table::{SheetTable, cell_text};
