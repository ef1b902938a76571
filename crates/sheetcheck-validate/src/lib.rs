//! Per-column rule evaluation for tabular data.
//!
//! - [`identifiers`]: ISBN, EAN/GTIN, UPC and ASIN validators
//! - [`evaluator`]: one cell against one rule
//! - [`rule_set`]: rules keyed by column name
//! - [`engine`]: whole tables and row chunks

pub mod engine;
pub mod evaluator;
pub mod identifiers;
pub mod rule_set;

pub use engine::{validate_rows, validate_table};
pub use evaluator::{CompiledRule, evaluate, parse_number};
pub use rule_set::RuleSet;
