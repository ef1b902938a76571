//! Library components of the sheetcheck CLI.

pub mod logging;
pub mod output;
