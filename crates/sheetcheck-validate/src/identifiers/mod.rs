//! Product identifier validators.
//!
//! Every validator is a pure function over a string. Malformed input
//! (non-digits, wrong length, non-ASCII) is reported as invalid and never
//! panics. The `*_checksum` variants return [`ChecksumError`] so callers can
//! tell an unparseable code from a wrong check digit.

mod asin;
mod checksum;
mod ean;
mod gtin;
mod isbn;

pub use asin::is_valid_asin;
pub use checksum::{
    ChecksumError, alternating_check_digit, alternating_checksum, gtin_check_digit, parse_digits,
    standard_checksum_valid,
};
pub use ean::{SEM_GTIN, is_sem_gtin, is_valid_ean, is_valid_ean_checksum, is_valid_ean_format};
pub use gtin::{GTIN_LENGTHS, gtin_checksum, is_valid_gtin, is_valid_upc};
pub use isbn::{
    ean_is_isbn, is_valid_isbn, is_valid_isbn_format, is_valid_isbn10_checksum,
    is_valid_isbn13_checksum, isbn10_checksum, isbn13_checksum,
};

use sheetcheck_model::IdentifierScheme;

/// Validate `code` under `scheme`.
///
/// [`IdentifierScheme::GtinFamily`] accepts a valid EAN-13 (including the
/// "SEM GTIN" token) or any valid GTIN-8/12/13/14.
pub fn validate(scheme: IdentifierScheme, code: &str) -> bool {
    match scheme {
        IdentifierScheme::GtinFamily => is_valid_ean(code) || is_valid_gtin(code),
        IdentifierScheme::Ean => is_valid_ean(code),
        IdentifierScheme::Gtin => is_valid_gtin(code),
        IdentifierScheme::Upc => is_valid_upc(code),
        IdentifierScheme::Isbn => is_valid_isbn(code),
        IdentifierScheme::Asin => is_valid_asin(code),
    }
}

/// Every specific scheme `code` satisfies, in [`IdentifierScheme::all`] order.
///
/// [`IdentifierScheme::GtinFamily`] is left out since it only unions
/// `Ean` and `Gtin`.
pub fn classify(code: &str) -> Vec<IdentifierScheme> {
    IdentifierScheme::all()
        .iter()
        .copied()
        .filter(|scheme| *scheme != IdentifierScheme::GtinFamily)
        .filter(|scheme| validate(*scheme, code))
        .collect()
}
