//! EAN-13 validation.

use super::checksum::standard_checksum_valid;

/// Token accepted in place of a barcode when none is assigned.
pub const SEM_GTIN: &str = "SEM GTIN";

const EAN_LENGTH: usize = 13;

/// Valid when the code is the "SEM GTIN" token or a checksum-correct EAN-13.
pub fn is_valid_ean(ean: &str) -> bool {
    if is_sem_gtin(ean) {
        return true;
    }
    is_valid_ean_format(ean) && is_valid_ean_checksum(ean)
}

pub fn is_valid_ean_format(ean: &str) -> bool {
    ean.chars().count() == EAN_LENGTH
}

pub fn is_valid_ean_checksum(ean: &str) -> bool {
    standard_checksum_valid(ean)
}

pub fn is_sem_gtin(ean: &str) -> bool {
    ean.eq_ignore_ascii_case(SEM_GTIN)
}
