//! GTIN-8/12/13/14 and UPC validation.

use super::checksum::{ChecksumError, gtin_check_digit, parse_digits};

/// Code lengths accepted before padding to GTIN-14.
pub const GTIN_LENGTHS: [usize; 4] = [8, 12, 13, 14];

/// Verify a GTIN of any accepted length against its check digit.
///
/// Shorter codes are left-padded with zeros to 14 digits before the
/// 3,1,3,... weighting is applied.
pub fn gtin_checksum(code: &str) -> Result<bool, ChecksumError> {
    let digits = parse_digits(code)?;
    if !GTIN_LENGTHS.contains(&digits.len()) {
        return Err(ChecksumError::WrongLength {
            found: digits.len(),
        });
    }
    let mut padded = [0u8; 14];
    padded[14 - digits.len()..].copy_from_slice(&digits);
    let mut body = [0u8; 13];
    body.copy_from_slice(&padded[..13]);
    Ok(gtin_check_digit(&body) == padded[13])
}

pub fn is_valid_gtin(code: &str) -> bool {
    gtin_checksum(code).unwrap_or(false)
}

/// UPC codes share the GTIN check digit.
pub fn is_valid_upc(upc: &str) -> bool {
    is_valid_gtin(upc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upc_a_pads_to_gtin_14() {
        assert!(is_valid_gtin("036000291452"));
        assert!(is_valid_gtin("00036000291452"));
        assert!(!is_valid_gtin("036000291453"));
        assert!(is_valid_upc("036000291452"));
    }

    #[test]
    fn all_lengths() {
        assert!(is_valid_gtin("96385074"));
        assert!(is_valid_gtin("4006381333931"));
        assert!(is_valid_gtin("10614141000415"));
    }

    #[test]
    fn rejects_letters_and_other_lengths() {
        assert!(!is_valid_gtin("03600029145A"));
        assert!(!is_valid_gtin(" 036000291452"));
        assert!(!is_valid_gtin(""));
        assert!(!is_valid_gtin("0"));
        assert!(!is_valid_gtin("1234567"));
        assert!(!is_valid_gtin("03600029145"));
        assert!(!is_valid_gtin("000036000291452"));
        assert_eq!(
            gtin_checksum("0360002914"),
            Err(ChecksumError::WrongLength { found: 10 })
        );
        assert_eq!(gtin_checksum("036000291453"), Ok(false));
    }
}
