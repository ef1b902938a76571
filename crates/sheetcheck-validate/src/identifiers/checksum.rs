//! Digit parsing and the weighted checksums shared by the identifier families.

use thiserror::Error;

/// Why a code could not be checksummed at all.
///
/// A code that parses but carries the wrong check digit is not an error;
/// the checksum functions return `Ok(false)` for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChecksumError {
    #[error("code is empty")]
    Empty,
    #[error("non-digit {found:?} at position {position}")]
    NotDigit { position: usize, found: char },
    #[error("code has {found} digits")]
    WrongLength { found: usize },
}

/// Parse a run of ASCII digits into their values.
pub fn parse_digits(code: &str) -> Result<Vec<u8>, ChecksumError> {
    if code.is_empty() {
        return Err(ChecksumError::Empty);
    }
    code.chars()
        .enumerate()
        .map(|(position, ch)| match ch {
            '0'..='9' => Ok(ch as u8 - b'0'),
            found => Err(ChecksumError::NotDigit { position, found }),
        })
        .collect()
}

/// Check digit for `body` under the 1,3,1,3,... weighting.
///
/// The weight starts at 1 and advances as `(w + 2) % 4` after every digit.
pub fn alternating_check_digit(body: &[u8]) -> u8 {
    let mut weight = 1u32;
    let mut sum = 0u32;
    for &digit in body {
        sum += u32::from(digit) * weight;
        weight = (weight + 2) % 4;
    }
    ((10 - sum % 10) % 10) as u8
}

/// Verify a digit string whose last digit is the alternating check digit.
pub fn alternating_checksum(code: &str) -> Result<bool, ChecksumError> {
    let digits = parse_digits(code)?;
    let (check, body) = digits
        .split_last()
        .ok_or(ChecksumError::WrongLength { found: 0 })?;
    Ok(alternating_check_digit(body) == *check)
}

/// Boolean form of [`alternating_checksum`]; unparseable codes are invalid.
pub fn standard_checksum_valid(code: &str) -> bool {
    alternating_checksum(code).unwrap_or(false)
}

/// GTIN-14 check digit for the first 13 digits, weighted 3,1,3,...
pub fn gtin_check_digit(body: &[u8; 13]) -> u8 {
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(index, &digit)| u32::from(digit) * if index % 2 == 0 { 3 } else { 1 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_digits_reports_position() {
        assert_eq!(parse_digits("0123"), Ok(vec![0, 1, 2, 3]));
        assert_eq!(parse_digits(""), Err(ChecksumError::Empty));
        assert_eq!(
            parse_digits("12a4"),
            Err(ChecksumError::NotDigit {
                position: 2,
                found: 'a'
            })
        );
        assert!(parse_digits("１２").is_err());
    }

    #[test]
    fn alternating_weights() {
        // 9*1 + 7*3 + 8*1 + 0*3 + 3*1 + 0*3 + 6*1 + 4*3 + 0*1 + 6*3 + 1*1 + 5*3 = 93
        assert_eq!(alternating_check_digit(&[9, 7, 8, 0, 3, 0, 6, 4, 0, 6, 1, 5]), 7);
        assert_eq!(alternating_checksum("9780306406157"), Ok(true));
        assert_eq!(alternating_checksum("9780306406158"), Ok(false));
        assert!(!standard_checksum_valid("978030640615X"));
    }

    #[test]
    fn gtin_weights() {
        let body = [0, 0, 0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 5];
        assert_eq!(gtin_check_digit(&body), 2);
    }
}
