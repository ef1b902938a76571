//! ISBN-10 and ISBN-13 validation.
//!
//! A code is a valid ISBN when it has one of the printable ISBN layouts and
//! passes the ISBN-10 checksum, or failing that the ISBN-13 checksum.
//!
//! Printable layouts:
//!
//! - `ISBN 0-306-40615-2`, `ISBN-10: 0 306 40615 2`, `0-306-40615-2`
//! - `ISBN 978-0-306-40615-7`, `ISBN-13: 978 0 306 40615 7`
//!
//! Groups are separated by one consistent separator, a hyphen or a space.
//! The ISBN-10 check character is a digit or an uppercase `X`.

use std::sync::LazyLock;

use regex::Regex;

use super::checksum::{ChecksumError, alternating_checksum, parse_digits};

static ISBN10_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ISBN(?:-10)?:?\x20*").expect("Invalid ISBN-10 prefix regex"));

static ISBN13_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ISBN(?:-13)?:?\x20*").expect("Invalid ISBN-13 prefix regex"));

static ISBN_SHAPED_EAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:97[89])?[0-9]{9}[0-9X]$").expect("Invalid ISBN EAN regex"));

/// Lengths of the three numbered groups between prefix element and check character.
const GROUP_LENGTHS: [(usize, usize); 3] = [(1, 5), (1, 7), (1, 6)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Four groups, 13 characters with separators
    Ten,
    /// `978`/`979` plus four groups, 17 characters with separators
    Thirteen,
}

impl Layout {
    fn printed_len(self) -> usize {
        match self {
            Layout::Ten => 13,
            Layout::Thirteen => 17,
        }
    }
}

pub fn is_valid_isbn(isbn: &str) -> bool {
    if !is_valid_isbn_format(isbn) {
        return false;
    }
    is_valid_isbn10_checksum(isbn) || is_valid_isbn13_checksum(isbn)
}

/// Whether `isbn` has one of the printable ISBN-10 or ISBN-13 layouts.
pub fn is_valid_isbn_format(isbn: &str) -> bool {
    let Some((declared, body)) = split_prefix(isbn) else {
        return false;
    };
    let layout = match declared {
        Some(layout) => layout,
        None => match body.len() {
            13 => Layout::Ten,
            17 => Layout::Thirteen,
            _ => return false,
        },
    };
    matches_layout(body, layout)
}

/// Split an optional `ISBN`, `ISBN-10` or `ISBN-13` prefix from the body.
///
/// A prefix must be followed by an optional colon and at least one space.
fn split_prefix(isbn: &str) -> Option<(Option<Layout>, &str)> {
    let Some(rest) = isbn.strip_prefix("ISBN") else {
        return Some((None, isbn));
    };
    let (declared, rest) = if let Some(rest) = rest.strip_prefix("-10") {
        (Some(Layout::Ten), rest)
    } else if let Some(rest) = rest.strip_prefix("-13") {
        (Some(Layout::Thirteen), rest)
    } else {
        (None, rest)
    };
    let rest = rest.strip_prefix(':').unwrap_or(rest);
    let body = rest.trim_start_matches(' ');
    if body.len() == rest.len() {
        return None;
    }
    Some((declared, body))
}

fn matches_layout(body: &str, layout: Layout) -> bool {
    if body.len() != layout.printed_len() {
        return false;
    }
    let Some(separator) = body.chars().find(|ch| !ch.is_ascii_digit()) else {
        return false;
    };
    if separator != '-' && separator != ' ' {
        return false;
    }
    let groups: Vec<&str> = body.split(separator).collect();
    let numbered = match layout {
        Layout::Ten if groups.len() == 4 => &groups[..3],
        Layout::Thirteen if groups.len() == 5 => {
            if groups[0] != "978" && groups[0] != "979" {
                return false;
            }
            &groups[1..4]
        }
        _ => return false,
    };
    let groups_ok = numbered
        .iter()
        .zip(GROUP_LENGTHS)
        .all(|(group, (min, max))| {
            (min..=max).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_digit())
        });
    let Some(check) = groups.last() else {
        return false;
    };
    let check_ok = match layout {
        Layout::Ten => *check == "X" || is_single_digit(check),
        Layout::Thirteen => is_single_digit(check),
    };
    groups_ok && check_ok
}

fn is_single_digit(group: &str) -> bool {
    group.len() == 1 && group.bytes().all(|b| b.is_ascii_digit())
}

/// Remove every `prefix` match, then all hyphens and spaces.
fn compact(prefix: &Regex, isbn: &str) -> String {
    prefix
        .replace_all(isbn, "")
        .chars()
        .filter(|ch| *ch != '-' && *ch != ' ')
        .collect()
}

/// Verify the mod-11 ISBN-10 checksum.
///
/// After compaction the code must have 10 characters, the first nine digits.
/// The tenth is the digit `Σ(i+1)·dᵢ mod 11`, or `X` when that is 10.
pub fn isbn10_checksum(isbn: &str) -> Result<bool, ChecksumError> {
    let compacted = compact(&ISBN10_PREFIX, isbn);
    let found = compacted.chars().count();
    if found != 10 {
        return Err(ChecksumError::WrongLength { found });
    }
    let mut chars = compacted.chars();
    let Some(check) = chars.next_back() else {
        return Err(ChecksumError::Empty);
    };
    let digits = parse_digits(chars.as_str())?;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(index, &digit)| (index as u32 + 1) * u32::from(digit))
        .sum();
    let expected = match sum % 11 {
        10 => 'X',
        remainder => char::from(b'0' + remainder as u8),
    };
    Ok(check == expected)
}

pub fn is_valid_isbn10_checksum(isbn: &str) -> bool {
    isbn10_checksum(isbn).unwrap_or(false)
}

/// Verify the ISBN-13 checksum, which is the EAN-13 alternating checksum.
pub fn isbn13_checksum(isbn: &str) -> Result<bool, ChecksumError> {
    let compacted = compact(&ISBN13_PREFIX, isbn);
    let found = compacted.chars().count();
    if found != 13 {
        return Err(ChecksumError::WrongLength { found });
    }
    alternating_checksum(&compacted)
}

pub fn is_valid_isbn13_checksum(isbn: &str) -> bool {
    isbn13_checksum(isbn).unwrap_or(false)
}

/// Whether a bare EAN is shaped like an ISBN.
///
/// This classifies a code for routing to [`is_valid_isbn`]; it does not
/// check validity.
pub fn ean_is_isbn(ean: &str) -> bool {
    ISBN_SHAPED_EAN.is_match(ean)
}
