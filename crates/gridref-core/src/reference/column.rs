//! Column letter codec.
//!
//! Columns are written as bijective base-26 numerals: `A`..`Z` are the digits
//! 1..26 and there is no zero digit, so `Z` is followed by `AA`, not `BA`.
//! Indices are zero-based (`A` is 0).

use crate::error::{RefError, Result};

/// Convert column letters to a zero-based index (A -> 0, Z -> 25, AA -> 26).
///
/// Only uppercase ASCII letters are accepted. Lowercase input, an empty
/// string, or a numeral too large for `usize` is rejected.
pub fn letter_to_column(letters: &str) -> Result<usize> {
    let invalid = || RefError::InvalidColumn(letters.to_string());
    if letters.is_empty() {
        return Err(invalid());
    }

    // Accumulate one past the index so usize::MAX itself still fits.
    let mut acc = 0u128;
    for c in letters.bytes() {
        if !c.is_ascii_uppercase() {
            return Err(invalid());
        }
        let digit = (c - b'A') as u128 + 1;
        acc = acc
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(invalid)?;
    }

    usize::try_from(acc - 1).map_err(|_| invalid())
}

/// Convert a zero-based column index to letters (0 -> A, 25 -> Z, 26 -> AA).
pub fn column_to_letter(col: usize) -> String {
    let mut out = Vec::new();
    let mut n = col as u128 + 1;
    while n > 0 {
        n -= 1;
        out.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    out.reverse();
    // Only A-Z bytes were pushed.
    out.into_iter().map(char::from).collect()
}
