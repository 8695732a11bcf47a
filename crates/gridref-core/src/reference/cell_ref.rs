//! Cell reference parsing and formatting.
//!
//! Provides bidirectional conversion between A1-style cell references
//! (e.g., "A1", "B2", "AA100") and zero-indexed row/column coordinates.
//!
//! The grammar is `^(\$?)([A-Z]+)(\$?)([0-9]+)$`. Letters are uppercase only
//! and rows are 1-based. The `$` absolute markers are accepted everywhere;
//! [`CellRef`] drops them while [`AnchoredCellRef`] keeps them.
//!
//! # Examples
//!
//! ```
//! use gridref_core::reference::CellRef;
//!
//! let cell: CellRef = "B3".parse().unwrap();
//! assert_eq!(cell.row, 2); // 0-indexed
//! assert_eq!(cell.col, 1);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::column::{column_to_letter, letter_to_column};
use crate::error::{RefError, Result};

/// A reference to a cell by row and column indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

/// Which axes of a reference carry a `$` marker.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Anchor {
    #[default]
    Relative,
    AbsoluteRow,
    AbsoluteCol,
    AbsoluteBoth,
}

impl Anchor {
    fn from_markers(col_absolute: bool, row_absolute: bool) -> Anchor {
        match (col_absolute, row_absolute) {
            (false, false) => Anchor::Relative,
            (false, true) => Anchor::AbsoluteRow,
            (true, false) => Anchor::AbsoluteCol,
            (true, true) => Anchor::AbsoluteBoth,
        }
    }

    pub fn row_absolute(self) -> bool {
        matches!(self, Anchor::AbsoluteRow | Anchor::AbsoluteBoth)
    }

    pub fn col_absolute(self) -> bool {
        matches!(self, Anchor::AbsoluteCol | Anchor::AbsoluteBoth)
    }
}

/// A cell reference that remembers its `$` markers (e.g. `$A1`, `B$2`).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct AnchoredCellRef {
    pub cell: CellRef,
    pub anchor: Anchor,
}

struct Parts<'a> {
    col_absolute: bool,
    letters: &'a str,
    row_absolute: bool,
    digits: &'a str,
}

fn cell_ref_re() -> &'static Regex {
    static CELL_RE: OnceLock<Regex> = OnceLock::new();
    CELL_RE.get_or_init(|| {
        Regex::new(r"^(?<col_abs>\$?)(?<letters>[A-Z]+)(?<row_abs>\$?)(?<digits>[0-9]+)$")
            .expect("cell reference regex must compile")
    })
}

fn split_a1(name: &str) -> Result<Parts<'_>> {
    let Some(caps) = cell_ref_re().captures(name) else {
        log::debug!("rejected cell reference {:?}", name);
        return Err(RefError::InvalidReference(name.to_string()));
    };
    Ok(Parts {
        col_absolute: caps.name("col_abs").is_some_and(|m| !m.as_str().is_empty()),
        letters: caps.name("letters").map_or("", |m| m.as_str()),
        row_absolute: caps.name("row_abs").is_some_and(|m| !m.as_str().is_empty()),
        digits: caps.name("digits").map_or("", |m| m.as_str()),
    })
}

fn coordinates(name: &str, parts: &Parts<'_>) -> Result<CellRef> {
    let invalid = || RefError::InvalidReference(name.to_string());

    let col = letter_to_column(parts.letters).map_err(|_| invalid())?;
    // Row 0 matches the grammar but has no zero-based index. Row numbers are
    // read wider than usize so the 1-based form of usize::MAX still parses.
    let row = parts
        .digits
        .parse::<u128>()
        .ok()
        .and_then(|r| r.checked_sub(1))
        .and_then(|r| usize::try_from(r).ok())
        .ok_or_else(invalid)?;

    log::trace!("parsed {} as row {} col {}", name, row, col);
    Ok(CellRef::new(row, col))
}

/// Shift a coordinate, failing when it would leave the grid.
fn shift(reference: &str, cell: CellRef, row_offset: isize, col_offset: isize) -> Result<CellRef> {
    let row = cell.row as i128 + row_offset as i128;
    let col = cell.col as i128 + col_offset as i128;
    if row < 0 || col < 0 {
        return Err(RefError::NegativeCoordinate {
            reference: reference.to_string(),
            row,
            col,
        });
    }
    match (usize::try_from(row), usize::try_from(col)) {
        (Ok(row), Ok(col)) => Ok(CellRef::new(row, col)),
        _ => Err(RefError::InvalidReference(reference.to_string())),
    }
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell reference from A1 notation, discarding any `$` markers.
    pub fn parse(name: &str) -> Result<CellRef> {
        let parts = split_a1(name)?;
        coordinates(name, &parts)
    }

    /// Move the reference by the given deltas.
    ///
    /// Returns [`RefError::NegativeCoordinate`] when either axis would drop
    /// below zero.
    pub fn offset(&self, row_offset: isize, col_offset: isize) -> Result<CellRef> {
        shift(&self.to_string(), *self, row_offset, col_offset)
    }
}

impl FromStr for CellRef {
    type Err = RefError;

    fn from_str(s: &str) -> Result<Self> {
        CellRef::parse(s)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_to_letter(self.col), self.row as u128 + 1)
    }
}

impl AnchoredCellRef {
    pub fn new(cell: CellRef, anchor: Anchor) -> AnchoredCellRef {
        AnchoredCellRef { cell, anchor }
    }

    pub fn parse(name: &str) -> Result<AnchoredCellRef> {
        let parts = split_a1(name)?;
        let cell = coordinates(name, &parts)?;
        Ok(AnchoredCellRef {
            cell,
            anchor: Anchor::from_markers(parts.col_absolute, parts.row_absolute),
        })
    }

    /// Move only the relative axes; `$`-anchored axes stay put.
    pub fn offset(&self, row_offset: isize, col_offset: isize) -> Result<AnchoredCellRef> {
        let row_offset = if self.anchor.row_absolute() { 0 } else { row_offset };
        let col_offset = if self.anchor.col_absolute() { 0 } else { col_offset };
        let cell = shift(&self.to_string(), self.cell, row_offset, col_offset)?;
        Ok(AnchoredCellRef { cell, anchor: self.anchor })
    }
}

impl FromStr for AnchoredCellRef {
    type Err = RefError;

    fn from_str(s: &str) -> Result<Self> {
        AnchoredCellRef::parse(s)
    }
}

impl fmt::Display for AnchoredCellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col_mark = if self.anchor.col_absolute() { "$" } else { "" };
        let row_mark = if self.anchor.row_absolute() { "$" } else { "" };
        write!(
            f,
            "{}{}{}{}",
            col_mark,
            column_to_letter(self.cell.col),
            row_mark,
            self.cell.row as u128 + 1
        )
    }
}
