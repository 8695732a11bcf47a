//! Rectangular cell ranges such as `B2:D10`.
//!
//! A range is stored exactly as written. Most consumers want the corners
//! ordered top-left to bottom-right, which is what [`CellRange::normalized`]
//! produces. [`CellRange::contains`], [`CellRange::size`] and
//! [`CellRange::cells`] read the corners as given and do not reorder them:
//! a reversed range contains nothing, iterates nothing and reports a
//! non-positive size.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use super::cell_ref::CellRef;
use crate::error::{RefError, Result};

/// Upper bound on cells materialized by bounded expansion.
pub const DEFAULT_MAX_EXPANDED_CELLS: usize = 1_000_000;

/// Limits applied when a range is expanded into a list of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpandLimits {
    pub max_cells: usize,
}

impl Default for ExpandLimits {
    fn default() -> Self {
        ExpandLimits {
            max_cells: DEFAULT_MAX_EXPANDED_CELLS,
        }
    }
}

/// Split a range reference on `:` into its two corner strings.
///
/// Exactly two non-empty parts are required. The parts themselves are not
/// checked against the cell grammar here.
pub fn parse_range_ref(range: &str) -> Result<(&str, &str)> {
    let mut parts = range.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(end), None) if !start.is_empty() && !end.is_empty() => Ok((start, end)),
        _ => {
            log::debug!("rejected range {:?}", range);
            Err(RefError::InvalidRange(range.to_string()))
        }
    }
}

/// Row, column and cell counts of a range.
///
/// Signed so that a reversed range reports its (meaningless) non-positive
/// dimensions instead of overflowing.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct RangeSize {
    pub rows: i128,
    pub cols: i128,
    pub total: i128,
}

/// A rectangular span between two corner cells, inclusive.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellRange {
    pub start: CellRef,
    pub end: CellRef,
}

impl CellRange {
    pub fn new(start: CellRef, end: CellRef) -> CellRange {
        CellRange { start, end }
    }

    pub fn parse(range: &str) -> Result<CellRange> {
        let (start, end) = parse_range_ref(range)?;
        Ok(CellRange {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    /// Reorder the corners so `start` is top-left and `end` bottom-right.
    pub fn normalized(&self) -> CellRange {
        CellRange {
            start: CellRef::new(
                self.start.row.min(self.end.row),
                self.start.col.min(self.end.col),
            ),
            end: CellRef::new(
                self.start.row.max(self.end.row),
                self.start.col.max(self.end.col),
            ),
        }
    }

    pub fn is_normalized(&self) -> bool {
        self.start.row <= self.end.row && self.start.col <= self.end.col
    }

    /// Whether `cell` lies between the corners as written.
    pub fn contains(&self, cell: &CellRef) -> bool {
        cell.row >= self.start.row
            && cell.row <= self.end.row
            && cell.col >= self.start.col
            && cell.col <= self.end.col
    }

    /// Overlap of two ranges, or `None` when they are disjoint.
    pub fn intersect(&self, other: &CellRange) -> Option<CellRange> {
        let start = CellRef::new(
            self.start.row.max(other.start.row),
            self.start.col.max(other.start.col),
        );
        let end = CellRef::new(
            self.end.row.min(other.end.row),
            self.end.col.min(other.end.col),
        );
        if start.row > end.row || start.col > end.col {
            return None;
        }
        Some(CellRange { start, end })
    }

    pub fn size(&self) -> RangeSize {
        let rows = self.end.row as i128 - self.start.row as i128 + 1;
        let cols = self.end.col as i128 - self.start.col as i128 + 1;
        RangeSize {
            rows,
            cols,
            total: rows.saturating_mul(cols),
        }
    }

    /// Number of cells [`CellRange::cells`] will yield.
    pub fn cell_count(&self) -> u128 {
        if !self.is_normalized() {
            return 0;
        }
        let rows = (self.end.row - self.start.row) as u128 + 1;
        let cols = (self.end.col - self.start.col) as u128 + 1;
        rows.saturating_mul(cols)
    }

    /// Row-major iterator over every cell between the corners.
    pub fn cells(&self) -> RangeCells {
        RangeCells {
            start_col: self.start.col,
            end: self.end,
            next: self.is_normalized().then_some(self.start),
            remaining: self.cell_count(),
        }
    }

    /// Collect the cells, refusing ranges larger than `limits.max_cells`.
    pub fn expand(&self, limits: &ExpandLimits) -> Result<Vec<CellRef>> {
        let cells = self.cell_count();
        if cells > limits.max_cells as u128 {
            log::debug!(
                "refusing to expand {} ({} cells, limit {})",
                self,
                cells,
                limits.max_cells
            );
            return Err(RefError::RangeTooLarge {
                range: self.to_string(),
                cells,
                limit: limits.max_cells,
            });
        }
        Ok(self.cells().collect())
    }
}

impl FromStr for CellRange {
    type Err = RefError;

    fn from_str(s: &str) -> Result<Self> {
        CellRange::parse(s)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// Iterator returned by [`CellRange::cells`].
#[derive(Clone, Debug)]
pub struct RangeCells {
    start_col: usize,
    end: CellRef,
    next: Option<CellRef>,
    remaining: u128,
}

impl Iterator for RangeCells {
    type Item = CellRef;

    fn next(&mut self) -> Option<CellRef> {
        let current = self.next?;
        self.next = if current.col < self.end.col {
            Some(CellRef::new(current.row, current.col + 1))
        } else if current.row < self.end.row {
            Some(CellRef::new(current.row + 1, self.start_col))
        } else {
            None
        };
        self.remaining = self.remaining.saturating_sub(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for RangeCells {}
