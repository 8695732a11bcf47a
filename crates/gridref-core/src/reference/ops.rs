//! String-level reference operations.
//!
//! Thin wrappers over [`CellRef`] and [`CellRange`] for callers that hold
//! addresses as text (formula bars, CSV mappers). Ranges are taken as given:
//! only [`normalize_range_ref`] reorders corners, so normalize first before
//! expanding, measuring or testing membership.

use super::cell_ref::{AnchoredCellRef, CellRef};
use super::column::column_to_letter;
use super::range::{CellRange, ExpandLimits, RangeSize};
use crate::error::Result;

/// Format zero-based coordinates as an A1 reference.
pub fn create_cell_ref(row: usize, col: usize) -> String {
    format!("{}{}", column_to_letter(col), row as u128 + 1)
}

pub fn parse_cell_ref(reference: &str) -> Result<CellRef> {
    CellRef::parse(reference)
}

/// Parse keeping the `$` markers.
pub fn parse_anchored_cell_ref(reference: &str) -> Result<AnchoredCellRef> {
    AnchoredCellRef::parse(reference)
}

/// Move a reference by whole rows and columns. `$` markers are dropped.
pub fn offset_cell_ref(reference: &str, row_offset: isize, col_offset: isize) -> Result<String> {
    let cell = CellRef::parse(reference)?;
    Ok(cell.offset(row_offset, col_offset)?.to_string())
}

pub fn is_range_ref(reference: &str) -> bool {
    reference.contains(':')
}

pub fn normalize_range_ref(range: &str) -> Result<String> {
    Ok(CellRange::parse(range)?.normalized().to_string())
}

/// Every cell of the range in row-major order.
pub fn expand_range_ref(range: &str) -> Result<Vec<String>> {
    Ok(CellRange::parse(range)?
        .cells()
        .map(|cell| cell.to_string())
        .collect())
}

/// Like [`expand_range_ref`] but refuses ranges over `limits.max_cells`.
pub fn expand_range_ref_bounded(range: &str, limits: &ExpandLimits) -> Result<Vec<String>> {
    Ok(CellRange::parse(range)?
        .expand(limits)?
        .into_iter()
        .map(|cell| cell.to_string())
        .collect())
}

pub fn is_cell_in_range(cell: &str, range: &str) -> Result<bool> {
    let cell = CellRef::parse(cell)?;
    Ok(CellRange::parse(range)?.contains(&cell))
}

/// Overlapping part of two ranges, `None` when they are disjoint.
pub fn intersect_ranges(range1: &str, range2: &str) -> Result<Option<String>> {
    let a = CellRange::parse(range1)?;
    let b = CellRange::parse(range2)?;
    Ok(a.intersect(&b).map(|r| r.to_string()))
}

pub fn get_range_size(range: &str) -> Result<RangeSize> {
    Ok(CellRange::parse(range)?.size())
}
