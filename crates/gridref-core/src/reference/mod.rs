//! Cell reference and range algebra.
//!
//! - [`letter_to_column`], [`column_to_letter`] - Bijective base-26 column letters
//! - [`CellRef`], [`AnchoredCellRef`] - A1 notation ↔ row/col indices
//! - [`CellRange`] - Normalization, membership, intersection, size, expansion
//! - [`ops`] - The same operations over plain strings

mod cell_ref;
mod column;
pub mod ops;
mod range;

pub use cell_ref::{Anchor, AnchoredCellRef, CellRef};
pub use column::{column_to_letter, letter_to_column};
pub use ops::{
    create_cell_ref, expand_range_ref, expand_range_ref_bounded, get_range_size,
    intersect_ranges, is_cell_in_range, is_range_ref, normalize_range_ref, offset_cell_ref,
    parse_anchored_cell_ref, parse_cell_ref,
};
pub use range::{
    CellRange, DEFAULT_MAX_EXPANDED_CELLS, ExpandLimits, RangeCells, RangeSize, parse_range_ref,
};
