//! gridref_core - A1 cell references and rectangular range algebra.

pub mod error;
pub mod reference;

pub use error::{RefError, Result};
pub use reference::{AnchoredCellRef, CellRange, CellRef, RangeSize};
