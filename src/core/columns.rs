//! Orbital column detection
//!
//! The header row names one orbital per column. Only columns with a header
//! take part in the orbital vectors, so every vector row is sliced by the
//! same selection.

use crate::error::{DrtError, DrtResult};
use crate::excel::layout::DrtLayout;
use crate::excel::Grid;
use crate::types::CellValue;
use std::fmt;
use tracing::debug;

/// Ascending column indices that carry an orbital header. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection(Vec<usize>);

impl ColumnSelection {
    pub fn new(indices: Vec<usize>) -> DrtResult<Self> {
        if indices.is_empty() {
            return Err(DrtError::Config(
                "No valid orbital columns found in 3rd row.".to_string(),
            ));
        }
        Ok(Self(indices))
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Space-join the selected cells of one row, in selection order
    pub fn join_row(&self, row: &[CellValue]) -> String {
        self.0
            .iter()
            .map(|&col| row.get(col).unwrap_or(&CellValue::Empty).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ColumnSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Scan the header row from the first orbital column to the end of the sheet
pub fn detect_orbital_columns(grid: &Grid, layout: &DrtLayout) -> DrtResult<ColumnSelection> {
    let header = grid.row(layout.header_row).map_err(|reason| {
        DrtError::Config(format!("orbital header row is missing: {reason}"))
    })?;

    let indices: Vec<usize> = header
        .iter()
        .enumerate()
        .skip(layout.first_orbital_col)
        .filter(|(_, cell)| !cell.is_blank())
        .map(|(col, _)| col)
        .collect();

    debug!(columns = ?indices, "scanned orbital header row");
    ColumnSelection::new(indices)
}
