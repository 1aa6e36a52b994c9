//! Excel importer implementation - Excel (.xlsx) → in-memory cell grid

use crate::error::{DrtError, DrtResult};
use crate::excel::layout::CellRef;
use crate::types::CellValue;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;
use tracing::debug;

/// Row-major grid of the first worksheet, addressed by absolute position
///
/// Leading blank rows and columns are kept, so (0, 0) is always A1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
    width: usize,
}

impl Grid {
    /// Load the first worksheet of an .xlsx workbook
    pub fn load<P: AsRef<Path>>(path: P) -> DrtResult<Self> {
        let path = path.as_ref();
        let load_error = |message: String| DrtError::Load {
            path: path.to_path_buf(),
            message,
        };

        let mut workbook: Xlsx<_> =
            open_workbook(path).map_err(|e| load_error(format!("failed to open workbook: {e}")))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| load_error("workbook has no worksheets".to_string()))?
            .map_err(|e| load_error(format!("failed to read first worksheet: {e}")))?;

        let grid = Self::from_range(&range);
        debug!(
            path = %path.display(),
            height = grid.height(),
            width = grid.width(),
            "loaded worksheet"
        );
        Ok(grid)
    }

    /// Build a grid from a calamine range, anchoring it at A1
    pub fn from_range(range: &Range<Data>) -> Self {
        let Some((last_row, last_col)) = range.end() else {
            return Self::default();
        };
        let height = last_row as usize + 1;
        let width = last_col as usize + 1;

        let rows = (0..height)
            .map(|row| {
                (0..width)
                    .map(|col| {
                        range
                            .get_value((row as u32, col as u32))
                            .map(CellValue::from)
                            .unwrap_or(CellValue::Empty)
                    })
                    .collect()
            })
            .collect();

        Self { rows, width }
    }

    /// Build a grid from literal rows; short rows are padded with empty cells
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Empty);
                row
            })
            .collect();
        Self { rows, width }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whole row, or an error naming the 1-based row when it is past the end
    pub fn row(&self, row: usize) -> Result<&[CellValue], String> {
        self.rows
            .get(row)
            .map(Vec::as_slice)
            .ok_or_else(|| format!("row {} is out of range (sheet has {} rows)", row + 1, self.height()))
    }

    /// Single cell; positions inside the row but past the width read as empty
    pub fn cell(&self, at: CellRef) -> Result<&CellValue, String> {
        let row = self.row(at.row)?;
        row.get(at.col)
            .ok_or_else(|| format!("cell {at} is out of range (sheet has {} columns)", self.width))
    }
}
