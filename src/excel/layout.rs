//! Fixed cell positions of the DRT worksheet
//!
//! Every hard-coded row/column the extractor reads lives here, so the sheet
//! layout can be audited in one place. Positions are zero-based; `CellRef`
//! displays them in A1 notation for error messages.

use crate::types::OrbitalVector;
use std::fmt;

/// Zero-based (row, column) position on the worksheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letter(self.col), self.row + 1)
    }
}

/// Convert column index to Excel column letter (0→A, 1→B, 25→Z, 26→AA, etc.)
pub fn column_letter(n: usize) -> String {
    let mut result = String::new();
    let mut num = n;

    loop {
        let remainder = num % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if num < 26 {
            break;
        }
        num = num / 26 - 1;
    }

    result
}

/// Where each value lives on the DRT sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrtLayout {
    /// Free text ending in the point group token (A1)
    pub point_group: CellRef,
    /// Row holding orbital column headers (row 3)
    pub header_row: usize,
    /// First column scanned for orbital headers (C)
    pub first_orbital_col: usize,
    pub multiplicity: CellRef,
    pub num_electrons: CellRef,
    /// Symmetry label such as "B1 (2)"
    pub spatial_symmetry: CellRef,
    pub num_unique_atoms: CellRef,
    /// Source row of each orbital vector, in output order
    pub orbital_rows: [(OrbitalVector, usize); 9],
}

impl DrtLayout {
    pub const STANDARD: DrtLayout = DrtLayout {
        point_group: CellRef::new(0, 0),
        header_row: 2,
        first_orbital_col: 2,
        multiplicity: CellRef::new(18, 1),
        num_electrons: CellRef::new(18, 2),
        spatial_symmetry: CellRef::new(18, 3),
        num_unique_atoms: CellRef::new(18, 4),
        orbital_rows: [
            (OrbitalVector::ScfDocc, 3),
            (OrbitalVector::ScfOpsh, 4),
            (OrbitalVector::McscfDocc, 5),
            (OrbitalVector::McscfCas, 7),
            (OrbitalVector::MrciFc, 9),
            (OrbitalVector::MrciFv, 10),
            (OrbitalVector::MrciDocc, 11),
            (OrbitalVector::MrciAux, 13),
            (OrbitalVector::MrciInt, 14),
        ],
    };

    pub fn orbital_row(&self, vector: OrbitalVector) -> usize {
        self.orbital_rows[vector as usize].1
    }
}

impl Default for DrtLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}
