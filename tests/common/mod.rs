//! Shared DRT workbook fixtures, written with rust_xlsxwriter

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum Cell {
    Text(&'static str),
    Number(f64),
}

/// Sparse worksheet description: (row, col, value), zero-based
#[derive(Debug, Clone, Default)]
pub struct DrtSheet {
    pub cells: Vec<(u32, u16, Cell)>,
}

impl DrtSheet {
    pub fn set(mut self, row: u32, col: u16, cell: Cell) -> Self {
        self.cells.retain(|(r, c, _)| !(*r == row && *c == col));
        self.cells.push((row, col, cell));
        self
    }

    pub fn clear(mut self, row: u32, col: u16) -> Self {
        self.cells.retain(|(r, c, _)| !(*r == row && *c == col));
        self
    }

    /// A C2v triplet sheet with orbital headers in C and D only
    pub fn sample() -> Self {
        let mut sheet = DrtSheet::default()
            .set(0, 0, Cell::Text("DRT Point Group C2V"))
            .set(2, 1, Cell::Text("Irrep"))
            .set(2, 2, Cell::Text("a1"))
            .set(2, 3, Cell::Text("b1"))
            .set(18, 0, Cell::Text("State"))
            .set(18, 1, Cell::Number(3.0))
            .set(18, 2, Cell::Number(2.0))
            .set(18, 3, Cell::Text("B1 (2)"))
            .set(18, 4, Cell::Number(5.0));

        let labels = [
            (3, "SCF docc"),
            (4, "SCF opsh"),
            (5, "MCSCF docc"),
            (7, "MCSCF cas"),
            (9, "MRCI fc"),
            (10, "MRCI fv"),
            (11, "MRCI docc"),
            (13, "MRCI aux"),
            (14, "MRCI int"),
        ];
        for (offset, (row, label)) in labels.into_iter().enumerate() {
            sheet = sheet
                .set(row, 0, Cell::Text(label))
                .set(row, 2, Cell::Number(offset as f64))
                .set(row, 3, Cell::Number(offset as f64 + 10.0))
                // Column E has no header and must never appear in the output
                .set(row, 4, Cell::Number(99.0));
        }
        sheet
    }

    pub fn save(&self, path: &Path) {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (row, col, cell) in &self.cells {
            match cell {
                Cell::Text(s) => {
                    worksheet.write_string(*row, *col, *s).unwrap();
                }
                Cell::Number(n) => {
                    worksheet.write_number(*row, *col, *n).unwrap();
                }
            }
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        workbook.save(path).unwrap();
    }
}

/// Expected output document for `DrtSheet::sample()`
pub const SAMPLE_OUTPUT: &str = "\
#======================
# INPUT VALUES
#======================
set num_unique_atoms 5
set group_symmetry \"c2v\"
set spatial_symmetry 2

# FROM DRT TABLE
#===========================
set spin_state \"Triplet\"
set num_electrons 2
set scf_docc \"0 10\"
set scf_opsh \"1 11\"
set mcscf_docc \"2 12\"
set mcscf_cas \"3 13\"
set mrci_fc \"4 14\"
set mrci_fv \"5 15\"
set mrci_docc \"6 16\"
set mrci_aux \"7 17\"
set mrci_int \"8 18\"";
