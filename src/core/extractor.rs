//! Single validation pass over the DRT sheet
//!
//! Every scalar field and orbital vector is read, and every failure is
//! recorded against its field name. Either a complete `DrtConfig` comes back
//! or one `DrtError::Extraction` listing everything that went wrong.

use crate::core::columns::ColumnSelection;
use crate::core::fields::{extract_point_group, extract_symmetry, spin_from_multiplicity};
use crate::error::{DrtError, DrtResult, FieldError};
use crate::excel::layout::{CellRef, DrtLayout};
use crate::excel::Grid;
use crate::types::{CellValue, DrtConfig, OrbitalVector};
use tracing::{debug, warn};

/// Reads fields off a loaded grid, collecting per-field failures
pub struct Extractor<'a> {
    grid: &'a Grid,
    layout: &'a DrtLayout,
    failures: Vec<FieldError>,
}

impl<'a> Extractor<'a> {
    pub fn new(grid: &'a Grid, layout: &'a DrtLayout) -> Self {
        Self {
            grid,
            layout,
            failures: Vec::new(),
        }
    }

    /// Run the pass and produce the configuration record
    pub fn extract(mut self, columns: &ColumnSelection) -> DrtResult<DrtConfig> {
        let layout = self.layout;

        let point_group = self.field("group_symmetry", layout.point_group, extract_point_group);
        let num_electrons = self.field("num_electrons", layout.num_electrons, |cell| {
            Ok(cell.to_integer()?)
        });
        let spin_state = self.field("spin_state", layout.multiplicity, spin_from_multiplicity);
        let spatial_symmetry =
            self.field("spatial_symmetry", layout.spatial_symmetry, extract_symmetry);
        let num_unique_atoms = self.field("num_unique_atoms", layout.num_unique_atoms, |cell| {
            Ok(cell.to_integer()?)
        });

        let orbitals = OrbitalVector::ALL.map(|vector| self.orbital(vector, columns));

        let config = match (
            point_group,
            num_electrons,
            spin_state,
            spatial_symmetry,
            num_unique_atoms,
        ) {
            (
                Some(point_group),
                Some(num_electrons),
                Some(spin_state),
                Some(spatial_symmetry),
                Some(num_unique_atoms),
            ) if self.failures.is_empty() => DrtConfig {
                point_group,
                num_electrons,
                spin_state,
                spatial_symmetry,
                num_unique_atoms,
                orbitals: orbitals.map(Option::unwrap_or_default),
            },
            _ => {
                warn!(failures = self.failures.len(), "extraction failed");
                return Err(DrtError::Extraction(self.failures));
            }
        };

        debug!(?config, "extracted DRT configuration");
        Ok(config)
    }

    fn field<T>(
        &mut self,
        name: &'static str,
        at: CellRef,
        parse: impl FnOnce(&CellValue) -> DrtResult<T>,
    ) -> Option<T> {
        let result = self
            .grid
            .cell(at)
            .map_err(|reason| FieldError::new(name, reason))
            .and_then(|cell| parse(cell).map_err(|e| FieldError::new(name, describe(&e, at))));

        match result {
            Ok(value) => Some(value),
            Err(failure) => {
                self.failures.push(failure);
                None
            }
        }
    }

    fn orbital(&mut self, vector: OrbitalVector, columns: &ColumnSelection) -> Option<String> {
        match self.grid.row(self.layout.orbital_row(vector)) {
            Ok(row) => Some(columns.join_row(row)),
            Err(reason) => {
                self.failures.push(FieldError::new(vector.name(), reason));
                None
            }
        }
    }
}

/// Failure text without the error-kind prefix, tagged with the cell it came from
fn describe(err: &DrtError, at: CellRef) -> String {
    match err {
        DrtError::Validation(message) => format!("{message} (cell {at})"),
        other => format!("{other} (cell {at})"),
    }
}

/// Convenience wrapper: one extraction pass with a fresh `Extractor`
pub fn extract_config(
    grid: &Grid,
    layout: &DrtLayout,
    columns: &ColumnSelection,
) -> DrtResult<DrtConfig> {
    Extractor::new(grid, layout).extract(columns)
}
